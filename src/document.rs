//! Document source abstraction.
//!
//! The chat engine never reads files itself; it consumes a
//! [`DocumentSource`] that yields the curriculum's raw text. The standard
//! implementation reads a file from disk and extracts PDF text when the
//! extension calls for it; tests substitute an in-memory source.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Supplier of the raw curriculum text.
pub trait DocumentSource: Send + Sync {
    fn load_text(&self) -> Result<String>;
}

/// Loads the document from a file, extracting text from PDFs and reading
/// anything else as UTF-8 plain text.
pub struct FileDocumentSource {
    path: PathBuf,
}

impl FileDocumentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn is_pdf(path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false)
    }
}

impl DocumentSource for FileDocumentSource {
    fn load_text(&self) -> Result<String> {
        if !self.path.exists() {
            anyhow::bail!("Document file not found: {}", self.path.display());
        }

        if Self::is_pdf(&self.path) {
            pdf_extract::extract_text(&self.path)
                .with_context(|| format!("Failed to extract PDF text: {}", self.path.display()))
        } else {
            std::fs::read_to_string(&self.path)
                .with_context(|| format!("Failed to read document: {}", self.path.display()))
        }
    }
}

/// Fixed in-memory document, used by tests and the `inspect` dry runs.
pub struct StaticDocumentSource {
    text: String,
}

impl StaticDocumentSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl DocumentSource for StaticDocumentSource {
    fn load_text(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}
