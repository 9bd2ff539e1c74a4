//! Core data models used throughout AlgoMate.
//!
//! These types represent the document chunks, ranked retrieval results, and
//! per-request chat exchanges that flow through the question-answering
//! pipeline.

use serde::Serialize;

/// A bounded-size slice of the curriculum document's text, ordered by
/// original position. The chunk collection is rebuilt wholesale on every
/// (re-)initialization and never merged incrementally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub index: usize,
    pub text: String,
}

/// A chunk scored against a question. Ephemeral — derived per query,
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedChunk {
    pub text: String,
    /// Count of distinct lowercase word tokens shared with the question.
    pub similarity: usize,
    /// Index of the chunk in the original document order.
    pub source_index: usize,
}

/// Where an answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerSource {
    /// The external completion service produced the answer.
    ExternalModel,
    /// The local rule-based responder produced the answer because the
    /// external call failed.
    LocalFallback,
}

/// The result of answering a single question.
#[derive(Debug, Clone)]
pub struct ChatExchange {
    pub question: String,
    pub answer: String,
    pub source: AnswerSource,
    /// Number of relevant chunks found. `Some` only on the
    /// retrieval-augmented path (zero when no chunk matched); `None` on the
    /// direct path, which skips retrieval entirely.
    pub relevant_chunks: Option<usize>,
}

impl ChatExchange {
    /// Human-readable source label exposed to API callers.
    pub fn source_label(&self) -> &'static str {
        match (self.source, self.relevant_chunks) {
            (AnswerSource::LocalFallback, _) => "Local Knowledge Base",
            (AnswerSource::ExternalModel, Some(_)) => "RAG System",
            (AnswerSource::ExternalModel, None) => "Direct API",
        }
    }
}

/// Outcome of (re-)initializing the chunk store, reported by the health
/// endpoint and the `inspect` command.
#[derive(Debug, Clone, Serialize)]
pub struct IndexStatus {
    pub ok: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exchange(source: AnswerSource, relevant_chunks: Option<usize>) -> ChatExchange {
        ChatExchange {
            question: "q".to_string(),
            answer: "a".to_string(),
            source,
            relevant_chunks,
        }
    }

    #[test]
    fn test_source_labels() {
        assert_eq!(
            exchange(AnswerSource::ExternalModel, Some(2)).source_label(),
            "RAG System"
        );
        assert_eq!(
            exchange(AnswerSource::ExternalModel, Some(0)).source_label(),
            "RAG System"
        );
        assert_eq!(
            exchange(AnswerSource::ExternalModel, None).source_label(),
            "Direct API"
        );
        assert_eq!(
            exchange(AnswerSource::LocalFallback, Some(1)).source_label(),
            "Local Knowledge Base"
        );
        assert_eq!(
            exchange(AnswerSource::LocalFallback, None).source_label(),
            "Local Knowledge Base"
        );
    }
}
