use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub document: DocumentConfig,
    #[serde(default)]
    pub chunking: ChunkingConfig,
    #[serde(default)]
    pub retrieval: RetrievalConfig,
    #[serde(default)]
    pub completion: CompletionConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DocumentConfig {
    /// Path to the curriculum document (`.pdf` or plain text).
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChunkingConfig {
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_chars: default_max_chars(),
        }
    }
}

fn default_max_chars() -> usize {
    500
}

#[derive(Debug, Deserialize, Clone)]
pub struct RetrievalConfig {
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
        }
    }
}

fn default_top_k() -> usize {
    3
}

#[derive(Debug, Deserialize, Clone)]
pub struct CompletionConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_api_url() -> String {
    "https://api.groq.com/openai/v1/chat/completions".to_string()
}
fn default_model() -> String {
    "openai/gpt-oss-120b".to_string()
}
fn default_temperature() -> f64 {
    0.7
}
fn default_max_tokens() -> u32 {
    800
}
fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:5000".to_string()
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    if config.chunking.max_chars == 0 {
        anyhow::bail!("chunking.max_chars must be > 0");
    }
    if config.retrieval.top_k == 0 {
        anyhow::bail!("retrieval.top_k must be >= 1");
    }
    if config.completion.api_url.is_empty() {
        anyhow::bail!("completion.api_url must not be empty");
    }
    if config.completion.model.is_empty() {
        anyhow::bail!("completion.model must not be empty");
    }
    if !(0.0..=2.0).contains(&config.completion.temperature) {
        anyhow::bail!("completion.temperature must be in [0.0, 2.0]");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [document]
            path = "curriculum.pdf"
            "#,
        )
        .unwrap();
        validate(&config).unwrap();
        assert_eq!(config.chunking.max_chars, 500);
        assert_eq!(config.retrieval.top_k, 3);
        assert_eq!(config.completion.max_tokens, 800);
        assert_eq!(config.completion.timeout_secs, 30);
        assert_eq!(config.server.bind, "0.0.0.0:5000");
    }

    #[test]
    fn test_overrides() {
        let config: Config = toml::from_str(
            r#"
            [document]
            path = "notes.txt"

            [chunking]
            max_chars = 120

            [retrieval]
            top_k = 5

            [completion]
            model = "llama-3.1-8b-instant"

            [server]
            bind = "127.0.0.1:8080"
            "#,
        )
        .unwrap();
        validate(&config).unwrap();
        assert_eq!(config.chunking.max_chars, 120);
        assert_eq!(config.retrieval.top_k, 5);
        assert_eq!(config.completion.model, "llama-3.1-8b-instant");
        assert_eq!(config.server.bind, "127.0.0.1:8080");
    }

    #[test]
    fn test_zero_max_chars_rejected() {
        let config: Config = toml::from_str(
            r#"
            [document]
            path = "curriculum.pdf"

            [chunking]
            max_chars = 0
            "#,
        )
        .unwrap();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_top_k_rejected() {
        let config: Config = toml::from_str(
            r#"
            [document]
            path = "curriculum.pdf"

            [retrieval]
            top_k = 0
            "#,
        )
        .unwrap();
        assert!(validate(&config).is_err());
    }
}
