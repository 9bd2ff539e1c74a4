//! # AlgoMate CLI (`algomate`)
//!
//! The `algomate` binary answers questions about a fixed data structures
//! curriculum document, either one-shot from the command line or as an
//! HTTP API.
//!
//! ## Usage
//!
//! ```bash
//! algomate --config ./config/algomate.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `algomate serve` | Start the HTTP API server |
//! | `algomate ask "<question>"` | Answer a single question and exit |
//! | `algomate inspect` | Chunk the document and print statistics |
//!
//! ## Examples
//!
//! ```bash
//! # Verify the document chunks cleanly
//! algomate inspect --config ./config/algomate.toml
//!
//! # Retrieval-augmented answer
//! algomate ask "what is a linked list"
//!
//! # Skip retrieval and ask the model directly
//! algomate ask "what is a linked list" --direct
//!
//! # Start the API on the configured bind address
//! algomate serve
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use algomate::completion::GroqClient;
use algomate::config::{self, Config};
use algomate::document::FileDocumentSource;
use algomate::engine::ChatEngine;
use algomate::server;

/// AlgoMate — a retrieval-augmented chatbot for a data structures
/// curriculum.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. See `config/algomate.example.toml` for a full example. The
/// completion service credential is read from the `GROQ_API_KEY`
/// environment variable.
#[derive(Parser)]
#[command(
    name = "algomate",
    about = "AlgoMate — a retrieval-augmented chatbot for a data structures curriculum",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/algomate.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server.
    ///
    /// Initializes the chunk store eagerly (a failure is reported but not
    /// fatal — chat degrades to the local responder) and binds the address
    /// configured in `[server].bind`.
    Serve,

    /// Answer a single question and print the result.
    Ask {
        /// The question to answer.
        question: String,

        /// Skip retrieval and ask the completion service directly.
        #[arg(long)]
        direct: bool,
    },

    /// Chunk the document and print statistics.
    ///
    /// Useful for verifying the document path and chunk sizing before
    /// serving. Does not contact the completion service.
    Inspect,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Serve => {
            let engine = Arc::new(build_engine(&cfg)?);
            let status = engine.initialize();
            if status.ok {
                println!("{}", status.message);
            } else {
                eprintln!("warning: {}", status.message);
            }
            server::run_server(&cfg, engine).await?;
        }
        Commands::Ask { question, direct } => {
            let engine = build_engine(&cfg)?;
            let exchange = if direct {
                engine.answer_directly(&question).await?
            } else {
                engine.answer_question(&question).await?
            };
            println!("{}", exchange.answer);
            println!();
            println!("  source: {}", exchange.source_label());
            if let Some(count) = exchange.relevant_chunks {
                println!("  relevant chunks: {}", count);
            }
        }
        Commands::Inspect => {
            let engine = build_engine_without_client(&cfg);
            let status = engine.initialize();
            if !status.ok {
                anyhow::bail!(status.message);
            }
            let chunks = engine.chunk_snapshot();
            println!("{}", status.message);
            if let (Some(min), Some(max)) = (
                chunks.iter().map(|c| c.text.len()).min(),
                chunks.iter().map(|c| c.text.len()).max(),
            ) {
                let total: usize = chunks.iter().map(|c| c.text.len()).sum();
                println!("  chunk length: min {} / max {} / mean {}", min, max, total / chunks.len());
            }
            for chunk in chunks.iter().take(3) {
                let preview: String = chunk.text.chars().take(72).collect();
                println!("  [{}] {}", chunk.index, preview);
            }
        }
    }

    Ok(())
}

fn build_engine(cfg: &Config) -> anyhow::Result<ChatEngine> {
    let source = FileDocumentSource::new(cfg.document.path.clone());
    let client = GroqClient::new(&cfg.completion)?;
    Ok(ChatEngine::new(cfg.clone(), Box::new(source), Box::new(client)))
}

/// Engine for commands that never call the completion service, so a
/// missing `GROQ_API_KEY` does not get in the way of inspection.
fn build_engine_without_client(cfg: &Config) -> ChatEngine {
    struct NoClient;

    #[async_trait::async_trait]
    impl algomate::completion::CompletionClient for NoClient {
        async fn complete(
            &self,
            _messages: &[algomate::completion::ChatMessage],
        ) -> anyhow::Result<String> {
            anyhow::bail!("completion service not configured")
        }
    }

    let source = FileDocumentSource::new(cfg.document.path.clone());
    ChatEngine::new(cfg.clone(), Box::new(source), Box::new(NoClient))
}
