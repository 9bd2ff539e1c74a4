//! # AlgoMate
//!
//! A retrieval-augmented chatbot for a fixed data structures curriculum.
//!
//! AlgoMate answers natural-language questions by chunking the curriculum
//! document, ranking chunks against the question with keyword overlap,
//! prompting an external chat-completion service with the best chunks as
//! context, and falling back to a local rule-based responder when the
//! external service is unreachable.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   ┌─────────┐   ┌────────┐   ┌────────────────┐
//! │ Document │──▶│ Chunker │──▶│ Ranker │──▶│  Chat Engine   │
//! │ PDF/text │   │ ". "    │   │ overlap│   │ prompt + call  │
//! └──────────┘   └─────────┘   └────────┘   └───┬────────┬───┘
//!                                               │        │
//!                                          completion  fallback
//!                                           service    responder
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! algomate inspect                 # chunk the document, print stats
//! algomate ask "what is a stack"   # one-shot answer
//! algomate serve                   # start the HTTP API
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Core data types |
//! | [`document`] | Document source abstraction (PDF, plain text) |
//! | [`chunk`] | Sentence-boundary chunking |
//! | [`rank`] | Keyword-overlap relevance ranking |
//! | [`fallback`] | Rule-based local responder |
//! | [`completion`] | Chat-completion service client |
//! | [`engine`] | Answer orchestration |
//! | [`server`] | HTTP API |

pub mod chunk;
pub mod completion;
pub mod config;
pub mod document;
pub mod engine;
pub mod fallback;
pub mod models;
pub mod rank;
pub mod server;
