//! Question-answering orchestrator.
//!
//! [`ChatEngine`] owns the lazily built chunk store and composes the
//! pipeline: validate the question, ensure chunks exist, rank them, build a
//! prompt context, call the completion service once, and substitute the
//! local fallback answer when that call fails.
//!
//! Per request the flow is: validating → retrieving → contextualizing →
//! calling-external → succeeded (external or fallback). The only
//! request-fatal failures are an empty question and a document that cannot
//! be loaded on first use; completion failures are always absorbed.

use std::sync::RwLock;

use crate::chunk::chunk_text;
use crate::completion::{ChatMessage, CompletionClient};
use crate::config::Config;
use crate::document::DocumentSource;
use crate::fallback;
use crate::models::{AnswerSource, ChatExchange, Chunk, IndexStatus};
use crate::rank::rank;

/// System instruction for the retrieval-augmented path.
const SYSTEM_PROMPT: &str = "You are a helpful AI assistant that explains concepts in a natural, conversational way. Respond like ChatGPT would - use plain text without markdown formatting, tables, or special characters. \n\nGuidelines:\n- Use natural, flowing language\n- Avoid markdown (#, *, |, etc.)\n- Don't use numbered lists with emojis\n- Be conversational and engaging\n- If the user greets you, respond naturally\n- Explain concepts clearly but conversationally\n- Use analogies and examples when helpful\n- Keep responses focused but natural\n\nRemember: You're having a conversation, not writing a textbook.";

/// System instruction for the direct (no-retrieval) path.
const DIRECT_SYSTEM_PROMPT: &str = "You are a helpful AI assistant that explains concepts in a natural, conversational way. Respond like ChatGPT would - use plain text without markdown formatting.";

/// Fixed header prefixed to the numbered context block.
const CONTEXT_HEADER: &str =
    "Here's some relevant information from our data structures curriculum:\n";

/// Request-fatal errors surfaced to the caller. Completion-service failures
/// never appear here — they degrade to a fallback answer instead.
#[derive(Debug)]
pub enum ChatError {
    /// The question was missing or empty (client error).
    EmptyQuestion,
    /// The document could not be loaded or parsed on first use
    /// (server error, retrieval path only).
    DocumentUnavailable(String),
}

impl std::fmt::Display for ChatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatError::EmptyQuestion => write!(f, "No question provided"),
            ChatError::DocumentUnavailable(reason) => {
                write!(f, "Error processing document: {}", reason)
            }
        }
    }
}

impl std::error::Error for ChatError {}

/// Lifecycle of the process-wide chunk collection.
enum ChunkState {
    Uninitialized,
    Ready(Vec<Chunk>),
    Failed(String),
}

/// The answer orchestrator. Owns the chunk store; document loading and the
/// completion call are injected collaborators.
pub struct ChatEngine {
    config: Config,
    source: Box<dyn DocumentSource>,
    client: Box<dyn CompletionClient>,
    chunks: RwLock<ChunkState>,
}

impl ChatEngine {
    pub fn new(
        config: Config,
        source: Box<dyn DocumentSource>,
        client: Box<dyn CompletionClient>,
    ) -> Self {
        Self {
            config,
            source,
            client,
            chunks: RwLock::new(ChunkState::Uninitialized),
        }
    }

    /// Load the document and rebuild the chunk collection wholesale.
    ///
    /// Safe to call concurrently: the full sequence is computed outside the
    /// lock and swapped in under a short write lock (last writer wins), so
    /// readers never observe a partially built collection. Calling it again
    /// replaces the collection, never merges.
    pub fn initialize(&self) -> IndexStatus {
        match self.rebuild_chunks() {
            Ok(count) => IndexStatus {
                ok: true,
                message: format!("Document processed successfully. Created {} chunks.", count),
            },
            Err(reason) => IndexStatus {
                ok: false,
                message: format!("Error processing document: {}", reason),
            },
        }
    }

    fn rebuild_chunks(&self) -> Result<usize, String> {
        let outcome = self
            .source
            .load_text()
            .map(|text| chunk_text(&text, self.config.chunking.max_chars));

        let mut state = self.chunks.write().unwrap_or_else(|e| e.into_inner());
        match outcome {
            Ok(chunks) => {
                let count = chunks.len();
                *state = ChunkState::Ready(chunks);
                Ok(count)
            }
            Err(err) => {
                let reason = format!("{err:#}");
                *state = ChunkState::Failed(reason.clone());
                Err(reason)
            }
        }
    }

    /// Ensure the chunk collection exists, building it on first use.
    /// A previous failure is retried; a fresh failure is request-fatal.
    fn ensure_chunks(&self) -> Result<(), ChatError> {
        {
            let state = self.chunks.read().unwrap_or_else(|e| e.into_inner());
            if matches!(*state, ChunkState::Ready(_)) {
                return Ok(());
            }
        }
        self.rebuild_chunks()
            .map(|_| ())
            .map_err(ChatError::DocumentUnavailable)
    }

    /// Snapshot of the current chunk collection (empty unless `Ready`).
    pub fn chunk_snapshot(&self) -> Vec<Chunk> {
        let state = self.chunks.read().unwrap_or_else(|e| e.into_inner());
        match &*state {
            ChunkState::Ready(chunks) => chunks.clone(),
            _ => Vec::new(),
        }
    }

    /// Answer a question with retrieval-augmented context.
    pub async fn answer_question(&self, question: &str) -> Result<ChatExchange, ChatError> {
        let question = validated(question)?;
        self.ensure_chunks()?;

        let ranked = {
            let state = self.chunks.read().unwrap_or_else(|e| e.into_inner());
            match &*state {
                ChunkState::Ready(chunks) => rank(question, chunks, self.config.retrieval.top_k),
                // Raced with a concurrent re-initialization that failed;
                // answer without context rather than erroring.
                _ => Vec::new(),
            }
        };

        let mut context = String::new();
        if !ranked.is_empty() {
            context.push_str(CONTEXT_HEADER);
            for (i, chunk) in ranked.iter().enumerate() {
                context.push_str(&format!("\n{}. {}\n", i + 1, chunk.text));
            }
        }

        let user_content = if context.is_empty() {
            format!("Question: {question}\n\nPlease provide a natural, conversational answer.")
        } else {
            format!(
                "Question: {question}\n\nContext: {context}\n\nPlease provide a natural, conversational answer."
            )
        };

        let messages = vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(user_content),
        ];

        let exchange = self
            .complete_or_fall_back(question, &messages, Some(ranked.len()))
            .await;
        Ok(exchange)
    }

    /// Answer a question without retrieval or context.
    pub async fn answer_directly(&self, question: &str) -> Result<ChatExchange, ChatError> {
        let question = validated(question)?;

        let messages = vec![
            ChatMessage::system(DIRECT_SYSTEM_PROMPT),
            ChatMessage::user(format!(
                "Question: {question}\n\nPlease provide a natural, conversational answer."
            )),
        ];

        let exchange = self.complete_or_fall_back(question, &messages, None).await;
        Ok(exchange)
    }

    /// Single decision point for the external-versus-fallback split. One
    /// attempt against the completion service; any failure is logged and
    /// converted into a local answer.
    async fn complete_or_fall_back(
        &self,
        question: &str,
        messages: &[ChatMessage],
        relevant_chunks: Option<usize>,
    ) -> ChatExchange {
        match self.client.complete(messages).await {
            Ok(answer) => ChatExchange {
                question: question.to_string(),
                answer,
                source: AnswerSource::ExternalModel,
                relevant_chunks,
            },
            Err(err) => {
                eprintln!("completion request failed, answering locally: {err:#}");
                ChatExchange {
                    question: question.to_string(),
                    answer: fallback::respond(question),
                    source: AnswerSource::LocalFallback,
                    relevant_chunks,
                }
            }
        }
    }
}

fn validated(question: &str) -> Result<&str, ChatError> {
    if question.trim().is_empty() {
        return Err(ChatError::EmptyQuestion);
    }
    Ok(question)
}
