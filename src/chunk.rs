//! Sentence-boundary text chunker.
//!
//! Splits document body text into [`Chunk`]s that respect a configurable
//! `max_chars` soft cap. Splitting occurs on sentence boundaries (`". "`)
//! so each chunk stays readable when quoted back as context.
//!
//! The cap is a seal-before-exceed policy: the moment appending the next
//! sentence would reach `max_chars`, the current buffer is sealed as a chunk
//! and the new sentence starts the next one. A chunk may therefore overrun
//! the cap by at most one sentence.

use crate::models::Chunk;

/// Split text into chunks on `". "` boundaries, respecting `max_chars`.
/// Returns chunks with contiguous indices starting at 0, in document order.
/// Empty input yields no chunks; input without the delimiter yields one.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<Chunk> {
    let mut chunks: Vec<Chunk> = Vec::new();
    if text.is_empty() {
        return chunks;
    }

    let mut current = String::new();

    for sentence in text.split(". ") {
        if current.len() + sentence.len() < max_chars {
            current.push_str(sentence);
            current.push_str(". ");
        } else {
            if !current.trim().is_empty() {
                push_chunk(&mut chunks, &current);
            }
            current = format!("{sentence}. ");
        }
    }

    if !current.trim().is_empty() {
        push_chunk(&mut chunks, &current);
    }

    chunks
}

fn push_chunk(chunks: &mut Vec<Chunk>, buf: &str) {
    let index = chunks.len();
    chunks.push(Chunk {
        index,
        text: buf.trim().to_string(),
    });
}
