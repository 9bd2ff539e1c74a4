//! Keyword-overlap relevance ranking.
//!
//! Scores chunks against a question by counting distinct shared lowercase
//! word tokens (set intersection, not multiset — repeated words do not
//! raise the score, and every token weighs the same). This is deliberately
//! simple: no term-frequency weighting and no stop-word handling.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Chunk, RankedChunk};

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid regex"));

/// Lowercase word-token set of a text.
fn tokenize(text: &str) -> HashSet<String> {
    WORD.find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Score `chunks` against `question` and return the best `top_k`.
///
/// Chunks sharing no token with the question are discarded. The result is
/// sorted by similarity descending; equal scores keep their original
/// relative chunk order (stable sort). Pure function — never mutates its
/// inputs and is deterministic for identical inputs.
pub fn rank(question: &str, chunks: &[Chunk], top_k: usize) -> Vec<RankedChunk> {
    if chunks.is_empty() {
        return Vec::new();
    }

    let question_words = tokenize(question);

    let mut ranked: Vec<RankedChunk> = chunks
        .iter()
        .filter_map(|chunk| {
            let chunk_words = tokenize(&chunk.text);
            let overlap = question_words.intersection(&chunk_words).count();
            if overlap > 0 {
                Some(RankedChunk {
                    text: chunk.text.clone(),
                    similarity: overlap,
                    source_index: chunk.index,
                })
            } else {
                None
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.similarity.cmp(&a.similarity));
    ranked.truncate(top_k);
    ranked
}
