//! Semantic oracle seam
//!
//! An external language model picks the words that carry meaning or
//! emotion. The call itself is network I/O and belongs to the
//! collaborator; what lives here is the prompt and the defensive parsing
//! of whatever comes back. Replies are messy: extra lines, punctuation,
//! or the words themselves instead of positions. Everything unusable is
//! dropped rather than surfaced.

use gestura_engine::{tokenize, CandidateSource, StressCandidate, Utterance};

/// External ranking service.
pub trait SemanticOracle {
    /// Send a prompt, return the raw completion text. `None` means the
    /// service was unavailable; the utterance then goes out without
    /// semantic candidates.
    async fn complete(&self, prompt: &str) -> Option<String>;
}

/// The ranking prompt for one utterance.
pub fn ranking_prompt(text: &str) -> String {
    format!(
        "Identify the MOST IMPORTANT words that should be emphasized with a small \
         arm or head movement in this text: {text}. \
         Select at most 1 word per 9 words. Focus on words that carry key meaning or emotion. \
         Do NOT emphasize common nouns, generic verbs, or function words. \
         Return only a comma-separated list of their positions in the text starting from 0."
    )
}

/// Parse the oracle's reply into ascending semantic candidates.
///
/// Only the first line counts. If every field parses as an integer those
/// are taken as word positions; otherwise the fields are treated as the
/// words themselves and matched against the utterance (first match
/// wins). Out-of-range positions are dropped here, before the engine
/// ever sees them.
pub fn parse_ranking_reply(reply: &str, utterance: &Utterance) -> Vec<StressCandidate> {
    let first_line = reply.lines().next().unwrap_or("");
    let fields = tokenize(first_line);

    let parsed: Result<Vec<usize>, _> = fields
        .iter()
        .map(|field| field.text.parse::<usize>())
        .collect();

    let mut positions = match parsed {
        Ok(positions) => positions,
        Err(_) => {
            // the model answered with words; recover their positions
            fields
                .iter()
                .filter_map(|field| {
                    utterance
                        .tokens
                        .iter()
                        .find(|token| token.text == field.text)
                        .map(|token| token.index)
                })
                .collect()
        }
    };

    positions.retain(|&position| position < utterance.word_count());
    positions.sort_unstable();

    positions
        .into_iter()
        .filter_map(|position| utterance.tokens.get(position))
        .map(|token| {
            StressCandidate::new(token.index, token.text.clone(), CandidateSource::Semantic)
        })
        .collect()
}

/// Ask the oracle about an utterance and parse its reply.
pub async fn semantic_candidates<O: SemanticOracle>(
    oracle: &O,
    utterance: &Utterance,
) -> Vec<StressCandidate> {
    match oracle.complete(&ranking_prompt(&utterance.text)).await {
        Some(reply) => parse_ranking_reply(&reply, utterance),
        None => {
            tracing::warn!("semantic oracle unavailable, continuing without its candidates");
            Vec::new()
        }
    }
}

/// Convenience for tests and offline runs: no semantic channel at all.
pub struct SilentOracle;

impl SemanticOracle for SilentOracle {
    async fn complete(&self, _prompt: &str) -> Option<String> {
        None
    }
}
