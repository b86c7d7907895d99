//! Stress candidates
//!
//! Two independently-ranked channels feed the selector: a semantic oracle
//! and a grammatical tagger. Both deliver ascending `(index, word)` pairs;
//! the channels may overlap but neither repeats an index within itself.

use gestura_core::GestureError;

/// Which channel ranked a candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CandidateSource {
    Semantic,
    Grammatical,
}

impl CandidateSource {
    /// The other channel.
    pub fn other(self) -> CandidateSource {
        match self {
            CandidateSource::Semantic => CandidateSource::Grammatical,
            CandidateSource::Grammatical => CandidateSource::Semantic,
        }
    }
}

/// One ranked word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StressCandidate {
    pub word_index: usize,
    /// Lower-cased word text.
    pub text: String,
    pub source: CandidateSource,
}

impl StressCandidate {
    pub fn new(word_index: usize, text: impl Into<String>, source: CandidateSource) -> Self {
        StressCandidate {
            word_index,
            text: text.into().to_lowercase(),
            source,
        }
    }
}

/// Order by index and drop candidates outside the utterance.
///
/// Out-of-range entries are a collaborator fault: each one is logged and
/// dropped, never fatal to the call.
pub fn sanitize(mut candidates: Vec<StressCandidate>, word_count: usize) -> Vec<StressCandidate> {
    candidates.retain(|candidate| {
        if candidate.word_index < word_count {
            true
        } else {
            tracing::warn!(
                "dropping candidate {:?}: {}",
                candidate.text,
                GestureError::IndexOutOfRange {
                    index: candidate.word_index,
                    word_count,
                }
            );
            false
        }
    });
    candidates.sort_by_key(|candidate| candidate.word_index);
    candidates
}
