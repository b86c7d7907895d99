//! Grammatical channel seam
//!
//! People emphasize nouns, verbs, adjectives and adverbs; tagging them is
//! an external collaborator's job. What stays here is the stop-word
//! filter applied on top of the tagger's output: function words never get
//! a gesture, whatever the tagger says about them. The Dutch and English
//! sets are combined because the robot mixes both in one session.

use gestura_engine::{CandidateSource, StressCandidate, Utterance};

/// External part-of-speech tagger.
pub trait GrammaticalSource {
    /// Content words of the utterance as ascending `(index, word)`
    /// pairs.
    async fn content_words(&self, utterance: &Utterance) -> Vec<(usize, String)>;
}

const STOP_WORDS_EN: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "if", "then", "so", "of", "to", "in", "on", "at", "by",
    "for", "with", "from", "as", "is", "am", "are", "was", "were", "be", "been", "being", "do",
    "does", "did", "have", "has", "had", "will", "would", "can", "could", "shall", "should",
    "this", "that", "these", "those", "it", "its", "not", "no", "too", "very", "there", "here",
];

const STOP_WORDS_NL: &[&str] = &[
    "de", "het", "een", "en", "of", "maar", "als", "dan", "dus", "van", "naar", "in", "op", "bij",
    "voor", "met", "uit", "om", "aan", "is", "ben", "bent", "zijn", "was", "waren", "word",
    "wordt", "worden", "heb", "hebt", "heeft", "hebben", "had", "hadden", "zal", "zul", "zou",
    "kan", "kun", "kon", "dit", "dat", "deze", "die", "er", "hier", "daar", "niet", "geen", "ook",
    "wel", "heel", "te",
];

/// Whether `word` (lower-cased) is a function word in either language.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS_EN.contains(&word) || STOP_WORDS_NL.contains(&word)
}

/// Ask the tagger and strip the stop words from its answer.
pub async fn grammatical_candidates<G: GrammaticalSource>(
    source: &G,
    utterance: &Utterance,
) -> Vec<StressCandidate> {
    source
        .content_words(utterance)
        .await
        .into_iter()
        .filter(|(_, word)| !is_stop_word(&word.to_lowercase()))
        .map(|(index, word)| StressCandidate::new(index, word, CandidateSource::Grammatical))
        .collect()
}

/// Convenience for tests and offline runs: no grammatical channel.
pub struct SilentTagger;

impl GrammaticalSource for SilentTagger {
    async fn content_words(&self, _utterance: &Utterance) -> Vec<(usize, String)> {
        Vec::new()
    }
}
