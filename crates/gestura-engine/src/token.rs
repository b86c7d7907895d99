//! Utterance tokenization
//!
//! Words are alphanumeric runs with one internal apostrophe segment kept,
//! so possessives and contractions stay whole ("i'm", "you've"). Text is
//! lower-cased for matching; indices are zero-based speech order and stay
//! aligned with the original word positions.

use gestura_core::{Language, TrackTime};

/// One word of an utterance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Zero-based position in speech order.
    pub index: usize,
    /// Lower-cased word text.
    pub text: String,
}

/// A tokenized utterance with derived word timing.
#[derive(Clone, Debug)]
pub struct Utterance {
    /// Raw input text, as the collaborators saw it.
    pub text: String,
    pub tokens: Vec<Token>,
    pub language: Language,
}

impl Utterance {
    /// Tokenize `text` and derive per-word timing for `language`.
    pub fn analyze(text: &str, language: Language) -> Self {
        Utterance {
            text: text.to_string(),
            tokens: tokenize(text),
            language,
        }
    }

    pub fn word_count(&self) -> usize {
        self.tokens.len()
    }

    /// Seconds one word occupies at this language's speech rate.
    pub fn word_seconds(&self) -> f64 {
        self.language.seconds_per_word()
    }

    /// Total time the utterance takes to speak.
    pub fn speech_duration(&self) -> TrackTime {
        TrackTime::from_secs_f64(self.word_count() as f64 * self.word_seconds())
    }

    /// Nominal onset of the word at `index`.
    pub fn word_onset(&self, index: usize) -> TrackTime {
        TrackTime::from_secs_f64(index as f64 * self.word_seconds())
    }

    /// Lower-cased text of the word at `index`, if in range.
    pub fn word(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(|token| token.text.as_str())
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split into lower-cased word tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    let lower = text.to_lowercase();
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut joined = false;

    let mut flush = |current: &mut String, tokens: &mut Vec<Token>| {
        if !current.is_empty() {
            tokens.push(Token {
                index: tokens.len(),
                text: std::mem::take(current),
            });
        }
    };

    let mut chars = lower.chars().peekable();
    while let Some(c) = chars.next() {
        if is_word_char(c) {
            current.push(c);
        } else if c == '\''
            && !joined
            && !current.is_empty()
            && chars.peek().copied().is_some_and(is_word_char)
        {
            // one apostrophe segment per word, never leading or trailing
            current.push(c);
            joined = true;
        } else {
            flush(&mut current, &mut tokens);
            joined = false;
        }
    }
    flush(&mut current, &mut tokens);

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        tokenize(text).into_iter().map(|token| token.text).collect()
    }

    #[test]
    fn test_basic_split_and_lowercase() {
        assert_eq!(
            words("Hallo ik ben een robot"),
            vec!["hallo", "ik", "ben", "een", "robot"]
        );
    }

    #[test]
    fn test_indices_are_speech_order() {
        let tokens = tokenize("one two three");
        let indices: Vec<usize> = tokens.iter().map(|token| token.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_contractions_stay_whole() {
        assert_eq!(words("I'm sure you've seen it"), vec![
            "i'm", "sure", "you've", "seen", "it"
        ]);
    }

    #[test]
    fn test_quotes_are_not_contractions() {
        assert_eq!(words("zeg 'doei' of 'stop'"), vec!["zeg", "doei", "of", "stop"]);
    }

    #[test]
    fn test_punctuation_splits_words() {
        assert_eq!(words("ja/nee-vragen, graag!"), vec!["ja", "nee", "vragen", "graag"]);
    }

    #[test]
    fn test_empty_and_symbol_only_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("?! ... --").is_empty());
    }

    #[test]
    fn test_speech_duration_scales_with_word_count() {
        let utterance = Utterance::analyze("hallo ik ben een robot", Language::Dutch);
        assert_eq!(utterance.word_count(), 5);
        assert_eq!(utterance.speech_duration(), TrackTime::from_millis(1554));
        assert_eq!(utterance.word_onset(3), TrackTime::from_millis(933));
    }

    #[test]
    fn test_word_lookup() {
        let utterance = Utterance::analyze("Hallo robot", Language::Dutch);
        assert_eq!(utterance.word(0), Some("hallo"));
        assert_eq!(utterance.word(2), None);
    }
}
