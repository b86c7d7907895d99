//! Iconic trigger vocabularies
//!
//! Trigger words are fixed per language; matching happens on the
//! lower-cased token text. The pose data behind each kind is
//! language-agnostic, only the vocabulary differs.

use gestura_core::Language;

/// The iconic gesture families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconicKind {
    /// Greetings and farewells: wave with the left arm.
    Greeting,
    /// First-person reference: point at itself.
    SelfReference,
    /// Second-person reference: point at the listener.
    Addressee,
}

impl IconicKind {
    pub const ALL: [IconicKind; 3] = [
        IconicKind::Greeting,
        IconicKind::SelfReference,
        IconicKind::Addressee,
    ];

    /// Trigger vocabulary for this kind in the given language.
    pub fn triggers(self, language: Language) -> &'static [&'static str] {
        match (self, language) {
            (IconicKind::Greeting, Language::English) => {
                &["hello", "hi", "hey", "goodbye", "bye", "welcome"]
            }
            (IconicKind::Greeting, Language::Dutch) => {
                &["hallo", "dag", "hai", "hoi", "hé", "doei", "doeg", "welkom"]
            }
            (IconicKind::SelfReference, Language::English) => {
                &["i", "me", "my", "mine", "myself", "i'm", "i'll", "i've"]
            }
            (IconicKind::SelfReference, Language::Dutch) => {
                &["ik", "mij", "mijn", "mezelf", "mijzelf"]
            }
            (IconicKind::Addressee, Language::English) => &[
                "you",
                "your",
                "yours",
                "yourself",
                "you're",
                "you'll",
                "you've",
            ],
            (IconicKind::Addressee, Language::Dutch) => {
                &["jij", "je", "jou", "jouw", "jezelf", "u", "uw", "uzelf", "jullie"]
            }
        }
    }

    /// Classify a lower-cased word, if it triggers an iconic gesture in
    /// this language.
    pub fn for_word(word: &str, language: Language) -> Option<IconicKind> {
        IconicKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.triggers(language).contains(&word))
    }
}
