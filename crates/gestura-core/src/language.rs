//! Language table
//!
//! Word timing rests on a per-language speech-rate constant measured from
//! recorded sessions. Only Dutch and English are calibrated; any other
//! tag is a configuration error.

use std::str::FromStr;

use crate::GestureError;

/// A calibrated speech language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    Dutch,
    English,
}

impl Language {
    /// Estimated seconds one spoken word occupies.
    pub fn seconds_per_word(self) -> f64 {
        match self {
            Language::Dutch => 0.31088476361070403,
            Language::English => 0.340211161387632,
        }
    }

    /// BCP-47-ish tag the collaborators speak.
    pub fn tag(self) -> &'static str {
        match self {
            Language::Dutch => "nl",
            Language::English => "en",
        }
    }
}

impl FromStr for Language {
    type Err = GestureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nl" => Ok(Language::Dutch),
            "en" => Ok(Language::English),
            other => Err(GestureError::InvalidLanguage(other.to_string())),
        }
    }
}
