//! Error types for the gesture engine

use thiserror::Error;

/// Gesture engine errors
#[derive(Error, Debug)]
pub enum GestureError {
    /// Unsupported language tag. Fatal to the call.
    #[error("unsupported language tag: {0:?} (expected \"nl\" or \"en\")")]
    InvalidLanguage(String),

    /// A catalog with no beat templates cannot animate anything. Fatal.
    #[error("beat gesture pool is empty")]
    EmptyGesturePool,

    /// A candidate source ranked a word outside the utterance. The
    /// candidate is dropped; the call continues.
    #[error("candidate index {index} outside utterance of {word_count} words")]
    IndexOutOfRange { index: usize, word_count: usize },

    /// The compiler produced a non-monotonic track. This is a defect in
    /// the engine, never an input condition.
    #[error("timeline invariant violated: {0}")]
    InvariantViolation(String),
}

/// Result type for gesture engine operations
pub type GestureResult<T> = Result<T, GestureError>;
