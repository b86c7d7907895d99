//! Gestura Engine - Gesture synchronization for spoken text
//!
//! The engine turns an utterance into a time-synchronized keyframe track:
//! which words deserve emphasis, which gesture each one gets, and when
//! every keyframe must fire so that motion neither overlaps, outruns the
//! speech, nor leaves a joint axis unspecified.
//!
//! Data flows one way through pure, synchronous stages:
//!
//! ```text
//! tokenize → select stress words → assign gestures → compile timeline → complete frames
//! ```
//!
//! Nothing here blocks or retries. Candidate ranking and playback are
//! collaborators on the far side of this crate; both candidate lists must
//! be fully materialized before compilation begins.

pub mod token;
pub mod candidate;
pub mod selector;
pub mod assign;
pub mod timeline;
pub mod complete;
pub mod pipeline;

pub use token::*;
pub use candidate::*;
pub use selector::*;
pub use assign::*;
pub use timeline::*;
pub use complete::*;
pub use pipeline::*;
