//! Gestura Catalog - The gesture template registry
//!
//! Gestures are pre-authored keyframe sequences, not computed motion.
//! Two pools exist:
//! - *iconic* gestures, keyed to fixed trigger vocabularies (a wave for
//!   greetings, pointing for I/you)
//! - *beat* gestures, generic emphasis movements drawn without semantic
//!   tie from a shuffled pool
//!
//! The catalog is built once at startup and read concurrently without
//! synchronization; nothing mutates it afterwards.

pub mod template;
pub mod triggers;
pub mod builtin;
pub mod catalog;

pub use template::*;
pub use triggers::*;
pub use catalog::*;
