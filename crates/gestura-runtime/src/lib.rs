//! Gestura Runtime - Collaborator seams and orchestration
//!
//! The engine itself is pure and synchronous; everything that can block
//! lives behind the traits in this crate:
//! - [`SemanticOracle`]: the external model that ranks emphasis-worthy
//!   words (the transport is the collaborator's business, the prompt and
//!   the defensive reply parsing are ours)
//! - [`GrammaticalSource`]: the external content-word tagger (the
//!   stop-word filter on top of it is ours)
//! - [`MotionSink`]: speech and motion execution on the robot
//!
//! [`say_animated`] ties them together: resolve both candidate channels,
//! compile the plan, then speak and move concurrently.

#![allow(async_fn_in_trait)]

pub mod oracle;
pub mod grammatical;
pub mod playback;

pub use oracle::*;
pub use grammatical::*;
pub use playback::*;
