//! Track time
//!
//! Keyframe times are milliseconds since utterance start. Within one
//! track they are non-decreasing in emission order; the compiler audits
//! that invariant before a track leaves the engine.

use std::fmt;
use std::ops::{Add, Sub};

/// A point on an utterance's timeline, milliseconds since speech onset.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TrackTime(pub i64);

impl TrackTime {
    pub const ZERO: TrackTime = TrackTime(0);

    #[inline]
    pub fn from_millis(millis: i64) -> Self {
        TrackTime(millis)
    }

    #[inline]
    pub fn from_secs_f64(secs: f64) -> Self {
        TrackTime((secs * 1000.0).round() as i64)
    }

    #[inline]
    pub fn as_millis(self) -> i64 {
        self.0
    }

    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / 1000.0
    }
}

impl Add<TrackTime> for TrackTime {
    type Output = TrackTime;

    #[inline]
    fn add(self, rhs: TrackTime) -> Self::Output {
        TrackTime(self.0 + rhs.0)
    }
}

impl Sub<TrackTime> for TrackTime {
    type Output = TrackTime;

    #[inline]
    fn sub(self, rhs: TrackTime) -> Self::Output {
        TrackTime(self.0 - rhs.0)
    }
}

impl fmt::Debug for TrackTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t({}ms)", self.0)
    }
}
