//! Frame completion
//!
//! The playback collaborator needs every joint on every keyframe, however
//! partial the authored template was. Completion overlays each frame's
//! delta on the neutral pose; it cannot fail, and completing an
//! already-complete track changes nothing.

use gestura_core::{Pose, TrackTime};

use crate::PartialFrame;

/// A single timed, fully-specified pose.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframe {
    pub at: TrackTime,
    pub pose: Pose,
}

/// The complete ordered output for one utterance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameTrack {
    pub frames: Vec<Keyframe>,
}

impl FrameTrack {
    pub fn new(frames: Vec<Keyframe>) -> Self {
        FrameTrack { frames }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Time of the final keyframe, if any.
    pub fn last_time(&self) -> Option<TrackTime> {
        self.frames.last().map(|frame| frame.at)
    }

    /// Times never decrease in emission order.
    pub fn is_monotonic(&self) -> bool {
        self.frames.windows(2).all(|pair| pair[0].at <= pair[1].at)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Keyframe> {
        self.frames.iter()
    }
}

/// Overlay every frame's joints on the rest pose.
pub fn complete_frames(track: &[PartialFrame], rest: &Pose) -> FrameTrack {
    FrameTrack {
        frames: track
            .iter()
            .map(|frame| Keyframe {
                at: frame.at,
                pose: rest.overlay(&frame.delta),
            })
            .collect(),
    }
}
