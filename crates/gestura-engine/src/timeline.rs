//! Timeline compilation
//!
//! Converts scheduled gestures into an absolute keyframe track. The
//! compiler is the authority on timing: it settles idle stretches with a
//! neutral return, drops everything the speech window cannot fit,
//! re-checks word spacing, and audits that emission order never goes
//! backwards in time.

use gestura_core::{GestureError, GestureResult, Pose, PoseDelta, TrackTime};

use crate::{ScheduledGesture, Utterance};

/// Compiler tuning.
#[derive(Clone, Copy, Debug)]
pub struct CompilerConfig {
    /// Idle stretch after which a neutral return is inserted.
    pub neutral_return_threshold: TrackTime,
    /// How far before the next onset the neutral return lands.
    pub neutral_lead: TrackTime,
    /// Word-index spacing re-checked against the last emitted gesture.
    pub minimum_gap: usize,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        CompilerConfig {
            neutral_return_threshold: TrackTime::from_millis(325),
            neutral_lead: TrackTime::from_millis(325),
            minimum_gap: 6,
        }
    }
}

/// An absolute-time keyframe still carrying only the joints its gesture
/// moves. [`complete_frames`](crate::complete_frames) turns these into
/// full poses.
#[derive(Clone, Debug, PartialEq)]
pub struct PartialFrame {
    pub at: TrackTime,
    pub delta: PoseDelta,
}

/// Compile scheduled gestures into an absolute keyframe sequence.
///
/// `scheduled` must be ascending by word index, the order the selector
/// produces. The result's times are non-decreasing; a violation of that
/// is an engine defect and comes back as
/// [`GestureError::InvariantViolation`].
pub fn compile_track(
    scheduled: &[ScheduledGesture<'_>],
    utterance: &Utterance,
    rest: &Pose,
    config: &CompilerConfig,
) -> GestureResult<Vec<PartialFrame>> {
    debug_assert!(
        scheduled
            .windows(2)
            .all(|pair| pair[0].word_index <= pair[1].word_index),
        "scheduled gestures must be ascending by word index"
    );

    let speech_duration = utterance.speech_duration();
    let mut track: Vec<PartialFrame> = Vec::new();
    let mut last_word: Option<usize> = None;

    for gesture in scheduled {
        let onset = utterance.word_onset(gesture.word_index);

        // settle back to the stand over a long idle stretch
        let previous_at = track.last().map(|frame| frame.at);
        if let Some(previous_at) = previous_at {
            if previous_at + config.neutral_return_threshold < onset {
                track.push(PartialFrame {
                    at: (onset - config.neutral_lead).max(previous_at),
                    delta: rest.to_delta(),
                });
            }
        }

        // speech ends before this gesture would; nothing later fits either
        if onset + gesture.template.last_offset() > speech_duration {
            tracing::debug!(
                word_index = gesture.word_index,
                "gesture would outrun speech, truncating track"
            );
            break;
        }

        // the selector already spaces selections; the compiler re-checks
        // because it is the stage that must not violate the timeline
        if let Some(last) = last_word {
            if gesture.word_index.abs_diff(last) < config.minimum_gap {
                continue;
            }
        }

        for frame in gesture.template.frames() {
            track.push(PartialFrame {
                at: onset + frame.offset,
                delta: frame.delta.clone(),
            });
        }
        last_word = Some(gesture.word_index);
    }

    audit_monotonic(&track)?;
    Ok(track)
}

fn audit_monotonic(track: &[PartialFrame]) -> GestureResult<()> {
    for pair in track.windows(2) {
        if pair[1].at < pair[0].at {
            debug_assert!(
                false,
                "non-monotonic track: {:?} emitted after {:?}",
                pair[1].at, pair[0].at
            );
            return Err(GestureError::InvariantViolation(format!(
                "keyframe at {:?} emitted after {:?}",
                pair[1].at, pair[0].at
            )));
        }
    }
    Ok(())
}
