//! Gesture templates - named keyframe sequences
//!
//! Template offsets are relative to the gesture onset; the timeline
//! compiler shifts them onto the absolute track. Frames are kept sorted
//! by offset at construction so downstream code can rely on order.

use gestura_core::{PoseDelta, TrackTime};

/// One relative keyframe within a template.
#[derive(Clone, Debug, PartialEq)]
pub struct TemplateFrame {
    /// Offset from the gesture onset.
    pub offset: TrackTime,
    /// Joints this frame moves.
    pub delta: PoseDelta,
}

impl TemplateFrame {
    pub fn new(offset: TrackTime, delta: PoseDelta) -> Self {
        TemplateFrame { offset, delta }
    }
}

/// Named, immutable sequence of relative keyframes.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureTemplate {
    name: String,
    frames: Vec<TemplateFrame>,
}

impl GestureTemplate {
    /// Build a template. Frames are sorted by offset.
    pub fn new(name: impl Into<String>, mut frames: Vec<TemplateFrame>) -> Self {
        frames.sort_by_key(|frame| frame.offset);
        GestureTemplate {
            name: name.into(),
            frames,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frames(&self) -> &[TemplateFrame] {
        &self.frames
    }

    /// Offset of the final keyframe: how long the gesture plays.
    pub fn last_offset(&self) -> TrackTime {
        self.frames
            .last()
            .map(|frame| frame.offset)
            .unwrap_or(TrackTime::ZERO)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gestura_core::Joint;

    #[test]
    fn test_frames_sorted_at_construction() {
        let template = GestureTemplate::new(
            "scrambled",
            vec![
                TemplateFrame::new(
                    TrackTime::from_millis(875),
                    PoseDelta::new().with(Joint::HeadPitch, 0.08),
                ),
                TemplateFrame::new(
                    TrackTime::from_millis(225),
                    PoseDelta::new().with(Joint::HeadPitch, -0.08),
                ),
            ],
        );

        let offsets: Vec<i64> = template
            .frames()
            .iter()
            .map(|frame| frame.offset.as_millis())
            .collect();
        assert_eq!(offsets, vec![225, 875]);
        assert_eq!(template.last_offset(), TrackTime::from_millis(875));
    }

    #[test]
    fn test_empty_template_plays_for_zero() {
        let template = GestureTemplate::new("nothing", vec![]);
        assert!(template.is_empty());
        assert_eq!(template.last_offset(), TrackTime::ZERO);
    }
}
