//! Pose and pose-delta primitives
//!
//! A `Pose` is complete by construction: one angle per joint axis, so a
//! keyframe built from a `Pose` can never leave an axis unspecified.
//! Gesture templates carry `PoseDelta`s, which name only the joints they
//! move; the frame completer overlays a delta on the rest pose.

use crate::Joint;

/// Complete pose: one angle per joint axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Pose {
    angles: [f32; Joint::COUNT],
}

impl Pose {
    /// The neutral stand.
    pub fn rest() -> Self {
        let mut angles = [0.0; Joint::COUNT];
        for joint in Joint::ALL {
            angles[joint.index()] = joint.rest_angle();
        }
        Pose { angles }
    }

    #[inline]
    pub fn angle(&self, joint: Joint) -> f32 {
        self.angles[joint.index()]
    }

    #[inline]
    pub fn set(&mut self, joint: Joint, angle: f32) {
        self.angles[joint.index()] = angle;
    }

    /// Copy of this pose with `delta` overlaid on top.
    pub fn overlay(&self, delta: &PoseDelta) -> Pose {
        let mut pose = self.clone();
        for (joint, angle) in delta.iter() {
            pose.set(joint, angle);
        }
        pose
    }

    /// Iterate `(joint, angle)` pairs in pose-array order.
    pub fn iter(&self) -> impl Iterator<Item = (Joint, f32)> + '_ {
        Joint::ALL.iter().map(move |&joint| (joint, self.angle(joint)))
    }

    /// Delta that overrides every joint with this pose's angles.
    pub fn to_delta(&self) -> PoseDelta {
        let mut delta = PoseDelta::new();
        for (joint, angle) in self.iter() {
            delta.set(joint, angle);
        }
        delta
    }
}

impl Default for Pose {
    fn default() -> Self {
        Pose::rest()
    }
}

/// Partial pose: only the joints a template overrides.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PoseDelta {
    entries: Vec<(Joint, f32)>,
}

impl PoseDelta {
    pub fn new() -> Self {
        PoseDelta::default()
    }

    /// Builder form of [`set`](Self::set), for authoring template tables.
    pub fn with(mut self, joint: Joint, angle: f32) -> Self {
        self.set(joint, angle);
        self
    }

    /// Set the override for a joint. Last write wins.
    pub fn set(&mut self, joint: Joint, angle: f32) {
        if let Some(entry) = self.entries.iter_mut().find(|(j, _)| *j == joint) {
            entry.1 = angle;
        } else {
            self.entries.push((joint, angle));
        }
    }

    /// Override for a joint, if present.
    pub fn get(&self, joint: Joint) -> Option<f32> {
        self.entries
            .iter()
            .find(|(j, _)| *j == joint)
            .map(|&(_, angle)| angle)
    }

    /// Iterate `(joint, angle)` overrides in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Joint, f32)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
