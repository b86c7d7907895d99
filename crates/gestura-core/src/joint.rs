//! Joint axes of the gesture rig
//!
//! The rig is a small humanoid upper body: three head axes and two axes
//! per arm. Templates address joints by variant; the playback collaborator
//! addresses them by wire name.

use std::fmt;

/// A single controllable joint axis.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Joint {
    HeadYaw = 0,
    HeadRoll,
    HeadPitch,
    RightUpperPitch,
    RightLowerRoll,
    LeftUpperPitch,
    LeftLowerRoll,
}

impl Joint {
    /// Number of joint axes in the rig.
    pub const COUNT: usize = 7;

    /// All joints, in pose-array order.
    pub const ALL: [Joint; Joint::COUNT] = [
        Joint::HeadYaw,
        Joint::HeadRoll,
        Joint::HeadPitch,
        Joint::RightUpperPitch,
        Joint::RightLowerRoll,
        Joint::LeftUpperPitch,
        Joint::LeftLowerRoll,
    ];

    /// Name the playback collaborator addresses this axis by.
    pub fn wire_name(self) -> &'static str {
        match self {
            Joint::HeadYaw => "body.head.yaw",
            Joint::HeadRoll => "body.head.roll",
            Joint::HeadPitch => "body.head.pitch",
            Joint::RightUpperPitch => "body.arms.right.upper.pitch",
            Joint::RightLowerRoll => "body.arms.right.lower.roll",
            Joint::LeftUpperPitch => "body.arms.left.upper.pitch",
            Joint::LeftLowerRoll => "body.arms.left.lower.roll",
        }
    }

    /// Rest angle in the neutral stand, radians.
    #[inline]
    pub fn rest_angle(self) -> f32 {
        match self {
            Joint::HeadYaw => 0.0,
            Joint::HeadRoll => 0.0,
            Joint::HeadPitch => 0.08,
            Joint::RightUpperPitch => -0.4,
            Joint::RightLowerRoll => -1.0,
            Joint::LeftUpperPitch => -0.4,
            Joint::LeftLowerRoll => -1.0,
        }
    }

    /// Position in pose-array order.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Debug for Joint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

impl fmt::Display for Joint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}
