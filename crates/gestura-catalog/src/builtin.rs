//! Builtin gesture library
//!
//! Pose data for the stock beat and iconic gestures, authored for a small
//! humanoid upper body. Keyframe offsets are authored in beat units and
//! resolved against [`BASE_BEAT_MS`], so the whole library can change
//! pace proportionally. Every gesture ends back in the neutral stand.

use gestura_core::{Joint, PoseDelta, TrackTime};

use crate::{GestureTemplate, TemplateFrame};

/// Milliseconds one authored beat unit resolves to.
pub const BASE_BEAT_MS: i64 = 500;

fn frame(beats: f64, delta: PoseDelta) -> TemplateFrame {
    TemplateFrame::new(
        TrackTime::from_millis((beats * BASE_BEAT_MS as f64).round() as i64),
        delta,
    )
}

/// The stock beat pool.
pub fn beat_pool() -> Vec<GestureTemplate> {
    vec![
        head_nod_with_arms(),
        head_tilt_with_arms(),
        head_to_right_with_arms(),
        head_to_left_with_arms(),
        arms_up_and_out(),
        head_up_arms_up(),
        lower_arms_out(),
    ]
}

// Head goes up and down, both arms rise a bit past the stand and settle
// a bit below it. Lower arms go a little in and out.
fn head_nod_with_arms() -> GestureTemplate {
    GestureTemplate::new(
        "nod with arms",
        vec![
            frame(
                0.45,
                PoseDelta::new()
                    .with(Joint::HeadPitch, -0.08)
                    .with(Joint::RightUpperPitch, -0.47)
                    .with(Joint::LeftUpperPitch, -0.47)
                    .with(Joint::RightLowerRoll, -0.9)
                    .with(Joint::LeftLowerRoll, -0.9),
            ),
            frame(
                1.1,
                PoseDelta::new()
                    .with(Joint::HeadPitch, 0.08)
                    .with(Joint::RightUpperPitch, -0.35)
                    .with(Joint::LeftUpperPitch, -0.35)
                    .with(Joint::RightLowerRoll, -1.1)
                    .with(Joint::LeftLowerRoll, -1.1),
            ),
            frame(
                1.75,
                PoseDelta::new()
                    .with(Joint::HeadPitch, 0.08)
                    .with(Joint::RightUpperPitch, -0.4)
                    .with(Joint::LeftUpperPitch, -0.4)
                    .with(Joint::RightLowerRoll, -1.0)
                    .with(Joint::LeftLowerRoll, -1.0),
            ),
        ],
    )
}

// Head slants toward the right shoulder while both arms rise past the
// stand. Lower arms go in and out.
fn head_tilt_with_arms() -> GestureTemplate {
    GestureTemplate::new(
        "head tilt with arms",
        vec![
            frame(
                0.45,
                PoseDelta::new()
                    .with(Joint::HeadRoll, 0.1)
                    .with(Joint::LeftUpperPitch, -0.45)
                    .with(Joint::RightUpperPitch, -0.47)
                    .with(Joint::RightLowerRoll, -0.9)
                    .with(Joint::LeftLowerRoll, -0.9),
            ),
            frame(
                1.1,
                PoseDelta::new()
                    .with(Joint::HeadRoll, 0.1)
                    .with(Joint::LeftUpperPitch, -0.35)
                    .with(Joint::RightUpperPitch, -0.35)
                    .with(Joint::RightLowerRoll, -1.2)
                    .with(Joint::LeftLowerRoll, -1.2),
            ),
            frame(
                1.75,
                PoseDelta::new()
                    .with(Joint::HeadRoll, 0.0)
                    .with(Joint::LeftUpperPitch, -0.4)
                    .with(Joint::RightUpperPitch, -0.4)
                    .with(Joint::RightLowerRoll, -1.0)
                    .with(Joint::LeftLowerRoll, -1.0),
            ),
        ],
    )
}

// Head turns from the middle to the right and back; arms a little above
// the stand.
fn head_to_right_with_arms() -> GestureTemplate {
    GestureTemplate::new(
        "head to right with arms",
        vec![
            frame(
                0.45,
                PoseDelta::new()
                    .with(Joint::HeadYaw, 0.3)
                    .with(Joint::RightLowerRoll, -1.0)
                    .with(Joint::LeftLowerRoll, -1.0)
                    .with(Joint::RightUpperPitch, -0.5)
                    .with(Joint::LeftUpperPitch, -0.5),
            ),
            frame(
                1.1,
                PoseDelta::new()
                    .with(Joint::HeadYaw, 0.3)
                    .with(Joint::RightLowerRoll, -1.2)
                    .with(Joint::LeftLowerRoll, -1.2)
                    .with(Joint::RightUpperPitch, -0.5)
                    .with(Joint::LeftUpperPitch, -0.5),
            ),
            frame(
                1.75,
                PoseDelta::new()
                    .with(Joint::HeadYaw, 0.0)
                    .with(Joint::RightLowerRoll, -1.0)
                    .with(Joint::LeftLowerRoll, -1.0)
                    .with(Joint::RightUpperPitch, -0.4)
                    .with(Joint::LeftUpperPitch, -0.4),
            ),
        ],
    )
}

// Mirror of the above, toward the left.
fn head_to_left_with_arms() -> GestureTemplate {
    GestureTemplate::new(
        "head to left with arms",
        vec![
            frame(
                0.45,
                PoseDelta::new()
                    .with(Joint::HeadYaw, -0.3)
                    .with(Joint::RightLowerRoll, -1.0)
                    .with(Joint::LeftLowerRoll, -1.0)
                    .with(Joint::RightUpperPitch, -0.5)
                    .with(Joint::LeftUpperPitch, -0.5),
            ),
            frame(
                1.1,
                PoseDelta::new()
                    .with(Joint::HeadYaw, -0.3)
                    .with(Joint::RightLowerRoll, -1.2)
                    .with(Joint::LeftLowerRoll, -1.2)
                    .with(Joint::RightUpperPitch, -0.5)
                    .with(Joint::LeftUpperPitch, -0.5),
            ),
            frame(
                1.75,
                PoseDelta::new()
                    .with(Joint::HeadYaw, 0.0)
                    .with(Joint::RightLowerRoll, -1.0)
                    .with(Joint::LeftLowerRoll, -1.0)
                    .with(Joint::RightUpperPitch, -0.4)
                    .with(Joint::LeftUpperPitch, -0.4),
            ),
        ],
    )
}

// Both arms go up beyond the belly button with lower arms a bit out.
fn arms_up_and_out() -> GestureTemplate {
    GestureTemplate::new(
        "arms up and out",
        vec![
            frame(
                0.45,
                PoseDelta::new()
                    .with(Joint::LeftUpperPitch, -0.57)
                    .with(Joint::RightUpperPitch, -0.57)
                    .with(Joint::RightLowerRoll, -1.0)
                    .with(Joint::LeftLowerRoll, -1.0),
            ),
            frame(
                1.1,
                PoseDelta::new()
                    .with(Joint::LeftUpperPitch, -0.45)
                    .with(Joint::RightUpperPitch, -0.45)
                    .with(Joint::RightLowerRoll, -1.15)
                    .with(Joint::LeftLowerRoll, -1.15),
            ),
            frame(
                1.75,
                PoseDelta::new()
                    .with(Joint::LeftUpperPitch, -0.4)
                    .with(Joint::RightUpperPitch, -0.4)
                    .with(Joint::RightLowerRoll, -1.0)
                    .with(Joint::LeftLowerRoll, -1.0),
            ),
        ],
    )
}

// Arms up beyond the belly button while the head lifts a little.
fn head_up_arms_up() -> GestureTemplate {
    GestureTemplate::new(
        "head up and arms up",
        vec![
            frame(
                0.45,
                PoseDelta::new()
                    .with(Joint::LeftUpperPitch, -0.57)
                    .with(Joint::RightUpperPitch, -0.57)
                    .with(Joint::HeadPitch, -0.08),
            ),
            frame(
                1.1,
                PoseDelta::new()
                    .with(Joint::LeftUpperPitch, -0.35)
                    .with(Joint::RightUpperPitch, -0.35)
                    .with(Joint::HeadPitch, -0.08),
            ),
            frame(
                1.75,
                PoseDelta::new()
                    .with(Joint::LeftUpperPitch, -0.4)
                    .with(Joint::RightUpperPitch, -0.4)
                    .with(Joint::HeadPitch, 0.08),
            ),
        ],
    )
}

// Lower arms a bit out while the head dips into a deeper nod.
fn lower_arms_out() -> GestureTemplate {
    GestureTemplate::new(
        "lower arms out",
        vec![
            frame(
                0.45,
                PoseDelta::new()
                    .with(Joint::RightLowerRoll, -0.8)
                    .with(Joint::LeftLowerRoll, -0.8)
                    .with(Joint::HeadPitch, 0.16),
            ),
            frame(
                1.1,
                PoseDelta::new()
                    .with(Joint::RightLowerRoll, -1.0)
                    .with(Joint::LeftLowerRoll, -1.0)
                    .with(Joint::HeadPitch, 0.08),
            ),
        ],
    )
}

// Wave with the left arm, head tipping briefly toward it.
/// The greeting wave.
pub fn hello_iconic() -> GestureTemplate {
    GestureTemplate::new(
        "hello iconic",
        vec![
            frame(
                1.1,
                PoseDelta::new()
                    .with(Joint::LeftUpperPitch, -2.0)
                    .with(Joint::HeadRoll, -0.15)
                    .with(Joint::LeftLowerRoll, -1.2),
            ),
            frame(
                1.65,
                PoseDelta::new()
                    .with(Joint::LeftUpperPitch, -2.0)
                    .with(Joint::HeadRoll, 0.0)
                    .with(Joint::LeftLowerRoll, -0.7),
            ),
            frame(
                2.2,
                PoseDelta::new()
                    .with(Joint::LeftUpperPitch, -0.4)
                    .with(Joint::HeadRoll, 0.0)
                    .with(Joint::LeftLowerRoll, -1.0),
            ),
        ],
    )
}

// Pointing at itself with the left arm.
/// The self-reference point.
pub fn i_iconic() -> GestureTemplate {
    GestureTemplate::new(
        "i iconic",
        vec![
            frame(
                1.0,
                PoseDelta::new()
                    .with(Joint::LeftUpperPitch, -0.7)
                    .with(Joint::LeftLowerRoll, -1.74)
                    .with(Joint::HeadPitch, 0.174),
            ),
            frame(
                1.65,
                PoseDelta::new()
                    .with(Joint::LeftUpperPitch, -0.4)
                    .with(Joint::LeftLowerRoll, -1.0)
                    .with(Joint::HeadPitch, 0.08),
            ),
        ],
    )
}

// Pointing at the listener with the left arm.
/// The addressee point.
pub fn you_iconic() -> GestureTemplate {
    GestureTemplate::new(
        "you iconic",
        vec![
            frame(
                0.7,
                PoseDelta::new()
                    .with(Joint::HeadPitch, 0.14)
                    .with(Joint::LeftUpperPitch, -0.9)
                    .with(Joint::LeftLowerRoll, -0.5),
            ),
            frame(
                1.4,
                PoseDelta::new()
                    .with(Joint::HeadPitch, 0.14)
                    .with(Joint::LeftUpperPitch, -1.3)
                    .with(Joint::LeftLowerRoll, -0.5),
            ),
            frame(
                2.05,
                PoseDelta::new()
                    .with(Joint::HeadPitch, 0.08)
                    .with(Joint::LeftUpperPitch, -0.4)
                    .with(Joint::LeftLowerRoll, -1.0),
            ),
        ],
    )
}
