//! Per-frame player input and the camera-relative movement intent it yields.
//!
//! The windowing layer fills an [`InputSnapshot`] once per frame. Held keys
//! are booleans; edge events (respawn, pause) are true only on the frame they
//! were pressed.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::CameraInput;
use crate::vector_math::{planar_normalize, rotate_about_vertical};

/// Everything the core reads from the keyboard for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "Each field mirrors one key or button of the controller."
)]
pub struct InputSnapshot {
    /// Move away from the camera.
    pub forward: bool,
    /// Move towards the camera.
    pub back: bool,
    /// Strafe left.
    pub left: bool,
    /// Strafe right.
    pub right: bool,
    /// Orbit the camera left.
    pub camera_left: bool,
    /// Orbit the camera right.
    pub camera_right: bool,
    /// Held jump button.
    pub jump: bool,
    /// Pressed this frame.
    pub respawn_pressed: bool,
    /// Pressed this frame.
    pub pause_pressed: bool,
}

impl InputSnapshot {
    /// The camera orbit keys of this snapshot.
    #[must_use]
    pub const fn camera(&self) -> CameraInput {
        CameraInput {
            rotate_left: self.camera_left,
            rotate_right: self.camera_right,
        }
    }

    /// Raw `(strafe, forward)` axes in view space, each in `-1..=1`.
    #[must_use]
    pub fn movement_axes(&self) -> (f32, f32) {
        let axis = |negative: bool, positive: bool| match (negative, positive) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        };
        (axis(self.left, self.right), axis(self.back, self.forward))
    }
}

/// Converts held direction keys into a unit world-space direction.
///
/// Keys are read relative to the camera: "forward" walks along `camera_yaw`.
/// Diagonals are normalised so they are no faster than a single key, and
/// opposing keys cancel. No movement keys yields [`Vec3::ZERO`].
///
/// # Examples
///
/// ```
/// use lakitu::input::{compute_move_intent, InputSnapshot};
///
/// let input = InputSnapshot { forward: true, ..Default::default() };
/// let dir = compute_move_intent(&input, 0.0);
/// assert!((dir.z - 1.0).abs() < f32::EPSILON);
///
/// let input = InputSnapshot { forward: true, right: true, ..Default::default() };
/// let dir = compute_move_intent(&input, 0.0);
/// assert!((dir.length() - 1.0).abs() < 1e-6);
/// ```
#[must_use]
pub fn compute_move_intent(input: &InputSnapshot, camera_yaw: f32) -> Vec3 {
    let (strafe, ahead) = input.movement_axes();
    let (x, z) = rotate_about_vertical(strafe, ahead, camera_yaw);
    planar_normalize(Vec3::new(x, 0.0, z))
}

/// Canned input sequences for headless runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum InputScript {
    /// No keys at all.
    #[default]
    Idle,
    /// Walk forward while slowly orbiting the camera.
    Walk,
    /// Walk forward and jump once a second.
    Jump,
}

impl InputScript {
    /// Input for `frame` of the script.
    #[must_use]
    pub fn snapshot(self, frame: u64) -> InputSnapshot {
        match self {
            Self::Idle => InputSnapshot::default(),
            Self::Walk => InputSnapshot {
                forward: true,
                camera_right: frame % 4 == 0,
                ..InputSnapshot::default()
            },
            Self::Jump => InputSnapshot {
                forward: true,
                jump: frame % 60 == 0,
                ..InputSnapshot::default()
            },
        }
    }
}
