//! Third-person follow camera.
//!
//! The camera orbits the actor at a fixed distance and height. In
//! [`CameraMode::Lagged`] both the orbit angle and the position chase their
//! ideal values with exponential smoothing, so the view drifts after the actor
//! instead of snapping; [`CameraMode::Direct`] pins the camera to the ideal
//! pose every frame. The projection yaw is always the look-at angle from the
//! camera to the actor, which keeps the actor centred horizontally whatever
//! the lag is doing.

use glam::Vec3;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::projection::CameraPose;
use crate::vector_math::{forward, yaw_towards};
use crate::{CAMERA_DISTANCE, CAMERA_HEIGHT, CAMERA_LAG, CAMERA_YAW_LAG, CAMERA_YAW_STEP};

/// How the camera follows its target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraMode {
    /// Snap to the ideal pose each frame.
    Direct,
    /// Ease toward the ideal pose.
    #[default]
    Lagged,
}

/// Runtime tuning for the follow camera.
///
/// # Examples
///
/// ```
/// use lakitu::camera::{CameraMode, CameraSettings};
///
/// let settings = CameraSettings {
///     mode: CameraMode::Direct,
///     ..CameraSettings::default()
/// };
/// assert_eq!(settings.distance, 600.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Whether the camera snaps or eases toward its ideal pose.
    pub mode: CameraMode,
    /// Horizontal distance kept behind the actor.
    pub distance: f32,
    /// How far above the actor the camera hovers. Positive is up.
    pub height: f32,
    /// Fraction of the remaining offset closed per frame, in `(0, 1)`.
    pub lag: f32,
    /// Fraction of the remaining orbit angle closed per frame, in `(0, 1)`.
    pub yaw_lag: f32,
    /// Orbit radians per frame while a rotate command is held.
    pub yaw_step: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            mode: CameraMode::Lagged,
            distance: CAMERA_DISTANCE,
            height: CAMERA_HEIGHT,
            lag: CAMERA_LAG,
            yaw_lag: CAMERA_YAW_LAG,
            yaw_step: CAMERA_YAW_STEP,
        }
    }
}

/// Held camera orbit commands for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CameraInput {
    /// Orbit counter-clockwise.
    pub rotate_left: bool,
    /// Orbit clockwise.
    pub rotate_right: bool,
}

impl CameraInput {
    /// Net orbit direction: `-1`, `0` or `1`.
    #[must_use]
    pub fn direction(self) -> f32 {
        match (self.rotate_left, self.rotate_right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Follow camera orbiting the player at a fixed distance and height.
///
/// In [`CameraMode::Lagged`] mode the yaw and position ease towards their
/// targets each frame; in [`CameraMode::Direct`] mode they snap.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    settings: CameraSettings,
    position: Vec3,
    yaw: f32,
    target_yaw: f32,
}

impl Camera {
    /// Creates a camera already sitting at its ideal pose behind `target`.
    #[must_use]
    pub fn new(settings: CameraSettings, target: Vec3) -> Self {
        let mut camera = Self {
            settings,
            position: Vec3::ZERO,
            yaw: 0.0,
            target_yaw: 0.0,
        };
        camera.reset(target);
        camera
    }

    /// Tuning in use.
    #[must_use]
    pub const fn settings(&self) -> &CameraSettings {
        &self.settings
    }

    /// Eye position in world space.
    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    /// Smoothed orbit angle.
    #[must_use]
    pub const fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Orbit angle the camera is turning towards.
    #[must_use]
    pub const fn target_yaw(&self) -> f32 {
        self.target_yaw
    }

    /// Where the camera wants to be for the current orbit angle.
    #[must_use]
    pub fn ideal_position(&self, target: Vec3) -> Vec3 {
        let mut ideal = target - forward(self.yaw) * self.settings.distance;
        ideal.y = target.y - self.settings.height;
        ideal
    }

    /// Advances the camera by one frame: orbit, then follow `target`.
    pub fn update(&mut self, target: Vec3, input: CameraInput) {
        self.rotate(input);
        self.follow(target);
    }

    /// Turns the target yaw by one step in the held direction.
    pub fn rotate(&mut self, input: CameraInput) {
        self.target_yaw += input.direction() * self.settings.yaw_step;
    }

    /// Eases yaw and position toward the current targets around `target`.
    pub fn follow(&mut self, target: Vec3) {
        match self.settings.mode {
            CameraMode::Direct => {
                self.yaw = self.target_yaw;
                self.position = self.ideal_position(target);
            }
            CameraMode::Lagged => {
                self.yaw += (self.target_yaw - self.yaw) * self.settings.yaw_lag;
                let ideal = self.ideal_position(target);
                self.position += (ideal - self.position) * self.settings.lag;
            }
        }
    }

    /// Snaps straight to the ideal pose, dropping any pending lag.
    pub fn reset(&mut self, target: Vec3) {
        self.yaw = self.target_yaw;
        self.position = self.ideal_position(target);
        debug!("camera reset to {} (yaw {:.3})", self.position, self.yaw);
    }

    /// Pose used for projection: current position looking at `target`.
    #[must_use]
    pub fn pose(&self, target: Vec3) -> CameraPose {
        CameraPose {
            position: self.position,
            yaw: yaw_towards(self.position, target),
        }
    }
}
