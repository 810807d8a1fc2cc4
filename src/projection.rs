//! Perspective projection from world space onto the screen.
//!
//! The eye sits at [`CameraPose::position`] looking along
//! [`forward`](crate::vector_math::forward) of its yaw. Points are moved into
//! view space by translating and rotating by `-yaw`, then divided by depth.
//! The world is Y-down and so is the screen, so view `y` maps straight onto
//! screen `y`.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::numeric::dimension_to_f32;
use crate::vector_math::rotate_about_vertical;
use crate::{FOCAL_LENGTH, FRAMES_PER_SECOND, NEAR_PLANE, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Window and lens parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Screen width in pixels.
    pub width: u32,
    /// Screen height in pixels.
    pub height: u32,
    /// Frames per second.
    pub fps: u32,
    /// Projection plane distance in pixels.
    pub focal_length: f32,
    /// Smallest projectable view depth.
    pub near_plane: f32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            fps: FRAMES_PER_SECOND,
            focal_length: FOCAL_LENGTH,
            near_plane: NEAR_PLANE,
        }
    }
}

/// Where the eye is and which way it faces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CameraPose {
    /// Eye position.
    pub position: Vec3,
    /// Heading in radians; zero looks along +Z.
    pub yaw: f32,
}

/// A projected point in pixels plus its view-space depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScreenPoint {
    /// Pixels from the left edge.
    pub x: f32,
    /// Pixels from the top edge.
    pub y: f32,
    /// View-space depth.
    pub depth: f32,
}

impl ScreenPoint {
    /// Screen position without depth.
    #[must_use]
    pub const fn xy(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Pixels per world unit at this point's depth.
    #[must_use]
    pub fn scale(&self, focal_length: f32) -> f32 {
        focal_length / self.depth
    }
}

/// Pinhole projector for a fixed screen size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    half_width: f32,
    half_height: f32,
    focal_length: f32,
    near_plane: f32,
}

impl Default for Projector {
    fn default() -> Self {
        Self::from_display(&DisplaySettings::default())
    }
}

impl Projector {
    /// Projector centred on a `width` by `height` screen.
    #[must_use]
    pub fn new(width: u32, height: u32, focal_length: f32, near_plane: f32) -> Self {
        Self {
            half_width: dimension_to_f32(width) * 0.5,
            half_height: dimension_to_f32(height) * 0.5,
            focal_length,
            near_plane,
        }
    }

    /// Projector for the configured display.
    #[must_use]
    pub fn from_display(display: &DisplaySettings) -> Self {
        Self::new(
            display.width,
            display.height,
            display.focal_length,
            display.near_plane,
        )
    }

    /// Projection plane distance in pixels.
    #[must_use]
    pub const fn focal_length(&self) -> f32 {
        self.focal_length
    }

    /// Smallest projectable view depth.
    #[must_use]
    pub const fn near_plane(&self) -> f32 {
        self.near_plane
    }

    /// Moves `point` into view space: `x` right, `y` down, `z` depth.
    #[must_use]
    pub fn to_view(&self, point: Vec3, pose: &CameraPose) -> Vec3 {
        let relative = point - pose.position;
        let (x, z) = rotate_about_vertical(relative.x, relative.z, -pose.yaw);
        Vec3::new(x, relative.y, z)
    }

    /// Projects `point` onto the screen.
    ///
    /// Returns `None` when the point lies on or behind the near plane; callers
    /// drop whatever primitive the point belonged to.
    ///
    /// # Examples
    /// ```
    /// use glam::Vec3;
    /// use lakitu::projection::{CameraPose, Projector};
    ///
    /// let projector = Projector::new(800, 600, 500.0, 1.0);
    /// let pose = CameraPose::default();
    /// let centre = projector.project(Vec3::new(0.0, 0.0, 100.0), &pose).unwrap();
    /// assert_eq!((centre.x, centre.y, centre.depth), (400.0, 300.0, 100.0));
    /// assert!(projector.project(Vec3::new(0.0, 0.0, 1.0), &pose).is_none());
    /// ```
    #[must_use]
    pub fn project(&self, point: Vec3, pose: &CameraPose) -> Option<ScreenPoint> {
        let view = self.to_view(point, pose);
        if view.z.is_nan() || view.z <= self.near_plane {
            return None;
        }
        let scale = self.focal_length / view.z;
        Some(ScreenPoint {
            x: view.x.mul_add(scale, self.half_width),
            y: view.y.mul_add(scale, self.half_height),
            depth: view.z,
        })
    }

    /// Pixels per world unit at `depth`.
    #[must_use]
    pub fn scale_at(&self, depth: f32) -> f32 {
        self.focal_length / depth
    }
}
