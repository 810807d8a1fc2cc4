//! Axis-aligned boxes: the only geometry the engine knows how to draw and
//! collide.
//!
//! A [`Solid`] is a centre plus positive half extents and a base colour.
//! Static solids form level geometry; dynamic solids are driven by the actor
//! loop. The eight corners are always produced in the same order so the shared
//! [`BOX_FACES`] table stays valid for every instance.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::aabb::Aabb;
use crate::numeric::shade_channel;

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Outlines.
    pub const BLACK: Self = Self(0, 0, 0);
    /// Snow caps.
    pub const WHITE: Self = Self(255, 255, 255);
    /// Default backdrop.
    pub const SKY_BLUE: Self = Self(92, 148, 252);
    /// Ground.
    pub const GRASS_GREEN: Self = Self(0, 160, 0);
    /// Bridges and mountains.
    pub const STONE_GRAY: Self = Self(180, 180, 180);
    /// The player.
    pub const MARIO_RED: Self = Self(255, 0, 0);
    /// Star fill.
    pub const STAR_YELLOW: Self = Self(255, 255, 0);
    /// Coins and gold blocks.
    pub const COIN_GOLD: Self = Self(255, 215, 0);

    /// Multiplies each channel by `factor`, saturating at the channel range.
    ///
    /// # Examples
    /// ```
    /// use lakitu::solid::Rgb;
    /// assert_eq!(Rgb(200, 100, 10).shaded(1.2), Rgb(240, 120, 12));
    /// assert_eq!(Rgb(255, 0, 0).shaded(0.4), Rgb(102, 0, 0));
    /// ```
    #[must_use]
    pub fn shaded(self, factor: f32) -> Self {
        Self(
            shade_channel(self.0, factor),
            shade_channel(self.1, factor),
            shade_channel(self.2, factor),
        )
    }
}

/// Raised when a box is built with a size that cannot bound any volume.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SolidError {
    /// Some extent is zero, negative or not finite.
    #[error("box size must be finite and positive on every axis, got {size}")]
    InvalidSize {
        /// The rejected full size.
        size: Vec3,
    },
}

/// Which side of a box a face lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FaceSide {
    /// Faces -Z, towards the default camera.
    Front,
    /// Faces +Z.
    Back,
    /// Faces -X.
    Left,
    /// Faces +X.
    Right,
    /// Faces -Y, up.
    Top,
    /// Faces +Y, down.
    Bottom,
}

/// A face of the shared box topology.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceSpec {
    /// Which side this is.
    pub side: FaceSide,
    /// Indices into [`Solid::corners`], wound around the face.
    pub corners: [usize; 4],
    /// Fake directional light: multiplier applied to the base colour.
    pub shade: f32,
}

/// The six faces of every box.
///
/// The top face is the minimum-`y` face because the world is Y-down, so it
/// gets the brightest shade; the bottom face gets the darkest.
pub const BOX_FACES: [FaceSpec; 6] = [
    FaceSpec {
        side: FaceSide::Front,
        corners: [0, 1, 2, 3],
        shade: 1.0,
    },
    FaceSpec {
        side: FaceSide::Back,
        corners: [5, 4, 7, 6],
        shade: 0.7,
    },
    FaceSpec {
        side: FaceSide::Left,
        corners: [4, 0, 3, 7],
        shade: 0.8,
    },
    FaceSpec {
        side: FaceSide::Right,
        corners: [1, 5, 6, 2],
        shade: 0.8,
    },
    FaceSpec {
        side: FaceSide::Top,
        corners: [4, 5, 1, 0],
        shade: 1.2,
    },
    FaceSpec {
        side: FaceSide::Bottom,
        corners: [3, 2, 6, 7],
        shade: 0.4,
    },
];

/// An axis-aligned box.
#[derive(Debug, Clone, PartialEq)]
pub struct Solid {
    /// World-space centre. Free to move; the extents never change.
    pub center: Vec3,
    half_extents: Vec3,
    color: Rgb,
    is_static: bool,
}

impl Solid {
    /// Level geometry with full edge lengths `size`.
    ///
    /// # Errors
    /// Returns [`SolidError::InvalidSize`] when any edge is non-positive or
    /// not finite.
    pub fn fixed(center: Vec3, size: Vec3, color: Rgb) -> Result<Self, SolidError> {
        Self::build(center, size, color, true)
    }

    /// A box that takes part in physics integration.
    ///
    /// # Errors
    /// Returns [`SolidError::InvalidSize`] when any edge is non-positive or
    /// not finite.
    pub fn dynamic(center: Vec3, size: Vec3, color: Rgb) -> Result<Self, SolidError> {
        Self::build(center, size, color, false)
    }

    /// Static cube with edge length `edge`.
    ///
    /// # Errors
    /// Returns [`SolidError::InvalidSize`] when `edge` is non-positive or not
    /// finite.
    ///
    /// # Examples
    /// ```
    /// use glam::Vec3;
    /// use lakitu::solid::{Rgb, Solid};
    /// let ground = Solid::cube(Vec3::new(0.0, 100.0, 0.0), 2000.0, Rgb::GRASS_GREEN).unwrap();
    /// assert_eq!(ground.bounding_box().min.y, -900.0);
    /// assert!(Solid::cube(Vec3::ZERO, 0.0, Rgb::WHITE).is_err());
    /// ```
    pub fn cube(center: Vec3, edge: f32, color: Rgb) -> Result<Self, SolidError> {
        Self::fixed(center, Vec3::splat(edge), color)
    }

    fn build(center: Vec3, size: Vec3, color: Rgb, is_static: bool) -> Result<Self, SolidError> {
        if !size.is_finite() || size.min_element() <= 0.0 {
            return Err(SolidError::InvalidSize { size });
        }
        Ok(Self {
            center,
            half_extents: size * 0.5,
            color,
            is_static,
        })
    }

    /// Half the edge length on each axis.
    #[must_use]
    pub const fn half_extents(&self) -> Vec3 {
        self.half_extents
    }

    /// Full edge lengths.
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.half_extents * 2.0
    }

    /// Base colour before face shading.
    #[must_use]
    pub const fn color(&self) -> Rgb {
        self.color
    }

    /// Whether other bodies collide with this box.
    #[must_use]
    pub const fn is_static(&self) -> bool {
        self.is_static
    }

    /// World-space corners: front face (min `z`) first, then the back face,
    /// each as `(-x,-y) (+x,-y) (+x,+y) (-x,+y)`.
    #[must_use]
    pub fn corners(&self) -> [Vec3; 8] {
        let Vec3 { x: hx, y: hy, z: hz } = self.half_extents;
        let c = self.center;
        [
            c + Vec3::new(-hx, -hy, -hz),
            c + Vec3::new(hx, -hy, -hz),
            c + Vec3::new(hx, hy, -hz),
            c + Vec3::new(-hx, hy, -hz),
            c + Vec3::new(-hx, -hy, hz),
            c + Vec3::new(hx, -hy, hz),
            c + Vec3::new(hx, hy, hz),
            c + Vec3::new(-hx, hy, hz),
        ]
    }

    /// World-space bounds at the current centre.
    #[must_use]
    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_center(self.center, self.half_extents)
    }
}
