//! Axis-aligned bounding boxes and the axis selector used by collision.

use glam::Vec3;

use crate::CONTACT_EPSILON;

/// One of the three world axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Right.
    X,
    /// Down.
    Y,
    /// Forward, away from the default camera.
    Z,
}

impl Axis {
    /// Order in which movement is integrated and resolved each frame.
    pub const RESOLUTION_ORDER: [Self; 3] = [Self::X, Self::Z, Self::Y];

    /// Reads this axis' component of `vector`.
    #[must_use]
    pub const fn of(self, vector: Vec3) -> f32 {
        match self {
            Self::X => vector.x,
            Self::Y => vector.y,
            Self::Z => vector.z,
        }
    }

    /// Overwrites this axis' component of `vector`.
    pub fn set(self, vector: &mut Vec3, value: f32) {
        match self {
            Self::X => vector.x = value,
            Self::Y => vector.y = value,
            Self::Z => vector.z = value,
        }
    }
}

/// Box bounded by `min` and `max` corners, inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Smallest coordinate on every axis.
    pub min: Vec3,
    /// Largest coordinate on every axis.
    pub max: Vec3,
}

impl Aabb {
    /// Builds the box spanning `center ± half_extents`.
    #[must_use]
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Lower and upper bound along `axis`.
    #[must_use]
    pub const fn span(&self, axis: Axis) -> (f32, f32) {
        (axis.of(self.min), axis.of(self.max))
    }

    /// Whether the two boxes share volume.
    ///
    /// Faces that merely touch (within [`CONTACT_EPSILON`]) do not count, so a
    /// body resting flush on a floor is not reported as overlapping it.
    ///
    /// # Examples
    /// ```
    /// use glam::Vec3;
    /// use lakitu::aabb::Aabb;
    /// let floor = Aabb::from_center(Vec3::new(0.0, 10.0, 0.0), Vec3::splat(10.0));
    /// let resting = Aabb::from_center(Vec3::new(0.0, -5.0, 0.0), Vec3::splat(5.0));
    /// let sunk = Aabb::from_center(Vec3::new(0.0, -4.0, 0.0), Vec3::splat(5.0));
    /// assert!(!floor.overlaps(&resting));
    /// assert!(floor.overlaps(&sunk));
    /// ```
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        [Axis::X, Axis::Y, Axis::Z].into_iter().all(|axis| {
            let (a_min, a_max) = self.span(axis);
            let (b_min, b_max) = other.span(axis);
            a_min < b_max - CONTACT_EPSILON && a_max > b_min + CONTACT_EPSILON
        })
    }

    /// Centre point of the box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}
