//! Axis-separated AABB collision resolution.
//!
//! Movement is integrated one axis at a time (see
//! [`Axis::RESOLUTION_ORDER`]) and each step is followed by
//! [`resolve_axis`]. Overlaps are pushed out along that axis only, against
//! the face the body was travelling towards. Nothing is swept, so a body
//! moving further than an obstacle's thickness in one frame can tunnel
//! through it.

use glam::Vec3;
use log::trace;

use crate::aabb::Axis;
use crate::solid::Solid;

/// A moving box with the state the resolver reads and writes.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// The moving box.
    pub solid: Solid,
    /// Displacement applied last integration step.
    pub velocity: Vec3,
    /// Set only by a downward (positive `y`) resolution against a surface.
    pub grounded: bool,
}

impl Body {
    /// A body at rest.
    #[must_use]
    pub const fn at_rest(solid: Solid) -> Self {
        Self {
            solid,
            velocity: Vec3::ZERO,
            grounded: false,
        }
    }
}

/// What a single-axis resolution did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxisContact {
    /// Number of static solids the body overlapped.
    pub hits: usize,
    /// The body came to rest on top of something.
    pub landed: bool,
}

impl AxisContact {
    /// No static solid was touched.
    #[must_use]
    pub const fn is_clear(&self) -> bool {
        self.hits == 0
    }
}

/// Pushes `body` out of every overlapping static solid along `axis`.
///
/// Positive velocity clamps the body against the obstacle's minimum face,
/// negative velocity against its maximum face. The velocity component on
/// `axis` is zeroed on any hit, but every obstacle is cleared using the
/// velocity the body arrived with. With zero velocity the position is left
/// alone.
/// Dynamic solids in `statics` are ignored.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use lakitu::aabb::Axis;
/// use lakitu::collision::{resolve_axis, Body};
/// use lakitu::solid::{Rgb, Solid};
///
/// let wall = Solid::cube(Vec3::new(100.0, 0.0, 0.0), 100.0, Rgb::WHITE).unwrap();
/// let crate_box = Solid::dynamic(Vec3::new(30.0, 0.0, 0.0), Vec3::splat(50.0), Rgb::WHITE).unwrap();
/// let mut body = Body { velocity: Vec3::X * 8.0, ..Body::at_rest(crate_box) };
/// let contact = resolve_axis(&mut body, [&wall], Axis::X);
/// assert_eq!(contact.hits, 1);
/// assert_eq!(body.solid.center.x, 25.0);
/// assert_eq!(body.velocity.x, 0.0);
/// ```
pub fn resolve_axis<'a, I>(body: &mut Body, statics: I, axis: Axis) -> AxisContact
where
    I: IntoIterator<Item = &'a Solid>,
{
    let mut contact = AxisContact::default();
    let half = axis.of(body.solid.half_extents());
    let speed = axis.of(body.velocity);

    for obstacle in statics {
        if !obstacle.is_static() {
            continue;
        }
        let obstacle_box = obstacle.bounding_box();
        if !body.solid.bounding_box().overlaps(&obstacle_box) {
            continue;
        }
        contact.hits += 1;

        let (near, far) = obstacle_box.span(axis);
        if speed > 0.0 {
            axis.set(&mut body.solid.center, near - half);
            if axis == Axis::Y {
                body.grounded = true;
                contact.landed = true;
            }
        } else if speed < 0.0 {
            axis.set(&mut body.solid.center, far + half);
        }
        axis.set(&mut body.velocity, 0.0);
        trace!("resolved {axis:?} overlap, body now at {}", body.solid.center);
    }

    contact
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solid::Rgb;
    use approx::assert_relative_eq;
    use rstest::{fixture, rstest};

    fn cube(center: Vec3, edge: f32) -> Solid {
        Solid::cube(center, edge, Rgb::STONE_GRAY).unwrap_or_else(|e| panic!("bad fixture: {e}"))
    }

    fn body(center: Vec3, velocity: Vec3) -> Body {
        let solid = Solid::dynamic(center, Vec3::splat(50.0), Rgb::MARIO_RED)
            .unwrap_or_else(|e| panic!("bad fixture: {e}"));
        Body {
            velocity,
            ..Body::at_rest(solid)
        }
    }

    #[fixture]
    fn ground() -> Solid {
        cube(Vec3::new(0.0, 100.0, 0.0), 2000.0)
    }

    #[rstest]
    fn empty_world_is_a_no_op() {
        let mut b = body(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0));
        let before = b.clone();
        for axis in Axis::RESOLUTION_ORDER {
            assert!(resolve_axis(&mut b, std::iter::empty(), axis).is_clear());
        }
        assert_eq!(b, before);
    }

    #[rstest]
    fn falling_body_lands_flush(ground: Solid) {
        let mut b = body(Vec3::new(0.0, -910.0, 0.0), Vec3::new(0.0, 12.0, 0.0));
        let contact = resolve_axis(&mut b, [&ground], Axis::Y);
        assert!(contact.landed);
        assert!(b.grounded);
        assert_relative_eq!(b.solid.bounding_box().max.y, -900.0);
        assert_eq!(b.velocity.y, 0.0);
    }

    #[rstest]
    fn rising_body_bonks_its_head() {
        let ceiling = cube(Vec3::new(0.0, -300.0, 0.0), 100.0);
        let mut b = body(Vec3::new(0.0, -240.0, 0.0), Vec3::new(0.0, -10.0, 0.0));
        let contact = resolve_axis(&mut b, [&ceiling], Axis::Y);
        assert!(!contact.landed);
        assert!(!b.grounded);
        assert_relative_eq!(b.solid.center.y, -225.0);
        assert_eq!(b.velocity.y, 0.0);
    }

    #[rstest]
    #[case::forward(Vec3::new(0.0, 0.0, 5.0), -75.0)]
    #[case::backward(Vec3::new(0.0, 0.0, -5.0), 75.0)]
    fn z_resolution_picks_face_by_velocity(#[case] velocity: Vec3, #[case] expected_z: f32) {
        let pillar = cube(Vec3::ZERO, 100.0);
        let start_z = if velocity.z > 0.0 { -60.0 } else { 60.0 };
        let mut b = body(Vec3::new(0.0, 0.0, start_z), velocity);
        resolve_axis(&mut b, [&pillar], Axis::Z);
        assert_relative_eq!(b.solid.center.z, expected_z);
        assert_eq!(b.velocity.z, 0.0);
    }

    #[rstest]
    fn x_hit_leaves_other_axes_alone() {
        let wall = cube(Vec3::new(100.0, 0.0, 0.0), 100.0);
        let mut b = body(Vec3::new(30.0, 0.0, 0.0), Vec3::new(8.0, -3.0, 2.0));
        resolve_axis(&mut b, [&wall], Axis::X);
        assert_eq!(b.velocity, Vec3::new(0.0, -3.0, 2.0));
        assert_eq!(b.solid.center, Vec3::new(25.0, 0.0, 0.0));
    }

    #[rstest]
    fn resolving_twice_changes_nothing(ground: Solid) {
        let mut b = body(Vec3::new(0.0, -910.0, 0.0), Vec3::new(3.0, 12.0, -1.0));
        for axis in Axis::RESOLUTION_ORDER {
            resolve_axis(&mut b, [&ground], axis);
        }
        let settled = b.clone();
        for axis in Axis::RESOLUTION_ORDER {
            assert!(resolve_axis(&mut b, [&ground], axis).is_clear());
        }
        assert_eq!(b, settled);
    }

    #[rstest]
    fn every_overlapping_obstacle_is_cleared(ground: Solid) {
        let step = cube(Vec3::new(0.0, -950.0, 0.0), 100.0);
        let mut b = body(Vec3::new(60.0, -920.0, 0.0), Vec3::new(0.0, 10.0, 0.0));
        let contact = resolve_axis(&mut b, [&ground, &step], Axis::Y);
        assert_eq!(contact.hits, 2);
        assert_relative_eq!(b.solid.center.y, -1025.0);
        assert!(!b.solid.bounding_box().overlaps(&step.bounding_box()));
        assert!(!b.solid.bounding_box().overlaps(&ground.bounding_box()));
    }

    #[rstest]
    fn dynamic_obstacles_are_ignored() {
        let other = Solid::dynamic(Vec3::ZERO, Vec3::splat(100.0), Rgb::WHITE)
            .unwrap_or_else(|e| panic!("bad fixture: {e}"));
        let mut b = body(Vec3::ZERO, Vec3::X);
        assert!(resolve_axis(&mut b, [&other], Axis::X).is_clear());
        assert_eq!(b.velocity, Vec3::X);
    }
}
