//! Yaw rotation and planar vector helpers.
//!
//! Rotations happen in the X/Z plane around the vertical (Y) axis. A positive
//! angle turns +Z toward +X, so [`forward`] of a yaw is the +Z unit vector
//! rotated by that yaw. World-to-view transforms rotate by `-yaw`; view-to-world
//! transforms (movement input) rotate by `+yaw`. Both go through
//! [`rotate_about_vertical`] so the sign convention lives in one place.
use glam::Vec3;

/// Rotates the planar point `(x, z)` about the vertical axis by `angle` radians.
///
/// # Examples
/// ```
/// use lakitu::vector_math::rotate_about_vertical;
/// let (x, z) = rotate_about_vertical(0.0, 1.0, std::f32::consts::FRAC_PI_2);
/// assert!((x - 1.0).abs() < 1e-6);
/// assert!(z.abs() < 1e-6);
/// ```
#[must_use]
pub fn rotate_about_vertical(x: f32, z: f32, angle: f32) -> (f32, f32) {
    let (sin, cos) = angle.sin_cos();
    (x.mul_add(cos, z * sin), z.mul_add(cos, -x * sin))
}

/// Unit vector pointing along `yaw` in the horizontal plane.
#[must_use]
pub fn forward(yaw: f32) -> Vec3 {
    let (x, z) = rotate_about_vertical(0.0, 1.0, yaw);
    Vec3::new(x, 0.0, z)
}

/// Unit vector pointing to the right of [`forward`] for the same `yaw`.
#[must_use]
pub fn right(yaw: f32) -> Vec3 {
    let (x, z) = rotate_about_vertical(1.0, 0.0, yaw);
    Vec3::new(x, 0.0, z)
}

/// Yaw that points from `from` toward `to`, ignoring height.
///
/// Coincident points yield `0.0`.
#[must_use]
pub fn yaw_towards(from: Vec3, to: Vec3) -> f32 {
    let delta = to - from;
    if delta.x == 0.0 && delta.z == 0.0 {
        return 0.0;
    }
    delta.x.atan2(delta.z)
}

/// Returns the horizontal part of `vector` scaled to unit length.
///
/// The vertical component is discarded. Non-finite or zero-length input
/// yields [`Vec3::ZERO`].
///
/// # Examples
///
/// ```
/// use glam::Vec3;
/// use lakitu::vector_math::planar_normalize;
/// let unit = planar_normalize(Vec3::new(3.0, 9.0, 4.0));
/// assert!((unit.x - 0.6).abs() < 1e-6);
/// assert_eq!(unit.y, 0.0);
/// assert!((unit.z - 0.8).abs() < 1e-6);
///
/// assert_eq!(planar_normalize(Vec3::ZERO), Vec3::ZERO);
/// ```
#[must_use]
pub fn planar_normalize(vector: Vec3) -> Vec3 {
    let planar = Vec3::new(vector.x, 0.0, vector.z);
    if !planar.is_finite() {
        return Vec3::ZERO;
    }
    planar.try_normalize().unwrap_or(Vec3::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[rstest]
    #[case(0.0)]
    #[case(FRAC_PI_4)]
    #[case(-1.3)]
    #[case(PI)]
    fn rotation_round_trips(#[case] angle: f32) {
        let (x, z) = rotate_about_vertical(3.0, -7.0, angle);
        let (bx, bz) = rotate_about_vertical(x, z, -angle);
        assert_relative_eq!(bx, 3.0, epsilon = 1e-4);
        assert_relative_eq!(bz, -7.0, epsilon = 1e-4);
    }

    #[rstest]
    #[case(0.0)]
    #[case(0.7)]
    #[case(-2.4)]
    fn forward_maps_back_to_depth_axis(#[case] yaw: f32) {
        let ahead = forward(yaw) * 10.0;
        let (x, z) = rotate_about_vertical(ahead.x, ahead.z, -yaw);
        assert_relative_eq!(x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(z, 10.0, epsilon = 1e-4);
    }

    #[test]
    fn right_is_perpendicular_to_forward() {
        for yaw in [0.0, 0.3, FRAC_PI_2, 2.9] {
            assert_relative_eq!(forward(yaw).dot(right(yaw)), 0.0, epsilon = 1e-6);
        }
        assert_relative_eq!(right(0.0).x, 1.0);
    }

    #[test]
    fn yaw_towards_agrees_with_forward() {
        let from = Vec3::new(5.0, -3.0, 2.0);
        let yaw = 1.1;
        let to = from + forward(yaw) * 40.0 + Vec3::Y * 100.0;
        assert_relative_eq!(yaw_towards(from, to), yaw, epsilon = 1e-5);
        assert_eq!(yaw_towards(from, from), 0.0);
    }

    #[test]
    fn planar_normalize_rejects_nan() {
        assert_eq!(planar_normalize(Vec3::new(f32::NAN, 0.0, 1.0)), Vec3::ZERO);
    }
}
