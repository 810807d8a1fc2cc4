//! Utility helpers for tests.
//!
//! Fixture constructors for boxes, actors and sessions, plus assertion
//! helpers that compare vectors with a tolerance.
pub mod conversions;
pub mod physics;

use glam::Vec3;

pub use physics::{cube, ground, player_box, session_on, Coords3D, GROUND_TOP};

/// Assert that two vectors agree within `epsilon` on every component.
///
/// # Panics
/// Panics with both vectors in the message when any component differs by more
/// than `epsilon`.
pub fn assert_vec3_near(actual: Vec3, expected: Vec3, epsilon: f32) {
    assert!(
        actual.abs_diff_eq(expected, epsilon),
        "{actual} differs from {expected} by more than {epsilon}"
    );
}

/// Assert that every value in `values` is no larger than the one before it.
///
/// # Panics
/// Panics at the first increasing pair.
pub fn assert_non_increasing(values: &[f32]) {
    for (index, pair) in values.windows(2).enumerate() {
        if let [earlier, later] = pair {
            assert!(
                later <= earlier,
                "value {later} at {} exceeds {earlier}",
                index + 1
            );
        }
    }
}
