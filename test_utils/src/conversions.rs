//! Conversion helpers for test coordinate newtypes.
//! Centralises `From` implementations enabling literal usage in tests.

use glam::Vec3;

use crate::physics::Coords3D;

impl From<(f32, f32, f32)> for Coords3D {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self { x, y, z }
    }
}

impl From<Coords3D> for (f32, f32, f32) {
    fn from(coords: Coords3D) -> Self {
        (coords.x, coords.y, coords.z)
    }
}

impl From<Coords3D> for Vec3 {
    fn from(coords: Coords3D) -> Self {
        Self::new(coords.x, coords.y, coords.z)
    }
}

impl From<Vec3> for Coords3D {
    fn from(vector: Vec3) -> Self {
        Self {
            x: vector.x,
            y: vector.y,
            z: vector.z,
        }
    }
}
