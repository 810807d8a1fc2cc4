//! Convenience constructors for boxes, actors and sessions used in tests.

use glam::Vec3;
use lakitu::{EngineConfig, Level, Rgb, Session, Solid, PLAYER_SIZE};

/// `y` of the top face of [`ground`].
pub const GROUND_TOP: f32 = -900.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coords3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Coords3D {
    /// Create new 3D coordinates.
    ///
    /// # Examples
    /// ```
    /// use test_utils::physics::Coords3D;
    /// let c = Coords3D::new(1.0, 2.0, 3.0);
    /// assert_eq!(c.x, 1.0);
    /// ```
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Static grey cube of edge `edge` centred at `center`.
///
/// # Panics
/// Panics if `edge` is not a valid box size.
pub fn cube(center: impl Into<Coords3D>, edge: f32) -> Solid {
    let coords: Vec3 = center.into().into();
    Solid::cube(coords, edge, Rgb::STONE_GRAY).unwrap_or_else(|e| panic!("invalid cube: {e}"))
}

/// The 2000-unit grass block centred at `(0, 100, 0)` whose top is
/// [`GROUND_TOP`].
pub fn ground() -> Solid {
    cube((0.0, 100.0, 0.0), 2000.0)
}

/// Dynamic player-sized box centred at `center`.
///
/// # Panics
/// Panics if the player size constant is not a valid box size.
pub fn player_box(center: impl Into<Coords3D>) -> Solid {
    let coords: Vec3 = center.into().into();
    Solid::dynamic(coords, Vec3::splat(PLAYER_SIZE), Rgb::MARIO_RED)
        .unwrap_or_else(|e| panic!("invalid player box: {e}"))
}

/// Session over a level made of `solids`, spawning at `spawn`, with default
/// settings unless `config` is given.
///
/// # Panics
/// Panics if the session cannot be created.
pub fn session_on(
    solids: Vec<Solid>,
    spawn: impl Into<Coords3D>,
    config: Option<EngineConfig>,
) -> Session {
    let mut level = Level::new("fixture", spawn.into().into());
    level.solids = solids;
    Session::new(level, &config.unwrap_or_default())
        .unwrap_or_else(|e| panic!("session fixture failed: {e}"))
}
