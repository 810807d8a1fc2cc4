//! Tuning constants shared by the physics, camera and render modules.
//!
//! Every value is expressed per frame: the simulation advances with a fixed
//! timestep of one frame, so velocities are world units per frame and
//! accelerations are world units per frame squared.
//!
//! The world uses a Y-down convention: gravity is positive, jump impulses are
//! negative and the void lies at large positive `y`.

/// Default presentation width in pixels.
pub const SCREEN_WIDTH: u32 = 800;
/// Default presentation height in pixels.
pub const SCREEN_HEIGHT: u32 = 600;
/// Target frame rate of the fixed-step loop.
pub const FRAMES_PER_SECOND: u32 = 60;
/// Distance from the eye to the projection plane, in pixels.
pub const FOCAL_LENGTH: f32 = 500.0;
/// View-space depth at or below which points are not projected.
pub const NEAR_PLANE: f32 = 1.0;

/// Downward acceleration per frame.
pub const GRAVITY: f32 = 0.8;
/// Vertical velocity set when jumping.
pub const JUMP_IMPULSE: f32 = -16.0;
/// Maximum downward speed.
pub const TERMINAL_VELOCITY: f32 = 20.0;
/// Horizontal speed gained per frame while a direction is held.
pub const RUN_ACCELERATION: f32 = 1.5;
/// Horizontal velocity kept per frame while grounded.
pub const GROUND_FRICTION: f32 = 0.85;
/// Horizontal velocity kept per frame while airborne.
pub const AIR_RESISTANCE: f32 = 0.95;
/// Any actor whose centre falls below this `y` is respawned.
pub const VOID_THRESHOLD: f32 = 2000.0;
/// Penetration depth below which touching boxes are not considered to overlap.
pub const CONTACT_EPSILON: f32 = 1e-3;

/// Horizontal distance from the camera to the player.
pub const CAMERA_DISTANCE: f32 = 600.0;
/// How far above the player the camera sits.
pub const CAMERA_HEIGHT: f32 = 250.0;
/// Fraction of the remaining distance the camera covers each frame.
pub const CAMERA_LAG: f32 = 0.08;
/// Fraction of the remaining orbit angle the camera covers each frame.
pub const CAMERA_YAW_LAG: f32 = 0.1;
/// Radians added to the target yaw per frame while a rotate key is held.
pub const CAMERA_YAW_STEP: f32 = 0.05;

/// Edge length of the player cube.
pub const PLAYER_SIZE: f32 = 50.0;
/// Edge length of a star trigger box.
pub const STAR_SIZE: f32 = 40.0;
/// Width and height of a coin trigger box.
pub const COIN_DIAMETER: f32 = 30.0;
/// Depth of a coin trigger box.
pub const COIN_THICKNESS: f32 = 10.0;

/// Lives at the start of a run.
pub const STARTING_LIVES: u8 = 3;
/// Coins needed for an extra life.
pub const COINS_PER_LIFE: u32 = 100;
