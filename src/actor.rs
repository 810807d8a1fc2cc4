//! The player-controlled box and its fixed-step update.
//!
//! One call to [`Actor::step`] advances a single frame:
//!
//! 1. turn held keys into a camera-relative unit intent;
//! 2. accelerate along it and damp horizontal velocity (ground friction or air
//!    resistance, every frame, even with no input);
//! 3. apply gravity up to terminal velocity, then jump if standing;
//! 4. integrate each axis in [`Axis::RESOLUTION_ORDER`], resolving collisions
//!    after every axis;
//! 5. respawn if the actor fell into the void.

use glam::Vec3;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::aabb::Axis;
use crate::collision::{resolve_axis, Body};
use crate::input::{compute_move_intent, InputSnapshot};
use crate::solid::{Rgb, Solid, SolidError};
use crate::{
    AIR_RESISTANCE, GRAVITY, GROUND_FRICTION, JUMP_IMPULSE, PLAYER_SIZE, RUN_ACCELERATION,
    TERMINAL_VELOCITY, VOID_THRESHOLD,
};

/// Per-frame physics tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsSettings {
    /// Added to `vy` each frame. Positive pulls down.
    pub gravity: f32,
    /// `vy` assigned on jump. Negative goes up.
    pub jump_impulse: f32,
    /// Cap on downward `vy`.
    pub terminal_velocity: f32,
    /// Horizontal speed gained per frame along the intent.
    pub acceleration: f32,
    /// Horizontal damping factor while grounded.
    pub ground_friction: f32,
    /// Horizontal damping factor while airborne.
    pub air_resistance: f32,
    /// Actors whose centre passes below this `y` are respawned.
    pub void_threshold: f32,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            terminal_velocity: TERMINAL_VELOCITY,
            acceleration: RUN_ACCELERATION,
            ground_friction: GROUND_FRICTION,
            air_resistance: AIR_RESISTANCE,
            void_threshold: VOID_THRESHOLD,
        }
    }
}

/// What happened to the actor during one [`Actor::step`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepOutcome {
    /// World-space unit intent derived from the input.
    pub intent: Vec3,
    /// Left the ground this frame.
    pub jumped: bool,
    /// Came to rest on a surface this frame.
    pub landed: bool,
    /// Fell into the void and was sent back to spawn.
    pub respawned: bool,
}

/// A collidable box driven by player input.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    /// Box, velocity and grounded flag.
    pub body: Body,
    /// Heading of the last non-zero movement intent.
    pub facing: f32,
    spawn: Vec3,
}

impl Actor {
    /// Wraps `solid` as an actor whose respawn point is its current centre.
    #[must_use]
    pub const fn new(solid: Solid) -> Self {
        let spawn = solid.center;
        Self {
            body: Body::at_rest(solid),
            facing: 0.0,
            spawn,
        }
    }

    /// The red player cube standing at `spawn`.
    ///
    /// # Errors
    /// Propagates [`SolidError`] from building the cube, which only happens
    /// when the player size constant is invalid.
    pub fn player(spawn: Vec3) -> Result<Self, SolidError> {
        let solid = Solid::dynamic(spawn, Vec3::splat(PLAYER_SIZE), Rgb::MARIO_RED)?;
        Ok(Self::new(solid))
    }

    /// Centre of the actor box.
    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.body.solid.center
    }

    /// World units per frame.
    #[must_use]
    pub const fn velocity(&self) -> Vec3 {
        self.body.velocity
    }

    /// Whether the actor rests on a surface.
    #[must_use]
    pub const fn is_grounded(&self) -> bool {
        self.body.grounded
    }

    /// Where [`Actor::respawn`] puts the actor.
    #[must_use]
    pub const fn spawn(&self) -> Vec3 {
        self.spawn
    }

    /// Accelerates along a unit planar `intent`.
    pub fn apply_intent(&mut self, intent: Vec3, physics: &PhysicsSettings) {
        self.body.velocity.x += intent.x * physics.acceleration;
        self.body.velocity.z += intent.z * physics.acceleration;
    }

    /// Damps horizontal velocity: ground friction when standing, air
    /// resistance otherwise.
    pub fn apply_friction(&mut self, physics: &PhysicsSettings) {
        let factor = if self.body.grounded {
            physics.ground_friction
        } else {
            physics.air_resistance
        };
        self.body.velocity.x *= factor;
        self.body.velocity.z *= factor;
    }

    /// Adds gravity to `vy`, capped at terminal velocity.
    pub fn apply_gravity(&mut self, physics: &PhysicsSettings) {
        self.body.velocity.y = (self.body.velocity.y + physics.gravity).min(physics.terminal_velocity);
    }

    /// Launches the actor if it is standing on something.
    pub fn try_jump(&mut self, physics: &PhysicsSettings) -> bool {
        if !self.body.grounded {
            return false;
        }
        self.body.velocity.y = physics.jump_impulse;
        self.body.grounded = false;
        true
    }

    /// Moves one axis at a time, resolving against `statics` after each.
    ///
    /// Returns whether the actor landed.
    pub fn integrate(&mut self, statics: &[Solid]) -> bool {
        let mut landed = false;
        for axis in Axis::RESOLUTION_ORDER {
            if axis == Axis::Y {
                self.body.grounded = false;
            }
            let moved = axis.of(self.body.solid.center) + axis.of(self.body.velocity);
            axis.set(&mut self.body.solid.center, moved);
            landed |= resolve_axis(&mut self.body, statics, axis).landed;
        }
        landed
    }

    /// Whether the actor has fallen past the void threshold.
    #[must_use]
    pub fn is_in_void(&self, physics: &PhysicsSettings) -> bool {
        self.body.solid.center.y > physics.void_threshold
    }

    /// Returns to spawn at rest.
    pub fn respawn(&mut self) {
        self.body.solid.center = self.spawn;
        self.body.velocity = Vec3::ZERO;
        self.body.grounded = false;
        info!("actor respawned at {}", self.spawn);
    }

    /// Advances one frame.
    pub fn step(
        &mut self,
        input: &InputSnapshot,
        camera_yaw: f32,
        statics: &[Solid],
        physics: &PhysicsSettings,
    ) -> StepOutcome {
        let intent = compute_move_intent(input, camera_yaw);
        self.apply_intent(intent, physics);
        self.apply_friction(physics);
        self.apply_gravity(physics);
        let jumped = input.jump && self.try_jump(physics);
        let landed = self.integrate(statics);

        let respawned = self.is_in_void(physics);
        if respawned {
            debug!("actor fell past y = {}", physics.void_threshold);
            self.respawn();
        }
        if intent != Vec3::ZERO {
            self.facing = intent.x.atan2(intent.z);
        }

        StepOutcome {
            intent,
            jumped,
            landed,
            respawned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn ground() -> Vec<Solid> {
        vec![Solid::cube(Vec3::new(0.0, 100.0, 0.0), 2000.0, Rgb::GRASS_GREEN)
            .unwrap_or_else(|e| panic!("bad fixture: {e}"))]
    }

    fn player_at(y: f32) -> Actor {
        Actor::player(Vec3::new(0.0, y, 0.0)).unwrap_or_else(|e| panic!("bad fixture: {e}"))
    }

    #[rstest]
    fn lands_on_the_ground_in_one_frame(ground: Vec<Solid>) {
        let mut actor = player_at(-500.0);
        actor.body.velocity.y = 5.0;
        let outcome = actor.step(&InputSnapshot::default(), 0.0, &ground, &PhysicsSettings::default());
        assert!(outcome.landed);
        assert!(actor.is_grounded());
        assert_relative_eq!(actor.position().y, -925.0);
        assert_eq!(actor.velocity().y, 0.0);
    }

    #[rstest]
    fn standing_actor_stays_put(ground: Vec<Solid>) {
        let mut actor = player_at(-925.0);
        let physics = PhysicsSettings::default();
        for _ in 0..10 {
            actor.step(&InputSnapshot::default(), 0.0, &ground, &physics);
        }
        assert_relative_eq!(actor.position().y, -925.0);
        assert!(actor.is_grounded());
    }

    #[rstest]
    fn jump_only_from_the_ground(ground: Vec<Solid>) {
        let physics = PhysicsSettings::default();
        let jump = InputSnapshot {
            jump: true,
            ..Default::default()
        };
        let mut actor = player_at(-925.0);
        actor.step(&InputSnapshot::default(), 0.0, &ground, &physics);
        let outcome = actor.step(&jump, 0.0, &ground, &physics);
        assert!(outcome.jumped);
        assert!(actor.position().y < -925.0);
        assert!(!actor.is_grounded());

        let airborne = actor.step(&jump, 0.0, &ground, &physics);
        assert!(!airborne.jumped);
    }

    #[test]
    fn gravity_is_capped() {
        let physics = PhysicsSettings::default();
        let mut actor = player_at(0.0);
        actor.body.velocity.y = 19.5;
        actor.apply_gravity(&physics);
        assert_relative_eq!(actor.velocity().y, 20.0);
        actor.apply_gravity(&physics);
        assert_relative_eq!(actor.velocity().y, 20.0);
    }

    #[rstest]
    #[case(true, 0.85)]
    #[case(false, 0.95)]
    fn damping_depends_on_footing(#[case] grounded: bool, #[case] factor: f32) {
        let mut actor = player_at(0.0);
        actor.body.grounded = grounded;
        actor.body.velocity = Vec3::new(10.0, 3.0, -10.0);
        actor.apply_friction(&PhysicsSettings::default());
        assert_relative_eq!(actor.velocity().x, 10.0 * factor);
        assert_relative_eq!(actor.velocity().z, -10.0 * factor);
        assert_relative_eq!(actor.velocity().y, 3.0);
    }

    #[test]
    fn falling_into_the_void_respawns() {
        let physics = PhysicsSettings::default();
        let mut actor = player_at(-925.0);
        actor.body.solid.center = Vec3::new(300.0, 1995.0, 40.0);
        actor.body.velocity = Vec3::new(2.0, 19.0, 1.0);
        let outcome = actor.step(&InputSnapshot::default(), 0.0, &[], &physics);
        assert!(outcome.respawned);
        assert_eq!(actor.position(), Vec3::new(0.0, -925.0, 0.0));
        assert_eq!(actor.velocity(), Vec3::ZERO);
    }

    #[test]
    fn facing_tracks_the_last_intent() {
        let physics = PhysicsSettings::default();
        let mut actor = player_at(0.0);
        let right = InputSnapshot {
            right: true,
            ..Default::default()
        };
        actor.step(&right, 0.0, &[], &physics);
        assert_relative_eq!(actor.facing, std::f32::consts::FRAC_PI_2);
        actor.step(&InputSnapshot::default(), 0.0, &[], &physics);
        assert_relative_eq!(actor.facing, std::f32::consts::FRAC_PI_2);
    }
}
