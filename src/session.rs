//! One running level: the actor, the camera that follows it and the level it
//! plays in, advanced one fixed frame at a time.
//!
//! Nothing outside a [`Session`] holds references into it. The surrounding
//! layer feeds an [`InputSnapshot`] per frame, reacts to the returned
//! [`FrameReport`] (sounds, lives, HUD) and asks for a [`RenderList`] when it
//! wants to draw.

use glam::Vec3;
use log::{debug, info};
use serde::Serialize;

use crate::actor::{Actor, PhysicsSettings, StepOutcome};
use crate::camera::Camera;
use crate::config::EngineConfig;
use crate::input::InputSnapshot;
use crate::level::Level;
use crate::pickup::{collect_overlapping, PickupKind};
use crate::projection::{CameraPose, Projector};
use crate::render::{present, FrameBuilder, RenderList, RenderSettings, RenderStats, Surface};
use crate::solid::SolidError;

/// Why the actor went back to spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RespawnCause {
    /// Fell below the void threshold.
    Void,
    /// The player asked for it.
    Manual,
}

/// Something the surrounding layer may want to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FrameEvent {
    /// The actor took a pickup.
    Collected {
        /// What was taken.
        kind: PickupKind,
    },
    /// The actor was sent back to spawn.
    Respawned {
        /// Why.
        cause: RespawnCause,
    },
}

/// Result of [`Session::tick`].
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// Index of the frame just simulated, starting at zero.
    pub frame: u64,
    /// What the actor did.
    pub step: StepOutcome,
    /// Pickups and respawns, in order.
    pub events: Vec<FrameEvent>,
}

impl FrameReport {
    /// Kinds collected this frame.
    pub fn collected(&self) -> impl Iterator<Item = PickupKind> + '_ {
        self.events.iter().filter_map(|event| match event {
            FrameEvent::Collected { kind } => Some(*kind),
            FrameEvent::Respawned { .. } => None,
        })
    }

    /// Whether the actor was sent back to spawn this frame.
    #[must_use]
    pub fn respawned(&self) -> bool {
        self.events
            .iter()
            .any(|event| matches!(event, FrameEvent::Respawned { .. }))
    }
}

/// One level being played: the world, the player and the camera looking at them.
#[derive(Debug, Clone)]
pub struct Session {
    level: Level,
    actor: Actor,
    camera: Camera,
    projector: Projector,
    physics: PhysicsSettings,
    render: RenderSettings,
    frame: u64,
}

impl Session {
    /// Places the player at the level's spawn point with the camera settled
    /// behind it.
    ///
    /// # Errors
    /// Returns [`SolidError`] if the player box cannot be built.
    pub fn new(level: Level, config: &EngineConfig) -> Result<Self, SolidError> {
        let actor = Actor::player(level.spawn)?;
        let camera = Camera::new(config.camera.clone(), actor.position());
        info!(
            "session started in '{}' with {} solids and {} pickups",
            level.name,
            level.solids.len(),
            level.pickups.len()
        );
        Ok(Self {
            level,
            actor,
            camera,
            projector: Projector::from_display(&config.display),
            physics: config.physics.clone(),
            render: config.render.clone(),
            frame: 0,
        })
    }

    /// The level being played.
    #[must_use]
    pub const fn level(&self) -> &Level {
        &self.level
    }

    /// The player.
    #[must_use]
    pub const fn actor(&self) -> &Actor {
        &self.actor
    }

    /// Mutable access for scripted setups and tests.
    pub fn actor_mut(&mut self) -> &mut Actor {
        &mut self.actor
    }

    /// The follow camera.
    #[must_use]
    pub const fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Frames simulated so far.
    #[must_use]
    pub const fn frame(&self) -> u64 {
        self.frame
    }

    /// Pose the next frame is projected from.
    #[must_use]
    pub fn camera_pose(&self) -> CameraPose {
        self.camera.pose(self.actor.position())
    }

    /// Simulates one frame: manual respawn, camera orbit input, actor
    /// update, camera follow, then pickups.
    pub fn tick(&mut self, input: &InputSnapshot) -> FrameReport {
        let mut events = Vec::new();
        if input.respawn_pressed {
            self.respawn_actor();
            events.push(FrameEvent::Respawned {
                cause: RespawnCause::Manual,
            });
        }

        self.camera.rotate(input.camera());
        let yaw = self.camera_pose().yaw;
        let step = self
            .actor
            .step(input, yaw, &self.level.solids, &self.physics);

        if step.respawned {
            self.camera.reset(self.actor.position());
            events.push(FrameEvent::Respawned {
                cause: RespawnCause::Void,
            });
        } else {
            self.camera.follow(self.actor.position());
        }

        let actor_box = self.actor.body.solid.bounding_box();
        events.extend(
            collect_overlapping(&mut self.level.pickups, &actor_box)
                .into_iter()
                .map(|kind| FrameEvent::Collected { kind }),
        );

        let frame = self.frame;
        self.frame += 1;
        FrameReport {
            frame,
            step,
            events,
        }
    }

    /// Builds the depth-sorted draw list for the current state.
    #[must_use]
    pub fn render(&self) -> RenderList {
        let mut builder =
            FrameBuilder::new(&self.projector, self.camera_pose(), &self.render, self.frame);
        for solid in &self.level.solids {
            builder.push_solid(solid);
        }
        builder.push_solid(&self.actor.body.solid);
        for pickup in &self.level.pickups {
            builder.push_pickup(pickup);
        }
        builder.finish()
    }

    /// Renders and paints the current frame onto `surface`.
    pub fn present<S: Surface + ?Sized>(&self, surface: &mut S) -> RenderStats {
        let list = self.render();
        present(&list, surface);
        list.stats
    }

    /// Restores every pickup and sends the actor back to spawn.
    pub fn reset_level(&mut self) {
        self.level.reset();
        self.respawn_actor();
        info!("level '{}' restarted", self.level.name);
    }

    /// Moves the actor to `position` at rest and settles the camera there.
    pub fn teleport(&mut self, position: Vec3) {
        self.actor.body.solid.center = position;
        self.actor.body.velocity = Vec3::ZERO;
        self.actor.body.grounded = false;
        self.camera.reset(position);
        debug!("actor teleported to {position}");
    }

    fn respawn_actor(&mut self) {
        self.actor.respawn();
        self.camera.reset(self.actor.position());
    }
}
