//! Level geometry and the built-in demo course.

use glam::Vec3;
use log::debug;

use crate::pickup::{Pickup, PickupKind};
use crate::solid::{Rgb, Solid, SolidError};

/// Static boxes, pickups and the actor spawn point.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    /// Shown in logs.
    pub name: String,
    /// Static scenery the actor collides with.
    pub solids: Vec<Solid>,
    /// Stars and coins.
    pub pickups: Vec<Pickup>,
    /// Actor start and respawn point.
    pub spawn: Vec3,
}

impl Level {
    /// An empty level.
    #[must_use]
    pub fn new(name: impl Into<String>, spawn: Vec3) -> Self {
        Self {
            name: name.into(),
            solids: Vec::new(),
            pickups: Vec::new(),
            spawn,
        }
    }

    /// Adds a static cube of edge `edge`.
    ///
    /// # Errors
    /// Returns [`SolidError`] for a non-positive edge.
    pub fn add_cube(&mut self, center: Vec3, edge: f32, color: Rgb) -> Result<&mut Self, SolidError> {
        self.solids.push(Solid::cube(center, edge, color)?);
        Ok(self)
    }

    /// # Errors
    /// Returns [`SolidError`] if the star trigger is invalid.
    pub fn add_star(&mut self, center: Vec3) -> Result<&mut Self, SolidError> {
        self.pickups.push(Pickup::star(center)?);
        Ok(self)
    }

    /// # Errors
    /// Returns [`SolidError`] if the coin trigger is invalid.
    pub fn add_coin(&mut self, center: Vec3) -> Result<&mut Self, SolidError> {
        self.pickups.push(Pickup::coin(center)?);
        Ok(self)
    }

    /// Makes every pickup collectable again.
    pub fn reset(&mut self) {
        self.pickups.iter_mut().for_each(Pickup::reset);
        debug!("level '{}' reset", self.name);
    }

    /// Number of uncollected pickups of `kind`.
    #[must_use]
    pub fn remaining(&self, kind: PickupKind) -> usize {
        self.pickups
            .iter()
            .filter(|p| p.kind() == kind && !p.is_collected())
            .count()
    }

    /// A small grassy field with a stepped bridge, a snow-capped mountain,
    /// two floating blocks, a star on the summit and a trail of coins.
    ///
    /// The ground's top face sits at `y = -900`; the player spawns resting on
    /// it at the origin.
    ///
    /// # Errors
    /// Only fails if one of the hard-coded boxes is invalid.
    pub fn castle_grounds() -> Result<Self, SolidError> {
        let mut level = Self::new("Castle Grounds", Vec3::new(0.0, -925.0, 0.0));
        level
            .add_cube(Vec3::new(0.0, 100.0, 0.0), 2000.0, Rgb::GRASS_GREEN)?
            // bridge
            .add_cube(Vec3::new(0.0, -975.0, 400.0), 150.0, Rgb::STONE_GRAY)?
            .add_cube(Vec3::new(0.0, -1025.0, 550.0), 150.0, Rgb::STONE_GRAY)?
            .add_cube(Vec3::new(0.0, -1075.0, 700.0), 150.0, Rgb::STONE_GRAY)?
            // mountain
            .add_cube(Vec3::new(-400.0, -1000.0, -400.0), 200.0, Rgb::STONE_GRAY)?
            .add_cube(Vec3::new(-450.0, -1150.0, -450.0), 150.0, Rgb::STONE_GRAY)?
            .add_cube(Vec3::new(-500.0, -1250.0, -500.0), 100.0, Rgb::WHITE)?
            // floating blocks
            .add_cube(Vec3::new(300.0, -1050.0, 0.0), 80.0, Rgb::COIN_GOLD)?
            .add_cube(Vec3::new(450.0, -1150.0, 0.0), 80.0, Rgb::COIN_GOLD)?
            .add_star(Vec3::new(-500.0, -1340.0, -500.0))?;

        for step in 1..=5u8 {
            let z = -150.0 - 75.0 * f32::from(step);
            level.add_coin(Vec3::new(150.0, -940.0, z))?;
        }
        Ok(level)
    }
}
