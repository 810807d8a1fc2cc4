//! Stars and coins.
//!
//! A pickup is a box-shaped trigger. Touching it flips `collected` once; a
//! collected pickup no longer takes part in overlap checks or rendering until
//! the level is reset.

use glam::Vec3;
use log::info;
use serde::Serialize;

use crate::aabb::Aabb;
use crate::solid::{Rgb, Solid, SolidError};
use crate::{COIN_DIAMETER, COIN_THICKNESS, STAR_SIZE};

/// What a pickup is worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PickupKind {
    /// Mission goal, drawn as a spinning star.
    Star,
    /// Drawn as a turning gold disc.
    Coin,
}

/// A trigger box collected once when the actor touches it.
#[derive(Debug, Clone, PartialEq)]
pub struct Pickup {
    solid: Solid,
    kind: PickupKind,
    collected: bool,
}

impl Pickup {
    /// A star centred at `center`.
    ///
    /// # Errors
    /// Propagates [`SolidError`] from the trigger box.
    pub fn star(center: Vec3) -> Result<Self, SolidError> {
        Ok(Self {
            solid: Solid::cube(center, STAR_SIZE, Rgb::STAR_YELLOW)?,
            kind: PickupKind::Star,
            collected: false,
        })
    }

    /// An upright coin centred at `center`.
    ///
    /// # Errors
    /// Propagates [`SolidError`] from the trigger box.
    pub fn coin(center: Vec3) -> Result<Self, SolidError> {
        let size = Vec3::new(COIN_DIAMETER, COIN_DIAMETER, COIN_THICKNESS);
        Ok(Self {
            solid: Solid::fixed(center, size, Rgb::COIN_GOLD)?,
            kind: PickupKind::Coin,
            collected: false,
        })
    }

    /// Star or coin.
    #[must_use]
    pub const fn kind(&self) -> PickupKind {
        self.kind
    }

    /// The trigger box.
    #[must_use]
    pub const fn solid(&self) -> &Solid {
        &self.solid
    }

    /// Whether the actor has taken it.
    #[must_use]
    pub const fn is_collected(&self) -> bool {
        self.collected
    }

    /// Marks the pickup collected if `actor` overlaps it.
    ///
    /// Returns `true` only on the frame the flag flips.
    pub fn try_collect(&mut self, actor: &Aabb) -> bool {
        if self.collected || !self.solid.bounding_box().overlaps(actor) {
            return false;
        }
        self.collected = true;
        info!("collected {:?} at {}", self.kind, self.solid.center);
        true
    }

    /// Puts the pickup back.
    pub fn reset(&mut self) {
        self.collected = false;
    }
}

/// Collects every pickup the actor box overlaps, returning their kinds in
/// level order.
pub fn collect_overlapping(pickups: &mut [Pickup], actor: &Aabb) -> Vec<PickupKind> {
    pickups
        .iter_mut()
        .filter_map(|pickup| pickup.try_collect(actor).then_some(pickup.kind))
        .collect()
}
