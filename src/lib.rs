#![cfg_attr(docsrs, feature(doc_cfg))]
//! Library crate providing a software 3D box renderer and platformer physics
//! core: perspective projection, painter's-algorithm depth sorting,
//! axis-aligned box collision and a lagged follow camera.
//!
//! The world is Y-down: +X right, +Y down, +Z forward. See
//! [`vector_math`] for the rotation convention.
pub mod aabb;
pub mod actor;
pub mod camera;
pub mod clock;
pub mod collision;
pub mod config;
pub mod constants;
pub mod flow;
pub mod input;
pub mod level;
pub mod logging;
pub mod numeric;
pub mod pickup;
pub mod projection;
pub mod render;
pub mod session;
pub mod solid;
pub mod vector_math;
pub use constants::*;

// Re-export commonly used items
pub use actor::{Actor, PhysicsSettings, StepOutcome};
pub use camera::{Camera, CameraInput, CameraMode, CameraSettings};
pub use collision::{resolve_axis, AxisContact, Body};
pub use config::{ConfigError, EngineConfig};
pub use input::{compute_move_intent, InputScript, InputSnapshot};
pub use level::Level;
pub use logging::init as init_logging;
pub use pickup::{Pickup, PickupKind};
pub use projection::{CameraPose, Projector, ScreenPoint};
pub use render::{present, RecordingSurface, RenderList, RenderSettings, Surface};
pub use session::{FrameEvent, FrameReport, Session};
pub use solid::{Rgb, Solid, SolidError};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use lakitu::prelude::*;
    //! ```

    pub use crate::aabb::Axis;
    pub use crate::EngineConfig;
    pub use crate::InputSnapshot;
    pub use crate::Level;
    pub use crate::Rgb;
    pub use crate::Session;
    pub use crate::Solid;
    pub use glam::Vec3;
}
