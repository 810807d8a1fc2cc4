//! Engine configuration loaded from TOML.
//!
//! Every section and field is optional; anything missing falls back to the
//! values in [`crate::constants`]. A file only needs to mention what it
//! changes:
//!
//! ```toml
//! [camera]
//! mode = "direct"
//!
//! [physics]
//! gravity = 1.2
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::actor::PhysicsSettings;
use crate::camera::CameraSettings;
use crate::projection::DisplaySettings;
use crate::render::RenderSettings;

/// Failure to produce a usable [`EngineConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML for [`EngineConfig`].
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{field} = {value} is out of range: {expected}")]
    /// A setting parsed but cannot be used.
    OutOfRange {
        /// Dotted path of the offending setting.
        field: &'static str,
        /// The rejected value.
        value: f32,
        /// Human readable description of the accepted range.
        expected: &'static str,
    },
}

/// All tunable settings of a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Screen size, frame rate and lens.
    pub display: DisplaySettings,
    /// Actor movement tuning.
    pub physics: PhysicsSettings,
    /// Follow camera tuning.
    pub camera: CameraSettings,
    /// Colours and outlines.
    pub render: RenderSettings,
}

impl EngineConfig {
    /// Reads and validates a TOML file.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the file cannot be read, is not valid TOML
    /// for this schema, or holds out-of-range values.
    pub fn load(file: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = file.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses and validates TOML text.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] or [`ConfigError::OutOfRange`].
    ///
    /// # Examples
    /// ```
    /// use lakitu::camera::CameraMode;
    /// use lakitu::config::EngineConfig;
    ///
    /// let config = EngineConfig::from_toml_str("[camera]\nmode = \"direct\"\n").unwrap();
    /// assert_eq!(config.camera.mode, CameraMode::Direct);
    /// assert_eq!(config.display.width, 800);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the ranges the simulation relies on.
    ///
    /// # Errors
    /// Returns the first [`ConfigError::OutOfRange`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let unit_open = "strictly between 0 and 1";
        check("camera.lag", self.camera.lag, unit_open, |v| v > 0.0 && v < 1.0)?;
        check("camera.yaw_lag", self.camera.yaw_lag, unit_open, |v| {
            v > 0.0 && v < 1.0
        })?;
        check("camera.distance", self.camera.distance, "positive", |v| v > 0.0)?;
        check(
            "display.focal_length",
            self.display.focal_length,
            "positive",
            |v| v > 0.0,
        )?;
        check("display.near_plane", self.display.near_plane, "positive", |v| {
            v > 0.0
        })?;
        check(
            "physics.terminal_velocity",
            self.physics.terminal_velocity,
            "positive",
            |v| v > 0.0,
        )?;
        let damping = "greater than 0 and at most 1";
        check(
            "physics.ground_friction",
            self.physics.ground_friction,
            damping,
            |v| v > 0.0 && v <= 1.0,
        )?;
        check(
            "physics.air_resistance",
            self.physics.air_resistance,
            damping,
            |v| v > 0.0 && v <= 1.0,
        )?;
        for (field, value) in [
            ("physics.gravity", self.physics.gravity),
            ("physics.jump_impulse", self.physics.jump_impulse),
            ("physics.acceleration", self.physics.acceleration),
            ("physics.void_threshold", self.physics.void_threshold),
            ("camera.height", self.camera.height),
            ("camera.yaw_step", self.camera.yaw_step),
        ] {
            check(field, value, "finite", |_| true)?;
        }
        for (field, value) in [
            ("display.width", self.display.width),
            ("display.height", self.display.height),
            ("display.fps", self.display.fps),
        ] {
            if value == 0 {
                return Err(ConfigError::OutOfRange {
                    field,
                    value: 0.0,
                    expected: "non-zero",
                });
            }
        }
        if self.physics.jump_impulse >= 0.0 {
            warn!(
                "physics.jump_impulse = {} does not point up; jumps will push into the floor",
                self.physics.jump_impulse
            );
        }
        Ok(())
    }
}

fn check(
    field: &'static str,
    value: f32,
    expected: &'static str,
    ok: impl Fn(f32) -> bool,
) -> Result<(), ConfigError> {
    if value.is_finite() && ok(value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            expected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraMode;
    use rstest::rstest;
    use std::io::Write;

    #[test]
    fn defaults_validate() {
        assert!(EngineConfig::default().validate().is_ok());
        assert_eq!(
            EngineConfig::from_toml_str("").ok(),
            Some(EngineConfig::default())
        );
    }

    #[rstest]
    #[case("[camera]\nlag = 1.0\n", "camera.lag")]
    #[case("[camera]\nyaw_lag = 0.0\n", "camera.yaw_lag")]
    #[case("[display]\nfocal_length = -5.0\n", "display.focal_length")]
    #[case("[display]\nfps = 0\n", "display.fps")]
    #[case("[physics]\nground_friction = 1.5\n", "physics.ground_friction")]
    #[case("[physics]\nair_resistance = 0.0\n", "physics.air_resistance")]
    #[case("[physics]\ngravity = nan\n", "physics.gravity")]
    #[case("[physics]\nacceleration = inf\n", "physics.acceleration")]
    #[case("[physics]\nvoid_threshold = -inf\n", "physics.void_threshold")]
    #[case("[camera]\nyaw_step = nan\n", "camera.yaw_step")]
    fn rejects_out_of_range_values(#[case] text: &str, #[case] expected_field: &str) {
        match EngineConfig::from_toml_str(text) {
            Err(ConfigError::OutOfRange { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("expected range error, got {other:?}"),
        }
    }

    #[test]
    fn undamped_motion_is_allowed() {
        let text = "[physics]\nground_friction = 1.0\nair_resistance = 1.0\n";
        assert!(EngineConfig::from_toml_str(text).is_ok());
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(matches!(
            EngineConfig::from_toml_str("[camera]\nmode = \"orbit\"\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn loads_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap_or_else(|e| panic!("tempfile: {e}"));
        writeln!(file, "[camera]\nmode = \"direct\"\n\n[physics]\ngravity = 1.25")
            .unwrap_or_else(|e| panic!("write: {e}"));
        let config = EngineConfig::load(file.path()).unwrap_or_else(|e| panic!("load: {e}"));
        assert_eq!(config.camera.mode, CameraMode::Direct);
        assert_eq!(config.physics.gravity, 1.25);
        assert_eq!(config.physics.jump_impulse, -16.0);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir: {e}"));
        let result = EngineConfig::load(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
