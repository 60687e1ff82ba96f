//! Construction-time configuration.
//!
//! A [`PendulumConfig`] describes the arms in the units people usually think
//! in (degrees and degrees per time unit), a damping coefficient, a time step,
//! and which model variants to build. It is deserializable with `serde` and
//! can be read from TOML:
//!
//! ```
//! use pendulum_model::config::{Mode, PendulumConfig};
//!
//! let config = PendulumConfig::from_toml_str(
//!     r#"
//!     damping = 0.2
//!     mode = "small_angle_linear"
//!
//!     [arm1]
//!     angle_deg = 10.0
//!
//!     [arm2]
//!     angle_deg = -5.0
//!     length = 0.5
//!     "#,
//! )?;
//!
//! assert_eq!(config.mode, Mode::SmallAngleLinear);
//! assert_eq!(config.build()?.len(), 1);
//! # Ok::<(), pendulum_model::config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uom::si::{
    angle::{degree, radian},
    angular_velocity::{degree_per_second, radian_per_second},
    f64::{Angle, AngularVelocity},
};

use crate::{ArmSpec, ModelError, Pendulum, Variant};

/// Errors that can occur when loading or applying a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid model parameters: {0}")]
    Model(#[from] ModelError),
}

/// Which models to build from a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    FullNonlinear,
    SmallAngleLinear,
    /// Both variants from the same initial conditions, small-angle first.
    #[default]
    Both,
}

impl Mode {
    /// Returns the variants this mode builds, in build order.
    #[must_use]
    pub fn variants(self) -> &'static [Variant] {
        match self {
            Self::FullNonlinear => &[Variant::FullNonlinear],
            Self::SmallAngleLinear => &[Variant::SmallAngleLinear],
            Self::Both => &[Variant::SmallAngleLinear, Variant::FullNonlinear],
        }
    }
}

/// One arm in configuration units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArmConfig {
    /// Initial angle from the downward vertical, in degrees.
    pub angle_deg: f64,
    /// Initial angular speed, in degrees per time unit.
    pub angular_speed_deg: f64,
    pub length: f64,
    pub weight: f64,
}

impl Default for ArmConfig {
    fn default() -> Self {
        Self {
            angle_deg: 0.0,
            angular_speed_deg: 0.0,
            length: 1.0,
            weight: 1.0,
        }
    }
}

impl ArmConfig {
    /// Converts to an [`ArmSpec`] in radians.
    ///
    /// # Errors
    ///
    /// Returns a [`ModelError`] if the arm parameters are invalid.
    pub fn to_spec(&self) -> Result<ArmSpec, ModelError> {
        let phi0 = Angle::new::<degree>(self.angle_deg).get::<radian>();
        let angular_speed0 =
            AngularVelocity::new::<degree_per_second>(self.angular_speed_deg)
                .get::<radian_per_second>();

        ArmSpec::new(phi0, self.length, self.weight, angular_speed0)
    }
}

/// A complete simulation setup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PendulumConfig {
    pub arm1: ArmConfig,
    pub arm2: ArmConfig,
    pub damping: f64,
    pub time_step: f64,
    pub mode: Mode,
}

impl Default for PendulumConfig {
    fn default() -> Self {
        Self {
            arm1: ArmConfig::default(),
            arm2: ArmConfig::default(),
            damping: 0.1,
            time_step: 1.0 / 45.0,
            mode: Mode::default(),
        }
    }
}

impl PendulumConfig {
    /// Parses a configuration from TOML. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not a valid configuration.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Returns the validated arm specs in radians.
    ///
    /// # Errors
    ///
    /// Returns a [`ModelError`] if either arm is invalid.
    pub fn arms(&self) -> Result<(ArmSpec, ArmSpec), ModelError> {
        Ok((self.arm1.to_spec()?, self.arm2.to_spec()?))
    }

    /// Builds one model per variant selected by [`mode`](Self::mode).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Model`] if any parameter is invalid.
    pub fn build(&self) -> Result<Vec<Pendulum>, ConfigError> {
        let (arm1, arm2) = self.arms()?;
        let models = self
            .mode
            .variants()
            .iter()
            .map(|&variant| Pendulum::new(variant, self.time_step, arm1, arm2, self.damping))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(models)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    use crate::DynamicsModel;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = PendulumConfig::from_toml_str("").unwrap();
        assert_eq!(config, PendulumConfig::default());
        assert_eq!(config.mode, Mode::Both);
        assert_relative_eq!(config.time_step, 1.0 / 45.0);
    }

    #[test]
    fn converts_degrees_to_radians() {
        let arm = ArmConfig {
            angle_deg: 90.0,
            angular_speed_deg: -180.0,
            ..ArmConfig::default()
        };

        let spec = arm.to_spec().unwrap();

        assert_relative_eq!(spec.phi0(), PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(spec.angular_speed0(), -PI, epsilon = 1e-12);
    }

    #[test]
    fn both_mode_builds_small_angle_first() {
        let models = PendulumConfig::default().build().unwrap();
        let variants: Vec<_> = models.iter().map(|m| m.variant()).collect();

        assert_eq!(
            variants,
            vec![Variant::SmallAngleLinear, Variant::FullNonlinear]
        );
    }

    #[test]
    fn parses_full_configuration() {
        let config = PendulumConfig::from_toml_str(
            r#"
            damping = 0.0
            time_step = 0.01
            mode = "full_nonlinear"

            [arm1]
            angle_deg = 10.0
            angular_speed_deg = 10.0
            length = 100.0
            weight = 1000.0

            [arm2]
            angle_deg = 10.0
            angular_speed_deg = 10.0
            length = 100.0
            weight = 10.0
            "#,
        )
        .unwrap();

        assert_eq!(config.mode, Mode::FullNonlinear);
        assert_eq!(config.arm1.weight, 1000.0);
        assert_eq!(config.arm2.weight, 10.0);

        let models = config.build().unwrap();
        assert_eq!(models.len(), 1);
        assert_relative_eq!(models[0].time_step(), 0.01);
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = PendulumConfig::from_toml_str("gravity = 1.0").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn invalid_arm_surfaces_as_model_error() {
        let config = PendulumConfig {
            arm2: ArmConfig {
                length: 0.0,
                ..ArmConfig::default()
            },
            ..PendulumConfig::default()
        };

        assert!(matches!(config.build(), Err(ConfigError::Model(_))));
    }
}
