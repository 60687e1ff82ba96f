use pendulum_model::ModelError;
use thiserror::Error;

use super::{config::ConfigError, range::DampingRangeError};

/// Errors that can occur during an attenuation sweep.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid damping range: {0}")]
    InvalidRange(#[from] DampingRangeError),

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// The starting energy was zero, negative, or not finite, so it can never
    /// fall by a factor of `e`.
    #[error("initial energy must be finite and positive, got {energy} at damping {damping}")]
    NonPositiveEnergy { damping: f64, energy: f64 },

    /// The step limit was reached before the energy fell by a factor of `e`.
    #[error("energy ratio reached only {ratio} after {steps} steps at damping {damping}")]
    NotAttenuated {
        damping: f64,
        steps: usize,
        ratio: f64,
    },
}
