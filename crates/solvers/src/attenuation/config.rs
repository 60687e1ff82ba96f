use thiserror::Error;

/// Configuration for measuring attenuation time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    sample_interval: f64,
    max_steps: usize,
}

/// Errors that can occur when validating an attenuation config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("sample_interval must be finite and positive")]
    SampleInterval,

    #[error("max_steps must be at least 1")]
    MaxSteps,
}

impl Default for Config {
    /// One sample per `1/60` time unit, at most a million steps per point.
    fn default() -> Self {
        Self {
            sample_interval: 1.0 / 60.0,
            max_steps: 1_000_000,
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// `sample_interval` is the time credited per model step while measuring,
    /// independent of the model's own time step. `max_steps` bounds how many
    /// steps a single measurement may take.
    ///
    /// # Errors
    ///
    /// Returns an error if `sample_interval` is not finite and positive, or if
    /// `max_steps` is zero.
    pub fn new(sample_interval: f64, max_steps: usize) -> Result<Self, ConfigError> {
        if !sample_interval.is_finite() || sample_interval <= 0.0 {
            return Err(ConfigError::SampleInterval);
        }
        if max_steps == 0 {
            return Err(ConfigError::MaxSteps);
        }

        Ok(Self {
            sample_interval,
            max_steps,
        })
    }

    /// Returns the time credited per model step.
    #[must_use]
    pub fn sample_interval(&self) -> f64 {
        self.sample_interval
    }

    /// Returns the step limit for a single measurement.
    #[must_use]
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }
}
