use thiserror::Error;

/// Errors that can occur when sizing a trajectory.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("duration must be finite and positive, got {0}")]
    InvalidDuration(f64),

    #[error("time step must be finite and positive, got {0}")]
    InvalidTimeStep(f64),

    #[error("duration {duration} at time step {dt} needs more steps than can be counted")]
    TooManySteps { duration: f64, dt: f64 },
}
