use thiserror::Error;

use crate::ArmField;

/// Errors raised while building a pendulum model.
///
/// All of these are configuration errors. They surface at construction so a
/// model never exists in a state that would integrate into NaNs.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ModelError {
    #[error("arm {field} must be {requirement}, got {value}")]
    InvalidArm {
        field: ArmField,
        requirement: &'static str,
        value: f64,
    },

    #[error("time step must be finite and positive, got {0}")]
    InvalidTimeStep(f64),

    #[error("damping must be finite and non-negative, got {0}")]
    InvalidDamping(f64),

    #[error("mass matrix is singular (determinant {determinant})")]
    SingularMassMatrix { determinant: f64 },
}
