use serde::{Deserialize, Serialize};

use crate::{AngularAcceleration, ModelCoefficients, ModelError, SystemState};

/// Which set of equations a model integrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    FullNonlinear,
    SmallAngleLinear,
}

/// A double pendulum model that owns its state and advances it in fixed steps.
///
/// Implementors hold immutable [`ModelCoefficients`] computed at construction
/// and a [`SystemState`] that only [`advance`](Self::advance) replaces.
pub trait DynamicsModel {
    /// Returns the equations this model integrates.
    fn variant(&self) -> Variant;

    /// Computes the angular acceleration of both arms at `state`.
    ///
    /// This is a pure function of `state` and the model's coefficients.
    fn acceleration(&self, state: &SystemState) -> AngularAcceleration;

    /// Performs one integration step and returns the new state.
    fn advance(&mut self) -> SystemState;

    /// Returns the current state without side effects.
    fn current_state(&self) -> SystemState;

    /// Returns the fixed integration step.
    fn time_step(&self) -> f64;

    /// Returns the coefficients computed at construction.
    fn coefficients(&self) -> &ModelCoefficients;
}

/// Validates an integration step size.
pub(crate) fn check_time_step(dt: f64) -> Result<f64, ModelError> {
    if dt.is_finite() && dt > 0.0 {
        Ok(dt)
    } else {
        Err(ModelError::InvalidTimeStep(dt))
    }
}
