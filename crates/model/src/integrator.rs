//! Semi-implicit (symplectic) Euler integration.
//!
//! A single fixed step of size `dt` updates the angular speed first and then
//! moves the angles with the *updated* speed:
//!
//! ```text
//! acc = acceleration(state)
//! ω'  = ω + acc * dt
//! φ'  = φ + ω' * dt
//! ```
//!
//! Velocity-first ordering keeps the energy error of an undamped system
//! bounded, where explicit Euler lets it grow. There is no step-size
//! adaptation and no rollback; callers that need history snapshot the state
//! before stepping.

use pendulum_core::{DerivativeOf, StepIntegrable};

use crate::{AngularAcceleration, DynamicsModel, SystemState};

impl StepIntegrable<f64> for SystemState {
    type Derivative = AngularAcceleration;

    fn step(&self, acceleration: AngularAcceleration, dt: f64) -> Self {
        let angular_speed = self.angular_speed + acceleration * dt;
        Self {
            phi: self.phi + angular_speed * dt,
            angular_speed,
        }
    }
}

/// Returns the state one step of `model.time_step()` after `state`.
///
/// The acceleration is evaluated by `model` at `state`; `state` itself is not
/// modified.
#[must_use]
pub fn step<M>(model: &M, state: &SystemState) -> SystemState
where
    M: DynamicsModel + ?Sized,
{
    let acceleration: DerivativeOf<SystemState, f64> = model.acceleration(state);
    state.step(acceleration, model.time_step())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use nalgebra::Vector2;

    #[test]
    fn position_uses_updated_speed() {
        let state = SystemState::new(Vector2::new(1.0, -1.0), Vector2::new(0.0, 2.0));
        let acc = Vector2::new(4.0, -2.0);

        let next = state.step(acc, 0.5);

        // ω' = [0 + 4·0.5, 2 − 2·0.5] = [2, 1]
        // φ' = [1 + 2·0.5, −1 + 1·0.5] = [2, −0.5]
        assert_relative_eq!(next.angular_speed, Vector2::new(2.0, 1.0));
        assert_relative_eq!(next.phi, Vector2::new(2.0, -0.5));
    }

    #[test]
    fn zero_acceleration_coasts() {
        let state = SystemState::new(Vector2::new(0.0, 0.0), Vector2::new(1.0, -1.0));

        let next = state.step(Vector2::zeros(), 0.25);

        assert_eq!(next.angular_speed, state.angular_speed);
        assert_relative_eq!(next.phi, Vector2::new(0.25, -0.25));
    }

    #[test]
    fn step_applies_the_models_acceleration() {
        let arm = crate::ArmSpec::new(0.1, 1.0, 1.0, 0.0).unwrap();
        let model = crate::SmallAngleLinear::new(0.1, arm, arm, 0.0).unwrap();
        let state = model.current_state();

        let acceleration: DerivativeOf<SystemState, f64> = model.acceleration(&state);
        let next = step(&model, &state);

        assert_eq!(next, state.step(acceleration, 0.1));
        assert_relative_eq!(next.angular_speed, Vector2::new(-0.098, 0.0), epsilon = 1e-12);
    }
}
