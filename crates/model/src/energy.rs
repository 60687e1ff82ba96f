use crate::{DynamicsModel, ModelCoefficients, SystemState};

/// Total mechanical energy of a model whose energy has a closed form.
///
/// Only the small-angle model implements this. The nonlinear model freezes its
/// angle-dependent inertia at the initial configuration, so the quadratic form
/// below is not its energy.
pub trait EnergyProbe: DynamicsModel {
    /// Returns kinetic plus potential energy at `state`.
    fn energy(&self, state: &SystemState) -> f64;

    /// Returns the energy of the model's current state.
    fn current_energy(&self) -> f64 {
        self.energy(&self.current_state())
    }
}

/// Evaluates `0.5·(ωᵀ·A·ω + φᵀ·C·φ)`.
pub(crate) fn linearized(coefficients: &ModelCoefficients, state: &SystemState) -> f64 {
    let SystemState { phi, angular_speed } = state;
    let kinetic = angular_speed.dot(&(coefficients.mass() * angular_speed));
    let potential = phi.dot(&(coefficients.stiffness() * phi));
    0.5 * (kinetic + potential)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use nalgebra::Vector2;

    use crate::{ArmSpec, SmallAngleLinear};

    fn model(damping: f64) -> SmallAngleLinear {
        let arm = ArmSpec::new(0.1, 1.0, 1.0, 0.0).unwrap();
        SmallAngleLinear::new(1.0 / 60.0, arm, arm, damping).unwrap()
    }

    #[test]
    fn potential_energy_of_displaced_rest_state() {
        // 0.5·(19.6·0.01 + 9.8·0.01) = 0.147
        assert_relative_eq!(model(0.0).current_energy(), 0.147, epsilon = 1e-12);
    }

    #[test]
    fn kinetic_energy_of_moving_state() {
        let m = model(0.0);
        let state = SystemState::new(Vector2::zeros(), Vector2::new(1.0, -1.0));

        // ωᵀ·A·ω = [1, −1]·[1, 0] = 1
        assert_relative_eq!(m.energy(&state), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn zero_state_has_zero_energy() {
        let state = SystemState::new(Vector2::zeros(), Vector2::zeros());
        assert_eq!(model(0.3).energy(&state), 0.0);
    }

    #[test]
    fn energy_stays_bounded_without_damping() {
        let mut m = model(0.0);
        let e0 = m.current_energy();

        for _ in 0..6000 {
            m.advance();
            let relative = (m.current_energy() - e0).abs() / e0;
            assert!(relative < 0.05, "energy drifted by {relative}");
        }
    }

    #[test]
    fn energy_does_not_grow_with_damping() {
        let mut m = model(0.5);
        let e0 = m.current_energy();
        let mut lowest = e0;

        for _ in 0..3000 {
            m.advance();
            let e = m.current_energy();
            assert!(e <= lowest + 0.01 * e0, "energy rose to {e} above {lowest}");
            lowest = lowest.min(e);
        }
        assert!(lowest < 0.01 * e0);
    }
}
