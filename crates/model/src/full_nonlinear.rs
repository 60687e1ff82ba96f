use nalgebra::Vector2;
use tracing::debug;

use crate::{
    AngularAcceleration, ArmSpec, DynamicsModel, ModelCoefficients, ModelError, SystemState,
    Variant, dynamics::check_time_step, integrator,
};

/// The full nonlinear double pendulum with isotropic damping.
///
/// ```text
/// φ̈ = −(A⁻¹·B·ω + A⁻¹·C·sin(φ) + d·A⁻¹·[ω2², ω1²])
/// ```
///
/// `A` and `d` depend on the angle difference between the arms. Both are
/// evaluated once, at the initial configuration, and held for the lifetime of
/// the model; the velocity-squared vector is taken from the current state.
#[derive(Debug, Clone)]
pub struct FullNonlinear {
    dt: f64,
    coefficients: ModelCoefficients,
    state: SystemState,
}

impl FullNonlinear {
    /// Builds a model starting from the arms' initial conditions.
    ///
    /// # Errors
    ///
    /// Returns a [`ModelError`] if the time step or damping is invalid, or if
    /// the mass matrix cannot be inverted.
    pub fn new(dt: f64, arm1: ArmSpec, arm2: ArmSpec, damping: f64) -> Result<Self, ModelError> {
        let dt = check_time_step(dt)?;
        let coefficients = ModelCoefficients::full_nonlinear(&arm1, &arm2, damping)?;
        debug!(variant = ?Variant::FullNonlinear, dt, damping, "built full nonlinear pendulum");

        Ok(Self {
            dt,
            coefficients,
            state: SystemState::initial(&arm1, &arm2),
        })
    }
}

impl DynamicsModel for FullNonlinear {
    fn variant(&self) -> Variant {
        Variant::FullNonlinear
    }

    fn acceleration(&self, state: &SystemState) -> AngularAcceleration {
        let a_inv = self.coefficients.mass_inverse();
        let b = self.coefficients.damping();
        let c = self.coefficients.stiffness();
        let d = self.coefficients.coupling().unwrap_or_default();

        let omega = &state.angular_speed;
        let sin_phi = state.phi.map(f64::sin);
        let omega_sq_swapped = Vector2::new(omega[1] * omega[1], omega[0] * omega[0]);

        -(a_inv * b * omega + a_inv * c * sin_phi + d * (a_inv * omega_sq_swapped))
    }

    fn advance(&mut self) -> SystemState {
        self.state = integrator::step(&*self, &self.state);
        self.state
    }

    fn current_state(&self) -> SystemState {
        self.state
    }

    fn time_step(&self) -> f64 {
        self.dt
    }

    fn coefficients(&self) -> &ModelCoefficients {
        &self.coefficients
    }
}
