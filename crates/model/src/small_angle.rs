use tracing::debug;

use crate::{
    AngularAcceleration, ArmSpec, DynamicsModel, EnergyProbe, ModelCoefficients, ModelError,
    SystemState, Variant, dynamics::check_time_step, energy, integrator,
};

/// The small-angle linearized double pendulum.
///
/// ```text
/// φ̈ = −(A⁻¹·B·ω + A⁻¹·C·φ)
/// ```
///
/// Replaces `sin(φ)` with `φ`, which is accurate near the downward
/// equilibrium. Damping acts through the lower row of `B` and is proportional
/// to each arm's length.
#[derive(Debug, Clone)]
pub struct SmallAngleLinear {
    dt: f64,
    damping: f64,
    coefficients: ModelCoefficients,
    state: SystemState,
}

impl SmallAngleLinear {
    /// Builds a model starting from the arms' initial conditions.
    ///
    /// # Errors
    ///
    /// Returns a [`ModelError`] if the time step or damping is invalid, or if
    /// the mass matrix cannot be inverted.
    pub fn new(dt: f64, arm1: ArmSpec, arm2: ArmSpec, damping: f64) -> Result<Self, ModelError> {
        let dt = check_time_step(dt)?;
        let coefficients = ModelCoefficients::small_angle(&arm1, &arm2, damping)?;
        debug!(variant = ?Variant::SmallAngleLinear, dt, damping, "built small-angle pendulum");

        Ok(Self {
            dt,
            damping,
            coefficients,
            state: SystemState::initial(&arm1, &arm2),
        })
    }

    /// Returns the damping coefficient this model was built with.
    #[must_use]
    pub fn damping(&self) -> f64 {
        self.damping
    }
}

impl DynamicsModel for SmallAngleLinear {
    fn variant(&self) -> Variant {
        Variant::SmallAngleLinear
    }

    fn acceleration(&self, state: &SystemState) -> AngularAcceleration {
        let a_inv = self.coefficients.mass_inverse();
        let b = self.coefficients.damping();
        let c = self.coefficients.stiffness();

        -(a_inv * b * state.angular_speed + a_inv * c * state.phi)
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

impl EnergyProbe for SmallAngleLinear {
    fn energy(&self, state: &SystemState) -> f64 {
        energy::linearized(&self.coefficients, state)
    }
}
