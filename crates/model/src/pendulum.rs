use crate::{
    AngularAcceleration, ArmSpec, DynamicsModel, EnergyProbe, FullNonlinear, ModelCoefficients,
    ModelError, SmallAngleLinear, SystemState, Variant,
};

/// Either model variant, for callers that choose the equations at runtime.
#[derive(Debug, Clone)]
pub enum Pendulum {
    FullNonlinear(FullNonlinear),
    SmallAngleLinear(SmallAngleLinear),
}

impl Pendulum {
    /// Builds the requested variant.
    ///
    /// # Errors
    ///
    /// Returns a [`ModelError`] if the parameters are invalid for that variant.
    pub fn new(
        variant: Variant,
        dt: f64,
        arm1: ArmSpec,
        arm2: ArmSpec,
        damping: f64,
    ) -> Result<Self, ModelError> {
        Ok(match variant {
            Variant::FullNonlinear => FullNonlinear::new(dt, arm1, arm2, damping)?.into(),
            Variant::SmallAngleLinear => SmallAngleLinear::new(dt, arm1, arm2, damping)?.into(),
        })
    }

    /// Returns the energy measure if this variant has one.
    #[must_use]
    pub fn energy_probe(&self) -> Option<&dyn EnergyProbe> {
        match self {
            Self::FullNonlinear(_) => None,
            Self::SmallAngleLinear(model) => Some(model),
        }
    }

    fn inner(&self) -> &dyn DynamicsModel {
        match self {
            Self::FullNonlinear(model) => model,
            Self::SmallAngleLinear(model) => model,
        }
    }
}

impl From<FullNonlinear> for Pendulum {
    fn from(model: FullNonlinear) -> Self {
        Self::FullNonlinear(model)
    }
}

impl From<SmallAngleLinear> for Pendulum {
    fn from(model: SmallAngleLinear) -> Self {
        Self::SmallAngleLinear(model)
    }
}

impl DynamicsModel for Pendulum {
    fn variant(&self) -> Variant {
        self.inner().variant()
    }

    fn acceleration(&self, state: &SystemState) -> AngularAcceleration {
        self.inner().acceleration(state)
    }

    fn advance(&mut self) -> SystemState {
        match self {
            Self::FullNonlinear(model) => model.advance(),
            Self::SmallAngleLinear(model) => model.advance(),
        }
    }

    fn current_state(&self) -> SystemState {
        self.inner().current_state()
    }

    fn time_step(&self) -> f64 {
        self.inner().time_step()
    }

    fn coefficients(&self) -> &ModelCoefficients {
        self.inner().coefficients()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arm() -> ArmSpec {
        ArmSpec::new(0.2, 1.0, 1.0, 0.0).unwrap()
    }

    #[test]
    fn builds_requested_variant() {
        for variant in [Variant::FullNonlinear, Variant::SmallAngleLinear] {
            let pendulum = Pendulum::new(variant, 0.01, arm(), arm(), 0.1).unwrap();
            assert_eq!(pendulum.variant(), variant);
        }
    }

    #[test]
    fn only_small_angle_reports_energy() {
        let full = Pendulum::new(Variant::FullNonlinear, 0.01, arm(), arm(), 0.1).unwrap();
        let small = Pendulum::new(Variant::SmallAngleLinear, 0.01, arm(), arm(), 0.1).unwrap();

        assert!(full.energy_probe().is_none());
        assert!(small.energy_probe().is_some());
    }

    #[test]
    fn advances_like_the_wrapped_model() {
        let mut direct = SmallAngleLinear::new(0.01, arm(), arm(), 0.1).unwrap();
        let mut wrapped = Pendulum::from(direct.clone());

        for _ in 0..10 {
            assert_eq!(wrapped.advance(), direct.advance());
        }
        assert_eq!(wrapped.current_state(), direct.current_state());
    }

    #[test]
    fn independent_models_do_not_share_state() {
        let mut first = Pendulum::new(Variant::FullNonlinear, 0.01, arm(), arm(), 0.0).unwrap();
        let second = first.clone();

        first.advance();

        assert_ne!(first.current_state(), second.current_state());
    }
}
