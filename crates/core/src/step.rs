/// A trait for states that can be stepped using their derivative.
///
/// Implementing this trait lets solvers advance a state without knowing how
/// it is laid out. `Delta` is the independent variable of the step, typically
/// a time increment in `f64`.
///
/// The update rule belongs to the implementor. A first-order state applies
/// `state + derivative * delta`; a second-order state may take the highest
/// derivative and update its lower-order parts in sequence.
pub trait StepIntegrable<Delta> {
    /// The derivative consumed by a single step.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Type alias for the derivative of a `StepIntegrable` type.
///
/// This is a convenience for accessing the [`StepIntegrable::Derivative`]
/// associated type without writing out the fully qualified syntax.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;

#[cfg(test)]
mod tests {
    use super::*;

    // First-order: position stepped by velocity.
    #[derive(Debug, PartialEq)]
    struct Position(f64);
    struct Velocity(f64);

    impl StepIntegrable<f64> for Position {
        type Derivative = Velocity;

        fn step(&self, derivative: Velocity, delta: f64) -> Self {
            Position(self.0 + derivative.0 * delta)
        }
    }

    // Second-order: position and velocity stepped by acceleration, with the
    // velocity updated first.
    #[derive(Debug, PartialEq)]
    struct Body {
        position: f64,
        velocity: f64,
    }

    impl StepIntegrable<f64> for Body {
        type Derivative = f64;

        fn step(&self, acceleration: f64, delta: f64) -> Self {
            let velocity = self.velocity + acceleration * delta;
            Body {
                position: self.position + velocity * delta,
                velocity,
            }
        }
    }

    #[test]
    fn step_first_order_state() {
        let pos = Position(0.0);
        let next = pos.step(Velocity(2.0), 0.5);

        assert_eq!(next, Position(1.0));
    }

    #[test]
    fn step_second_order_state() {
        let body = Body {
            position: 1.0,
            velocity: 0.0,
        };

        let next: Body = body.step(4.0, 0.5);

        // velocity = 0 + 4 * 0.5 = 2, position = 1 + 2 * 0.5 = 2
        assert_eq!(
            next,
            Body {
                position: 2.0,
                velocity: 2.0
            }
        );
    }

    #[test]
    fn derivative_alias_names_the_associated_type() {
        let derivative: DerivativeOf<Body, f64> = 3.0;
        assert_eq!(derivative, 3.0);
    }
}
