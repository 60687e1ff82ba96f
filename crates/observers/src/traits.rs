//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so a
//! single observer can drive both the trajectory solver and the attenuation
//! sweep.
//!
//! # Event traits
//!
//! - [`HasTime`] — events that carry an elapsed time
//! - [`HasState`] — events that carry a pendulum state
//! - [`HasDamping`] — events that carry a damping coefficient
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use pendulum_core::Observer;
//! use pendulum_observers::traits::{CanStopEarly, HasTime};
//!
//! struct Deadline {
//!     limit: f64,
//! }
//!
//! impl<E: HasTime, A: CanStopEarly> Observer<E, A> for Deadline {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.time() >= self.limit).then(A::stop_early)
//!     }
//! }
//! ```

use pendulum_model::SystemState;
use pendulum_solvers::{attenuation, transient::semi_implicit_euler};

/// An event that carries an elapsed time.
///
/// For trajectories this is the simulated time of the sample; for the
/// attenuation sweep it is the measured attenuation time.
pub trait HasTime {
    /// Returns the time for this event.
    fn time(&self) -> f64;
}

/// An event that carries the pendulum's angles and angular speeds.
pub trait HasState {
    /// Returns the state for this event.
    fn state(&self) -> SystemState;
}

/// An event that carries the damping coefficient it was measured at.
pub trait HasDamping {
    /// Returns the damping for this event.
    fn damping(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasTime for semi_implicit_euler::Event {
    fn time(&self) -> f64 {
        self.sample.time
    }
}

impl HasState for semi_implicit_euler::Event {
    fn state(&self) -> SystemState {
        self.sample.state
    }
}

impl HasTime for attenuation::Event {
    fn time(&self) -> f64 {
        self.point.time
    }
}

impl HasDamping for attenuation::Event {
    fn damping(&self) -> f64 {
        self.point.damping
    }
}

impl CanStopEarly for semi_implicit_euler::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for attenuation::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pendulum_core::Observer;
    use pendulum_model::{ArmSpec, SmallAngleLinear};
    use pendulum_solvers::attenuation::{Config, DampingRange};

    /// Stops once the elapsed time reaches a limit.
    struct Deadline(f64);

    impl<E: HasTime, A: CanStopEarly> Observer<E, A> for Deadline {
        fn observe(&mut self, event: &E) -> Option<A> {
            (event.time() >= self.0).then(A::stop_early)
        }
    }

    /// Stops once the first angle changes sign.
    struct FirstSwing {
        start: f64,
    }

    impl<E: HasState, A: CanStopEarly> Observer<E, A> for FirstSwing {
        fn observe(&mut self, event: &E) -> Option<A> {
            (event.state().phi[0] * self.start < 0.0).then(A::stop_early)
        }
    }

    fn arm() -> ArmSpec {
        ArmSpec::new(0.1, 1.0, 1.0, 0.0).unwrap()
    }

    #[test]
    fn deadline_stops_a_trajectory() {
        let mut model = SmallAngleLinear::new(0.1, arm(), arm(), 0.0).unwrap();

        let solution = semi_implicit_euler::solve(&mut model, 100, Deadline(0.95));

        assert_eq!(solution.status, semi_implicit_euler::Status::StoppedByObserver);
        assert_eq!(solution.steps, 10);
    }

    #[test]
    fn deadline_stops_a_sweep() {
        let range = DampingRange::new(0.5, 2.0, 0.1).unwrap();

        // Damping 0.5 already takes about 4.3 time units to attenuate.
        let solution =
            attenuation::sweep(1.0 / 60.0, arm(), arm(), &range, &Config::default(), Deadline(1.0))
                .unwrap();

        assert_eq!(solution.status, attenuation::Status::StoppedByObserver);
        assert_eq!(solution.points.len(), 1);
    }

    #[test]
    fn state_observer_sees_the_swing() {
        let mut model = SmallAngleLinear::new(0.01, arm(), arm(), 0.0).unwrap();

        let solution = semi_implicit_euler::solve(&mut model, 10_000, FirstSwing { start: 0.1 });

        assert_eq!(solution.status, semi_implicit_euler::Status::StoppedByObserver);
        let last = solution.last().unwrap();
        assert!(last.state.phi[0] < 0.0);
    }

    #[test]
    fn damping_is_exposed() {
        let event = attenuation::Event {
            index: 0,
            point: attenuation::Point {
                damping: 0.3,
                time: 2.0,
                steps: 120,
            },
        };

        assert_eq!(event.damping(), 0.3);
        assert_eq!(event.time(), 2.0);
    }
}
