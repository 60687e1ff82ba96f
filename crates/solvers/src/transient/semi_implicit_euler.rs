//! Trajectory recording with semi-implicit Euler.
//!
//! The model integrates itself; this solver calls
//! [`advance`](DynamicsModel::advance) a fixed number of times and records a
//! [`Sample`] after each call, starting with the initial state:
//!
//! ```text
//! ω_{n+1} = ω_n + acc(φ_n, ω_n) * dt
//! φ_{n+1} = φ_n + ω_{n+1} * dt
//! ```
//!
//! # Example
//!
//! ```
//! use pendulum_model::{ArmSpec, SmallAngleLinear};
//! use pendulum_solvers::transient::semi_implicit_euler;
//!
//! let arm = ArmSpec::new(0.1, 1.0, 1.0, 0.0)?;
//! let mut model = SmallAngleLinear::new(0.25, arm, arm, 0.1)?;
//!
//! let solution = semi_implicit_euler::solve_for_duration(&mut model, 1.0, ())?;
//!
//! // Samples at t = 0, 0.25, 0.5, 0.75
//! assert_eq!(solution.history.len(), 4);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod action;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Columns, Sample, Solution, Status};

use pendulum_core::Observer;
use pendulum_model::DynamicsModel;
use tracing::debug;

/// Upper bound on the history capacity reserved before stepping.
const PREALLOCATED_SAMPLES: usize = 1 << 16;

/// Advances `model` by `steps` steps and records the trajectory.
///
/// # Algorithm
///
/// 1. Record the model's current state as step 0 and emit an [`Event`].
/// 2. For each step, call `advance`, record the new state at
///    `time = step · dt`, and emit an [`Event`].
/// 3. If the observer returns [`Action::StopEarly`], return the history so far.
///
/// The model is left at the last recorded state.
pub fn solve<M, Obs>(model: &mut M, steps: usize, mut observer: Obs) -> Solution
where
    M: DynamicsModel + ?Sized,
    Obs: Observer<Event, Action>,
{
    let dt = model.time_step();
    debug!(steps, dt, variant = ?model.variant(), "recording trajectory");

    let mut history = Vec::with_capacity(steps.saturating_add(1).min(PREALLOCATED_SAMPLES));

    let initial = Sample {
        step: 0,
        time: 0.0,
        state: model.current_state(),
    };
    history.push(initial);
    if let Some(Action::StopEarly) = observer.observe(&Event { sample: initial }) {
        return stopped(history, 0);
    }

    for step in 1..=steps {
        let sample = Sample {
            step,
            time: step as f64 * dt,
            state: model.advance(),
        };
        history.push(sample);

        if let Some(Action::StopEarly) = observer.observe(&Event { sample }) {
            return stopped(history, step);
        }
    }

    Solution {
        status: Status::Complete,
        history,
        steps,
    }
}

/// Advances `model` by `steps` steps without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
pub fn solve_unobserved<M>(model: &mut M, steps: usize) -> Solution
where
    M: DynamicsModel + ?Sized,
{
    solve(model, steps, ())
}

/// Records a trajectory covering `[0, duration)` at the model's time step.
///
/// # Errors
///
/// Returns [`Error::InvalidDuration`] if `duration` is not finite and positive.
pub fn solve_for_duration<M, Obs>(
    model: &mut M,
    duration: f64,
    observer: Obs,
) -> Result<Solution, Error>
where
    M: DynamicsModel + ?Sized,
    Obs: Observer<Event, Action>,
{
    let steps = steps_for_duration(duration, model.time_step())?;
    Ok(solve(model, steps, observer))
}

/// Returns how many steps cover the sample times `0, dt, 2·dt, … < duration`.
///
/// That is one fewer than the number of samples, since the initial state is
/// recorded without stepping.
///
/// # Errors
///
/// Returns an error if `duration` or `dt` is not finite and positive, or
/// [`Error::TooManySteps`] if the sample count does not fit in a `usize`.
pub fn steps_for_duration(duration: f64, dt: f64) -> Result<usize, Error> {
    if !duration.is_finite() || duration <= 0.0 {
        return Err(Error::InvalidDuration(duration));
    }
    if !dt.is_finite() || dt <= 0.0 {
        return Err(Error::InvalidTimeStep(dt));
    }

    let samples = (duration / dt).ceil();
    if !samples.is_finite() || samples >= usize::MAX as f64 {
        return Err(Error::TooManySteps { duration, dt });
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let samples = samples as usize;
    Ok(samples.saturating_sub(1))
}

fn stopped(history: Vec<Sample>, steps: usize) -> Solution {
    debug!(steps, "trajectory stopped by observer");
    Solution {
        status: Status::StoppedByObserver,
        history,
        steps,
    }
}
