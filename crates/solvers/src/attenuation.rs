//! Attenuation time versus damping for the small-angle pendulum.
//!
//! # Algorithm
//!
//! For each damping value `β` in a half-open [`DampingRange`]:
//!
//! 1. Build a fresh [`SmallAngleLinear`] at `β` from the same arms and `dt`.
//! 2. Record its initial energy `E0`.
//! 3. Advance the model, crediting [`Config::sample_interval`] of elapsed time
//!    per step, until `E0 / E ≥ e`.
//! 4. Emit a [`Point`] `(β, time)`.
//!
//! The sample interval is deliberately independent of the model's `dt`.
//!
//! # Termination
//!
//! The decay loop is bounded by [`Config::max_steps`]. A starting energy that
//! is not strictly positive can never fall by a factor of `e`, so it is
//! rejected with [`Error::NonPositiveEnergy`] before any stepping; a model
//! that does not decay in time (for example with zero damping) ends with
//! [`Error::NotAttenuated`].
//!
//! # Observer Events
//!
//! The sweep emits one [`Event`] per measured damping value. Observers can
//! return [`Action::StopEarly`] to end the sweep with the points so far.

mod action;
mod config;
mod error;
mod event;
mod range;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use range::{DampingRange, DampingRangeError, MAX_VALUES};
pub use solution::{Point, Solution, Status};

use std::f64::consts::E;

use pendulum_core::Observer;
use pendulum_model::{ArmSpec, DynamicsModel, EnergyProbe, SmallAngleLinear};
use tracing::{debug, info, warn};

/// Measures attenuation time across a range of damping values.
///
/// Points are produced in increasing order of damping, one per value of
/// `range`.
///
/// # Errors
///
/// Returns an error if a model cannot be built, if the arms start with no
/// energy, or if any point fails to attenuate within `config.max_steps()`.
pub fn sweep<Obs>(
    dt: f64,
    arm1: ArmSpec,
    arm2: ArmSpec,
    range: &DampingRange,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    info!(
        points = range.len(),
        dt,
        sample_interval = config.sample_interval(),
        "starting attenuation sweep"
    );

    let mut points = Vec::new();

    for (index, damping) in range.values().enumerate() {
        let mut model = SmallAngleLinear::new(dt, arm1, arm2, damping)?;
        let point = attenuation_time(&mut model, config)?;
        debug!(damping, time = point.time, steps = point.steps, "measured attenuation");

        points.push(point);

        if let Some(Action::StopEarly) = observer.observe(&Event { index, point }) {
            info!(points = points.len(), "attenuation sweep stopped by observer");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                points,
            });
        }
    }

    info!(points = points.len(), "attenuation sweep complete");
    Ok(Solution {
        status: Status::Complete,
        points,
    })
}

/// Measures attenuation time across a range without observation.
///
/// This is a convenience wrapper around [`sweep`] that discards events.
///
/// # Errors
///
/// Returns an error under the same conditions as [`sweep`].
pub fn sweep_unobserved(
    dt: f64,
    arm1: ArmSpec,
    arm2: ArmSpec,
    range: &DampingRange,
    config: &Config,
) -> Result<Solution, Error> {
    sweep(dt, arm1, arm2, range, config, ())
}

/// Advances `model` until its energy falls by a factor of `e`.
///
/// Elapsed time is `steps · config.sample_interval()`. The model is left at
/// the state where the threshold was crossed.
///
/// # Errors
///
/// Returns [`Error::NonPositiveEnergy`] if the current energy is not finite
/// and strictly positive, and [`Error::NotAttenuated`] if the threshold is not
/// reached within `config.max_steps()` steps.
pub fn attenuation_time(model: &mut SmallAngleLinear, config: &Config) -> Result<Point, Error> {
    let damping = model.damping();
    let initial = model.current_energy();
    if !initial.is_finite() || initial <= 0.0 {
        return Err(Error::NonPositiveEnergy {
            damping,
            energy: initial,
        });
    }

    let mut ratio = 1.0;
    for steps in 1..=config.max_steps() {
        model.advance();
        ratio = initial / model.current_energy();

        if ratio >= E {
            return Ok(Point {
                damping,
                time: steps as f64 * config.sample_interval(),
                steps,
            });
        }
    }

    warn!(damping, ratio, max_steps = config.max_steps(), "energy did not attenuate");
    Err(Error::NotAttenuated {
        damping,
        steps: config.max_steps(),
        ratio,
    })
}
