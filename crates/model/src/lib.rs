//! Dynamics of a damped double pendulum.
//!
//! A double pendulum is two rigid arms hung in series under gravity. This crate
//! models it two ways:
//!
//! - [`FullNonlinear`] — gravity through `sin(φ)`, with a velocity-squared
//!   coupling term and isotropic damping
//! - [`SmallAngleLinear`] — the `sin(φ) ≈ φ` linearization, with damping
//!   proportional to arm length
//!
//! Both variants compute their [`ModelCoefficients`] once at construction and
//! advance a [`SystemState`] with the semi-implicit Euler step in
//! [`integrator`]. The linear variant also implements [`EnergyProbe`].
//!
//! # Example
//!
//! ```
//! use pendulum_model::{ArmSpec, DynamicsModel, SmallAngleLinear};
//!
//! let arm = ArmSpec::new(0.1, 1.0, 1.0, 0.0)?;
//! let mut model = SmallAngleLinear::new(1.0 / 60.0, arm, arm, 0.0)?;
//!
//! let state = model.advance();
//! assert!(state.phi[0] < 0.1);
//! # Ok::<(), pendulum_model::ModelError>(())
//! ```

mod arm;
mod coefficients;
mod dynamics;
mod energy;
mod error;
mod full_nonlinear;
#[cfg(test)]
mod log_capture;
mod pendulum;
mod small_angle;
mod state;

pub mod config;
pub mod geometry;
pub mod integrator;

pub use arm::{ArmField, ArmSpec};
pub use coefficients::{GRAVITY, ModelCoefficients};
pub use dynamics::{DynamicsModel, Variant};
pub use energy::EnergyProbe;
pub use error::ModelError;
pub use full_nonlinear::FullNonlinear;
pub use pendulum::Pendulum;
pub use small_angle::SmallAngleLinear;
pub use state::{AngularAcceleration, SystemState};
