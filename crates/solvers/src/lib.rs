//! Solvers that drive double pendulum models.
//!
//! - [`transient::semi_implicit_euler`] — steps a model and records its
//!   trajectory
//! - [`attenuation`] — sweeps damping and measures how long the energy takes
//!   to fall by a factor of `e`
//!
//! Both follow the same shape: a `solve`-style entry point taking an
//! [`Observer`], an `*_unobserved` convenience wrapper, and `Event`,
//! `Action`, `Solution`, `Status`, and `Error` types in the solver's module.
//!
//! [`Observer`]: pendulum_core::Observer

pub mod attenuation;
pub mod transient;
