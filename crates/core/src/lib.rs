//! Core traits shared across the double pendulum workspace.
//!
//! This crate defines the abstractions that the model, solvers, and observers
//! build on:
//!
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`StepIntegrable`] — a state that advances by a derivative over a step

mod observer;
mod step;

pub use observer::Observer;
pub use step::{DerivativeOf, StepIntegrable};
