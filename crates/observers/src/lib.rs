//! Reusable observers for the double pendulum solvers.
//!
//! This crate provides capability traits that let one [`Observer`] work with
//! both the trajectory solver and the attenuation sweep.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasTime`], [`HasState`], [`HasDamping`], [`CanStopEarly`])
//!
//! # Features
//!
//! - `plot` — Enables [`PlotObserver`] for visualizing trajectories and
//!   attenuation curves via egui. This feature adds dependencies on `eframe`
//!   and `egui_plot`.
//!
//! [`Observer`]: pendulum_core::Observer
//! [`HasTime`]: traits::HasTime
//! [`HasState`]: traits::HasState
//! [`HasDamping`]: traits::HasDamping
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

#[cfg(feature = "plot")]
mod plot;

#[cfg(feature = "plot")]
pub use plot::{Layout, PlotObserver, Plottable, ShowConfig};
