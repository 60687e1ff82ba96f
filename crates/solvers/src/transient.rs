//! Solvers for transient simulation of a single model.

pub mod semi_implicit_euler;
