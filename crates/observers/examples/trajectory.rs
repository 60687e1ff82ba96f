//! Plots angle and angular speed trajectories of the double pendulum.
//!
//! Builds one model per variant selected in the configuration and opens a
//! four-panel window for each, showing φ1, φ2, ω1 and ω2 against time.
//!
//! # Usage
//!
//! ```text
//! cargo run --example trajectory --features plot
//! cargo run --example trajectory --features plot -- pendulum.toml
//! cargo run --example trajectory --features plot -- pendulum.toml 20
//! ```
//!
//! The optional second argument is the simulated duration (default 40).
//! Without a configuration file both arms start at 10° and 5° with unit
//! lengths and weights.

use std::error::Error;

use pendulum_model::{DynamicsModel, config::PendulumConfig};
use pendulum_observers::{PlotObserver, ShowConfig};
use pendulum_solvers::transient::semi_implicit_euler;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = r#"
damping = 0.1

[arm1]
angle_deg = 10.0

[arm2]
angle_deg = 5.0
"#;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => PendulumConfig::from_toml_str(&std::fs::read_to_string(path)?)?,
        None => PendulumConfig::from_toml_str(DEFAULT_CONFIG)?,
    };
    let duration = args.next().map(|s| s.parse::<f64>()).transpose()?.unwrap_or(40.0);

    for mut pendulum in config.build()? {
        let mut obs = PlotObserver::<4>::new(["φ1", "φ2", "ω1", "ω2"]);
        let solution = semi_implicit_euler::solve_for_duration(&mut pendulum, duration, &mut obs)?;

        info!(
            variant = ?pendulum.variant(),
            samples = solution.history.len(),
            "trajectory recorded"
        );
        if let Some(energy) = pendulum.energy_probe() {
            info!(energy = energy.current_energy(), "final energy");
        }

        obs.show(
            ShowConfig::new()
                .title(format!("{:?}: φ and ω (dt={})", pendulum.variant(), pendulum.time_step()))
                .x_label("t")
                .stacked(),
        )?;
    }

    Ok(())
}
