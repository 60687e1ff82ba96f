//! Plots attenuation time against damping for the small-angle model.
//!
//! For each damping value the model is stepped until its energy has fallen by
//! a factor of e, and the elapsed time is plotted as a `(β, time)` curve.
//!
//! # Usage
//!
//! ```text
//! cargo run --example attenuation --features plot
//! cargo run --example attenuation --features plot -- pendulum.toml
//! cargo run --example attenuation --features plot -- pendulum.toml 0.1 2.0 0.05
//! ```
//!
//! The optional trailing arguments are the damping range start, end
//! (exclusive) and step, defaulting to `0.1 0.2 0.01`. The arms and time step
//! come from the configuration file; its damping and mode are ignored.

use std::error::Error;

use pendulum_model::config::PendulumConfig;
use pendulum_observers::{PlotObserver, ShowConfig};
use pendulum_solvers::attenuation::{self, Config, DampingRange};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = r#"
time_step = 0.016666666666666666

[arm1]
angle_deg = 5.73

[arm2]
angle_deg = 5.73
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

    let bounds = args.map(|s| s.parse::<f64>()).collect::<Result<Vec<_>, _>>()?;
    let range = match bounds.as_slice() {
        [] => DampingRange::new(0.1, 0.2, 0.01)?,
        &[start, end, step] => DampingRange::new(start, end, step)?,
        _ => return Err("expected damping start, end and step".into()),
    };

    let (arm1, arm2) = config.arms()?;
    let mut obs = PlotObserver::<1>::new(["attenuation time"]);
    attenuation::sweep(config.time_step, arm1, arm2, &range, &Config::default(), &mut obs)?;

    obs.show(
        ShowConfig::new()
            .title("Attenuation time against damping")
            .x_label("β"),
    )?;

    Ok(())
}
