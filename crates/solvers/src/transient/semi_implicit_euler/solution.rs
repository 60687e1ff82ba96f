use pendulum_model::SystemState;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The model state at one point of a trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// The step number (0 for the initial state).
    pub step: usize,

    /// Simulated time, `step · dt`.
    pub time: f64,

    /// Angles and angular speeds after `step` steps.
    pub state: SystemState,
}

/// The result of a trajectory integration.
#[derive(Debug, Clone)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// Every recorded sample, including the initial state.
    pub history: Vec<Sample>,

    /// Number of integration steps completed.
    pub steps: usize,
}

/// A trajectory split into one column per quantity, ready for plotting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Columns {
    pub time: Vec<f64>,
    pub phi1: Vec<f64>,
    pub phi2: Vec<f64>,
    pub angular_speed1: Vec<f64>,
    pub angular_speed2: Vec<f64>,
}

impl Solution {
    /// Splits the history into time-series columns.
    #[must_use]
    pub fn columns(&self) -> Columns {
        let n = self.history.len();
        let mut columns = Columns {
            time: Vec::with_capacity(n),
            phi1: Vec::with_capacity(n),
            phi2: Vec::with_capacity(n),
            angular_speed1: Vec::with_capacity(n),
            angular_speed2: Vec::with_capacity(n),
        };

        for Sample { time, state, .. } in &self.history {
            columns.time.push(*time);
            columns.phi1.push(state.phi[0]);
            columns.phi2.push(state.phi[1]);
            columns.angular_speed1.push(state.angular_speed[0]);
            columns.angular_speed2.push(state.angular_speed[1]);
        }

        columns
    }

    /// Returns the last recorded sample.
    #[must_use]
    pub fn last(&self) -> Option<&Sample> {
        self.history.last()
    }
}
