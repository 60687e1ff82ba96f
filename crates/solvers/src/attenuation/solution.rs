/// Indicates how the sweep terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Measured every damping value in the range.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// Attenuation time measured at one damping value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// The damping coefficient of the model.
    pub damping: f64,

    /// Elapsed time until the energy fell by a factor of `e`.
    pub time: f64,

    /// Number of model steps taken.
    pub steps: usize,
}

/// The result of an attenuation sweep.
#[derive(Debug, Clone)]
pub struct Solution {
    /// How the sweep terminated.
    pub status: Status,

    /// Measurements in increasing order of damping.
    pub points: Vec<Point>,
}

impl Solution {
    /// Returns the `(damping, time)` curve.
    #[must_use]
    pub fn curve(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(|p| [p.damping, p.time]).collect()
    }
}
