use super::Sample;

/// Event emitted by the trajectory solver for each recorded sample.
///
/// Step 0 is the initial state before any integration.
/// Steps 1..N are emitted after each integration step.
#[derive(Debug, Clone, Copy)]
pub struct Event {
    /// The sample just recorded.
    pub sample: Sample,
}
