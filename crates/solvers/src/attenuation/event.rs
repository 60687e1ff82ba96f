use super::Point;

/// Event emitted after each damping value is measured.
#[derive(Debug, Clone, Copy)]
pub struct Event {
    /// Position of this damping value in the range, starting at 0.
    pub index: usize,

    /// The measurement just taken.
    pub point: Point,
}
