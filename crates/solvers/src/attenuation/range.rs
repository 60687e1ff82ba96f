use thiserror::Error;

/// Tolerance for treating `(end − start) / step` as a whole number of steps.
const COUNT_TOL: f64 = 1e-9;

/// Largest number of damping values a range may hold.
pub const MAX_VALUES: usize = 1_000_000;

/// Half-open range of damping values `[start, end)` with a fixed step.
///
/// Values are computed as `start + i·step` rather than by repeated addition,
/// and a span within `1e-9` steps of a whole number counts as that number, so
/// `[0.1, 0.2)` by `0.01` has exactly ten values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DampingRange {
    start: f64,
    step: f64,
    count: usize,
}

/// Errors that can occur when validating a damping range.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DampingRangeError {
    #[error("range bounds and step must be finite")]
    NonFinite,

    #[error("damping must start at or above zero")]
    NegativeStart,

    #[error("step must be positive")]
    NonPositiveStep,

    #[error("end must not be below start")]
    EndBeforeStart,

    #[error("range holds more than {MAX_VALUES} values")]
    TooManyValues,
}

impl DampingRange {
    /// Creates a validated range.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is not finite, `start` is negative,
    /// `step` is not positive, `end < start`, or the range would hold more
    /// than [`MAX_VALUES`] values.
    pub fn new(start: f64, end: f64, step: f64) -> Result<Self, DampingRangeError> {
        if !(start.is_finite() && end.is_finite() && step.is_finite()) {
            return Err(DampingRangeError::NonFinite);
        }
        if start < 0.0 {
            return Err(DampingRangeError::NegativeStart);
        }
        if step <= 0.0 {
            return Err(DampingRangeError::NonPositiveStep);
        }
        if end < start {
            return Err(DampingRangeError::EndBeforeStart);
        }

        let span = (end - start) / step;
        let nearest = span.round();
        let count = if (span - nearest).abs() < COUNT_TOL {
            nearest
        } else {
            span.ceil()
        };
        if !count.is_finite() || count > MAX_VALUES as f64 {
            return Err(DampingRangeError::TooManyValues);
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = count as usize;

        Ok(Self { start, step, count })
    }

    /// Returns the number of damping values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if the range has no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the damping value at `index`.
    #[must_use]
    pub fn value(&self, index: usize) -> f64 {
        self.start + index as f64 * self.step
    }

    /// Iterates over the damping values in increasing order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count).map(|i| self.value(i))
    }
}
