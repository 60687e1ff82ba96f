//! Cartesian positions of the arm ends, for drawing.
//!
//! Angles are measured from the downward vertical, so an arm of length `l` at
//! angle `φ` ends at `(sin φ·l, −cos φ·l)` relative to where it hangs from.

use nalgebra::{Point2, Vector2};

/// Returns the ends of the upper and lower arm.
///
/// `phi` holds the arm angles in radians, `lengths` the arm lengths, and
/// `pivot` the point the upper arm hangs from.
#[must_use]
pub fn endpoints(phi: &Vector2<f64>, lengths: [f64; 2], pivot: Point2<f64>) -> [Point2<f64>; 2] {
    let upper = pivot + offset(phi[0], lengths[0]);
    let lower = upper + offset(phi[1], lengths[1]);
    [upper, lower]
}

fn offset(phi: f64, length: f64) -> Vector2<f64> {
    Vector2::new(phi.sin() * length, -phi.cos() * length)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn hanging_arms_point_straight_down() {
        let [upper, lower] = endpoints(&Vector2::zeros(), [1.0, 2.0], Point2::origin());

        assert_relative_eq!(upper, Point2::new(0.0, -1.0));
        assert_relative_eq!(lower, Point2::new(0.0, -3.0));
    }

    #[test]
    fn horizontal_arms_extend_sideways_from_pivot() {
        let pivot = Point2::new(5.0, 10.0);
        let [upper, lower] = endpoints(&Vector2::new(FRAC_PI_2, -FRAC_PI_2), [2.0, 1.0], pivot);

        assert_relative_eq!(upper, Point2::new(7.0, 10.0), epsilon = 1e-12);
        assert_relative_eq!(lower, Point2::new(6.0, 10.0), epsilon = 1e-12);
    }
}
