use nalgebra::Vector2;

use crate::ArmSpec;

/// Angular acceleration of both arms, `[φ̈1, φ̈2]`.
pub type AngularAcceleration = Vector2<f64>;

/// Angles and angular speeds of both arms at one instant.
///
/// Component 0 belongs to the upper arm (attached to the pivot), component 1
/// to the lower arm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemState {
    /// Arm angles from the downward vertical, in radians.
    pub phi: Vector2<f64>,

    /// Time derivatives of `phi`.
    pub angular_speed: Vector2<f64>,
}

impl SystemState {
    /// Creates a state from angle and angular speed vectors.
    #[must_use]
    pub fn new(phi: Vector2<f64>, angular_speed: Vector2<f64>) -> Self {
        Self { phi, angular_speed }
    }

    /// Builds the initial state described by two arm specs.
    #[must_use]
    pub fn initial(arm1: &ArmSpec, arm2: &ArmSpec) -> Self {
        Self {
            phi: Vector2::new(arm1.phi0(), arm2.phi0()),
            angular_speed: Vector2::new(arm1.angular_speed0(), arm2.angular_speed0()),
        }
    }

    /// Returns `true` if both arms hang straight down without moving.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.phi == Vector2::zeros() && self.angular_speed == Vector2::zeros()
    }
}
