use std::fmt;

use crate::ModelError;

/// Initial condition and physical parameters of one pendulum arm.
///
/// Angles are in radians and angular speeds in radians per time unit. Length
/// and weight must be strictly positive; every field must be finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmSpec {
    phi0: f64,
    length: f64,
    weight: f64,
    angular_speed0: f64,
}

/// Names an [`ArmSpec`] field in validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmField {
    Phi0,
    Length,
    Weight,
    AngularSpeed0,
}

impl fmt::Display for ArmField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Phi0 => "initial angle",
            Self::Length => "length",
            Self::Weight => "weight",
            Self::AngularSpeed0 => "initial angular speed",
        };
        f.write_str(name)
    }
}

impl ArmSpec {
    /// Creates a validated arm spec.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidArm`] if `length` or `weight` is not
    /// strictly positive, or if any value is not finite.
    pub fn new(
        phi0: f64,
        length: f64,
        weight: f64,
        angular_speed0: f64,
    ) -> Result<Self, ModelError> {
        check_finite(ArmField::Phi0, phi0)?;
        check_positive(ArmField::Length, length)?;
        check_positive(ArmField::Weight, weight)?;
        check_finite(ArmField::AngularSpeed0, angular_speed0)?;

        Ok(Self {
            phi0,
            length,
            weight,
            angular_speed0,
        })
    }

    /// Returns the initial angle in radians.
    #[must_use]
    pub fn phi0(&self) -> f64 {
        self.phi0
    }

    /// Returns the arm length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns the mass carried at the end of the arm.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the initial angular speed in radians per time unit.
    #[must_use]
    pub fn angular_speed0(&self) -> f64 {
        self.angular_speed0
    }
}

fn check_finite(field: ArmField, value: f64) -> Result<(), ModelError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ModelError::InvalidArm {
            field,
            requirement: "finite",
            value,
        })
    }
}

fn check_positive(field: ArmField, value: f64) -> Result<(), ModelError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ModelError::InvalidArm {
            field,
            requirement: "finite and positive",
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_arm() {
        let arm = ArmSpec::new(0.2, 1.5, 2.0, -0.3).expect("valid arm");

        assert_eq!(arm.phi0(), 0.2);
        assert_eq!(arm.length(), 1.5);
        assert_eq!(arm.weight(), 2.0);
        assert_eq!(arm.angular_speed0(), -0.3);
    }

    #[test]
    fn rejects_non_positive_length() {
        let err = ArmSpec::new(0.0, 0.0, 1.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            ModelError::InvalidArm {
                field: ArmField::Length,
                ..
            }
        ));
    }

    #[test]
    fn rejects_negative_weight() {
        let err = ArmSpec::new(0.0, 1.0, -2.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            ModelError::InvalidArm {
                field: ArmField::Weight,
                ..
            }
        ));
    }

    #[test]
    fn rejects_non_finite_angles() {
        assert!(matches!(
            ArmSpec::new(f64::NAN, 1.0, 1.0, 0.0),
            Err(ModelError::InvalidArm {
                field: ArmField::Phi0,
                ..
            })
        ));
        assert!(matches!(
            ArmSpec::new(0.0, 1.0, 1.0, f64::INFINITY),
            Err(ModelError::InvalidArm {
                field: ArmField::AngularSpeed0,
                ..
            })
        ));
    }

    #[test]
    fn error_message_names_the_field() {
        let err = ArmSpec::new(0.0, -1.0, 1.0, 0.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "arm length must be finite and positive, got -1"
        );
    }
}
