use nalgebra::Matrix2;

use crate::{ArmSpec, ModelError};

/// Gravitational acceleration used by both model variants.
pub const GRAVITY: f64 = 9.8;

/// Constant matrices of the equations of motion `A·φ̈ + B·φ̇ + C·f(φ) = …`.
///
/// Coefficients are computed once when a model is built and never change
/// afterwards, even though the full nonlinear inertia depends on the angle
/// difference. The nonlinear variant evaluates that dependence at the initial
/// configuration only.
///
/// The inverse of the mass matrix is cached alongside `A`; construction fails
/// if `A` cannot be inverted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelCoefficients {
    a: Matrix2<f64>,
    a_inv: Matrix2<f64>,
    b: Matrix2<f64>,
    c: Matrix2<f64>,
    coupling: Option<f64>,
}

impl ModelCoefficients {
    /// Coefficients for the full nonlinear model.
    ///
    /// ```text
    /// A = | (m1+m2)·a²          m2·a·b·cos(φ1−φ2) |
    ///     | m2·a·b·cos(φ1−φ2)   m2·b²             |
    /// B = diag(β, β)
    /// C = diag(g·a·(m1+m2), g·b·m2)
    /// d = −m2·a·b·sin(φ2−φ1)
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidDamping`] for negative or non-finite
    /// damping, and [`ModelError::SingularMassMatrix`] if `A` is not invertible.
    pub fn full_nonlinear(
        arm1: &ArmSpec,
        arm2: &ArmSpec,
        damping: f64,
    ) -> Result<Self, ModelError> {
        check_damping(damping)?;
        let Params { m1, m2, a, b } = Params::from_arms(arm1, arm2);
        let (phi1, phi2) = (arm1.phi0(), arm2.phi0());

        let off_diagonal = m2 * a * b * (phi1 - phi2).cos();
        let mass = Matrix2::new((m1 + m2) * a * a, off_diagonal, off_diagonal, m2 * b * b);
        let damping_matrix = Matrix2::new(damping, 0.0, 0.0, damping);
        let coupling = -m2 * a * b * (phi2 - phi1).sin();

        Self::assemble(mass, damping_matrix, stiffness(m1, m2, a, b), Some(coupling))
    }

    /// Coefficients for the small-angle linearized model.
    ///
    /// ```text
    /// A = | (m1+m2)·a²   m2·a·b |
    ///     | m2·a·b       m2·b²  |
    /// B = | 0     0   |
    ///     | β·a   β·b |
    /// C = diag(g·a·(m1+m2), g·b·m2)
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidDamping`] for negative or non-finite
    /// damping, and [`ModelError::SingularMassMatrix`] if `A` is not invertible.
    pub fn small_angle(arm1: &ArmSpec, arm2: &ArmSpec, damping: f64) -> Result<Self, ModelError> {
        check_damping(damping)?;
        let Params { m1, m2, a, b } = Params::from_arms(arm1, arm2);

        let mass = Matrix2::new((m1 + m2) * a * a, m2 * a * b, m2 * a * b, m2 * b * b);
        let damping_matrix = Matrix2::new(0.0, 0.0, damping * a, damping * b);

        Self::assemble(mass, damping_matrix, stiffness(m1, m2, a, b), None)
    }

    fn assemble(
        a: Matrix2<f64>,
        b: Matrix2<f64>,
        c: Matrix2<f64>,
        coupling: Option<f64>,
    ) -> Result<Self, ModelError> {
        let singular = || ModelError::SingularMassMatrix {
            determinant: a.determinant(),
        };

        let a_inv = a.try_inverse().ok_or_else(singular)?;
        if a_inv.iter().any(|v| !v.is_finite()) {
            return Err(singular());
        }

        Ok(Self {
            a,
            a_inv,
            b,
            c,
            coupling,
        })
    }

    /// Mass/inertia matrix `A`.
    #[must_use]
    pub fn mass(&self) -> &Matrix2<f64> {
        &self.a
    }

    /// Inverse of the mass matrix, computed at construction.
    #[must_use]
    pub fn mass_inverse(&self) -> &Matrix2<f64> {
        &self.a_inv
    }

    /// Damping matrix `B`.
    #[must_use]
    pub fn damping(&self) -> &Matrix2<f64> {
        &self.b
    }

    /// Stiffness matrix `C`.
    #[must_use]
    pub fn stiffness(&self) -> &Matrix2<f64> {
        &self.c
    }

    /// Velocity-squared coupling term `d`, present for the nonlinear model only.
    #[must_use]
    pub fn coupling(&self) -> Option<f64> {
        self.coupling
    }
}

struct Params {
    m1: f64,
    m2: f64,
    a: f64,
    b: f64,
}

impl Params {
    fn from_arms(arm1: &ArmSpec, arm2: &ArmSpec) -> Self {
        Self {
            m1: arm1.weight(),
            m2: arm2.weight(),
            a: arm1.length(),
            b: arm2.length(),
        }
    }
}

fn stiffness(m1: f64, m2: f64, a: f64, b: f64) -> Matrix2<f64> {
    Matrix2::new(GRAVITY * a * (m1 + m2), 0.0, 0.0, GRAVITY * b * m2)
}

fn check_damping(damping: f64) -> Result<(), ModelError> {
    if damping.is_finite() && damping >= 0.0 {
        Ok(())
    } else {
        Err(ModelError::InvalidDamping(damping))
    }
}
