//! Textual summaries: the equation with substituted a², b², plus coefficients.

use std::fmt;

use super::types::{Conic2, QuadCoeffs};

impl fmt::Display for QuadCoeffs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a11={}, a12={}, a22={}, b1={}, b2={}, c={}",
            self.a11, self.a12, self.a22, self.b1, self.b2, self.c
        )
    }
}

impl Conic2 {
    /// Human-readable summary of the curve. Pure; callers decide where the
    /// text goes.
    pub fn describe(&self) -> String {
        let (a, b) = self.semi_axes();
        let eq = match self {
            Conic2::Ellipse { .. } => {
                format!("Ellipse: (x² / {}) + (y² / {}) = 1", a * a, b * b)
            }
            Conic2::Hyperbola { .. } => {
                format!("Hyperbola: (x² / {}) - (y² / {}) = 1", a * a, b * b)
            }
        };
        format!("{eq}\nCoefficients: {}", self.coefficients())
    }
}
