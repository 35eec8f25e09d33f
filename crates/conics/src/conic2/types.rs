//! Conic types and tolerances.
//!
//! - `ON_CURVE_EPS`: absolute residual tolerance for the membership test.
//! - `QuadCoeffs`: coefficients of the general second-order form.
//! - `Conic2`: ellipse/hyperbola in normal position, tagged by variant.
//!
//! Code cross-refs: `membership` (residual predicates), `describe` (text).

/// Absolute residual tolerance below which a point counts as on the curve.
///
/// Floating-point membership is never exact; callers accept false negatives
/// near this boundary, and no adaptive tolerance is used for ill-scaled
/// semi-axes.
pub const ON_CURVE_EPS: f64 = 1e-6;

/// Coefficients of `a11·x² + a12·x·y + a22·y² + b1·x + b2·y + c = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadCoeffs {
    pub a11: f64,
    pub a12: f64,
    pub a22: f64,
    pub b1: f64,
    pub b2: f64,
    pub c: f64,
}

/// Axis-aligned second-order curve in normal position.
///
/// Invariants:
/// - `a > 0` and `b > 0` for both variants. The interactive boundary enforces
///   this before construction; here it is checked in debug builds only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Conic2 {
    /// `x²/a² + y²/b² = 1`
    Ellipse { a: f64, b: f64 },
    /// `x²/a² − y²/b² = 1`
    Hyperbola { a: f64, b: f64 },
}

impl Conic2 {
    #[inline]
    pub fn ellipse(a: f64, b: f64) -> Self {
        debug_assert!(a > 0.0 && b > 0.0, "semi-axes must be positive");
        Self::Ellipse { a, b }
    }

    #[inline]
    pub fn hyperbola(a: f64, b: f64) -> Self {
        debug_assert!(a > 0.0 && b > 0.0, "semi-axes must be positive");
        Self::Hyperbola { a, b }
    }

    /// Semi-axes `(a, b)` regardless of variant.
    #[inline]
    pub fn semi_axes(&self) -> (f64, f64) {
        match *self {
            Self::Ellipse { a, b } | Self::Hyperbola { a, b } => (a, b),
        }
    }

    /// Derive the general-form coefficients for this curve.
    ///
    /// Ellipse(a,b) → `(1/a², 0, 1/b², 0, 0, −1)`;
    /// Hyperbola(a,b) → `(1/a², 0, −1/b², 0, 0, −1)`.
    /// Pure in the variant; `a ≠ 0, b ≠ 0` is the caller's precondition.
    pub fn coefficients(&self) -> QuadCoeffs {
        match *self {
            Self::Ellipse { a, b } => QuadCoeffs {
                a11: 1.0 / (a * a),
                a12: 0.0,
                a22: 1.0 / (b * b),
                b1: 0.0,
                b2: 0.0,
                c: -1.0,
            },
            Self::Hyperbola { a, b } => QuadCoeffs {
                a11: 1.0 / (a * a),
                a12: 0.0,
                a22: -1.0 / (b * b),
                b1: 0.0,
                b2: 0.0,
                c: -1.0,
            },
        }
    }
}
