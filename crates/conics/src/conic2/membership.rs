//! Point membership via the residual of the implicit equation.

use nalgebra::Vector2;

use super::types::{Conic2, ON_CURVE_EPS};

impl Conic2 {
    /// Residual of the implicit equation at `p`: `x²/a² ± y²/b² − 1`.
    ///
    /// Zero exactly on the curve; for the ellipse the sign separates inside
    /// (negative) from outside (positive).
    #[inline]
    pub fn residual(&self, p: Vector2<f64>) -> f64 {
        match *self {
            Conic2::Ellipse { a, b } => (p.x * p.x) / (a * a) + (p.y * p.y) / (b * b) - 1.0,
            Conic2::Hyperbola { a, b } => (p.x * p.x) / (a * a) - (p.y * p.y) / (b * b) - 1.0,
        }
    }

    /// Membership with an explicit absolute tolerance (strict `<`).
    #[inline]
    pub fn contains_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        self.residual(p).abs() < eps
    }

    /// Membership at the default tolerance [`ON_CURVE_EPS`].
    /// Stateless predicate: identical inputs give identical results.
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        self.contains_eps(p, ON_CURVE_EPS)
    }
}
