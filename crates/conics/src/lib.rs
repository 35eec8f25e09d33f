//! Second-order plane curves: models, membership tests, and samplers.
//!
//! The `conic2` module owns the curve model (coefficient derivation and the
//! residual membership test). Interactive presentation lives in the separate
//! `cli` crate and only consumes this API.

pub mod conic2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use conic2::{Conic2, QuadCoeffs, ON_CURVE_EPS};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::conic2::rand::{draw_conic, draw_point_on, point_at, DrawCfg, ReplayToken};
    pub use crate::conic2::{Conic2, QuadCoeffs, ON_CURVE_EPS};
    pub use nalgebra::Vector2 as Vec2;
}
