//! Axis-aligned second-order curves (ellipse, hyperbola).
//!
//! Purpose
//! - Model the two curve variants behind one sum type (`Conic2`), derive the
//!   general-form coefficients, and test point membership against a fixed
//!   absolute tolerance.
//! - Keep the API minimal (KISS, YAGNI) and numerically explicit (eps-aware).
//!
//! Why a sum type
//! - Both variants share the coefficient layout and differ only in the sign
//!   of the y² term; matching on the tag keeps the membership test and the
//!   description together without a trait object.
//!
//! Code cross-refs: `types::{Conic2, QuadCoeffs}`, `membership` (residual
//! test), `rand` (deterministic samplers for tests and demos).

mod describe;
mod membership;
pub mod rand;
mod types;

pub use types::{Conic2, QuadCoeffs, ON_CURVE_EPS};

#[cfg(test)]
mod tests;
