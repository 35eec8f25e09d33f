//! Random conics and on-curve points (deterministic via replay tokens).
//!
//! Model
//! - `draw_conic` picks a variant and semi-axes uniformly within bounds.
//! - `point_at` maps a parameter to an exact point on the curve: the ellipse
//!   uses the angle parametrization `(a·cos t, b·sin t)`, the hyperbola its
//!   right branch `(a·cosh t, b·sinh t)`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `Conic2`, `membership` (sampled points must pass the
//! residual test).

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Conic2;

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct DrawCfg {
    /// Semi-axes drawn uniformly from `[axis_min, axis_max]`.
    pub axis_min: f64,
    pub axis_max: f64,
    /// Hyperbola parameter drawn from `[-t_max, t_max]`.
    pub t_max: f64,
}
impl Default for DrawCfg {
    fn default() -> Self {
        Self {
            axis_min: 0.5,
            axis_max: 4.0,
            t_max: 2.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Exact parametric point on `conic` at parameter `t`.
#[inline]
pub fn point_at(conic: Conic2, t: f64) -> Vector2<f64> {
    match conic {
        Conic2::Ellipse { a, b } => Vector2::new(a * t.cos(), b * t.sin()),
        Conic2::Hyperbola { a, b } => Vector2::new(a * t.cosh(), b * t.sinh()),
    }
}

/// Draw a random conic (variant plus semi-axes) within `cfg` bounds.
pub fn draw_conic(cfg: DrawCfg, tok: ReplayToken) -> Conic2 {
    let mut rng = tok.to_std_rng();
    let a = rng.gen_range(cfg.axis_min..=cfg.axis_max);
    let b = rng.gen_range(cfg.axis_min..=cfg.axis_max);
    if rng.gen::<bool>() {
        Conic2::ellipse(a, b)
    } else {
        Conic2::hyperbola(a, b)
    }
}

/// Draw a random point on `conic` via the parametrization; the residual of
/// the result is at rounding level, far below the membership tolerance.
pub fn draw_point_on(conic: Conic2, cfg: DrawCfg, tok: ReplayToken) -> Vector2<f64> {
    let mut rng = tok.to_std_rng();
    let t = match conic {
        Conic2::Ellipse { .. } => rng.gen_range(0.0..std::f64::consts::TAU),
        Conic2::Hyperbola { .. } => rng.gen_range(-cfg.t_max..=cfg.t_max),
    };
    point_at(conic, t)
}
