//! Viewport sizing from vertex and intercept extrema.

use nalgebra::Vector2;
use serde::Serialize;

use super::types::{Constraint, GeomCfg};

/// Plot range `[0, xmax] × [0, ymax]`.
///
/// Invariant: `xmax > 0` and `ymax > 0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Viewport {
    pub xmax: f64,
    pub ymax: f64,
}

/// Non-negative x-intercept of the boundary of `c` (`0` if `a ≈ 0`).
#[inline]
pub fn x_intercept(c: &Constraint, eps_det: f64) -> f64 {
    let v = if c.a().abs() > eps_det { c.rhs / c.a() } else { 0.0 };
    v.max(0.0)
}

/// Non-negative y-intercept of the boundary of `c` (`0` if `b ≈ 0`).
#[inline]
pub fn y_intercept(c: &Constraint, eps_det: f64) -> f64 {
    let v = if c.b().abs() > eps_det { c.rhs / c.b() } else { 0.0 };
    v.max(0.0)
}

/// Size the viewport so it covers every vertex and intercept, inflated by
/// `cfg.margin`. With `same_axis_max` both bounds take the larger value.
pub fn size_viewport(
    verts: &[Vector2<f64>],
    cons: &[Constraint],
    cfg: &GeomCfg,
    same_axis_max: bool,
) -> Viewport {
    let xs = verts
        .iter()
        .map(|p| p.x)
        .chain(cons.iter().map(|c| x_intercept(c, cfg.eps_det)));
    let ys = verts
        .iter()
        .map(|p| p.y)
        .chain(cons.iter().map(|c| y_intercept(c, cfg.eps_det)));
    let mut xmax = extent(xs, cfg.default_extent) * cfg.margin;
    let mut ymax = extent(ys, cfg.default_extent) * cfg.margin;
    if same_axis_max {
        let m = xmax.max(ymax);
        xmax = m;
        ymax = m;
    }
    Viewport { xmax, ymax }
}

/// Largest finite candidate, or `fallback` if none is strictly positive.
fn extent(candidates: impl Iterator<Item = f64>, fallback: f64) -> f64 {
    let m = candidates
        .filter(|v| v.is_finite())
        .fold(f64::NEG_INFINITY, f64::max);
    if m > 0.0 {
        m
    } else {
        fallback
    }
}
