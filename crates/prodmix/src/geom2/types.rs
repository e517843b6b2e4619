//! Basic 2D types and tolerances for the feasible-region pipeline.
//!
//! - `GeomCfg`: centralizes epsilons for determinant, feasibility, rounding,
//!   and the viewport margin. Passed explicitly into every geometry function.
//! - `Constraint`: closed half-plane `a·x + b·y <= rhs` with a display label.
//! - `Line`: the equation `a·x + b·y = rhs` used for intersection only.
//!
//! Code cross-refs: `vertices::{intersect, is_feasible}`, `viewport::size_viewport`

use nalgebra::Vector2;

/// Geometry configuration (tolerances and sizing constants).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Pairs of lines with `|det| < eps_det` are treated as parallel.
    pub eps_det: f64,
    /// Slack allowed on every constraint and on non-negativity.
    pub eps_feas: f64,
    /// Decimal digits kept when inserting a vertex into the vertex set.
    pub round_digits: i32,
    /// Viewport inflation factor applied to the largest extent.
    pub margin: f64,
    /// Extent used when no strictly positive candidate exists.
    pub default_extent: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_det: 1e-12,
            eps_feas: 1e-9,
            round_digits: 10,
            margin: 1.1,
            default_extent: 10.0,
        }
    }
}

/// Closed half-plane `n · (x, y) <= rhs` (no normalization).
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint {
    pub n: Vector2<f64>,
    pub rhs: f64,
    pub label: String,
}

impl Constraint {
    #[inline]
    pub fn new(a: f64, b: f64, rhs: f64, label: impl Into<String>) -> Self {
        Self {
            n: Vector2::new(a, b),
            rhs,
            label: label.into(),
        }
    }
    #[inline]
    pub fn a(&self) -> f64 {
        self.n.x
    }
    #[inline]
    pub fn b(&self) -> f64 {
        self.n.y
    }
    /// Signed violation `n·p - rhs`; positive means outside.
    #[inline]
    pub fn excess(&self, p: Vector2<f64>) -> f64 {
        self.n.dot(&p) - self.rhs
    }
    #[inline]
    pub fn satisfies_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        self.excess(p) <= eps
    }
    /// Boundary line of this half-plane.
    #[inline]
    pub fn boundary(&self) -> Line {
        Line {
            n: self.n,
            rhs: self.rhs,
        }
    }
}

/// Line `n · (x, y) = rhs`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub n: Vector2<f64>,
    pub rhs: f64,
}

impl Line {
    #[inline]
    pub fn new(a: f64, b: f64, rhs: f64) -> Self {
        Self {
            n: Vector2::new(a, b),
            rhs,
        }
    }
    /// The y axis, `x = 0`.
    #[inline]
    pub fn y_axis() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }
    /// The x axis, `y = 0`.
    #[inline]
    pub fn x_axis() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }
    /// Residual `n·p - rhs` (zero on the line).
    #[inline]
    pub fn residual(&self, p: Vector2<f64>) -> f64 {
        self.n.dot(&p) - self.rhs
    }
}
