//! Intersection enumeration and the feasibility filter.
//!
//! Every unordered pair of boundary lines (axes included) is solved as a 2×2
//! system; near-parallel pairs are skipped. Candidates surviving the
//! tolerant feasibility test are rounded and collected into a `VertexSet`.
//!
//! The axes are lines here but never filters: non-negativity is checked
//! directly on the coordinates, and only real constraints take part in the
//! slack test.

use nalgebra::{Matrix2, Vector2};
use std::cmp::Ordering;

use super::types::{Constraint, GeomCfg, Line};

/// Intersection of two lines, or `None` when `|det| < eps_det`.
pub fn intersect(l1: &Line, l2: &Line, eps_det: f64) -> Option<Vector2<f64>> {
    let (a1, b1, c1) = (l1.n.x, l1.n.y, l1.rhs);
    let (a2, b2, c2) = (l2.n.x, l2.n.y, l2.rhs);
    let det = Matrix2::new(a1, b1, a2, b2).determinant();
    if det.is_nan() || det.abs() < eps_det {
        return None;
    }
    let x = (c1 * b2 - c2 * b1) / det;
    let y = (a1 * c2 - a2 * c1) / det;
    Some(Vector2::new(x, y))
}

/// Intersection points of every unordered pair of `lines`, in pair order.
/// Duplicates are kept; nothing is filtered.
pub fn enumerate_intersections(lines: &[Line], eps_det: f64) -> Vec<Vector2<f64>> {
    let mut out = Vec::with_capacity(lines.len() * lines.len().saturating_sub(1) / 2);
    for (i, l1) in lines.iter().enumerate() {
        for l2 in &lines[i + 1..] {
            if let Some(p) = intersect(l1, l2, eps_det) {
                out.push(p);
            }
        }
    }
    out
}

/// Tolerant membership: `x, y >= -eps` and every constraint holds within `eps`.
pub fn is_feasible(p: Vector2<f64>, cons: &[Constraint], eps: f64) -> bool {
    if p.x < -eps || p.y < -eps {
        return false;
    }
    cons.iter().all(|c| c.satisfies_eps(p, eps))
}

/// Round to `digits` decimal places; `-0.0` collapses to `0.0`.
pub fn round_to(v: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    let scaled = v * scale;
    // Past 2^52 every f64 is already an integer multiple of the step.
    if !scaled.is_finite() || scaled.abs() >= 4_503_599_627_370_496.0 {
        return v + 0.0;
    }
    scaled.round() / scale + 0.0
}

/// Deduplicated feasible points, kept in lexicographic (x, then y) order.
///
/// Invariant: every stored point is already rounded, so equality is exact.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VertexSet {
    pts: Vec<Vector2<f64>>,
}

impl VertexSet {
    /// Round `p` and insert it unless an equal point is present.
    /// Returns `true` if the set grew.
    pub fn insert_rounded(&mut self, p: Vector2<f64>, digits: i32) -> bool {
        let q = Vector2::new(round_to(p.x, digits), round_to(p.y, digits));
        match self.pts.binary_search_by(|s| lex_cmp(s, &q)) {
            Ok(_) => false,
            Err(at) => {
                self.pts.insert(at, q);
                true
            }
        }
    }
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        self.pts.binary_search_by(|s| lex_cmp(s, &p)).is_ok()
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.pts.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }
    #[inline]
    pub fn as_slice(&self) -> &[Vector2<f64>] {
        &self.pts
    }
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Vector2<f64>> {
        self.pts.iter()
    }
}

fn lex_cmp(a: &Vector2<f64>, b: &Vector2<f64>) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}

/// Vertices of the feasible region: feasible pairwise intersections of
/// `lines`, plus the origin whenever it is feasible.
pub fn feasible_vertices(cons: &[Constraint], lines: &[Line], cfg: &GeomCfg) -> VertexSet {
    let mut verts = VertexSet::default();
    for p in enumerate_intersections(lines, cfg.eps_det) {
        if is_feasible(p, cons, cfg.eps_feas) {
            verts.insert_rounded(p, cfg.round_digits);
        }
    }
    let origin = Vector2::zeros();
    if is_feasible(origin, cons, cfg.eps_feas) {
        verts.insert_rounded(origin, cfg.round_digits);
    }
    verts
}
