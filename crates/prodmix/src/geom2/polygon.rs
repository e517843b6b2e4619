//! Polygon assembly: order a convex vertex set around its centroid.
//!
//! Sorting by centroid angle yields a simple polygon only because the
//! feasible region is an intersection of half-planes (convex). Do not reuse
//! this for non-convex point sets.

use nalgebra::Vector2;

/// Arithmetic mean of `pts`; `None` for an empty slice.
pub fn centroid(pts: &[Vector2<f64>]) -> Option<Vector2<f64>> {
    if pts.is_empty() {
        return None;
    }
    let sum = pts.iter().fold(Vector2::<f64>::zeros(), |acc, p| acc + p);
    Some(sum / pts.len() as f64)
}

/// Angle of `p` seen from `c`, in `(-π, π]`.
#[inline]
pub fn angle_from(c: Vector2<f64>, p: Vector2<f64>) -> f64 {
    (p.y - c.y).atan2(p.x - c.x)
}

/// Vertices sorted counterclockwise by angle around their centroid.
/// Empty input gives an empty polygon.
pub fn order_polygon(pts: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    let Some(c) = centroid(pts) else {
        return Vec::new();
    };
    let mut keyed: Vec<(f64, Vector2<f64>)> = pts.iter().map(|&p| (angle_from(c, p), p)).collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    keyed.into_iter().map(|(_, p)| p).collect()
}

/// Signed shoelace area (positive for counterclockwise order).
pub fn signed_area(poly: &[Vector2<f64>]) -> f64 {
    let m = poly.len();
    if m < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for k in 0..m {
        let p = poly[k];
        let q = poly[(k + 1) % m];
        twice += p.x * q.y - p.y * q.x;
    }
    0.5 * twice
}

/// True if no two non-adjacent edges of the closed polygon cross.
pub fn is_simple(poly: &[Vector2<f64>]) -> bool {
    let m = poly.len();
    if m < 4 {
        return true;
    }
    for i in 0..m {
        let (p1, p2) = (poly[i], poly[(i + 1) % m]);
        for j in (i + 2)..m {
            if i == 0 && j == m - 1 {
                continue;
            }
            let (q1, q2) = (poly[j], poly[(j + 1) % m]);
            if segments_cross(p1, p2, q1, q2) {
                return false;
            }
        }
    }
    true
}

#[inline]
fn orient(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Proper crossing (interiors intersect at a single point).
fn segments_cross(p1: Vector2<f64>, p2: Vector2<f64>, q1: Vector2<f64>, q2: Vector2<f64>) -> bool {
    let d1 = orient(q1, q2, p1);
    let d2 = orient(q1, q2, p2);
    let d3 = orient(p1, p2, q1);
    let d4 = orient(p1, p2, q2);
    d1 * d2 < 0.0 && d3 * d4 < 0.0
}
