//! 2D feasible-region geometry (vertex enumeration for small half-plane sets).
//!
//! Purpose
//! - Recover the feasible polygon of `a·x + b·y <= rhs` constraints plus
//!   non-negativity by brute-force pairwise intersection, tolerant
//!   filtering, and centroid-angle ordering.
//! - Size a plotting viewport from the same data.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>`.
//! - All tolerances come from an explicit `GeomCfg`; nothing reads globals.
//! - Only constraints filter; the axes join the line set for intersections.
//!
//! Code cross-refs: `crate::constraints::build_constraints`, `crate::region::FeasibleRegion`

pub mod polygon;
mod types;
pub mod vertices;
pub mod viewport;

pub use polygon::{centroid, is_simple, order_polygon, signed_area};
pub use types::{Constraint, GeomCfg, Line};
pub use vertices::{enumerate_intersections, feasible_vertices, intersect, is_feasible, VertexSet};
pub use viewport::{size_viewport, x_intercept, y_intercept, Viewport};

#[cfg(test)]
mod tests;
