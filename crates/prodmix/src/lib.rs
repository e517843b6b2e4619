//! Two-product LP: feasible-region geometry, vertex solver, and plotting.
//!
//! Pipeline
//! - `data`: problem record (profit, hours, labor, limits) and validation.
//! - `constraints`: record → ordered half-plane list (optional `B_max`).
//! - `geom2`: pairwise intersections, tolerant feasibility filter, centroid
//!   ordering, viewport sizing.
//! - `region`: the pipeline above, run once per call.
//! - `solve` / `report`: vertex-enumeration optimum and its text report.
//! - `plot`: drawing commands, the `Surface` seam, and an SVG surface.
//!
//! Everything is synchronous and allocation-local; no state survives a call.

pub mod constraints;
pub mod data;
pub mod geom2;
pub mod plot;
pub mod region;
pub mod report;
pub mod solve;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::constraints::build_constraints;
    pub use crate::data::{default_data, DataError, ProblemData};
    pub use crate::geom2::{Constraint, GeomCfg, VertexSet, Viewport};
    pub use crate::plot::{render, PlotOptions, RenderError, Surface, SvgSurface};
    pub use crate::region::FeasibleRegion;
    pub use crate::solve::{solve, Solution, Status};
    pub use nalgebra::Vector2 as Vec2;
}
