//! Full geometry pipeline: constraints → vertices → polygon + viewport.

use nalgebra::Vector2;
use serde::Serialize;

use crate::constraints::{build_constraints, lines_with_axes};
use crate::data::{DataError, ProblemData};
use crate::geom2::{feasible_vertices, order_polygon, signed_area, size_viewport};
use crate::geom2::{Constraint, GeomCfg, VertexSet, Viewport};

/// Everything the plot needs about one problem instance.
///
/// Built fresh per call; nothing is cached across calls.
#[derive(Clone, Debug, PartialEq)]
pub struct FeasibleRegion {
    pub constraints: Vec<Constraint>,
    pub vertices: VertexSet,
    /// `vertices` in counterclockwise centroid-angle order.
    pub polygon: Vec<Vector2<f64>>,
    pub viewport: Viewport,
}

impl FeasibleRegion {
    /// Run the pipeline on an already-built constraint list.
    pub fn from_constraints(constraints: Vec<Constraint>, cfg: &GeomCfg, same_axis_max: bool) -> Self {
        let lines = lines_with_axes(&constraints);
        let vertices = feasible_vertices(&constraints, &lines, cfg);
        let polygon = order_polygon(vertices.as_slice());
        let viewport = size_viewport(vertices.as_slice(), &constraints, cfg, same_axis_max);
        Self {
            constraints,
            vertices,
            polygon,
            viewport,
        }
    }

    /// Validate `data`, build its constraints, and run the pipeline.
    /// Data errors surface before any geometry is computed.
    pub fn from_data(data: &ProblemData, cfg: &GeomCfg, same_axis_max: bool) -> Result<Self, DataError> {
        let constraints = build_constraints(data)?;
        Ok(Self::from_constraints(constraints, cfg, same_axis_max))
    }

    /// True when the polygon encloses positive area.
    #[inline]
    pub fn has_area(&self) -> bool {
        self.area() > 0.0
    }

    /// Shoelace area of the ordered polygon.
    #[inline]
    pub fn area(&self) -> f64 {
        signed_area(&self.polygon).abs()
    }

    pub fn summary(&self) -> RegionSummary {
        RegionSummary {
            constraints: self
                .constraints
                .iter()
                .map(|c| ConstraintSummary {
                    a: c.a(),
                    b: c.b(),
                    rhs: c.rhs,
                    label: c.label.clone(),
                })
                .collect(),
            polygon: self.polygon.iter().map(|p| [p.x, p.y]).collect(),
            area: self.area(),
            viewport: self.viewport,
        }
    }
}

/// Plain serializable view of a `FeasibleRegion`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegionSummary {
    pub constraints: Vec<ConstraintSummary>,
    pub polygon: Vec<[f64; 2]>,
    pub area: f64,
    pub viewport: Viewport,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConstraintSummary {
    pub a: f64,
    pub b: f64,
    pub rhs: f64,
    pub label: String,
}
