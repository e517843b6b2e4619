//! Vertex-enumeration solver for the two-product LP.
//!
//! For two variables the optimum of a bounded feasible region sits at a
//! vertex, so the solver scans the polygon produced by the geometry pipeline.
//! Unboundedness is decided on the recession cone `{d >= 0 : a·d <= 0}`,
//! whose extreme rays are among the axis directions and the constraint
//! boundary directions.

use nalgebra::Vector2;
use std::collections::BTreeMap;
use std::fmt;

use crate::data::{Coefficients, DataError, ProblemData, PRODUCTS};
use crate::geom2::{Constraint, GeomCfg};
use crate::region::FeasibleRegion;

/// Termination status of a solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Optimal,
    Infeasible,
    Unbounded,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Optimal => "optimal",
            Status::Infeasible => "infeasible",
            Status::Unbounded => "unbounded",
        };
        f.write_str(s)
    }
}

/// Outcome of a solve. `point`, `levels` and `total_profit` are only
/// meaningful for `Status::Optimal`.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    pub status: Status,
    pub point: Option<Vector2<f64>>,
    /// Production level per product name.
    pub levels: BTreeMap<String, f64>,
    pub total_profit: f64,
}

impl Solution {
    fn without_optimum(status: Status) -> Self {
        Self {
            status,
            point: None,
            levels: BTreeMap::new(),
            total_profit: 0.0,
        }
    }
}

/// Maximize `profit·(x, y)` over `region`.
pub fn solve_region(data: &ProblemData, region: &FeasibleRegion, cfg: &GeomCfg) -> Result<Solution, DataError> {
    let [px, py] = data.pair(Coefficients::Profit)?;
    let profit = Vector2::new(px, py);

    if region.vertices.is_empty() {
        return Ok(Solution::without_optimum(Status::Infeasible));
    }
    if improving_ray(&region.constraints, profit, cfg).is_some() {
        return Ok(Solution::without_optimum(Status::Unbounded));
    }

    let mut best: Option<(Vector2<f64>, f64)> = None;
    for &p in &region.polygon {
        let val = profit.dot(&p);
        if best.is_none_or(|(_, b)| val > b) {
            best = Some((p, val));
        }
    }
    let Some((point, total_profit)) = best else {
        return Ok(Solution::without_optimum(Status::Infeasible));
    };
    let levels = PRODUCTS
        .iter()
        .zip([point.x, point.y])
        .map(|(name, q)| (name.to_string(), q))
        .collect();
    Ok(Solution {
        status: Status::Optimal,
        point: Some(point),
        levels,
        total_profit,
    })
}

/// Build the region with default tolerances and solve it.
pub fn solve(data: &ProblemData) -> Result<Solution, DataError> {
    let cfg = GeomCfg::default();
    let region = FeasibleRegion::from_data(data, &cfg, true)?;
    solve_region(data, &region, &cfg)
}

/// A non-negative direction `d` with `a·d <= 0` for every constraint and
/// `profit·d > eps`, if one exists.
pub fn improving_ray(cons: &[Constraint], profit: Vector2<f64>, cfg: &GeomCfg) -> Option<Vector2<f64>> {
    let mut rays = vec![Vector2::new(1.0, 0.0), Vector2::new(0.0, 1.0)];
    for c in cons {
        let along = Vector2::new(c.b(), -c.a());
        for d in [along, -along] {
            if d.norm() > cfg.eps_det && d.x >= -cfg.eps_feas && d.y >= -cfg.eps_feas {
                rays.push(d / d.norm());
            }
        }
    }
    rays.into_iter().find(|d| {
        cons.iter().all(|c| c.n.dot(d) <= cfg.eps_feas) && profit.dot(d) > cfg.eps_feas
    })
}
