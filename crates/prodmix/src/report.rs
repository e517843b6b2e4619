//! Plain-text report of a solution: production plan and resource usage.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::data::{Coefficients, DataError, ProblemData, PRODUCT_Y};

/// Production plan followed by a blank line and the total profit.
pub fn format_solution(levels: &BTreeMap<String, f64>, total_profit: f64) -> String {
    let mut out = String::from("Optimal production plan:\n");
    for (product, q) in levels {
        let _ = writeln!(out, "  {product}: {q:.2} units");
    }
    let _ = writeln!(out, "\nTotal profit: {total_profit:.2}");
    out
}

/// Left-hand side of each resource constraint at `levels` against its limit.
/// The B bound line appears only if `B_max` is configured.
pub fn format_usage(data: &ProblemData, levels: &BTreeMap<String, f64>) -> Result<String, DataError> {
    let mut mh_used = 0.0;
    let mut lb_used = 0.0;
    for (product, q) in levels {
        mh_used += data.coefficient(Coefficients::Hours, product)? * q;
        lb_used += data.coefficient(Coefficients::Labor, product)? * q;
    }
    let mut out = String::from("Resource usage at optimum:\n");
    let _ = writeln!(out, "  Machine hours: {mh_used:.2} / {}", data.hours_limit()?);
    let _ = writeln!(out, "  Labor hours:   {lb_used:.2} / {}", data.labor_limit()?);
    if let (Some(limit), Some(b)) = (data.b_max()?, levels.get(PRODUCT_Y)) {
        let _ = writeln!(out, "  B upper bound: {b:.2} / {limit}");
    }
    Ok(out)
}
