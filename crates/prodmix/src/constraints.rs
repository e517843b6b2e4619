//! ConstraintSet builder: problem data → ordered half-plane list.
//!
//! Order is fixed: machine hours, labor hours, then the optional bound on B.
//! Non-negativity is not part of the list; it is enforced by the feasibility
//! filter, and the axes only join the line set used for intersections.

use crate::data::{Coefficients, DataError, ProblemData};
use crate::geom2::{Constraint, Line};

/// Build `[hours, labor, B_max?]` from `data` without mutating it.
pub fn build_constraints(data: &ProblemData) -> Result<Vec<Constraint>, DataError> {
    let [ha, hb] = data.pair(Coefficients::Hours)?;
    let [la, lb] = data.pair(Coefficients::Labor)?;
    let hours = data.hours_limit()?;
    let labor = data.labor_limit()?;
    let b_max = data.b_max()?;

    let mut out = Vec::with_capacity(3);
    out.push(Constraint::new(ha, hb, hours, boundary_label(ha, hb, "hours")));
    out.push(Constraint::new(la, lb, labor, boundary_label(la, lb, "labor")));
    if let Some(limit) = b_max {
        out.push(Constraint::new(0.0, 1.0, limit, boundary_label(0.0, 1.0, "B_max")));
    }
    Ok(out)
}

/// Boundary lines of `cons` followed by the axes `x = 0` and `y = 0`.
pub fn lines_with_axes(cons: &[Constraint]) -> Vec<Line> {
    let mut lines: Vec<Line> = cons.iter().map(Constraint::boundary).collect();
    lines.push(Line::y_axis());
    lines.push(Line::x_axis());
    lines
}

/// Legend text such as `2x + y = hours`.
pub fn boundary_label(a: f64, b: f64, name: &str) -> String {
    let mut lhs = String::new();
    for (coef, var) in [(a, "x"), (b, "y")] {
        if coef == 0.0 {
            continue;
        }
        let mag = coef.abs();
        let term = if mag == 1.0 {
            var.to_string()
        } else {
            format!("{mag}{var}")
        };
        match (lhs.is_empty(), coef < 0.0) {
            (true, false) => lhs.push_str(&term),
            (true, true) => {
                lhs.push('-');
                lhs.push_str(&term);
            }
            (false, false) => {
                lhs.push_str(" + ");
                lhs.push_str(&term);
            }
            (false, true) => {
                lhs.push_str(" - ");
                lhs.push_str(&term);
            }
        }
    }
    if lhs.is_empty() {
        lhs.push('0');
    }
    format!("{lhs} = {name}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::default_data;

    #[test]
    fn default_data_builds_three_constraints_in_order() {
        let cons = build_constraints(&default_data()).unwrap();
        assert_eq!(cons.len(), 3);
        assert_eq!((cons[0].a(), cons[0].b(), cons[0].rhs), (2.0, 1.0, 100.0));
        assert_eq!((cons[1].a(), cons[1].b(), cons[1].rhs), (1.0, 1.0, 80.0));
        assert_eq!((cons[2].a(), cons[2].b(), cons[2].rhs), (0.0, 1.0, 40.0));
        let labels: Vec<_> = cons.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["2x + y = hours", "x + y = labor", "y = B_max"]);
    }

    #[test]
    fn optional_bound_is_left_out() {
        let mut data = default_data();
        data.limits.b_max = None;
        let cons = build_constraints(&data).unwrap();
        assert_eq!(cons.len(), 2);
        assert_eq!(lines_with_axes(&cons).len(), 4);
    }

    #[test]
    fn builder_does_not_touch_input() {
        let data = default_data();
        let before = data.clone();
        let _ = build_constraints(&data).unwrap();
        assert_eq!(data, before);
    }

    #[test]
    fn missing_limit_fails_before_geometry() {
        let mut data = default_data();
        data.limits.hours = None;
        let err = build_constraints(&data).unwrap_err();
        assert!(matches!(err, DataError::InvalidDataKind { ref field, .. } if field == "limits.hours"));
    }

    #[test]
    fn missing_product_fails() {
        let mut data = default_data();
        data.hours.remove("A");
        assert!(build_constraints(&data).is_err());
    }

    #[test]
    fn labels_handle_signs_and_zeros() {
        assert_eq!(boundary_label(-1.0, 2.5, "c"), "-x + 2.5y = c");
        assert_eq!(boundary_label(3.0, -1.0, "c"), "3x - y = c");
        assert_eq!(boundary_label(0.0, 0.0, "c"), "0 = c");
    }
}
