use super::*;
use crate::constraints::{build_constraints, lines_with_axes};
use crate::data::default_data;
use crate::region::FeasibleRegion;
use nalgebra::vector;
use proptest::prelude::*;

fn assert_feasible_closure(verts: &VertexSet, cons: &[Constraint], eps: f64) {
    for p in verts.iter() {
        assert!(p.x >= -eps && p.y >= -eps, "negative coordinate in {p:?}");
        for c in cons {
            assert!(c.rhs - c.n.dot(p) >= -eps, "{} violated at {p:?}", c.label);
        }
    }
}

#[test]
fn product_mix_vertices_and_area() {
    let cfg = GeomCfg::default();
    let cons = build_constraints(&default_data()).unwrap();
    let lines = lines_with_axes(&cons);
    let verts = feasible_vertices(&cons, &lines, &cfg);
    assert_feasible_closure(&verts, &cons, cfg.eps_feas);

    // hours ∩ B_max: 2x + 40 = 100 → (30, 40); labor ∩ B_max at (40, 40)
    // breaks the hours limit, and labor ∩ hours at (20, 60) breaks B_max.
    for p in [vector![0.0, 0.0], vector![50.0, 0.0], vector![30.0, 40.0], vector![0.0, 40.0]] {
        assert!(verts.contains(p), "missing vertex {p:?}");
    }
    assert!(!verts.contains(vector![40.0, 40.0]));
    assert_eq!(verts.len(), 4);

    // Rectangle [0,30]×[0,40] plus triangle (30,0)-(50,0)-(30,40).
    let expected_area = 30.0 * 40.0 + 0.5 * 20.0 * 40.0;
    let poly = order_polygon(verts.as_slice());
    assert!((signed_area(&poly) - expected_area).abs() < 1e-9);
    assert!(is_simple(&poly));
}

#[test]
fn zero_hours_collapses_to_origin() {
    let mut data = default_data();
    data.limits.hours = Some(0.0);
    let region = FeasibleRegion::from_data(&data, &GeomCfg::default(), true).unwrap();
    assert_eq!(region.vertices.as_slice(), &[vector![0.0, 0.0]]);
    assert!(region.polygon.len() <= 1);
    assert_eq!(region.area(), 0.0);
    assert!(region.viewport.xmax > 0.0 && region.viewport.ymax > 0.0);
}

#[test]
fn parallel_lines_are_skipped() {
    let l1 = Line::new(1.0, 1.0, 2.0);
    let l2 = Line::new(2.0, 2.0, 10.0);
    assert!(intersect(&l1, &l2, 1e-12).is_none());
    // Coincident lines are skipped too.
    assert!(intersect(&l1, &l1, 1e-12).is_none());
    let pts = enumerate_intersections(&[l1, l2, Line::y_axis()], 1e-12);
    assert_eq!(pts.len(), 2);
}

#[test]
fn near_parallel_lines_are_skipped() {
    // det = 1e-13: nonzero, but below the threshold.
    let l1 = Line::new(1.0, 1.0, 2.0);
    let l2 = Line::new(1.0, 1.0 + 1e-13, 3.0);
    assert!(intersect(&l1, &l2, 1e-12).is_none());
    assert!(intersect(&l1, &l2, 1e-14).is_some());
    let pts = enumerate_intersections(&[l1, l2], 1e-12);
    assert!(pts.is_empty());
}

#[test]
fn enumeration_keeps_duplicates() {
    // Three lines through (1, 1).
    let lines = [
        Line::new(1.0, 0.0, 1.0),
        Line::new(0.0, 1.0, 1.0),
        Line::new(1.0, 1.0, 2.0),
    ];
    let pts = enumerate_intersections(&lines, 1e-12);
    assert_eq!(pts.len(), 3);
    assert!(pts.iter().all(|p| (p - vector![1.0, 1.0]).norm() < 1e-12));
}

#[test]
fn feasibility_is_tolerant_but_bounded() {
    let cons = vec![Constraint::new(1.0, 1.0, 1.0, "c")];
    assert!(is_feasible(vector![0.5, 0.5 + 5e-10], &cons, 1e-9));
    assert!(!is_feasible(vector![0.5, 0.5 + 5e-9], &cons, 1e-9));
    assert!(is_feasible(vector![-5e-10, 0.0], &cons, 1e-9));
    assert!(!is_feasible(vector![-5e-9, 0.0], &cons, 1e-9));
}

#[test]
fn rounding_merges_near_duplicates() {
    let mut set = VertexSet::default();
    assert!(set.insert_rounded(vector![1.0, 2.0], 10));
    assert!(!set.insert_rounded(vector![1.0 + 1e-13, 2.0 - 1e-13], 10));
    assert!(set.insert_rounded(vector![1.0 + 1e-6, 2.0], 10));
    assert!(set.insert_rounded(vector![-0.0, -0.0], 10));
    assert!(!set.insert_rounded(vector![0.0, 0.0], 10));
    assert_eq!(set.len(), 3);
}

#[test]
fn axes_bound_only_through_non_negativity() {
    // A single bound y <= 5 leaves x free: the axes supply (0,0) and (0,5),
    // but nothing limits x from above.
    let cfg = GeomCfg::default();
    let cons = vec![Constraint::new(0.0, 1.0, 5.0, "y = 5")];
    let verts = feasible_vertices(&cons, &lines_with_axes(&cons), &cfg);
    assert_eq!(verts.as_slice(), &[vector![0.0, 0.0], vector![0.0, 5.0]]);

    // A constraint crossing the x axis at negative x contributes no vertex.
    let cons = vec![Constraint::new(-1.0, 1.0, 2.0, "y - x = 2")];
    let verts = feasible_vertices(&cons, &lines_with_axes(&cons), &cfg);
    assert!(!verts.contains(vector![-2.0, 0.0]));
    assert!(verts.contains(vector![0.0, 2.0]));
}

#[test]
fn origin_is_added_when_feasible() {
    let cfg = GeomCfg::default();
    let cons = vec![Constraint::new(1.0, 1.0, 3.0, "c")];
    let verts = feasible_vertices(&cons, &[], &cfg);
    assert_eq!(verts.as_slice(), &[vector![0.0, 0.0]]);
    let blocked = vec![Constraint::new(1.0, 1.0, -1.0, "c")];
    assert!(feasible_vertices(&blocked, &[], &cfg).is_empty());
}

fn constraint() -> impl Strategy<Value = Constraint> {
    (0.1f64..10.0, 0.1f64..10.0, 1.0f64..100.0).prop_map(|(a, b, rhs)| Constraint::new(a, b, rhs, "c"))
}

fn constraint_set() -> impl Strategy<Value = Vec<Constraint>> {
    prop::collection::vec(constraint(), 2..=5)
}

proptest! {
    #[test]
    fn intersection_lies_on_both_lines(
        a1 in -10.0f64..10.0, b1 in -10.0f64..10.0, c1 in -100.0f64..100.0,
        a2 in -10.0f64..10.0, b2 in -10.0f64..10.0, c2 in -100.0f64..100.0,
    ) {
        let (l1, l2) = (Line::new(a1, b1, c1), Line::new(a2, b2, c2));
        prop_assume!((a1 * b2 - a2 * b1).abs() > 0.1);
        let p = intersect(&l1, &l2, 1e-12).unwrap();
        prop_assert!(l1.residual(p).abs() < 1e-9);
        prop_assert!(l2.residual(p).abs() < 1e-9);
    }

    #[test]
    fn vertices_are_feasible(cons in constraint_set()) {
        let cfg = GeomCfg::default();
        let verts = feasible_vertices(&cons, &lines_with_axes(&cons), &cfg);
        prop_assert!(!verts.is_empty());
        assert_feasible_closure(&verts, &cons, cfg.eps_feas);
    }

    #[test]
    fn polygon_is_angle_sorted_and_simple(cons in constraint_set()) {
        let region = FeasibleRegion::from_constraints(cons, &GeomCfg::default(), true);
        let poly = &region.polygon;
        prop_assert!(poly.len() >= 3);
        let c = centroid(region.vertices.as_slice()).unwrap();
        let angles: Vec<f64> = poly.iter().map(|p| polygon::angle_from(c, *p)).collect();
        prop_assert!(angles.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(is_simple(poly));
        prop_assert!(signed_area(poly) > 0.0);
    }

    #[test]
    fn viewport_covers_vertices_and_intercepts(cons in constraint_set(), same in any::<bool>()) {
        let cfg = GeomCfg::default();
        let region = FeasibleRegion::from_constraints(cons, &cfg, same);
        let vp = region.viewport;
        let max_x = region.vertices.iter().map(|p| p.x)
            .chain(region.constraints.iter().map(|c| x_intercept(c, cfg.eps_det)))
            .fold(0.0, f64::max);
        let max_y = region.vertices.iter().map(|p| p.y)
            .chain(region.constraints.iter().map(|c| y_intercept(c, cfg.eps_det)))
            .fold(0.0, f64::max);
        prop_assert!(vp.xmax >= cfg.margin * max_x - 1e-9);
        prop_assert!(vp.ymax >= cfg.margin * max_y - 1e-9);
        prop_assert!(vp.xmax > 0.0 && vp.ymax > 0.0);
        if same {
            prop_assert_eq!(vp.xmax, vp.ymax);
        }
    }

    #[test]
    fn pipeline_is_idempotent(cons in constraint_set()) {
        let cfg = GeomCfg::default();
        let first = FeasibleRegion::from_constraints(cons.clone(), &cfg, true);
        let second = FeasibleRegion::from_constraints(cons, &cfg, true);
        prop_assert_eq!(&first.vertices, &second.vertices);
        prop_assert_eq!(first.viewport, second.viewport);
    }
}
