//! Print the feasible polygon, viewport, and optimum of the default data.
//!
//! Usage:
//!   cargo run -p prodmix --example default_mix
//!
//! Pass a number to override the machine-hours limit, e.g. `-- 0` for the
//! degenerate single-point region.

use prodmix::data::default_data;
use prodmix::geom2::GeomCfg;
use prodmix::region::FeasibleRegion;
use prodmix::solve::solve_region;

fn main() {
    let mut data = default_data();
    if let Some(hours) = std::env::args().nth(1).and_then(|s| s.parse::<f64>().ok()) {
        data.limits.hours = Some(hours);
    }
    let cfg = GeomCfg::default();
    let region = FeasibleRegion::from_data(&data, &cfg, true).expect("default data is complete");
    for (k, p) in region.polygon.iter().enumerate() {
        println!("vertex {k}: ({:.2}, {:.2})", p.x, p.y);
    }
    println!("area: {:.2}", region.area());
    println!(
        "viewport: xmax={:.2} ymax={:.2}",
        region.viewport.xmax, region.viewport.ymax
    );
    let sol = solve_region(&data, &region, &cfg).expect("profit is set");
    match sol.point {
        Some(p) => println!("{}: ({:.2}, {:.2}) profit {:.2}", sol.status, p.x, p.y, sol.total_profit),
        None => println!("{}", sol.status),
    }
}
