use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use prodmix::data::{default_data, ProblemData};
use prodmix::geom2::GeomCfg;
use prodmix::plot::{render_region, PlotOptions, SvgSurface};
use prodmix::region::FeasibleRegion;
use prodmix::report::{format_solution, format_usage};
use prodmix::solve::{solve_region, Status};
use prodmix::Vec2;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "prodmix")]
#[command(about = "Solve and plot a two-product mix linear program")]
struct Cmd {
    /// JSON problem data; the built-in textbook instance if omitted
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve by vertex enumeration and print the plan and resource usage
    Solve,
    /// Write the feasible-region plot as SVG to stdout
    Plot(PlotArgs),
    /// Print the ordered feasible polygon and viewport as JSON
    Vertices {
        #[arg(long)]
        no_same_axis_max: bool,
    },
}

#[derive(Args)]
struct PlotArgs {
    #[arg(long, default_value = "Product-Mix LP")]
    title: String,
    /// Allow different units per pixel on the two axes
    #[arg(long)]
    no_equal_scale: bool,
    /// Size each axis from its own extrema
    #[arg(long)]
    no_same_axis_max: bool,
    /// Mark this point instead of the solver's optimum, as `X,Y`
    #[arg(long, value_parser = parse_point)]
    optimum: Option<(f64, f64)>,
    #[arg(long, default_value_t = 700.0)]
    width: f64,
    #[arg(long, default_value_t = 500.0)]
    height: f64,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let data = load_data(cmd.data.as_deref())?;
    match cmd.action {
        Action::Solve => solve(&data),
        Action::Plot(args) => plot(&data, &args, std::io::stdout().lock()),
        Action::Vertices { no_same_axis_max } => vertices(&data, !no_same_axis_max),
    }
}

fn load_data(path: Option<&Path>) -> Result<ProblemData> {
    let Some(path) = path else {
        tracing::info!(source = "builtin", "data");
        return Ok(default_data());
    };
    tracing::info!(source = %path.display(), "data");
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading problem data {}", path.display()))?;
    ProblemData::from_json(&text).with_context(|| format!("parsing {}", path.display()))
}

fn parse_point(s: &str) -> std::result::Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `X,Y`, got `{s}`"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("bad coordinate `{v}`: {e}"))
    };
    Ok((parse(x)?, parse(y)?))
}

fn solve(data: &ProblemData) -> Result<()> {
    let cfg = GeomCfg::default();
    let region = FeasibleRegion::from_data(data, &cfg, true)?;
    let sol = solve_region(data, &region, &cfg)?;
    tracing::info!(status = %sol.status, vertices = region.vertices.len(), "solve");

    println!("Solver: vertex-enumeration");
    println!("Status: {}\n", sol.status);
    if sol.status != Status::Optimal {
        return Ok(());
    }
    print!("{}", format_solution(&sol.levels, sol.total_profit));
    println!();
    print!("{}", format_usage(data, &sol.levels)?);
    Ok(())
}

fn plot<W: Write>(data: &ProblemData, args: &PlotArgs, out: W) -> Result<()> {
    let cfg = GeomCfg::default();
    let opts = PlotOptions {
        title: args.title.clone(),
        equal_scale: !args.no_equal_scale,
        same_axis_max: !args.no_same_axis_max,
    };
    if !(args.width > 0.0 && args.height > 0.0) {
        bail!("canvas size must be positive, got {}x{}", args.width, args.height);
    }
    // One region serves both the solver and the drawing.
    let region = FeasibleRegion::from_data(data, &cfg, opts.same_axis_max)?;
    let optimum = match args.optimum {
        Some((x, y)) => Some(Vec2::new(x, y)),
        None => {
            let sol = solve_region(data, &region, &cfg)?;
            if sol.status != Status::Optimal {
                tracing::warn!(status = %sol.status, "no optimum to mark");
            }
            sol.point
        }
    };
    let mut surface = SvgSurface::new(out, args.width, args.height);
    render_region(&region, optimum, &opts, &cfg, &mut surface).context("rendering plot")?;
    tracing::info!(
        vertices = region.polygon.len(),
        xmax = region.viewport.xmax,
        ymax = region.viewport.ymax,
        optimum = ?optimum.map(|p| (p.x, p.y)),
        "plot"
    );
    for p in &region.polygon {
        tracing::debug!(x = p.x, y = p.y, "vertex");
    }
    Ok(())
}

fn vertices(data: &ProblemData, same_axis_max: bool) -> Result<()> {
    let region = FeasibleRegion::from_data(data, &GeomCfg::default(), same_axis_max)?;
    tracing::info!(vertices = region.vertices.len(), area = region.area(), "vertices");
    println!("{}", serde_json::to_string_pretty(&region.summary())?);
    Ok(())
}
