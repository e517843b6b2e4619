//! Plot description and the drawing-surface seam.
//!
//! `describe_plot` turns a `FeasibleRegion` plus an optional optimum into an
//! ordered list of `PlotCommand`s in data coordinates. A `Surface` consumes
//! the list; `render` wires both together and is the entry point callers use.
//!
//! Command order is fixed: frame, constraint lines, axes, region fill,
//! optimum marker, legend. Surfaces may rely on the frame coming first.

pub mod svg;

use nalgebra::Vector2;
use std::fmt;

use crate::data::{DataError, ProblemData, PRODUCT_X, PRODUCT_Y};
use crate::geom2::{GeomCfg, Viewport};
use crate::region::FeasibleRegion;

pub use svg::{SvgError, SvgSurface};

/// Fill opacity of the feasible region.
pub const REGION_ALPHA: f64 = 0.25;

/// Options recognised by `render`.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotOptions {
    pub title: String,
    /// One data unit spans the same length on both axes.
    pub equal_scale: bool,
    /// Force a square viewport (`xmax == ymax`).
    pub same_axis_max: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            title: "Product-Mix LP".to_string(),
            equal_scale: true,
            same_axis_max: true,
        }
    }
}

/// One drawing primitive, in data coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum PlotCommand {
    /// Axis ranges `[0, xmax] × [0, ymax]`, labels, and aspect policy.
    Frame {
        viewport: Viewport,
        title: String,
        x_label: String,
        y_label: String,
        equal_aspect: bool,
    },
    /// Boundary of constraint number `series`.
    ConstraintLine {
        from: Vector2<f64>,
        to: Vector2<f64>,
        series: usize,
        label: String,
    },
    /// Coordinate axis through the origin.
    Axis { from: Vector2<f64>, to: Vector2<f64> },
    /// Shaded feasible polygon.
    Region {
        polygon: Vec<Vector2<f64>>,
        alpha: f64,
        label: String,
    },
    Optimum { at: Vector2<f64>, label: String },
    Legend { entries: Vec<LegendEntry> },
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub swatch: Swatch,
}

/// Legend glyph; `Line` carries the constraint series index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swatch {
    Line(usize),
    Fill,
    Marker,
}

/// A drawing backend. One call draws one complete plot.
pub trait Surface {
    type Error: std::error::Error + Send + Sync + 'static;

    fn draw(&mut self, commands: &[PlotCommand]) -> Result<(), Self::Error>;
}

/// Errors surfaced by `render`.
#[derive(Debug)]
pub enum RenderError {
    /// Input rejected before any geometry was computed.
    Data(DataError),
    /// The surface failed; nothing is retried.
    Surface(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Data(_) => write!(f, "cannot plot the problem data"),
            RenderError::Surface(_) => write!(f, "drawing surface failed"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Data(e) => Some(e),
            RenderError::Surface(e) => Some(e.as_ref()),
        }
    }
}

impl From<DataError> for RenderError {
    fn from(e: DataError) -> Self {
        RenderError::Data(e)
    }
}

/// Build the region for `data`, describe it, and draw it on `surface`.
/// Returns the region so callers can report on what was drawn.
pub fn render<S: Surface>(
    data: &ProblemData,
    optimum: Option<Vector2<f64>>,
    opts: &PlotOptions,
    cfg: &GeomCfg,
    surface: &mut S,
) -> Result<FeasibleRegion, RenderError> {
    let region = FeasibleRegion::from_data(data, cfg, opts.same_axis_max)?;
    render_region(&region, optimum, opts, cfg, surface)?;
    Ok(region)
}

/// Draw an already built `region`, e.g. one the caller also solved over.
/// `opts.same_axis_max` is ignored; the region's viewport is used as is.
pub fn render_region<S: Surface>(
    region: &FeasibleRegion,
    optimum: Option<Vector2<f64>>,
    opts: &PlotOptions,
    cfg: &GeomCfg,
    surface: &mut S,
) -> Result<(), RenderError> {
    let commands = describe_plot(region, optimum, opts, cfg);
    surface
        .draw(&commands)
        .map_err(|e| RenderError::Surface(Box::new(e)))
}

/// Drawing commands for `region`; pure and deterministic.
pub fn describe_plot(
    region: &FeasibleRegion,
    optimum: Option<Vector2<f64>>,
    opts: &PlotOptions,
    cfg: &GeomCfg,
) -> Vec<PlotCommand> {
    let vp = region.viewport;
    let mut cmds = Vec::with_capacity(region.constraints.len() + 6);
    let mut legend = Vec::new();

    cmds.push(PlotCommand::Frame {
        viewport: vp,
        title: opts.title.clone(),
        x_label: format!("x ({PRODUCT_X})"),
        y_label: format!("y ({PRODUCT_Y})"),
        equal_aspect: opts.equal_scale,
    });

    for (series, c) in region.constraints.iter().enumerate() {
        let Some((from, to)) = boundary_segment(c.a(), c.b(), c.rhs, vp, cfg.eps_det) else {
            continue;
        };
        cmds.push(PlotCommand::ConstraintLine {
            from,
            to,
            series,
            label: c.label.clone(),
        });
        legend.push(LegendEntry {
            label: c.label.clone(),
            swatch: Swatch::Line(series),
        });
    }

    cmds.push(PlotCommand::Axis {
        from: Vector2::zeros(),
        to: Vector2::new(vp.xmax, 0.0),
    });
    cmds.push(PlotCommand::Axis {
        from: Vector2::zeros(),
        to: Vector2::new(0.0, vp.ymax),
    });

    if !region.polygon.is_empty() {
        let label = "Feasible region".to_string();
        cmds.push(PlotCommand::Region {
            polygon: region.polygon.clone(),
            alpha: REGION_ALPHA,
            label: label.clone(),
        });
        legend.push(LegendEntry {
            label,
            swatch: Swatch::Fill,
        });
    }

    if let Some(at) = optimum {
        let label = optimum_label(at);
        cmds.push(PlotCommand::Optimum {
            at,
            label: label.clone(),
        });
        legend.push(LegendEntry {
            label,
            swatch: Swatch::Marker,
        });
    }

    cmds.push(PlotCommand::Legend { entries: legend });
    cmds
}

/// `Optimal (30.00, 40.00)`.
pub fn optimum_label(at: Vector2<f64>) -> String {
    format!("Optimal ({:.2}, {:.2})", at.x, at.y)
}

/// Segment of `a·x + b·y = rhs` spanning the viewport width, or its height
/// for a vertical line. `None` if both coefficients vanish.
pub fn boundary_segment(
    a: f64,
    b: f64,
    rhs: f64,
    vp: Viewport,
    eps_det: f64,
) -> Option<(Vector2<f64>, Vector2<f64>)> {
    if b.abs() > eps_det {
        let y_at = |x: f64| (rhs - a * x) / b;
        Some((Vector2::new(0.0, y_at(0.0)), Vector2::new(vp.xmax, y_at(vp.xmax))))
    } else if a.abs() > eps_det {
        let x = rhs / a;
        Some((Vector2::new(x, 0.0), Vector2::new(x, vp.ymax)))
    } else {
        None
    }
}
