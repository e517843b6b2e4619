//! SVG surface: turns a `PlotCommand` list into one standalone SVG document
//! and writes it to any `io::Write`.
//!
//! Data coordinates are mapped into a fixed plot area inside the canvas.
//! Constraint lines are clipped to that area; the legend sits in its top
//! right corner.

use nalgebra::Vector2;
use std::fmt::{self, Write as _};
use std::io;

use super::{LegendEntry, PlotCommand, Surface, Swatch, REGION_ALPHA};
use crate::geom2::Viewport;

/// Series colours for constraint lines, cycled by index.
const SERIES: [&str; 5] = ["#1f77b4", "#ff7f0e", "#9467bd", "#8c564b", "#e377c2"];
const REGION_FILL: &str = "#2ca02c";
const OPTIMUM: &str = "#d62728";
const AXIS: &str = "#222222";
const TEXT: &str = "#1a1a2e";

const PAD_LEFT: f64 = 64.0;
const PAD_RIGHT: f64 = 24.0;
const PAD_TOP: f64 = 40.0;
const PAD_BOTTOM: f64 = 52.0;

/// Errors from the SVG surface.
#[derive(Debug)]
pub enum SvgError {
    /// A drawing command arrived before the `Frame` command.
    MissingFrame,
    /// The canvas is too small to hold a plot area.
    Canvas { width: f64, height: f64 },
    Io(io::Error),
}

impl fmt::Display for SvgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SvgError::MissingFrame => write!(f, "plot commands must start with a frame"),
            SvgError::Canvas { width, height } => {
                write!(f, "canvas {width}x{height} leaves no room for the plot area")
            }
            SvgError::Io(_) => write!(f, "writing SVG failed"),
        }
    }
}

impl std::error::Error for SvgError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SvgError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SvgError {
    fn from(e: io::Error) -> Self {
        SvgError::Io(e)
    }
}

/// SVG writer with a fixed canvas size in pixels.
pub struct SvgSurface<W: io::Write> {
    out: W,
    width: f64,
    height: f64,
}

impl<W: io::Write> SvgSurface<W> {
    pub fn new(out: W, width: f64, height: f64) -> Self {
        Self { out, width, height }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: io::Write> Surface for SvgSurface<W> {
    type Error = SvgError;

    fn draw(&mut self, commands: &[PlotCommand]) -> Result<(), SvgError> {
        let doc = svg_document(commands, self.width, self.height)?;
        self.out.write_all(doc.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

/// Data → pixel mapping for one frame.
#[derive(Clone, Copy, Debug)]
struct Transform {
    left: f64,
    bottom: f64,
    sx: f64,
    sy: f64,
    plot_w: f64,
    plot_h: f64,
}

impl Transform {
    fn new(vp: Viewport, width: f64, height: f64, equal_aspect: bool) -> Result<Self, SvgError> {
        let avail_w = width - PAD_LEFT - PAD_RIGHT;
        let avail_h = height - PAD_TOP - PAD_BOTTOM;
        if !(avail_w > 0.0 && avail_h > 0.0) {
            return Err(SvgError::Canvas { width, height });
        }
        let (mut sx, mut sy) = (avail_w / vp.xmax, avail_h / vp.ymax);
        if equal_aspect {
            let s = sx.min(sy);
            sx = s;
            sy = s;
        }
        Ok(Self {
            left: PAD_LEFT,
            bottom: PAD_TOP + avail_h,
            sx,
            sy,
            plot_w: vp.xmax * sx,
            plot_h: vp.ymax * sy,
        })
    }

    #[inline]
    fn px(&self, p: Vector2<f64>) -> (f64, f64) {
        (self.left + p.x * self.sx, self.bottom - p.y * self.sy)
    }

    #[inline]
    fn top(&self) -> f64 {
        self.bottom - self.plot_h
    }
}

/// Render `commands` as a complete SVG document string.
pub fn svg_document(commands: &[PlotCommand], width: f64, height: f64) -> Result<String, SvgError> {
    let mut svg = String::with_capacity(commands.len() * 160 + 512);
    let mut tf: Option<Transform> = None;
    let mut fill_alpha = REGION_ALPHA;
    // fmt::Write into a String cannot fail.
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}" style="font-family:system-ui,-apple-system,sans-serif;font-size:12px">"#,
    );
    let _ = write!(svg, r##"<rect width="{width}" height="{height}" fill="#ffffff"/>"##);

    for cmd in commands {
        match cmd {
            PlotCommand::Frame {
                viewport,
                title,
                x_label,
                y_label,
                equal_aspect,
            } => {
                let t = Transform::new(*viewport, width, height, *equal_aspect)?;
                push_frame(&mut svg, &t, *viewport, title, x_label, y_label);
                tf = Some(t);
            }
            PlotCommand::ConstraintLine {
                from, to, series, ..
            } => {
                let t = tf.ok_or(SvgError::MissingFrame)?;
                let (x1, y1) = t.px(*from);
                let (x2, y2) = t.px(*to);
                let _ = write!(
                    svg,
                    r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="{}" stroke-width="2" clip-path="url(#plot-area)"/>"#,
                    series_color(*series),
                );
            }
            PlotCommand::Axis { from, to } => {
                let t = tf.ok_or(SvgError::MissingFrame)?;
                let (x1, y1) = t.px(*from);
                let (x2, y2) = t.px(*to);
                let _ = write!(
                    svg,
                    r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="{AXIS}" stroke-width="1"/>"#,
                );
            }
            PlotCommand::Region {
                polygon,
                alpha,
                label,
            } => {
                let t = tf.ok_or(SvgError::MissingFrame)?;
                fill_alpha = *alpha;
                let points: Vec<String> = polygon
                    .iter()
                    .map(|p| {
                        let (x, y) = t.px(*p);
                        format!("{x:.2},{y:.2}")
                    })
                    .collect();
                let _ = write!(
                    svg,
                    r#"<polygon points="{}" fill="{REGION_FILL}" fill-opacity="{alpha}" stroke="none"><title>{}</title></polygon>"#,
                    points.join(" "),
                    escape_xml(label),
                );
            }
            PlotCommand::Optimum { at, label } => {
                let t = tf.ok_or(SvgError::MissingFrame)?;
                let (x, y) = t.px(*at);
                let _ = write!(
                    svg,
                    r#"<circle cx="{x:.2}" cy="{y:.2}" r="5" fill="{OPTIMUM}"><title>{}</title></circle>"#,
                    escape_xml(label),
                );
            }
            PlotCommand::Legend { entries } => {
                let t = tf.ok_or(SvgError::MissingFrame)?;
                push_legend(&mut svg, &t, entries, fill_alpha);
            }
        }
    }

    svg.push_str("</svg>");
    Ok(svg)
}

fn push_frame(svg: &mut String, t: &Transform, vp: Viewport, title: &str, x_label: &str, y_label: &str) {
    let (left, top, w, h) = (t.left, t.top(), t.plot_w, t.plot_h);
    let _ = write!(
        svg,
        r#"<defs><clipPath id="plot-area"><rect x="{left:.2}" y="{top:.2}" width="{w:.2}" height="{h:.2}"/></clipPath></defs>"#,
    );
    let _ = write!(
        svg,
        r##"<rect x="{left:.2}" y="{top:.2}" width="{w:.2}" height="{h:.2}" fill="none" stroke="#bbbbbb"/>"##,
    );

    for x in ticks(vp.xmax) {
        let (px, py) = t.px(Vector2::new(x, 0.0));
        let _ = write!(
            svg,
            r#"<line x1="{px:.2}" y1="{py:.2}" x2="{px:.2}" y2="{:.2}" stroke="{AXIS}"/><text x="{px:.2}" y="{:.2}" fill="{TEXT}" text-anchor="middle">{}</text>"#,
            py + 4.0,
            py + 18.0,
            tick_label(x),
        );
    }
    for y in ticks(vp.ymax) {
        let (px, py) = t.px(Vector2::new(0.0, y));
        let _ = write!(
            svg,
            r#"<line x1="{:.2}" y1="{py:.2}" x2="{px:.2}" y2="{py:.2}" stroke="{AXIS}"/><text x="{:.2}" y="{:.2}" fill="{TEXT}" text-anchor="end">{}</text>"#,
            px - 4.0,
            px - 7.0,
            py + 4.0,
            tick_label(y),
        );
    }

    let cx = left + w / 2.0;
    let _ = write!(
        svg,
        r#"<text x="{cx:.2}" y="{:.2}" fill="{TEXT}" text-anchor="middle" font-size="15">{}</text>"#,
        top - 14.0,
        escape_xml(title),
    );
    let _ = write!(
        svg,
        r#"<text x="{cx:.2}" y="{:.2}" fill="{TEXT}" text-anchor="middle">{}</text>"#,
        t.bottom + 40.0,
        escape_xml(x_label),
    );
    let cy = top + h / 2.0;
    let lx = left - 46.0;
    let _ = write!(
        svg,
        r#"<text x="{lx:.2}" y="{cy:.2}" fill="{TEXT}" text-anchor="middle" transform="rotate(-90 {lx:.2} {cy:.2})">{}</text>"#,
        escape_xml(y_label),
    );
}

/// `fill_alpha` matches the swatch to the region fill drawn before it.
fn push_legend(svg: &mut String, t: &Transform, entries: &[LegendEntry], fill_alpha: f64) {
    if entries.is_empty() {
        return;
    }
    const ROW: f64 = 18.0;
    let longest = entries.iter().map(|e| e.label.chars().count()).max().unwrap_or(0);
    let box_w = 36.0 + longest as f64 * 7.0;
    let box_h = 8.0 + ROW * entries.len() as f64;
    let x0 = t.left + t.plot_w - box_w - 8.0;
    let y0 = t.top() + 8.0;
    let _ = write!(
        svg,
        r##"<rect x="{x0:.2}" y="{y0:.2}" width="{box_w:.2}" height="{box_h:.2}" fill="#ffffff" fill-opacity="0.85" stroke="#cccccc"/>"##,
    );
    for (k, e) in entries.iter().enumerate() {
        let cy = y0 + 4.0 + ROW * (k as f64 + 0.5);
        let sx = x0 + 6.0;
        match e.swatch {
            Swatch::Line(series) => {
                let _ = write!(
                    svg,
                    r#"<line x1="{sx:.2}" y1="{cy:.2}" x2="{:.2}" y2="{cy:.2}" stroke="{}" stroke-width="2"/>"#,
                    sx + 20.0,
                    series_color(series),
                );
            }
            Swatch::Fill => {
                let _ = write!(
                    svg,
                    r#"<rect x="{sx:.2}" y="{:.2}" width="20" height="10" fill="{REGION_FILL}" fill-opacity="{fill_alpha}"/>"#,
                    cy - 5.0,
                );
            }
            Swatch::Marker => {
                let _ = write!(
                    svg,
                    r#"<circle cx="{:.2}" cy="{cy:.2}" r="4" fill="{OPTIMUM}"/>"#,
                    sx + 10.0,
                );
            }
        }
        let _ = write!(
            svg,
            r#"<text x="{:.2}" y="{:.2}" fill="{TEXT}">{}</text>"#,
            sx + 26.0,
            cy + 4.0,
            escape_xml(&e.label),
        );
    }
}

#[inline]
fn series_color(series: usize) -> &'static str {
    SERIES[series % SERIES.len()]
}

/// Tick positions `0, step, 2·step, … <= max` with a 1/2/5 step.
fn ticks(max: f64) -> Vec<f64> {
    if !(max.is_finite() && max > 0.0) {
        return Vec::new();
    }
    let raw = max / 5.0;
    let mag = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|m| m * mag)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * mag);
    let n = (max / step).floor() as usize;
    (0..=n).map(|k| k as f64 * step).collect()
}

fn tick_label(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round())
    } else {
        format!("{v:.2}")
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
