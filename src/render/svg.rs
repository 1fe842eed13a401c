//! Static SVG backend for rendered scenes.
//!
//! Data coordinates are projected to pixel space with a uniform scale
//! on both axes, so the output always keeps the data's aspect ratio.
//! The y axis is flipped to math orientation (y grows upward).

use std::io::Write;

use crate::error::RenderError;
use crate::math::{Bounds2, Point2};

use super::scene::Scene;
use super::Color;

/// Output sizing for the SVG backend.
#[derive(Debug, Clone, Copy)]
pub struct SvgConfig {
    /// Pixel size of the longer output axis.
    pub max_dimension: f64,
    /// Margin around the data, as a fraction of the longer data extent.
    pub margin: f64,
    /// Decimal precision for coordinate values.
    pub precision: u8,
    /// Optional background fill.
    pub background: Option<Color>,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            max_dimension: 800.0,
            margin: 0.05,
            precision: 2,
            background: None,
        }
    }
}

/// Uniform data-to-pixel projection derived from scene bounds.
struct Projection {
    bounds: Bounds2,
    scale: f64,
}

impl Projection {
    fn new(bounds: Bounds2, config: &SvgConfig) -> Self {
        let extent = bounds.width().max(bounds.height());
        // A single point (or a fully degenerate scene) still gets a
        // nonzero canvas to land on.
        let pad = if extent > 0.0 {
            extent * config.margin
        } else {
            1.0
        };
        let bounds = bounds.padded(pad);
        let scale = config.max_dimension / bounds.width().max(bounds.height());
        Self { bounds, scale }
    }

    fn width_px(&self) -> f64 {
        self.bounds.width() * self.scale
    }

    fn height_px(&self) -> f64 {
        self.bounds.height() * self.scale
    }

    fn apply(&self, point: Point2) -> (f64, f64) {
        (
            (point.x - self.bounds.min.x) * self.scale,
            (self.bounds.max.y - point.y) * self.scale,
        )
    }
}

/// Formats a pixel value with the configured precision.
fn coord(value: f64, precision: u8) -> String {
    format!("{value:.prec$}", prec = precision as usize)
}

/// Formats a color as CSS: hex when opaque, `rgba()` otherwise.
fn css_color(c: Color) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn byte(channel: f64) -> u8 {
        (channel.clamp(0.0, 1.0) * 255.0).round() as u8
    }
    let (r, g, b) = (byte(c.r), byte(c.g), byte(c.b));
    let a = c.a.clamp(0.0, 1.0);
    if (a - 1.0).abs() < 0.001 {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("rgba({r},{g},{b},{a:.2})")
    }
}

/// Writes a scene as a standalone SVG document.
///
/// # Errors
///
/// Returns [`RenderError::EmptyScene`] when the scene has no geometry
/// to derive a canvas from, or an I/O error from the writer.
pub fn write_svg<W: Write>(
    mut out: W,
    scene: &Scene,
    config: &SvgConfig,
) -> Result<(), RenderError> {
    let bounds = scene.bounds().ok_or(RenderError::EmptyScene)?;
    let proj = Projection::new(bounds, config);
    let prec = config.precision;

    let width = coord(proj.width_px(), prec);
    let height = coord(proj.height_px(), prec);
    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    )?;

    if let Some(background) = config.background {
        writeln!(
            out,
            r#"  <rect width="100%" height="100%" fill="{}"/>"#,
            css_color(background)
        )?;
    }

    for polygon in &scene.polygons {
        let points = polygon
            .points
            .iter()
            .map(|&p| {
                let (x, y) = proj.apply(p);
                format!("{},{}", coord(x, prec), coord(y, prec))
            })
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(
            out,
            r#"  <polygon points="{points}" fill="{}"/>"#,
            css_color(polygon.fill)
        )?;
    }

    for segment in &scene.segments {
        let (x1, y1) = proj.apply(segment.a);
        let (x2, y2) = proj.apply(segment.b);
        writeln!(
            out,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            coord(x1, prec),
            coord(y1, prec),
            coord(x2, prec),
            coord(y2, prec),
            css_color(segment.stroke),
            coord(segment.width, prec)
        )?;
    }

    for marker in &scene.markers {
        let (cx, cy) = proj.apply(marker.at);
        writeln!(
            out,
            r#"  <circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            coord(cx, prec),
            coord(cy, prec),
            coord(marker.radius, prec),
            css_color(marker.fill)
        )?;
    }

    writeln!(out, "</svg>")?;
    Ok(())
}
