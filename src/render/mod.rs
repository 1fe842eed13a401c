mod palette;
mod scene;
mod svg;

pub use palette::Palette;
pub use scene::{segment_scene, subdivision_scene, FilledPolygon, Marker, Scene, Segment};
pub use svg::{write_svg, SvgConfig};

/// An RGBA color with channels in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque red.
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);

    /// Creates a color from channel values.
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

/// Stroke and marker styling for both pipelines.
#[derive(Debug, Clone, Copy)]
pub struct PlotStyle {
    /// Stroke color for half-edge segments.
    pub edge_stroke: Color,
    /// Stroke color for point-to-point link segments.
    pub link_stroke: Color,
    /// Stroke width in output pixels.
    pub stroke_width: f64,
    /// Fill color for face label markers.
    pub label_fill: Color,
    /// Face label marker radius in output pixels.
    pub label_radius: f64,
    /// Fill color for point markers.
    pub point_fill: Color,
    /// Point marker radius in output pixels.
    pub point_radius: f64,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            edge_stroke: Color::BLACK,
            link_stroke: Color::RED,
            stroke_width: 1.0,
            label_fill: Color::RED,
            label_radius: 2.5,
            point_fill: Color::BLACK,
            point_radius: 3.0,
        }
    }
}
