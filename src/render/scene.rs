use rand::Rng;

use crate::error::Result;
use crate::io::SegmentSet;
use crate::math::{Bounds2, Point2};
use crate::topology::Subdivision;

use super::palette::Palette;
use super::{Color, PlotStyle};

/// A filled boundary polygon.
#[derive(Debug, Clone)]
pub struct FilledPolygon {
    /// Boundary points in ring order.
    pub points: Vec<Point2>,
    pub fill: Color,
}

/// A straight line segment.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    pub a: Point2,
    pub b: Point2,
    pub stroke: Color,
    /// Stroke width in output pixels.
    pub width: f64,
}

/// A circular point marker.
#[derive(Debug, Clone, Copy)]
pub struct Marker {
    pub at: Point2,
    pub fill: Color,
    /// Radius in output pixels.
    pub radius: f64,
}

/// Everything one run draws, in paint order: fills below, then
/// segments, then markers on top.
#[derive(Debug, Default)]
pub struct Scene {
    pub polygons: Vec<FilledPolygon>,
    pub segments: Vec<Segment>,
    pub markers: Vec<Marker>,
}

impl Scene {
    /// True when there is no geometry at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty() && self.segments.is_empty() && self.markers.is_empty()
    }

    /// Bounding box over every coordinate in the scene, or `None` for
    /// an empty scene.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds2> {
        fn take(bounds: &mut Option<Bounds2>, point: Point2) {
            match bounds {
                Some(b) => b.expand(point),
                None => *bounds = Some(Bounds2::around(point)),
            }
        }

        let mut bounds = None;
        for polygon in &self.polygons {
            for &point in &polygon.points {
                take(&mut bounds, point);
            }
        }
        for segment in &self.segments {
            take(&mut bounds, segment.a);
            take(&mut bounds, segment.b);
        }
        for marker in &self.markers {
            take(&mut bounds, marker.at);
        }
        bounds
    }
}

/// Assembles the scene for a planar subdivision.
///
/// Per face: the boundary polygon filled with the next pastel from the
/// palette, plus a label marker at the face's representative point.
/// Then one segment per half-edge, from its origin to its successor's
/// origin; every undirected edge is therefore drawn twice, once per
/// half-edge.
///
/// # Errors
///
/// Returns an error if any id on a face's boundary ring fails to
/// resolve, or if a ring does not close.
pub fn subdivision_scene(
    sub: &Subdivision,
    palette: &mut Palette<impl Rng>,
    style: &PlotStyle,
) -> Result<Scene> {
    let mut scene = Scene::default();

    for (face_id, face) in sub.faces() {
        scene.polygons.push(FilledPolygon {
            points: sub.face_boundary(face_id)?,
            fill: palette.pastel(),
        });
        scene.markers.push(Marker {
            at: face.label,
            fill: style.label_fill,
            radius: style.label_radius,
        });
    }

    for (_, edge) in sub.half_edges() {
        let a = sub.vertex(edge.origin)?.point;
        let b = sub.vertex(sub.half_edge(edge.next)?.origin)?.point;
        scene.segments.push(Segment {
            a,
            b,
            stroke: style.edge_stroke,
            width: style.stroke_width,
        });
    }

    Ok(scene)
}

/// Assembles the scene for a point set with connecting segments.
///
/// One segment per parsed edge, endpoints resolved against the point
/// map, then one marker per point. A dangling endpoint id aborts the
/// run rather than being skipped.
///
/// # Errors
///
/// Returns an error if an edge references an unknown point id.
pub fn segment_scene(set: &SegmentSet, style: &PlotStyle) -> Result<Scene> {
    let mut scene = Scene::default();

    for &(p1, p2) in set.edges() {
        scene.segments.push(Segment {
            a: set.point(p1)?,
            b: set.point(p2)?,
            stroke: style.link_stroke,
            width: style.stroke_width,
        });
    }

    for (_, point) in set.points() {
        scene.markers.push(Marker {
            at: point,
            fill: style.point_fill,
            radius: style.point_radius,
        });
    }

    Ok(scene)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use crate::error::PlaneviewError;
    use crate::io::{segments, subdivision};

    use super::*;

    const SQUARE: &str = "\
4 2 1
0 0
1 0
1 1
0 1
0.5 0.5 1
1 1 1 2 4
2 1 1 3 1
3 1 1 4 2
4 1 1 1 3
";

    #[test]
    fn mesh_scene_has_fill_marker_and_edge_counts() {
        let sub = subdivision::parse(SQUARE.as_bytes()).unwrap();
        let style = PlotStyle::default();
        let scene = subdivision_scene(&sub, &mut Palette::seeded(1), &style).unwrap();

        assert_eq!(scene.polygons.len(), 1);
        assert_eq!(scene.markers.len(), 1);
        // One segment per half-edge: each undirected edge twice.
        assert_eq!(scene.segments.len(), 4);

        assert_eq!(scene.polygons[0].points.len(), 4);
        assert_relative_eq!(scene.markers[0].at.x, 0.5);
    }

    #[test]
    fn segment_scene_draws_one_segment_per_edge() {
        let input = "2\n1 0 0\n2 1 1\n1\n1 2\n";
        let set = segments::parse(input.as_bytes()).unwrap();
        let scene = segment_scene(&set, &PlotStyle::default()).unwrap();

        assert_eq!(scene.segments.len(), 1);
        assert_eq!(scene.markers.len(), 2);
        assert_relative_eq!(scene.segments[0].a.x, 0.0);
        assert_relative_eq!(scene.segments[0].b.x, 1.0);
        assert_relative_eq!(scene.segments[0].b.y, 1.0);
    }

    #[test]
    fn dangling_edge_endpoint_aborts() {
        let input = "2\n1 0 0\n2 1 1\n1\n1 9\n";
        let set = segments::parse(input.as_bytes()).unwrap();
        let err = segment_scene(&set, &PlotStyle::default()).unwrap_err();
        assert!(matches!(err, PlaneviewError::Lookup(_)));
    }

    #[test]
    fn scene_bounds_cover_all_primitives() {
        let sub = subdivision::parse(SQUARE.as_bytes()).unwrap();
        let style = PlotStyle::default();
        let scene = subdivision_scene(&sub, &mut Palette::seeded(1), &style).unwrap();

        let bounds = scene.bounds().unwrap();
        assert_relative_eq!(bounds.width(), 1.0);
        assert_relative_eq!(bounds.height(), 1.0);
    }
}
