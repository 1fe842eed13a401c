//! Parser for the doubly-connected edge list dump format.
//!
//! Grammar (whitespace-separated fields, one record per line):
//!
//! ```text
//! V A F                              header: vertex / edge / face counts
//! x y [extra...]                     V vertex records, ids 1..=V by order
//! x y edgeId                         F face records
//! origin twin face next prev         2*A half-edge records, ids 1..=2*A
//! ```
//!
//! All cross-references are 1-based. Referential integrity is not
//! checked here; bad ids surface when they are first resolved.

use std::io::BufRead;

use crate::error::{ParseError, Result};
use crate::math::Point2;
use crate::topology::{Face, HalfEdge, HalfEdgeId, Subdivision, Vertex, VertexId};

use super::{count_field, float_field, id_field, int_field, Records};

// Non-positive ids can never resolve; funnel them through the id-0
// lookup failure instead of widening the id types.
fn to_raw(id: i64) -> usize {
    usize::try_from(id).unwrap_or(0)
}

/// Reads a subdivision from a text stream.
///
/// # Errors
///
/// Returns a [`ParseError`] on the first
/// record that does not match the grammar.
pub fn parse<R: BufRead>(input: R) -> Result<Subdivision> {
    let mut records = Records::new(input);

    let header = records.next_record("header `V A F`")?;
    let line = records.line();
    if header.len() != 3 {
        return Err(ParseError::FieldCount {
            line,
            expected: "exactly 3",
            found: header.len(),
        }
        .into());
    }
    let num_vertices = count_field(&header[0], line)?;
    let num_edges = count_field(&header[1], line)?;
    let num_faces = count_field(&header[2], line)?;

    let mut vertices = Vec::with_capacity(num_vertices);
    for _ in 0..num_vertices {
        let fields = records.next_record("vertex record `x y`")?;
        let line = records.line();
        if fields.len() < 2 {
            return Err(ParseError::FieldCount {
                line,
                expected: "at least 2",
                found: fields.len(),
            }
            .into());
        }
        let x = float_field(&fields[0], line)?;
        let y = float_field(&fields[1], line)?;
        vertices.push(Vertex::new(Point2::new(x, y)));
    }

    let mut faces = Vec::with_capacity(num_faces);
    for _ in 0..num_faces {
        let fields = records.next_record("face record `x y edgeId`")?;
        let line = records.line();
        if fields.len() != 3 {
            return Err(ParseError::FieldCount {
                line,
                expected: "exactly 3",
                found: fields.len(),
            }
            .into());
        }
        let x = float_field(&fields[0], line)?;
        let y = float_field(&fields[1], line)?;
        let edge = to_raw(id_field(&fields[2], line)?);
        faces.push(Face::new(Point2::new(x, y), HalfEdgeId::new(edge)));
    }

    let mut half_edges = Vec::with_capacity(2 * num_edges);
    for _ in 0..2 * num_edges {
        let fields = records.next_record("half-edge record `origin twin face next prev`")?;
        let line = records.line();
        if fields.len() != 5 {
            return Err(ParseError::FieldCount {
                line,
                expected: "exactly 5",
                found: fields.len(),
            }
            .into());
        }
        let origin = to_raw(int_field(&fields[0], line)?);
        let twin = to_raw(int_field(&fields[1], line)?);
        let face = to_raw(int_field(&fields[2], line)?);
        let next = to_raw(int_field(&fields[3], line)?);
        let prev = to_raw(int_field(&fields[4], line)?);
        half_edges.push(HalfEdge {
            origin: VertexId::new(origin),
            twin: HalfEdgeId::new(twin),
            face,
            next: HalfEdgeId::new(next),
            prev: HalfEdgeId::new(prev),
        });
    }

    Ok(Subdivision::new(vertices, faces, half_edges))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use crate::error::PlaneviewError;
    use crate::topology::FaceId;

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
    fn parses_square_subdivision() {
        let sub = parse(SQUARE.as_bytes()).unwrap();
        assert_eq!(sub.num_vertices(), 4);
        assert_eq!(sub.num_faces(), 1);
        assert_eq!(sub.num_half_edges(), 4);

        let boundary = sub.face_boundary(FaceId::new(1)).unwrap();
        let expected = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
        for (point, (x, y)) in boundary.iter().zip(expected) {
            assert_relative_eq!(point.x, x);
            assert_relative_eq!(point.y, y);
        }
    }

    #[test]
    fn vertex_records_ignore_extra_fields() {
        let input = "1 0 0\n0.5 2.5 9 9\n";
        let sub = parse(input.as_bytes()).unwrap();
        let vertex = sub.vertex(crate::topology::VertexId::new(1)).unwrap();
        assert_relative_eq!(vertex.point.x, 0.5);
        assert_relative_eq!(vertex.point.y, 2.5);
    }

    #[test]
    fn face_edge_id_accepts_float_syntax() {
        let input = "1 0 1\n0 0\n3 4 1.0\n";
        let sub = parse(input.as_bytes()).unwrap();
        let face = sub.face(FaceId::new(1)).unwrap();
        assert_eq!(face.edge.raw(), 1);
    }

    #[test]
    fn truncated_input_reports_line() {
        let input = "4 2 1\n0 0\n1 0\n";
        let err = parse(input.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            PlaneviewError::Parse(ParseError::UnexpectedEof { line: 4, .. })
        ));
    }

    #[test]
    fn non_numeric_coordinate_reports_line() {
        let input = "1 0 0\n0 oops\n";
        let err = parse(input.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            PlaneviewError::Parse(ParseError::InvalidNumber { line: 2, .. })
        ));
    }

    #[test]
    fn half_edge_arity_is_exact() {
        let input = "2 1 0\n0 0\n1 1\n1 2 1 2 1 99\n2 1 1 1 2\n";
        let err = parse(input.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            PlaneviewError::Parse(ParseError::FieldCount { line: 4, found: 6, .. })
        ));
    }
}
