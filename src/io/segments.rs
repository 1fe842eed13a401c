//! Parser for the point-and-segment dump format.
//!
//! Grammar:
//!
//! ```text
//! N                  point count
//! id x y             N point records, id used as a key
//! M                  edge count
//! p1 p2 [extra...]   M edge records referencing point ids
//! ```
//!
//! Point ids arrive in float syntax but only integer values occur in
//! practice; edge endpoints are plain integers.

use std::collections::BTreeMap;
use std::io::BufRead;

use crate::error::{LookupError, ParseError, Result};
use crate::math::Point2;

use super::{count_field, float_field, id_field, int_field, Records};

/// A point set plus the segments connecting it.
///
/// Points are keyed by their id, which need not be dense or start at
/// any particular value. Edges are stored as parsed, unresolved; a
/// dangling endpoint surfaces as a lookup failure at draw time.
#[derive(Debug, Default)]
pub struct SegmentSet {
    points: BTreeMap<i64, Point2>,
    edges: Vec<(i64, i64)>,
}

impl SegmentSet {
    /// Resolves a point id to its coordinate.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is not a known point.
    pub fn point(&self, id: i64) -> std::result::Result<Point2, LookupError> {
        self.points.get(&id).copied().ok_or(LookupError::Point(id))
    }

    /// The parsed edges, in input order.
    #[must_use]
    pub fn edges(&self) -> &[(i64, i64)] {
        &self.edges
    }

    /// Iterates over all points in ascending id order.
    pub fn points(&self) -> impl Iterator<Item = (i64, Point2)> + '_ {
        self.points.iter().map(|(&id, &point)| (id, point))
    }

    /// Number of points.
    #[must_use]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }
}

/// Reads a segment set from a text stream.
///
/// # Errors
///
/// Returns a [`ParseError`] on the first record that does not match
/// the grammar.
pub fn parse<R: BufRead>(input: R) -> Result<SegmentSet> {
    let mut records = Records::new(input);

    let header = records.next_record("point count")?;
    let line = records.line();
    if header.len() != 1 {
        return Err(ParseError::FieldCount {
            line,
            expected: "exactly 1",
            found: header.len(),
        }
        .into());
    }
    let num_points = count_field(&header[0], line)?;

    let mut points = BTreeMap::new();
    for _ in 0..num_points {
        let fields = records.next_record("point record `id x y`")?;
        let line = records.line();
        if fields.len() != 3 {
            return Err(ParseError::FieldCount {
                line,
                expected: "exactly 3",
                found: fields.len(),
            }
            .into());
        }
        let id = id_field(&fields[0], line)?;
        let x = float_field(&fields[1], line)?;
        let y = float_field(&fields[2], line)?;
        points.insert(id, Point2::new(x, y));
    }

    let header = records.next_record("edge count")?;
    let line = records.line();
    if header.len() != 1 {
        return Err(ParseError::FieldCount {
            line,
            expected: "exactly 1",
            found: header.len(),
        }
        .into());
    }
    let num_edges = count_field(&header[0], line)?;

    let mut edges = Vec::with_capacity(num_edges);
    for _ in 0..num_edges {
        let fields = records.next_record("edge record `p1 p2`")?;
        let line = records.line();
        if fields.len() < 2 {
            return Err(ParseError::FieldCount {
                line,
                expected: "at least 2",
                found: fields.len(),
            }
            .into());
        }
        let p1 = int_field(&fields[0], line)?;
        let p2 = int_field(&fields[1], line)?;
        edges.push((p1, p2));
    }

    Ok(SegmentSet { points, edges })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use crate::error::PlaneviewError;

    use super::*;

    #[test]
    fn parses_two_points_one_edge() {
        let input = "2\n1 0 0\n2 1 1\n1\n1 2\n";
        let set = parse(input.as_bytes()).unwrap();
        assert_eq!(set.num_points(), 2);
        assert_eq!(set.edges(), &[(1, 2)]);

        let a = set.point(1).unwrap();
        let b = set.point(2).unwrap();
        assert_relative_eq!(a.x, 0.0);
        assert_relative_eq!(b.y, 1.0);
    }

    #[test]
    fn point_ids_accept_float_syntax() {
        let input = "1\n3.0 7 8\n0\n";
        let set = parse(input.as_bytes()).unwrap();
        let p = set.point(3).unwrap();
        assert_relative_eq!(p.x, 7.0);
        assert_relative_eq!(p.y, 8.0);
    }

    #[test]
    fn edge_records_ignore_trailing_fields() {
        let input = "2\n1 0 0\n2 1 1\n1\n1 2 99 42\n";
        let set = parse(input.as_bytes()).unwrap();
        assert_eq!(set.edges(), &[(1, 2)]);
    }

    #[test]
    fn missing_point_is_a_lookup_error() {
        let input = "1\n1 0 0\n1\n1 5\n";
        let set = parse(input.as_bytes()).unwrap();
        assert!(matches!(set.point(5), Err(LookupError::Point(5))));
    }

    #[test]
    fn fractional_point_id_is_rejected() {
        let input = "1\n1.5 0 0\n0\n";
        let err = parse(input.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            PlaneviewError::Parse(ParseError::NonIntegralId { line: 2, .. })
        ));
    }

    #[test]
    fn truncated_edge_section_reports_line() {
        let input = "1\n1 0 0\n2\n1 1\n";
        let err = parse(input.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            PlaneviewError::Parse(ParseError::UnexpectedEof { line: 5, .. })
        ));
    }
}
