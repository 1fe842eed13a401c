use crate::error::{MeshError, Result};
use crate::math::Point2;

use super::half_edge::HalfEdgeId;
use super::{FaceId, Subdivision};

/// Bounded iterator over the half-edges of one boundary ring.
///
/// Emits `start`, then follows `next` links until `start` recurs. The
/// ring is assumed closed but never trusted: after as many steps as
/// there are half-edges in the whole subdivision, the walk fails with
/// [`MeshError::RingNotClosed`] instead of looping forever on a
/// corrupted `next` chain.
pub struct RingWalk<'a> {
    sub: &'a Subdivision,
    start: HalfEdgeId,
    cursor: Option<HalfEdgeId>,
    steps: usize,
    limit: usize,
}

impl Iterator for RingWalk<'_> {
    type Item = Result<HalfEdgeId>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.cursor.take()?;
        if self.steps >= self.limit {
            return Some(Err(MeshError::RingNotClosed {
                start: self.start.raw(),
                limit: self.limit,
            }
            .into()));
        }
        self.steps += 1;
        let edge = match self.sub.half_edge(current) {
            Ok(edge) => edge,
            Err(err) => return Some(Err(err.into())),
        };
        if edge.next != self.start {
            self.cursor = Some(edge.next);
        }
        Some(Ok(current))
    }
}

impl Subdivision {
    /// Walks the boundary ring starting at `start`.
    #[must_use]
    pub fn ring(&self, start: HalfEdgeId) -> RingWalk<'_> {
        RingWalk {
            sub: self,
            start,
            cursor: Some(start),
            steps: 0,
            limit: self.num_half_edges(),
        }
    }

    /// Recovers the ordered boundary polygon of a face.
    ///
    /// The sequence starts at the origin of the face's designated
    /// half-edge and contains one point per half-edge of the ring. A
    /// self-referential half-edge (`next` pointing at itself) yields a
    /// single-point boundary, which downstream fill rendering is free
    /// to draw as nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the face or any half-edge or vertex on the
    /// ring fails to resolve, or if the ring does not close within the
    /// total half-edge count.
    pub fn face_boundary(&self, id: FaceId) -> Result<Vec<Point2>> {
        let face = self.face(id)?;
        let mut points = Vec::new();
        for half_edge in self.ring(face.edge) {
            let edge = self.half_edge(half_edge?)?;
            points.push(self.vertex(edge.origin)?.point);
        }
        Ok(points)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use crate::error::PlaneviewError;
    use crate::topology::{Face, HalfEdge, Subdivision, Vertex};

    use super::*;

    fn he(origin: usize, next: usize) -> HalfEdge {
        HalfEdge {
            origin: crate::topology::VertexId::new(origin),
            twin: HalfEdgeId::new(1),
            face: 1,
            next: HalfEdgeId::new(next),
            prev: HalfEdgeId::new(1),
        }
    }

    fn unit_square() -> Subdivision {
        let vertices = vec![
            Vertex::new(Point2::new(0.0, 0.0)),
            Vertex::new(Point2::new(1.0, 0.0)),
            Vertex::new(Point2::new(1.0, 1.0)),
            Vertex::new(Point2::new(0.0, 1.0)),
        ];
        let faces = vec![Face::new(Point2::new(0.5, 0.5), HalfEdgeId::new(1))];
        let half_edges = vec![he(1, 2), he(2, 3), he(3, 4), he(4, 1)];
        Subdivision::new(vertices, faces, half_edges)
    }

    #[test]
    fn square_boundary_in_order() {
        let sub = unit_square();
        let boundary = sub.face_boundary(FaceId::new(1)).unwrap();
        assert_eq!(boundary.len(), 4);
        let expected = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
        for (point, (x, y)) in boundary.iter().zip(expected) {
            assert_relative_eq!(point.x, x);
            assert_relative_eq!(point.y, y);
        }
    }

    #[test]
    fn ring_visits_each_half_edge_once() {
        let sub = unit_square();
        let ids: Vec<_> = sub
            .ring(HalfEdgeId::new(1))
            .map(|r| r.unwrap().raw())
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn walk_is_rotation_invariant() {
        let sub = unit_square();
        let from_first = sub.face_boundary(FaceId::new(1)).unwrap();
        for start in 2..=4 {
            let mut rotated: Vec<_> = sub
                .ring(HalfEdgeId::new(start))
                .map(|r| {
                    let edge = sub.half_edge(r.unwrap()).unwrap();
                    sub.vertex(edge.origin).unwrap().point
                })
                .collect();
            assert_eq!(rotated.len(), from_first.len());
            rotated.rotate_right(start - 1);
            for (a, b) in rotated.iter().zip(&from_first) {
                assert_relative_eq!(a.x, b.x);
                assert_relative_eq!(a.y, b.y);
            }
        }
    }

    #[test]
    fn self_loop_yields_single_point() {
        let vertices = vec![Vertex::new(Point2::new(2.0, 3.0))];
        let faces = vec![Face::new(Point2::new(2.0, 3.0), HalfEdgeId::new(1))];
        let half_edges = vec![he(1, 1)];
        let sub = Subdivision::new(vertices, faces, half_edges);

        let boundary = sub.face_boundary(FaceId::new(1)).unwrap();
        assert_eq!(boundary.len(), 1);
        assert_relative_eq!(boundary[0].x, 2.0);
    }

    #[test]
    fn corrupted_ring_fails_instead_of_hanging() {
        let vertices = vec![
            Vertex::new(Point2::new(0.0, 0.0)),
            Vertex::new(Point2::new(1.0, 0.0)),
            Vertex::new(Point2::new(1.0, 1.0)),
        ];
        let faces = vec![Face::new(Point2::new(0.5, 0.5), HalfEdgeId::new(1))];
        // 1 -> 2 -> 3 -> 2: never returns to 1.
        let half_edges = vec![he(1, 2), he(2, 3), he(3, 2)];
        let sub = Subdivision::new(vertices, faces, half_edges);

        let err = sub.face_boundary(FaceId::new(1)).unwrap_err();
        assert!(matches!(
            err,
            PlaneviewError::Mesh(MeshError::RingNotClosed { start: 1, limit: 3 })
        ));
    }

    #[test]
    fn dangling_next_is_a_lookup_error() {
        let vertices = vec![Vertex::new(Point2::new(0.0, 0.0))];
        let faces = vec![Face::new(Point2::new(0.0, 0.0), HalfEdgeId::new(1))];
        let half_edges = vec![he(1, 7)];
        let sub = Subdivision::new(vertices, faces, half_edges);

        let err = sub.face_boundary(FaceId::new(1)).unwrap_err();
        assert!(matches!(err, PlaneviewError::Lookup(_)));
    }

    #[test]
    fn zero_and_out_of_range_ids_fail_lookup() {
        let sub = unit_square();
        assert!(sub.face(FaceId::new(0)).is_err());
        assert!(sub.face(FaceId::new(2)).is_err());
        assert!(sub.half_edge(HalfEdgeId::new(0)).is_err());
        assert!(sub.half_edge(HalfEdgeId::new(5)).is_err());
    }
}
