pub mod boundary;
pub mod face;
pub mod half_edge;
pub mod vertex;

pub use boundary::RingWalk;
pub use face::{Face, FaceId};
pub use half_edge::{HalfEdge, HalfEdgeId};
pub use vertex::{Vertex, VertexId};

use crate::error::LookupError;

/// A planar subdivision: flat collections of vertices, faces and
/// half-edges, cross-referencing each other by 1-based id.
///
/// The structure arrives fully formed from input and is never mutated
/// afterwards. Ids keep the 1-based numbering of the wire format; every
/// accessor translates to 0-based storage, so id 0 and out-of-range ids
/// fail as lookups rather than panicking or aliasing the wrong entity.
#[derive(Debug, Default)]
pub struct Subdivision {
    vertices: Vec<Vertex>,
    faces: Vec<Face>,
    half_edges: Vec<HalfEdge>,
}

impl Subdivision {
    /// Assembles a subdivision from already-parsed collections.
    ///
    /// Referential integrity is not checked here; ids are resolved
    /// lazily and trusted until then.
    #[must_use]
    pub fn new(vertices: Vec<Vertex>, faces: Vec<Face>, half_edges: Vec<HalfEdge>) -> Self {
        Self {
            vertices,
            faces,
            half_edges,
        }
    }

    /// Number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces.
    #[must_use]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Number of half-edges (twice the undirected edge count).
    #[must_use]
    pub fn num_half_edges(&self) -> usize {
        self.half_edges.len()
    }

    /// Resolves a vertex id.
    ///
    /// # Errors
    ///
    /// Returns an error if the id does not name a stored vertex.
    pub fn vertex(&self, id: VertexId) -> Result<&Vertex, LookupError> {
        id.index()
            .and_then(|i| self.vertices.get(i))
            .ok_or(LookupError::Vertex(id.raw()))
    }

    /// Resolves a face id.
    ///
    /// # Errors
    ///
    /// Returns an error if the id does not name a stored face.
    pub fn face(&self, id: FaceId) -> Result<&Face, LookupError> {
        id.index()
            .and_then(|i| self.faces.get(i))
            .ok_or(LookupError::Face(id.raw()))
    }

    /// Resolves a half-edge id.
    ///
    /// # Errors
    ///
    /// Returns an error if the id does not name a stored half-edge.
    pub fn half_edge(&self, id: HalfEdgeId) -> Result<&HalfEdge, LookupError> {
        id.index()
            .and_then(|i| self.half_edges.get(i))
            .ok_or(LookupError::HalfEdge(id.raw()))
    }

    /// Iterates over all faces with their 1-based ids.
    pub fn faces(&self) -> impl Iterator<Item = (FaceId, &Face)> {
        self.faces
            .iter()
            .enumerate()
            .map(|(i, f)| (FaceId::new(i + 1), f))
    }

    /// Iterates over all half-edges with their 1-based ids.
    pub fn half_edges(&self) -> impl Iterator<Item = (HalfEdgeId, &HalfEdge)> {
        self.half_edges
            .iter()
            .enumerate()
            .map(|(i, e)| (HalfEdgeId::new(i + 1), e))
    }
}
