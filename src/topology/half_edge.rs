use std::fmt;

use super::vertex::VertexId;

/// Unique 1-based identifier for a half-edge in a [`Subdivision`].
///
/// [`Subdivision`]: super::Subdivision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HalfEdgeId(usize);

impl HalfEdgeId {
    /// Wraps a 1-based id as read from input.
    #[must_use]
    pub fn new(raw: usize) -> Self {
        Self(raw)
    }

    /// The 1-based id as it appears in the wire format.
    #[must_use]
    pub fn raw(self) -> usize {
        self.0
    }

    /// The 0-based storage index, or `None` for the invalid id 0.
    #[must_use]
    pub(crate) fn index(self) -> Option<usize> {
        self.0.checked_sub(1)
    }
}

impl fmt::Display for HalfEdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One directed side of an undirected edge.
///
/// All references are plain ids into the subdivision's flat collections.
/// The `face` field is kept as the raw wire value because real inputs
/// use 0 for "no incident face" (the unbounded face); nothing in the
/// plotter ever resolves it.
#[derive(Debug, Clone, Copy)]
pub struct HalfEdge {
    /// Origin vertex of this half-edge.
    pub origin: VertexId,
    /// The oppositely-directed half-edge of the same undirected edge.
    pub twin: HalfEdgeId,
    /// Raw id of the incident face; 0 means none.
    pub face: usize,
    /// Next half-edge around the incident face's boundary ring.
    pub next: HalfEdgeId,
    /// Previous half-edge around the incident face's boundary ring.
    pub prev: HalfEdgeId,
}
