use std::fmt;

use crate::math::Point2;

/// Unique 1-based identifier for a vertex in a [`Subdivision`].
///
/// [`Subdivision`]: super::Subdivision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexId(usize);

impl VertexId {
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

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A subdivision vertex.
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    /// The 2D position of the vertex.
    pub point: Point2,
}

impl Vertex {
    /// Creates a new vertex at the given point.
    #[must_use]
    pub fn new(point: Point2) -> Self {
        Self { point }
    }
}
