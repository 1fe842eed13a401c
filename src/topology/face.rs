use std::fmt;

use crate::math::Point2;

use super::half_edge::HalfEdgeId;

/// Unique 1-based identifier for a face in a [`Subdivision`].
///
/// [`Subdivision`]: super::Subdivision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceId(usize);

impl FaceId {
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

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A bounded face of the subdivision.
#[derive(Debug, Clone, Copy)]
pub struct Face {
    /// Representative label coordinate (typically the generating site).
    pub label: Point2,
    /// One half-edge of the face's boundary ring, an arbitrary start.
    pub edge: HalfEdgeId,
}

impl Face {
    /// Creates a new face record.
    #[must_use]
    pub fn new(label: Point2, edge: HalfEdgeId) -> Self {
        Self { label, edge }
    }
}
