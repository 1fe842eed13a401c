use std::io;

use thiserror::Error;

/// Top-level error type for the Planeview plotter.
#[derive(Debug, Error)]
pub enum PlaneviewError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors raised while reading one of the two input grammars.
///
/// Every variant carries the 1-based line number of the offending
/// record; parsing stops at the first failure.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: unexpected end of input, expected {expected}")]
    UnexpectedEof { line: usize, expected: &'static str },

    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: &'static str,
        found: usize,
    },

    #[error("line {line}: invalid number {token:?}")]
    InvalidNumber { line: usize, token: String },

    #[error("line {line}: id {token:?} is not an integer")]
    NonIntegralId { line: usize, token: String },

    #[error("failed to read input")]
    Io(#[from] io::Error),
}

/// Errors raised when an id does not resolve against its collection.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("vertex id {0} not found")]
    Vertex(usize),

    #[error("half-edge id {0} not found")]
    HalfEdge(usize),

    #[error("face id {0} not found")]
    Face(usize),

    #[error("point id {0} not found")]
    Point(i64),
}

/// Errors raised by the half-edge boundary walk.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("boundary ring starting at half-edge {start} did not close within {limit} steps")]
    RingNotClosed { start: usize, limit: usize },
}

/// Errors raised while writing the rendered scene.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("scene contains nothing to draw")]
    EmptyScene,

    #[error("failed to write output")]
    Io(#[from] io::Error),
}

/// Convenience type alias for results using [`PlaneviewError`].
pub type Result<T> = std::result::Result<T, PlaneviewError>;
