use thiserror::Error;

use crate::kernel::{ShapeKey, ShapeKind};

/// Top-level error type for brepgraph.
#[derive(Debug, Error)]
pub enum BrepGraphError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric queries and classification.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,

    #[error("edge has no 3D curve")]
    MissingCurve,

    #[error("unknown curve type code {code}")]
    UnsupportedCurveType { code: u32 },

    #[error("unsupported geometry: {0}")]
    Unsupported(String),
}

/// Errors related to topological structure.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("expected a {expected} handle, got a {found}")]
    TypeMismatch {
        expected: ShapeKind,
        found: ShapeKind,
    },

    #[error("non-manifold edge {edge} is shared by {mates} face occurrences")]
    NonManifoldEdge { edge: ShapeKey, mates: usize },

    #[error("invalid topology: {0}")]
    InvalidTopology(String),

    #[error("unsupported topological query: {0}")]
    Unsupported(&'static str),
}

/// Errors from shape creation and from parsing user-supplied names.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`BrepGraphError`].
pub type Result<T> = std::result::Result<T, BrepGraphError>;
