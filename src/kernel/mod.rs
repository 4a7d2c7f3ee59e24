//! The query contract between brepgraph and a B-rep modeling kernel.
//!
//! brepgraph never owns geometry. Everything it knows about a solid comes
//! through [`GeometryKernel`]: structural identity of opaque handles,
//! traversal of sub-shapes, and the per-entity geometric queries that the
//! [`entity`](crate::entity) wrappers expose.

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::geometry::{Continuity, SpecificCurve};
use crate::math::{Interval, Point3, UvBounds, Vector3};

/// Kind of a topological entity behind a kernel handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Vertex,
    Edge,
    Wire,
    Face,
    Shell,
    Solid,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Vertex => "vertex",
            ShapeKind::Edge => "edge",
            ShapeKind::Wire => "wire",
            ShapeKind::Face => "face",
            ShapeKind::Shell => "shell",
            ShapeKind::Solid => "solid",
        };
        f.write_str(name)
    }
}

/// Structural identity of a topological entity.
///
/// Two handles referring to the same underlying entity share a key even when
/// they differ in orientation. Geometrically coincident but distinct entities
/// always have different keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ShapeKey {
    kind: ShapeKind,
    id: u64,
}

impl ShapeKey {
    /// Creates a key from a kind and a kernel-assigned identifier.
    #[must_use]
    pub fn new(kind: ShapeKind, id: u64) -> Self {
        Self { kind, id }
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl fmt::Display for ShapeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.kind, self.id)
    }
}

/// Orientation of a handle relative to its underlying entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Orientation {
    #[default]
    Forward,
    Reversed,
}

/// Queries brepgraph needs from a B-rep kernel.
///
/// Handles are opaque. Queries taking an edge, face or vertex handle may
/// assume the handle is of that kind; the [`entity`](crate::entity) wrappers
/// check kinds at construction.
///
/// # Traversal order
///
/// [`explore`](Self::explore) must be deterministic for an unmodified model.
/// Callers preserve the order they receive and never re-sort it.
///
/// # Edges without a 3D curve
///
/// Some edges (for example at the pole of a sphere) have no 3D curve.
/// [`edge_range`](Self::edge_range), [`edge_d1`](Self::edge_d1) and
/// [`edge_length`](Self::edge_length) are only called for edges where
/// [`edge_has_curve`](Self::edge_has_curve) is `true`.
pub trait GeometryKernel {
    /// Opaque reference to a topological entity.
    type Handle: Clone + fmt::Debug;

    /// Kind of the entity behind `shape`.
    fn shape_kind(&self, shape: &Self::Handle) -> ShapeKind;

    /// Structural identity of `shape`, independent of orientation.
    fn shape_key(&self, shape: &Self::Handle) -> ShapeKey;

    /// Orientation of `shape` relative to its underlying entity.
    fn orientation(&self, shape: &Self::Handle) -> Orientation;

    /// All sub-shapes of `kind` below `shape`, in kernel order.
    ///
    /// Repeated occurrences are kept: a seam edge is listed twice when
    /// exploring its face.
    ///
    /// # Errors
    ///
    /// Returns an error if `shape` does not exist in the model.
    fn explore(&self, shape: &Self::Handle, kind: ShapeKind) -> Result<Vec<Self::Handle>>;

    /// Position of a vertex.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex does not exist.
    fn vertex_point(&self, vertex: &Self::Handle) -> Result<Point3>;

    /// Whether the edge carries a 3D curve.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge does not exist.
    fn edge_has_curve(&self, edge: &Self::Handle) -> Result<bool>;

    /// Parameter range of the edge on its curve.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge does not exist or has no curve.
    fn edge_range(&self, edge: &Self::Handle) -> Result<Interval>;

    /// Point and first derivative of the edge curve at `u`.
    ///
    /// The derivative is taken along the curve, ignoring edge orientation.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge does not exist or has no curve.
    fn edge_d1(&self, edge: &Self::Handle, u: f64) -> Result<(Point3, Vector3)>;

    /// Arc length of the edge curve over `range`.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge does not exist or has no curve.
    fn edge_length(&self, edge: &Self::Handle, range: Interval, tolerance: f64) -> Result<f64>;

    /// Kernel-native classification code of the edge curve.
    ///
    /// See [`CurveType`](crate::geometry::CurveType) for the recognized codes.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge does not exist.
    fn edge_curve_code(&self, edge: &Self::Handle) -> Result<u32>;

    /// Kind-specific description of the edge curve.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge does not exist or the kernel cannot
    /// describe its curve.
    fn edge_specific_curve(&self, edge: &Self::Handle) -> Result<SpecificCurve>;

    /// Whether the edge curve is periodic.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge does not exist.
    fn edge_is_periodic(&self, edge: &Self::Handle) -> Result<bool>;

    /// Whether the edge curve is rational.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge does not exist.
    fn edge_is_rational(&self, edge: &Self::Handle) -> Result<bool>;

    /// The closed flag stored on the edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge does not exist.
    fn edge_is_closed(&self, edge: &Self::Handle) -> Result<bool>;

    /// The convex flag stored on the edge. Not a geometric test.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge does not exist.
    fn edge_is_convex(&self, edge: &Self::Handle) -> Result<bool>;

    /// Whether the edge is a seam of `face`.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge or face does not exist.
    fn edge_is_seam(&self, edge: &Self::Handle, face: &Self::Handle) -> Result<bool>;

    /// Continuity between `face1` and `face2` across the edge.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the entities does not exist.
    fn edge_continuity(
        &self,
        edge: &Self::Handle,
        face1: &Self::Handle,
        face2: &Self::Handle,
    ) -> Result<Continuity>;

    /// Parametric bounds of a face.
    ///
    /// # Errors
    ///
    /// Returns an error if the face does not exist.
    fn face_uv_bounds(&self, face: &Self::Handle) -> Result<UvBounds>;

    /// Point on the face's surface at `(u, v)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the face does not exist or evaluation fails.
    fn face_point(&self, face: &Self::Handle, u: f64, v: f64) -> Result<Point3>;
}
