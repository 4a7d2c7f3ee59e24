use crate::error::Result;
use crate::geometry::curve::{Circle, Curve, CurveType, Line};
use crate::geometry::Continuity;
use crate::math::{Interval, Point3, Vector3};

use super::face::FaceId;
use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for an edge in the topology store.
    pub struct EdgeId;
}

/// The geometric curve carried by an edge.
#[derive(Debug, Clone)]
pub enum EdgeCurve {
    Line(Line),
    Circle(Circle),
}

impl EdgeCurve {
    fn as_curve(&self) -> &dyn Curve {
        match self {
            EdgeCurve::Line(line) => line,
            EdgeCurve::Circle(circle) => circle,
        }
    }

    /// Evaluates the curve at `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation fails.
    pub fn evaluate(&self, t: f64) -> Result<Point3> {
        self.as_curve().evaluate(t)
    }

    /// First derivative of the curve at `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation fails.
    pub fn derivative(&self, t: f64) -> Result<Vector3> {
        self.as_curve().derivative(t)
    }

    #[must_use]
    pub fn length(&self, range: Interval) -> f64 {
        self.as_curve().length(range.a, range.b)
    }

    #[must_use]
    pub fn is_periodic(&self) -> bool {
        self.as_curve().is_periodic()
    }

    #[must_use]
    pub fn curve_type(&self) -> CurveType {
        self.as_curve().curve_type()
    }
}

/// Continuity recorded for a pair of faces meeting at an edge.
#[derive(Debug, Clone, Copy)]
pub struct Regularity {
    pub faces: (FaceId, FaceId),
    pub continuity: Continuity,
}

/// Data associated with a topological edge.
///
/// An edge connects two vertices (the same one twice for a closed edge) and
/// usually carries a curve. Degenerate edges, such as the collapsed boundary
/// at the pole of a sphere, have no curve.
#[derive(Debug, Clone)]
pub struct EdgeData {
    pub start: VertexId,
    pub end: VertexId,
    pub curve: Option<EdgeCurve>,
    /// Parameter range of the edge on its curve.
    pub range: Interval,
    /// Stored convexity flag. Set by the operation that built the edge.
    pub convex: bool,
    /// Continuity between face pairs, when known better than `C0`.
    pub regularity: Vec<Regularity>,
}

impl EdgeData {
    /// Creates an edge along `curve` between parameters `range.a` and `range.b`.
    #[must_use]
    pub fn new(start: VertexId, end: VertexId, curve: EdgeCurve, range: Interval) -> Self {
        Self {
            start,
            end,
            curve: Some(curve),
            range,
            convex: false,
            regularity: Vec::new(),
        }
    }

    /// Creates a degenerate edge collapsed onto `vertex`.
    #[must_use]
    pub fn degenerate(vertex: VertexId) -> Self {
        Self {
            start: vertex,
            end: vertex,
            curve: None,
            range: Interval::empty(),
            convex: false,
            regularity: Vec::new(),
        }
    }

    /// Sets the convex flag.
    #[must_use]
    pub fn with_convex(mut self, convex: bool) -> Self {
        self.convex = convex;
        self
    }

    /// Whether the edge starts and ends on the same vertex.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.start == self.end
    }

    /// Recorded continuity between `f1` and `f2`, in either order.
    #[must_use]
    pub fn regularity(&self, f1: FaceId, f2: FaceId) -> Option<Continuity> {
        self.regularity
            .iter()
            .find(|r| r.faces == (f1, f2) || r.faces == (f2, f1))
            .map(|r| r.continuity)
    }
}
