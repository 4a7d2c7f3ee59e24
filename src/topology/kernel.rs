use crate::error::{GeometryError, Result, TopologyError};
use crate::geometry::{Continuity, CurveType, SpecificCurve};
use crate::kernel::{GeometryKernel, Orientation, ShapeKey, ShapeKind};
use crate::math::{Interval, Point3, UvBounds, Vector3};

use super::{EdgeCurve, EdgeData, EdgeId, FaceData, FaceId, Shape, TopologyStore, VertexId};

/// Dot product of unit normals above which two faces are tangent.
const TANGENT_DOT: f64 = 1.0 - 1e-9;

fn mismatch(expected: ShapeKind, shape: &Shape) -> TopologyError {
    TopologyError::TypeMismatch {
        expected,
        found: shape.kind(),
    }
}

fn vertex_id(shape: &Shape) -> Result<VertexId> {
    match shape {
        Shape::Vertex(id) => Ok(*id),
        other => Err(mismatch(ShapeKind::Vertex, other).into()),
    }
}

fn edge_id(shape: &Shape) -> Result<EdgeId> {
    match shape {
        Shape::Edge(id, _) => Ok(*id),
        other => Err(mismatch(ShapeKind::Edge, other).into()),
    }
}

fn face_id(shape: &Shape) -> Result<FaceId> {
    match shape {
        Shape::Face(id) => Ok(*id),
        other => Err(mismatch(ShapeKind::Face, other).into()),
    }
}

impl TopologyStore {
    fn edge_data(&self, shape: &Shape) -> Result<&EdgeData> {
        Ok(self.edge(edge_id(shape)?)?)
    }

    fn face_data(&self, shape: &Shape) -> Result<&FaceData> {
        Ok(self.face(face_id(shape)?)?)
    }

    fn edge_curve(&self, shape: &Shape) -> Result<(&EdgeCurve, Interval)> {
        let edge = self.edge_data(shape)?;
        let curve = edge.curve.as_ref().ok_or(GeometryError::MissingCurve)?;
        Ok((curve, edge.range))
    }

    /// Continuity from the face normals at the edge midpoint, for edges with
    /// no recorded regularity.
    ///
    /// Falls back to `C0` when the edge has no curve or either face normal is
    /// undefined at the midpoint, as at the pole of a sphere. Missing faces
    /// are still errors.
    fn geometric_continuity(&self, edge: &EdgeData, f1: FaceId, f2: FaceId) -> Result<Continuity> {
        let Some(curve) = &edge.curve else {
            return Ok(Continuity::C0);
        };
        let mid = curve.evaluate(edge.range.middle())?;
        let (Ok(n1), Ok(n2)) = (self.face(f1)?.normal_at(&mid), self.face(f2)?.normal_at(&mid))
        else {
            return Ok(Continuity::C0);
        };
        if n1.dot(&n2) > TANGENT_DOT {
            Ok(Continuity::G1)
        } else {
            Ok(Continuity::C0)
        }
    }
}

impl GeometryKernel for TopologyStore {
    type Handle = Shape;

    fn shape_kind(&self, shape: &Shape) -> ShapeKind {
        shape.kind()
    }

    fn shape_key(&self, shape: &Shape) -> ShapeKey {
        shape.key()
    }

    fn orientation(&self, shape: &Shape) -> Orientation {
        shape.orientation()
    }

    fn explore(&self, shape: &Shape, kind: ShapeKind) -> Result<Vec<Shape>> {
        let mut out = Vec::new();
        self.collect(*shape, kind, &mut out)?;
        Ok(out)
    }

    fn vertex_point(&self, vertex: &Shape) -> Result<Point3> {
        Ok(self.vertex(vertex_id(vertex)?)?.point)
    }

    fn edge_has_curve(&self, edge: &Shape) -> Result<bool> {
        Ok(self.edge_data(edge)?.curve.is_some())
    }

    fn edge_range(&self, edge: &Shape) -> Result<Interval> {
        let (_, range) = self.edge_curve(edge)?;
        Ok(range)
    }

    fn edge_d1(&self, edge: &Shape, u: f64) -> Result<(Point3, Vector3)> {
        let (curve, _) = self.edge_curve(edge)?;
        Ok((curve.evaluate(u)?, curve.derivative(u)?))
    }

    fn edge_length(&self, edge: &Shape, range: Interval, _tolerance: f64) -> Result<f64> {
        // Lines and circles have closed-form lengths.
        let (curve, _) = self.edge_curve(edge)?;
        Ok(curve.length(range))
    }

    fn edge_curve_code(&self, edge: &Shape) -> Result<u32> {
        let kind = self
            .edge_data(edge)?
            .curve
            .as_ref()
            .map_or(CurveType::Other, EdgeCurve::curve_type);
        Ok(kind.code())
    }

    fn edge_specific_curve(&self, edge: &Shape) -> Result<SpecificCurve> {
        let curve = match &self.edge_data(edge)?.curve {
            Some(EdgeCurve::Line(line)) => SpecificCurve::Line(line.clone()),
            Some(EdgeCurve::Circle(circle)) => SpecificCurve::Circle(circle.clone()),
            None => SpecificCurve::Other,
        };
        Ok(curve)
    }

    fn edge_is_periodic(&self, edge: &Shape) -> Result<bool> {
        Ok(self
            .edge_data(edge)?
            .curve
            .as_ref()
            .is_some_and(EdgeCurve::is_periodic))
    }

    fn edge_is_rational(&self, edge: &Shape) -> Result<bool> {
        // Lines and circles are stored in exact analytic form.
        self.edge_data(edge)?;
        Ok(false)
    }

    fn edge_is_closed(&self, edge: &Shape) -> Result<bool> {
        Ok(self.edge_data(edge)?.is_closed())
    }

    fn edge_is_convex(&self, edge: &Shape) -> Result<bool> {
        Ok(self.edge_data(edge)?.convex)
    }

    fn edge_is_seam(&self, edge: &Shape, face: &Shape) -> Result<bool> {
        Ok(self.edge_uses(face_id(face)?, edge_id(edge)?)? >= 2)
    }

    fn edge_continuity(&self, edge: &Shape, face1: &Shape, face2: &Shape) -> Result<Continuity> {
        let data = self.edge_data(edge)?;
        let (f1, f2) = (face_id(face1)?, face_id(face2)?);
        match data.regularity(f1, f2) {
            Some(continuity) => Ok(continuity),
            None => self.geometric_continuity(data, f1, f2),
        }
    }

    fn face_uv_bounds(&self, face: &Shape) -> Result<UvBounds> {
        Ok(self.face_data(face)?.uv_bounds)
    }

    fn face_point(&self, face: &Shape, u: f64, v: f64) -> Result<Point3> {
        self.face_data(face)?.point(u, v)
    }
}
