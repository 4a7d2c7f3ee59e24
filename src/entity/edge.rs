use crate::error::{Result, TopologyError};
use crate::geometry::{Continuity, CurveType, SpecificCurve};
use crate::kernel::{GeometryKernel, Orientation, ShapeKey, ShapeKind};
use crate::math::{Interval, Point3, Vector3, TOLERANCE};

use super::{check_kind, entity_identity, Face, Vertex};

/// Tolerance used by [`Edge::length`] callers that have no better value.
pub const DEFAULT_LENGTH_TOLERANCE: f64 = 1e-9;

/// A topological edge: a bounded curve between two vertices.
///
/// Some edges carry no 3D curve, such as the collapsed boundary at the pole of
/// a sphere. Geometric queries on those return fixed values instead of
/// failing: the origin for points, the zero vector for derivatives, an empty
/// parameter interval and a length of zero.
pub struct Edge<'k, K: GeometryKernel> {
    kernel: &'k K,
    handle: K::Handle,
}

impl<'k, K: GeometryKernel> Edge<'k, K> {
    /// Wraps an edge handle.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::TypeMismatch`] if `handle` is not an edge.
    pub fn new(kernel: &'k K, handle: K::Handle) -> Result<Self> {
        check_kind(kernel, &handle, ShapeKind::Edge)?;
        Ok(Self { kernel, handle })
    }

    pub(crate) fn from_explored(kernel: &'k K, handle: K::Handle) -> Self {
        Self { kernel, handle }
    }

    /// Whether the edge carries a 3D curve.
    ///
    /// # Errors
    ///
    /// Returns an error if the kernel no longer holds the edge.
    pub fn has_curve(&self) -> Result<bool> {
        self.kernel.edge_has_curve(&self.handle)
    }

    /// Point on the edge curve at parameter `u`, or the origin if the edge has
    /// no curve.
    ///
    /// # Errors
    ///
    /// Returns an error if the kernel fails to evaluate an existing curve.
    pub fn point(&self, u: f64) -> Result<Point3> {
        if !self.has_curve()? {
            return Ok(Point3::origin());
        }
        let (point, _) = self.kernel.edge_d1(&self.handle, u)?;
        Ok(point)
    }

    /// Unit tangent at `u`, following the edge orientation.
    ///
    /// Zero if the edge has no curve or the derivative vanishes.
    ///
    /// # Errors
    ///
    /// Returns an error if the kernel fails to evaluate an existing curve.
    pub fn tangent(&self, u: f64) -> Result<Vector3> {
        let d = self.first_derivative(u)?;
        let norm = d.norm();
        if norm < TOLERANCE {
            return Ok(Vector3::zeros());
        }
        let tangent = d / norm;
        Ok(if self.reversed() { -tangent } else { tangent })
    }

    /// First derivative of the edge curve at `u`, along the curve's own
    /// direction. Zero if the edge has no curve.
    ///
    /// # Errors
    ///
    /// Returns an error if the kernel fails to evaluate an existing curve.
    pub fn first_derivative(&self, u: f64) -> Result<Vector3> {
        if !self.has_curve()? {
            return Ok(Vector3::zeros());
        }
        let (_, d) = self.kernel.edge_d1(&self.handle, u)?;
        Ok(d)
    }

    /// Arc length of the edge over its parameter range.
    ///
    /// # Errors
    ///
    /// Returns an error if the kernel fails to measure an existing curve.
    pub fn length(&self, tolerance: f64) -> Result<f64> {
        if !self.has_curve()? {
            return Ok(0.0);
        }
        let range = self.kernel.edge_range(&self.handle)?;
        self.kernel.edge_length(&self.handle, range, tolerance)
    }

    /// Parameter range of the edge, or [`Interval::empty`] if it has no curve.
    ///
    /// # Errors
    ///
    /// Returns an error if the kernel no longer holds the edge.
    pub fn u_bounds(&self) -> Result<Interval> {
        if !self.has_curve()? {
            return Ok(Interval::empty());
        }
        self.kernel.edge_range(&self.handle)
    }

    /// Classification of the edge curve.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::UnsupportedCurveType`](crate::error::GeometryError::UnsupportedCurveType)
    /// if the kernel reports a code outside the known set.
    pub fn curve_type(&self) -> Result<CurveType> {
        let code = self.kernel.edge_curve_code(&self.handle)?;
        Ok(CurveType::try_from(code)?)
    }

    /// The edge curve with its kind-specific data.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve type is unrecognized or the kernel cannot
    /// describe the curve.
    pub fn specific_curve(&self) -> Result<SpecificCurve> {
        // Classify first so an unknown code surfaces as such.
        let kind = self.curve_type()?;
        let curve = self.kernel.edge_specific_curve(&self.handle)?;
        if curve.curve_type() != kind {
            return Err(TopologyError::InvalidTopology(format!(
                "kernel described a {} curve for a {kind} edge",
                curve.curve_type()
            ))
            .into());
        }
        Ok(curve)
    }

    /// # Errors
    ///
    /// Returns an error if the kernel no longer holds the edge.
    pub fn periodic(&self) -> Result<bool> {
        self.kernel.edge_is_periodic(&self.handle)
    }

    /// # Errors
    ///
    /// Returns an error if the kernel no longer holds the edge.
    pub fn rational(&self) -> Result<bool> {
        self.kernel.edge_is_rational(&self.handle)
    }

    /// The closed flag stored on the edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the kernel no longer holds the edge.
    pub fn closed(&self) -> Result<bool> {
        self.kernel.edge_is_closed(&self.handle)
    }

    /// The convex flag stored on the edge.
    ///
    /// This reads a flag set when the model was built. It does not compare
    /// the adjacent face normals.
    ///
    /// # Errors
    ///
    /// Returns an error if the kernel no longer holds the edge.
    pub fn convex(&self) -> Result<bool> {
        self.kernel.edge_is_convex(&self.handle)
    }

    /// Whether this use of the edge runs against its curve.
    #[must_use]
    pub fn reversed(&self) -> bool {
        self.kernel.orientation(&self.handle) == Orientation::Reversed
    }

    /// Whether the edge is a seam of `face`.
    ///
    /// # Errors
    ///
    /// Returns an error if the kernel no longer holds either entity.
    pub fn seam(&self, face: &Face<'_, K>) -> Result<bool> {
        self.kernel.edge_is_seam(&self.handle, face.handle())
    }

    /// Continuity between `face1` and `face2` across this edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the kernel no longer holds any of the entities.
    pub fn continuity(&self, face1: &Face<'_, K>, face2: &Face<'_, K>) -> Result<Continuity> {
        self.kernel
            .edge_continuity(&self.handle, face1.handle(), face2.handle())
    }

    /// The bounding vertices, in curve order.
    ///
    /// # Errors
    ///
    /// Returns an error if the kernel no longer holds the edge.
    pub fn vertices(&self) -> Result<Vec<Vertex<'k, K>>> {
        Ok(self
            .kernel
            .explore(&self.handle, ShapeKind::Vertex)?
            .into_iter()
            .map(|h| Vertex::from_explored(self.kernel, h))
            .collect())
    }

    /// Vertex where this use of the edge begins.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge has no bounding vertices.
    pub fn start_vertex(&self) -> Result<Vertex<'k, K>> {
        self.bounding_vertex(self.reversed())
    }

    /// Vertex where this use of the edge ends.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge has no bounding vertices.
    pub fn end_vertex(&self) -> Result<Vertex<'k, K>> {
        self.bounding_vertex(!self.reversed())
    }

    fn bounding_vertex(&self, last: bool) -> Result<Vertex<'k, K>> {
        let mut vertices = self.vertices()?;
        let vertex = if last { vertices.pop() } else { vertices.into_iter().next() };
        vertex.ok_or_else(|| {
            TopologyError::InvalidTopology(format!("edge {} has no vertices", self.key())).into()
        })
    }

    /// The half-edge running the other way along the same curve.
    ///
    /// # Errors
    ///
    /// Always returns [`TopologyError::Unsupported`]: kernels expose no
    /// half-edge structure.
    pub fn twin_edge(&self) -> Result<Edge<'k, K>> {
        Err(TopologyError::Unsupported("twin edge lookup").into())
    }
}

entity_identity!(Edge);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::BrepGraphError;
    use crate::operations::creation::{MakeBox, MakeSphere};
    use crate::topology::{Shape, TopologyStore};
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn edges_of(store: &TopologyStore, solid: Shape) -> Vec<Edge<'_, TopologyStore>> {
        store
            .explore(&solid, ShapeKind::Edge)
            .unwrap()
            .into_iter()
            .map(|h| Edge::new(store, h).unwrap())
            .collect()
    }

    #[test]
    fn line_edge_queries() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(Point3::origin(), Point3::new(2.0, 3.0, 4.0))
            .execute(&mut store)
            .unwrap();
        let edges = edges_of(&store, solid.into());

        // The bottom face loop starts at the min corner and runs along +y.
        let first = &edges[0];
        assert!(first.has_curve().unwrap());
        assert_eq!(first.curve_type().unwrap(), CurveType::Line);
        assert!(matches!(first.specific_curve().unwrap(), SpecificCurve::Line(_)));
        assert_relative_eq!(first.length(DEFAULT_LENGTH_TOLERANCE).unwrap(), 3.0, epsilon = 1e-9);
        let bounds = first.u_bounds().unwrap();
        assert_relative_eq!(bounds.length(), 3.0, epsilon = 1e-9);
        assert_relative_eq!(first.point(bounds.b).unwrap(), Point3::new(0.0, 3.0, 0.0), epsilon = 1e-9);
        assert!(first.convex().unwrap());
        assert!(!first.closed().unwrap());
        assert!(!first.periodic().unwrap());
        assert!(!first.rational().unwrap());
    }

    #[test]
    fn tangent_follows_orientation() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();
        let edges = edges_of(&store, solid.into());
        let forward = edges.iter().find(|e| !e.reversed()).unwrap();
        let reversed = edges
            .iter()
            .find(|e| e.reversed() && e.key() == forward.key())
            .unwrap();

        let u = forward.u_bounds().unwrap().middle();
        let t_fwd = forward.tangent(u).unwrap();
        let t_rev = reversed.tangent(u).unwrap();
        assert_relative_eq!(t_fwd.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(t_fwd, -t_rev, epsilon = 1e-12);
        // The raw derivative ignores orientation.
        assert_relative_eq!(
            forward.first_derivative(u).unwrap(),
            reversed.first_derivative(u).unwrap(),
            epsilon = 1e-12
        );
        assert_eq!(forward, reversed);
    }

    #[test]
    fn start_and_end_vertices_follow_orientation() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();
        for edge in edges_of(&store, solid.into()) {
            let u = edge.u_bounds().unwrap();
            let (first, last) = if edge.reversed() { (u.b, u.a) } else { (u.a, u.b) };
            let start = edge.start_vertex().unwrap().point().unwrap();
            let end = edge.end_vertex().unwrap().point().unwrap();
            assert_relative_eq!(start, edge.point(first).unwrap(), epsilon = 1e-9);
            assert_relative_eq!(end, edge.point(last).unwrap(), epsilon = 1e-9);
            assert_eq!(edge.vertices().unwrap().len(), 2);
        }
    }

    #[test]
    fn curveless_edge_returns_sentinels() {
        let mut store = TopologyStore::new();
        let solid = MakeSphere::new(Point3::new(5.0, 5.0, 5.0), 1.0)
            .execute(&mut store)
            .unwrap();
        let edges = edges_of(&store, solid.into());
        let pole = &edges[1];

        assert!(!pole.has_curve().unwrap());
        assert_eq!(pole.point(0.3).unwrap(), Point3::origin());
        assert_eq!(pole.tangent(0.3).unwrap(), Vector3::zeros());
        assert_eq!(pole.first_derivative(0.3).unwrap(), Vector3::zeros());
        assert!(pole.u_bounds().unwrap().is_empty());
        assert_eq!(pole.length(DEFAULT_LENGTH_TOLERANCE).unwrap(), 0.0);
        assert_eq!(pole.curve_type().unwrap(), CurveType::Other);
        assert!(matches!(pole.specific_curve().unwrap(), SpecificCurve::Other));
        assert!(pole.closed().unwrap());
    }

    #[test]
    fn sphere_seam_is_a_periodic_circle() {
        let mut store = TopologyStore::new();
        let solid = MakeSphere::new(Point3::origin(), 2.0)
            .execute(&mut store)
            .unwrap();
        let edges = edges_of(&store, solid.into());
        let seam = &edges[0];
        let face_handle = store.explore(&solid.into(), ShapeKind::Face).unwrap()[0];
        let face = Face::new(&store, face_handle).unwrap();

        assert!(seam.seam(&face).unwrap());
        assert!(seam.periodic().unwrap());
        assert_eq!(seam.curve_type().unwrap(), CurveType::Circle);
        assert_eq!(seam.continuity(&face, &face).unwrap(), Continuity::CN);
        assert_relative_eq!(seam.length(1e-6).unwrap(), 2.0 * PI, epsilon = 1e-9);
        let bounds = seam.u_bounds().unwrap();
        assert_relative_eq!(bounds.a, -FRAC_PI_2);
        assert_relative_eq!(bounds.b, FRAC_PI_2);
    }

    #[test]
    fn wrong_kind_and_twin_edge() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();
        let err = Edge::new(&store, Shape::from(solid)).unwrap_err();
        assert!(matches!(
            err,
            BrepGraphError::Topology(TopologyError::TypeMismatch {
                expected: ShapeKind::Edge,
                found: ShapeKind::Solid,
            })
        ));

        let edge = edges_of(&store, solid.into()).remove(0);
        assert!(matches!(
            edge.twin_edge(),
            Err(BrepGraphError::Topology(TopologyError::Unsupported(_)))
        ));
    }
}
