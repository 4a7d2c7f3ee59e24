use std::collections::HashMap;

use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::curve::Line;
use crate::geometry::surface::Plane;
use crate::math::{Interval, Point3, UvBounds, TOLERANCE};
use crate::topology::{
    EdgeCurve, EdgeData, EdgeId, FaceData, FaceSurface, OrientedEdge, ShellData, SolidData,
    SolidId, TopologyStore, VertexId, WireData,
};

/// Corner indices of each face, counter-clockwise seen from outside.
///
/// Corners are numbered `x + 2y + 4z` style:
/// 0 `(x0,y0,z0)`, 1 `(x1,y0,z0)`, 2 `(x1,y1,z0)`, 3 `(x0,y1,z0)`,
/// 4 `(x0,y0,z1)`, 5 `(x1,y0,z1)`, 6 `(x1,y1,z1)`, 7 `(x0,y1,z1)`.
const FACES: [[usize; 4]; 6] = [
    [0, 3, 2, 1], // bottom (-z)
    [4, 5, 6, 7], // top    (+z)
    [0, 1, 5, 4], // front  (-y)
    [3, 7, 6, 2], // back   (+y)
    [0, 4, 7, 3], // left   (-x)
    [1, 2, 6, 5], // right  (+x)
];

/// Creates an axis-aligned box solid from two corner points.
///
/// The result has 6 planar faces, 12 line edges and 8 vertices. Every edge
/// is used once in each direction by the two faces it separates.
pub struct MakeBox {
    min_corner: Point3,
    max_corner: Point3,
}

impl MakeBox {
    /// Creates a new `MakeBox` operation.
    #[must_use]
    pub fn new(min_corner: Point3, max_corner: Point3) -> Self {
        Self {
            min_corner,
            max_corner,
        }
    }

    /// Executes the operation, creating the box in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if the box has a non-positive extent along any axis.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        let (lo, hi) = (self.min_corner, self.max_corner);
        let extent = hi - lo;
        if extent.iter().any(|&d| d < TOLERANCE) {
            return Err(OperationError::InvalidInput(
                "box max corner must exceed min corner on every axis".into(),
            )
            .into());
        }
        debug!(min = ?lo, max = ?hi, "creating box");

        let corners = [
            Point3::new(lo.x, lo.y, lo.z),
            Point3::new(hi.x, lo.y, lo.z),
            Point3::new(hi.x, hi.y, lo.z),
            Point3::new(lo.x, hi.y, lo.z),
            Point3::new(lo.x, lo.y, hi.z),
            Point3::new(hi.x, lo.y, hi.z),
            Point3::new(hi.x, hi.y, hi.z),
            Point3::new(lo.x, hi.y, hi.z),
        ];
        let vertices: Vec<VertexId> = corners.iter().map(|&p| store.add_vertex(p)).collect();

        // Edges are created on first use; the second use runs the other way.
        let mut edges: HashMap<(usize, usize), (EdgeId, usize)> = HashMap::new();
        let mut faces = Vec::with_capacity(FACES.len());

        for quad in FACES {
            let mut loop_edges = Vec::with_capacity(4);
            for k in 0..4 {
                let (a, b) = (quad[k], quad[(k + 1) % 4]);
                let key = (a.min(b), a.max(b));
                let oriented = if let Some(&(edge, start)) = edges.get(&key) {
                    if start == a {
                        OrientedEdge::forward(edge)
                    } else {
                        OrientedEdge::reversed(edge)
                    }
                } else {
                    let (line, t_end) = Line::through(corners[a], corners[b])?;
                    let data = EdgeData::new(
                        vertices[a],
                        vertices[b],
                        EdgeCurve::Line(line),
                        Interval::new(0.0, t_end),
                    )
                    .with_convex(true);
                    let edge = store.add_edge(data);
                    edges.insert(key, (edge, a));
                    OrientedEdge::forward(edge)
                };
                loop_edges.push(oriented);
            }

            let origin = corners[quad[0]];
            let u_dir = corners[quad[1]] - origin;
            let v_dir = corners[quad[3]] - origin;
            let bounds = UvBounds::new(
                Interval::new(0.0, u_dir.norm()),
                Interval::new(0.0, v_dir.norm()),
            );
            let plane = Plane::new(origin, u_dir, v_dir)?;
            let wire = store.add_wire(WireData::new(loop_edges));
            faces.push(store.add_face(FaceData::new(FaceSurface::Plane(plane), wire, bounds)));
        }

        let shell = store.add_shell(ShellData::new(faces));
        Ok(store.add_solid(SolidData::new(shell)))
    }
}
