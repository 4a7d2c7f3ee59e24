use std::f64::consts::TAU;

use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::curve::{Circle, Line};
use crate::geometry::surface::{Cylinder, Plane};
use crate::geometry::Continuity;
use crate::math::{perpendicular_dir, Interval, Point3, UvBounds, Vector3, TOLERANCE};
use crate::topology::{
    EdgeCurve, EdgeData, FaceData, FaceSurface, OrientedEdge, Regularity, ShellData, SolidData,
    SolidId, TopologyStore, WireData,
};

/// Creates a cylinder solid from a base center, radius, axis, and height.
///
/// The lateral surface is a single periodic face closed by a seam line that
/// the face uses twice. Each cap is a planar face bounded by one closed
/// circular edge. Faces are ordered lateral, top, bottom.
pub struct MakeCylinder {
    center: Point3,
    radius: f64,
    axis: Vector3,
    height: f64,
}

impl MakeCylinder {
    /// Creates a new `MakeCylinder` operation.
    #[must_use]
    pub fn new(center: Point3, radius: f64, axis: Vector3, height: f64) -> Self {
        Self {
            center,
            radius,
            axis,
            height,
        }
    }

    /// Executes the operation, creating the cylinder in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius or height is not positive, or the axis
    /// direction is degenerate.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        if self.radius < TOLERANCE {
            return Err(
                OperationError::InvalidInput("cylinder radius must be positive".into()).into(),
            );
        }
        if self.height < TOLERANCE {
            return Err(
                OperationError::InvalidInput("cylinder height must be positive".into()).into(),
            );
        }
        let axis_len = self.axis.norm();
        if axis_len < TOLERANCE {
            return Err(
                OperationError::InvalidInput("cylinder axis must be non-zero".into()).into(),
            );
        }
        debug!(radius = self.radius, height = self.height, "creating cylinder");

        let axis = self.axis / axis_len;
        let ref_dir = perpendicular_dir(&axis);
        let binormal = axis.cross(&ref_dir);
        let (r, h) = (self.radius, self.height);
        let top_center = self.center + axis * h;

        let bottom_vertex = store.add_vertex(self.center + ref_dir * r);
        let top_vertex = store.add_vertex(top_center + ref_dir * r);

        let full_turn = Interval::new(0.0, TAU);
        let bottom_circle = Circle::new(self.center, r, axis, ref_dir)?;
        let bottom = store.add_edge(
            EdgeData::new(bottom_vertex, bottom_vertex, EdgeCurve::Circle(bottom_circle), full_turn)
                .with_convex(true),
        );
        let top_circle = Circle::new(top_center, r, axis, ref_dir)?;
        let top = store.add_edge(
            EdgeData::new(top_vertex, top_vertex, EdgeCurve::Circle(top_circle), full_turn)
                .with_convex(true),
        );
        let (seam_line, _) = Line::through(self.center + ref_dir * r, top_center + ref_dir * r)?;
        let seam = store.add_edge(EdgeData::new(
            bottom_vertex,
            top_vertex,
            EdgeCurve::Line(seam_line),
            Interval::new(0.0, h),
        ));

        let lateral_wire = store.add_wire(WireData::new(vec![
            OrientedEdge::forward(bottom),
            OrientedEdge::forward(seam),
            OrientedEdge::reversed(top),
            OrientedEdge::reversed(seam),
        ]));
        let lateral = store.add_face(FaceData::new(
            FaceSurface::Cylinder(Cylinder::new(self.center, r, axis, ref_dir)?),
            lateral_wire,
            UvBounds::new(full_turn, Interval::new(0.0, h)),
        ));

        let cap_bounds = UvBounds::new(Interval::new(-r, r), Interval::new(-r, r));
        let top_wire = store.add_wire(WireData::new(vec![OrientedEdge::forward(top)]));
        let top_face = store.add_face(FaceData::new(
            FaceSurface::Plane(Plane::new(top_center, ref_dir, binormal)?),
            top_wire,
            cap_bounds,
        ));
        let bottom_wire = store.add_wire(WireData::new(vec![OrientedEdge::reversed(bottom)]));
        let bottom_face = store.add_face(FaceData::new(
            FaceSurface::Plane(Plane::new(self.center, binormal, ref_dir)?),
            bottom_wire,
            cap_bounds,
        ));

        store.edge_mut(seam)?.regularity.push(Regularity {
            faces: (lateral, lateral),
            continuity: Continuity::CN,
        });

        let shell = store.add_shell(ShellData::new(vec![lateral, top_face, bottom_face]));
        Ok(store.add_solid(SolidData::new(shell)))
    }
}
