use std::f64::consts::{FRAC_PI_2, TAU};

use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::curve::Circle;
use crate::geometry::surface::Sphere;
use crate::geometry::Continuity;
use crate::math::{Interval, Point3, UvBounds, Vector3, TOLERANCE};
use crate::topology::{
    EdgeCurve, EdgeData, FaceData, FaceSurface, OrientedEdge, Regularity, ShellData, SolidData,
    SolidId, TopologyStore, WireData,
};

/// Creates a sphere solid from center and radius.
///
/// The result is a single periodic face. Its boundary runs up a half-circle
/// seam from the south pole to the north pole, around a degenerate edge at
/// the north pole, back down the seam, and around a degenerate edge at the
/// south pole. The pole axis is `+z`.
pub struct MakeSphere {
    center: Point3,
    radius: f64,
}

impl MakeSphere {
    /// Creates a new `MakeSphere` operation.
    #[must_use]
    pub fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Executes the operation, creating the sphere in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        if self.radius < TOLERANCE {
            return Err(
                OperationError::InvalidInput("sphere radius must be positive".into()).into(),
            );
        }
        debug!(radius = self.radius, "creating sphere");

        let r = self.radius;
        let axis = Vector3::z();
        let ref_dir = Vector3::x();

        let south = store.add_vertex(self.center - axis * r);
        let north = store.add_vertex(self.center + axis * r);

        // Meridian in the xz half-plane: t = -pi/2 at the south pole.
        let meridian = Circle::new(self.center, r, -Vector3::y(), ref_dir)?;
        let seam = store.add_edge(EdgeData::new(
            south,
            north,
            EdgeCurve::Circle(meridian),
            Interval::new(-FRAC_PI_2, FRAC_PI_2),
        ));
        let north_pole = store.add_edge(EdgeData::degenerate(north));
        let south_pole = store.add_edge(EdgeData::degenerate(south));

        let wire = store.add_wire(WireData::new(vec![
            OrientedEdge::forward(seam),
            OrientedEdge::forward(north_pole),
            OrientedEdge::reversed(seam),
            OrientedEdge::reversed(south_pole),
        ]));
        let face = store.add_face(FaceData::new(
            FaceSurface::Sphere(Sphere::new(self.center, r, axis, ref_dir)?),
            wire,
            UvBounds::new(
                Interval::new(0.0, TAU),
                Interval::new(-FRAC_PI_2, FRAC_PI_2),
            ),
        ));

        store.edge_mut(seam)?.regularity.push(Regularity {
            faces: (face, face),
            continuity: Continuity::CN,
        });

        let shell = store.add_shell(ShellData::new(vec![face]));
        Ok(store.add_solid(SolidData::new(shell)))
    }
}
