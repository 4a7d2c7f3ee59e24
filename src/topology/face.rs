use crate::error::Result;
use crate::geometry::surface::{Cylinder, Plane, Sphere, Surface};
use crate::math::{Point3, UvBounds, Vector3};

use super::wire::WireId;

slotmap::new_key_type! {
    /// Unique identifier for a face in the topology store.
    pub struct FaceId;
}

/// The geometric surface associated with a face.
#[derive(Debug, Clone)]
pub enum FaceSurface {
    Plane(Plane),
    Cylinder(Cylinder),
    Sphere(Sphere),
}

impl FaceSurface {
    fn as_surface(&self) -> &dyn Surface {
        match self {
            FaceSurface::Plane(plane) => plane,
            FaceSurface::Cylinder(cylinder) => cylinder,
            FaceSurface::Sphere(sphere) => sphere,
        }
    }
}

/// Data associated with a topological face.
///
/// A face is a bounded region on a surface, defined by an outer wire
/// and optionally inner wires (holes).
#[derive(Debug, Clone)]
pub struct FaceData {
    pub surface: FaceSurface,
    pub outer_wire: WireId,
    pub inner_wires: Vec<WireId>,
    /// If `true`, the face normal agrees with the surface normal.
    pub same_sense: bool,
    /// Parametric extent of the face on its surface.
    pub uv_bounds: UvBounds,
}

impl FaceData {
    /// Creates a face without holes whose normal agrees with its surface.
    #[must_use]
    pub fn new(surface: FaceSurface, outer_wire: WireId, uv_bounds: UvBounds) -> Self {
        Self {
            surface,
            outer_wire,
            inner_wires: Vec::new(),
            same_sense: true,
            uv_bounds,
        }
    }

    /// All boundary wires, outer first.
    pub fn wires(&self) -> impl Iterator<Item = WireId> + '_ {
        std::iter::once(self.outer_wire).chain(self.inner_wires.iter().copied())
    }

    /// Evaluates the face's surface at `(u, v)`.
    ///
    /// # Errors
    ///
    /// Returns an error if surface evaluation fails.
    pub fn point(&self, u: f64, v: f64) -> Result<Point3> {
        self.surface.as_surface().evaluate(u, v)
    }

    /// Outward face normal at a point lying on the face.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface normal is degenerate at `point`.
    pub fn normal_at(&self, point: &Point3) -> Result<Vector3> {
        let surface = self.surface.as_surface();
        let (u, v) = surface.inverse(point);
        let n = surface.normal(u, v)?;
        Ok(if self.same_sense { n } else { -n })
    }
}
