use crate::error::Result;
use crate::kernel::{GeometryKernel, ShapeKey, ShapeKind};
use crate::math::{Point3, UvBounds};

use super::{check_kind, entity_identity, unique, Edge, Vertex};

/// A topological face: a bounded region of a surface.
pub struct Face<'k, K: GeometryKernel> {
    kernel: &'k K,
    handle: K::Handle,
}

impl<'k, K: GeometryKernel> Face<'k, K> {
    /// Wraps a face handle.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::TypeMismatch`](crate::error::TopologyError::TypeMismatch)
    /// if `handle` is not a face.
    pub fn new(kernel: &'k K, handle: K::Handle) -> Result<Self> {
        check_kind(kernel, &handle, ShapeKind::Face)?;
        Ok(Self { kernel, handle })
    }

    pub(crate) fn from_explored(kernel: &'k K, handle: K::Handle) -> Self {
        Self { kernel, handle }
    }

    /// Whether this face reads from `kernel`. Keys are only comparable
    /// between faces of the same kernel.
    pub(crate) fn belongs_to(&self, kernel: &K) -> bool {
        std::ptr::eq(self.kernel, kernel)
    }

    /// Edge uses across all boundary loops, in kernel order.
    ///
    /// An edge the face uses twice, such as a seam, appears twice.
    ///
    /// # Errors
    ///
    /// Returns an error if the kernel cannot traverse the face.
    pub fn edges(&self) -> Result<Vec<Edge<'k, K>>> {
        Ok(self
            .kernel
            .explore(&self.handle, ShapeKind::Edge)?
            .into_iter()
            .map(|h| Edge::from_explored(self.kernel, h))
            .collect())
    }

    /// Distinct vertices of the face, in first-seen order.
    ///
    /// # Errors
    ///
    /// Returns an error if the kernel cannot traverse the face.
    pub fn vertices(&self) -> Result<Vec<Vertex<'k, K>>> {
        let handles = self.kernel.explore(&self.handle, ShapeKind::Vertex)?;
        Ok(unique(self.kernel, handles, Vertex::from_explored))
    }

    /// Parametric extent of the face.
    ///
    /// # Errors
    ///
    /// Returns an error if the kernel no longer holds the face.
    pub fn uv_bounds(&self) -> Result<UvBounds> {
        self.kernel.face_uv_bounds(&self.handle)
    }

    /// Point on the face's surface at `(u, v)`.
    ///
    /// # Errors
    ///
    /// Returns an error if surface evaluation fails.
    pub fn point(&self, u: f64, v: f64) -> Result<Point3> {
        self.kernel.face_point(&self.handle, u, v)
    }
}

entity_identity!(Face);
