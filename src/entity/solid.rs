use crate::error::Result;
use crate::kernel::{GeometryKernel, ShapeKey, ShapeKind};

use super::{check_kind, entity_identity, unique, Edge, Face, Vertex};

/// A solid: the closed volume bounded by its shells.
pub struct Solid<'k, K: GeometryKernel> {
    kernel: &'k K,
    handle: K::Handle,
}

impl<'k, K: GeometryKernel> Solid<'k, K> {
    /// Wraps a solid handle.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::TypeMismatch`](crate::error::TopologyError::TypeMismatch)
    /// if `handle` is not a solid.
    pub fn new(kernel: &'k K, handle: K::Handle) -> Result<Self> {
        check_kind(kernel, &handle, ShapeKind::Solid)?;
        Ok(Self { kernel, handle })
    }

    /// The kernel this solid lives in.
    #[must_use]
    pub fn kernel(&self) -> &'k K {
        self.kernel
    }

    /// Distinct faces, in kernel order.
    ///
    /// # Errors
    ///
    /// Returns an error if the kernel cannot traverse the solid.
    pub fn faces(&self) -> Result<Vec<Face<'k, K>>> {
        let handles = self.kernel.explore(&self.handle, ShapeKind::Face)?;
        Ok(unique(self.kernel, handles, Face::from_explored))
    }

    /// Distinct edges, in kernel order. Each edge keeps the orientation of
    /// its first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the kernel cannot traverse the solid.
    pub fn edges(&self) -> Result<Vec<Edge<'k, K>>> {
        let handles = self.kernel.explore(&self.handle, ShapeKind::Edge)?;
        Ok(unique(self.kernel, handles, Edge::from_explored))
    }

    /// Distinct vertices, in kernel order.
    ///
    /// # Errors
    ///
    /// Returns an error if the kernel cannot traverse the solid.
    pub fn vertices(&self) -> Result<Vec<Vertex<'k, K>>> {
        let handles = self.kernel.explore(&self.handle, ShapeKind::Vertex)?;
        Ok(unique(self.kernel, handles, Vertex::from_explored))
    }
}

entity_identity!(Solid);
