use crate::error::Result;
use crate::kernel::{GeometryKernel, ShapeKey, ShapeKind};
use crate::math::Point3;

use super::{check_kind, entity_identity};

/// A topological vertex.
///
/// Two vertices at the same position are still distinct unless the kernel
/// reports them as the same entity.
pub struct Vertex<'k, K: GeometryKernel> {
    kernel: &'k K,
    handle: K::Handle,
}

impl<'k, K: GeometryKernel> Vertex<'k, K> {
    /// Wraps a vertex handle.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::TypeMismatch`](crate::error::TopologyError::TypeMismatch)
    /// if `handle` is not a vertex.
    pub fn new(kernel: &'k K, handle: K::Handle) -> Result<Self> {
        check_kind(kernel, &handle, ShapeKind::Vertex)?;
        Ok(Self { kernel, handle })
    }

    /// Wraps a handle already known to be a vertex.
    pub(crate) fn from_explored(kernel: &'k K, handle: K::Handle) -> Self {
        Self { kernel, handle }
    }

    /// Position of the vertex.
    ///
    /// # Errors
    ///
    /// Returns an error if the kernel no longer holds the vertex.
    pub fn point(&self) -> Result<Point3> {
        self.kernel.vertex_point(&self.handle)
    }
}

entity_identity!(Vertex);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{BrepGraphError, TopologyError};
    use crate::topology::{EdgeData, Shape, TopologyStore};
    use std::collections::HashSet;

    #[test]
    fn identity_is_structural() {
        let mut store = TopologyStore::new();
        let a = store.add_vertex(Point3::new(1.0, 2.0, 3.0));
        let b = store.add_vertex(Point3::new(1.0, 2.0, 3.0));

        let va = Vertex::new(&store, Shape::from(a)).unwrap();
        let va2 = Vertex::new(&store, Shape::from(a)).unwrap();
        let vb = Vertex::new(&store, Shape::from(b)).unwrap();

        assert_eq!(va, va2);
        assert_ne!(va, vb);
        assert_eq!(va.point().unwrap(), vb.point().unwrap());

        let set: HashSet<_> = [va, va2, vb].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn edge_handle_is_rejected() {
        let mut store = TopologyStore::new();
        let v = store.add_vertex(Point3::origin());
        let e = store.add_edge(EdgeData::degenerate(v));
        let err = Vertex::new(&store, Shape::from(e)).unwrap_err();
        assert!(matches!(
            err,
            BrepGraphError::Topology(TopologyError::TypeMismatch {
                expected: ShapeKind::Vertex,
                found: ShapeKind::Edge,
            })
        ));
    }
}
