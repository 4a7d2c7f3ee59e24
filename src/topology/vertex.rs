use crate::math::Point3;

slotmap::new_key_type! {
    /// Unique identifier for a vertex in the topology store.
    pub struct VertexId;
}

/// A topological vertex: a position shared by the edges that end on it.
///
/// Vertices are identified by their [`VertexId`]; two vertices at the same
/// position are still distinct entities.
#[derive(Debug, Clone)]
pub struct VertexData {
    pub point: Point3,
}

impl From<Point3> for VertexData {
    fn from(point: Point3) -> Self {
        Self { point }
    }
}
