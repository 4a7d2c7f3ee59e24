use crate::kernel::Orientation;

use super::edge::EdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a wire in the topology store.
    pub struct WireId;
}

/// An edge used by a wire, with the direction the wire traverses it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrientedEdge {
    pub edge: EdgeId,
    pub orientation: Orientation,
}

impl OrientedEdge {
    /// The edge traversed along its curve direction.
    #[must_use]
    pub fn forward(edge: EdgeId) -> Self {
        Self {
            edge,
            orientation: Orientation::Forward,
        }
    }

    /// The edge traversed against its curve direction.
    #[must_use]
    pub fn reversed(edge: EdgeId) -> Self {
        Self {
            edge,
            orientation: Orientation::Reversed,
        }
    }
}

/// Data associated with a topological wire (a face boundary loop).
///
/// A seam edge appears twice in the same wire, once in each orientation.
#[derive(Debug, Clone)]
pub struct WireData {
    /// The ordered sequence of oriented edges.
    pub edges: Vec<OrientedEdge>,
}

impl WireData {
    #[must_use]
    pub fn new(edges: Vec<OrientedEdge>) -> Self {
        Self { edges }
    }

    /// Number of times `edge` is used by this wire.
    #[must_use]
    pub fn occurrences(&self, edge: EdgeId) -> usize {
        self.edges.iter().filter(|e| e.edge == edge).count()
    }
}
