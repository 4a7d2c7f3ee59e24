//! Face adjacency graphs.
//!
//! [`FaceAdjacency`] walks a [`Solid`](crate::entity::Solid) and produces a
//! [`FaceAdjacencyGraph`]: one node per face, one edge per topological edge
//! shared by two face uses, each carrying [`EdgeAttributes`].

mod adjacency;
mod attributes;
mod container;
mod options;

pub use adjacency::{face_adjacency, FaceAdjacency};
pub use attributes::{AttributeValue, EdgeAttribute, EdgeAttributes, NodeAttribute};
pub use container::{AdjacencyEdge, FaceAdjacencyGraph};
pub use options::AdjacencyOptions;
