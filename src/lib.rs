//! Face adjacency graphs for boundary-representation solids.
//!
//! The graph builder reads a solid through the [`kernel::GeometryKernel`]
//! trait. [`topology::TopologyStore`] is an in-memory kernel with primitive
//! solids in [`operations::creation`].

pub mod entity;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod kernel;
pub mod math;
pub mod operations;
pub mod topology;

pub use error::{BrepGraphError, Result};
pub use graph::{face_adjacency, AdjacencyOptions, FaceAdjacency, FaceAdjacencyGraph};
