//! In-memory reference kernel.
//!
//! [`TopologyStore`] is an arena of B-rep entities addressed by generational
//! IDs. It implements [`GeometryKernel`](crate::kernel::GeometryKernel) with
//! [`Shape`] as its handle type, so graphs can be built over shapes made with
//! the [`creation`](crate::operations::creation) operations or assembled by
//! hand.

pub mod edge;
pub mod face;
mod kernel;
pub mod shell;
pub mod solid;
pub mod vertex;
pub mod wire;

pub use edge::{EdgeCurve, EdgeData, EdgeId, Regularity};
pub use face::{FaceData, FaceId, FaceSurface};
pub use shell::{ShellData, ShellId};
pub use solid::{SolidData, SolidId};
pub use vertex::{VertexData, VertexId};
pub use wire::{OrientedEdge, WireData, WireId};

use slotmap::{Key, SlotMap};

use crate::error::TopologyError;
use crate::kernel::{Orientation, ShapeKey, ShapeKind};

/// Handle to an entity in a [`TopologyStore`].
///
/// Edge handles carry the orientation of the use they came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Vertex(VertexId),
    Edge(EdgeId, Orientation),
    Wire(WireId),
    Face(FaceId),
    Shell(ShellId),
    Solid(SolidId),
}

impl Shape {
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Vertex(_) => ShapeKind::Vertex,
            Shape::Edge(..) => ShapeKind::Edge,
            Shape::Wire(_) => ShapeKind::Wire,
            Shape::Face(_) => ShapeKind::Face,
            Shape::Shell(_) => ShapeKind::Shell,
            Shape::Solid(_) => ShapeKind::Solid,
        }
    }

    /// Structural key, ignoring orientation.
    #[must_use]
    pub fn key(&self) -> ShapeKey {
        let raw = match self {
            Shape::Vertex(id) => id.data(),
            Shape::Edge(id, _) => id.data(),
            Shape::Wire(id) => id.data(),
            Shape::Face(id) => id.data(),
            Shape::Shell(id) => id.data(),
            Shape::Solid(id) => id.data(),
        };
        ShapeKey::new(self.kind(), raw.as_ffi())
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        match self {
            Shape::Edge(_, orientation) => *orientation,
            _ => Orientation::Forward,
        }
    }
}

impl From<VertexId> for Shape {
    fn from(id: VertexId) -> Self {
        Shape::Vertex(id)
    }
}

impl From<EdgeId> for Shape {
    fn from(id: EdgeId) -> Self {
        Shape::Edge(id, Orientation::Forward)
    }
}

impl From<OrientedEdge> for Shape {
    fn from(e: OrientedEdge) -> Self {
        Shape::Edge(e.edge, e.orientation)
    }
}

impl From<WireId> for Shape {
    fn from(id: WireId) -> Self {
        Shape::Wire(id)
    }
}

impl From<FaceId> for Shape {
    fn from(id: FaceId) -> Self {
        Shape::Face(id)
    }
}

impl From<ShellId> for Shape {
    fn from(id: ShellId) -> Self {
        Shape::Shell(id)
    }
}

impl From<SolidId> for Shape {
    fn from(id: SolidId) -> Self {
        Shape::Solid(id)
    }
}

/// Generates the insert and lookup accessors of one arena.
macro_rules! arena_accessors {
    ($field:ident: $id:ty => $data:ty, $add:ident, $get:ident, $label:literal) => {
        #[doc = concat!("Stores a new ", $label, ".")]
        pub fn $add(&mut self, data: impl Into<$data>) -> $id {
            self.$field.insert(data.into())
        }

        #[doc = concat!("Looks up a ", $label, ".")]
        ///
        /// # Errors
        ///
        /// Returns [`TopologyError::EntityNotFound`] for a stale or foreign ID.
        pub fn $get(&self, id: $id) -> Result<&$data, TopologyError> {
            self.$field
                .get(id)
                .ok_or_else(|| TopologyError::EntityNotFound($label.into()))
        }
    };
}

/// Arena holding every entity of the reference kernel.
///
/// Entities point at each other through slotmap keys. Keys carry no store
/// identity: an ID from one store may resolve to an unrelated entity in
/// another, and [`Shape::key`] values from different stores can collide.
#[derive(Debug, Default)]
pub struct TopologyStore {
    vertices: SlotMap<VertexId, VertexData>,
    edges: SlotMap<EdgeId, EdgeData>,
    wires: SlotMap<WireId, WireData>,
    faces: SlotMap<FaceId, FaceData>,
    shells: SlotMap<ShellId, ShellData>,
    solids: SlotMap<SolidId, SolidData>,
}

impl TopologyStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    arena_accessors!(vertices: VertexId => VertexData, add_vertex, vertex, "vertex");
    arena_accessors!(edges: EdgeId => EdgeData, add_edge, edge, "edge");
    arena_accessors!(wires: WireId => WireData, add_wire, wire, "wire");
    arena_accessors!(faces: FaceId => FaceData, add_face, face, "face");
    arena_accessors!(shells: ShellId => ShellData, add_shell, shell, "shell");
    arena_accessors!(solids: SolidId => SolidData, add_solid, solid, "solid");

    /// Mutable edge lookup, used to attach regularity records after the
    /// faces around an edge exist.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EntityNotFound`] for a stale or foreign ID.
    pub fn edge_mut(&mut self, id: EdgeId) -> Result<&mut EdgeData, TopologyError> {
        self.edges
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("edge".into()))
    }

    /// Direct sub-shapes of `shape`, in storage order.
    fn children(&self, shape: Shape) -> Result<Vec<Shape>, TopologyError> {
        let children: Vec<Shape> = match shape {
            Shape::Solid(id) => self.solid(id)?.shells().map(Shape::Shell).collect(),
            Shape::Shell(id) => self.shell(id)?.faces.iter().map(|&f| Shape::Face(f)).collect(),
            Shape::Face(id) => self.face(id)?.wires().map(Shape::Wire).collect(),
            Shape::Wire(id) => self.wire(id)?.edges.iter().map(|&e| Shape::from(e)).collect(),
            Shape::Edge(id, _) => {
                let edge = self.edge(id)?;
                vec![Shape::Vertex(edge.start), Shape::Vertex(edge.end)]
            }
            Shape::Vertex(id) => {
                self.vertex(id)?;
                Vec::new()
            }
        };
        Ok(children)
    }

    /// Collects every occurrence of a `kind` sub-shape below `shape`,
    /// depth first.
    pub(crate) fn collect(
        &self,
        shape: Shape,
        kind: ShapeKind,
        out: &mut Vec<Shape>,
    ) -> Result<(), TopologyError> {
        for child in self.children(shape)? {
            if child.kind() == kind {
                out.push(child);
            } else if child.kind() > kind {
                self.collect(child, kind, out)?;
            }
        }
        Ok(())
    }

    /// Number of times `edge` is used by the wires of `face`.
    pub(crate) fn edge_uses(&self, face: FaceId, edge: EdgeId) -> Result<usize, TopologyError> {
        let mut uses = 0;
        for wire in self.face(face)?.wires() {
            uses += self.wire(wire)?.occurrences(edge);
        }
        Ok(uses)
    }
}
