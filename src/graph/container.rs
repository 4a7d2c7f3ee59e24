use std::collections::{BTreeSet, HashMap};
use std::fmt;

use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::entity::{Edge, Face};
use crate::kernel::{GeometryKernel, ShapeKey};

use super::{AdjacencyOptions, AttributeValue, EdgeAttribute, EdgeAttributes, NodeAttribute};

/// Payload of a graph edge: the topological edge it came from and the
/// attributes derived from it.
pub struct AdjacencyEdge<'k, K: GeometryKernel> {
    pub(crate) edge: Edge<'k, K>,
    pub(crate) attributes: EdgeAttributes,
}

impl<'k, K: GeometryKernel> AdjacencyEdge<'k, K> {
    #[must_use]
    pub fn edge(&self) -> &Edge<'k, K> {
        &self.edge
    }

    #[must_use]
    pub fn attributes(&self) -> &EdgeAttributes {
        &self.attributes
    }
}

impl<K: GeometryKernel> fmt::Debug for AdjacencyEdge<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdjacencyEdge")
            .field("edge", &self.edge)
            .field("attributes", &self.attributes)
            .finish()
    }
}

/// Immutable face adjacency graph produced by
/// [`FaceAdjacency`](super::FaceAdjacency).
///
/// Node `i` is the `i`-th distinct face of the solid in kernel order. Graph
/// edges are numbered in the order their topological edges were first met.
/// The graph is a multigraph: two faces sharing several edges are joined
/// once per edge.
pub struct FaceAdjacencyGraph<'k, K: GeometryKernel> {
    kernel: &'k K,
    graph: UnGraph<Face<'k, K>, AdjacencyEdge<'k, K>>,
    index: HashMap<ShapeKey, NodeIndex>,
    options: AdjacencyOptions,
}

impl<'k, K: GeometryKernel> FaceAdjacencyGraph<'k, K> {
    pub(crate) fn new(
        kernel: &'k K,
        graph: UnGraph<Face<'k, K>, AdjacencyEdge<'k, K>>,
        index: HashMap<ShapeKey, NodeIndex>,
        options: AdjacencyOptions,
    ) -> Self {
        Self {
            kernel,
            graph,
            index,
            options,
        }
    }

    /// Faces in node-index order.
    pub fn nodes(&self) -> impl Iterator<Item = &Face<'k, K>> + '_ {
        self.graph.node_weights()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// The face at node `index`.
    #[must_use]
    pub fn node(&self, index: usize) -> Option<&Face<'k, K>> {
        self.graph.node_weight(NodeIndex::new(index))
    }

    /// Node index of `face`, if it belongs to this graph.
    ///
    /// A face read from another kernel instance never matches, even when
    /// its key collides with one of this graph's faces.
    #[must_use]
    pub fn node_index(&self, face: &Face<'_, K>) -> Option<usize> {
        if !face.belongs_to(self.kernel) {
            return None;
        }
        self.index.get(&face.key()).map(|n| n.index())
    }

    /// Attribute of the node holding `face`.
    #[must_use]
    pub fn node_attribute(&self, face: &Face<'_, K>, key: NodeAttribute) -> Option<AttributeValue> {
        match key {
            NodeAttribute::Index => self.node_index(face).map(AttributeValue::Index),
        }
    }

    /// Endpoints of every graph edge, as node indices.
    ///
    /// The iterator is lazy; call again to restart.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (e.source().index(), e.target().index()))
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Payloads of every graph edge, in edge-index order.
    pub fn adjacency_edges(&self) -> impl Iterator<Item = &AdjacencyEdge<'k, K>> + '_ {
        self.graph.edge_weights()
    }

    #[must_use]
    pub fn edge(&self, index: usize) -> Option<&AdjacencyEdge<'k, K>> {
        self.graph.edge_weight(EdgeIndex::new(index))
    }

    /// Attribute of graph edge `index`.
    #[must_use]
    pub fn edge_attribute(&self, index: usize, key: EdgeAttribute) -> Option<AttributeValue> {
        self.edge(index).map(|e| e.attributes.get(key))
    }

    /// All graph edges joining nodes `a` and `b`, in either direction.
    #[must_use]
    pub fn edges_between(&self, a: usize, b: usize) -> Vec<&AdjacencyEdge<'k, K>> {
        self.graph
            .edge_references()
            .filter(|e| {
                let (s, t) = (e.source().index(), e.target().index());
                (s, t) == (a, b) || (s, t) == (b, a)
            })
            .map(|e| e.weight())
            .collect()
    }

    /// Distinct nodes adjacent to `index`, ascending. A node with a
    /// self-loop lists itself.
    #[must_use]
    pub fn neighbors(&self, index: usize) -> Vec<usize> {
        let mut out = BTreeSet::new();
        for (s, t) in self.edges() {
            if s == index {
                out.insert(t);
            } else if t == index {
                out.insert(s);
            }
        }
        out.into_iter().collect()
    }

    #[must_use]
    pub fn self_loop_count(&self) -> usize {
        self.edges().filter(|(s, t)| s == t).count()
    }

    /// Settings the graph was built with.
    #[must_use]
    pub fn options(&self) -> AdjacencyOptions {
        self.options
    }

    /// Read-only view of the underlying `petgraph` graph.
    #[must_use]
    pub fn inner(&self) -> &UnGraph<Face<'k, K>, AdjacencyEdge<'k, K>> {
        &self.graph
    }
}

impl<K: GeometryKernel> fmt::Debug for FaceAdjacencyGraph<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FaceAdjacencyGraph")
            .field("nodes", &self.node_count())
            .field("edges", &self.edges().collect::<Vec<_>>())
            .field("options", &self.options)
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::entity::Solid;
    use crate::graph::face_adjacency;
    use crate::math::{Point3, Vector3};
    use crate::operations::creation::{MakeBox, MakeCylinder};
    use crate::topology::TopologyStore;

    #[test]
    fn node_lookup_round_trips() {
        let mut store = TopologyStore::new();
        let id = MakeBox::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();
        let solid = Solid::new(&store, id.into()).unwrap();
        let graph = face_adjacency(&solid, false).unwrap();

        for (i, face) in graph.nodes().enumerate() {
            assert_eq!(graph.node_index(face), Some(i));
            assert_eq!(graph.node(i), Some(face));
            assert_eq!(
                graph.node_attribute(face, NodeAttribute::Index),
                Some(AttributeValue::Index(i))
            );
        }
        assert!(graph.node(6).is_none());
        assert!(graph.edge(12).is_none());
    }

    #[test]
    fn box_faces_have_four_neighbors() {
        let mut store = TopologyStore::new();
        let id = MakeBox::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();
        let solid = Solid::new(&store, id.into()).unwrap();
        let graph = face_adjacency(&solid, false).unwrap();

        for i in 0..graph.node_count() {
            let neighbors = graph.neighbors(i);
            assert_eq!(neighbors.len(), 4);
            assert!(!neighbors.contains(&i));
            // Opposite faces never touch.
            let opposite = i ^ 1;
            assert!(!neighbors.contains(&opposite));
            assert!(graph.edges_between(i, opposite).is_empty());
        }
        // Restartable.
        assert_eq!(graph.edges().count(), graph.edges().count());
    }

    #[test]
    fn foreign_face_has_no_index() {
        let mut store = TopologyStore::new();
        let a = MakeBox::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();
        let b = MakeCylinder::new(Point3::origin(), 1.0, Vector3::z(), 1.0)
            .execute(&mut store)
            .unwrap();
        let box_solid = Solid::new(&store, a.into()).unwrap();
        let cyl_solid = Solid::new(&store, b.into()).unwrap();
        let graph = face_adjacency(&box_solid, true).unwrap();

        let stranger = cyl_solid.faces().unwrap().remove(0);
        assert_eq!(graph.node_index(&stranger), None);
        assert_eq!(graph.node_attribute(&stranger, NodeAttribute::Index), None);
        assert!(graph.options().self_loops);
        assert_eq!(graph.inner().node_count(), 6);
    }

    #[test]
    fn face_from_another_store_has_no_index() {
        let corner = Point3::new(1.0, 1.0, 1.0);
        let mut first = TopologyStore::new();
        let mut second = TopologyStore::new();
        let a = MakeBox::new(Point3::origin(), corner).execute(&mut first).unwrap();
        let b = MakeBox::new(Point3::origin(), corner).execute(&mut second).unwrap();
        let first_solid = Solid::new(&first, a.into()).unwrap();
        let second_solid = Solid::new(&second, b.into()).unwrap();

        let graph = face_adjacency(&first_solid, false).unwrap();
        let own = first_solid.faces().unwrap().remove(0);
        let twin = second_solid.faces().unwrap().remove(0);
        // Fresh stores hand out the same slot keys.
        assert_eq!(own.key(), twin.key());
        assert_eq!(graph.node_index(&own), Some(0));
        assert_eq!(graph.node_index(&twin), None);
        assert_eq!(graph.node_attribute(&twin, NodeAttribute::Index), None);
    }

    #[test]
    fn edge_attribute_lookup() {
        let mut store = TopologyStore::new();
        let id = MakeCylinder::new(Point3::origin(), 1.0, Vector3::z(), 1.0)
            .execute(&mut store)
            .unwrap();
        let solid = Solid::new(&store, id.into()).unwrap();
        let graph = face_adjacency(&solid, false).unwrap();

        for i in 0..graph.edge_count() {
            let closed = graph.edge_attribute(i, "closed".parse().unwrap());
            assert_eq!(closed.and_then(|v| v.as_bool()), Some(true));
            let curve = graph.edge_attribute(i, EdgeAttribute::CurveType).unwrap();
            assert_eq!(curve.to_string(), "circle");
        }
        assert_eq!(graph.edge_attribute(99, EdgeAttribute::Seam), None);
    }
}
