use std::collections::hash_map::Entry;
use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use tracing::{debug, info, instrument, trace, warn};

use crate::entity::{Edge, Face, Solid};
use crate::error::{Result, TopologyError};
use crate::kernel::{GeometryKernel, ShapeKey};

use super::{AdjacencyEdge, AdjacencyOptions, EdgeAttributes, FaceAdjacencyGraph};

/// Faces using one topological edge, one entry per use.
struct Mates<'k, K: GeometryKernel> {
    edge: Edge<'k, K>,
    faces: Vec<NodeIndex>,
}

/// Builds the face adjacency graph of a solid.
///
/// Faces become nodes, indexed from 0 in the order the kernel lists them.
/// Every topological edge used by exactly two faces becomes a graph edge
/// between them. An edge used twice by one face (a seam) becomes a self-loop
/// when [`AdjacencyOptions::self_loops`] is set and is dropped otherwise.
///
/// Edges used by a single face, such as the degenerate edges at the poles of
/// a sphere, are skipped. Edges used by more than two faces are rejected with
/// [`TopologyError::NonManifoldEdge`].
///
/// ```
/// use brepgraph::graph::{AdjacencyOptions, FaceAdjacency};
/// use brepgraph::entity::Solid;
/// use brepgraph::math::Point3;
/// use brepgraph::operations::creation::MakeBox;
/// use brepgraph::topology::TopologyStore;
///
/// let mut store = TopologyStore::new();
/// let id = MakeBox::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0)).execute(&mut store)?;
/// let solid = Solid::new(&store, id.into())?;
///
/// let graph = FaceAdjacency::new(AdjacencyOptions::default()).execute(&solid)?;
/// assert_eq!(graph.node_count(), 6);
/// assert_eq!(graph.edge_count(), 12);
/// # Ok::<(), brepgraph::BrepGraphError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FaceAdjacency {
    options: AdjacencyOptions,
}

impl FaceAdjacency {
    /// Creates a new `FaceAdjacency` operation.
    #[must_use]
    pub fn new(options: AdjacencyOptions) -> Self {
        Self { options }
    }

    /// Executes the operation on `solid`.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::NonManifoldEdge`] if an edge is shared by more
    /// than two face uses, or
    /// [`GeometryError::UnsupportedCurveType`](crate::error::GeometryError::UnsupportedCurveType)
    /// if the kernel reports an unknown curve code for a graph edge.
    /// Kernel query failures are passed through.
    #[instrument(skip_all, fields(self_loops = self.options.self_loops))]
    pub fn execute<'k, K: GeometryKernel>(
        &self,
        solid: &Solid<'k, K>,
    ) -> Result<FaceAdjacencyGraph<'k, K>> {
        let faces = solid.faces()?;
        let mut graph = UnGraph::with_capacity(faces.len(), faces.len() * 2);
        let mut index = HashMap::with_capacity(faces.len());
        for face in faces {
            let key = face.key();
            index.insert(key, graph.add_node(face));
        }

        // Mates in first-seen edge order.
        let mut order: Vec<ShapeKey> = Vec::new();
        let mut mates: HashMap<ShapeKey, Mates<'k, K>> = HashMap::new();
        for node in graph.node_indices() {
            let face: &Face<'k, K> = &graph[node];
            for edge in face.edges()? {
                match mates.entry(edge.key()) {
                    Entry::Occupied(mut entry) => entry.get_mut().faces.push(node),
                    Entry::Vacant(entry) => {
                        order.push(*entry.key());
                        entry.insert(Mates {
                            edge,
                            faces: vec![node],
                        });
                    }
                }
            }
        }

        for key in order {
            let Some(Mates { edge, faces }) = mates.remove(&key) else {
                continue;
            };
            let (a, b) = match faces.as_slice() {
                [a, b] => (*a, *b),
                [_] => {
                    debug!(edge = %key, "skipping edge with a single face use");
                    continue;
                }
                _ => {
                    warn!(edge = %key, mates = faces.len(), "rejecting non-manifold edge");
                    return Err(TopologyError::NonManifoldEdge {
                        edge: key,
                        mates: faces.len(),
                    }
                    .into());
                }
            };
            if a == b && !self.options.self_loops {
                trace!(edge = %key, face = a.index(), "dropping seam self-loop");
                continue;
            }
            let attributes = edge_attributes(&edge, &graph[a], &graph[b])?;
            graph.add_edge(a, b, AdjacencyEdge { edge, attributes });
        }

        let built = FaceAdjacencyGraph::new(solid.kernel(), graph, index, self.options);
        info!(
            nodes = built.node_count(),
            edges = built.edge_count(),
            self_loops = built.self_loop_count(),
            "built face adjacency graph"
        );
        Ok(built)
    }
}

fn edge_attributes<K: GeometryKernel>(
    edge: &Edge<'_, K>,
    f1: &Face<'_, K>,
    f2: &Face<'_, K>,
) -> Result<EdgeAttributes> {
    Ok(EdgeAttributes {
        convex: edge.convex()?,
        continuity: edge.continuity(f1, f2)?,
        curve_type: edge.curve_type()?,
        seam: edge.seam(f1)?,
        closed: edge.closed()?,
        periodic: edge.periodic()?,
        rational: edge.rational()?,
    })
}

/// Builds the face adjacency graph of `solid`.
///
/// Shorthand for [`FaceAdjacency::execute`] with only the self-loop setting.
///
/// # Errors
///
/// See [`FaceAdjacency::execute`].
pub fn face_adjacency<'k, K: GeometryKernel>(
    solid: &Solid<'k, K>,
    self_loops: bool,
) -> Result<FaceAdjacencyGraph<'k, K>> {
    FaceAdjacency::new(AdjacencyOptions::default().with_self_loops(self_loops)).execute(solid)
}
