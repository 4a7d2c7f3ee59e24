//! Integration tests for face adjacency graphs.

#![allow(clippy::unwrap_used)]

use brepgraph::entity::{Edge, Solid};
use brepgraph::error::{GeometryError, TopologyError};
use brepgraph::geometry::{Continuity, CurveType, SpecificCurve};
use brepgraph::graph::{AdjacencyOptions, EdgeAttribute, FaceAdjacency, NodeAttribute};
use brepgraph::kernel::{GeometryKernel, Orientation, ShapeKey, ShapeKind};
use brepgraph::math::{Interval, Point3, UvBounds, Vector3};
use brepgraph::operations::creation::{MakeBox, MakeCylinder, MakeSphere};
use brepgraph::topology::{Shape, SolidId, TopologyStore};
use brepgraph::{face_adjacency, BrepGraphError, Result};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Kernel with its own handle type, forwarding to a [`TopologyStore`].
///
/// Optionally reports a fixed curve classification code for every edge.
struct ForeignKernel {
    store: TopologyStore,
    curve_code: Option<u32>,
}

#[derive(Debug, Clone)]
struct Handle(Shape);

impl GeometryKernel for ForeignKernel {
    type Handle = Handle;

    fn shape_kind(&self, shape: &Handle) -> ShapeKind {
        self.store.shape_kind(&shape.0)
    }

    fn shape_key(&self, shape: &Handle) -> ShapeKey {
        self.store.shape_key(&shape.0)
    }

    fn orientation(&self, shape: &Handle) -> Orientation {
        self.store.orientation(&shape.0)
    }

    fn explore(&self, shape: &Handle, kind: ShapeKind) -> Result<Vec<Handle>> {
        Ok(self
            .store
            .explore(&shape.0, kind)?
            .into_iter()
            .map(Handle)
            .collect())
    }

    fn vertex_point(&self, vertex: &Handle) -> Result<Point3> {
        self.store.vertex_point(&vertex.0)
    }

    fn edge_has_curve(&self, edge: &Handle) -> Result<bool> {
        self.store.edge_has_curve(&edge.0)
    }

    fn edge_range(&self, edge: &Handle) -> Result<Interval> {
        self.store.edge_range(&edge.0)
    }

    fn edge_d1(&self, edge: &Handle, u: f64) -> Result<(Point3, Vector3)> {
        self.store.edge_d1(&edge.0, u)
    }

    fn edge_length(&self, edge: &Handle, range: Interval, tolerance: f64) -> Result<f64> {
        self.store.edge_length(&edge.0, range, tolerance)
    }

    fn edge_curve_code(&self, edge: &Handle) -> Result<u32> {
        match self.curve_code {
            Some(code) => Ok(code),
            None => self.store.edge_curve_code(&edge.0),
        }
    }

    fn edge_specific_curve(&self, edge: &Handle) -> Result<SpecificCurve> {
        self.store.edge_specific_curve(&edge.0)
    }

    fn edge_is_periodic(&self, edge: &Handle) -> Result<bool> {
        self.store.edge_is_periodic(&edge.0)
    }

    fn edge_is_rational(&self, edge: &Handle) -> Result<bool> {
        self.store.edge_is_rational(&edge.0)
    }

    fn edge_is_closed(&self, edge: &Handle) -> Result<bool> {
        self.store.edge_is_closed(&edge.0)
    }

    fn edge_is_convex(&self, edge: &Handle) -> Result<bool> {
        self.store.edge_is_convex(&edge.0)
    }

    fn edge_is_seam(&self, edge: &Handle, face: &Handle) -> Result<bool> {
        self.store.edge_is_seam(&edge.0, &face.0)
    }

    fn edge_continuity(&self, edge: &Handle, face1: &Handle, face2: &Handle) -> Result<Continuity> {
        self.store.edge_continuity(&edge.0, &face1.0, &face2.0)
    }

    fn face_uv_bounds(&self, face: &Handle) -> Result<UvBounds> {
        self.store.face_uv_bounds(&face.0)
    }

    fn face_point(&self, face: &Handle, u: f64, v: f64) -> Result<Point3> {
        self.store.face_point(&face.0, u, v)
    }
}

fn make_box(store: &mut TopologyStore, size: Vector3) -> SolidId {
    MakeBox::new(Point3::origin(), Point3::from(size))
        .execute(store)
        .unwrap()
}

fn make_cylinder(store: &mut TopologyStore, radius: f64, height: f64) -> SolidId {
    MakeCylinder::new(Point3::origin(), radius, Vector3::z(), height)
        .execute(store)
        .unwrap()
}

fn make_sphere(store: &mut TopologyStore, radius: f64) -> SolidId {
    MakeSphere::new(Point3::origin(), radius)
        .execute(store)
        .unwrap()
}

/// Faces using each distinct edge, one entry per use.
fn mates(solid: &Solid<'_, TopologyStore>) -> HashMap<ShapeKey, Vec<usize>> {
    let mut out: HashMap<ShapeKey, Vec<usize>> = HashMap::new();
    for (i, face) in solid.faces().unwrap().iter().enumerate() {
        for edge in face.edges().unwrap() {
            out.entry(edge.key()).or_default().push(i);
        }
    }
    out
}

#[test]
fn box_is_identical_under_both_settings() {
    init_tracing();
    let mut store = TopologyStore::new();
    let id = make_box(&mut store, Vector3::new(2.0, 1.0, 0.5));
    let solid = Solid::new(&store, id.into()).unwrap();

    let plain = face_adjacency(&solid, false).unwrap();
    let looped = face_adjacency(&solid, true).unwrap();
    assert_eq!(plain.node_count(), 6);
    assert_eq!(plain.edge_count(), 12);
    assert_eq!(
        plain.edges().collect::<Vec<_>>(),
        looped.edges().collect::<Vec<_>>()
    );
}

#[test]
fn every_shared_edge_is_a_graph_edge() {
    init_tracing();
    let mut store = TopologyStore::new();
    let ids = [
        make_box(&mut store, Vector3::new(1.0, 1.0, 1.0)),
        make_cylinder(&mut store, 1.0, 3.0),
        make_sphere(&mut store, 2.0),
    ];
    for id in ids {
        let solid = Solid::new(&store, id.into()).unwrap();
        let graph = face_adjacency(&solid, true).unwrap();
        let edges: HashSet<(usize, usize)> = graph
            .edges()
            .map(|(a, b)| (a.min(b), a.max(b)))
            .collect();
        for faces in mates(&solid).values() {
            if let [a, b] = faces.as_slice() {
                assert!(edges.contains(&(*a.min(b), *a.max(b))));
            }
        }
    }
}

#[test]
fn seams_become_self_loops_only_on_request() {
    init_tracing();
    let mut store = TopologyStore::new();
    let id = make_sphere(&mut store, 1.0);
    let solid = Solid::new(&store, id.into()).unwrap();

    let options = AdjacencyOptions::default();
    let plain = FaceAdjacency::new(options).execute(&solid).unwrap();
    let looped = FaceAdjacency::new(options.with_self_loops(true))
        .execute(&solid)
        .unwrap();

    assert_eq!(plain.self_loop_count(), 0);
    assert!(looped.self_loop_count() >= 1);
    assert!(plain.edge_count() < looped.edge_count());
    assert_eq!(looped.neighbors(0), vec![0]);
    assert_eq!(
        looped.edge_attribute(0, EdgeAttribute::Seam),
        Some(brepgraph::graph::AttributeValue::Bool(true))
    );
}

#[test]
fn foreign_kernel_builds_the_same_graph() {
    init_tracing();
    let mut store = TopologyStore::new();
    let id = make_cylinder(&mut store, 0.5, 2.0);
    let native_edges = {
        let solid = Solid::new(&store, id.into()).unwrap();
        let graph = face_adjacency(&solid, true).unwrap();
        graph.edges().collect::<Vec<_>>()
    };

    let kernel = ForeignKernel {
        store,
        curve_code: None,
    };
    let solid = Solid::new(&kernel, Handle(id.into())).unwrap();
    let graph = face_adjacency(&solid, true).unwrap();
    assert_eq!(graph.edges().collect::<Vec<_>>(), native_edges);
    for face in graph.nodes() {
        let index = graph.node_attribute(face, NodeAttribute::Index).unwrap();
        assert_eq!(index.as_index(), graph.node_index(face));
    }
}

#[test]
fn unknown_curve_code_is_reported() {
    init_tracing();
    let mut store = TopologyStore::new();
    let id = make_box(&mut store, Vector3::new(1.0, 1.0, 1.0));
    let kernel = ForeignKernel {
        store,
        curve_code: Some(42),
    };
    let solid = Solid::new(&kernel, Handle(id.into())).unwrap();

    let err = face_adjacency(&solid, false).unwrap_err();
    assert!(matches!(
        err,
        BrepGraphError::Geometry(GeometryError::UnsupportedCurveType { code: 42 })
    ));
    assert_eq!(err.to_string(), "unknown curve type code 42");

    let edge = solid.edges().unwrap().remove(0);
    assert!(edge.curve_type().is_err());
    assert!(edge.specific_curve().is_err());
}

#[test]
fn known_codes_map_to_curve_types() {
    let mut store = TopologyStore::new();
    let id = make_box(&mut store, Vector3::new(1.0, 1.0, 1.0));
    let mut kernel = ForeignKernel {
        store,
        curve_code: None,
    };
    for kind in CurveType::ALL {
        kernel.curve_code = Some(kind.code());
        let solid = Solid::new(&kernel, Handle(id.into())).unwrap();
        let edge = solid.edges().unwrap().remove(0);
        assert_eq!(edge.curve_type().unwrap(), kind);
    }
}

#[test]
fn wrong_handle_kinds_fail_at_construction() {
    let mut store = TopologyStore::new();
    let id = make_box(&mut store, Vector3::new(1.0, 1.0, 1.0));
    let face = store.explore(&id.into(), ShapeKind::Face).unwrap()[0];

    assert!(matches!(
        Edge::new(&store, face),
        Err(BrepGraphError::Topology(TopologyError::TypeMismatch {
            expected: ShapeKind::Edge,
            found: ShapeKind::Face,
        }))
    ));
    assert!(Solid::new(&store, face).is_err());
}

#[test]
fn options_round_trip_through_json() {
    let options: AdjacencyOptions = serde_json::from_str(r#"{"self_loops": true}"#).unwrap();
    assert!(options.self_loops);
    let json = serde_json::to_string(&options).unwrap();
    assert_eq!(serde_json::from_str::<AdjacencyOptions>(&json).unwrap(), options);
}

proptest! {
    #[test]
    fn node_count_equals_face_count(
        x in 0.1_f64..10.0,
        y in 0.1_f64..10.0,
        z in 0.1_f64..10.0,
        radius in 0.1_f64..5.0,
        self_loops in any::<bool>(),
    ) {
        let mut store = TopologyStore::new();
        let ids = [
            make_box(&mut store, Vector3::new(x, y, z)),
            make_cylinder(&mut store, radius, z),
            make_sphere(&mut store, radius),
        ];
        for id in ids {
            let solid = Solid::new(&store, id.into()).unwrap();
            let graph = face_adjacency(&solid, self_loops).unwrap();
            prop_assert_eq!(graph.node_count(), solid.faces().unwrap().len());
            if !self_loops {
                prop_assert_eq!(graph.self_loop_count(), 0);
            }
        }
    }

    #[test]
    fn rebuilds_assign_the_same_indices(radius in 0.1_f64..5.0, height in 0.1_f64..5.0) {
        let mut store = TopologyStore::new();
        let id = make_cylinder(&mut store, radius, height);
        let solid = Solid::new(&store, id.into()).unwrap();

        let first = face_adjacency(&solid, true).unwrap();
        let second = face_adjacency(&solid, true).unwrap();
        for face in solid.faces().unwrap() {
            prop_assert_eq!(first.node_index(&face), second.node_index(&face));
        }
        prop_assert_eq!(first.edges().collect::<Vec<_>>(), second.edges().collect::<Vec<_>>());
    }
}
