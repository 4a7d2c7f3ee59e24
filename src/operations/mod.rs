//! Modeling operations on a [`TopologyStore`](crate::topology::TopologyStore).

pub mod creation;
