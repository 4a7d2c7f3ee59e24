use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::OperationError;
use crate::geometry::{Continuity, CurveType};

/// Attributes of a graph edge, computed once from its topological edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EdgeAttributes {
    /// The convex flag stored on the edge.
    pub convex: bool,
    /// Continuity between the two mate faces, in mate order.
    pub continuity: Continuity,
    pub curve_type: CurveType,
    /// Whether the edge is a seam of its first mate face.
    pub seam: bool,
    pub closed: bool,
    pub periodic: bool,
    pub rational: bool,
}

impl EdgeAttributes {
    /// Looks up one attribute by key.
    #[must_use]
    pub fn get(&self, key: EdgeAttribute) -> AttributeValue {
        match key {
            EdgeAttribute::Convex => AttributeValue::Bool(self.convex),
            EdgeAttribute::Continuity => AttributeValue::Continuity(self.continuity),
            EdgeAttribute::CurveType => AttributeValue::CurveType(self.curve_type),
            EdgeAttribute::Seam => AttributeValue::Bool(self.seam),
            EdgeAttribute::Closed => AttributeValue::Bool(self.closed),
            EdgeAttribute::Periodic => AttributeValue::Bool(self.periodic),
            EdgeAttribute::Rational => AttributeValue::Bool(self.rational),
        }
    }
}

/// Value of a node or edge attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Index(usize),
    Bool(bool),
    Continuity(Continuity),
    CurveType(CurveType),
}

impl AttributeValue {
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            AttributeValue::Index(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Index(i) => write!(f, "{i}"),
            AttributeValue::Bool(b) => write!(f, "{b}"),
            AttributeValue::Continuity(c) => write!(f, "{c}"),
            AttributeValue::CurveType(t) => write!(f, "{t}"),
        }
    }
}

/// Key of a node attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeAttribute {
    /// Position of the face in traversal order.
    Index,
}

impl FromStr for NodeAttribute {
    type Err = OperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "index" => Ok(NodeAttribute::Index),
            other => Err(OperationError::InvalidInput(format!(
                "unknown node attribute \"{other}\""
            ))),
        }
    }
}

/// Key of an edge attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeAttribute {
    Convex,
    Continuity,
    CurveType,
    Seam,
    Closed,
    Periodic,
    Rational,
}

impl EdgeAttribute {
    pub const ALL: [EdgeAttribute; 7] = [
        EdgeAttribute::Convex,
        EdgeAttribute::Continuity,
        EdgeAttribute::CurveType,
        EdgeAttribute::Seam,
        EdgeAttribute::Closed,
        EdgeAttribute::Periodic,
        EdgeAttribute::Rational,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeAttribute::Convex => "convex",
            EdgeAttribute::Continuity => "continuity",
            EdgeAttribute::CurveType => "curve_type",
            EdgeAttribute::Seam => "seam",
            EdgeAttribute::Closed => "closed",
            EdgeAttribute::Periodic => "periodic",
            EdgeAttribute::Rational => "rational",
        }
    }
}

impl FromStr for EdgeAttribute {
    type Err = OperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| OperationError::InvalidInput(format!("unknown edge attribute \"{s}\"")))
    }
}
