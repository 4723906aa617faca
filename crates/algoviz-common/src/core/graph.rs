// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Graph data model shared between the engine and the transport layer.
//!
//! Ids are opaque strings supplied by the client; the engine maps them to
//! dense slots internally and maps back for output. Weights are `i64` with
//! two sentinels: `MAX_WEIGHT` marks "no edge" in dense-matrix contexts, and
//! weight `0` is also treated as "no edge" by the matrix-scanning algorithms
//! (a zero-cost edge is not representable).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel weight representing "no edge" in dense matrix contexts.
pub const MAX_WEIGHT: i64 = i64::MAX;

/// Unreachable sentinel for subset DP. Half of `MAX_WEIGHT` so that two
/// sentinels can be added without overflow.
pub const UNREACHABLE: i64 = i64::MAX / 2;

/// Opaque node identifier.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Opaque edge identifier.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub String);

impl EdgeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EdgeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EdgeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A node in the drawn graph.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(default)]
    pub label: String,
    /// Opaque layout payload. Carried through untouched, ignored by
    /// algorithms.
    #[serde(default)]
    pub position: serde_json::Value,
}

impl Node {
    pub fn new(id: impl Into<NodeId>) -> Self {
        let id = id.into();
        Self {
            label: id.0.clone(),
            id,
            position: serde_json::Value::Null,
        }
    }
}

/// An edge between two nodes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    #[serde(default = "default_weight")]
    pub weight: i64,
}

fn default_weight() -> i64 {
    1
}

/// A drawn graph: node set, edge set, and the two orientation flags.
///
/// Invariant: every edge's endpoints reference existing node ids. This is
/// validated when the engine builds its index, not at construction.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    #[serde(default)]
    pub is_directed: bool,
    #[serde(default)]
    pub is_weighted: bool,
}

impl Graph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
