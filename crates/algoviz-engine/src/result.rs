// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Uniform result vocabulary shared by all algorithms.

use algoviz_common::{EdgeId, NodeId};
use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tagged dispatch over the algorithm suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmKind {
    ShortestPath,
    SpanningForest,
    MaxFlow,
    HamiltonianTour,
    EulerianTrail,
    Matching,
    EdgeColoring,
    VertexColoring,
}

impl AlgorithmKind {
    /// Stable wire name, used as the per-algorithm endpoint segment.
    pub fn name(self) -> &'static str {
        match self {
            Self::ShortestPath => "shortest-path",
            Self::SpanningForest => "spanning-forest",
            Self::MaxFlow => "max-flow",
            Self::HamiltonianTour => "hamiltonian-tour",
            Self::EulerianTrail => "eulerian-trail",
            Self::Matching => "matching",
            Self::EdgeColoring => "edge-coloring",
            Self::VertexColoring => "vertex-coloring",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.name() == name)
    }

    pub const ALL: [AlgorithmKind; 8] = [
        Self::ShortestPath,
        Self::SpanningForest,
        Self::MaxFlow,
        Self::HamiltonianTour,
        Self::EulerianTrail,
        Self::Matching,
        Self::EdgeColoring,
        Self::VertexColoring,
    ];
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Final answer of an algorithm run.
///
/// Node/edge order is significant for path/tour/trail outputs and
/// insignificant for matching/coloring/forest outputs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AlgoResult {
    pub kind: AlgorithmKind,
    pub nodes: Vec<NodeId>,
    pub edges: Vec<EdgeId>,
    /// Aggregate metric: path/forest weight, total flow, color count,
    /// pair count. Absent for the Eulerian trail.
    pub total: Option<i64>,
    /// Per-edge result annotation (resulting flow, palette index).
    #[serde(default, skip_serializing_if = "FxHashMap::is_empty")]
    pub edge_values: FxHashMap<EdgeId, i64>,
    /// Per-node result annotation (vertex palette index).
    #[serde(default, skip_serializing_if = "FxHashMap::is_empty")]
    pub node_values: FxHashMap<NodeId, i64>,
}

impl AlgoResult {
    pub fn new(kind: AlgorithmKind) -> Self {
        Self {
            kind,
            nodes: Vec::new(),
            edges: Vec::new(),
            total: None,
            edge_values: FxHashMap::default(),
            node_values: FxHashMap::default(),
        }
    }
}
