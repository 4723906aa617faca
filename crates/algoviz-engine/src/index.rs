// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Graph index - dense, algorithm-optimized view of a drawn graph.
//!
//! Graph algorithms require dense integer indices (0..V) for efficient
//! array-based state. Clients supply opaque string ids. The index provides
//! bidirectional mapping between the two, plus every representation the
//! algorithms consume:
//! - dense adjacency matrix (`0` = no edge)
//! - adjacency list for sparse iteration
//! - weight-sorted edge list
//! - `(slot, slot)` -> edge id lookup for translating work back to stable ids
//!
//! Built once per algorithm invocation; never mutated afterwards. Algorithms
//! that need a mutable matrix (maximum flow, Eulerian trail) work on a copy.

use algoviz_common::{EdgeId, EngineError, Graph, NodeId, Result, MAX_WEIGHT};
use fxhash::FxHashMap;

/// An edge resolved to dense slots.
#[derive(Clone, Debug)]
pub struct IndexedEdge {
    pub id: EdgeId,
    pub from: u32,
    pub to: u32,
    pub weight: i64,
}

/// Dense representation of a graph for algorithm execution.
#[derive(Debug)]
pub struct GraphIndex {
    /// Dense slot -> id
    node_ids: Vec<NodeId>,
    /// Id -> dense slot
    slots: FxHashMap<NodeId, u32>,
    /// Adjacency matrix; symmetric when the graph is undirected
    matrix: Vec<Vec<i64>>,
    /// Adjacency list: slot -> [(neighbor slot, weight)]
    adjacency: Vec<Vec<(u32, i64)>>,
    /// Edges in input order
    edges: Vec<IndexedEdge>,
    /// (from, to) -> edge id; both orientations for undirected graphs.
    /// First edge between a pair wins.
    edge_lookup: FxHashMap<(u32, u32), EdgeId>,
    is_directed: bool,
}

impl GraphIndex {
    /// Build every representation from a drawn graph.
    ///
    /// # Errors
    ///
    /// `InvalidInput` on duplicate node ids or an edge referencing a node id
    /// that is not in the node set.
    pub fn build(graph: &Graph) -> Result<Self> {
        let mut slots = FxHashMap::default();
        let mut node_ids = Vec::with_capacity(graph.nodes.len());

        for node in &graph.nodes {
            if slots.insert(node.id.clone(), node_ids.len() as u32).is_some() {
                return Err(EngineError::InvalidInput {
                    message: format!("duplicate node id '{}'", node.id),
                });
            }
            node_ids.push(node.id.clone());
        }

        let n = node_ids.len();
        let mut matrix = vec![vec![0i64; n]; n];
        let mut adjacency: Vec<Vec<(u32, i64)>> = vec![Vec::new(); n];
        let mut edges = Vec::with_capacity(graph.edges.len());
        let mut edge_lookup = FxHashMap::default();

        for edge in &graph.edges {
            let from = *slots.get(&edge.source).ok_or_else(|| EngineError::InvalidInput {
                message: format!("edge '{}' references unknown node '{}'", edge.id, edge.source),
            })?;
            let to = *slots.get(&edge.target).ok_or_else(|| EngineError::InvalidInput {
                message: format!("edge '{}' references unknown node '{}'", edge.id, edge.target),
            })?;

            let weight = if graph.is_weighted { edge.weight } else { 1 };

            matrix[from as usize][to as usize] = weight;
            adjacency[from as usize].push((to, weight));
            edge_lookup.entry((from, to)).or_insert_with(|| edge.id.clone());

            if !graph.is_directed {
                matrix[to as usize][from as usize] = weight;
                adjacency[to as usize].push((from, weight));
                edge_lookup.entry((to, from)).or_insert_with(|| edge.id.clone());
            }

            edges.push(IndexedEdge {
                id: edge.id.clone(),
                from,
                to,
                weight,
            });
        }

        Ok(Self {
            node_ids,
            slots,
            matrix,
            adjacency,
            edges,
            edge_lookup,
            is_directed: graph.is_directed,
        })
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.node_ids.len()
    }

    /// Map slot back to id.
    #[inline]
    pub fn node_id(&self, slot: u32) -> &NodeId {
        &self.node_ids[slot as usize]
    }

    /// All node ids in slot order.
    pub fn node_ids(&self) -> &[NodeId] {
        &self.node_ids
    }

    /// Map id to slot.
    #[inline]
    pub fn slot(&self, id: &NodeId) -> Option<u32> {
        self.slots.get(id).copied()
    }

    /// Map id to slot, failing with `InvalidInput` if absent.
    pub fn require_slot(&self, id: &NodeId) -> Result<u32> {
        self.slot(id).ok_or_else(|| EngineError::InvalidInput {
            message: format!("node '{}' not found in the node list", id),
        })
    }

    /// The dense adjacency matrix.
    #[inline]
    pub fn matrix(&self) -> &[Vec<i64>] {
        &self.matrix
    }

    /// A mutable working copy of the adjacency matrix.
    pub fn matrix_copy(&self) -> Vec<Vec<i64>> {
        self.matrix.clone()
    }

    /// Weight of the (from, to) matrix entry; `0` means no edge.
    #[inline]
    pub fn weight(&self, from: u32, to: u32) -> i64 {
        self.matrix[from as usize][to as usize]
    }

    /// Outgoing neighbors of a slot as `(neighbor, weight)` pairs.
    #[inline]
    pub fn neighbors(&self, slot: u32) -> &[(u32, i64)] {
        &self.adjacency[slot as usize]
    }

    /// Edges in input order.
    pub fn edges(&self) -> &[IndexedEdge] {
        &self.edges
    }

    /// Edges sorted ascending by weight. The sort is stable: ties preserve
    /// input edge order.
    pub fn sorted_edges(&self) -> Vec<IndexedEdge> {
        let mut sorted = self.edges.clone();
        sorted.sort_by_key(|e| e.weight);
        sorted
    }

    /// Resolve a slot pair to the stable edge id, if an edge exists.
    #[inline]
    pub fn edge_id_between(&self, from: u32, to: u32) -> Option<&EdgeId> {
        self.edge_lookup.get(&(from, to))
    }

    /// The pair -> edge id lookup table.
    pub(crate) fn edge_lookup(&self) -> &FxHashMap<(u32, u32), EdgeId> {
        &self.edge_lookup
    }

    #[inline]
    pub fn is_directed(&self) -> bool {
        self.is_directed
    }

    /// Degree of a slot, counting distinct matrix neighbors (self-loops
    /// excluded). Sentinel-weight entries do not count.
    pub fn degree(&self, slot: u32) -> usize {
        let row = &self.matrix[slot as usize];
        row.iter()
            .enumerate()
            .filter(|&(j, &w)| j != slot as usize && w != 0 && w != MAX_WEIGHT)
            .count()
    }
}
