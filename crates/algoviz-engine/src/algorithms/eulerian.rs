// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Eulerian trail (Fleury).
//!
//! The caller supplies the start node; whether the graph admits a circuit or
//! an open trail (and which node to start from) is classified before
//! invocation. The engine itself only checks connectivity.
//!
//! The recursion operates on a working copy of the adjacency matrix whose
//! entries act as remaining edge multiplicities. A candidate edge is taken
//! only if it is the current node's last edge, or if tentatively removing it
//! does not shrink the set of nodes reachable from the current node - i.e.
//! it is not a bridge that would strand untraversed edges.

use crate::algorithms::Algorithm;
use crate::index::GraphIndex;
use crate::recorder::{StepColor, TraceRecorder};
use crate::result::{AlgoResult, AlgorithmKind};
use algoviz_common::{EngineError, NodeId, Result};

pub struct EulerianTrail;

#[derive(Debug, Clone)]
pub struct EulerianTrailConfig {
    pub start: NodeId,
}

impl Algorithm for EulerianTrail {
    type Config = EulerianTrailConfig;

    fn name() -> &'static str {
        "eulerian-trail"
    }

    fn run(
        index: &GraphIndex,
        trace: &mut TraceRecorder,
        config: Self::Config,
    ) -> Result<AlgoResult> {
        let start = index.require_slot(&config.start)? as usize;
        let n = index.node_count();
        let directed = index.is_directed();

        // Connectivity scan over an undirected view: every node that still
        // has edges must be reachable from the start
        let matrix = index.matrix();
        let mut visited = vec![false; n];
        reach_visit(start, matrix, &mut visited, directed);
        for i in 0..n {
            let mut degree = 0;
            for j in 0..n {
                if matrix[i][j] != 0 {
                    degree += 1;
                }
                if directed && matrix[j][i] != 0 {
                    degree += 1;
                }
            }
            if degree > 0 && !visited[i] {
                return Err(EngineError::DisconnectedGraph {
                    message: format!(
                        "node '{}' has edges but is unreachable from '{}'",
                        index.node_id(i as u32),
                        config.start
                    ),
                });
            }
        }

        let mut work = index.matrix_copy();
        let mut order = Vec::new();
        trail_visit(start, &mut work, &mut order, trace, directed, n);

        // The recursion appends nodes on the way back out
        order.reverse();

        let mut result = AlgoResult::new(AlgorithmKind::EulerianTrail);
        for pair in order.windows(2) {
            trace.color_edge(pair[0] as u32, pair[1] as u32, StepColor::Result);
            if let Some(eid) = index.edge_id_between(pair[0] as u32, pair[1] as u32) {
                result.edges.push(eid.clone());
            }
        }
        for &u in &order {
            trace.color_node(u as u32, StepColor::Result);
        }
        result.nodes = order.iter().map(|&s| index.node_id(s as u32).clone()).collect();

        Ok(result)
    }
}

/// Fleury recursion: take each safe edge, decrement it, recurse, and append
/// the current node post-order.
fn trail_visit(
    u: usize,
    work: &mut Vec<Vec<i64>>,
    order: &mut Vec<usize>,
    trace: &mut TraceRecorder,
    directed: bool,
    n: usize,
) {
    for v in 0..n {
        if work[u][v] > 0 && is_safe_edge(u, v, work, directed, n) {
            trace.color_edge(u as u32, v as u32, StepColor::Processing);
            remove_edge(u, v, work, directed);
            trace.color_edge(u as u32, v as u32, StepColor::Processed);
            trail_visit(v, work, order, trace, directed, n);
        }
    }
    order.push(u);
}

/// An edge is safe if it is `u`'s only remaining edge, or if removing it
/// does not reduce how many nodes `u` can reach.
fn is_safe_edge(u: usize, v: usize, work: &mut Vec<Vec<i64>>, directed: bool, n: usize) -> bool {
    let remaining = (0..n).filter(|&i| work[u][i] > 0).count();
    if remaining == 1 {
        return true;
    }

    let mut visited = vec![false; n];
    let before = reach_count(u, work, &mut visited, directed);

    remove_edge(u, v, work, directed);
    visited.fill(false);
    let after = reach_count(u, work, &mut visited, directed);
    add_edge(u, v, work, directed);

    before <= after
}

/// Count nodes reachable from `v` over remaining edges.
fn reach_count(v: usize, work: &[Vec<i64>], visited: &mut [bool], directed: bool) -> usize {
    visited[v] = true;
    let mut count = 1;
    for i in 0..work.len() {
        let connected = if directed {
            work[v][i] > 0 || work[i][v] > 0
        } else {
            work[v][i] > 0
        };
        if connected && !visited[i] {
            count += reach_count(i, work, visited, directed);
        }
    }
    count
}

fn reach_visit(v: usize, matrix: &[Vec<i64>], visited: &mut [bool], directed: bool) {
    visited[v] = true;
    for i in 0..matrix.len() {
        let connected = if directed {
            matrix[v][i] != 0 || matrix[i][v] != 0
        } else {
            matrix[v][i] != 0
        };
        if connected && !visited[i] {
            reach_visit(i, matrix, visited, directed);
        }
    }
}

fn remove_edge(u: usize, v: usize, work: &mut [Vec<i64>], directed: bool) {
    work[u][v] -= 1;
    if !directed {
        work[v][u] -= 1;
    }
}

fn add_edge(u: usize, v: usize, work: &mut [Vec<i64>], directed: bool) {
    work[u][v] += 1;
    if !directed {
        work[v][u] += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{build_graph, run_recorded};
    use std::collections::HashSet;

    fn assert_uses_every_edge_once(graph: &algoviz_common::Graph, nodes: &[NodeId]) {
        let index = crate::index::GraphIndex::build(graph).unwrap();
        let mut used: Vec<(u32, u32)> = Vec::new();
        for pair in nodes.windows(2) {
            let u = index.slot(&pair[0]).unwrap();
            let v = index.slot(&pair[1]).unwrap();
            used.push(if u < v { (u, v) } else { (v, u) });
        }
        assert_eq!(used.len(), graph.edges.len());
        let distinct: HashSet<_> = used.iter().collect();
        assert_eq!(distinct.len(), used.len(), "an edge was traversed twice");
    }

    #[test]
    fn test_circuit_on_triangle() {
        let graph = build_graph(
            &["A", "B", "C"],
            &[("A", "B", 1), ("B", "C", 1), ("C", "A", 1)],
            false,
        );
        let config = EulerianTrailConfig {
            start: NodeId::from("A"),
        };

        let (result, _) = run_recorded::<EulerianTrail>(&graph, config).unwrap();

        assert_eq!(result.nodes.len(), 4);
        assert_eq!(result.nodes.first(), result.nodes.last());
        assert_uses_every_edge_once(&graph, &result.nodes);
        assert_eq!(result.edges.len(), 3);
        assert_eq!(result.total, None);
    }

    #[test]
    fn test_open_trail_avoids_early_bridge() {
        // Two triangles joined at C by a bridge-free cut vertex:
        // A-B, B-C, C-A and C-D, D-E, E-C. Circuit exists from any node.
        let graph = build_graph(
            &["A", "B", "C", "D", "E"],
            &[
                ("A", "B", 1),
                ("B", "C", 1),
                ("C", "A", 1),
                ("C", "D", 1),
                ("D", "E", 1),
                ("E", "C", 1),
            ],
            false,
        );
        let config = EulerianTrailConfig {
            start: NodeId::from("C"),
        };

        let (result, _) = run_recorded::<EulerianTrail>(&graph, config).unwrap();

        assert_eq!(result.nodes.len(), 7);
        assert_uses_every_edge_once(&graph, &result.nodes);
    }

    #[test]
    fn test_path_graph_walks_end_to_end() {
        // A-B-C: open trail starting at an odd-degree node
        let graph = build_graph(&["A", "B", "C"], &[("A", "B", 1), ("B", "C", 1)], false);
        let config = EulerianTrailConfig {
            start: NodeId::from("A"),
        };

        let (result, _) = run_recorded::<EulerianTrail>(&graph, config).unwrap();

        let names: Vec<_> = result.nodes.iter().map(|n| n.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert_eq!(result.edges.len(), 2);
    }

    #[test]
    fn test_unreachable_edges_rejected() {
        // C-D component is unreachable from A
        let graph = build_graph(
            &["A", "B", "C", "D"],
            &[("A", "B", 1), ("C", "D", 1)],
            false,
        );
        let config = EulerianTrailConfig {
            start: NodeId::from("A"),
        };

        let err = run_recorded::<EulerianTrail>(&graph, config).unwrap_err();
        assert!(matches!(err, EngineError::DisconnectedGraph { .. }));
    }

    #[test]
    fn test_isolated_nodes_are_tolerated() {
        // Z has no edges; connectivity only constrains nodes with degree > 0
        let graph = build_graph(&["A", "B", "Z"], &[("A", "B", 1)], false);
        let config = EulerianTrailConfig {
            start: NodeId::from("A"),
        };

        let (result, _) = run_recorded::<EulerianTrail>(&graph, config).unwrap();
        assert_eq!(result.nodes.len(), 2);
    }

    #[test]
    fn test_consecutive_nodes_share_an_edge() {
        let graph = build_graph(
            &["A", "B", "C", "D"],
            &[
                ("A", "B", 1),
                ("B", "C", 1),
                ("C", "D", 1),
                ("D", "A", 1),
            ],
            false,
        );
        let config = EulerianTrailConfig {
            start: NodeId::from("B"),
        };

        let (result, _) = run_recorded::<EulerianTrail>(&graph, config).unwrap();

        let index = crate::index::GraphIndex::build(&graph).unwrap();
        for pair in result.nodes.windows(2) {
            let u = index.slot(&pair[0]).unwrap();
            let v = index.slot(&pair[1]).unwrap();
            assert_ne!(index.weight(u, v), 0);
        }
    }
}
