// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use crate::algorithms::Algorithm;
use crate::index::GraphIndex;
use crate::recorder::{Step, TraceRecorder};
use crate::result::AlgoResult;
use algoviz_common::{Edge, EdgeId, Graph, Node, NodeId, Result};

/// Build a weighted graph from node names and `(from, to, weight)` triples.
/// Edge ids are assigned in order: `e0`, `e1`, ...
pub fn build_graph(nodes: &[&str], edges: &[(&str, &str, i64)], directed: bool) -> Graph {
    Graph {
        nodes: nodes.iter().map(|&n| Node::new(n)).collect(),
        edges: edges
            .iter()
            .enumerate()
            .map(|(i, &(from, to, weight))| Edge {
                id: EdgeId::from(format!("e{i}").as_str()),
                source: NodeId::from(from),
                target: NodeId::from(to),
                weight,
            })
            .collect(),
        is_directed: directed,
        is_weighted: true,
    }
}

/// Run an algorithm with recording enabled and return result plus steps.
pub fn run_recorded<A: Algorithm>(
    graph: &Graph,
    config: A::Config,
) -> Result<(AlgoResult, Vec<Step>)> {
    let index = GraphIndex::build(graph)?;
    let mut trace = TraceRecorder::new(&index, true);
    let result = A::run(&index, &mut trace, config)?;
    Ok((result, trace.into_steps()))
}
