// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Single-source shortest path (Dijkstra).
//!
//! With a target: reconstructs the one path and fails with `NoPath` if the
//! target is unreachable. Without a target: emits the full shortest-path
//! tree rooted at the source.

use crate::algorithms::Algorithm;
use crate::index::GraphIndex;
use crate::recorder::{StepColor, TraceRecorder};
use crate::result::{AlgoResult, AlgorithmKind};
use algoviz_common::{EngineError, NodeId, Result, MAX_WEIGHT};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

pub struct ShortestPath;

#[derive(Debug, Clone)]
pub struct ShortestPathConfig {
    pub source: NodeId,
    pub target: Option<NodeId>,
}

impl Algorithm for ShortestPath {
    type Config = ShortestPathConfig;

    fn name() -> &'static str {
        "shortest-path"
    }

    fn run(
        index: &GraphIndex,
        trace: &mut TraceRecorder,
        config: Self::Config,
    ) -> Result<AlgoResult> {
        let source = index.require_slot(&config.source)?;
        let target = config
            .target
            .as_ref()
            .map(|t| index.require_slot(t))
            .transpose()?;

        let n = index.node_count();
        let mut dist = vec![MAX_WEIGHT; n];
        let mut prev: Vec<Option<u32>> = vec![None; n];
        let mut done = vec![false; n];
        let mut heap = BinaryHeap::new();

        dist[source as usize] = 0;
        heap.push(Reverse((0i64, source)));

        while let Some(Reverse((d, u))) = heap.pop() {
            if done[u as usize] {
                continue;
            }
            done[u as usize] = true;

            trace.color_node(u, StepColor::Processing);

            for &(v, w) in index.neighbors(u) {
                // Zero and sentinel weights mean "no edge" here
                if w == 0 || w == MAX_WEIGHT || done[v as usize] {
                    continue;
                }
                let new_dist = d + w;
                if new_dist < dist[v as usize] {
                    trace.color_edge(u, v, StepColor::Processing);
                    dist[v as usize] = new_dist;
                    prev[v as usize] = Some(u);
                    heap.push(Reverse((new_dist, v)));
                    trace.color_edge(u, v, StepColor::Processed);
                }
            }

            trace.color_node(u, StepColor::Processed);
        }

        let mut result = AlgoResult::new(AlgorithmKind::ShortestPath);

        match target {
            Some(t) => {
                // Walk the predecessor chain backward from the target
                let mut path = Vec::new();
                let mut cur = Some(t);
                while let Some(slot) = cur {
                    path.push(slot);
                    cur = prev[slot as usize];
                }
                path.reverse();

                if path.first() != Some(&source) {
                    return Err(EngineError::NoPath {
                        from: config.source.to_string(),
                        target: config.target.map(|t| t.to_string()).unwrap_or_default(),
                    });
                }

                let total = dist[t as usize];
                trace.set_total(total);

                for pair in path.windows(2) {
                    trace.color_node(pair[0], StepColor::Result);
                    trace.color_edge(pair[0], pair[1], StepColor::Result);
                    if let Some(eid) = index.edge_id_between(pair[0], pair[1]) {
                        result.edges.push(eid.clone());
                    }
                }
                trace.color_node(t, StepColor::Result);

                result.nodes = path.iter().map(|&s| index.node_id(s).clone()).collect();
                result.total = Some(total);
            }
            None => {
                // Shortest-path tree: every reachable node plus the edge
                // from its predecessor
                let mut total = 0i64;
                for v in 0..n as u32 {
                    if dist[v as usize] == MAX_WEIGHT {
                        continue;
                    }
                    result.nodes.push(index.node_id(v).clone());
                    if let Some(u) = prev[v as usize] {
                        total += index.weight(u, v);
                        if let Some(eid) = index.edge_id_between(u, v) {
                            result.edges.push(eid.clone());
                        }
                    }
                }

                trace.set_total(total);
                for v in 0..n as u32 {
                    if dist[v as usize] == MAX_WEIGHT {
                        continue;
                    }
                    trace.color_node(v, StepColor::Result);
                    if let Some(u) = prev[v as usize] {
                        trace.color_edge(u, v, StepColor::Result);
                    }
                }

                result.total = Some(total);
            }
        }

        Ok(result)
    }
}
