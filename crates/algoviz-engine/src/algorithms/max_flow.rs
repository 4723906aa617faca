// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Maximum flow (Edmonds-Karp).
//!
//! Repeated breadth-first search over the residual graph. BFS guarantees
//! fewest-hop augmenting paths, which bounds the number of augmentations
//! polynomially. The capacity matrix is never mutated; all bookkeeping goes
//! through a separate flow matrix.

use crate::algorithms::Algorithm;
use crate::index::GraphIndex;
use crate::recorder::{StepColor, TraceRecorder};
use crate::result::{AlgoResult, AlgorithmKind};
use algoviz_common::{EngineError, NodeId, Result};
use std::collections::VecDeque;

pub struct MaxFlow;

#[derive(Debug, Clone)]
pub struct MaxFlowConfig {
    pub source: NodeId,
    pub sink: NodeId,
}

impl Algorithm for MaxFlow {
    type Config = MaxFlowConfig;

    fn name() -> &'static str {
        "max-flow"
    }

    fn run(
        index: &GraphIndex,
        trace: &mut TraceRecorder,
        config: Self::Config,
    ) -> Result<AlgoResult> {
        let source = index.require_slot(&config.source)?;
        let sink = index.require_slot(&config.sink)?;
        if source == sink {
            return Err(EngineError::InvalidInput {
                message: "source and sink must be distinct".to_string(),
            });
        }

        let n = index.node_count();
        let capacity = index.matrix();
        let mut flow = vec![vec![0i64; n]; n];

        loop {
            // BFS for an augmenting path in the residual graph
            let mut parent: Vec<Option<u32>> = vec![None; n];
            let mut visited = vec![false; n];
            let mut explored: Vec<(u32, u32)> = Vec::new();
            let mut queue = VecDeque::new();

            visited[source as usize] = true;
            queue.push_back(source);
            trace.color_node(source, StepColor::Processing);

            let mut found_sink = false;
            'bfs: while let Some(u) = queue.pop_front() {
                for v in 0..n as u32 {
                    let residual = capacity[u as usize][v as usize] - flow[u as usize][v as usize];
                    if !visited[v as usize] && residual > 0 {
                        trace.color_edge(u, v, StepColor::Processing);
                        explored.push((u, v));
                        visited[v as usize] = true;
                        parent[v as usize] = Some(u);
                        queue.push_back(v);
                        if v == sink {
                            found_sink = true;
                            break 'bfs;
                        }
                    }
                }
            }

            if !found_sink {
                break;
            }

            // Reconstruct the path and its bottleneck
            let mut path = Vec::new();
            let mut v = sink;
            while v != source {
                let u = parent[v as usize].unwrap();
                path.push((u, v));
                v = u;
            }
            let bottleneck = path
                .iter()
                .map(|&(u, v)| capacity[u as usize][v as usize] - flow[u as usize][v as usize])
                .min()
                .unwrap();

            // Distinguish the accepted path from abandoned search branches
            for &(u, v) in &explored {
                if !path.contains(&(u, v)) {
                    trace.color_edge(u, v, StepColor::Discarded);
                }
            }

            // Augment, with reverse-edge bookkeeping
            for &(u, v) in path.iter().rev() {
                flow[u as usize][v as usize] += bottleneck;
                flow[v as usize][u as usize] -= bottleneck;

                let total: i64 = (0..n).map(|j| flow[source as usize][j]).sum();
                trace.set_total(total);
                trace.color_edge_with_value(u, v, StepColor::Result, flow[u as usize][v as usize]);
            }
        }

        let total: i64 = (0..n).map(|j| flow[source as usize][j]).sum();
        trace.set_total(total);

        let mut result = AlgoResult::new(AlgorithmKind::MaxFlow);
        for u in 0..n as u32 {
            for v in 0..n as u32 {
                if flow[u as usize][v as usize] > 0 {
                    trace.color_edge_with_value(
                        u,
                        v,
                        StepColor::Result,
                        flow[u as usize][v as usize],
                    );
                    if let Some(eid) = index.edge_id_between(u, v) {
                        result.edges.push(eid.clone());
                        result
                            .edge_values
                            .insert(eid.clone(), flow[u as usize][v as usize]);
                    }
                }
            }
        }
        for slot in 0..n as u32 {
            trace.color_node(slot, StepColor::Result);
            result.nodes.push(index.node_id(slot).clone());
        }
        result.total = Some(total);

        Ok(result)
    }
}
