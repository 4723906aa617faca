// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Hamiltonian tour (Held-Karp subset DP).
//!
//! The input graph need not be complete: for every ordered pair with no
//! direct edge, a substitute cost is synthesized by running the shortest-path
//! algorithm internally with recording disabled, so the DP always sees a
//! "complete" cost matrix. Pairs with no path at all keep the unreachable
//! sentinel and simply never win a DP transition.
//!
//! `O(2^n * n^2)` time, `O(2^n * n)` space. Callers cap `n` before invoking.

use crate::algorithms::{Algorithm, ShortestPath, ShortestPathConfig};
use crate::index::GraphIndex;
use crate::recorder::{StepColor, TraceRecorder};
use crate::result::{AlgoResult, AlgorithmKind};
use algoviz_common::{EngineError, NodeId, Result, MAX_WEIGHT, UNREACHABLE};

pub struct HamiltonianTour;

#[derive(Debug, Clone)]
pub struct HamiltonianTourConfig {
    pub start: NodeId,
}

impl Algorithm for HamiltonianTour {
    type Config = HamiltonianTourConfig;

    fn name() -> &'static str {
        "hamiltonian-tour"
    }

    fn run(
        index: &GraphIndex,
        trace: &mut TraceRecorder,
        config: Self::Config,
    ) -> Result<AlgoResult> {
        let start = index.require_slot(&config.start)? as usize;
        let n = index.node_count();

        let cost = synthesize_cost_matrix(index)?;

        let num_subsets = 1usize << n;
        let mut dp = vec![vec![UNREACHABLE; n]; num_subsets];
        let mut parent = vec![vec![usize::MAX; n]; num_subsets];
        dp[1 << start][start] = 0;

        for mask in 0..num_subsets {
            if mask & (1 << start) == 0 {
                continue;
            }
            for u in 0..n {
                if mask & (1 << u) == 0 || dp[mask][u] >= UNREACHABLE {
                    continue;
                }
                for v in 0..n {
                    if mask & (1 << v) != 0 {
                        continue;
                    }
                    let next = mask | (1 << v);
                    let new_cost = dp[mask][u].saturating_add(cost[u][v]);
                    if new_cost < dp[next][v] {
                        dp[next][v] = new_cost;
                        parent[next][v] = u;

                        // Narrate only improvements over real input edges;
                        // synthesized hops have nothing to point at
                        if is_real_edge(index, u, v) {
                            trace.color_node(u as u32, StepColor::Processing);
                            trace.color_node(v as u32, StepColor::Processing);
                            trace.color_edge(u as u32, v as u32, StepColor::Processing);
                            trace.set_total(new_cost);
                            trace.color_node(u as u32, StepColor::Processed);
                            trace.color_node(v as u32, StepColor::Processed);
                            trace.color_edge(u as u32, v as u32, StepColor::Processed);
                        }
                    }
                }
            }
        }

        // Close the tour back to the start
        let full = num_subsets - 1;
        let mut best_cost = UNREACHABLE;
        let mut best_end = None;
        for v in 0..n {
            if v == start {
                continue;
            }
            let closing = dp[full][v].saturating_add(cost[v][start]);
            if closing < best_cost {
                best_cost = closing;
                best_end = Some(v);
            }
        }
        let Some(best_end) = best_end else {
            return Err(EngineError::NoHamiltonianCycle);
        };
        if best_cost >= UNREACHABLE {
            return Err(EngineError::NoHamiltonianCycle);
        }

        // Walk the parent table backward, clearing visited bits
        let mut order = Vec::with_capacity(n + 1);
        let mut mask = full;
        let mut cur = best_end;
        while cur != start {
            order.push(cur);
            let prev = parent[mask][cur];
            mask &= !(1 << cur);
            cur = prev;
        }
        order.push(start);
        order.reverse();
        order.push(start);

        trace.set_total(best_cost);

        let mut result = AlgoResult::new(AlgorithmKind::HamiltonianTour);
        for pair in order.windows(2) {
            trace.color_node(pair[0] as u32, StepColor::Result);
            trace.color_edge(pair[0] as u32, pair[1] as u32, StepColor::Result);
            if let Some(eid) = index.edge_id_between(pair[0] as u32, pair[1] as u32) {
                result.edges.push(eid.clone());
            }
        }
        result.nodes = order.iter().map(|&s| index.node_id(s as u32).clone()).collect();
        result.total = Some(best_cost);

        Ok(result)
    }
}

fn is_real_edge(index: &GraphIndex, u: usize, v: usize) -> bool {
    let w = index.weight(u as u32, v as u32);
    w != 0 && w != MAX_WEIGHT
}

/// Copy of the adjacency matrix with every missing ordered pair replaced by
/// the true shortest-path distance between the endpoints (or the unreachable
/// sentinel when no path exists).
fn synthesize_cost_matrix(index: &GraphIndex) -> Result<Vec<Vec<i64>>> {
    let n = index.node_count();
    let mut cost = index.matrix_copy();

    for i in 0..n {
        for j in 0..n {
            if i == j || is_real_edge(index, i, j) {
                continue;
            }

            let mut muted = TraceRecorder::muted(index);
            let shortest = ShortestPath::run(
                index,
                &mut muted,
                ShortestPathConfig {
                    source: index.node_id(i as u32).clone(),
                    target: Some(index.node_id(j as u32).clone()),
                },
            );
            cost[i][j] = match shortest {
                Ok(res) => res.total.unwrap_or(UNREACHABLE),
                Err(EngineError::NoPath { .. }) => UNREACHABLE,
                Err(e) => return Err(e),
            };
        }
    }

    Ok(cost)
}
