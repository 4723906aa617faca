// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Greedy edge coloring.
//!
//! Palette of `2 * delta - 1` indices, sufficient for a greedy assignment by
//! the Vizing bound (not necessarily tight). Each undirected edge gets the
//! first index unused at both endpoints; if the incident set somehow exhausts
//! the palette the edge falls back to the last index, accepting a possible
//! conflict rather than failing.

use crate::algorithms::Algorithm;
use crate::index::GraphIndex;
use crate::recorder::{StepColor, TraceRecorder};
use crate::result::{AlgoResult, AlgorithmKind};
use algoviz_common::{EngineError, Result, MAX_WEIGHT};
use fxhash::FxHashMap;
use std::collections::HashSet;

pub struct EdgeColoring;

#[derive(Debug, Clone, Default)]
pub struct EdgeColoringConfig;

impl Algorithm for EdgeColoring {
    type Config = EdgeColoringConfig;

    fn name() -> &'static str {
        "edge-coloring"
    }

    fn run(
        index: &GraphIndex,
        trace: &mut TraceRecorder,
        _config: Self::Config,
    ) -> Result<AlgoResult> {
        if index.is_directed() {
            return Err(EngineError::InvalidInput {
                message: "edge coloring requires an undirected graph".to_string(),
            });
        }

        let n = index.node_count();
        let matrix = index.matrix();
        let delta = (0..n as u32).map(|i| index.degree(i)).max().unwrap_or(0);

        let mut result = AlgoResult::new(AlgorithmKind::EdgeColoring);
        if delta == 0 {
            result.total = Some(0);
            return Ok(result);
        }
        let palette = 2 * delta - 1;

        let has_edge = |i: usize, j: usize| matrix[i][j] != 0 && matrix[i][j] != MAX_WEIGHT;
        let key = |i: usize, j: usize| if i < j { (i, j) } else { (j, i) };

        let mut assigned: FxHashMap<(usize, usize), usize> = FxHashMap::default();
        let mut used_overall: HashSet<usize> = HashSet::new();

        for i in 0..n {
            for j in (i + 1)..n {
                if !has_edge(i, j) {
                    continue;
                }

                trace.color_edge(i as u32, j as u32, StepColor::Processing);

                // Indices already taken at either endpoint
                let mut taken = vec![false; palette];
                for k in 0..n {
                    if k != i && has_edge(i, k) {
                        if let Some(&c) = assigned.get(&key(i, k)) {
                            taken[c] = true;
                        }
                    }
                    if k != j && has_edge(j, k) {
                        if let Some(&c) = assigned.get(&key(j, k)) {
                            taken[c] = true;
                        }
                    }
                }

                let chosen = (0..palette).find(|&c| !taken[c]).unwrap_or(palette - 1);
                assigned.insert((i, j), chosen);
                used_overall.insert(chosen);

                trace.set_total(used_overall.len() as i64);
                trace.color_edge_with_value(i as u32, j as u32, StepColor::Result, chosen as i64);

                if let Some(eid) = index.edge_id_between(i as u32, j as u32) {
                    result.edges.push(eid.clone());
                    result.edge_values.insert(eid.clone(), chosen as i64);
                }
            }
        }

        for slot in 0..n as u32 {
            trace.color_node(slot, StepColor::Result);
            result.nodes.push(index.node_id(slot).clone());
        }
        result.total = Some(used_overall.len() as i64);

        Ok(result)
    }
}
