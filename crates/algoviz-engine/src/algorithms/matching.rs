// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Greedy matching.
//!
//! First-fit pairing in index order - a maximal matching, not a maximum one.
//! No backtracking, no augmenting paths.

use crate::algorithms::Algorithm;
use crate::index::GraphIndex;
use crate::recorder::{StepColor, TraceRecorder};
use crate::result::{AlgoResult, AlgorithmKind};
use algoviz_common::{EngineError, Result, MAX_WEIGHT};

pub struct Matching;

#[derive(Debug, Clone, Default)]
pub struct MatchingConfig;

impl Algorithm for Matching {
    type Config = MatchingConfig;

    fn name() -> &'static str {
        "matching"
    }

    fn run(
        index: &GraphIndex,
        trace: &mut TraceRecorder,
        _config: Self::Config,
    ) -> Result<AlgoResult> {
        if index.is_directed() {
            return Err(EngineError::InvalidInput {
                message: "matching requires an undirected graph".to_string(),
            });
        }

        let n = index.node_count();
        let matrix = index.matrix();
        let mut mate: Vec<Option<usize>> = vec![None; n];
        let mut pairs = 0i64;
        let mut result = AlgoResult::new(AlgorithmKind::Matching);

        for i in 0..n {
            if mate[i].is_some() {
                continue;
            }
            for j in (i + 1)..n {
                if mate[j].is_some() {
                    continue;
                }
                let w = matrix[i][j];
                if w == 0 || w == MAX_WEIGHT {
                    continue;
                }

                trace.color_edge(i as u32, j as u32, StepColor::Processing);
                mate[i] = Some(j);
                mate[j] = Some(i);
                pairs += 1;
                trace.set_total(pairs);
                trace.color_node(i as u32, StepColor::Result);
                trace.color_node(j as u32, StepColor::Result);
                trace.color_edge(i as u32, j as u32, StepColor::Result);

                result.nodes.push(index.node_id(i as u32).clone());
                result.nodes.push(index.node_id(j as u32).clone());
                if let Some(eid) = index.edge_id_between(i as u32, j as u32) {
                    result.edges.push(eid.clone());
                }
                break;
            }
        }

        result.total = Some(pairs);
        Ok(result)
    }
}
