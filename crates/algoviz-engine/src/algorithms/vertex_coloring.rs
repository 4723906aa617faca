// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Vertex coloring (Welsh-Powell).
//!
//! Nodes are processed in descending degree order (stable: ties keep input
//! order). Each round opens a fresh color, assigns it to the first uncolored
//! node, then sweeps the rest of the order assigning the same color to every
//! uncolored node not adjacent to one already holding it.

use crate::algorithms::Algorithm;
use crate::index::GraphIndex;
use crate::recorder::{StepColor, TraceRecorder};
use crate::result::{AlgoResult, AlgorithmKind};
use algoviz_common::{Result, MAX_WEIGHT};

pub struct VertexColoring;

#[derive(Debug, Clone, Default)]
pub struct VertexColoringConfig;

impl Algorithm for VertexColoring {
    type Config = VertexColoringConfig;

    fn name() -> &'static str {
        "vertex-coloring"
    }

    fn run(
        index: &GraphIndex,
        trace: &mut TraceRecorder,
        _config: Self::Config,
    ) -> Result<AlgoResult> {
        let n = index.node_count();
        let matrix = index.matrix();

        let degrees: Vec<usize> = (0..n as u32).map(|i| index.degree(i)).collect();
        let mut order: Vec<usize> = (0..n).collect();
        // Stable: equal degrees keep input order
        order.sort_by(|&a, &b| degrees[b].cmp(&degrees[a]));

        let adjacent = |i: usize, j: usize| matrix[i][j] != 0 && matrix[i][j] != MAX_WEIGHT;

        let mut assignment: Vec<Option<i64>> = vec![None; n];
        let mut current = 0i64;

        for &i in &order {
            if assignment[i].is_some() {
                continue;
            }
            assignment[i] = Some(current);
            trace.set_total(current + 1);
            trace.color_node(i as u32, StepColor::Result);

            for &j in &order {
                if assignment[j].is_some() {
                    continue;
                }
                let conflicts =
                    (0..n).any(|k| assignment[k] == Some(current) && adjacent(j, k));
                if !conflicts {
                    assignment[j] = Some(current);
                    trace.color_node(j as u32, StepColor::Result);
                }
            }
            current += 1;
        }

        let mut result = AlgoResult::new(AlgorithmKind::VertexColoring);
        for slot in 0..n {
            let id = index.node_id(slot as u32).clone();
            // Every node is colored once the loop has drained `order`
            if let Some(color) = assignment[slot] {
                result.node_values.insert(id.clone(), color);
            }
            result.nodes.push(id);
        }
        result.total = Some(current);

        Ok(result)
    }
}
