// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Minimum spanning forest (Kruskal).
//!
//! No connectivity precondition: a disconnected input yields a forest with
//! one tree per component, not an error.

use crate::algorithms::Algorithm;
use crate::index::GraphIndex;
use crate::recorder::{StepColor, TraceRecorder};
use crate::result::{AlgoResult, AlgorithmKind};
use crate::union_find::UnionFind;
use algoviz_common::{EngineError, Result, MAX_WEIGHT};

pub struct SpanningForest;

#[derive(Debug, Clone, Default)]
pub struct SpanningForestConfig;

impl Algorithm for SpanningForest {
    type Config = SpanningForestConfig;

    fn name() -> &'static str {
        "spanning-forest"
    }

    fn run(
        index: &GraphIndex,
        trace: &mut TraceRecorder,
        _config: Self::Config,
    ) -> Result<AlgoResult> {
        if index.is_directed() {
            return Err(EngineError::InvalidInput {
                message: "spanning forest requires an undirected graph".to_string(),
            });
        }

        let n = index.node_count();
        let mut uf = UnionFind::new(n);
        let mut total = 0i64;
        let mut result = AlgoResult::new(AlgorithmKind::SpanningForest);

        for edge in index.sorted_edges() {
            if edge.weight <= 0 || edge.weight == MAX_WEIGHT {
                continue;
            }

            trace.color_edge(edge.from, edge.to, StepColor::Processing);

            if uf.union(edge.from, edge.to) {
                total += edge.weight;
                trace.set_total(total);
                trace.color_edge(edge.from, edge.to, StepColor::Result);
                result.edges.push(edge.id.clone());
            } else {
                // Would close a cycle
                trace.color_edge(edge.from, edge.to, StepColor::Discarded);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{build_graph, run_recorded};
    use algoviz_common::EdgeId;

    #[test]
    fn test_forest_picks_light_edges() {
        // A-B=1, B-C=2, C-D=1, D-A=4, A-C=5 -> forest {A-B, B-C, C-D}, weight 4
        let graph = build_graph(
            &["A", "B", "C", "D"],
            &[
                ("A", "B", 1),
                ("B", "C", 2),
                ("C", "D", 1),
                ("D", "A", 4),
                ("A", "C", 5),
            ],
            false,
        );

        let (result, _) = run_recorded::<SpanningForest>(&graph, SpanningForestConfig).unwrap();

        let mut edges = result.edges.clone();
        edges.sort();
        assert_eq!(
            edges,
            vec![EdgeId::from("e0"), EdgeId::from("e1"), EdgeId::from("e2")]
        );
        assert_eq!(result.total, Some(4));
    }

    #[test]
    fn test_directed_graph_rejected() {
        let graph = build_graph(&["A", "B"], &[("A", "B", 1)], true);
        let err = run_recorded::<SpanningForest>(&graph, SpanningForestConfig).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput { .. }));
    }

    #[test]
    fn test_disconnected_input_yields_forest() {
        // Two components: A-B and C-D
        let graph = build_graph(
            &["A", "B", "C", "D"],
            &[("A", "B", 3), ("C", "D", 5)],
            false,
        );

        let (result, _) = run_recorded::<SpanningForest>(&graph, SpanningForestConfig).unwrap();

        assert_eq!(result.edges.len(), 2);
        assert_eq!(result.total, Some(8));
    }

    #[test]
    fn test_non_positive_weights_discarded() {
        let graph = build_graph(
            &["A", "B", "C"],
            &[("A", "B", 0), ("B", "C", -2), ("A", "C", 7)],
            false,
        );

        let (result, _) = run_recorded::<SpanningForest>(&graph, SpanningForestConfig).unwrap();

        assert_eq!(result.edges, vec![EdgeId::from("e2")]);
        assert_eq!(result.total, Some(7));
    }

    #[test]
    fn test_cycle_edge_colored_discarded() {
        // Triangle: the heaviest edge closes a cycle
        let graph = build_graph(
            &["A", "B", "C"],
            &[("A", "B", 1), ("B", "C", 2), ("A", "C", 9)],
            false,
        );

        let (result, steps) = run_recorded::<SpanningForest>(&graph, SpanningForestConfig).unwrap();

        let last = steps.last().unwrap();
        assert_eq!(last.edge_colors[&EdgeId::from("e2")], StepColor::Discarded);
        for edge in &result.edges {
            assert_eq!(last.edge_colors[edge], StepColor::Result);
        }
    }
}
