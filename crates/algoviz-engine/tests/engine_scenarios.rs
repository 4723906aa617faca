// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! End-to-end scenarios run through the public `solve` entry point.

use algoviz_common::{Edge, EdgeId, Graph, Node, NodeId};
use algoviz_engine::{solve, AlgorithmKind, Params, StepColor};

fn build_graph(nodes: &[&str], edges: &[(&str, &str, i64)], directed: bool) -> Graph {
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

/// The worked example: A-B=1, B-C=2, C-D=1, D-A=4, A-C=5.
fn diamond() -> Graph {
    build_graph(
        &["A", "B", "C", "D"],
        &[
            ("A", "B", 1),
            ("B", "C", 2),
            ("C", "D", 1),
            ("D", "A", 4),
            ("A", "C", 5),
        ],
        false,
    )
}

fn params(source: Option<&str>, target: Option<&str>) -> Params {
    Params {
        source: source.map(NodeId::from),
        target: target.map(NodeId::from),
        record: true,
    }
}

#[test]
fn spanning_forest_on_diamond() {
    let solution = solve(&diamond(), AlgorithmKind::SpanningForest, &params(None, None)).unwrap();

    let mut edges = solution.result.edges.clone();
    edges.sort();
    assert_eq!(
        edges,
        vec![EdgeId::from("e0"), EdgeId::from("e1"), EdgeId::from("e2")]
    );
    assert_eq!(solution.result.total, Some(4));
}

#[test]
fn shortest_path_on_diamond() {
    let solution = solve(
        &diamond(),
        AlgorithmKind::ShortestPath,
        &params(Some("A"), Some("D")),
    )
    .unwrap();

    let names: Vec<_> = solution.result.nodes.iter().map(|n| n.as_str()).collect();
    assert_eq!(names, ["A", "B", "C", "D"]);
    assert_eq!(solution.result.total, Some(4));
}

#[test]
fn shortest_path_beats_direct_edge_strictly() {
    // Raising D-A to 5 makes the detour strictly shorter
    let mut graph = diamond();
    graph.edges[3].weight = 5;

    let solution = solve(
        &graph,
        AlgorithmKind::ShortestPath,
        &params(Some("A"), Some("D")),
    )
    .unwrap();

    assert_eq!(solution.result.total, Some(4));
    assert_eq!(solution.result.edges.len(), 3);
}

/// Exhaustive simple-path search for cross-checking Dijkstra on small graphs.
fn brute_force_shortest(graph: &Graph, from: &str, to: &str) -> Option<i64> {
    fn explore(
        graph: &Graph,
        at: &NodeId,
        to: &NodeId,
        seen: &mut Vec<NodeId>,
        cost: i64,
        best: &mut Option<i64>,
    ) {
        if at == to {
            *best = Some(best.map_or(cost, |b: i64| b.min(cost)));
            return;
        }
        for edge in &graph.edges {
            let next = if edge.source == *at {
                Some(&edge.target)
            } else if !graph.is_directed && edge.target == *at {
                Some(&edge.source)
            } else {
                None
            };
            if let Some(next) = next {
                if edge.weight > 0 && !seen.contains(next) {
                    seen.push(next.clone());
                    explore(graph, next, to, seen, cost + edge.weight, best);
                    seen.pop();
                }
            }
        }
    }

    let from = NodeId::from(from);
    let to = NodeId::from(to);
    let mut best = None;
    let mut seen = vec![from.clone()];
    explore(graph, &from, &to, &mut seen, 0, &mut best);
    best
}

#[test]
fn shortest_path_matches_brute_force() {
    let graph = build_graph(
        &["A", "B", "C", "D", "E"],
        &[
            ("A", "B", 4),
            ("A", "C", 2),
            ("B", "C", 5),
            ("B", "D", 10),
            ("C", "E", 3),
            ("E", "D", 4),
            ("D", "E", 11),
        ],
        false,
    );

    for target in ["B", "C", "D", "E"] {
        let solution = solve(
            &graph,
            AlgorithmKind::ShortestPath,
            &params(Some("A"), Some(target)),
        )
        .unwrap();
        assert_eq!(
            solution.result.total,
            brute_force_shortest(&graph, "A", target),
            "disagreement on A -> {target}"
        );
    }
}

#[test]
fn hamiltonian_tour_visits_every_node_once() {
    let graph = build_graph(
        &["A", "B", "C", "D", "E"],
        &[
            ("A", "B", 2),
            ("B", "C", 2),
            ("C", "D", 2),
            ("D", "E", 2),
            ("E", "A", 2),
            ("A", "C", 9),
            ("B", "D", 9),
        ],
        false,
    );

    let solution = solve(
        &graph,
        AlgorithmKind::HamiltonianTour,
        &params(Some("A"), None),
    )
    .unwrap();

    let nodes = &solution.result.nodes;
    assert_eq!(nodes.first(), nodes.last());
    let mut interior: Vec<_> = nodes[..nodes.len() - 1].iter().collect();
    interior.sort();
    interior.dedup();
    assert_eq!(interior.len(), graph.nodes.len(), "a node was revisited");
    assert_eq!(solution.result.total, Some(10));
}

#[test]
fn eulerian_trail_uses_every_edge_once() {
    // Koenigsberg-like but feasible: a bowtie of two triangles sharing C
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

    let solution = solve(
        &graph,
        AlgorithmKind::EulerianTrail,
        &params(Some("C"), None),
    )
    .unwrap();

    assert_eq!(solution.result.nodes.len(), graph.edges.len() + 1);
    assert_eq!(solution.result.edges.len(), graph.edges.len());
}

#[test]
fn max_flow_reports_min_cut_value() {
    // Classic CLRS-style network with max flow 23
    let graph = build_graph(
        &["s", "v1", "v2", "v3", "v4", "t"],
        &[
            ("s", "v1", 16),
            ("s", "v2", 13),
            ("v1", "v3", 12),
            ("v2", "v1", 4),
            ("v2", "v4", 14),
            ("v3", "v2", 9),
            ("v3", "t", 20),
            ("v4", "v3", 7),
            ("v4", "t", 4),
        ],
        true,
    );

    let solution = solve(&graph, AlgorithmKind::MaxFlow, &params(Some("s"), Some("t"))).unwrap();
    assert_eq!(solution.result.total, Some(23));
}

#[test]
fn final_step_colors_agree_with_result() {
    let graph = diamond();
    let cases = [
        (AlgorithmKind::ShortestPath, params(Some("A"), Some("D"))),
        (AlgorithmKind::SpanningForest, params(None, None)),
        (AlgorithmKind::MaxFlow, params(Some("A"), Some("C"))),
        (AlgorithmKind::HamiltonianTour, params(Some("A"), None)),
        (AlgorithmKind::Matching, params(None, None)),
        (AlgorithmKind::EdgeColoring, params(None, None)),
        (AlgorithmKind::VertexColoring, params(None, None)),
    ];

    for (kind, p) in cases {
        let solution = solve(&graph, kind, &p).unwrap();
        let Some(last) = solution.steps.last() else {
            panic!("{kind} recorded no steps");
        };
        for edge in &solution.result.edges {
            assert_eq!(
                last.edge_colors[edge],
                StepColor::Result,
                "{kind}: result edge {edge} not colored result in the final step"
            );
        }
        for node in &solution.result.nodes {
            assert_eq!(
                last.node_colors[node],
                StepColor::Result,
                "{kind}: result node {node} not colored result in the final step"
            );
        }
    }
}

#[test]
fn eulerian_final_colors_agree_with_result() {
    let graph = build_graph(
        &["A", "B", "C"],
        &[("A", "B", 1), ("B", "C", 1), ("C", "A", 1)],
        false,
    );

    let solution = solve(
        &graph,
        AlgorithmKind::EulerianTrail,
        &params(Some("A"), None),
    )
    .unwrap();

    let last = solution.steps.last().unwrap();
    for edge in &solution.result.edges {
        assert_eq!(last.edge_colors[edge], StepColor::Result);
    }
    for node in &solution.result.nodes {
        assert_eq!(last.node_colors[node], StepColor::Result);
    }
}

#[test]
fn solution_serializes_to_json() {
    let solution = solve(
        &diamond(),
        AlgorithmKind::SpanningForest,
        &params(None, None),
    )
    .unwrap();

    let json = serde_json::to_value(&solution).unwrap();
    assert_eq!(json["result"]["kind"], "spanning-forest");
    assert!(json["steps"].as_array().is_some());
}
