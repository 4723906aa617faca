// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Graph algorithm execution engine.
//!
//! The engine takes a drawn graph plus algorithm-specific parameters, builds
//! the dense representations the algorithms need, runs the chosen algorithm,
//! and returns both the final answer and an ordered sequence of full state
//! snapshots for animation.
//!
//! # Example
//!
//! ```ignore
//! use algoviz_engine::{solve, AlgorithmKind, Params};
//!
//! let solution = solve(&graph, AlgorithmKind::ShortestPath, &Params {
//!     source: Some("A".into()),
//!     target: Some("D".into()),
//!     record: true,
//! })?;
//! // solution.result holds the path; solution.steps replays the search
//! ```
//!
//! Every invocation is synchronous and owns all of its state; concurrent
//! invocations share nothing.

pub mod algorithms;
pub mod index;
pub mod recorder;
pub mod result;
pub mod union_find;

pub use index::{GraphIndex, IndexedEdge};
pub use recorder::{Step, StepColor, TraceRecorder};
pub use result::{AlgoResult, AlgorithmKind};
pub use union_find::UnionFind;

#[cfg(test)]
pub mod test_utils;

use algorithms::{
    Algorithm, EdgeColoring, EdgeColoringConfig, EulerianTrail, EulerianTrailConfig,
    HamiltonianTour, HamiltonianTourConfig, Matching, MatchingConfig, MaxFlow, MaxFlowConfig,
    ShortestPath, ShortestPathConfig, SpanningForest, SpanningForestConfig, VertexColoring,
    VertexColoringConfig,
};
use algoviz_common::{EngineError, Graph, NodeId, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Algorithm-independent invocation parameters.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Params {
    /// Source / start node, where the algorithm needs one.
    pub source: Option<NodeId>,
    /// Target / sink node, where the algorithm accepts one.
    pub target: Option<NodeId>,
    /// Whether to record the step trace.
    #[serde(default)]
    pub record: bool,
}

/// Final answer plus the replayable trace.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Solution {
    pub result: AlgoResult,
    pub steps: Vec<Step>,
}

/// Run one algorithm against a drawn graph.
///
/// Builds the graph index, wires up a trace recorder, and dispatches on
/// `kind`. Parameters an algorithm requires but the caller omitted surface
/// as `InvalidInput`.
pub fn solve(graph: &Graph, kind: AlgorithmKind, params: &Params) -> Result<Solution> {
    debug!(
        algorithm = %kind,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        record = params.record,
        "running algorithm"
    );

    let index = GraphIndex::build(graph)?;
    let mut trace = TraceRecorder::new(&index, params.record);

    let result = match kind {
        AlgorithmKind::ShortestPath => ShortestPath::run(
            &index,
            &mut trace,
            ShortestPathConfig {
                source: require_param(params.source.as_ref(), kind, "source")?,
                target: params.target.clone(),
            },
        )?,
        AlgorithmKind::SpanningForest => {
            SpanningForest::run(&index, &mut trace, SpanningForestConfig)?
        }
        AlgorithmKind::MaxFlow => MaxFlow::run(
            &index,
            &mut trace,
            MaxFlowConfig {
                source: require_param(params.source.as_ref(), kind, "source")?,
                sink: require_param(params.target.as_ref(), kind, "target")?,
            },
        )?,
        AlgorithmKind::HamiltonianTour => HamiltonianTour::run(
            &index,
            &mut trace,
            HamiltonianTourConfig {
                start: require_param(params.source.as_ref(), kind, "source")?,
            },
        )?,
        AlgorithmKind::EulerianTrail => EulerianTrail::run(
            &index,
            &mut trace,
            EulerianTrailConfig {
                start: require_param(params.source.as_ref(), kind, "source")?,
            },
        )?,
        AlgorithmKind::Matching => Matching::run(&index, &mut trace, MatchingConfig)?,
        AlgorithmKind::EdgeColoring => EdgeColoring::run(&index, &mut trace, EdgeColoringConfig)?,
        AlgorithmKind::VertexColoring => {
            VertexColoring::run(&index, &mut trace, VertexColoringConfig)?
        }
    };

    Ok(Solution {
        result,
        steps: trace.into_steps(),
    })
}

fn require_param(value: Option<&NodeId>, kind: AlgorithmKind, name: &str) -> Result<NodeId> {
    value.cloned().ok_or_else(|| EngineError::InvalidInput {
        message: format!("algorithm '{}' requires a {} node", kind, name),
    })
}
