// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Core algorithm trait and the eight implementations.

use crate::index::GraphIndex;
use crate::recorder::TraceRecorder;
use crate::result::AlgoResult;
use algoviz_common::Result;

/// Core trait for all graph algorithms.
///
/// An algorithm consumes an immutable [`GraphIndex`], narrates its state
/// transitions through the [`TraceRecorder`], and produces a uniform
/// [`AlgoResult`]. The recorder is passed explicitly; there is no shared
/// mutable state between invocations.
pub trait Algorithm: Send + Sync {
    /// Algorithm parameters.
    type Config: Clone + Send + 'static;

    /// Algorithm identifier.
    fn name() -> &'static str;

    /// Execute on an index, recording state transitions.
    fn run(index: &GraphIndex, trace: &mut TraceRecorder, config: Self::Config)
        -> Result<AlgoResult>;
}

mod shortest_path;
pub use shortest_path::{ShortestPath, ShortestPathConfig};

mod spanning_forest;
pub use spanning_forest::{SpanningForest, SpanningForestConfig};

mod max_flow;
pub use max_flow::{MaxFlow, MaxFlowConfig};

mod hamiltonian;
pub use hamiltonian::{HamiltonianTour, HamiltonianTourConfig};

mod eulerian;
pub use eulerian::{EulerianTrail, EulerianTrailConfig};

mod matching;
pub use matching::{Matching, MatchingConfig};

mod edge_coloring;
pub use edge_coloring::{EdgeColoring, EdgeColoringConfig};

mod vertex_coloring;
pub use vertex_coloring::{VertexColoring, VertexColoringConfig};
