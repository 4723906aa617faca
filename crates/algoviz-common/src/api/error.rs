// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// Missing/unknown node id, dangling edge endpoint, or wrong
    /// directedness/weightedness for the chosen algorithm.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Connectivity precondition failure.
    #[error("Graph is not connected: {message}")]
    DisconnectedGraph { message: String },

    /// Target unreachable from source.
    #[error("No path exists from '{from}' to '{target}'")]
    NoPath { from: String, target: String },

    /// Subset DP found no finite closing tour.
    #[error("No Hamiltonian cycle exists in the graph")]
    NoHamiltonianCycle,
}

pub type Result<T> = std::result::Result<T, EngineError>;
