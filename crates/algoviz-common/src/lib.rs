// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

pub mod api {
    pub mod error;
}

pub mod config;

pub mod core {
    pub mod graph;
}

// Re-exports for convenience
pub use api::error::{EngineError, Result};
pub use config::{EngineConfig, ServerConfig};
pub use core::graph::{Edge, EdgeId, Graph, Node, NodeId, MAX_WEIGHT, UNREACHABLE};
