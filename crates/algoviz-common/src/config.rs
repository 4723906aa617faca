// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

/// Execution limits applied by the caller ahead of an engine invocation.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Maximum node count accepted for the exponential tour algorithm
    /// (default: 12). Subset DP is `O(2^n * n^2)`; this is the only
    /// mitigation against runaway cost.
    pub max_tour_nodes: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { max_tour_nodes: 12 }
    }
}

/// HTTP server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Port to bind (default: 8080)
    pub port: u16,

    /// Allowed CORS origins. Empty = none, `["*"]` = any (development mode).
    pub allowed_origins: Vec<String>,

    /// Engine-side execution limits.
    pub engine: EngineConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            allowed_origins: vec!["*".to_string()],
            engine: EngineConfig::default(),
        }
    }
}
