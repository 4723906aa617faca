// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

mod server;

use algoviz_common::ServerConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = ServerConfig::default();
    if let Ok(port) = std::env::var("ALGOVIZ_PORT") {
        config.port = port.parse()?;
    }

    server::start_server(config).await
}
