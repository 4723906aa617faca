// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! HTTP transport for the algorithm engine.
//!
//! One endpoint per algorithm plus a named-graph store. Engine errors are
//! surfaced as a single opaque failure message; no structured error codes
//! cross this boundary.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use algoviz_common::{Graph, NodeId, ServerConfig};
use algoviz_engine::{solve, AlgorithmKind, Params};

/// Shared application state passed to handlers.
struct AppState {
    /// Named graphs: name -> opaque payload. The server never inspects the
    /// payload; it round-trips whatever the editor saved.
    graphs: RwLock<HashMap<String, serde_json::Value>>,
    config: ServerConfig,
}

/// Starts the HTTP server.
///
/// # Errors
///
/// Returns an error if the TCP listener fails to bind or the server
/// encounters a fatal error.
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    let port = config.port;
    let app_state = Arc::new(AppState {
        graphs: RwLock::new(HashMap::new()),
        config,
    });

    let cors = build_cors_layer(&app_state.config);

    let app = Router::new()
        .route("/api/v1/algorithms/:name", post(algorithm_handler))
        .route("/api/v1/graphs", get(list_graphs_handler).post(save_graph_handler))
        .route(
            "/api/v1/graphs/:name",
            get(load_graph_handler).delete(delete_graph_handler),
        )
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the CORS layer based on server configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if config.allowed_origins.is_empty() {
        cors
    } else if config.allowed_origins.len() == 1 && config.allowed_origins[0] == "*" {
        cors.allow_origin(AllowOrigin::any())
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}

#[derive(Deserialize)]
struct AlgorithmRequest {
    graph: Graph,
    source: Option<NodeId>,
    target: Option<NodeId>,
    #[serde(default = "default_record")]
    record: bool,
}

fn default_record() -> bool {
    true
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

fn failure(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

async fn algorithm_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(request): Json<AlgorithmRequest>,
) -> Response {
    let Some(kind) = AlgorithmKind::from_name(&name) else {
        return failure(StatusCode::NOT_FOUND, "unknown algorithm");
    };

    // The subset DP is the one genuinely expensive algorithm in the suite;
    // reject oversized inputs before invoking it
    if kind == AlgorithmKind::HamiltonianTour
        && request.graph.node_count() > state.config.engine.max_tour_nodes
    {
        warn!(
            nodes = request.graph.node_count(),
            cap = state.config.engine.max_tour_nodes,
            "rejecting oversized tour request"
        );
        return failure(StatusCode::BAD_REQUEST, "algorithm execution failed");
    }

    let params = Params {
        source: request.source,
        target: request.target,
        record: request.record,
    };
    let graph = request.graph;

    let outcome = tokio::task::spawn_blocking(move || solve(&graph, kind, &params)).await;

    match outcome {
        Ok(Ok(solution)) => (StatusCode::OK, Json(solution)).into_response(),
        Ok(Err(e)) => {
            warn!(algorithm = %kind, error = %e, "algorithm invocation failed");
            failure(StatusCode::BAD_REQUEST, "algorithm execution failed")
        }
        Err(e) => {
            warn!(algorithm = %kind, error = %e, "algorithm task panicked");
            failure(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
        }
    }
}

#[derive(Serialize, Deserialize)]
struct SaveGraphRequest {
    name: String,
    payload: serde_json::Value,
}

async fn list_graphs_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let names: Vec<String> = state.graphs.read().keys().cloned().collect();
    Json(names)
}

async fn save_graph_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SaveGraphRequest>,
) -> Response {
    if request.name.is_empty() {
        return failure(StatusCode::BAD_REQUEST, "graph name must not be empty");
    }
    state
        .graphs
        .write()
        .insert(request.name.clone(), request.payload);
    info!(name = %request.name, "graph saved");
    StatusCode::CREATED.into_response()
}

async fn load_graph_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Response {
    match state.graphs.read().get(&name) {
        Some(payload) => Json(SaveGraphRequest {
            name,
            payload: payload.clone(),
        })
        .into_response(),
        None => failure(StatusCode::NOT_FOUND, "graph not found"),
    }
}

async fn delete_graph_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Response {
    match state.graphs.write().remove(&name) {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => failure(StatusCode::NOT_FOUND, "graph not found"),
    }
}

/// Health check endpoint for load balancers and monitoring.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
