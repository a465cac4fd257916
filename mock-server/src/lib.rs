use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

/// Mining flag reported by the start/stop endpoints.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MinerStatus {
    pub mining: bool,
}

/// Everything the fake daemon remembers, exposed so tests can assert on it.
#[derive(Debug, Default)]
pub struct ControlState {
    pub mining: bool,
    pub shutdown_requested: bool,
    /// Every control path hit, in arrival order. Lets tests verify that a
    /// deferred request was not transmitted.
    pub requests_seen: Vec<String>,
}

pub type SharedState = Arc<RwLock<ControlState>>;

pub fn app() -> Router {
    app_with_state(SharedState::default())
}

pub fn app_with_state(state: SharedState) -> Router {
    Router::new()
        .route("/rest/startMining", get(start_mining))
        .route("/rest/stopMining", get(stop_mining))
        .route("/rest/shutdown", get(shutdown))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with_state(listener, SharedState::default()).await
}

pub async fn run_with_state(
    listener: TcpListener,
    state: SharedState,
) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_state(state)).await
}

async fn start_mining(State(state): State<SharedState>) -> Json<MinerStatus> {
    let mut s = state.write().await;
    s.requests_seen.push("/rest/startMining".to_string());
    s.mining = true;
    info!("mining started");
    Json(MinerStatus { mining: s.mining })
}

async fn stop_mining(State(state): State<SharedState>) -> Json<MinerStatus> {
    let mut s = state.write().await;
    s.requests_seen.push("/rest/stopMining".to_string());
    s.mining = false;
    info!("mining stopped");
    Json(MinerStatus { mining: s.mining })
}

async fn shutdown(State(state): State<SharedState>) -> StatusCode {
    let mut s = state.write().await;
    s.requests_seen.push("/rest/shutdown".to_string());
    s.shutdown_requested = true;
    info!("shutdown requested");
    StatusCode::OK
}
