use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with_state, MinerStatus, SharedState};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- start mining ---

#[tokio::test]
async fn start_mining_sets_flag_and_reports_it() {
    let state = SharedState::default();
    let app = app_with_state(state.clone());

    let resp = app.oneshot(get("/rest/startMining")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let status: MinerStatus = body_json(resp).await;
    assert!(status.mining);
    assert!(state.read().await.mining);
}

// --- stop mining ---

#[tokio::test]
async fn stop_mining_clears_flag() {
    let state = SharedState::default();
    let app = app_with_state(state.clone());

    app.clone().oneshot(get("/rest/startMining")).await.unwrap();
    let resp = app.oneshot(get("/rest/stopMining")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let status: MinerStatus = body_json(resp).await;
    assert!(!status.mining);
    assert!(!state.read().await.mining);
}

// --- shutdown ---

#[tokio::test]
async fn shutdown_sets_flag_and_returns_empty_ok() {
    let state = SharedState::default();
    let app = app_with_state(state.clone());

    let resp = app.oneshot(get("/rest/shutdown")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_bytes(resp).await.is_empty());
    assert!(state.read().await.shutdown_requested);
}

// --- request recording ---

#[tokio::test]
async fn requests_are_recorded_in_arrival_order() {
    let state = SharedState::default();
    let app = app_with_state(state.clone());

    app.clone().oneshot(get("/rest/startMining")).await.unwrap();
    app.clone().oneshot(get("/rest/stopMining")).await.unwrap();
    app.oneshot(get("/rest/shutdown")).await.unwrap();

    assert_eq!(
        state.read().await.requests_seen,
        vec!["/rest/startMining", "/rest/stopMining", "/rest/shutdown"]
    );
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let resp = app().oneshot(get("/rest/status")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
