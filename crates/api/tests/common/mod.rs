use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use raildash_api::config::ServerConfig;
use raildash_api::router::build_app_router;
use raildash_api::state::AppState;
use raildash_api::store::TrainDataStore;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        train_data_path: None,
    }
}

/// Build the full application router over the given store.
pub fn build_test_app_with(store: TrainDataStore) -> Router {
    build_app_router(AppState {
        store: Arc::new(store),
        config: Arc::new(test_config()),
    })
}

/// Build the full application router over the built-in mock dataset.
pub fn build_test_app() -> Router {
    build_test_app_with(TrainDataStore::builtin().unwrap())
}

/// Issue a GET request against the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
