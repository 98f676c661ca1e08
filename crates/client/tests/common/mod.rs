use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

use raildash_api::config::ServerConfig;
use raildash_api::router::build_app_router;
use raildash_api::state::AppState;
use raildash_api::store::TrainDataStore;

/// Serve `app` on an ephemeral localhost port and return its base URL.
pub async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// The real mock backend over the built-in dataset.
pub async fn spawn_mock_backend() -> String {
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        train_data_path: None,
    };
    let state = AppState {
        store: Arc::new(TrainDataStore::builtin().unwrap()),
        config: Arc::new(config),
    };
    spawn_server(build_app_router(state)).await
}

/// A backend that answers every report request with `status` and `body`.
pub async fn spawn_fixed_backend(status: StatusCode, body: &'static str) -> String {
    let handler = move || async move { (status, body) };
    let app = Router::new()
        .route("/trainData", get(handler))
        .route("/trainData/{id}", get(handler));
    spawn_server(app).await
}

/// A base URL nothing is listening on.
pub async fn unreachable_base() -> String {
    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
