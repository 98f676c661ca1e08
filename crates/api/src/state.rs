use std::sync::Arc;

use crate::config::ServerConfig;
use crate::store::TrainDataStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Report dataset loaded at startup.
    pub store: Arc<TrainDataStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
