//! Handlers for the report endpoints.
//!
//! Responses are bare JSON (array or object), not wrapped in an envelope:
//! dashboard clients decode them straight into `TrainReport`.

use axum::extract::{Path, State};
use axum::Json;
use raildash_core::error::CoreError;
use raildash_core::report::TrainReport;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /trainData -- every report, in dataset order.
pub async fn list_trains(State(state): State<AppState>) -> Json<Vec<TrainReport>> {
    tracing::debug!(count = state.store.len(), "Listing train reports");
    Json(state.store.all().to_vec())
}

/// GET /trainData/{id} -- one report, or 404 when the id is unknown.
pub async fn get_train(
    State(state): State<AppState>,
    Path(train_id): Path<String>,
) -> AppResult<Json<TrainReport>> {
    let report = state
        .store
        .get(&train_id)
        .cloned()
        .ok_or(CoreError::NotFound {
            entity: "Train",
            id: train_id,
        })?;
    Ok(Json(report))
}
