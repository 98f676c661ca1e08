use axum::routing::get;
use axum::Router;

use crate::handlers::train_data;
use crate::state::AppState;

/// Report routes, mounted at the API root.
///
/// ```text
/// GET  /trainData         -> list_trains
/// GET  /trainData/{id}    -> get_train
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/trainData", get(train_data::list_trains))
        .route("/trainData/{id}", get(train_data::get_train))
}
