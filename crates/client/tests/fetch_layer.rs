//! Integration tests for the fetch layer against live HTTP servers.

mod common;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use raildash_client::api::{FetchError, TrainDataApi};
use raildash_core::report::{Priority, TrainStatus};

// ---------------------------------------------------------------------------
// Test: list_trains returns the backend collection in order
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_trains_returns_backend_order() {
    let api = TrainDataApi::new(&common::spawn_mock_backend().await).unwrap();

    let trains = api.list_trains().await.unwrap();

    let ids: Vec<_> = trains.iter().map(|t| t.train_id.as_str()).collect();
    assert_eq!(ids, ["12345", "67890", "13579", "24680"]);
    assert_eq!(trains[0].priority, Priority::High);
    assert_eq!(trains[3].status, TrainStatus::Solved);
}

// ---------------------------------------------------------------------------
// Test: get_train returns the requested report
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_train_returns_report() {
    let api = TrainDataApi::new(&common::spawn_mock_backend().await).unwrap();

    let train = api.get_train("13579").await.unwrap().expect("train exists");

    assert_eq!(train.train_route, "Kolkata - New Delhi");
    assert_eq!(train.fault_locations.len(), 2);
}

// ---------------------------------------------------------------------------
// Test: an unknown id is absent, not an error
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_unknown_train_is_none() {
    let api = TrainDataApi::new(&common::spawn_mock_backend().await).unwrap();

    assert_matches!(api.get_train("99999").await, Ok(None));
}

// ---------------------------------------------------------------------------
// Test: transport failure is a network error for both calls
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unreachable_backend_is_network_error() {
    let api = TrainDataApi::new(&common::unreachable_base().await).unwrap();

    assert_matches!(api.list_trains().await, Err(FetchError::Network(_)));
    assert_matches!(api.get_train("12345").await, Err(FetchError::Network(_)));
}

// ---------------------------------------------------------------------------
// Test: non-2xx statuses
// ---------------------------------------------------------------------------

#[tokio::test]
async fn server_error_is_status_error() {
    let base = common::spawn_fixed_backend(StatusCode::INTERNAL_SERVER_ERROR, "boom").await;
    let api = TrainDataApi::new(&base).unwrap();

    assert_matches!(
        api.list_trains().await,
        Err(FetchError::Status { status: 500, ref body }) if body == "boom"
    );
    assert_matches!(
        api.get_train("12345").await,
        Err(FetchError::Status { status: 500, .. })
    );
}

#[tokio::test]
async fn missing_list_endpoint_is_not_found_error() {
    let base = common::spawn_fixed_backend(StatusCode::NOT_FOUND, "").await;
    let api = TrainDataApi::new(&base).unwrap();

    assert_matches!(api.list_trains().await, Err(FetchError::NotFound { .. }));
}

// ---------------------------------------------------------------------------
// Test: malformed bodies are parse errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_json_body_is_parse_error() {
    let base = common::spawn_fixed_backend(StatusCode::OK, "<html>oops</html>").await;
    let api = TrainDataApi::new(&base).unwrap();

    assert_matches!(api.list_trains().await, Err(FetchError::Parse(_)));
    assert_matches!(api.get_train("1").await, Err(FetchError::Parse(_)));
}

#[tokio::test]
async fn unknown_enum_value_is_parse_error() {
    let body = r#"[{
        "train_id": "1",
        "train_route": "A - B",
        "priority": "Urgent",
        "status": "Solved",
        "fault_locations": [],
        "crack_descriptions": [],
        "media_links": { "images": [], "videos": [] }
    }]"#;
    let base = common::spawn_fixed_backend(StatusCode::OK, body).await;
    let api = TrainDataApi::new(&base).unwrap();

    assert_matches!(api.list_trains().await, Err(FetchError::Parse(_)));
}

#[tokio::test]
async fn mismatched_detail_id_is_parse_error() {
    let body = r#"{
        "train_id": "12345",
        "train_route": "Delhi - Mumbai Central",
        "priority": "High",
        "status": "Under Process",
        "fault_locations": [],
        "crack_descriptions": [],
        "media_links": { "images": [], "videos": [] }
    }"#;
    let base = common::spawn_fixed_backend(StatusCode::OK, body).await;
    let api = TrainDataApi::new(&base).unwrap();

    assert_matches!(api.get_train("12345").await, Ok(Some(_)));
    assert_matches!(api.get_train("67890").await, Err(FetchError::Parse(_)));
}
