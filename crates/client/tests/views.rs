//! End-to-end view tests: fetch through a loader, then render.

mod common;

use axum::http::StatusCode;
use raildash_client::api::TrainDataApi;
use raildash_client::loader::{fetch_detail_state, fetch_list_state, ViewLoader};
use raildash_client::render::Renderer;
use raildash_core::view::ViewState;

#[tokio::test]
async fn list_view_renders_dashboard() {
    let api = TrainDataApi::new(&common::spawn_mock_backend().await).unwrap();
    let view = ViewLoader::new();

    assert!(view.load(fetch_list_state(api)).await.unwrap());

    let out = Renderer::new(false).list(&view.state(), "mumbai");
    assert!(out.contains("Total Reports   4"));
    assert!(out.contains("Train 12345"));
    assert!(out.contains("Train 24680"));
    assert!(!out.contains("Train 67890"));
}

#[tokio::test]
async fn detail_view_for_missing_train_renders_not_found() {
    let api = TrainDataApi::new(&common::spawn_mock_backend().await).unwrap();
    let view = ViewLoader::new();

    view.load(fetch_detail_state(api, "99999".to_string()))
        .await
        .unwrap();

    let state = view.state();
    assert_eq!(state, ViewState::Empty);
    assert!(Renderer::new(false)
        .detail("99999", &state)
        .contains("The train with ID 99999 could not be found."));
}

#[tokio::test]
async fn list_view_failure_is_error_state() {
    let api = TrainDataApi::new(&common::unreachable_base().await).unwrap();
    let view = ViewLoader::new();

    view.load(fetch_list_state(api)).await.unwrap();

    match view.state() {
        ViewState::Error(msg) => assert!(msg.starts_with("Could not reach server")),
        other => panic!("expected error state, got {other:?}"),
    }
}

#[tokio::test]
async fn detail_view_for_unreachable_backend_is_error_not_missing() {
    let api = TrainDataApi::new(&common::unreachable_base().await).unwrap();
    let view = ViewLoader::new();

    let state = view
        .load_settled(fetch_detail_state(api, "12345".to_string()))
        .await
        .unwrap();

    assert!(matches!(state, ViewState::Error(_)), "got {state:?}");
    let out = Renderer::new(false).detail("12345", &state);
    assert!(out.starts_with("Could not load train 12345."));
    assert!(!out.contains("could not be found"));
}

#[tokio::test]
async fn detail_view_for_server_error_is_error_not_missing() {
    let base = common::spawn_fixed_backend(StatusCode::INTERNAL_SERVER_ERROR, "boom").await;
    let api = TrainDataApi::new(&base).unwrap();
    let view = ViewLoader::new();

    let state = view
        .load_settled(fetch_detail_state(api, "12345".to_string()))
        .await
        .unwrap();

    match &state {
        ViewState::Error(msg) => assert_eq!(msg, "Server error (500): boom"),
        other => panic!("expected error state, got {other:?}"),
    }
    assert!(!Renderer::new(false)
        .detail("12345", &state)
        .contains("could not be found"));
}
