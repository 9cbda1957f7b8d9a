//! Integration tests for the search screen.
//!
//! Tests cover:
//! - Request shape and result handling
//! - Failure paths
//! - Overlapping submissions

mod common;

use common::{client, ok, settle_until, status, Reply, ScriptedTransport};
use movie_browser::core::search::{SearchController, SearchState};
use movie_browser::core::task::TaskOutcome;
use movie_browser::generators::grid::{render_table, result_cards};
use movie_browser::models::movie::MovieSummary;
use movie_browser::services::transport::HttpResponse;
use std::sync::Arc;
use tokio::sync::Notify;

const IMAGES: &str = "https://image.tmdb.org/t/p";

const MATRIX_RESULTS: &str = r#"{
    "page": 1,
    "results": [
        {"id": 1, "title": "The Matrix", "release_date": "1999-03-31", "poster_path": "/a.jpg"},
        {"id": 2, "title": "Matrix Reloaded", "release_date": "2003-05-07", "poster_path": null}
    ]
}"#;

// ========== REQUEST AND RESULT TESTS ==========

#[tokio::test]
async fn test_search_issues_one_encoded_request() {
    let transport = ScriptedTransport::new();
    transport.on("search/movie", ok(MATRIX_RESULTS));
    let controller = SearchController::new(client(&transport));

    let state = controller.search("The Matrix & Co").await;

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].contains("api_key=test-key"));
    assert!(requests[0].contains("query=The%20Matrix%20%26%20Co"));
    assert_eq!(state.query, "The Matrix & Co");
    assert_eq!(state.results.len(), 2);
    assert!(!state.loading);
}

#[tokio::test]
async fn test_results_equal_response_array() {
    let transport = ScriptedTransport::new();
    transport.on("search/movie", ok(MATRIX_RESULTS));
    let controller = SearchController::new(client(&transport));

    let state = controller.search("Matrix").await;

    assert_eq!(
        state.results,
        vec![
            MovieSummary {
                id: 1,
                title: "The Matrix".to_string(),
                release_date: Some("1999-03-31".to_string()),
                poster_path: Some("/a.jpg".to_string()),
            },
            MovieSummary {
                id: 2,
                title: "Matrix Reloaded".to_string(),
                release_date: Some("2003-05-07".to_string()),
                poster_path: None,
            },
        ]
    );
}

#[tokio::test]
async fn test_absent_results_is_empty_list() {
    let transport = ScriptedTransport::new();
    transport.on("search/movie", ok(r#"{"page": 1}"#));
    let controller = SearchController::new(client(&transport));

    let state = controller.search("nothing").await;
    assert!(state.results.is_empty());
    assert!(!state.loading);
}

#[tokio::test]
async fn test_empty_query_is_noop() {
    let transport = ScriptedTransport::new();
    transport.on("search/movie", ok(MATRIX_RESULTS));
    let controller = SearchController::new(client(&transport));

    assert!(controller.submit("").is_none());
    assert!(controller.submit("   ").is_none());
    assert!(transport.requests().is_empty());
    assert_eq!(controller.state(), SearchState::default());
}

#[tokio::test]
async fn test_empty_query_keeps_previous_results() {
    let transport = ScriptedTransport::new();
    transport.on("search/movie", ok(MATRIX_RESULTS));
    let controller = SearchController::new(client(&transport));

    let before = controller.search("Matrix").await;
    let after = controller.search("").await;

    assert_eq!(before, after);
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn test_matrix_scenario_renders_placeholder_poster() {
    let transport = ScriptedTransport::new();
    transport.on("search/movie", ok(MATRIX_RESULTS));
    let controller = SearchController::new(client(&transport));

    let state = controller.search("Matrix").await;

    let cards = result_cards(&state.results, IMAGES);
    assert_eq!(cards.len(), 2);
    assert_eq!(
        cards[0].poster.as_deref(),
        Some("https://image.tmdb.org/t/p/w500/a.jpg")
    );
    assert_eq!(cards[1].poster, None);

    let table = render_table(&state.query, &state.results, IMAGES);
    let rows: Vec<&str> = table.lines().filter(|l| l.contains("/movie/")).collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].contains("The Matrix"));
    assert!(rows[1].contains("Matrix Reloaded"));
    assert!(rows[1].contains("[no poster]"));
}

// ========== FAILURE TESTS ==========

#[tokio::test]
async fn test_non_success_status_clears_results() {
    let transport = ScriptedTransport::new();
    transport.on("search/movie", status(500));
    let controller = SearchController::new(client(&transport));

    let state = controller.search("Matrix").await;
    assert!(state.results.is_empty());
    assert!(!state.loading);
}

#[tokio::test]
async fn test_transport_failure_clears_results() {
    let transport = ScriptedTransport::new();
    transport.on("search/movie", ok(MATRIX_RESULTS));
    let controller = SearchController::new(client(&transport));
    assert_eq!(controller.search("Matrix").await.results.len(), 2);

    transport.on("search/movie", Reply::Fail("connection reset".to_string()));
    let state = controller.search("Matrix").await;
    assert!(state.results.is_empty());
    assert!(!state.loading);
}

#[tokio::test]
async fn test_malformed_body_clears_results() {
    let transport = ScriptedTransport::new();
    transport.on("search/movie", ok(r#"{"results": [{"id": "one"}]}"#));
    let controller = SearchController::new(client(&transport));

    let state = controller.search("Matrix").await;
    assert!(state.results.is_empty());
}

// ========== OVERLAP TESTS ==========

#[tokio::test]
async fn test_new_search_clears_results_while_loading() {
    let transport = ScriptedTransport::new();
    transport.on("search/movie", ok(MATRIX_RESULTS));
    let controller = SearchController::new(client(&transport));
    controller.search("Matrix").await;

    let gate = Arc::new(Notify::new());
    transport.on(
        "search/movie",
        Reply::Gated(gate.clone(), HttpResponse::new(200, MATRIX_RESULTS)),
    );
    let handle = controller.submit("Matrix again").unwrap();

    let pending = controller.state();
    assert!(pending.loading);
    assert!(pending.results.is_empty());

    gate.notify_one();
    assert_eq!(handle.wait().await, TaskOutcome::Applied);
    assert_eq!(controller.state().results.len(), 2);
}

#[tokio::test]
async fn test_last_submitted_search_wins() {
    let transport = ScriptedTransport::new();
    let gate = Arc::new(Notify::new());
    transport.on_query(
        "search/movie",
        "query=first",
        Reply::Gated(gate.clone(), HttpResponse::new(200, MATRIX_RESULTS)),
    );
    transport.on_query(
        "search/movie",
        "query=second",
        ok(r#"{"results": [{"id": 9, "title": "Second"}]}"#),
    );
    let controller = SearchController::new(client(&transport));

    let first = controller.submit("first").unwrap();
    settle_until(|| transport.requests().len() == 1).await;
    let second = controller.submit("second").unwrap();

    assert_eq!(second.wait().await, TaskOutcome::Applied);
    gate.notify_one();
    assert_eq!(first.wait().await, TaskOutcome::Superseded);

    let state = controller.state();
    assert_eq!(state.query, "second");
    assert_eq!(state.results.len(), 1);
    assert_eq!(state.results[0].title, "Second");
    assert!(!state.loading);
}
