//! Integration tests using mock HTTP server
//!
//! Tests the full flow: controller operation → POST query → decoded page → state

use launch_viewer::config::ViewerConfig;
use launch_viewer::http::{HttpClient, HttpClientConfig};
use launch_viewer::render::{render_pretty, Navigation};
use launch_viewer::{
    FetchOrdering, FetchState, HttpLaunchProvider, LaunchProvider, PaginationController,
    PaginationParams, QueryRequest,
};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const QUERY_PATH: &str = "/v5/launches/query";

fn launch_doc(n: u32) -> Value {
    json!({
        "id": format!("id-{n}"),
        "name": format!("Mission {n}"),
        "date_utc": "2020-05-30T19:22:00.000Z",
        "success": n % 3 != 0,
        "details": if n % 2 == 0 { Value::Null } else { json!(format!("Details for {n}")) },
        "flight_number": n,
        "crew": []
    })
}

fn page_body(page: u32, total_pages: u32, docs: usize) -> Value {
    let has_prev = page > 1;
    let has_next = page < total_pages;
    json!({
        "docs": (0..docs).map(|i| launch_doc(i as u32)).collect::<Vec<_>>(),
        "totalDocs": total_pages * 10,
        "offset": (page - 1) * 10,
        "limit": 10,
        "totalPages": total_pages,
        "page": page,
        "pagingCounter": (page - 1) * 10 + 1,
        "hasPrevPage": has_prev,
        "hasNextPage": has_next,
        "prevPage": if has_prev { json!(page - 1) } else { Value::Null },
        "nextPage": if has_next { json!(page + 1) } else { Value::Null }
    })
}

fn provider_for(server: &MockServer) -> Arc<HttpLaunchProvider> {
    let client = HttpClient::with_config(
        HttpClientConfig::builder()
            .base_url(server.uri())
            .timeout(Duration::from_secs(5))
            .build(),
    )
    .unwrap();
    Arc::new(HttpLaunchProvider::new(client, QUERY_PATH))
}

fn controller_for(server: &MockServer, ordering: FetchOrdering) -> PaginationController {
    PaginationController::new(provider_for(server), PaginationParams::first(10), ordering)
}

async fn settle(controller: &PaginationController) -> launch_viewer::ControllerSnapshot {
    tokio::time::timeout(Duration::from_secs(10), controller.settled())
        .await
        .expect("controller did not settle")
}

// ============================================================================
// Provider Tests
// ============================================================================

#[tokio::test]
async fn test_provider_posts_query_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(3, 5, 10)))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let result = provider
        .query(&QueryRequest::unfiltered(PaginationParams::new(3, 10)))
        .await
        .unwrap();

    assert_eq!(result.current_page, 3);
    assert_eq!(result.items.len(), 10);
    assert_eq!(result.items[1].details.as_deref(), Some("Details for 1"));

    let requests = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(
        body,
        json!({
            "query": {},
            "options": {"offset": 20, "page": 3, "limit": 10, "pagination": true}
        })
    );
}

// ============================================================================
// Controller Tests
// ============================================================================

#[tokio::test]
async fn test_middle_page_enables_both_controls() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(2, 5, 10)))
        .mount(&server)
        .await;

    let controller = controller_for(&server, FetchOrdering::default());
    controller.set_page(2);
    let snapshot = settle(&controller).await;

    let result = snapshot.state.result().expect("page should be loaded");
    assert_eq!(result.current_page, 2);
    let nav = Navigation::from_result(result);
    assert!(nav.prev_enabled);
    assert!(nav.next_enabled);
    assert_eq!(nav.prev_target, 1);
    assert_eq!(nav.next_target, 3);
}

#[tokio::test]
async fn test_single_empty_page_disables_controls() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(1, 1, 0)))
        .mount(&server)
        .await;

    let controller = controller_for(&server, FetchOrdering::default());
    controller.start();
    let snapshot = settle(&controller).await;

    let result = snapshot.state.result().unwrap();
    assert!(result.is_empty());
    let nav = Navigation::from_result(result);
    assert!(!nav.prev_enabled);
    assert!(!nav.next_enabled);
    assert!(!render_pretty(&snapshot.state).contains("Mission"));
}

#[tokio::test]
async fn test_retry_twice_sends_identical_requests() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(4, 5, 10)))
        .expect(3)
        .mount(&server)
        .await;

    let controller = controller_for(&server, FetchOrdering::default());
    controller.set_page(4);
    settle(&controller).await;
    controller.retry();
    settle(&controller).await;
    controller.retry();
    settle(&controller).await;

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[1].body, requests[2].body);
    assert_eq!(requests[0].body, requests[1].body);
}

#[tokio::test]
async fn test_decode_failure_becomes_failed_state() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let controller = controller_for(&server, FetchOrdering::default());
    controller.start();
    let snapshot = settle(&controller).await;

    let err = snapshot.state.error().expect("fetch should fail");
    assert!(err.message().starts_with("Failed to decode response"));
}

#[tokio::test]
async fn test_network_failure_becomes_failed_state() {
    // Nothing is listening on this port
    let dead_uri = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}{QUERY_PATH}", listener.local_addr().unwrap())
    };

    let config = ViewerConfig {
        endpoint: dead_uri,
        timeout_secs: 2,
        ..Default::default()
    };
    let controller = PaginationController::new(
        Arc::new(config.provider().unwrap()),
        PaginationParams::first(10),
        FetchOrdering::default(),
    );
    let mut transitions = controller.transitions();
    controller.start();
    let snapshot = settle(&controller).await;

    assert!(snapshot.state.is_failed());
    assert!(snapshot.state.result().is_none());
    assert!(snapshot
        .state
        .error()
        .unwrap()
        .message()
        .starts_with("HTTP request failed"));
    assert!(matches!(transitions.try_recv(), Ok(FetchState::Loading)));
    assert!(matches!(transitions.try_recv(), Ok(FetchState::Failed(_))));
}

#[tokio::test]
async fn test_failure_after_success_clears_result() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .and(body_partial_json(json!({"options": {"page": 1}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(1, 5, 10)))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .and(body_partial_json(json!({"options": {"page": 2}})))
        .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
        .mount(&server)
        .await;

    let controller = controller_for(&server, FetchOrdering::default());
    controller.start();
    assert!(settle(&controller).await.state.is_loaded());

    controller.set_page(2);
    let snapshot = settle(&controller).await;
    assert!(snapshot.state.is_failed());
    assert!(snapshot.state.result().is_none());
    assert!(render_pretty(&snapshot.state).starts_with("Error: "));
}

// ============================================================================
// Overlapping Fetch Tests
// ============================================================================

async fn mount_slow_first_page(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .and(body_partial_json(json!({"options": {"page": 1}})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_body(1, 5, 10))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .and(body_partial_json(json!({"options": {"page": 2}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(2, 5, 10)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_last_resolved_wins_shows_stale_page() {
    let server = MockServer::start().await;
    mount_slow_first_page(&server).await;

    let controller = controller_for(&server, FetchOrdering::LastResolvedWins);
    controller.set_page(1);
    controller.set_page(2);
    let snapshot = settle(&controller).await;

    assert_eq!(snapshot.params.page(), 2);
    assert_eq!(snapshot.state.result().unwrap().current_page, 1);
}

#[tokio::test]
async fn test_latest_wins_shows_requested_page() {
    let server = MockServer::start().await;
    mount_slow_first_page(&server).await;

    let controller = controller_for(&server, FetchOrdering::LatestWins);
    controller.set_page(1);
    controller.set_page(2);
    let snapshot = settle(&controller).await;

    assert_eq!(snapshot.params.page(), 2);
    assert_eq!(snapshot.state.result().unwrap().current_page, 2);
}
