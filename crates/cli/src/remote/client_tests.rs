// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::*;
use crate::remote::test_server::TestServer;
use yare::parameterized;

fn client(url: &str) -> RestClient {
    RestClient::new(url, "anon-key", Duration::from_secs(5)).unwrap()
}

#[test]
fn parse_receipt_reads_first_row() {
    let receipt =
        parse_receipt(r#"[{"commit_id": 42, "item_id": 101, "delta": 5}, {"commit_id": 43}]"#)
            .unwrap();
    assert_eq!(receipt.commit_id, 42);
}

#[parameterized(
    empty_array = { "[]" },
    object_not_array = { r#"{"commit_id": 1}"# },
    missing_commit_id = { r#"[{"id": 1}]"# },
    not_json = { "ok" },
)]
fn parse_receipt_rejects(body: &str) {
    assert!(matches!(
        parse_receipt(body),
        Err(RemoteError::InvalidResponse(_))
    ));
}

#[test]
fn new_rejects_unparseable_url() {
    let err = RestClient::new("not a url", "k", Duration::from_secs(1)).unwrap_err();
    assert!(matches!(err, RemoteError::InvalidUrl(_)));
}

#[test]
fn new_trims_trailing_slash() {
    let client = client("https://example.supabase.co/");
    assert_eq!(
        client.rest_url("commits"),
        "https://example.supabase.co/rest/v1/commits"
    );
}

#[test]
fn debug_hides_api_key() {
    let rendered = format!("{:?}", client("https://example.com"));
    assert!(!rendered.contains("anon-key"));
}

#[tokio::test]
async fn insert_commit_posts_record_and_returns_receipt() {
    let server = TestServer::start(vec![(201, r#"[{"commit_id": 7}]"#)]).await;
    let commit = Commit::new("TOUGHPAD01", "A1", 5, 101);

    let receipt = client(&server.url).insert_commit(&commit).await.unwrap();
    assert_eq!(receipt.commit_id, 7);

    let request = server.requests().pop().unwrap();
    let lower = request.to_lowercase();
    assert!(request.starts_with("POST /rest/v1/commits "));
    assert!(lower.contains("apikey: anon-key"));
    assert!(lower.contains("authorization: bearer anon-key"));
    assert!(lower.contains("prefer: return=representation"));

    let body = request.split("\r\n\r\n").nth(1).unwrap();
    let sent: Commit = serde_json::from_str(body).unwrap();
    assert_eq!(sent, commit);
}

#[tokio::test]
async fn insert_commit_rejected_status_is_error() {
    let server = TestServer::start(vec![(409, r#"{"message":"foreign key violation"}"#)]).await;
    let commit = Commit::new("TOUGHPAD01", "A1", 5, 999);

    match client(&server.url).insert_commit(&commit).await {
        Err(RemoteError::Status { status, body }) => {
            assert_eq!(status, 409);
            assert!(body.contains("foreign key"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn insert_commit_unreachable_is_http_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let commit = Commit::new("TOUGHPAD01", "A1", 5, 101);
    let err = client(&url).insert_commit(&commit).await.unwrap_err();
    assert!(matches!(err, RemoteError::Http(_)));
}

#[tokio::test]
async fn fetch_items_and_locations() {
    let server = TestServer::start(vec![
        (200, r#"[{"id": 101, "name": "Widget"}, {"id": 102, "name": "Gasket"}]"#),
        (200, r#"[{"location": "A1", "items": [101, 102]}]"#),
    ])
    .await;
    let client = client(&server.url);

    let items = client.fetch_items().await.unwrap();
    let locations = client.fetch_locations().await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "Widget");
    assert_eq!(locations[0].items, vec![101, 102]);

    let requests = server.requests();
    assert!(requests[0].starts_with("GET /rest/v1/items "));
    assert!(requests[1].starts_with("GET /rest/v1/locations "));
}

#[tokio::test]
async fn fetch_items_malformed_body_is_invalid_response() {
    let server = TestServer::start(vec![(200, r#"{"not": "rows"}"#)]).await;

    let err = client(&server.url).fetch_items().await.unwrap_err();
    assert!(matches!(err, RemoteError::InvalidResponse(_)));
}

#[tokio::test]
async fn fetch_commit_filters_by_id() {
    let server = TestServer::start(vec![(
        200,
        r#"[{"commit_id": 42, "device_id": "TOUGHPAD01", "location": "A1", "delta": 5, "item_id": 101}]"#,
    )])
    .await;

    let recorded = client(&server.url).fetch_commit(42).await.unwrap().unwrap();
    assert_eq!(recorded.commit_id, 42);
    assert_eq!(recorded.commit, Commit::new("TOUGHPAD01", "A1", 5, 101));

    let request = server.requests().pop().unwrap();
    assert!(request.starts_with("GET /rest/v1/commits?commit_id=eq.42 "), "{}", request);
}

#[tokio::test]
async fn fetch_commit_without_rows_is_none() {
    let server = TestServer::start(vec![(200, "[]")]).await;

    assert!(client(&server.url).fetch_commit(9).await.unwrap().is_none());
}

#[tokio::test]
async fn fetch_overview_reads_stock_levels() {
    let server = TestServer::start(vec![
        (
            200,
            r#"[{"location": "A1", "item_id": 101, "current_qty": 12}, {"location": "B7", "item_id": 7, "current_qty": 0}]"#,
        ),
        (200, r#"[{"location": "A1", "item_id": 101, "current_qty": 12}]"#),
    ])
    .await;
    let client = client(&server.url);

    let all = client.fetch_overview(None).await.unwrap();
    let at_a1 = client.fetch_overview(Some("A1")).await.unwrap();

    assert_eq!(all.len(), 2);
    assert_eq!(all[1].current_qty, 0);
    assert_eq!(at_a1[0].item_id, 101);

    let requests = server.requests();
    assert!(requests[0].starts_with("GET /rest/v1/overview "), "{}", requests[0]);
    assert!(
        requests[1].starts_with("GET /rest/v1/overview?location=eq.A1 "),
        "{}",
        requests[1]
    );
}

#[tokio::test]
async fn fetch_overview_error_status() {
    let server = TestServer::start(vec![(404, r#"{"message":"relation does not exist"}"#)]).await;

    let err = client(&server.url).fetch_overview(None).await.unwrap_err();
    assert!(matches!(err, RemoteError::Status { status: 404, .. }));
}
