//! HTTP boundary: `/search` responses and the static fallback.

#![cfg(feature = "server")]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use shakesearch::server::{create_router, ENCODING_FAILURE, MISSING_QUERY};
use shakesearch::Snippet;
use tempfile::TempDir;
use tower::ServiceExt;

use super::common::searcher;

struct TestApp {
    router: Router,
    // Keeps the static directory alive for the duration of the test
    _static_dir: TempDir,
}

fn app() -> TestApp {
    let static_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        static_dir.path().join("index.html"),
        "<!doctype html><title>shakesearch</title>",
    )
    .unwrap();
    let router = create_router(
        Arc::new(searcher("to be or not to be")),
        static_dir.path(),
    );
    TestApp {
        router,
        _static_dir: static_dir,
    }
}

async fn get(app: &TestApp, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app
        .router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
    (status, content_type, body)
}

#[tokio::test]
async fn search_returns_json_array_of_strings() {
    let app = app();
    let (status, content_type, body) = get(&app, "/search?q=to").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    let results: Vec<String> = serde_json::from_slice(&body).unwrap();
    assert_eq!(results, vec!["to be o", "r not to be"]);
}

#[tokio::test]
async fn search_is_case_insensitive_over_http() {
    let app = app();
    let (_, _, lower) = get(&app, "/search?q=be").await;
    let (_, _, upper) = get(&app, "/search?q=BE").await;
    assert_eq!(lower, upper);
}

#[tokio::test]
async fn query_is_percent_decoded() {
    let app = app();
    let (status, _, body) = get(&app, "/search?q=not%20to").await;
    assert_eq!(status, StatusCode::OK);
    let results: Vec<String> = serde_json::from_slice(&body).unwrap();
    assert_eq!(results, vec!["to be or not to be"]);
}

#[tokio::test]
async fn no_match_is_an_empty_array() {
    let app = app();
    let (status, _, body) = get(&app, "/search?q=xyz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"[]");
}

#[tokio::test]
async fn missing_query_is_bad_request() {
    let app = app();
    let (status, _, body) = get(&app, "/search").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, MISSING_QUERY.as_bytes());
    assert_ne!(body, ENCODING_FAILURE.as_bytes());
}

#[tokio::test]
async fn empty_query_is_bad_request() {
    let app = app();
    let (status, _, body) = get(&app, "/search?q=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, MISSING_QUERY.as_bytes());
}

#[tokio::test]
async fn detail_returns_snippet_objects() {
    let app = app();
    let (status, _, body) = get(&app, "/search?q=be&detail=true").await;
    assert_eq!(status, StatusCode::OK);
    let snippets: Vec<Snippet> = serde_json::from_slice(&body).unwrap();
    let offsets: Vec<usize> = snippets.iter().map(|s| s.offset).collect();
    assert_eq!(offsets, vec![3, 16]);
    assert_eq!(snippets[0].text, "to be or n");
    assert_eq!(snippets[1].text, "ot to be");
}

#[tokio::test]
async fn root_serves_static_index() {
    let app = app();
    let (status, _, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body).unwrap().contains("<title>shakesearch</title>"));
}

#[tokio::test]
async fn unknown_static_path_is_not_found() {
    let app = app();
    let (status, _, _) = get(&app, "/missing.css").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
