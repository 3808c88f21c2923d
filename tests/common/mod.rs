//! Shared test plumbing: a local echo server standing in for the Reddit API.
//!
//! Every integration test drives the client through
//! [`RedditClient::with_http_client`] against an axum router bound to an
//! ephemeral port, so the full request construction, transport, validation
//! and decode path runs without touching the network.

use std::net::SocketAddr;

use axum::extract::RawQuery;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use snoo::RedditClient;

pub fn init_test_logging() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Routes used across the test suite.
///
/// - `/echo` reflects the query string, body and identifying headers back
///   as JSON, for both GET and POST.
/// - `/object` answers `200 {"a":1}`.
/// - `/empty` answers `200` with an empty body.
/// - `/missing` answers `404` with a JSON body.
pub fn echo_router() -> Router {
    Router::new()
        .route("/echo", get(echo_get).post(echo_post))
        .route("/object", get(object))
        .route("/empty", get(empty))
        .route("/missing", get(missing))
}

async fn echo_get(RawQuery(query): RawQuery, headers: HeaderMap) -> Json<Value> {
    Json(json!({
        "query": query,
        "user_agent": header(&headers, "user-agent"),
        "has_authorization": headers.contains_key("authorization"),
    }))
}

async fn echo_post(headers: HeaderMap, body: String) -> Json<Value> {
    Json(json!({
        "body": body,
        "content_type": header(&headers, "content-type"),
        "user_agent": header(&headers, "user-agent"),
        "has_authorization": headers.contains_key("authorization"),
    }))
}

async fn object() -> Json<Value> {
    Json(json!({ "a": 1 }))
}

async fn empty() -> &'static str {
    ""
}

async fn missing() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "nothing here" })))
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// Binds the echo router on an ephemeral port and returns its base URL.
pub async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr: SocketAddr = listener.local_addr().expect("listener has no local addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server exited");
    });

    format!("http://{addr}")
}

/// A client wired to a fresh echo server.
pub async fn spawn_client() -> RedditClient {
    let base_url = spawn_server(echo_router()).await;
    RedditClient::with_http_client(reqwest::Client::new(), base_url)
}
