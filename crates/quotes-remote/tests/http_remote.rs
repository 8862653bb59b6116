//! HttpRemoteSource against a local axum server.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use quotes_core::error::TransportErrorKind;
use quotes_core::traits::RemoteSource;
use quotes_core::types::Quote;
use quotes_remote::{HttpRemoteConfig, HttpRemoteSource};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;

type Received = Arc<Mutex<Vec<Value>>>;

async fn list_posts() -> Json<Value> {
    let posts: Vec<Value> = (1..=8)
        .map(|id| json!({"userId": 1, "id": id, "title": format!("title {}", id), "body": "..."}))
        .collect();
    Json(Value::Array(posts))
}

async fn create_post(
    State(received): State<Received>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    received.lock().unwrap().push(body);
    (StatusCode::CREATED, Json(json!({"id": 101})))
}

async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "boom")
}

async fn slow() -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(3)).await;
    Json(json!([]))
}

async fn garbage() -> &'static str {
    "definitely not json"
}

async fn spawn_server() -> (String, Received) {
    let received: Received = Arc::default();
    let app = Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/broken", get(broken).post(broken))
        .route("/slow", get(slow))
        .route("/garbage", get(garbage))
        .with_state(received.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), received)
}

fn source(base: &str, path: &str) -> HttpRemoteSource {
    HttpRemoteSource::new(
        HttpRemoteConfig::new(format!("{}{}", base, path)).with_timeout(Duration::from_millis(500)),
    )
    .unwrap()
}

#[tokio::test]
async fn test_list_remote_projects_and_truncates() {
    let (base, _) = spawn_server().await;
    let quotes = source(&base, "/posts").list_remote().await.unwrap();

    assert_eq!(quotes.len(), 5);
    assert_eq!(quotes[0], Quote::new("title 1", "Server").unwrap());
    assert_eq!(quotes[4].text, "title 5");
}

#[tokio::test]
async fn test_submit_one_posts_json_body() {
    let (base, received) = spawn_server().await;
    let quote = Quote::new("New idea", "Wisdom").unwrap();

    source(&base, "/posts").submit_one(&quote).await.unwrap();

    let bodies = received.lock().unwrap().clone();
    assert_eq!(bodies, vec![json!({"text": "New idea", "category": "Wisdom"})]);
}

#[tokio::test]
async fn test_non_success_status() {
    let (base, _) = spawn_server().await;
    let remote = source(&base, "/broken");

    let err = remote.list_remote().await.unwrap_err();
    assert_eq!(err.kind(), TransportErrorKind::Status);

    let quote = Quote::new("A", "X").unwrap();
    let err = remote.submit_one(&quote).await.unwrap_err();
    assert_eq!(err.kind(), TransportErrorKind::Status);
}

#[tokio::test]
async fn test_slow_endpoint_times_out() {
    let (base, _) = spawn_server().await;
    let err = source(&base, "/slow").list_remote().await.unwrap_err();
    assert_eq!(err.kind(), TransportErrorKind::Timeout);
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let (base, _) = spawn_server().await;
    let err = source(&base, "/garbage").list_remote().await.unwrap_err();
    assert_eq!(err.kind(), TransportErrorKind::Decode);
}
