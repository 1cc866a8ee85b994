//! HTTP helper behaviour against a local stub server

use osint_utils::config::HttpConfig;
use osint_utils::http::{HttpClient, HttpOutcome};
use serde_json::json;

use crate::common::{closed_port_url, spawn_stub_server};

fn client() -> HttpClient {
    let config = HttpConfig {
        timeout_seconds: 5,
        ..HttpConfig::default()
    };
    HttpClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_get_success() {
    let (base, server) = spawn_stub_server(200, r#"{"ip": "8.8.8.8"}"#).await;

    let outcome = client()
        .get(&format!("{}/lookup", base), &[("q", "8.8.8.8")])
        .await;
    let request = server.await.unwrap();

    assert!(outcome.is_success());
    let resp = outcome.into_response().unwrap();
    assert_eq!(resp.status, 200);
    let value: serde_json::Value = resp.json().unwrap();
    assert_eq!(value["ip"], "8.8.8.8");

    assert_eq!(request.request_line, "GET /lookup?q=8.8.8.8 HTTP/1.1");
    assert!(request
        .headers
        .to_lowercase()
        .contains("user-agent: osint-utils/"));
}

#[tokio::test]
async fn test_non_200_keeps_response() {
    let (base, server) = spawn_stub_server(404, r#"{"error": "not found"}"#).await;

    let outcome = client().get(&base, &[]).await;
    server.await.unwrap();

    assert!(!outcome.is_success());
    match outcome {
        HttpOutcome::Status(resp) => {
            assert_eq!(resp.status, 404);
            assert!(resp.body.contains("not found"));
        }
        other => panic!("expected Status outcome, got {:?}", other),
    }
}

#[tokio::test]
async fn test_post_json_sends_body() {
    let (base, server) = spawn_stub_server(200, "{}").await;

    let outcome = client()
        .post_json(&format!("{}/submit", base), &json!({"indicator": "example.com"}))
        .await;
    let request = server.await.unwrap();

    assert!(outcome.is_success());
    assert!(request.request_line.starts_with("POST /submit "));
    let sent: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(sent["indicator"], "example.com");
}

#[tokio::test]
async fn test_post_raw_sends_body() {
    let (base, server) = spawn_stub_server(201, "created").await;

    let outcome = client().post_raw(&base, "plain body").await;
    let request = server.await.unwrap();

    assert!(matches!(outcome, HttpOutcome::Status(ref r) if r.status == 201));
    assert_eq!(request.body, "plain body");
}

#[tokio::test]
async fn test_connection_refused_is_failed() {
    let url = closed_port_url().await;
    let outcome = client().get(&url, &[]).await;

    assert!(matches!(outcome, HttpOutcome::Failed(_)));
    assert!(outcome.response().is_none());
}
