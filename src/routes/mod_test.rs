use std::net::SocketAddr;
use std::sync::Arc;

use serde_json::{Value, json};

use super::*;
use crate::services::mailer::Mailer;
use crate::state::test_helpers::{RecordingMailer, test_app_state};

/// Serve the full router on an ephemeral port.
async fn spawn_app(state: AppState) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app(state)).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn serves_site_end_to_end() {
    let mailer = Arc::new(RecordingMailer::default());
    let state = test_app_state(Some(mailer.clone() as Arc<dyn Mailer>)).unwrap();
    let base = format!("http://{}", spawn_app(state).await);
    let client = reqwest::Client::new();

    let health = client.get(format!("{base}/healthz")).send().await.unwrap();
    assert_eq!(health.status(), reqwest::StatusCode::OK);

    let page = client.get(format!("{base}/")).send().await.unwrap();
    assert_eq!(page.status(), reqwest::StatusCode::OK);
    let content_type = page.headers()["content-type"].to_str().unwrap().to_owned();
    assert!(content_type.starts_with("text/html"), "{content_type}");
    let html = page.text().await.unwrap();
    assert!(html.contains("id=\"contact\""));

    let sent = client
        .post(format!("{base}/api/send"))
        .json(&json!({ "name": "Ada", "email": "ada@example.com", "message": "Hello" }))
        .send()
        .await
        .unwrap();
    assert_eq!(sent.status(), reqwest::StatusCode::OK);
    let body: Value = sent.json().await.unwrap();
    assert_eq!(body["id"], "test-email-1");
    assert_eq!(mailer.sent().await.len(), 1);

    let globe = client.get(format!("{base}/api/scene/globe")).send().await.unwrap();
    assert_eq!(globe.status(), reqwest::StatusCode::OK);
    let globe: Value = globe.json().await.unwrap();
    assert!(globe["camera"]["position"].is_object());
}

#[tokio::test]
async fn serves_static_assets() {
    let state = test_app_state(None).unwrap();
    let base = format!("http://{}", spawn_app(state).await);

    let css = reqwest::get(format!("{base}/assets/site.css")).await.unwrap();
    assert_eq!(css.status(), reqwest::StatusCode::OK);

    let missing = reqwest::get(format!("{base}/assets/nope.txt")).await.unwrap();
    assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn form_fallback_posts_urlencoded() {
    let mailer = Arc::new(RecordingMailer::default());
    let state = test_app_state(Some(mailer.clone() as Arc<dyn Mailer>)).unwrap();
    let base = format!("http://{}", spawn_app(state).await);

    let resp = reqwest::Client::new()
        .post(format!("{base}/contact"))
        .header("content-type", "application/x-www-form-urlencoded")
        .body("name=Ada&email=ada%40example.com&message=Hi+there")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert!(resp.text().await.unwrap().contains("Message sent successfully!"));

    let outbox = mailer.sent().await;
    assert_eq!(outbox.len(), 1);
    assert!(outbox[0].html.contains("Hi there"));
}

#[tokio::test]
async fn unknown_route_is_404() {
    let state = test_app_state(None).unwrap();
    let base = format!("http://{}", spawn_app(state).await);
    let resp = reqwest::get(format!("{base}/nope")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
}
