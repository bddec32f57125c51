use std::sync::Arc;

use axum::body::to_bytes;
use serde_json::Value;

use super::*;
use crate::services::mailer::{Mailer, ProviderError};
use crate::state::test_helpers::{FailingMailer, RecordingMailer, test_app_state};

const VALID_BODY: &str = r#"{"name":"Ada","email":"ada@example.com","message":"Hello"}"#;

async fn json_body(resp: Response) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn text_body(resp: Response) -> (StatusCode, String) {
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn form(name: &str, email: &str, message: &str) -> Form<ContactSubmission> {
    Form(ContactSubmission { name: name.into(), email: email.into(), message: message.into() })
}

// --- /api/send ---

#[tokio::test]
async fn send_returns_provider_payload() {
    let mailer = Arc::new(RecordingMailer::default());
    let state = test_app_state(Some(mailer.clone() as Arc<dyn Mailer>)).unwrap();

    let (status, body) = json_body(send(State(state), Bytes::from_static(VALID_BODY.as_bytes())).await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": "test-email-1" }));

    let outbox = mailer.sent().await;
    assert_eq!(outbox.len(), 1);
    assert_eq!(outbox[0].to, vec!["owner@example.test".to_owned()]);
    assert_eq!(outbox[0].subject, "New Message from Ada");
}

#[tokio::test]
async fn send_reports_provider_error() {
    let mailer: Arc<dyn Mailer> = Arc::new(FailingMailer::rejecting("Invalid `to` field."));
    let state = test_app_state(Some(mailer)).unwrap();

    let (status, body) = json_body(send(State(state), Bytes::from_static(VALID_BODY.as_bytes())).await).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "error": { "statusCode": 422, "message": "Invalid `to` field.", "name": "validation_error" } })
    );
}

#[tokio::test]
async fn send_transport_failure_is_generic_error() {
    let mailer: Arc<dyn Mailer> = Arc::new(FailingMailer::unreachable("connection refused"));
    let state = test_app_state(Some(mailer)).unwrap();

    let (status, body) = json_body(send(State(state), Bytes::from_static(VALID_BODY.as_bytes())).await).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "error": "Internal Server Error", "details": "email transport failed: connection refused" })
    );
}

#[tokio::test]
async fn send_without_relay_is_generic_error() {
    let state = test_app_state(None).unwrap();
    let (status, body) = json_body(send(State(state), Bytes::from_static(VALID_BODY.as_bytes())).await).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal Server Error");
    assert_eq!(body["details"], "email relay not configured");
}

#[tokio::test]
async fn send_rejects_malformed_and_incomplete_bodies() {
    let mailer = Arc::new(RecordingMailer::default());
    let state = test_app_state(Some(mailer.clone() as Arc<dyn Mailer>)).unwrap();

    for raw in ["{", r#"{"name":"Ada","email":"ada@example.com"}"#, r#"{"name":" ","email":"a@b","message":"x"}"#] {
        let (status, body) = json_body(send(State(state.clone()), Bytes::from(raw.to_owned())).await).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{raw}");
        assert_eq!(body["error"], "Internal Server Error");
        assert!(body["details"].is_string());
    }
    assert!(mailer.sent().await.is_empty());
}

// --- /contact ---

#[tokio::test]
async fn form_success_renders_status_and_clears_fields() {
    let mailer = Arc::new(RecordingMailer::default());
    let state = test_app_state(Some(mailer.clone() as Arc<dyn Mailer>)).unwrap();

    let resp = submit_form(State(state), form("Grace Hopper", "grace@example.com", "Hi")).await;
    let (status, html) = text_body(resp).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Message sent successfully!"));
    assert!(!html.contains("Grace Hopper"));
    assert_eq!(mailer.sent().await.len(), 1);
}

#[tokio::test]
async fn form_failure_preserves_fields() {
    let mailer: Arc<dyn Mailer> = Arc::new(FailingMailer::unreachable("down"));
    let state = test_app_state(Some(mailer)).unwrap();

    let resp = submit_form(State(state), form("Grace Hopper", "grace@example.com", "Hi")).await;
    let (status, html) = text_body(resp).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(html.contains("Failed to send message. Please try again."));
    assert!(html.contains("Grace Hopper"));
}

#[tokio::test]
async fn form_validation_failure_never_reaches_mailer() {
    let mailer = Arc::new(RecordingMailer::default());
    let state = test_app_state(Some(mailer.clone() as Arc<dyn Mailer>)).unwrap();

    let resp = submit_form(State(state), form("Grace Hopper", "not-an-email", "Hi")).await;
    let (status, html) = text_body(resp).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(html.contains("not-an-email"));
    assert!(mailer.sent().await.is_empty());
}

// --- error mapping ---

#[tokio::test]
async fn mail_errors_map_to_bodies() {
    let provider = ProviderError { status_code: 403, message: "API key is invalid".into(), name: "invalid_api_key".into() };
    let (status, body) = json_body(mail_error_response(MailError::Provider(provider))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": { "statusCode": 403, "message": "API key is invalid", "name": "invalid_api_key" } }));

    let (status, body) = json_body(mail_error_response(MailError::Transport("timed out".into()))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal Server Error", "details": "email transport failed: timed out" }));

    let (_, body) = json_body(mail_error_response(MailError::NotConfigured)).await;
    assert_eq!(body, json!({ "error": "Internal Server Error", "details": "email relay not configured" }));
}
