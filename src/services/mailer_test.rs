use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Json, Response};
use axum::routing::post;
use axum::Router;
use serde_json::{Value, json};
use tokio::sync::Mutex;

use super::*;

/// How the fake provider answers `POST /emails`.
#[derive(Clone, Copy)]
enum Reply {
    Accept,
    Reject,
    Gateway,
}

#[derive(Clone)]
struct FakeProvider {
    reply: Reply,
    requests: Arc<Mutex<Vec<(Option<String>, Value)>>>,
}

async fn emails(State(provider): State<FakeProvider>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    let auth = headers.get("authorization").and_then(|v| v.to_str().ok()).map(str::to_owned);
    provider.requests.lock().await.push((auth, body));
    match provider.reply {
        Reply::Accept => Json(json!({ "id": "49a3999c-0ce1-4ea6-ab68-afcd6dc2e794" })).into_response(),
        Reply::Reject => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "statusCode": 422, "message": "Invalid `from` field.", "name": "validation_error" })),
        )
            .into_response(),
        Reply::Gateway => (StatusCode::BAD_GATEWAY, Html("<html><body>502 Bad Gateway</body></html>")).into_response(),
    }
}

/// Serve a stand-in for the provider API on an ephemeral port.
async fn spawn_provider(reply: Reply) -> (SocketAddr, FakeProvider) {
    let provider = FakeProvider { reply, requests: Arc::default() };
    let app = Router::new().route("/emails", post(emails)).with_state(provider.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, provider)
}

fn mailer_for(addr: SocketAddr) -> Arc<dyn Mailer> {
    let base_url = Url::parse(&format!("http://{addr}")).unwrap();
    Arc::new(ResendMailer::new("re_test_key", base_url))
}

fn email() -> OutgoingEmail {
    OutgoingEmail {
        from: "Site <site@example.test>".into(),
        to: vec!["owner@example.test".into()],
        subject: "New Message from Ada".into(),
        html: "<p>Hello</p>".into(),
    }
}

#[test]
fn mail_error_messages() {
    assert_eq!(MailError::NotConfigured.to_string(), "email relay not configured");
    let provider = ProviderError { status_code: 422, message: "Invalid `to` field.".into(), name: "validation_error".into() };
    assert_eq!(
        MailError::Provider(provider).to_string(),
        "email provider rejected the message: validation_error: Invalid `to` field."
    );
    assert_eq!(MailError::Transport("timed out".into()).to_string(), "email transport failed: timed out");
}

#[test]
fn provider_error_serializes_like_provider_body() {
    let provider = ProviderError { status_code: 403, message: "API key is invalid".into(), name: "invalid_api_key".into() };
    assert_eq!(
        serde_json::to_value(&provider).unwrap(),
        json!({ "statusCode": 403, "message": "API key is invalid", "name": "invalid_api_key" })
    );
}

#[test]
fn sent_email_serializes_like_provider_payload() {
    let sent = SentEmail { id: "49a3999c-0ce1-4ea6-ab68-afcd6dc2e794".into() };
    let json = serde_json::to_value(&sent).unwrap();
    assert_eq!(json, json!({ "id": "49a3999c-0ce1-4ea6-ab68-afcd6dc2e794" }));
}

#[tokio::test]
async fn resend_mailer_posts_message_and_returns_id() {
    let (addr, provider) = spawn_provider(Reply::Accept).await;

    let sent = mailer_for(addr).send(email()).await.unwrap();
    assert_eq!(sent.id, "49a3999c-0ce1-4ea6-ab68-afcd6dc2e794");

    let requests = provider.requests.lock().await;
    assert_eq!(requests.len(), 1);
    let (auth, body) = &requests[0];
    assert_eq!(auth.as_deref(), Some("Bearer re_test_key"));
    assert_eq!(body["from"], "Site <site@example.test>");
    assert_eq!(body["to"], json!(["owner@example.test"]));
    assert_eq!(body["subject"], "New Message from Ada");
    assert_eq!(body["html"], "<p>Hello</p>");
}

#[tokio::test]
async fn resend_mailer_keeps_provider_error_body() {
    let (addr, _) = spawn_provider(Reply::Reject).await;

    let err = mailer_for(addr).send(email()).await.unwrap_err();
    assert_eq!(
        err,
        MailError::Provider(ProviderError {
            status_code: 422,
            message: "Invalid `from` field.".into(),
            name: "validation_error".into(),
        })
    );
}

#[tokio::test]
async fn resend_mailer_reports_unreadable_answers_as_transport() {
    let (addr, _) = spawn_provider(Reply::Gateway).await;

    let err = mailer_for(addr).send(email()).await.unwrap_err();
    assert!(matches!(err, MailError::Transport(ref details) if details.contains("502 Bad Gateway")), "{err:?}");
}

#[tokio::test]
async fn resend_mailer_reports_unreachable_provider_as_transport() {
    let base_url = Url::parse("http://127.0.0.1:1").unwrap();
    let mailer = ResendMailer::new("re_test_key", base_url);

    let err = mailer.send(email()).await.unwrap_err();
    assert!(matches!(err, MailError::Transport(_)), "{err:?}");
}
