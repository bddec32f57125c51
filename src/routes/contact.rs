//! Contact relay routes.
//!
//! `POST /api/send` is what `contact.js` calls. `POST /contact` is the plain
//! HTML form fallback and answers with the re-rendered page.

use axum::body::Bytes;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use serde_json::json;

use crate::pages::render_home;
use crate::routes::pages::current_year;
use crate::services::contact::{self, ContactForm, ContactMessage, ContactSubmission, SubmitOutcome};
use crate::services::mailer::MailError;
use crate::state::AppState;

/// `POST /api/send`: relay one message and return the provider payload.
pub async fn send(State(state): State<AppState>, body: Bytes) -> Response {
    let message = match ContactMessage::from_json(&body) {
        Ok(message) => message,
        Err(e) => {
            tracing::error!(error = %e, "contact request rejected");
            return internal_error(&e.to_string());
        }
    };

    match contact::relay(state.mailer(), &state.config.mail, &message).await {
        Ok(sent) => Json(sent).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "contact relay failed");
            mail_error_response(e)
        }
    }
}

/// `POST /contact`: form-encoded fallback for browsers without scripts.
pub async fn submit_form(State(state): State<AppState>, Form(submission): Form<ContactSubmission>) -> Response {
    let mut form = ContactForm::from_submission(submission);
    let outcome = match form.begin_submit() {
        Some(pending) => deliver(&state, &pending).await,
        None => SubmitOutcome::Rejected,
    };
    form.finish(outcome);

    let status = if outcome == SubmitOutcome::Sent { StatusCode::OK } else { StatusCode::INTERNAL_SERVER_ERROR };
    (status, Html(render_home(&form, current_year()))).into_response()
}

async fn deliver(state: &AppState, submission: &ContactSubmission) -> SubmitOutcome {
    let message = match ContactMessage::validate(submission) {
        Ok(message) => message,
        Err(e) => {
            tracing::warn!(error = %e, "contact form rejected");
            return SubmitOutcome::Rejected;
        }
    };
    match contact::relay(state.mailer(), &state.config.mail, &message).await {
        Ok(_) => SubmitOutcome::Sent,
        Err(e) => {
            tracing::error!(error = %e, "contact relay failed");
            SubmitOutcome::Rejected
        }
    }
}

/// Provider failures pass the provider's error body through; anything else is
/// the generic server error.
pub(crate) fn mail_error_response(err: MailError) -> Response {
    match err {
        MailError::Provider(body) => (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": body }))).into_response(),
        other @ (MailError::NotConfigured | MailError::Transport(_)) => internal_error(&other.to_string()),
    }
}

pub(crate) fn internal_error(details: &str) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "Internal Server Error", "details": details })))
        .into_response()
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
