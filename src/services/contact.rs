//! Contact form service.
//!
//! Validates a submitted message, composes the notification email and hands it
//! to the configured [`Mailer`]. Also owns [`ContactForm`], the short-lived
//! form state rendered by the contact section.

use serde::Deserialize;

use super::mailer::{MailError, Mailer, OutgoingEmail, SentEmail};
use crate::config::MailRoute;

const CONTACT_EMAIL_TEMPLATE: &str = include_str!("../../templates/contact_email.html");

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("invalid email address")]
    InvalidEmail,
    #[error("malformed request body: {0}")]
    MalformedBody(String),
}

// =============================================================================
// MESSAGE
// =============================================================================

/// Raw submission, as posted by the browser. Fields may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// A submission with every required field present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Trim each field and require it to be present.
    ///
    /// # Errors
    ///
    /// Returns the first missing field, or `InvalidEmail` when the address has
    /// no usable local/domain parts.
    pub fn validate(submission: &ContactSubmission) -> Result<Self, ContactError> {
        let name = required("name", &submission.name)?;
        let email = required("email", &submission.email)?;
        let message = required("message", &submission.message)?;
        if !is_plausible_email(&email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(Self { name, email, message })
    }

    /// Parse and validate a JSON request body.
    ///
    /// # Errors
    ///
    /// Returns `MalformedBody` for anything that is not a JSON object with
    /// string fields, otherwise the [`ContactMessage::validate`] errors.
    pub fn from_json(body: &[u8]) -> Result<Self, ContactError> {
        let submission: ContactSubmission =
            serde_json::from_slice(body).map_err(|e| ContactError::MalformedBody(e.to_string()))?;
        Self::validate(&submission)
    }
}

fn required(field: &'static str, value: &str) -> Result<String, ContactError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ContactError::MissingField(field));
    }
    Ok(trimmed.to_owned())
}

#[must_use]
pub fn is_plausible_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => !local.is_empty() && !domain.is_empty(),
        _ => false,
    }
}

// =============================================================================
// EMAIL
// =============================================================================

#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[must_use]
pub fn render_contact_email(message: &ContactMessage) -> String {
    let name = escape_html(&message.name);
    let email = escape_html(&message.email);
    let body = escape_html(&message.message).replace("\r\n", "\n").replace('\n', "<br>");
    fill_template(CONTACT_EMAIL_TEMPLATE, |key| match key {
        "NAME" => Some(name.as_str()),
        "EMAIL" => Some(email.as_str()),
        "MESSAGE" => Some(body.as_str()),
        _ => None,
    })
}

/// Expand `{{KEY}}` placeholders in a single left-to-right pass. Inserted
/// values are never scanned again; unknown keys are left as written.
fn fill_template<'a>(template: &str, lookup: impl Fn(&str) -> Option<&'a str>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        let Some(close) = after.find("}}") else {
            rest = &rest[open..];
            break;
        };
        match lookup(&after[..close]) {
            Some(value) => out.push_str(value),
            None => out.push_str(&rest[open..open + 2 + close + 2]),
        }
        rest = &after[close + 2..];
    }
    out.push_str(rest);
    out
}

#[must_use]
pub fn compose_email(route: &MailRoute, message: &ContactMessage) -> OutgoingEmail {
    OutgoingEmail {
        from: route.from.clone(),
        to: route.to.clone(),
        subject: format!("New Message from {}", message.name),
        html: render_contact_email(message),
    }
}

/// Send one contact message. `mailer` is `None` when the relay is disabled.
///
/// # Errors
///
/// `NotConfigured` without a mailer, otherwise whatever the provider reports.
pub async fn relay(
    mailer: Option<&dyn Mailer>,
    route: &MailRoute,
    message: &ContactMessage,
) -> Result<SentEmail, MailError> {
    let Some(mailer) = mailer else {
        return Err(MailError::NotConfigured);
    };
    let sent = mailer.send(compose_email(route, message)).await?;
    tracing::info!(sender = %message.name, email_id = %sent.id, "contact message relayed");
    Ok(sent)
}

// =============================================================================
// FORM STATE
// =============================================================================

/// How a submission attempt ended, from the form's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The relay answered OK.
    Sent,
    /// The relay answered with a non-OK status.
    Rejected,
    /// The request never got an answer.
    Unreachable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Sent,
    Failed,
    Errored,
}

impl FormStatus {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Sent => "Message sent successfully!",
            Self::Failed => "Failed to send message. Please try again.",
            Self::Errored => "An error occurred. Please try again.",
        }
    }

    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, Self::Sent)
    }
}

/// Contact form fields plus submission state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitting: bool,
    pub status: Option<FormStatus>,
}

impl ContactForm {
    #[must_use]
    pub fn from_submission(submission: ContactSubmission) -> Self {
        Self {
            name: submission.name,
            email: submission.email,
            message: submission.message,
            ..Self::default()
        }
    }

    /// Start a submission. Returns `None` while another one is in flight.
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        self.status = None;
        Some(ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    /// Settle the in-flight submission. Fields are cleared only on success.
    pub fn finish(&mut self, outcome: SubmitOutcome) {
        self.submitting = false;
        let status = match outcome {
            SubmitOutcome::Sent => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                FormStatus::Sent
            }
            SubmitOutcome::Rejected => FormStatus::Failed,
            SubmitOutcome::Unreachable => FormStatus::Errored,
        };
        self.status = Some(status);
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.submitting { "Sending..." } else { "Send Message" }
    }
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
