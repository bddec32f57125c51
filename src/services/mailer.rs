//! Outbound email delivery.
//!
//! DESIGN
//! ======
//! Route handlers talk to a `dyn Mailer` so tests can swap in a fake provider.
//! The production implementation is a thin wrapper over the Resend client;
//! one call per message, no retry.

use resend_rs::types::{CreateEmailBaseOptions, ErrorResponse};
use resend_rs::{ConfigBuilder, Resend};
use serde::Serialize;
use url::Url;

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum MailError {
    /// No provider credentials were configured at startup.
    #[error("email relay not configured")]
    NotConfigured,
    /// The provider answered with an error body.
    #[error("email provider rejected the message: {0}")]
    Provider(ProviderError),
    /// The provider could not be reached or its answer could not be read.
    #[error("email transport failed: {0}")]
    Transport(String),
}

/// Error body reported by the provider, passed through to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error("{name}: {message}")]
pub struct ProviderError {
    pub status_code: u16,
    pub message: String,
    pub name: String,
}

impl From<ErrorResponse> for ProviderError {
    fn from(err: ErrorResponse) -> Self {
        Self { status_code: err.status_code, message: err.message, name: err.name }
    }
}

impl From<resend_rs::Error> for MailError {
    fn from(err: resend_rs::Error) -> Self {
        match err {
            resend_rs::Error::Resend(body) => Self::Provider(body.into()),
            other => Self::Transport(other.to_string()),
        }
    }
}

// =============================================================================
// TYPES
// =============================================================================

/// A fully composed message ready for the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

/// Provider acknowledgement, returned verbatim to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentEmail {
    pub id: String,
}

#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<SentEmail, MailError>;
}

// =============================================================================
// RESEND
// =============================================================================

pub struct ResendMailer {
    client: Resend,
}

impl ResendMailer {
    /// Client for the API rooted at `base_url`. The URL is passed explicitly so
    /// the client never falls back to parsing `RESEND_BASE_URL` on its own.
    #[must_use]
    pub fn new(api_key: &str, base_url: Url) -> Self {
        let config = ConfigBuilder::new(api_key).base_url(base_url).build();
        Self { client: Resend::with_config(config) }
    }
}

#[async_trait::async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<SentEmail, MailError> {
        let options = CreateEmailBaseOptions::new(email.from.as_str(), email.to.iter().map(String::as_str), email.subject.as_str())
            .with_html(&email.html);

        let response = self.client.emails.send(options).await?;

        Ok(SentEmail { id: response.id.to_string() })
    }
}

#[cfg(test)]
#[path = "mailer_test.rs"]
mod tests;
