//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Everything in it is built once at startup and never mutated: the parsed
//! config, the optional mail provider, and the pre-generated scenes.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::scene::SceneSet;
use crate::services::mailer::Mailer;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    /// `None` if `RESEND_API_KEY` is not configured.
    pub mailer: Option<Arc<dyn Mailer>>,
    pub scenes: Arc<SceneSet>,
}

impl AppState {
    #[must_use]
    pub fn new(config: SiteConfig, mailer: Option<Arc<dyn Mailer>>, scenes: SceneSet) -> Self {
        Self { config: Arc::new(config), mailer, scenes: Arc::new(scenes) }
    }

    #[must_use]
    pub fn mailer(&self) -> Option<&dyn Mailer> {
        self.mailer.as_deref()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::path::PathBuf;

    use async_trait::async_trait;
    use tokio::sync::Mutex;

    use super::*;
    use crate::config::{ConfigError, DEFAULT_RESEND_BASE_URL, MailRoute, parse_base_url};
    use crate::scene::SceneSizes;
    use crate::services::mailer::{MailError, OutgoingEmail, ProviderError, SentEmail};

    /// Mailer that accepts everything and remembers what it was given.
    #[derive(Default)]
    pub struct RecordingMailer {
        sent: Mutex<Vec<OutgoingEmail>>,
    }

    impl RecordingMailer {
        pub async fn sent(&self) -> Vec<OutgoingEmail> {
            self.sent.lock().await.clone()
        }
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, email: OutgoingEmail) -> Result<SentEmail, MailError> {
            let mut sent = self.sent.lock().await;
            sent.push(email);
            Ok(SentEmail { id: format!("test-email-{}", sent.len()) })
        }
    }

    /// Mailer that fails every send with the same error.
    pub struct FailingMailer {
        pub error: MailError,
    }

    impl FailingMailer {
        /// The provider answers with a 422 validation error.
        #[must_use]
        pub fn rejecting(message: &str) -> Self {
            Self {
                error: MailError::Provider(ProviderError {
                    status_code: 422,
                    message: message.to_owned(),
                    name: "validation_error".to_owned(),
                }),
            }
        }

        /// The provider cannot be reached.
        #[must_use]
        pub fn unreachable(reason: &str) -> Self {
            Self { error: MailError::Transport(reason.to_owned()) }
        }
    }

    #[async_trait]
    impl Mailer for FailingMailer {
        async fn send(&self, _email: OutgoingEmail) -> Result<SentEmail, MailError> {
            Err(self.error.clone())
        }
    }

    /// # Errors
    ///
    /// Only if the default Resend base URL stops parsing.
    pub fn test_config() -> Result<SiteConfig, ConfigError> {
        Ok(SiteConfig {
            host: "127.0.0.1".into(),
            port: 0,
            assets_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets"),
            resend_api_key: None,
            resend_base_url: parse_base_url("RESEND_BASE_URL", DEFAULT_RESEND_BASE_URL)?,
            mail: MailRoute { from: "Site <site@example.test>".into(), to: vec!["owner@example.test".into()] },
            scene_seed: 7,
        })
    }

    /// Small scenes so tests do not pay for the full-size texture.
    #[must_use]
    pub fn test_scene_sizes() -> SceneSizes {
        SceneSizes { stars: 64, texture_width: 64, texture_height: 32, ..SceneSizes::default() }
    }

    /// Create a test `AppState` with the given mailer.
    ///
    /// # Errors
    ///
    /// Propagates config or scene generation failures.
    pub fn test_app_state(mailer: Option<Arc<dyn Mailer>>) -> Result<AppState, Box<dyn std::error::Error>> {
        let config = test_config()?;
        let scenes = SceneSet::generate_sized(config.scene_seed, &test_scene_sizes())?;
        Ok(AppState::new(config, mailer, scenes))
    }
}
