use std::sync::Arc;

use folio::config::{ConfigError, SiteConfig};
use folio::scene::{SceneError, SceneSet};
use folio::services::mailer::{Mailer, ResendMailer};
use folio::state::AppState;
use folio::{logging, routes};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Scene(#[from] SceneError),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let dotenv = dotenvy::dotenv();
    logging::init();
    if let Err(e) = dotenv {
        if !e.not_found() {
            tracing::warn!(error = %e, "could not load .env");
        }
    }

    let config = SiteConfig::from_env()?;

    // Relay is optional: the site still serves without it.
    let mailer: Option<Arc<dyn Mailer>> = match config.resend_api_key.as_deref() {
        Some(key) => {
            tracing::info!(recipients = config.mail.to.len(), base_url = %config.resend_base_url, "email relay configured");
            Some(Arc::new(ResendMailer::new(key, config.resend_base_url.clone())))
        }
        None => {
            tracing::warn!("RESEND_API_KEY not set; contact relay disabled");
            None
        }
    };

    let scenes = SceneSet::generate(config.scene_seed)?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;

    let app = routes::app(AppState::new(config, mailer, scenes));

    tracing::info!(%addr, "folio listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(e) => {
            tracing::error!(error = %e, "cannot listen for ctrl-c; running until killed");
            std::future::pending::<()>().await;
        }
    }
}
