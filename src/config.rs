//! Site configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Everything is optional except that numeric values must parse when present.
//! The email relay is the only feature that can be switched off: without
//! `RESEND_API_KEY` the site still serves, and contact submissions fail with
//! the generic server error.
//!
//! The Resend client reads `RESEND_BASE_URL` and `RESEND_RATE_LIMIT` itself
//! and aborts on malformed values, so both are checked here first.

use std::num::NonZeroU32;
use std::path::PathBuf;

use url::Url;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CONTACT_FROM: &str = "Portfolio <onboarding@resend.dev>";
pub const DEFAULT_CONTACT_TO: &str = "kanugovisreephaneesha@gmail.com";
pub const DEFAULT_SCENE_SEED: u64 = 0x5EED_F011_0000_0001;
pub const DEFAULT_RESEND_BASE_URL: &str = "https://api.resend.com";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
    #[error("invalid URL for {var}: {value:?} ({reason})")]
    InvalidUrl { var: &'static str, value: String, reason: String },
}

/// Sender and recipients for relayed contact messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailRoute {
    pub from: String,
    pub to: Vec<String>,
}

impl Default for MailRoute {
    fn default() -> Self {
        Self { from: DEFAULT_CONTACT_FROM.to_owned(), to: vec![DEFAULT_CONTACT_TO.to_owned()] }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub host: String,
    pub port: u16,
    pub assets_dir: PathBuf,
    /// `None` when `RESEND_API_KEY` is unset or blank.
    pub resend_api_key: Option<String>,
    /// Resend API origin; the client posts to `/emails` on it.
    pub resend_base_url: Url,
    pub mail: MailRoute,
    pub scene_seed: u64,
}

impl SiteConfig {
    /// Build typed site config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `ASSETS_DIR`: static asset root, default `<crate>/assets`
    /// - `RESEND_API_KEY`: enables the contact relay
    /// - `RESEND_BASE_URL`: Resend API root, default `https://api.resend.com`
    /// - `RESEND_RATE_LIMIT`: requests per second for the Resend client
    /// - `CONTACT_FROM`: sender, default `Portfolio <onboarding@resend.dev>`
    /// - `CONTACT_TO`: comma-separated recipients, default the site owner
    /// - `SCENE_SEED`: seed for the decorative geometry
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT`, `SCENE_SEED` or `RESEND_RATE_LIMIT` is set
    /// but not a number, or if `RESEND_BASE_URL` is not an http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env_string("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = env_parse("PORT", DEFAULT_PORT)?;
        let scene_seed = env_parse("SCENE_SEED", DEFAULT_SCENE_SEED)?;
        let assets_dir = env_string("ASSETS_DIR").map_or_else(default_assets_dir, PathBuf::from);

        let resend_api_key = env_string("RESEND_API_KEY");
        let resend_base_url = parse_base_url(
            "RESEND_BASE_URL",
            env_string("RESEND_BASE_URL").as_deref().unwrap_or(DEFAULT_RESEND_BASE_URL),
        )?;
        if let Ok(raw) = std::env::var("RESEND_RATE_LIMIT") {
            check_rate_limit(&raw)?;
        }
        let mail = MailRoute {
            from: env_string("CONTACT_FROM").unwrap_or_else(|| DEFAULT_CONTACT_FROM.to_owned()),
            to: env_string("CONTACT_TO").map_or_else(|| vec![DEFAULT_CONTACT_TO.to_owned()], |raw| split_recipients(&raw)),
        };

        Ok(Self { host, port, assets_dir, resend_api_key, resend_base_url, mail, scene_seed })
    }

    /// `host:port` string suitable for `TcpListener::bind`.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets")
}

/// Read a variable, treating unset and blank the same.
fn env_string(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value.trim().to_owned()),
        _ => None,
    }
}

fn env_parse<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match env_string(key) {
        None => Ok(default),
        Some(raw) => raw
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue { var: key, value: raw }),
    }
}

/// Parse an API root. Only absolute http(s) URLs are accepted.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidUrl`] naming `var` when `raw` is rejected.
pub fn parse_base_url(var: &'static str, raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl { var, value: raw.to_owned(), reason };
    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(invalid(format!("unsupported scheme {scheme}"))),
    }
}

/// The Resend client parses this raw (untrimmed) and requires a non-zero u32.
fn check_rate_limit(raw: &str) -> Result<(), ConfigError> {
    match raw.parse::<NonZeroU32>() {
        Ok(_) => Ok(()),
        Err(_) => Err(ConfigError::InvalidValue { var: "RESEND_RATE_LIMIT", value: raw.to_owned() }),
    }
}

fn split_recipients(raw: &str) -> Vec<String> {
    let recipients: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(str::to_owned)
        .collect();
    if recipients.is_empty() {
        vec![DEFAULT_CONTACT_TO.to_owned()]
    } else {
        recipients
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
