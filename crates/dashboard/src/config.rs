//! Dashboard configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `STOREPEE_API_URL` - Origin of the dashboard backend (e.g., `http://localhost:3000`)
//!
//! ## Optional
//! - `STOREPEE_SESSION_TOKEN` - Bearer token issued by the auth provider
//! - `STOREPEE_USER_ID` - ID of the signed-in user
//! - `STOREPEE_REQUEST_TIMEOUT_SECS` - HTTP timeout (default: 30)
//! - `STOREPEE_LOG_JSON` - Emit JSON logs when set to `1` or `true`
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//!
//! ## Optional (image uploads - both or neither)
//! - `CLOUDINARY_CLOUD_NAME` - Cloud name of the hosted upload widget
//! - `CLOUDINARY_UPLOAD_PRESET` - Unsigned upload preset

use std::collections::HashMap;

use secrecy::SecretString;
use storepee_core::UserId;
use thiserror::Error;
use url::Url;

use crate::components::UploadWidgetConfig;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.0;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "put-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Dashboard client configuration.
#[derive(Clone)]
pub struct DashboardConfig {
    /// Backend origin all API paths are resolved against
    pub api_url: Url,
    /// Session bearer token (optional when the backend runs without auth)
    pub session_token: Option<SecretString>,
    /// Signed-in user, if known
    pub user_id: Option<UserId>,
    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,
    /// Hosted upload widget settings (optional - enables image uploads)
    pub upload: Option<UploadWidgetConfig>,
    /// Emit JSON logs instead of text
    pub log_json: bool,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "production")
    pub sentry_environment: Option<String>,
}

impl std::fmt::Debug for DashboardConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardConfig")
            .field("api_url", &self.api_url.as_str())
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("user_id", &self.user_id)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("upload", &self.upload)
            .field("log_json", &self.log_json)
            .field("sentry_dsn", &self.sentry_dsn.as_ref().map(|_| "[SET]"))
            .field("sentry_environment", &self.sentry_environment)
            .finish()
    }
}

impl DashboardConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if the session token fails validation (placeholder detection, entropy check).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_url = parse_api_url(&get_required_env("STOREPEE_API_URL")?)?;
        let session_token = get_optional_env("STOREPEE_SESSION_TOKEN")
            .map(|token| {
                validate_secret_strength(&token, "STOREPEE_SESSION_TOKEN")?;
                Ok::<_, ConfigError>(SecretString::from(token))
            })
            .transpose()?;
        let user_id = get_optional_env("STOREPEE_USER_ID")
            .map(|id| {
                UserId::parse(&id).map_err(|e| {
                    ConfigError::InvalidEnvVar("STOREPEE_USER_ID".to_string(), e.to_string())
                })
            })
            .transpose()?;
        let request_timeout_secs = get_optional_env("STOREPEE_REQUEST_TIMEOUT_SECS")
            .map(|s| {
                s.parse::<u64>().map_err(|e| {
                    ConfigError::InvalidEnvVar(
                        "STOREPEE_REQUEST_TIMEOUT_SECS".to_string(),
                        e.to_string(),
                    )
                })
            })
            .transpose()?
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
        let upload = upload_from_env()?;
        let log_json = get_optional_env("STOREPEE_LOG_JSON")
            .is_some_and(|v| matches!(v.to_lowercase().as_str(), "1" | "true"));

        Ok(Self {
            api_url,
            session_token,
            user_id,
            request_timeout_secs,
            upload,
            log_json,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Configuration pointing at `api_url` with every optional setting off.
    #[must_use]
    pub const fn new(api_url: Url) -> Self {
        Self {
            api_url,
            session_token: None,
            user_id: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            upload: None,
            log_json: false,
            sentry_dsn: None,
            sentry_environment: None,
        }
    }

    /// Origin shown to users as the public API base (no trailing slash).
    #[must_use]
    pub fn origin(&self) -> String {
        self.api_url.origin().ascii_serialization()
    }
}

fn upload_from_env() -> Result<Option<UploadWidgetConfig>, ConfigError> {
    let cloud_name = get_optional_env("CLOUDINARY_CLOUD_NAME");
    let upload_preset = get_optional_env("CLOUDINARY_UPLOAD_PRESET");

    match (cloud_name, upload_preset) {
        (Some(cloud_name), Some(upload_preset)) => Ok(Some(UploadWidgetConfig {
            cloud_name,
            upload_preset,
        })),
        (None, None) => Ok(None),
        _ => Err(ConfigError::InvalidEnvVar(
            "CLOUDINARY_*".to_string(),
            "Both CLOUDINARY_CLOUD_NAME and CLOUDINARY_UPLOAD_PRESET must be set together"
                .to_string(),
        )),
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse the backend origin; only http(s) URLs are accepted.
fn parse_api_url(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar("STOREPEE_API_URL".to_string(), e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            "STOREPEE_API_URL".to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }

    Ok(url)
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable, treating empty values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // Token length will never exceed f64 precision
    let len = s.chars().count() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)]
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1}). Copy the token issued by the auth provider."
            ),
        ));
    }

    Ok(())
}
