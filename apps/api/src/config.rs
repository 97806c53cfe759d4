use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::ai_assist::RetryPolicy;

/// Application configuration loaded from environment variables.
/// Startup fails if a required variable is missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote CV service (AI generation and PDF rendering).
    pub cv_api_base_url: String,
    pub cv_api_token: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub export_dir: PathBuf,
    pub ai_max_retries: u32,
    pub ai_backoff_ms: u64,
    pub http_timeout_secs: u64,
    /// Idle builder sessions older than this are evicted.
    pub session_ttl_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            cv_api_base_url: require_env("CV_API_BASE_URL")?,
            cv_api_token: std::env::var("CV_API_TOKEN").ok().filter(|t| !t.is_empty()),
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            export_dir: std::env::var("EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("exports")),
            ai_max_retries: parse_env("AI_MAX_RETRIES", 3)?,
            ai_backoff_ms: parse_env("AI_BACKOFF_MS", 1000)?,
            http_timeout_secs: parse_env("HTTP_TIMEOUT_SECS", 60)?,
            session_ttl_secs: match parse_env("SESSION_TTL_SECS", 3600)? {
                0 => anyhow::bail!("SESSION_TTL_SECS must be greater than zero"),
                secs => secs,
            },
        })
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.ai_max_retries, Duration::from_millis(self.ai_backoff_ms))
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }

    /// How often the idle sweep runs: a quarter of the TTL, between 1s and 60s.
    pub fn session_sweep_period(&self) -> Duration {
        (self.session_ttl() / 4).clamp(Duration::from_secs(1), Duration::from_secs(60))
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
