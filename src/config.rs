// src/config.rs

//! Application configuration.
//!
//! Built once at startup from the process environment (a `.env` file is
//! honored) and passed by reference into each pipeline run. No module
//! holds mutable configuration state.

use std::path::PathBuf;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listings page to fetch (`JOB_URL`). Required.
    pub job_url: String,

    /// Origin prefixed onto host-relative posting hrefs.
    pub base_origin: String,

    /// CSS selector for job title anchors.
    pub title_selector: String,

    /// Path of the seen-set JSON file.
    pub storage_file: PathBuf,

    /// Address the trigger endpoint binds to.
    pub bind_addr: String,

    /// HTTP client behavior settings
    pub http: HttpConfig,

    /// Outbound mail settings
    pub mail: MailConfig,
}

/// HTTP client behavior settings.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    pub user_agent: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// Outbound mail settings.
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// SMTP relay host (implicit TLS, port 465)
    pub smtp_host: String,

    /// Sender address, also the SMTP login (`GMAIL_USER`)
    pub sender: String,

    /// SMTP password (`GMAIL_PASS`)
    pub password: String,

    /// Single notification target (`RECIPIENT_EMAIL`)
    pub recipient: String,
}

impl MailConfig {
    /// True when every field needed to actually send mail is present.
    pub fn is_configured(&self) -> bool {
        !self.sender.is_empty() && !self.password.is_empty() && !self.recipient.is_empty()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            job_url: String::new(),
            base_origin: defaults::BASE_ORIGIN.to_string(),
            title_selector: defaults::TITLE_SELECTOR.to_string(),
            storage_file: PathBuf::from(defaults::STORAGE_FILE),
            bind_addr: defaults::BIND_ADDR.to_string(),
            http: HttpConfig::default(),
            mail: MailConfig::default(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::TIMEOUT_SECS,
        }
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            smtp_host: defaults::SMTP_HOST.to_string(),
            sender: String::new(),
            password: String::new(),
            recipient: String::new(),
        }
    }
}

impl Config {
    /// Build configuration from the process environment.
    ///
    /// Unset variables fall back to the defaults above; unparsable
    /// numeric values do too.
    pub fn from_env() -> Self {
        let base = Config::default();
        Self {
            job_url: env_or("JOB_URL", &base.job_url),
            base_origin: env_or("JOB_BASE_ORIGIN", &base.base_origin),
            title_selector: env_or("JOB_TITLE_SELECTOR", &base.title_selector),
            storage_file: std::env::var("STORAGE_FILE")
                .map(PathBuf::from)
                .unwrap_or(base.storage_file),
            bind_addr: env_or("BIND_ADDR", &base.bind_addr),
            http: HttpConfig {
                user_agent: env_or("HTTP_USER_AGENT", &base.http.user_agent),
                timeout_secs: std::env::var("HTTP_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(base.http.timeout_secs),
            },
            mail: MailConfig {
                smtp_host: env_or("SMTP_HOST", &base.mail.smtp_host),
                sender: env_or("GMAIL_USER", ""),
                password: env_or("GMAIL_PASS", ""),
                recipient: env_or("RECIPIENT_EMAIL", ""),
            },
        }
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.job_url.trim().is_empty() {
            return Err(AppError::config("JOB_URL is not set"));
        }
        url::Url::parse(&self.job_url)?;
        if self.title_selector.trim().is_empty() {
            return Err(AppError::config("title selector is empty"));
        }
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::config("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::config("http.timeout_secs must be > 0"));
        }
        Ok(())
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

mod defaults {
    pub const BASE_ORIGIN: &str = "https://jobs.novascotia.ca";
    pub const TITLE_SELECTOR: &str = ".jobTitle a";
    pub const STORAGE_FILE: &str = "seen_jobs.json";
    pub const BIND_ADDR: &str = "0.0.0.0:5000";
    pub const SMTP_HOST: &str = "smtp.gmail.com";
    pub const TIMEOUT_SECS: u64 = 30;

    pub fn user_agent() -> String {
        format!("jobwatch/{}", env!("CARGO_PKG_VERSION"))
    }
}
