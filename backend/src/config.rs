//! Server configuration, read from the environment after `.env` is loaded.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use smartpos_shared::company::CONTACT_INFO;

use crate::error::{ConfigError, ConfigResult};

const DEFAULT_CONTACT_FROM: &str = "AI POS <noreply@munene.shop>";

/// What a failed notification does to the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifyFailurePolicy {
    /// Log it and still thank the user.
    #[default]
    Lenient,
    /// Answer with the generic 500.
    Strict,
}

impl FromStr for NotifyFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(NotifyFailurePolicy::Lenient),
            "strict" => Ok(NotifyFailurePolicy::Strict),
            other => Err(format!("expected 'lenient' or 'strict', got: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResendSettings {
    pub api_key: String,
    pub to: String,
    pub from: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub port: u16,
    /// Allowed CORS origin. Any origin when unset.
    pub frontend_url: Option<String>,
    /// Built frontend to serve for non-API paths.
    pub static_dir: Option<PathBuf>,
    pub notify_policy: NotifyFailurePolicy,
    /// Email delivery through Resend. Submissions are only logged when unset.
    pub resend: Option<ResendSettings>,
    pub sentry_dsn: Option<String>,
}

impl Config {
    /// Optional environment variables:
    /// - `BIND_ADDR` (default `127.0.0.1`), `PORT` (default `3000`)
    /// - `FRONTEND_URL`, `STATIC_DIR`, `SENTRY_DSN`
    /// - `NOTIFY_FAILURE_POLICY`: `lenient` (default) or `strict`
    /// - `RESEND_API_KEY`, with `CONTACT_EMAIL` and `CONTACT_FROM`
    pub fn from_env() -> ConfigResult<Self> {
        let bind_addr = optional_var("BIND_ADDR").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parse_var("PORT", 3000u16)?;
        let notify_policy = parse_var("NOTIFY_FAILURE_POLICY", NotifyFailurePolicy::default())?;

        let frontend_url = optional_var("FRONTEND_URL");
        if let Some(url) = &frontend_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidValue {
                    var: "FRONTEND_URL".to_string(),
                    reason: "Must start with http:// or https://".to_string(),
                });
            }
        }

        let resend = optional_var("RESEND_API_KEY").map(|api_key| ResendSettings {
            api_key,
            to: optional_var("CONTACT_EMAIL").unwrap_or_else(|| CONTACT_INFO.email.to_string()),
            from: optional_var("CONTACT_FROM").unwrap_or_else(|| DEFAULT_CONTACT_FROM.to_string()),
        });

        Ok(Config {
            bind_addr,
            port,
            frontend_url,
            static_dir: optional_var("STATIC_DIR").map(PathBuf::from),
            notify_policy,
            resend,
            sentry_dsn: optional_var("SENTRY_DSN"),
        })
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: "127.0.0.1".to_string(),
            port: 3000,
            frontend_url: None,
            static_dir: None,
            notify_policy: NotifyFailurePolicy::Lenient,
            resend: None,
            sentry_dsn: None,
        }
    }
}

// empty values count as unset
fn optional_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_var<T>(name: &str, default: T) -> ConfigResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional_var(name) {
        Some(value) => value.parse::<T>().map_err(|e| ConfigError::InvalidValue {
            var: name.to_string(),
            reason: format!("{} (got: {})", e, value),
        }),
        None => Ok(default),
    }
}
