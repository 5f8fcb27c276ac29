use std::env;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a valid number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
}

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Artificial latency before an order is confirmed.
    pub submit_delay: Duration,
    pub contact_delay: Duration,
    pub admin_username: String,
    pub admin_password: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            submit_delay: Duration::from_millis(1000),
            contact_delay: Duration::from_millis(1500),
            admin_username: "admin".to_string(),
            admin_password: "password".to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`Settings::from_env`] with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(v) => parse_number("PORT", &v)?,
            None => defaults.port,
        };
        let submit_delay = match lookup("SUBMIT_DELAY_MS") {
            Some(v) => Duration::from_millis(parse_number("SUBMIT_DELAY_MS", &v)?),
            None => defaults.submit_delay,
        };
        let contact_delay = match lookup("CONTACT_DELAY_MS") {
            Some(v) => Duration::from_millis(parse_number("CONTACT_DELAY_MS", &v)?),
            None => defaults.contact_delay,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            submit_delay,
            contact_delay,
            admin_username: lookup("ADMIN_USERNAME").unwrap_or(defaults.admin_username),
            admin_password: lookup("ADMIN_PASSWORD").unwrap_or(defaults.admin_password),
        })
    }

    /// Settings with no artificial delays, for tests and tooling.
    pub fn instant() -> Self {
        Self {
            submit_delay: Duration::ZERO,
            contact_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}

fn parse_number<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        name,
        value: value.to_string(),
    })
}
