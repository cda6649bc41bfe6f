use std::env;
use std::net::SocketAddr;

use chrono::FixedOffset;
use thiserror::Error;
use url::Url;

pub mod cors;
pub mod security;

pub use cors::create_cors_layer;
pub use security::create_security_headers_layer;

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} is not a valid URL: {reason}")]
    InvalidUrl { name: &'static str, reason: String },

    #[error("{name} has an invalid value '{value}'")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Origin of the events/hackathon backend, prefixed to every API path
    pub api_base_url: Url,
    pub bind_addr: SocketAddr,
    /// Offset used to show dates and to read `datetime-local` form input
    pub display_offset: FixedOffset,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_url = lookup("API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let api_base_url = Url::parse(&raw_url).map_err(|e| ConfigError::InvalidUrl {
            name: "API_BASE_URL",
            reason: e.to_string(),
        })?;
        if api_base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl {
                name: "API_BASE_URL",
                reason: "cannot be used as a base".to_string(),
            });
        }

        let raw_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidValue {
                name: "BIND_ADDR",
                value: raw_addr.clone(),
            })?;

        let display_offset = match lookup("DISPLAY_UTC_OFFSET_MINUTES") {
            None => FixedOffset::east_opt(0),
            Some(raw) => raw
                .trim()
                .parse::<i32>()
                .ok()
                .and_then(|minutes| minutes.checked_mul(60))
                .and_then(FixedOffset::east_opt),
        }
        .ok_or_else(|| ConfigError::InvalidValue {
            name: "DISPLAY_UTC_OFFSET_MINUTES",
            value: lookup("DISPLAY_UTC_OFFSET_MINUTES").unwrap_or_default(),
        })?;

        Ok(Self {
            api_base_url,
            bind_addr,
            display_offset,
        })
    }
}
