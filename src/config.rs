//! Where the contact endpoint lives.
//!
//! Only the server origin is configurable; the endpoint path is fixed.
//! Resolution order: explicit value (CLI flag) > `CONTACT_BASE_URL` > default.

use thiserror::Error;

use crate::network::CONTACT_ENDPOINT;

/// Development server the contact page is served from
pub const DEFAULT_BASE_URL: &str = "http://localhost:5500";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "CONTACT_BASE_URL";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Base URL is empty")]
    EmptyBaseUrl,

    #[error("Base URL must start with http:// or https://, got {0:?}")]
    UnsupportedScheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactConfig {
    base_url: String,
}

impl ContactConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::UnsupportedScheme(base_url));
        }
        Ok(Self { base_url })
    }

    /// Read `CONTACT_BASE_URL`, falling back to the development server
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(None, std::env::var(BASE_URL_ENV).ok())
    }

    /// Pick the first of `explicit`, `env`, default
    pub fn resolve(explicit: Option<String>, env: Option<String>) -> Result<Self, ConfigError> {
        match explicit.or(env) {
            Some(url) => Self::new(url),
            None => Self::new(DEFAULT_BASE_URL),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the contact endpoint
    pub fn endpoint_url(&self) -> String {
        format!("{}{}", self.base_url, CONTACT_ENDPOINT)
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
