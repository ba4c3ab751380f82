//! # Client configuration: `restaurant.toml`
//!
//! Runtime settings for the web client. Every field has a production default,
//! so an empty document (or no document at all) is a valid configuration.
//!
//! ```toml
//! [api]
//! base_url = "/api"              # prefix for every REST call
//!
//! [session]
//! check_interval_secs = 300      # token expiry re-check period
//!
//! [listing]
//! page_size = 10                 # rows per page in admin tables
//! ```
//!
//! The web binary builds its config with [`ClientConfig::from_build_env`], which
//! applies the compile-time `RESTAURANT_API_URL` override on top of the defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub listing: ListingConfig,
}

/// Backend location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to. No trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Session liveness settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seconds between token expiry checks. 0 disables the periodic check.
    #[serde(default = "default_check_interval")]
    pub check_interval_secs: u32,
}

/// Table pagination settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListingConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_base_url() -> String {
    "/api".to_string()
}

fn default_check_interval() -> u32 {
    300
}

fn default_page_size() -> usize {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            check_interval_secs: default_check_interval(),
        }
    }
}

impl SessionConfig {
    /// Period of the expiry loop, or `None` when it is disabled.
    pub fn check_interval(&self) -> Option<Duration> {
        (self.check_interval_secs > 0).then(|| Duration::from_secs(self.check_interval_secs.into()))
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::default().with_base_url(base_url)
    }

    /// Defaults plus the `RESTAURANT_API_URL` value baked in at compile time, if any.
    pub fn from_build_env() -> Self {
        match option_env!("RESTAURANT_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// Builder method to set the API base URL. Trailing slashes are dropped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Builder method to set the expiry check interval.
    pub fn with_check_interval(mut self, secs: u32) -> Self {
        self.session.check_interval_secs = secs;
        self
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(s)?;
        config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.base_url, "/api");
        assert_eq!(config.session.check_interval_secs, 300);
        assert_eq!(config.listing.page_size, 10);
    }

    #[test]
    fn test_partial_document_keeps_other_defaults() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "https://example.com/api/"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://example.com/api");
        assert_eq!(config.session, SessionConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::new("http://localhost:8080/api").with_check_interval(60);
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_zero_interval_disables_expiry_loop() {
        let config = ClientConfig::default().with_check_interval(0);
        assert_eq!(config.session.check_interval(), None);
        assert_eq!(
            ClientConfig::default().session.check_interval(),
            Some(Duration::from_secs(300))
        );
    }
}
