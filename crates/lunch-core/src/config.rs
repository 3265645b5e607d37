//! Client Configuration
//!
//! Endpoint base, page paths and UI timings. Every field has a default so a
//! partial JSON block is enough to override a single value.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Absolute origin of the backend. Empty means "same origin as the page".
    pub base_url: String,
    pub search_page: String,
    pub admin_page: String,
    pub login_page: String,
    /// Delay before a freshly appended toast slides in
    pub toast_enter_ms: u64,
    pub toast_visible_ms: u64,
    pub toast_exit_ms: u64,
    /// Admin status banner lifetime
    pub status_hide_ms: u64,
    /// Login page error message lifetime
    pub auth_error_hide_ms: u64,
    pub login_redirect_ms: u64,
    pub signup_switch_ms: u64,
    pub min_password_len: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            search_page: "/".to_string(),
            admin_page: "/admin.html".to_string(),
            login_page: "/login".to_string(),
            toast_enter_ms: 100,
            toast_visible_ms: 4000,
            toast_exit_ms: 300,
            status_hide_ms: 3000,
            auth_error_hide_ms: 5000,
            login_redirect_ms: 1000,
            signup_switch_ms: 2000,
            min_password_len: 6,
        }
    }
}

impl ClientConfig {
    /// Parse a (possibly partial) JSON config block.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, path) in [
            ("search_page", &self.search_page),
            ("admin_page", &self.admin_page),
            ("login_page", &self.login_page),
        ] {
            if !path.starts_with('/') {
                return Err(ConfigError::InvalidPath { name, path: path.clone() });
            }
        }
        if self.min_password_len == 0 {
            return Err(ConfigError::Parse("min_password_len must be positive".to_string()));
        }
        Ok(())
    }

    pub fn toast_enter(&self) -> Duration {
        Duration::from_millis(self.toast_enter_ms)
    }

    pub fn toast_visible(&self) -> Duration {
        Duration::from_millis(self.toast_visible_ms)
    }

    pub fn toast_exit(&self) -> Duration {
        Duration::from_millis(self.toast_exit_ms)
    }

    pub fn status_hide(&self) -> Duration {
        Duration::from_millis(self.status_hide_ms)
    }

    pub fn auth_error_hide(&self) -> Duration {
        Duration::from_millis(self.auth_error_hide_ms)
    }

    pub fn login_redirect(&self) -> Duration {
        Duration::from_millis(self.login_redirect_ms)
    }

    pub fn signup_switch(&self) -> Duration {
        Duration::from_millis(self.signup_switch_ms)
    }
}
