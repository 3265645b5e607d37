//! Application Context
//!
//! Page-independent values provided via Leptos Context API.

use leptos::prelude::*;
use lunch_core::{ClientConfig, ConfigError, HttpApi};

/// Config and REST client shared by every page
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<ClientConfig>,
    /// reqwest's wasm client is not `Send`
    api: StoredValue<HttpApi, LocalStorage>,
}

impl AppContext {
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let api = HttpApi::from_config(&config)?;
        tracing::debug!(base = %api.base_url(), "REST client ready");
        Ok(Self {
            config: StoredValue::new(config),
            api: StoredValue::new_local(api),
        })
    }

    pub fn config(&self) -> ClientConfig {
        self.config.get_value()
    }

    /// Owned client handle for a spawned request
    pub fn api(&self) -> HttpApi {
        self.api.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
