//! HTTP Backend
//!
//! reqwest implementation of [`LunchApi`]. On wasm32 reqwest goes through the
//! browser's `fetch`, so session cookies ride along with same-origin calls.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use crate::api::LunchApi;
use crate::config::ClientConfig;
use crate::error::{ApiResult, ConfigError, RequestError};
use crate::models::{AuthOutcome, AuthStatus, Credentials, ItemDraft, LogoutOutcome, MenuItem};
use crate::routes;

#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base: Url,
}

impl HttpApi {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let base = Url::parse(base_url).map_err(|_| ConfigError::InvalidBaseUrl(base_url.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self {
            client: Client::new(),
            base,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
        Self::new(&config.base_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn request(&self, method: Method, path: &str) -> ApiResult<RequestBuilder> {
        let url = self
            .base
            .join(path)
            .map_err(|e| RequestError::Network(format!("bad url {}: {}", path, e)))?;
        tracing::debug!(%method, %url, "dispatching request");
        Ok(self.client.request(method, url))
    }
}

// ========================
// Response Helpers
// ========================

fn ensure_success(resp: Response) -> ApiResult<Response> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        tracing::warn!(status = status.as_u16(), url = %resp.url(), "request rejected");
        Err(RequestError::Status(status.as_u16()))
    }
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> ApiResult<T> {
    let body = ensure_success(resp)?.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// Login/signup answer `{success, message}` even on 4xx, so the body wins over the status
async fn read_auth_outcome(resp: Response) -> ApiResult<AuthOutcome> {
    let status = resp.status();
    let body = resp.text().await?;
    match serde_json::from_str::<AuthOutcome>(&body) {
        Ok(outcome) => Ok(outcome),
        Err(e) if status.is_success() => Err(e.into()),
        Err(_) => Err(RequestError::Status(status.as_u16())),
    }
}

// ========================
// LunchApi
// ========================

#[async_trait(?Send)]
impl LunchApi for HttpApi {
    async fn check_auth(&self) -> ApiResult<AuthStatus> {
        let resp = self.request(Method::GET, routes::CHECK_AUTH)?.send().await?;
        read_json(resp).await
    }

    async fn logout(&self) -> ApiResult<LogoutOutcome> {
        let resp = self
            .request(Method::POST, routes::LOGOUT)?
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;
        read_json(resp).await
    }

    async fn list_items(&self) -> ApiResult<Vec<MenuItem>> {
        let resp = self.request(Method::GET, routes::LIST)?.send().await?;
        read_json(resp).await
    }

    async fn add_item(&self, draft: &ItemDraft) -> ApiResult<()> {
        let resp = self.request(Method::GET, &routes::add_item(draft))?.send().await?;
        ensure_success(resp).map(|_| ())
    }

    async fn update_item(&self, id: i64, draft: &ItemDraft) -> ApiResult<()> {
        let resp = self
            .request(Method::PUT, &routes::update_item(id))?
            .json(draft)
            .send()
            .await?;
        ensure_success(resp).map(|_| ())
    }

    async fn delete_item(&self, id: i64) -> ApiResult<()> {
        let resp = self.request(Method::DELETE, &routes::delete_item(id))?.send().await?;
        ensure_success(resp).map(|_| ())
    }

    async fn search(&self, budget: f64) -> ApiResult<Vec<MenuItem>> {
        let resp = self.request(Method::GET, &routes::search(budget))?.send().await?;
        read_json(resp).await
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<AuthOutcome> {
        let resp = self.request(Method::POST, routes::LOGIN)?.json(credentials).send().await?;
        read_auth_outcome(resp).await
    }

    async fn signup(&self, credentials: &Credentials) -> ApiResult<AuthOutcome> {
        let resp = self.request(Method::POST, routes::SIGNUP)?.json(credentials).send().await?;
        read_auth_outcome(resp).await
    }
}
