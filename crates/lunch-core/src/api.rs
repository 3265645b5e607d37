//! Backend API - Core Trait
//!
//! Abstract interface to the Budget Lunch backend.
//! Implementations: [`crate::HttpApi`] (reqwest) and [`crate::MemoryApi`] (in-process).

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{AuthOutcome, AuthStatus, Credentials, ItemDraft, LogoutOutcome, MenuItem};

/// Every call the three pages make against the backend
///
/// Futures are `?Send`: in the browser they run on the single-threaded event loop.
#[async_trait(?Send)]
pub trait LunchApi {
    /// `GET /check-auth`
    async fn check_auth(&self) -> ApiResult<AuthStatus>;

    /// `POST /logout`
    async fn logout(&self) -> ApiResult<LogoutOutcome>;

    /// `GET /list`
    async fn list_items(&self) -> ApiResult<Vec<MenuItem>>;

    /// `GET /add/{name}/{price}?imageurl={url}`
    async fn add_item(&self, draft: &ItemDraft) -> ApiResult<()>;

    /// `PUT /update/{id}` with the draft as JSON body
    async fn update_item(&self, id: i64, draft: &ItemDraft) -> ApiResult<()>;

    /// `DELETE /delete/{id}`
    async fn delete_item(&self, id: i64) -> ApiResult<()>;

    /// `GET /search/{budget}`
    async fn search(&self, budget: f64) -> ApiResult<Vec<MenuItem>>;

    /// `POST /login`
    async fn login(&self, credentials: &Credentials) -> ApiResult<AuthOutcome>;

    /// `POST /signup`
    async fn signup(&self, credentials: &Credentials) -> ApiResult<AuthOutcome>;
}
