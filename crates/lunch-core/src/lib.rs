//! Budget Lunch Core
//!
//! Framework-free layer behind the three Budget Lunch pages:
//! - models / routes / api: wire types and the REST client seam
//! - validation / feedback / session: shared rules and UI feedback state
//! - search / admin / auth: page controllers (view-models)
//!
//! Controllers never perform I/O themselves. Each action is split into a
//! synchronous `begin_*`, an async `send` on the returned request, and a
//! synchronous `finish_*` that yields [`Effects`] for the page host.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod api;
pub mod http;
#[cfg(any(test, feature = "testing"))]
pub mod memory;
pub mod validation;
pub mod action;
pub mod feedback;
pub mod effects;
pub mod render;
pub mod session;
pub mod search;
pub mod admin;
pub mod auth;

#[cfg(test)]
mod tests;

pub use config::ClientConfig;
pub use error::{ApiResult, ConfigError, Field, RequestError, ValidationError};
pub use models::{AuthOutcome, AuthStatus, Credentials, ItemDraft, LogoutOutcome, MenuItem, SessionUser};
pub use api::LunchApi;
pub use http::HttpApi;
#[cfg(any(test, feature = "testing"))]
pub use memory::MemoryApi;
pub use action::{ActionSlot, Ticket};
pub use feedback::{Banner, BannerToken, Notice, NoticeKind, Toast, ToastId, ToastPhase, Toaster};
pub use effects::{Begin, Deferred, Effects, Scheduled};
pub use session::{GateDecision, SessionGate};
pub use search::SearchController;
pub use admin::AdminController;
pub use auth::{AuthController, AuthView};
