//! Session Gate
//!
//! The admin page admits only signed-in users; the login page admits only
//! guests. Both ask `/check-auth` and differ in polarity and in how they treat
//! a failed check (members-only fails closed, guests-only fails open).

use crate::api::LunchApi;
use crate::config::ClientConfig;
use crate::error::ApiResult;
use crate::models::{AuthStatus, SessionUser};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionGate {
    /// Admin console
    MembersOnly,
    /// Login/signup page
    GuestsOnly,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GateDecision {
    Proceed(Option<SessionUser>),
    Redirect(String),
}

impl SessionGate {
    pub fn decide(self, status: &ApiResult<AuthStatus>, config: &ClientConfig) -> GateDecision {
        match (self, status) {
            (SessionGate::MembersOnly, Ok(status)) if status.authenticated => {
                GateDecision::Proceed(status.user.clone())
            }
            (SessionGate::MembersOnly, Ok(_)) => GateDecision::Redirect(config.login_page.clone()),
            (SessionGate::MembersOnly, Err(e)) => {
                tracing::warn!(error = %e, "auth check failed, sending to login");
                GateDecision::Redirect(config.login_page.clone())
            }
            (SessionGate::GuestsOnly, Ok(status)) if status.authenticated => {
                GateDecision::Redirect(config.admin_page.clone())
            }
            (SessionGate::GuestsOnly, Ok(_)) => GateDecision::Proceed(None),
            (SessionGate::GuestsOnly, Err(e)) => {
                tracing::info!(error = %e, "auth check failed, showing forms");
                GateDecision::Proceed(None)
            }
        }
    }

    pub async fn check<A: LunchApi + ?Sized>(self, api: &A, config: &ClientConfig) -> GateDecision {
        let status = api.check_auth().await;
        self.decide(&status, config)
    }
}
