//! In-Memory Backend
//!
//! [`LunchApi`] implementation holding menu items, accounts and the session in
//! process. Mirrors the real backend's rules (admin routes require a session,
//! search is `price <= budget`) and records every request line so callers can
//! assert what was, or was not, sent.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::api::LunchApi;
use crate::error::{ApiResult, RequestError};
use crate::models::{AuthOutcome, AuthStatus, Credentials, ItemDraft, LogoutOutcome, MenuItem};
use crate::routes;

const SERVER_MIN_PASSWORD: usize = 6;

#[derive(Debug, Default)]
struct MemoryState {
    items: Vec<MenuItem>,
    next_id: i64,
    accounts: HashMap<String, String>,
    signed_in: Option<String>,
    offline: bool,
    requests: Vec<String>,
}

#[derive(Debug, Default)]
pub struct MemoryApi {
    state: Mutex<MemoryState>,
}

impl MemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the catalogue; ids of later additions continue after the largest seeded id
    pub fn with_items(self, items: impl IntoIterator<Item = MenuItem>) -> Self {
        {
            let mut state = self.lock();
            state.items.extend(items);
            state.next_id = state.items.iter().map(|i| i.id).max().unwrap_or(0);
        }
        self
    }

    pub fn with_account(self, email: &str, password: &str) -> Self {
        self.lock().accounts.insert(email.to_string(), password.to_string());
        self
    }

    pub fn signed_in_as(self, email: &str) -> Self {
        self.lock().signed_in = Some(email.to_string());
        self
    }

    /// Make every following call fail as a network error
    pub fn set_offline(&self, offline: bool) {
        self.lock().offline = offline;
    }

    /// Request lines received so far, e.g. `"GET /search/5"`
    pub fn requests(&self) -> Vec<String> {
        self.lock().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.lock().requests.len()
    }

    pub fn items(&self) -> Vec<MenuItem> {
        self.lock().items.clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.lock().signed_in.is_some()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Record the request line, then fail if the "network" is down
    fn receive(&self, line: String) -> ApiResult<MutexGuard<'_, MemoryState>> {
        let mut state = self.lock();
        tracing::debug!(request = %line, "memory backend");
        state.requests.push(line);
        if state.offline {
            return Err(RequestError::Network("connection refused".to_string()));
        }
        Ok(state)
    }
}

fn require_session(state: &MemoryState) -> ApiResult<()> {
    match state.signed_in {
        Some(_) => Ok(()),
        None => Err(RequestError::Status(401)),
    }
}

fn check_draft(draft: &ItemDraft) -> ApiResult<()> {
    if draft.name.trim().is_empty() || !(draft.price > 0.0) {
        return Err(RequestError::Status(400));
    }
    Ok(())
}

fn rejected(message: &str) -> AuthOutcome {
    AuthOutcome {
        success: false,
        message: Some(message.to_string()),
    }
}

#[async_trait(?Send)]
impl LunchApi for MemoryApi {
    async fn check_auth(&self) -> ApiResult<AuthStatus> {
        let state = self.receive(format!("GET {}", routes::CHECK_AUTH))?;
        Ok(match &state.signed_in {
            Some(email) => AuthStatus::signed_in(email.clone()),
            None => AuthStatus::anonymous(),
        })
    }

    async fn logout(&self) -> ApiResult<LogoutOutcome> {
        let mut state = self.receive(format!("POST {}", routes::LOGOUT))?;
        state.signed_in = None;
        Ok(LogoutOutcome { success: true })
    }

    async fn list_items(&self) -> ApiResult<Vec<MenuItem>> {
        let state = self.receive(format!("GET {}", routes::LIST))?;
        require_session(&state)?;
        Ok(state.items.clone())
    }

    async fn add_item(&self, draft: &ItemDraft) -> ApiResult<()> {
        let mut state = self.receive(format!("GET {}", routes::add_item(draft)))?;
        require_session(&state)?;
        check_draft(draft)?;
        state.next_id += 1;
        let item = MenuItem {
            id: state.next_id,
            name: draft.name.clone(),
            price: draft.price,
            imageurl: draft.imageurl.clone(),
        };
        state.items.push(item);
        Ok(())
    }

    async fn update_item(&self, id: i64, draft: &ItemDraft) -> ApiResult<()> {
        let mut state = self.receive(format!("PUT {}", routes::update_item(id)))?;
        require_session(&state)?;
        check_draft(draft)?;
        let item = state
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(RequestError::Status(404))?;
        item.name = draft.name.clone();
        item.price = draft.price;
        item.imageurl = draft.imageurl.clone();
        Ok(())
    }

    async fn delete_item(&self, id: i64) -> ApiResult<()> {
        let mut state = self.receive(format!("DELETE {}", routes::delete_item(id)))?;
        require_session(&state)?;
        let before = state.items.len();
        state.items.retain(|item| item.id != id);
        if state.items.len() == before {
            return Err(RequestError::Status(404));
        }
        Ok(())
    }

    async fn search(&self, budget: f64) -> ApiResult<Vec<MenuItem>> {
        let state = self.receive(format!("GET {}", routes::search(budget)))?;
        Ok(state
            .items
            .iter()
            .filter(|item| item.price <= budget)
            .cloned()
            .collect())
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<AuthOutcome> {
        let mut state = self.receive(format!("POST {}", routes::LOGIN))?;
        let email = credentials.email.trim();
        if email.is_empty() || credentials.password.is_empty() {
            return Ok(rejected("Email and password are required"));
        }
        match state.accounts.get(email) {
            Some(password) if *password == credentials.password => {
                state.signed_in = Some(email.to_string());
                Ok(AuthOutcome {
                    success: true,
                    message: Some("Login successful".to_string()),
                })
            }
            _ => Ok(rejected("Invalid email or password")),
        }
    }

    async fn signup(&self, credentials: &Credentials) -> ApiResult<AuthOutcome> {
        let mut state = self.receive(format!("POST {}", routes::SIGNUP))?;
        let email = credentials.email.trim();
        if email.is_empty() || credentials.password.is_empty() {
            return Ok(rejected("Email and password are required"));
        }
        if credentials.password.chars().count() < SERVER_MIN_PASSWORD {
            return Ok(rejected("Password must be at least 6 characters long"));
        }
        if state.accounts.contains_key(email) {
            return Ok(rejected("An account with this email already exists"));
        }
        state.accounts.insert(email.to_string(), credentials.password.clone());
        Ok(AuthOutcome {
            success: true,
            message: Some(
                "Account created successfully! Please check your email to confirm your account."
                    .to_string(),
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogue() -> Vec<MenuItem> {
        vec![
            MenuItem::new(1, "pizza", 6.99, Some("https://img/pizza.jpg")),
            MenuItem::new(2, "salad", 5.99, None),
            MenuItem::new(3, "soda", 1.99, None),
        ]
    }

    #[tokio::test]
    async fn test_search_filters_by_budget() {
        let api = MemoryApi::new().with_items(catalogue());
        let found = api.search(6.0).await.unwrap();
        let names: Vec<_> = found.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["salad", "soda"]);
        assert_eq!(api.requests(), vec!["GET /search/6"]);
    }

    #[tokio::test]
    async fn test_admin_routes_require_session() {
        let api = MemoryApi::new().with_items(catalogue());
        assert_eq!(api.list_items().await, Err(RequestError::Status(401)));
        assert_eq!(api.delete_item(1).await, Err(RequestError::Status(401)));
        assert_eq!(api.items().len(), 3);
    }

    #[tokio::test]
    async fn test_add_assigns_next_id() {
        let api = MemoryApi::new().with_items(catalogue()).signed_in_as("a@b.c");
        let draft = ItemDraft { name: "coffee".to_string(), price: 2.99, imageurl: None };
        api.add_item(&draft).await.unwrap();
        let items = api.list_items().await.unwrap();
        assert_eq!(items.last().map(|i| i.id), Some(4));
    }

    #[tokio::test]
    async fn test_offline_records_then_fails() {
        let api = MemoryApi::new();
        api.set_offline(true);
        assert!(matches!(api.check_auth().await, Err(RequestError::Network(_))));
        assert_eq!(api.request_count(), 1);
    }

    #[tokio::test]
    async fn test_login_and_logout_toggle_session() {
        let api = MemoryApi::new().with_account("chef@lunch.io", "secret1");
        let bad = Credentials { email: "chef@lunch.io".to_string(), password: "nope".to_string() };
        assert!(!api.login(&bad).await.unwrap().success);
        assert!(!api.is_signed_in());

        let good = Credentials { email: "chef@lunch.io".to_string(), password: "secret1".to_string() };
        assert!(api.login(&good).await.unwrap().success);
        assert!(api.check_auth().await.unwrap().authenticated);

        api.logout().await.unwrap();
        assert!(!api.check_auth().await.unwrap().authenticated);
    }
}
