//! Budget Lunch Frontend App
//!
//! Picks the page from `location.pathname` and provides the shared context.

use console_logger::LogBuffer;
use leptos::prelude::*;
use lunch_core::ClientConfig;
use reactive_stores::Store;

use crate::browser;
use crate::components::{AdminPage, LoginPage, SearchPage, Toasts};
use crate::context::AppContext;
use crate::store::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Search,
    Admin,
    Login,
}

impl Page {
    /// Unknown paths fall back to the public search page
    pub fn from_path(path: &str, config: &ClientConfig) -> Self {
        let path = path.trim_end_matches('/');
        if path == config.admin_page.trim_end_matches('/') {
            Page::Admin
        } else if path == config.login_page.trim_end_matches('/')
            || path == format!("{}.html", config.login_page.trim_end_matches('/'))
        {
            Page::Login
        } else {
            Page::Search
        }
    }
}

/// Log lines shown under a startup failure
const LOG_TAIL: usize = 20;

/// Recent log lines joined for display, if any were captured
pub fn recent_logs(logs: Option<&LogBuffer>, count: usize) -> Option<String> {
    let lines = logs?.tail(count);
    (!lines.is_empty()).then(|| lines.join("\n"))
}

#[component]
pub fn App() -> impl IntoView {
    let config = browser::load_config();
    let page = Page::from_path(&browser::pathname(), &config);
    tracing::info!(?page, "mounting page");

    provide_context(Store::new(UiState::default()));

    let ctx = match AppContext::new(config) {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!(error = %e, "cannot start client");
            let logs = use_context::<LogBuffer>();
            let tail = recent_logs(logs.as_ref(), LOG_TAIL);
            return view! {
                <div class="empty-state">
                    <div class="empty-icon">
                        <i class="fas fa-exclamation-triangle"></i>
                    </div>
                    <h3>"Configuration error"</h3>
                    <p>{e.to_string()}</p>
                    {tail.map(|text| view! { <pre class="log-tail">{text}</pre> })}
                </div>
            }
            .into_any();
        }
    };
    provide_context(ctx);

    view! {
        <Toasts />
        {match page {
            Page::Search => view! { <SearchPage /> }.into_any(),
            Page::Admin => view! { <AdminPage /> }.into_any(),
            Page::Login => view! { <LoginPage /> }.into_any(),
        }}
    }
    .into_any()
}
