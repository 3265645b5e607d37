//! Global UI State Store
//!
//! Uses Leptos reactive_stores for the state every page shares: the toast stack.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lunch_core::{ClientConfig, Notice, ToastId, ToastPhase, Toaster};
use reactive_stores::Store;
use std::time::Duration;

#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Stacked, auto-dismissing notifications
    pub toaster: Toaster,
}

pub type UiStore = Store<UiState>;

pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

// ========================
// Store Helper Functions
// ========================

/// Append a toast and walk it through enter → visible → exit → removal
pub fn store_push_toast(store: &UiStore, notice: Notice, config: &ClientConfig) {
    let id = store.toaster().write().push(notice);
    let (enter, visible, exit) = (
        millis(config.toast_enter()),
        millis(config.toast_visible()),
        millis(config.toast_exit()),
    );
    let store = *store;
    spawn_local(async move {
        TimeoutFuture::new(enter).await;
        store.toaster().write().reveal(id);
        TimeoutFuture::new(visible).await;
        store.toaster().write().dismiss(id);
        TimeoutFuture::new(exit).await;
        store.toaster().write().remove(id);
    });
}

/// Current phase of one toast, `None` once removed
pub fn store_toast_phase(store: &UiStore, id: ToastId) -> Option<ToastPhase> {
    store
        .toaster()
        .read()
        .toasts()
        .iter()
        .find(|toast| toast.id == id)
        .map(|toast| toast.phase)
}
