//! Page Host
//!
//! Executes the `Effects` a controller step returns and drives the async half
//! of each action (send → finish) on the local executor.

use std::future::Future;
use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lunch_core::{ApiResult, BannerToken, Deferred, Effects, Scheduled};

use crate::browser;
use crate::context::AppContext;
use crate::store::{store_push_toast, UiStore};

/// Per-page effect handlers. Pages opt into the hooks they need.
#[derive(Clone, Copy)]
pub struct PageHost {
    ctx: AppContext,
    store: UiStore,
    reload: Option<Callback<()>>,
    hide_banner: Option<Callback<BannerToken>>,
    show_login: Option<Callback<()>>,
}

impl PageHost {
    pub fn new(ctx: AppContext, store: UiStore) -> Self {
        Self {
            ctx,
            store,
            reload: None,
            hide_banner: None,
            show_login: None,
        }
    }

    pub fn on_reload(mut self, reload: Callback<()>) -> Self {
        self.reload = Some(reload);
        self
    }

    pub fn on_hide_banner(mut self, hide: Callback<BannerToken>) -> Self {
        self.hide_banner = Some(hide);
        self
    }

    pub fn on_show_login(mut self, show: Callback<()>) -> Self {
        self.show_login = Some(show);
        self
    }

    pub fn run(&self, effects: Effects) {
        let config = self.ctx.config();
        for notice in effects.toasts {
            store_push_toast(&self.store, notice, &config);
        }
        if let Some(field) = effects.focus {
            browser::focus_field(field);
        }
        if effects.reload_items {
            match self.reload {
                Some(reload) => reload.run(()),
                None => tracing::warn!("reload requested on a page without a list"),
            }
        }
        for scheduled in effects.scheduled {
            self.schedule(scheduled);
        }
    }

    fn schedule(&self, scheduled: Scheduled) {
        let Scheduled { after, action } = scheduled;
        if after == Duration::ZERO {
            self.perform(action);
            return;
        }
        let host = *self;
        let delay = u32::try_from(after.as_millis()).unwrap_or(u32::MAX);
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            host.perform(action);
        });
    }

    fn perform(&self, action: Deferred) {
        match action {
            Deferred::Navigate(path) => browser::redirect(&path),
            Deferred::HideBanner(token) => {
                if let Some(hide) = self.hide_banner {
                    hide.run(token);
                }
            }
            Deferred::ShowLoginView => {
                if let Some(show) = self.show_login {
                    show.run(());
                }
            }
        }
    }

    /// Await a sent request, hand the response to `finish`, run its effects
    pub fn settle<C, R, T>(
        self,
        ctrl: RwSignal<C>,
        pending: impl Future<Output = (R, ApiResult<T>)> + 'static,
        finish: impl FnOnce(&mut C, R, ApiResult<T>) -> Effects + 'static,
    ) where
        C: Send + Sync + 'static,
        R: 'static,
        T: 'static,
    {
        spawn_local(async move {
            let (request, result) = pending.await;
            match ctrl.try_update(|c| finish(c, request, result)) {
                Some(effects) => self.run(effects),
                None => tracing::debug!("page disposed before response"),
            }
        });
    }
}
