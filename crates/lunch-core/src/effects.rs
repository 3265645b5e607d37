//! Controller Effects
//!
//! Side effects a controller step asks its page host to perform.

use std::time::Duration;

use crate::error::Field;
use crate::feedback::{BannerToken, Notice};

/// Action the host runs after a delay
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deferred {
    /// Leave the page (`window.location.href = path`)
    Navigate(String),
    /// Hide the banner if it still shows this message
    HideBanner(BannerToken),
    /// Flip the auth page back to the login form
    ShowLoginView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheduled {
    pub after: Duration,
    pub action: Deferred,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Effects {
    pub toasts: Vec<Notice>,
    pub focus: Option<Field>,
    /// Refetch the admin item list
    pub reload_items: bool,
    pub scheduled: Vec<Scheduled>,
}

impl Effects {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn toast(mut self, notice: Notice) -> Self {
        self.toasts.push(notice);
        self
    }

    pub fn focus(mut self, field: Field) -> Self {
        self.focus = Some(field);
        self
    }

    pub fn reload(mut self) -> Self {
        self.reload_items = true;
        self
    }

    pub fn schedule(mut self, after: Duration, action: Deferred) -> Self {
        self.scheduled.push(Scheduled { after, action });
        self
    }

    pub fn navigate_now(self, path: impl Into<String>) -> Self {
        self.schedule(Duration::ZERO, Deferred::Navigate(path.into()))
    }

    /// Target of the first scheduled navigation, if any
    pub fn navigation(&self) -> Option<&str> {
        self.scheduled.iter().find_map(|s| match &s.action {
            Deferred::Navigate(path) => Some(path.as_str()),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Result of starting an action: a request to send, or a local rejection
#[derive(Debug, Clone, PartialEq)]
pub enum Begin<R> {
    Send(R),
    Rejected(Effects),
}

impl<R> Begin<R> {
    pub fn request(self) -> Option<R> {
        match self {
            Begin::Send(request) => Some(request),
            Begin::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<&Effects> {
        match self {
            Begin::Send(_) => None,
            Begin::Rejected(effects) => Some(effects),
        }
    }
}
