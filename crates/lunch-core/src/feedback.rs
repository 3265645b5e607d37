//! User Feedback
//!
//! Toasts (stacking, self-removing overlays) and banners (a single inline
//! message slot that a stale hide timer cannot clear).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    /// Font Awesome icon name
    pub fn icon(&self) -> &'static str {
        match self {
            NoticeKind::Success => "fa-check-circle",
            NoticeKind::Error => "fa-exclamation-circle",
            NoticeKind::Info => "fa-info-circle",
        }
    }

    pub fn css_suffix(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
            NoticeKind::Info => "info",
        }
    }
}

/// A message to show the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, message: message.into() }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

// ========================
// Toasts
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

/// Animation phase; the host moves a toast along on timers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Shown,
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub notice: Notice,
    pub phase: ToastPhase,
}

/// Stack of independent toasts (no dedup, no queue)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toaster {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl Toaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notice: Notice) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        self.toasts.push(Toast { id, notice, phase: ToastPhase::Entering });
        id
    }

    pub fn reveal(&mut self, id: ToastId) {
        self.set_phase(id, ToastPhase::Shown);
    }

    pub fn dismiss(&mut self, id: ToastId) {
        self.set_phase(id, ToastPhase::Leaving);
    }

    pub fn remove(&mut self, id: ToastId) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    fn set_phase(&mut self, id: ToastId, phase: ToastPhase) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            toast.phase = phase;
        }
    }
}

// ========================
// Banner
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BannerToken(u64);

/// Single inline message slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Banner {
    seq: u64,
    current: Option<(BannerToken, Notice)>,
}

impl Banner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current message; the token identifies this showing
    pub fn show(&mut self, notice: Notice) -> BannerToken {
        self.seq += 1;
        let token = BannerToken(self.seq);
        self.current = Some((token, notice));
        token
    }

    /// Hide only if the message shown under `token` is still the current one
    pub fn hide_if(&mut self, token: BannerToken) -> bool {
        match &self.current {
            Some((current, _)) if *current == token => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref().map(|(_, notice)| notice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_stack_without_dedup() {
        let mut toaster = Toaster::new();
        let a = toaster.push(Notice::error("boom"));
        let b = toaster.push(Notice::error("boom"));
        assert_ne!(a, b);
        assert_eq!(toaster.len(), 2);

        toaster.reveal(a);
        toaster.dismiss(b);
        assert_eq!(toaster.toasts()[0].phase, ToastPhase::Shown);
        assert_eq!(toaster.toasts()[1].phase, ToastPhase::Leaving);

        toaster.remove(a);
        assert_eq!(toaster.toasts().len(), 1);
        assert_eq!(toaster.toasts()[0].id, b);
    }

    #[test]
    fn test_stale_banner_timer_keeps_newer_message() {
        let mut banner = Banner::new();
        let old = banner.show(Notice::success("first"));
        let new = banner.show(Notice::error("second"));

        assert!(!banner.hide_if(old));
        assert_eq!(banner.current().map(|n| n.message.as_str()), Some("second"));

        assert!(banner.hide_if(new));
        assert!(banner.current().is_none());
    }

    #[test]
    fn test_kind_icons() {
        assert_eq!(Notice::success("x").kind.icon(), "fa-check-circle");
        assert_eq!(NoticeKind::Error.css_suffix(), "error");
        assert!(Notice::error("x").is_error());
    }
}
