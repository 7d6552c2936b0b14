//! Transient success / error toasts.

use std::time::{Duration, Instant};

/// How long a toast stays visible.
pub const TOAST_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// One transient message.
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    created_at: Instant,
}

impl Toast {
    fn new(kind: ToastKind, message: String) -> Self {
        Self {
            kind,
            message,
            created_at: Instant::now(),
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) >= TOAST_TTL
    }
}

/// Holds the currently visible toasts; expired ones drop on [`prune`].
///
/// [`prune`]: ToastTray::prune
#[derive(Debug, Default)]
pub struct ToastTray {
    toasts: Vec<Toast>,
}

impl ToastTray {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.toasts.push(Toast::new(ToastKind::Success, message.into()));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.toasts.push(Toast::new(ToastKind::Error, message.into()));
    }

    pub fn prune(&mut self) {
        let now = Instant::now();
        self.toasts.retain(|t| !t.is_expired_at(now));
    }

    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }

    /// The most recent toast, regardless of kind.
    pub fn last(&self) -> Option<&Toast> {
        self.toasts.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_expires_after_ttl() {
        let mut tray = ToastTray::new();
        tray.success("تمت الإضافة بنجاح");
        let toast = tray.last().unwrap();
        let later = Instant::now() + TOAST_TTL + Duration::from_millis(1);
        assert!(toast.is_expired_at(later));
        assert!(!toast.is_expired_at(Instant::now()));
    }

    #[test]
    fn prune_keeps_fresh_toasts() {
        let mut tray = ToastTray::new();
        tray.error("خطأ");
        tray.prune();
        assert_eq!(tray.visible().len(), 1);
    }
}
