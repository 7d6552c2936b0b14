//! Delete confirmation dialog.
//!
//! Gates destructive deletes behind an explicit confirmation. Unlike the
//! legacy portal, the dialog closes only when the confirmed operation
//! succeeds; on failure it stays open with the specific error inline so
//! the user can retry or cancel.

/// Confirmation dialog state for one target entity.
#[derive(Debug, Clone)]
pub struct ConfirmDialog<E> {
    target: Option<E>,
    in_flight: bool,
    error: Option<String>,
}

impl<E> Default for ConfirmDialog<E> {
    fn default() -> Self {
        Self {
            target: None,
            in_flight: false,
            error: None,
        }
    }
}

impl<E> ConfirmDialog<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open for a target; clears any error from a previous attempt.
    pub fn open(&mut self, target: E) {
        self.target = Some(target);
        self.in_flight = false;
        self.error = None;
    }

    /// Dismiss without confirming. Ignored while a confirm is in flight.
    pub fn cancel(&mut self) {
        if !self.in_flight {
            self.target = None;
            self.error = None;
        }
    }

    /// The dialog renders nothing when there is no target.
    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<&E> {
        self.target.as_ref()
    }

    /// All action buttons are disabled while the confirm is in flight.
    pub fn actions_disabled(&self) -> bool {
        self.in_flight
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Mark the confirm as started.
    pub fn begin(&mut self) {
        self.in_flight = true;
        self.error = None;
    }

    /// Confirm succeeded: close.
    pub fn succeed(&mut self) {
        self.target = None;
        self.in_flight = false;
        self.error = None;
    }

    /// Confirm failed: stay open and show the error inline.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.in_flight = false;
        self.error = Some(message.into());
    }
}
