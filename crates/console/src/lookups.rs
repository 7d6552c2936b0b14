//! Joint lookup loading for forms.
//!
//! A form that needs several lookup lists (degrees, departments,
//! semesters, ...) fetches them concurrently and waits for all of them.
//! Partial failure is best effort: failed lookups land in a visible error
//! list while the ones that succeeded remain usable.

use std::collections::HashMap;

use futures::future::join_all;
use qabul_core::lookups::{LookupKind, LookupOption};
use qabul_gateway::Gateway;

/// One failed lookup fetch.
#[derive(Debug, Clone)]
pub struct LookupFailure {
    pub kind: LookupKind,
    pub message: String,
}

/// The lookup lists one form depends on.
#[derive(Debug, Default)]
pub struct LookupPanel {
    options: HashMap<LookupKind, Vec<LookupOption>>,
    pub failures: Vec<LookupFailure>,
}

impl LookupPanel {
    /// Fetch all `kinds` concurrently.
    pub async fn load(gateway: &Gateway, kinds: &[LookupKind]) -> Self {
        let fetches = kinds.iter().map(|&kind| async move {
            let outcome = gateway.lookup(kind).await;
            (kind, outcome)
        });

        let mut panel = LookupPanel::default();
        for (kind, outcome) in join_all(fetches).await {
            if outcome.success {
                panel
                    .options
                    .insert(kind, outcome.data.unwrap_or_default());
            } else {
                let message = outcome
                    .message
                    .unwrap_or_else(|| format!("تعذر تحميل {}", kind.label()));
                tracing::warn!(lookup = ?kind, %message, "lookup fetch failed");
                panel.failures.push(LookupFailure { kind, message });
            }
        }
        panel
    }

    /// Options of one lookup; `None` when its fetch failed.
    pub fn options(&self, kind: LookupKind) -> Option<&[LookupOption]> {
        self.options.get(&kind).map(Vec::as_slice)
    }

    /// Whether every requested lookup arrived.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
