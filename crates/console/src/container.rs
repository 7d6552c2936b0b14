//! Management container: the per-entity orchestrator.
//!
//! Owns the authoritative client-side copy of one entity collection and
//! coordinates the list view, the add/edit form, the delete confirmation
//! dialog, and toast messages. Every asynchronous operation is tagged
//! with a request generation; a completion whose generation no longer
//! matches the container's is discarded, so a stale response can never
//! overwrite newer state.

use qabul_core::table::TableState;
use qabul_gateway::messages::{op_failed, verb};
use qabul_gateway::Outcome;

use crate::dialog::ConfirmDialog;
use crate::ops::EntityOps;
use crate::toast::ToastTray;

/// Coarse activity phase of the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// Initial or full collection fetch in flight.
    Loading,
    /// A create / update / delete in flight.
    Saving,
}

/// Which form modal is open, if any.
#[derive(Debug, Clone)]
pub enum FormMode<E> {
    Add,
    Edit(E),
}

/// How a finished mutation was reconciled into the local collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconcile {
    /// The server returned the authoritative entity; the list was patched.
    Patched,
    /// The response omitted the entity body; caller must reload the list.
    NeedsReload,
    /// The backend rejected the operation; nothing changed.
    Rejected,
    /// A newer operation superseded this completion; it was discarded.
    Stale,
}

/// Management container for one entity family.
pub struct Management<O: EntityOps> {
    ops: O,
    pub items: Vec<O::Entity>,
    pub phase: Phase,
    pub form: Option<FormMode<O::Entity>>,
    /// Inline banner shown in the open form after a rejected submit.
    pub form_error: Option<String>,
    pub dialog: ConfirmDialog<O::Entity>,
    pub table: TableState,
    pub toasts: ToastTray,
    generation: u64,
}

impl<O: EntityOps> Management<O> {
    pub fn new(ops: O) -> Self {
        Self {
            ops,
            items: Vec::new(),
            phase: Phase::Idle,
            form: None,
            form_error: None,
            dialog: ConfirmDialog::new(),
            table: TableState::new(),
            toasts: ToastTray::new(),
            generation: 0,
        }
    }

    pub fn ops(&self) -> &O {
        &self.ops
    }

    fn bump(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    // -----------------------------------------------------------------
    // Collection loading
    // -----------------------------------------------------------------

    /// Start a collection fetch; returns the generation to hand back to
    /// [`finish_load`](Self::finish_load).
    pub fn begin_load(&mut self) -> u64 {
        self.phase = Phase::Loading;
        self.bump()
    }

    /// Apply a finished collection fetch, unless it has gone stale.
    pub fn finish_load(&mut self, generation: u64, outcome: Outcome<Vec<O::Entity>>) {
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "discarding stale load");
            return;
        }
        self.phase = Phase::Idle;
        if outcome.success {
            self.items = outcome.data.unwrap_or_default();
            self.table.reset_page();
        } else {
            let fallback = op_failed(verb::LOAD, self.ops.label());
            self.toasts.error(outcome.message_or(&fallback).to_string());
        }
    }

    /// Fetch the collection and apply it.
    pub async fn load(&mut self) {
        let generation = self.begin_load();
        let outcome = self.ops.list().await;
        self.finish_load(generation, outcome);
    }

    // -----------------------------------------------------------------
    // Modal lifecycle
    // -----------------------------------------------------------------

    pub fn open_add(&mut self) {
        self.form = Some(FormMode::Add);
        self.form_error = None;
    }

    pub fn open_edit(&mut self, row: O::Entity) {
        self.form = Some(FormMode::Edit(row));
        self.form_error = None;
    }

    pub fn close_form(&mut self) {
        self.form = None;
        self.form_error = None;
    }

    pub fn open_delete(&mut self, row: O::Entity) {
        self.dialog.open(row);
    }

    // -----------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------

    /// Apply a finished create, unless stale.
    pub fn finish_create(&mut self, generation: u64, outcome: Outcome<O::Entity>) -> Reconcile {
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "discarding stale create");
            return Reconcile::Stale;
        }
        self.phase = Phase::Idle;
        if !outcome.success {
            let fallback = op_failed(verb::ADD, self.ops.label());
            let message = outcome.message_or(&fallback).to_string();
            self.form_error = Some(message.clone());
            self.toasts.error(message);
            return Reconcile::Rejected;
        }
        self.close_form();
        self.toasts.success("تمت الإضافة بنجاح");
        match outcome.data {
            Some(entity) => {
                self.items.push(entity);
                self.table.reset_page();
                Reconcile::Patched
            }
            None => Reconcile::NeedsReload,
        }
    }

    /// Submit the add form. On success the modal closes and the list is
    /// patched with the server's entity (or reloaded when the response
    /// omitted it); on failure the modal stays open with an inline error.
    pub async fn submit_create(&mut self, input: O::Create) {
        self.phase = Phase::Saving;
        let generation = self.bump();
        let outcome = self.ops.create(&input).await;
        if self.finish_create(generation, outcome) == Reconcile::NeedsReload {
            self.load().await;
        }
    }

    /// Apply a finished update, unless stale.
    pub fn finish_update(&mut self, generation: u64, outcome: Outcome<O::Entity>) -> Reconcile {
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "discarding stale update");
            return Reconcile::Stale;
        }
        self.phase = Phase::Idle;
        if !outcome.success {
            let fallback = op_failed(verb::UPDATE, self.ops.label());
            let message = outcome.message_or(&fallback).to_string();
            self.form_error = Some(message.clone());
            self.toasts.error(message);
            return Reconcile::Rejected;
        }
        self.close_form();
        self.toasts.success("تم التعديل بنجاح");
        match outcome.data {
            Some(entity) => {
                let key = O::key(&entity);
                match self.items.iter_mut().find(|e| O::key(e) == key) {
                    Some(slot) => {
                        *slot = entity;
                        Reconcile::Patched
                    }
                    // Row vanished locally; resync with the server.
                    None => Reconcile::NeedsReload,
                }
            }
            None => Reconcile::NeedsReload,
        }
    }

    /// Submit the edit form; same close/stay-open policy as create.
    pub async fn submit_update(&mut self, input: O::Update) {
        self.phase = Phase::Saving;
        let generation = self.bump();
        let outcome = self.ops.update(&input).await;
        if self.finish_update(generation, outcome) == Reconcile::NeedsReload {
            self.load().await;
        }
    }

    /// Confirm the pending delete. The dialog closes only on success; a
    /// rejected delete leaves the row in place and the dialog open with
    /// the backend's message verbatim.
    pub async fn confirm_delete(&mut self) {
        let key = match self.dialog.target() {
            Some(target) => O::key(target),
            None => return,
        };
        self.dialog.begin();
        self.phase = Phase::Saving;
        let generation = self.bump();

        let outcome = self.ops.delete(&key).await;

        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "discarding stale delete");
            return;
        }
        self.phase = Phase::Idle;
        if outcome.success {
            self.items.retain(|e| O::key(e) != key);
            self.table.reset_page();
            self.dialog.succeed();
            self.toasts.success("تم الحذف بنجاح");
        } else {
            let fallback = op_failed(verb::DELETE, self.ops.label());
            let message = outcome.message_or(&fallback).to_string();
            self.dialog.fail(message.clone());
            self.toasts.error(message);
        }
    }

    // -----------------------------------------------------------------
    // List state
    // -----------------------------------------------------------------

    /// Update the search query; the table resets to page 1 on change.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.table.set_query(query);
    }
}
