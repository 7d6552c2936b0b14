//! Form state machines: cascading dependent selects and repeatable
//! sub-record rows.
//!
//! These model the interactive pieces of the entity forms (course,
//! student, registration card) without any rendering or I/O. The console
//! layer drives them and performs the actual lookup fetches.

use crate::lookups::LookupOption;
use crate::types::DbId;

/// Lifecycle of a dependent select (e.g. tracks under a degree).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeStatus {
    /// No parent value selected; the select is disabled and empty.
    Disabled,
    /// Parent selected, dependent options are being fetched; still disabled.
    Loading,
    /// Options available; the select is interactive.
    Ready,
}

/// A dependent select whose option list is keyed by a parent selection.
///
/// Changing the parent always clears the previously selected value and
/// returns the select to a disabled state until the new options arrive.
/// Option deliveries for a parent that is no longer current are ignored.
#[derive(Debug, Clone)]
pub struct CascadeSelect {
    parent: Option<DbId>,
    selected: Option<DbId>,
    options: Vec<LookupOption>,
    status: CascadeStatus,
}

impl Default for CascadeSelect {
    fn default() -> Self {
        Self::new()
    }
}

impl CascadeSelect {
    pub fn new() -> Self {
        Self {
            parent: None,
            selected: None,
            options: Vec::new(),
            status: CascadeStatus::Disabled,
        }
    }

    pub fn parent(&self) -> Option<DbId> {
        self.parent
    }

    pub fn selected(&self) -> Option<DbId> {
        self.selected
    }

    pub fn options(&self) -> &[LookupOption] {
        &self.options
    }

    pub fn status(&self) -> CascadeStatus {
        self.status
    }

    /// Whether the select should be rendered disabled.
    pub fn is_disabled(&self) -> bool {
        self.status != CascadeStatus::Ready
    }

    /// Change the parent selection. Clears any selected dependent value
    /// and the stale option list. Returns the parent id whose options now
    /// need fetching, if any.
    pub fn set_parent(&mut self, parent: Option<DbId>) -> Option<DbId> {
        self.parent = parent;
        self.selected = None;
        self.options.clear();
        self.status = match parent {
            Some(_) => CascadeStatus::Loading,
            None => CascadeStatus::Disabled,
        };
        parent
    }

    /// Deliver fetched options for `parent`. Ignored when the parent has
    /// changed since the fetch started.
    pub fn options_loaded(&mut self, parent: DbId, options: Vec<LookupOption>) {
        if self.parent != Some(parent) {
            return;
        }
        self.options = options;
        self.status = CascadeStatus::Ready;
    }

    /// Select a dependent value. Only valid once options are loaded and
    /// the id is among them.
    pub fn select(&mut self, id: DbId) -> bool {
        if self.status != CascadeStatus::Ready {
            return false;
        }
        if self.options.iter().any(|o| o.id == id) {
            self.selected = Some(id);
            true
        } else {
            false
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

/// An ordered, editable list of sub-records (prerequisites, instructor
/// assignments, qualifications) mirrored into the form payload on change.
#[derive(Debug, Clone)]
pub struct RowsEditor<R> {
    rows: Vec<R>,
}

impl<R> Default for RowsEditor<R> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<R> RowsEditor<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn add(&mut self, row: R) {
        self.rows.push(row);
    }

    /// Remove the row at `index`; out-of-range indices are a no-op
    /// returning `None`.
    pub fn remove(&mut self, index: usize) -> Option<R> {
        if index < self.rows.len() {
            Some(self.rows.remove(index))
        } else {
            None
        }
    }

    /// Update the row at `index` in place. Returns `false` when out of
    /// range.
    pub fn update(&mut self, index: usize, f: impl FnOnce(&mut R)) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                f(row);
                true
            }
            None => false,
        }
    }

    /// Drain into the payload representation.
    pub fn into_rows(self) -> Vec<R> {
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(ids: &[DbId]) -> Vec<LookupOption> {
        ids.iter()
            .map(|&id| LookupOption {
                id,
                name: format!("option {id}"),
            })
            .collect()
    }

    // --- Cascade select ---

    #[test]
    fn starts_disabled_without_parent() {
        let select = CascadeSelect::new();
        assert!(select.is_disabled());
        assert_eq!(select.status(), CascadeStatus::Disabled);
    }

    #[test]
    fn parent_change_clears_dependent_selection_and_disables() {
        let mut select = CascadeSelect::new();
        select.set_parent(Some(1));
        select.options_loaded(1, opts(&[10, 11]));
        assert!(select.select(10));

        // Switching the parent must drop the old value and options.
        let fetch = select.set_parent(Some(2));
        assert_eq!(fetch, Some(2));
        assert_eq!(select.selected(), None);
        assert!(select.options().is_empty());
        assert!(select.is_disabled());
        assert_eq!(select.status(), CascadeStatus::Loading);

        // Interactive again only after the new options arrive.
        select.options_loaded(2, opts(&[20]));
        assert!(!select.is_disabled());
        assert!(select.select(20));
    }

    #[test]
    fn stale_option_delivery_is_ignored() {
        let mut select = CascadeSelect::new();
        select.set_parent(Some(1));
        select.set_parent(Some(2));
        // Late response for the first parent arrives after the switch.
        select.options_loaded(1, opts(&[10]));
        assert_eq!(select.status(), CascadeStatus::Loading);
        assert!(select.options().is_empty());
    }

    #[test]
    fn cannot_select_while_loading_or_unknown_id() {
        let mut select = CascadeSelect::new();
        select.set_parent(Some(1));
        assert!(!select.select(10));
        select.options_loaded(1, opts(&[10]));
        assert!(!select.select(99));
        assert!(select.select(10));
    }

    #[test]
    fn clearing_parent_disables() {
        let mut select = CascadeSelect::new();
        select.set_parent(Some(1));
        select.options_loaded(1, opts(&[10]));
        select.select(10);
        assert_eq!(select.set_parent(None), None);
        assert_eq!(select.status(), CascadeStatus::Disabled);
        assert_eq!(select.selected(), None);
    }

    // --- Rows editor ---

    #[test]
    fn add_update_remove_roundtrip() {
        let mut editor: RowsEditor<String> = RowsEditor::new();
        editor.add("MATH101".into());
        editor.add("PHYS102".into());
        assert!(editor.update(1, |r| *r = "PHYS103".into()));
        assert_eq!(editor.remove(0).as_deref(), Some("MATH101"));
        assert_eq!(editor.rows(), ["PHYS103".to_string()]);
    }

    #[test]
    fn out_of_range_operations_are_noops() {
        let mut editor: RowsEditor<i32> = RowsEditor::new();
        editor.add(1);
        assert!(editor.remove(5).is_none());
        assert!(!editor.update(5, |r| *r = 9));
        assert_eq!(editor.len(), 1);
    }
}
