//! Client-side list view logic: free-text filtering, single-column
//! sorting, and fixed-size pagination.
//!
//! All of it is a pure function of the source rows plus the
//! [`TableState`]; no I/O and no interior mutability. Containers own a
//! `TableState` per entity list and recompute the [`TableView`] whenever
//! rows or state change.

/// Fixed page size used by every entity list.
pub const PAGE_SIZE: usize = 10;

/// Maximum number of numbered page buttons rendered at once.
pub const PAGE_WINDOW: usize = 5;

/// Sort direction for the active sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// The active sort, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub column: String,
    pub order: SortOrder,
}

/// A sortable cell value. Numbers compare numerically, text compares
/// case-insensitively; numbers order before text when a column mixes both.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Int(i64),
    Text(String),
}

impl SortValue {
    fn rank(&self) -> u8 {
        match self {
            SortValue::Int(_) => 0,
            SortValue::Text(_) => 1,
        }
    }

    fn cmp_value(&self, other: &Self) -> std::cmp::Ordering {
        match (self, other) {
            (SortValue::Int(a), SortValue::Int(b)) => a.cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => {
                a.to_lowercase().cmp(&b.to_lowercase())
            }
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Row interface consumed by the table logic.
pub trait TableRow {
    /// String-coercible cells matched by the free-text filter.
    fn search_text(&self) -> Vec<String>;

    /// Sort key for a named column; `None` when the column does not sort.
    fn sort_key(&self, column: &str) -> Option<SortValue>;
}

/// Why a rendered table is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The source collection itself has no rows ("add the first one").
    SourceEmpty,
    /// Rows exist but none match the current query ("refine the search").
    NoMatches,
}

/// One slot of the pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Search / sort / page state for one entity list.
#[derive(Debug, Clone, Default)]
pub struct TableState {
    query: String,
    sort: Option<Sort>,
    page: usize,
}

impl TableState {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            sort: None,
            page: 1,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> Option<&Sort> {
        self.sort.as_ref()
    }

    /// Current 1-based page.
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    /// Update the free-text query. Any change resets the page to 1.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.query {
            self.query = query;
            self.page = 1;
        }
    }

    /// Reset to page 1; called by containers when the source rows change.
    pub fn reset_page(&mut self) {
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Cycle the sort state of a column header click:
    /// unsorted -> ascending -> descending -> unsorted. Clicking a
    /// different column starts it at ascending.
    pub fn toggle_sort(&mut self, column: &str) {
        self.sort = match self.sort.take() {
            Some(sort) if sort.column == column => match sort.order {
                SortOrder::Ascending => Some(Sort {
                    column: sort.column,
                    order: SortOrder::Descending,
                }),
                SortOrder::Descending => None,
            },
            _ => Some(Sort {
                column: column.to_string(),
                order: SortOrder::Ascending,
            }),
        };
    }

    /// Compute the visible page for the given source rows.
    pub fn view<'a, R: TableRow>(&self, rows: &'a [R]) -> TableView<'a, R> {
        let needle = self.query.trim().to_lowercase();

        let mut filtered: Vec<&R> = rows
            .iter()
            .filter(|row| {
                needle.is_empty()
                    || row
                        .search_text()
                        .iter()
                        .any(|cell| cell.to_lowercase().contains(&needle))
            })
            .collect();

        if let Some(sort) = &self.sort {
            // sort_by is stable, so ties keep insertion order.
            filtered.sort_by(|a, b| {
                let ord = match (a.sort_key(&sort.column), b.sort_key(&sort.column)) {
                    (Some(ka), Some(kb)) => ka.cmp_value(&kb),
                    (Some(_), None) => std::cmp::Ordering::Less,
                    (None, Some(_)) => std::cmp::Ordering::Greater,
                    (None, None) => std::cmp::Ordering::Equal,
                };
                match sort.order {
                    SortOrder::Ascending => ord,
                    SortOrder::Descending => ord.reverse(),
                }
            });
        }

        let total_rows = filtered.len();
        let total_pages = total_rows.div_ceil(PAGE_SIZE).max(1);
        let page = self.page().min(total_pages);

        let start = (page - 1) * PAGE_SIZE;
        let page_rows: Vec<&R> = filtered
            .into_iter()
            .skip(start)
            .take(PAGE_SIZE)
            .collect();

        let empty = if rows.is_empty() {
            Some(EmptyState::SourceEmpty)
        } else if total_rows == 0 {
            Some(EmptyState::NoMatches)
        } else {
            None
        };

        TableView {
            rows: page_rows,
            page,
            total_pages,
            total_rows,
            window: page_window(total_pages, page),
            empty,
        }
    }
}

/// The computed, renderable slice of a list.
#[derive(Debug)]
pub struct TableView<'a, R> {
    /// Rows of the current page, in filtered (and sorted) order.
    pub rows: Vec<&'a R>,
    /// Clamped 1-based current page.
    pub page: usize,
    pub total_pages: usize,
    /// Row count after filtering, before pagination.
    pub total_rows: usize,
    /// Numbered buttons plus ellipsis markers for the pagination strip.
    pub window: Vec<PageItem>,
    pub empty: Option<EmptyState>,
}

impl<R> TableView<'_, R> {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Build the pagination strip: at most [`PAGE_WINDOW`] numbered slots
/// centered on the current page, with ellipsis markers (and the first /
/// last page numbers) when pages are elided.
fn page_window(total_pages: usize, current: usize) -> Vec<PageItem> {
    if total_pages <= PAGE_WINDOW {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let half = PAGE_WINDOW / 2;
    let mut start = current.saturating_sub(half).max(1);
    let mut end = start + PAGE_WINDOW - 1;
    if end > total_pages {
        end = total_pages;
        start = end + 1 - PAGE_WINDOW;
    }

    let mut items = Vec::new();
    if start > 1 {
        items.push(PageItem::Page(1));
        if start > 2 {
            items.push(PageItem::Ellipsis);
        }
    }
    for p in start..=end {
        items.push(PageItem::Page(p));
    }
    if end < total_pages {
        if end < total_pages - 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page(total_pages));
    }
    items
}
