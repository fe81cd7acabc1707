//! Table view state: filter, sort, and paginate an in-memory row set.

use crate::column::Column;
use crate::pagination::{paginate, PaginationState};
use crate::value::{compare, Row};

/// Sort direction for the active sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    fn flipped(self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }
}

/// View state over an in-memory row set.
///
/// Similar to a scroll or focus state, this is user-managed state that
/// persists across frames: the host pushes rows in, calls mutators from
/// input handlers, and renders [`view_rows`](TableState::view_rows).
/// Every mutator recomputes the filtered, sorted, paged projection before
/// returning, so the state is never observable mid-update.
///
/// Filtering matches the free-text term against every column's effective
/// value (accessor-aware). Sorting reads the raw field for the column key;
/// a column accessor only affects filtering and display.
pub struct TableState<T> {
    columns: Vec<Column<T>>,
    rows: Vec<T>,

    term: String,
    sort_key: Option<String>,
    sort_dir: SortDir,
    page: usize,
    page_size: usize,

    view_rows: Vec<T>,
    total_filtered: usize,
}

impl<T: Row + Clone> TableState<T> {
    /// Create an empty table with the given columns and a page size of 5.
    pub fn new(columns: Vec<Column<T>>) -> Self {
        Self::with_page_size(columns, 5)
    }

    /// Create an empty table with an explicit page size (minimum 1).
    pub fn with_page_size(columns: Vec<Column<T>>, page_size: usize) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            term: String::new(),
            sort_key: None,
            sort_dir: SortDir::Asc,
            page: 1,
            page_size: page_size.max(1),
            view_rows: Vec::new(),
            total_filtered: 0,
        }
    }

    /// Replace the full row set.
    ///
    /// Filter term, sort, and current page are kept as-is; callers that
    /// want a fresh view reset them separately.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.recompute();
    }

    /// Set the free-text filter. The term is trimmed and lower-cased;
    /// an empty term clears the filter. Resets to page 1.
    pub fn apply_filter(&mut self, text: &str) {
        self.term = text.trim().to_lowercase();
        self.page = 1;
        self.recompute();
    }

    /// Change the page size and reset to page 1. A zero size is ignored.
    pub fn change_page_size(&mut self, size: usize) {
        if size == 0 {
            return;
        }
        self.page_size = size;
        self.page = 1;
        self.recompute();
    }

    /// Sort by the column with the given key.
    ///
    /// Ignored for unknown or non-sortable columns. Re-sorting the active
    /// column flips the direction; a new column starts ascending. The
    /// current page is left untouched, so the view can run past the end of
    /// a shrunken result set until an explicit [`goto_page`](Self::goto_page).
    pub fn sort_by(&mut self, key: &str) {
        let sortable = self
            .columns
            .iter()
            .any(|c| c.key() == key && c.is_sortable());
        if !sortable {
            return;
        }

        if self.sort_key.as_deref() == Some(key) {
            self.sort_dir = self.sort_dir.flipped();
        } else {
            self.sort_key = Some(key.to_string());
            self.sort_dir = SortDir::Asc;
        }
        self.recompute();
    }

    /// Go to a page, clamped into the valid range for the current filter.
    pub fn goto_page(&mut self, page: usize) {
        let max = self.total_filtered.div_ceil(self.page_size).max(1);
        self.page = page.clamp(1, max);
        self.recompute();
    }

    /// The current page slice of the filtered, sorted rows.
    pub fn view_rows(&self) -> &[T] {
        &self.view_rows
    }

    /// Number of rows that pass the current filter.
    pub fn total_filtered(&self) -> usize {
        self.total_filtered
    }

    /// Current page, 1-based.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The normalized filter term. Empty when no filter is active.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// The active sort column and direction, if any.
    pub fn sort(&self) -> Option<(&str, SortDir)> {
        self.sort_key.as_deref().map(|k| (k, self.sort_dir))
    }

    /// The column definitions.
    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    /// Pagination window for the current view, for rendering page buttons.
    pub fn pagination(&self, max_buttons: usize, edge_buttons: bool) -> PaginationState {
        paginate(
            self.total_filtered,
            self.page_size,
            self.page,
            max_buttons,
            edge_buttons,
        )
    }

    fn recompute(&mut self) {
        let mut rows: Vec<T> = if self.term.is_empty() {
            self.rows.clone()
        } else {
            self.rows
                .iter()
                .filter(|row| {
                    self.columns.iter().any(|col| {
                        col.value_of(row)
                            .to_string()
                            .to_lowercase()
                            .contains(&self.term)
                    })
                })
                .cloned()
                .collect()
        };

        if let Some(key) = &self.sort_key {
            // Vec::sort_by is stable, so ties keep their source order.
            rows.sort_by(|a, b| {
                let ord = compare(&a.field(key), &b.field(key));
                match self.sort_dir {
                    SortDir::Asc => ord,
                    SortDir::Desc => ord.reverse(),
                }
            });
        }

        self.total_filtered = rows.len();
        let start = (self.page - 1) * self.page_size;
        let end = (start + self.page_size).min(rows.len());
        self.view_rows = if start < rows.len() {
            rows[start..end].to_vec()
        } else {
            Vec::new()
        };

        log::debug!(
            "[table] recompute term={:?} sort={:?} page={} -> {} filtered, {} in view",
            self.term,
            self.sort_key,
            self.page,
            self.total_filtered,
            self.view_rows.len()
        );
    }
}
