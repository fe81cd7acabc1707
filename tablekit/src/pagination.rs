//! Page-button window computation for pagination controls.

/// Render-ready pagination state: which page numbers to show as buttons
/// and whether to put an ellipsis between the window and either edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    /// Total number of pages, at least 1.
    pub total_pages: usize,
    /// The requested page clamped into `1..=total_pages`.
    pub current_page: usize,
    /// Ascending page numbers to render as buttons. Never empty.
    pub visible: Vec<usize>,
    /// Render an ellipsis between the first page and the window.
    pub show_start_ellipsis: bool,
    /// Render an ellipsis between the window and the last page.
    pub show_end_ellipsis: bool,
}

impl PaginationState {
    fn full_range(total_pages: usize, current_page: usize) -> Self {
        Self {
            total_pages,
            current_page,
            visible: (1..=total_pages).collect(),
            show_start_ellipsis: false,
            show_end_ellipsis: false,
        }
    }
}

/// Compute the pagination window for `total` items split into pages of
/// `page_size`, with at most `max_buttons` numbered buttons visible.
///
/// When `edge_buttons` is set the control renders page 1 and the last page
/// outside the sliding window, so the window is bounded away from the edges
/// and the ellipsis flags report gaps toward those reserved buttons.
///
/// Pure and total: malformed inputs are normalized, never rejected.
/// `page_size == 0` and `max_buttons == 0` fall back to 1, `page` is
/// clamped into `1..=total_pages`.
pub fn paginate(
    total: usize,
    page_size: usize,
    page: usize,
    max_buttons: usize,
    edge_buttons: bool,
) -> PaginationState {
    let page_size = page_size.max(1);
    let total_pages = total.div_ceil(page_size).max(1);
    let current_page = page.clamp(1, total_pages);
    let window = max_buttons.max(1);

    // Trivial case: a single button shows only the current page.
    if window == 1 {
        return PaginationState {
            total_pages,
            current_page,
            visible: vec![current_page],
            show_start_ellipsis: edge_buttons && current_page > 1,
            show_end_ellipsis: edge_buttons && current_page < total_pages,
        };
    }

    // Without edge buttons everything fits as soon as the page count does.
    if !edge_buttons && total_pages <= window {
        return PaginationState::full_range(total_pages, current_page);
    }

    // With edge buttons the two reserved slots absorb small page counts:
    // the full range is shown and the edges are part of it, not separate.
    let reserve = if edge_buttons { 2 } else { 0 };
    if total_pages <= window + reserve {
        return PaginationState::full_range(total_pages, current_page);
    }

    // Centered sliding window, shifted back inside its bounds when the
    // current page sits too close to either end.
    let half = window / 2;
    let min_start: i64 = if edge_buttons { 2 } else { 1 };
    let max_end = total_pages as i64 - if edge_buttons { 1 } else { 0 };

    let mut start = current_page as i64 - half as i64;
    let mut end = current_page as i64 + (window - half - 1) as i64;

    if start < min_start {
        start = min_start;
        end = start + window as i64 - 1;
    }
    if end > max_end {
        end = max_end;
        start = end - window as i64 + 1;
    }

    PaginationState {
        total_pages,
        current_page,
        visible: (start..=end).map(|p| p as usize).collect(),
        show_start_ellipsis: start > min_start,
        show_end_ellipsis: end < max_end,
    }
}
