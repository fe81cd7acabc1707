use tablekit::{paginate, PaginationState};

// ============================================================================
// Window Placement Tests
// ============================================================================

#[test]
fn test_centered_window_with_edge_buttons() {
    let s = paginate(100, 10, 5, 5, true);

    assert_eq!(s.total_pages, 10);
    assert_eq!(s.current_page, 5);
    assert_eq!(s.visible, vec![3, 4, 5, 6, 7]);
    assert!(s.show_start_ellipsis);
    assert!(s.show_end_ellipsis);
}

#[test]
fn test_centered_window_without_edge_buttons() {
    let s = paginate(200, 10, 10, 5, false);

    assert_eq!(s.total_pages, 20);
    assert_eq!(s.visible, vec![8, 9, 10, 11, 12]);
    assert!(s.show_start_ellipsis);
    assert!(s.show_end_ellipsis);
}

#[test]
fn test_window_clamped_near_start() {
    let s = paginate(200, 10, 2, 5, false);

    assert_eq!(s.visible, vec![1, 2, 3, 4, 5]);
    assert!(!s.show_start_ellipsis, "window touches the first page");
    assert!(s.show_end_ellipsis);
}

#[test]
fn test_window_clamped_near_end() {
    let s = paginate(200, 10, 19, 5, false);

    assert_eq!(s.visible, vec![16, 17, 18, 19, 20]);
    assert!(s.show_start_ellipsis);
    assert!(!s.show_end_ellipsis, "window touches the last page");
}

#[test]
fn test_edge_buttons_bound_the_window() {
    // 20 pages, window of 5, current in the middle: with edge buttons the
    // window never includes page 1 or page 20.
    let s = paginate(200, 10, 10, 5, true);

    assert_eq!(s.visible, vec![8, 9, 10, 11, 12]);
    assert!(!s.visible.contains(&1));
    assert!(!s.visible.contains(&20));
    assert!(s.show_start_ellipsis);
    assert!(s.show_end_ellipsis);

    // Near the start the window is pushed to begin right after page 1.
    let s = paginate(200, 10, 1, 5, true);
    assert_eq!(s.visible, vec![2, 3, 4, 5, 6]);
    assert!(!s.show_start_ellipsis, "window adjacent to the first page");
    assert!(s.show_end_ellipsis);
}

#[test]
fn test_everything_fits_without_ellipses() {
    let s = paginate(20, 10, 1, 5, true);

    assert_eq!(s.visible, vec![1, 2]);
    assert!(!s.show_start_ellipsis);
    assert!(!s.show_end_ellipsis);
}

#[test]
fn test_edge_reservation_absorbs_small_page_counts() {
    // 7 pages fit in a 5-button window plus the 2 reserved edges, so the
    // full range is shown and the edges are part of it.
    let s = paginate(70, 10, 4, 5, true);

    assert_eq!(s.visible, vec![1, 2, 3, 4, 5, 6, 7]);
    assert!(!s.show_start_ellipsis);
    assert!(!s.show_end_ellipsis);
}

// ============================================================================
// Trivial Window Tests
// ============================================================================

#[test]
fn test_single_button_window() {
    let s = paginate(100, 10, 5, 1, true);

    assert_eq!(s.visible, vec![5]);
    assert!(s.show_start_ellipsis);
    assert!(s.show_end_ellipsis);
}

#[test]
fn test_single_button_window_at_edges() {
    let first = paginate(100, 10, 1, 1, true);
    assert_eq!(first.visible, vec![1]);
    assert!(!first.show_start_ellipsis, "nothing before page 1");
    assert!(first.show_end_ellipsis);

    let last = paginate(100, 10, 10, 1, true);
    assert_eq!(last.visible, vec![10]);
    assert!(last.show_start_ellipsis);
    assert!(!last.show_end_ellipsis, "nothing after the last page");
}

#[test]
fn test_single_button_window_hides_ellipses_without_edges() {
    let s = paginate(100, 10, 5, 1, false);

    assert_eq!(s.visible, vec![5]);
    assert!(!s.show_start_ellipsis);
    assert!(!s.show_end_ellipsis);
}

// ============================================================================
// Input Normalization Tests
// ============================================================================

#[test]
fn test_zero_total_yields_one_page() {
    let s = paginate(0, 10, 1, 5, true);

    assert_eq!(s.total_pages, 1);
    assert_eq!(s.current_page, 1);
    assert_eq!(s.visible, vec![1]);
}

#[test]
fn test_zero_page_size_falls_back_to_one() {
    let s = paginate(3, 0, 1, 5, false);

    assert_eq!(s.total_pages, 3, "page size 0 treated as 1");
}

#[test]
fn test_zero_max_buttons_falls_back_to_one() {
    let s = paginate(100, 10, 5, 0, false);

    assert_eq!(s.visible, vec![5]);
}

#[test]
fn test_page_clamped_into_range() {
    let below = paginate(100, 10, 0, 5, false);
    assert_eq!(below.current_page, 1);

    let above = paginate(100, 10, 99, 5, false);
    assert_eq!(above.current_page, 10);
}

// ============================================================================
// Contract Tests
// ============================================================================

#[test]
fn test_post_conditions_hold_across_inputs() {
    for total in [0, 1, 9, 10, 11, 55, 200, 1000] {
        for page_size in [0, 1, 3, 10] {
            for page in [0, 1, 2, 7, 50] {
                for max_buttons in [0, 1, 2, 5, 9] {
                    for edge_buttons in [false, true] {
                        let s = paginate(total, page_size, page, max_buttons, edge_buttons);

                        assert!(s.total_pages >= 1);
                        assert!(
                            (1..=s.total_pages).contains(&s.current_page),
                            "current page in range for total={total} page={page}"
                        );
                        assert!(!s.visible.is_empty(), "visible never empty");
                        assert!(
                            s.visible.windows(2).all(|w| w[0] < w[1]),
                            "visible strictly ascending"
                        );
                        assert!(
                            s.visible.iter().all(|p| (1..=s.total_pages).contains(p)),
                            "visible pages within 1..=total_pages"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_deterministic() {
    let a = paginate(123, 7, 9, 4, true);
    let b = paginate(123, 7, 9, 4, true);

    assert_eq!(a, b);
}

#[test]
fn test_state_is_plain_data() {
    let s = PaginationState {
        total_pages: 3,
        current_page: 2,
        visible: vec![1, 2, 3],
        show_start_ellipsis: false,
        show_end_ellipsis: false,
    };

    assert_eq!(s.clone(), s);
}
