//! Page window arithmetic shared by every list view.
//!
//! The engine is a set of pure functions over a collection length, a page
//! size and a 1-based page number. Out-of-range pages are clamped instead of
//! rejected, so a view that lost items under its feet (a delete finishing
//! after a page-forward click) lands on the nearest valid page.

pub mod state;

pub use state::PageState;

use std::fmt;
use std::num::NonZeroUsize;
use std::ops::Range;
use thiserror::Error;

/// Number of page buttons rendered before the sequence switches to ellipses
pub const DEFAULT_MAX_VISIBLE_PAGES: usize = 5;

/// Pages shown at the start of the sequence when the current page is near it
const LEADING_PAGES: usize = 4;

/// Pages shown at the end of the sequence when the current page is near it
const TRAILING_PAGES: usize = 4;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    #[error("items per page must be at least 1, got {0}")]
    InvalidPageSize(usize),
}

pub type PaginationResult<T> = Result<T, PaginationError>;

/// Bounds of the visible page, derived from the collection length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Page the window was computed for, after clamping (1-based)
    pub current_page: usize,

    /// Index of the first visible item
    pub start_index: usize,

    /// One past the index of the last visible item
    pub end_index: usize,

    /// Number of pages; 0 for an empty collection
    pub total_pages: usize,
}

impl PageWindow {
    /// Range of collection indices covered by this window
    pub fn range(&self) -> Range<usize> {
        self.start_index..self.end_index
    }

    /// Slice of `collection` visible on this page
    ///
    /// The window must have been computed for `collection.len()`.
    pub fn items<'a, T>(&self, collection: &'a [T]) -> &'a [T] {
        &collection[self.range()]
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.end_index - self.start_index
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether navigation controls should be rendered at all
    pub fn needs_pagination(&self) -> bool {
        self.total_pages > 1
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Entry of a rendered page-number sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Page(usize),
    Ellipsis,
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageToken::Page(page) => write!(f, "{}", page),
            PageToken::Ellipsis => f.write_str("…"),
        }
    }
}

/// Number of pages needed for `collection_len` items
pub fn total_pages(collection_len: usize, items_per_page: usize) -> PaginationResult<usize> {
    Ok(collection_len.div_ceil(page_size(items_per_page)?.get()))
}

/// Compute the visible window for `current_page`
///
/// The page is clamped into `[1, max(1, total_pages)]` first, so stale or
/// hostile page numbers never fail.
pub fn compute_window(
    collection_len: usize,
    items_per_page: usize,
    current_page: i64,
) -> PaginationResult<PageWindow> {
    Ok(window_for(collection_len, page_size(items_per_page)?, current_page))
}

pub(crate) fn page_size(items_per_page: usize) -> PaginationResult<NonZeroUsize> {
    NonZeroUsize::new(items_per_page).ok_or(PaginationError::InvalidPageSize(items_per_page))
}

pub(crate) fn window_for(
    collection_len: usize,
    items_per_page: NonZeroUsize,
    current_page: i64,
) -> PageWindow {
    let per_page = items_per_page.get();
    let total_pages = collection_len.div_ceil(per_page);
    let current_page = go_to_page(current_page, total_pages);

    let start_index = ((current_page - 1) * per_page).min(collection_len);
    let end_index = (start_index + per_page).min(collection_len);

    PageWindow {
        current_page,
        start_index,
        end_index,
        total_pages,
    }
}

/// Clamp a requested page into `[1, max(1, total_pages)]`
pub fn go_to_page(requested_page: i64, total_pages: usize) -> usize {
    let last = last_page(total_pages);
    if requested_page < 1 {
        1
    } else {
        usize::try_from(requested_page).map_or(last, |page| page.min(last))
    }
}

/// Page after `current_page`, or `current_page` itself on the last page
pub fn next_page(current_page: usize, total_pages: usize) -> usize {
    current_page
        .saturating_add(1)
        .min(last_page(total_pages))
        .max(1)
}

/// Page before `current_page`, or 1 on the first page
pub fn previous_page(current_page: usize, total_pages: usize) -> usize {
    current_page
        .saturating_sub(1)
        .min(last_page(total_pages))
        .max(1)
}

/// Page-number sequence with the default width of five buttons
pub fn build_page_sequence(current_page: usize, total_pages: usize) -> Vec<PageToken> {
    build_page_sequence_with(current_page, total_pages, DEFAULT_MAX_VISIBLE_PAGES)
}

/// Page-number sequence for rendering navigation controls
///
/// Always contains page 1 and `total_pages`, plus a window around the
/// current page. `max_visible` below five is raised to five: the leading
/// and trailing windows are four pages wide and would otherwise repeat
/// pages around the ellipsis.
pub fn build_page_sequence_with(
    current_page: usize,
    total_pages: usize,
    max_visible: usize,
) -> Vec<PageToken> {
    let max_visible = max_visible.max(DEFAULT_MAX_VISIBLE_PAGES);
    if total_pages <= max_visible {
        return (1..=total_pages).map(PageToken::Page).collect();
    }

    let current = current_page.clamp(1, total_pages);

    if current <= LEADING_PAGES - 1 {
        let mut pages: Vec<PageToken> = (1..=LEADING_PAGES).map(PageToken::Page).collect();
        pages.push(PageToken::Ellipsis);
        pages.push(PageToken::Page(total_pages));
        pages
    } else if current >= total_pages - (TRAILING_PAGES - 2) {
        let mut pages = vec![PageToken::Page(1), PageToken::Ellipsis];
        pages.extend((total_pages + 1 - TRAILING_PAGES..=total_pages).map(PageToken::Page));
        pages
    } else {
        vec![
            PageToken::Page(1),
            PageToken::Ellipsis,
            PageToken::Page(current - 1),
            PageToken::Page(current),
            PageToken::Page(current + 1),
            PageToken::Ellipsis,
            PageToken::Page(total_pages),
        ]
    }
}

fn last_page(total_pages: usize) -> usize {
    total_pages.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageToken::{Ellipsis, Page};

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10).unwrap(), 0);
        assert_eq!(total_pages(1, 10).unwrap(), 1);
        assert_eq!(total_pages(10, 10).unwrap(), 1);
        assert_eq!(total_pages(11, 10).unwrap(), 2);
        assert_eq!(total_pages(23, 10).unwrap(), 3);
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        assert_eq!(
            compute_window(10, 0, 1),
            Err(PaginationError::InvalidPageSize(0))
        );
        assert!(total_pages(0, 0).is_err());
    }

    #[test]
    fn test_window_bounds_hold_for_all_inputs() {
        for len in 0..40usize {
            for per_page in 1..12usize {
                for page in -3..8i64 {
                    let window = compute_window(len, per_page, page).unwrap();
                    assert!(window.start_index <= window.end_index);
                    assert!(window.end_index <= len);
                    assert!(window.current_page >= 1);
                    assert!(window.current_page <= window.total_pages.max(1));
                    if len > 0 {
                        assert_eq!(window.total_pages, len.div_ceil(per_page).max(1));
                    }
                }
            }
        }
    }

    #[test]
    fn test_window_for_first_and_last_page() {
        let first = compute_window(23, 10, 1).unwrap();
        assert_eq!(
            first,
            PageWindow {
                current_page: 1,
                start_index: 0,
                end_index: 10,
                total_pages: 3
            }
        );

        let last = compute_window(23, 10, 3).unwrap();
        assert_eq!(last.range(), 20..23);
        assert_eq!(last.len(), 3);
        assert!(last.has_previous());
        assert!(!last.has_next());
    }

    #[test]
    fn test_window_clamps_after_collection_shrinks() {
        // 23 items, page 3 open, 15 items deleted
        let window = compute_window(8, 10, 3).unwrap();
        assert_eq!(window.total_pages, 1);
        assert_eq!(window.current_page, 1);
        assert_eq!(window.range(), 0..8);
        assert!(!window.needs_pagination());
    }

    #[test]
    fn test_window_for_empty_collection() {
        let window = compute_window(0, 10, 4).unwrap();
        assert_eq!(window.total_pages, 0);
        assert_eq!(window.current_page, 1);
        assert!(window.is_empty());
        assert!(!window.needs_pagination());
        let empty: [u8; 0] = [];
        assert!(window.items(&empty).is_empty());
    }

    #[test]
    fn test_window_items_preserve_order() {
        let items: Vec<u32> = (0..23).collect();
        let window = compute_window(items.len(), 10, 2).unwrap();
        assert_eq!(window.items(&items), &items[10..20]);
    }

    #[test]
    fn test_go_to_page_clamps() {
        assert_eq!(go_to_page(-5, 10), 1);
        assert_eq!(go_to_page(0, 10), 1);
        assert_eq!(go_to_page(999, 10), 10);
        assert_eq!(go_to_page(i64::MAX, 10), 10);
        assert_eq!(go_to_page(4, 10), 4);
        assert_eq!(go_to_page(3, 0), 1);
    }

    #[test]
    fn test_go_to_page_is_idempotent() {
        assert_eq!(go_to_page(7, 5), go_to_page(7, 5));
        assert_eq!(go_to_page(go_to_page(7, 5) as i64, 5), 5);
    }

    #[test]
    fn test_next_and_previous_are_noops_at_boundaries() {
        assert_eq!(previous_page(1, 10), 1);
        assert_eq!(next_page(10, 10), 10);
        assert_eq!(next_page(3, 10), 4);
        assert_eq!(previous_page(3, 10), 2);
        assert_eq!(next_page(1, 0), 1);
        assert_eq!(previous_page(1, 0), 1);
    }

    #[test]
    fn test_sequence_without_ellipsis() {
        assert_eq!(build_page_sequence(1, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(
            build_page_sequence(5, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
        assert!(build_page_sequence(1, 0).is_empty());
    }

    #[test]
    fn test_sequence_near_start() {
        assert_eq!(
            build_page_sequence(2, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
        assert_eq!(build_page_sequence(3, 10), build_page_sequence(1, 10));
    }

    #[test]
    fn test_sequence_near_end() {
        assert_eq!(
            build_page_sequence(9, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
        assert_eq!(build_page_sequence(8, 10), build_page_sequence(10, 10));
    }

    #[test]
    fn test_sequence_in_the_middle() {
        assert_eq!(
            build_page_sequence(5, 10),
            vec![
                Page(1),
                Ellipsis,
                Page(4),
                Page(5),
                Page(6),
                Ellipsis,
                Page(10)
            ]
        );
    }

    #[test]
    fn test_sequence_clamps_current_page() {
        assert_eq!(build_page_sequence(0, 10), build_page_sequence(1, 10));
        assert_eq!(build_page_sequence(50, 10), build_page_sequence(10, 10));
    }

    #[test]
    fn test_sequence_width_never_below_default() {
        assert_eq!(build_page_sequence_with(2, 5, 3), build_page_sequence(2, 5));
        assert_eq!(
            build_page_sequence_with(4, 8, 8),
            (1..=8).map(Page).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_token_display() {
        let rendered: Vec<String> = build_page_sequence(5, 10)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(rendered.join(" "), "1 … 4 5 6 … 10");
    }
}
