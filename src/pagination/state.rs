//! Per-view page state that only moves through the engine functions.

use super::{PageWindow, PaginationResult};
use std::num::NonZeroUsize;
use tracing::debug;

/// Current page and page size of one list view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// Current page (1-based)
    current_page: usize,

    /// Items per page
    items_per_page: NonZeroUsize,
}

impl PageState {
    /// Create a state positioned on the first page
    pub fn new(items_per_page: usize) -> PaginationResult<Self> {
        Ok(Self {
            current_page: 1,
            items_per_page: super::page_size(items_per_page)?,
        })
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page.get()
    }

    /// Compute the window for `collection_len` and keep the clamped page
    pub fn window(&mut self, collection_len: usize) -> PageWindow {
        let window = self.peek(collection_len);
        if window.current_page != self.current_page {
            debug!(
                "Clamped page {} -> {} ({} items)",
                self.current_page, window.current_page, collection_len
            );
            self.current_page = window.current_page;
        }
        window
    }

    /// Compute the window without touching the stored page
    pub fn peek(&self, collection_len: usize) -> PageWindow {
        super::window_for(collection_len, self.items_per_page, self.current_page as i64)
    }

    /// Go to the next page
    pub fn next(&mut self, total_pages: usize) -> bool {
        self.apply(super::next_page(self.current_page, total_pages), "next")
    }

    /// Go to the previous page
    pub fn previous(&mut self, total_pages: usize) -> bool {
        self.apply(super::previous_page(self.current_page, total_pages), "previous")
    }

    /// Go to a specific page, clamped into range
    pub fn go_to(&mut self, requested_page: i64, total_pages: usize) -> bool {
        self.apply(super::go_to_page(requested_page, total_pages), "goto")
    }

    /// Go to the first page
    pub fn first(&mut self) -> bool {
        self.apply(1, "first")
    }

    /// Go to the last page
    pub fn last(&mut self, total_pages: usize) -> bool {
        self.apply(total_pages.max(1), "last")
    }

    /// Back to page 1, used when upstream filters change
    pub fn reset(&mut self) {
        self.apply(1, "reset");
    }

    /// Change the page size, keeping the first visible item on screen
    pub fn set_items_per_page(
        &mut self,
        items_per_page: usize,
        collection_len: usize,
    ) -> PaginationResult<()> {
        let items_per_page = super::page_size(items_per_page)?;
        if items_per_page == self.items_per_page {
            return Ok(());
        }

        let first_visible = self.peek(collection_len).start_index;
        let old_size = self.items_per_page;
        self.items_per_page = items_per_page;
        self.current_page = first_visible / items_per_page.get() + 1;
        self.window(collection_len);

        debug!(
            "Page size changed {} -> {}, now on page {}",
            old_size, items_per_page, self.current_page
        );
        Ok(())
    }

    fn apply(&mut self, new_page: usize, pattern: &str) -> bool {
        let old_page = self.current_page;
        if old_page == new_page {
            return false;
        }
        self.current_page = new_page;
        debug!("Page changed ({}): {} -> {}", pattern, old_page, new_page);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::PaginationError;

    #[test]
    fn test_state_creation() {
        let state = PageState::new(10).unwrap();
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.items_per_page(), 10);
        assert_eq!(PageState::new(0), Err(PaginationError::InvalidPageSize(0)));
    }

    #[test]
    fn test_page_navigation() {
        let mut state = PageState::new(20).unwrap();
        let total = state.window(100).total_pages;
        assert_eq!(total, 5);

        assert!(state.next(total));
        assert_eq!(state.current_page(), 2);

        assert!(state.previous(total));
        assert_eq!(state.current_page(), 1);
        assert!(!state.previous(total));

        assert!(state.last(total));
        assert_eq!(state.current_page(), 5);
        assert!(!state.next(total));

        assert!(state.first());
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_go_to_clamps() {
        let mut state = PageState::new(10).unwrap();
        assert!(state.go_to(999, 10));
        assert_eq!(state.current_page(), 10);
        assert!(state.go_to(-5, 10));
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_window_stores_clamped_page() {
        let mut state = PageState::new(10).unwrap();
        state.go_to(3, 3);

        let peeked = state.peek(8);
        assert_eq!(peeked.current_page, 1);
        assert_eq!(state.current_page(), 3);

        let window = state.window(8);
        assert_eq!(window.range(), 0..8);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_page_size_change_keeps_position() {
        let mut state = PageState::new(10).unwrap();
        state.go_to(6, 10);
        assert_eq!(state.peek(100).start_index, 50);

        state.set_items_per_page(20, 100).unwrap();
        assert_eq!(state.items_per_page(), 20);
        assert_eq!(state.current_page(), 3);
        assert_eq!(state.peek(100).range(), 40..60);

        assert!(state.set_items_per_page(0, 100).is_err());
        assert_eq!(state.items_per_page(), 20);
    }

    #[test]
    fn test_reset_returns_to_first_page() {
        let mut state = PageState::new(10).unwrap();
        state.go_to(3, 3);
        state.reset();
        assert_eq!(state.current_page(), 1);
    }
}
