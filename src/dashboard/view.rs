//! List view that filters a collection and pages through the result.
//!
//! Filtering always runs before pagination. Changing the search term or the
//! kind filter puts the view back on page 1; deleting records lets the next
//! recompute clamp the page.

use super::Record;
use crate::pagination::{
    build_page_sequence_with, PageState, PageToken, PageWindow, PaginationResult,
    DEFAULT_MAX_VISIBLE_PAGES,
};
use tracing::debug;

/// One rendered page of a list view
#[derive(Debug)]
pub struct VisiblePage<'a, T: Record> {
    /// Window bounds over the filtered collection
    pub window: PageWindow,

    /// Records on this page, in collection order
    pub items: Vec<&'a T>,

    /// Page buttons to render
    pub pages: Vec<PageToken>,

    /// Number of records matching the current filters
    pub total_items: usize,

    pub items_per_page: usize,
}

#[derive(Debug, Clone)]
pub struct ListView<T: Record> {
    /// All records (unfiltered)
    all_items: Vec<T>,

    /// Indices into `all_items` that match the filters
    matches: Vec<usize>,

    /// Current search query, lower-cased
    search: String,

    /// Active kind filter
    kind_filter: Option<String>,

    state: PageState,

    max_visible_pages: usize,

    /// Selected row within the current page
    selected: usize,
}

impl<T: Record> ListView<T> {
    pub fn new(items: Vec<T>, items_per_page: usize) -> PaginationResult<Self> {
        let mut view = Self {
            all_items: items,
            matches: Vec::new(),
            search: String::new(),
            kind_filter: None,
            state: PageState::new(items_per_page)?,
            max_visible_pages: DEFAULT_MAX_VISIBLE_PAGES,
            selected: 0,
        };
        view.refilter();
        Ok(view)
    }

    /// Set how many page buttons are shown before ellipses kick in
    pub fn with_max_visible_pages(mut self, max_visible_pages: usize) -> Self {
        self.max_visible_pages = max_visible_pages;
        self
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn kind_filter(&self) -> Option<&str> {
        self.kind_filter.as_deref()
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page()
    }

    pub fn items_per_page(&self) -> usize {
        self.state.items_per_page()
    }

    /// Number of records in the unfiltered collection
    pub fn len(&self) -> usize {
        self.all_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_items.is_empty()
    }

    /// Number of records matching the current filters
    pub fn filtered_len(&self) -> usize {
        self.matches.len()
    }

    /// Update the search term; returns to page 1 if it changed
    pub fn set_search(&mut self, query: &str) {
        let query = query.trim().to_lowercase();
        if query == self.search {
            return;
        }
        debug!("Search changed to {:?}", query);
        self.search = query;
        self.refilter();
        self.reset_position();
    }

    /// Update the kind filter; returns to page 1 if it changed
    pub fn set_kind_filter(&mut self, kind: Option<&str>) {
        let kind = kind.map(str::to_lowercase);
        if kind == self.kind_filter {
            return;
        }
        debug!("Kind filter changed to {:?}", kind);
        self.kind_filter = kind;
        self.refilter();
        self.reset_position();
    }

    /// Advance the kind filter: none, then each kind in turn, then none again
    pub fn cycle_kind_filter(&mut self) {
        let kinds = T::kinds();
        let next = match self.kind_filter.as_deref() {
            None => kinds.first().copied(),
            Some(current) => kinds
                .iter()
                .position(|kind| *kind == current)
                .and_then(|i| kinds.get(i + 1).copied()),
        };
        self.set_kind_filter(next);
    }

    /// Change the page size, keeping the first visible record on screen
    pub fn set_items_per_page(&mut self, items_per_page: usize) -> PaginationResult<()> {
        self.state
            .set_items_per_page(items_per_page, self.matches.len())?;
        self.selected = 0;
        Ok(())
    }

    /// Remove a record by id; returns the removed record
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let index = self.all_items.iter().position(|item| item.id() == id)?;
        let removed = self.all_items.remove(index);
        debug!("Removed record {}", id);
        self.refilter();
        let window = self.state.window(self.matches.len());
        self.selected = self.selected.min(window.len().saturating_sub(1));
        Some(removed)
    }

    /// Compute the current page, clamping the stored page if needed
    pub fn page(&mut self) -> VisiblePage<'_, T> {
        let window = self.state.window(self.matches.len());
        self.selected = self.selected.min(window.len().saturating_sub(1));
        let pages =
            build_page_sequence_with(window.current_page, window.total_pages, self.max_visible_pages);
        let items = window
            .items(&self.matches)
            .iter()
            .map(|&i| &self.all_items[i])
            .collect();

        VisiblePage {
            window,
            items,
            pages,
            total_items: self.matches.len(),
            items_per_page: self.state.items_per_page(),
        }
    }

    pub fn next_page(&mut self) -> bool {
        let total = self.total_pages();
        self.moved(|state| state.next(total))
    }

    pub fn previous_page(&mut self) -> bool {
        let total = self.total_pages();
        self.moved(|state| state.previous(total))
    }

    pub fn go_to_page(&mut self, page: i64) -> bool {
        let total = self.total_pages();
        self.moved(|state| state.go_to(page, total))
    }

    pub fn first_page(&mut self) -> bool {
        self.moved(PageState::first)
    }

    pub fn last_page(&mut self) -> bool {
        let total = self.total_pages();
        self.moved(|state| state.last(total))
    }

    pub fn total_pages(&self) -> usize {
        self.state.peek(self.matches.len()).total_pages
    }

    /// Index of the selected row within the current page
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        let rows = self.state.peek(self.matches.len()).len();
        if self.selected + 1 < rows {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// The selected record, if the current page has any rows
    pub fn selected(&self) -> Option<&T> {
        let window = self.state.peek(self.matches.len());
        window
            .items(&self.matches)
            .get(self.selected)
            .map(|&i| &self.all_items[i])
    }

    fn moved(&mut self, navigate: impl FnOnce(&mut PageState) -> bool) -> bool {
        let changed = navigate(&mut self.state);
        if changed {
            self.selected = 0;
        }
        changed
    }

    fn reset_position(&mut self) {
        self.state.reset();
        self.selected = 0;
    }

    fn refilter(&mut self) {
        let search = &self.search;
        let kind_filter = self.kind_filter.as_deref();
        self.matches = self
            .all_items
            .iter()
            .enumerate()
            .filter(|(_, item)| search.is_empty() || item.search_text().contains(search.as_str()))
            .filter(|(_, item)| kind_filter.map_or(true, |kind| item.kind() == Some(kind)))
            .map(|(i, _)| i)
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{fixtures, KnowledgeEntry};
    use crate::pagination::PageToken::{Ellipsis, Page};

    fn knowledge_view() -> ListView<KnowledgeEntry> {
        ListView::new(fixtures::knowledge_entries(), 10).unwrap()
    }

    fn ids(page: &VisiblePage<'_, KnowledgeEntry>) -> Vec<String> {
        page.items.iter().map(|item| item.id.clone()).collect()
    }

    #[test]
    fn test_first_page_of_knowledge_base() {
        let mut view = knowledge_view();
        let page = view.page();
        assert_eq!(page.window.range(), 0..10);
        assert_eq!(page.window.total_pages, 3);
        assert_eq!(page.total_items, 23);
        assert_eq!(page.pages, vec![Page(1), Page(2), Page(3)]);
        assert_eq!(ids(&page)[0], "kb-1");
    }

    #[test]
    fn test_navigation_through_pages() {
        let mut view = knowledge_view();
        assert!(view.next_page());
        assert!(view.next_page());
        assert!(!view.next_page());
        assert_eq!(view.page().items.len(), 3);

        assert!(view.previous_page());
        assert_eq!(view.current_page(), 2);
        assert!(view.go_to_page(-4));
        assert_eq!(view.current_page(), 1);
        assert!(view.last_page());
        assert_eq!(view.current_page(), 3);
        assert!(view.first_page());
        assert!(!view.previous_page());
    }

    #[test]
    fn test_deleting_items_clamps_page() {
        let mut view = knowledge_view();
        view.go_to_page(3);

        for i in 9..=23 {
            assert!(view.remove(&format!("kb-{}", i)).is_some());
        }
        assert_eq!(view.len(), 8);

        let page = view.page();
        assert_eq!(page.window.total_pages, 1);
        assert_eq!(page.window.current_page, 1);
        assert_eq!(page.window.range(), 0..8);
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn test_deleting_last_item_on_last_page() {
        let mut view = ListView::new(fixtures::knowledge_entries(), 11).unwrap();
        view.last_page();
        assert_eq!(view.current_page(), 3);
        assert_eq!(view.page().items.len(), 1);

        view.remove("kb-23");
        let page = view.page();
        assert_eq!(page.window.current_page, 2);
        assert_eq!(page.items.len(), 11);
    }

    #[test]
    fn test_filter_change_resets_to_first_page() {
        let mut view = knowledge_view();
        view.go_to_page(3);
        assert_eq!(view.current_page(), 3);

        view.set_kind_filter(Some("link"));
        assert_eq!(view.filtered_len(), 4);
        assert_eq!(view.current_page(), 1);

        let page = view.page();
        assert_eq!(page.window.range(), 0..4);
        assert!(!page.window.needs_pagination());
        assert!(page.items.iter().all(|item| item.kind() == Some("link")));
    }

    #[test]
    fn test_search_change_resets_to_first_page() {
        let mut view = knowledge_view();
        view.go_to_page(2);

        view.set_search("  POLICY ");
        assert_eq!(view.search(), "policy");
        assert_eq!(view.current_page(), 1);
        let page = view.page();
        assert_eq!(ids(&page), vec!["kb-1", "kb-13"]);

        view.go_to_page(1);
        view.set_search("policy");
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn test_unchanged_filter_keeps_page() {
        let mut view = knowledge_view();
        view.go_to_page(2);
        view.set_search("");
        view.set_kind_filter(None);
        assert_eq!(view.current_page(), 2);
    }

    #[test]
    fn test_cycle_kind_filter() {
        let mut view = knowledge_view();
        view.cycle_kind_filter();
        assert_eq!(view.kind_filter(), Some("faq"));
        view.cycle_kind_filter();
        view.cycle_kind_filter();
        view.cycle_kind_filter();
        assert_eq!(view.kind_filter(), Some("document"));
        view.cycle_kind_filter();
        assert_eq!(view.kind_filter(), None);
        assert_eq!(view.filtered_len(), 23);
    }

    #[test]
    fn test_page_sequence_for_long_collections() {
        let mut view = ListView::new(fixtures::chat_sessions(), 4).unwrap();
        view.go_to_page(6);
        assert_eq!(
            view.page().pages,
            vec![
                Page(1),
                Ellipsis,
                Page(5),
                Page(6),
                Page(7),
                Ellipsis,
                Page(12)
            ]
        );
    }

    #[test]
    fn test_selection_stays_on_page() {
        let mut view = knowledge_view();
        view.last_page();
        view.select_next();
        view.select_next();
        view.select_next();
        assert_eq!(view.selected_index(), 2);
        assert_eq!(view.selected().map(|item| item.id.as_str()), Some("kb-23"));

        view.remove("kb-23");
        assert_eq!(view.selected_index(), 1);
        view.select_previous();
        view.select_previous();
        assert_eq!(view.selected_index(), 0);

        view.previous_page();
        assert_eq!(view.selected().map(|item| item.id.as_str()), Some("kb-11"));
    }

    #[test]
    fn test_page_size_change() {
        let mut view = knowledge_view();
        view.go_to_page(3);
        view.set_items_per_page(5).unwrap();
        assert_eq!(view.current_page(), 5);
        assert_eq!(view.page().window.range(), 20..23);
        assert!(view.set_items_per_page(0).is_err());
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        assert!(ListView::new(fixtures::employees(), 0).is_err());
    }
}
