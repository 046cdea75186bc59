//! Page-number pagination for the company list

use crate::config::ConsoleConfig;
use std::cell::Cell;

/// View-local list cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor {
    page: u32,
    size: u32,
    total_pages: u32,
    search_term: String,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self {
            page: 1,
            size: ConsoleConfig::PAGE_SIZE,
            total_pages: 1,
            search_term: String::new(),
        }
    }
}

impl PageCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn is_first(&self) -> bool {
        self.page <= 1
    }

    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }

    /// Query parameters for `GET /user`; `search` is omitted when blank.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("page", self.page.to_string()), ("size", self.size.to_string())];
        if !self.search_term.is_empty() {
            query.push(("search", self.search_term.clone()));
        }
        query
    }

    /// Take the page count reported by the server, treating a missing or zero
    /// value as a single page. The current page is pulled back inside the new
    /// range.
    pub fn apply_total_pages(&mut self, total_pages: Option<u32>) {
        self.total_pages = total_pages.unwrap_or(1).max(1);
        self.page = self.page.clamp(1, self.total_pages);
    }

    /// Jump to `page`, clamped into `1..=total_pages`. Returns whether the
    /// page changed.
    pub fn go_to(&mut self, page: u32) -> bool {
        let target = page.clamp(1, self.total_pages);
        let changed = target != self.page;
        self.page = target;
        changed
    }

    pub fn first(&mut self) -> bool {
        self.go_to(1)
    }

    pub fn last(&mut self) -> bool {
        self.go_to(self.total_pages)
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.page.saturating_add(1))
    }

    pub fn prev(&mut self) -> bool {
        self.go_to(self.page.saturating_sub(1))
    }

    /// Apply a debounced search term. A new term always restarts at page 1.
    pub fn set_search(&mut self, term: &str) -> bool {
        let term = term.trim();
        if term == self.search_term {
            return false;
        }
        self.search_term = term.to_string();
        self.page = 1;
        true
    }

    /// One-based row number of `index` within the current page
    pub fn row_number(&self, index: usize) -> u64 {
        u64::from(self.page - 1) * u64::from(self.size) + index as u64 + 1
    }
}

/// Hands out increasing ids so late responses can be recognised and dropped
#[derive(Debug, Default)]
pub struct RequestGeneration {
    current: Cell<u64>,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding every earlier one.
    pub fn begin(&self) -> u64 {
        let next = self.current.get() + 1;
        self.current.set(next);
        next
    }

    pub fn is_current(&self, id: u64) -> bool {
        self.current.get() == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_page() {
        let cursor = PageCursor::new();
        assert_eq!(cursor.page(), 1);
        assert_eq!(cursor.size(), 10);
        assert_eq!(
            cursor.query(),
            vec![("page", "1".to_string()), ("size", "10".to_string())]
        );
    }

    #[test]
    fn uses_server_total_pages() {
        let mut cursor = PageCursor::new();
        cursor.apply_total_pages(Some(3));
        assert!(cursor.go_to(3));

        assert_eq!(cursor.total_pages(), 3);
        assert!(cursor.is_last());
        assert!(!cursor.next());
        assert_eq!(cursor.row_number(0), 21);
        assert_eq!(cursor.row_number(4), 25);
    }

    #[test]
    fn shrinking_page_count_pulls_page_back() {
        let mut cursor = PageCursor::new();
        cursor.apply_total_pages(Some(3));
        cursor.last();

        // Last row of page 3 deleted
        cursor.apply_total_pages(Some(2));
        assert_eq!(cursor.page(), 2);
        assert!(cursor.is_last());

        cursor.apply_total_pages(Some(0));
        assert_eq!(cursor.page(), 1);
    }

    #[test]
    fn missing_total_pages_means_one() {
        let mut cursor = PageCursor::new();
        cursor.apply_total_pages(None);
        assert_eq!(cursor.total_pages(), 1);
        cursor.apply_total_pages(Some(0));
        assert_eq!(cursor.total_pages(), 1);
    }

    #[test]
    fn navigation_is_clamped() {
        let mut cursor = PageCursor::new();
        cursor.apply_total_pages(Some(4));

        assert!(!cursor.prev());
        assert!(cursor.last());
        assert_eq!(cursor.page(), 4);
        assert!(cursor.prev());
        assert_eq!(cursor.page(), 3);
        assert!(cursor.go_to(99));
        assert_eq!(cursor.page(), 4);
        assert!(cursor.first());
        assert!(cursor.is_first());
    }

    #[test]
    fn new_search_resets_page() {
        let mut cursor = PageCursor::new();
        cursor.apply_total_pages(Some(5));
        cursor.go_to(4);

        assert!(cursor.set_search("  acme "));
        assert_eq!(cursor.page(), 1);
        assert_eq!(cursor.search_term(), "acme");
        assert_eq!(cursor.query()[2], ("search", "acme".to_string()));
        assert!(!cursor.set_search("acme"));
    }

    #[test]
    fn only_latest_request_is_current() {
        let generation = RequestGeneration::new();
        let first = generation.begin();
        let second = generation.begin();

        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }
}
