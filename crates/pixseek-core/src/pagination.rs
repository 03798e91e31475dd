//! Pagination bookkeeping for one query session.

use crate::types::PageRequest;

/// Where we are in the result set of the active query.
///
/// Page numbers only move forward within a query and go back to 1 when a
/// new query starts. Total hits is taken from the first page only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    query: String,
    page: u32,
    total_hits: u64,
    per_page: u32,
}

impl Pagination {
    pub fn new(per_page: u32) -> Self {
        Self {
            query: String::new(),
            page: 1,
            total_hits: 0,
            per_page,
        }
    }

    /// Start a new query session at page 1 with no known total.
    pub fn reset(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
        self.total_hits = 0;
    }

    /// Record the total reported by page 1. Later pages do not refresh it.
    pub fn record_total(&mut self, total_hits: u64) {
        if self.page == 1 {
            self.total_hits = total_hits;
        }
    }

    /// Request for the page we are currently on.
    pub fn current_request(&self) -> PageRequest {
        PageRequest::new(self.query.clone(), self.page, self.per_page)
    }

    /// Request for the page after the current one. Does not move the cursor;
    /// call [`Pagination::commit_page`] once that page has arrived.
    pub fn next_request(&self) -> PageRequest {
        PageRequest::new(self.query.clone(), self.page.saturating_add(1), self.per_page)
    }

    /// Move the cursor to `page` after it loaded. Never moves backwards.
    pub fn commit_page(&mut self, page: u32) {
        if page > self.page {
            self.page = page;
        }
    }

    /// Upper bound on the number of results shown so far.
    pub fn shown(&self) -> u64 {
        u64::from(self.per_page) * u64::from(self.page)
    }

    /// True while the service reports more hits than pages loaded cover.
    pub fn has_more(&self) -> bool {
        self.total_hits > self.shown()
    }

    /// A query has been submitted in this session.
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_hits(&self) -> u64 {
        self.total_hits
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_inactive() {
        let p = Pagination::new(15);
        assert!(!p.is_active());
        assert_eq!(p.page(), 1);
        assert_eq!(p.total_hits(), 0);
        assert!(!p.has_more());
    }

    #[test]
    fn test_reset_returns_to_first_page() {
        let mut p = Pagination::new(15);
        p.reset("cats");
        p.record_total(40);
        p.commit_page(2);
        assert_eq!(p.page(), 2);

        p.reset("dogs");
        assert_eq!(p.query(), "dogs");
        assert_eq!(p.page(), 1);
        assert_eq!(p.total_hits(), 0);
    }

    #[test]
    fn test_total_only_recorded_on_first_page() {
        let mut p = Pagination::new(15);
        p.reset("cats");
        p.record_total(40);
        p.commit_page(2);
        p.record_total(9999);
        assert_eq!(p.total_hits(), 40);
    }

    #[test]
    fn test_next_request_does_not_advance() {
        let mut p = Pagination::new(15);
        p.reset("cats");
        let next = p.next_request();
        assert_eq!(next, PageRequest::new("cats", 2, 15));
        assert_eq!(p.page(), 1);
        assert_eq!(p.current_request().page, 1);
    }

    #[test]
    fn test_commit_never_goes_backwards() {
        let mut p = Pagination::new(15);
        p.reset("cats");
        p.commit_page(3);
        p.commit_page(2);
        assert_eq!(p.page(), 3);
    }

    #[test]
    fn test_next_request_at_last_page_number() {
        let mut p = Pagination::new(15);
        p.reset("cats");
        p.commit_page(u32::MAX);
        assert_eq!(p.next_request().page, u32::MAX);
    }

    #[test]
    fn test_has_more_boundary() {
        let mut p = Pagination::new(15);
        p.reset("cats");
        p.record_total(15);
        assert!(!p.has_more());

        p.reset("cats");
        p.record_total(16);
        assert!(p.has_more());
        p.commit_page(2);
        assert_eq!(p.shown(), 30);
        assert!(!p.has_more());
    }
}
