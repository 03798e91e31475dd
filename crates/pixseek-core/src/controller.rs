//! Search controller: pagination state plus the two user events.
//!
//! ```text
//!  submit(query) ──► reset ──► fetch page 1 ──► render / notify
//!                                   │
//!  load_more() ──► fetch page n+1 ──┴──► append, scroll ──► more? show button : notify end
//! ```
//!
//! The controller owns its [`Pagination`] and borrows nothing from the
//! page; every side effect goes through the injected surface and notifier.

use crate::api::ImageSource;
use crate::error::SearchError;
use crate::notice::{self, Notice};
use crate::pagination::Pagination;
use crate::surface::{GallerySurface, Notifier};
use crate::types::PageResponse;

/// What a handler did, for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Query was blank; nothing was requested
    Rejected,
    /// "Load more" arrived before any query was submitted
    Ignored,
    /// Page 1 came back with no images
    NoResults,
    /// A page was rendered
    Loaded {
        page: u32,
        added: usize,
        total_hits: u64,
        has_more: bool,
    },
    /// The request failed; `message` is what the user saw
    Failed { message: String },
}

pub struct SearchController<Src, S, N> {
    source: Src,
    surface: S,
    notifier: N,
    pagination: Pagination,
}

impl<Src, S, N> SearchController<Src, S, N>
where
    Src: ImageSource,
    S: GallerySurface,
    N: Notifier,
{
    pub fn new(source: Src, surface: S, notifier: N, per_page: u32) -> Self {
        Self {
            source,
            surface,
            notifier,
            pagination: Pagination::new(per_page),
        }
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Handle a search form submission.
    pub async fn submit(&mut self, raw_query: &str) -> SearchOutcome {
        let query = raw_query.trim();
        if query.is_empty() {
            tracing::warn!("Rejected blank search query");
            self.notifier.notify(Notice::warning(notice::EMPTY_QUERY));
            self.surface.reset_query_input();
            return SearchOutcome::Rejected;
        }

        self.pagination.reset(query);
        self.surface.clear();
        self.surface.hide_load_more();
        self.surface.show_loader();

        let request = self.pagination.current_request();
        tracing::info!("Searching for '{}'", request.query);

        let outcome = match self.source.fetch_page(&request).await {
            Ok(page) => self.show_first_page(page),
            Err(e) => self.report_failure(&e, notice::SEARCH_FAILED),
        };

        self.surface.hide_loader();
        self.surface.reset_query_input();
        outcome
    }

    /// Handle a click on "load more".
    pub async fn load_more(&mut self) -> SearchOutcome {
        if !self.pagination.is_active() {
            tracing::warn!("Load more requested with no active query");
            return SearchOutcome::Ignored;
        }

        let request = self.pagination.next_request();
        self.surface.hide_load_more();
        self.surface.show_loader();

        tracing::info!("Loading page {} for '{}'", request.page, request.query);

        let outcome = match self.source.fetch_page(&request).await {
            Ok(page) => {
                // Only a page that actually arrived moves the cursor, so a
                // failed page is fetched again on the next click.
                self.pagination.commit_page(request.page);
                self.render(&page);
                self.surface.scroll_to_next_group();
                self.update_load_more(page.hits.len())
            }
            Err(e) => {
                let outcome = self.report_failure(&e, notice::LOAD_MORE_FAILED);
                self.surface.show_load_more();
                outcome
            }
        };

        self.surface.hide_loader();
        outcome
    }

    fn show_first_page(&mut self, page: PageResponse) -> SearchOutcome {
        self.pagination.record_total(page.total_hits);

        if page.is_empty() {
            tracing::info!("No images for '{}'", self.pagination.query());
            self.notifier.notify(Notice::error(notice::NO_RESULTS));
            return SearchOutcome::NoResults;
        }

        self.render(&page);
        self.update_load_more(page.hits.len())
    }

    fn render(&self, page: &PageResponse) {
        if let Err(e) = self.surface.append(&page.hits) {
            tracing::error!("Failed to render gallery page: {}", e);
        }
    }

    fn update_load_more(&self, added: usize) -> SearchOutcome {
        let has_more = self.pagination.has_more();
        if has_more {
            self.surface.show_load_more();
        } else {
            self.notifier.notify(Notice::info(notice::END_OF_RESULTS));
            self.surface.hide_load_more();
        }

        tracing::info!(
            "Page {} rendered: {} added, {} total hits, more: {}",
            self.pagination.page(),
            added,
            self.pagination.total_hits(),
            has_more
        );

        SearchOutcome::Loaded {
            page: self.pagination.page(),
            added,
            total_hits: self.pagination.total_hits(),
            has_more,
        }
    }

    fn report_failure(&self, err: &SearchError, fallback: &str) -> SearchOutcome {
        tracing::error!("Image request failed: {}", err);
        let message = err.user_message().unwrap_or_else(|| fallback.to_string());
        self.notifier.notify(
            Notice::error(message.clone()).with_title(notice::ERROR_TITLE),
        );
        SearchOutcome::Failed { message }
    }
}
