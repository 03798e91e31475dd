//! In-memory fakes shared by the integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};

use parking_lot::Mutex;
use pixseek_core::{
    GallerySurface, ImageHit, ImageSource, Lightbox, Notice, NoticeKind, Notifier, Overlay,
    PageRequest, PageResponse, SearchError, SearchResult, Slide,
};

/// Height reported for every rendered gallery item
pub const ITEM_HEIGHT: f64 = 200.0;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("pixseek_core=debug")
        .with_test_writer()
        .try_init();
}

pub fn hit(n: u64) -> ImageHit {
    ImageHit {
        id: n,
        large_image_url: format!("https://cdn.example/large/{}.jpg", n),
        webformat_url: format!("https://cdn.example/web/{}.jpg", n),
        tags: format!("tag{}, sample", n),
        likes: n,
        views: n * 10,
        comments: n % 7,
        downloads: n * 3,
    }
}

/// Image service with a fixed number of matches per query.
#[derive(Default)]
pub struct FakeSource {
    totals: HashMap<String, u64>,
    failures: Mutex<VecDeque<SearchError>>,
    pub requests: Mutex<Vec<PageRequest>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: &str, total_hits: u64) -> Self {
        self.totals.insert(query.to_string(), total_hits);
        self
    }

    /// Make the next fetch fail with `err`.
    pub fn fail_next(&self, err: SearchError) {
        self.failures.lock().push_back(err);
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn last_request(&self) -> Option<PageRequest> {
        self.requests.lock().last().cloned()
    }
}

impl ImageSource for FakeSource {
    async fn fetch_page(&self, request: &PageRequest) -> SearchResult<PageResponse> {
        self.requests.lock().push(request.clone());

        if let Some(err) = self.failures.lock().pop_front() {
            return Err(err);
        }

        let total = self.totals.get(&request.query).copied().unwrap_or(0);
        let start = u64::from(request.page - 1) * u64::from(request.per_page);
        let end = (start + u64::from(request.per_page)).min(total);
        let hits = if start < end {
            (start..end).map(hit).collect()
        } else {
            Vec::new()
        };

        Ok(PageResponse {
            total_hits: total,
            total,
            hits,
        })
    }
}

/// Overlay that keeps a real lightbox model and counts rebinds.
#[derive(Default)]
pub struct RecordingOverlay {
    pub lightbox: Mutex<Lightbox>,
    pub refreshes: Mutex<usize>,
}

impl Overlay for RecordingOverlay {
    fn refresh(&self, slides: Vec<Slide>) {
        self.lightbox.lock().refresh(slides);
        *self.refreshes.lock() += 1;
    }
}

#[derive(Default)]
struct SurfaceState {
    items: Vec<ImageHit>,
    loader_visible: bool,
    load_more_visible: bool,
    input_resets: usize,
    scrolls: Vec<f64>,
}

/// Gallery page stand-in. `mounted = false` simulates a missing container.
pub struct FakeSurface {
    state: Mutex<SurfaceState>,
    pub overlay: RecordingOverlay,
    mounted: bool,
}

impl FakeSurface {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(SurfaceState::default()),
            overlay: RecordingOverlay::default(),
            mounted: true,
        }
    }

    pub fn without_gallery() -> Self {
        Self {
            mounted: false,
            ..Self::new()
        }
    }

    pub fn items(&self) -> Vec<ImageHit> {
        self.state.lock().items.clone()
    }

    pub fn item_count(&self) -> usize {
        self.state.lock().items.len()
    }

    pub fn loader_visible(&self) -> bool {
        self.state.lock().loader_visible
    }

    pub fn load_more_visible(&self) -> bool {
        self.state.lock().load_more_visible
    }

    pub fn input_resets(&self) -> usize {
        self.state.lock().input_resets
    }

    pub fn scrolls(&self) -> Vec<f64> {
        self.state.lock().scrolls.clone()
    }
}

impl GallerySurface for FakeSurface {
    fn append(&self, hits: &[ImageHit]) -> SearchResult<()> {
        if !self.mounted {
            return Err(SearchError::MissingElement("gallery"));
        }
        let slides = {
            let mut state = self.state.lock();
            state.items.extend_from_slice(hits);
            state.items.iter().map(Slide::from).collect()
        };
        self.overlay.refresh(slides);
        Ok(())
    }

    fn clear(&self) {
        self.state.lock().items.clear();
        self.overlay.refresh(Vec::new());
    }

    fn set_loader_visible(&self, visible: bool) {
        self.state.lock().loader_visible = visible;
    }

    fn set_load_more_visible(&self, visible: bool) {
        self.state.lock().load_more_visible = visible;
    }

    fn item_height(&self) -> Option<f64> {
        if self.state.lock().items.is_empty() {
            None
        } else {
            Some(ITEM_HEIGHT)
        }
    }

    fn scroll_by(&self, dy: f64) {
        self.state.lock().scrolls.push(dy);
    }

    fn reset_query_input(&self) {
        self.state.lock().input_resets += 1;
    }
}

/// Collects every toast.
#[derive(Default)]
pub struct FakeNotifier {
    pub notices: Mutex<Vec<Notice>>,
}

impl FakeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kinds(&self) -> Vec<NoticeKind> {
        self.notices.lock().iter().map(|n| n.kind).collect()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices.lock().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.notices.lock().len()
    }
}

impl Notifier for FakeNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().push(notice);
    }
}
