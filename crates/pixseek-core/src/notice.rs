//! User-facing notifications: kinds, texts and toast styling.

/// Shown when the form is submitted with only whitespace
pub const EMPTY_QUERY: &str = "Please enter a search query.";

/// Shown when page 1 of a query comes back empty
pub const NO_RESULTS: &str =
    "Sorry, there are no images matching your search query.\nPlease try again!";

/// Shown once the last page of a query has been loaded
pub const END_OF_RESULTS: &str = "We're sorry, but you've reached the end of search results.";

/// Fallback when a search fails without a usable message
pub const SEARCH_FAILED: &str = "An error occurred while fetching images. Please try again later.";

/// Fallback when "load more" fails without a usable message
pub const LOAD_MORE_FAILED: &str =
    "An error occurred while loading more images. Please try again later.";

/// Title on toasts reporting a failed request
pub const ERROR_TITLE: &str = "Error";

/// Toast category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    Warning,
    Error,
    Info,
}

impl NoticeKind {
    /// Returns the CSS modifier class for this kind
    pub fn class(&self) -> &'static str {
        match self {
            NoticeKind::Warning => "toast--warning",
            NoticeKind::Error => "toast--error",
            NoticeKind::Info => "toast--info",
        }
    }

    /// Visual settings for toasts of this kind
    pub fn style(&self) -> ToastStyle {
        let (background, color) = match self {
            NoticeKind::Warning => ("rgba(255, 193, 7, 0.8)", None),
            NoticeKind::Error => ("rgba(239, 64, 64, 0.8)", None),
            NoticeKind::Info => ("rgba(76, 175, 80, 0.8)", Some("#ffffff")),
        };
        ToastStyle {
            background,
            color,
            ..ToastStyle::default()
        }
    }
}

/// A message for the notification surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: Option<String>,
    /// Message text; `\n` separates lines
    pub message: String,
}

impl Notice {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            title: None,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: None,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: None,
            message: message.into(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Message split on line breaks, for renderers that emit one node per line
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.message.lines()
    }
}

/// Where toasts stack on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastPosition {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

impl ToastPosition {
    pub fn class(&self) -> &'static str {
        match self {
            ToastPosition::TopRight => "toasts--top-right",
            ToastPosition::TopLeft => "toasts--top-left",
            ToastPosition::BottomRight => "toasts--bottom-right",
            ToastPosition::BottomLeft => "toasts--bottom-left",
        }
    }
}

/// Styling options for a single toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastStyle {
    pub position: ToastPosition,
    pub background: &'static str,
    pub color: Option<&'static str>,
    pub max_width_px: u32,
    pub min_height_px: u32,
    pub padding_px: u32,
    /// Auto-dismiss delay
    pub timeout_ms: u64,
}

impl Default for ToastStyle {
    fn default() -> Self {
        Self {
            position: ToastPosition::TopRight,
            background: "rgba(0, 0, 0, 0.8)",
            color: None,
            max_width_px: 432,
            min_height_px: 88,
            padding_px: 20,
            timeout_ms: 5000,
        }
    }
}

impl ToastStyle {
    /// Inline CSS for the toast element
    pub fn inline_css(&self) -> String {
        let mut css = format!(
            "background-color: {}; max-width: {}px; min-height: {}px; padding: {}px;",
            self.background, self.max_width_px, self.min_height_px, self.padding_px
        );
        if let Some(color) = self.color {
            css.push_str(&format!(" color: {};", color));
        }
        css
    }
}
