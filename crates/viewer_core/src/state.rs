use crate::view_model::{self, AppViewModel};

/// Identifier of an archived page. Issued by the service; treated as opaque text.
pub type PageId = String;

/// The currently displayed mode and its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    /// The page collection.
    #[default]
    List,
    /// A single page, addressed by its id.
    Detail(PageId),
}

/// Payload persisted with a session-history slot created by an in-app
/// navigation. Slots created by the initial load carry no payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub page: PageId,
}

/// Capture lifecycle reported by the archive service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageStatus {
    New,
    Processing,
    Done,
    Failed,
    WithErrors,
    /// A status string this client does not know; kept verbatim for display.
    Other(String),
}

impl PageStatus {
    /// Parses a wire status value, keeping unknown values as-is.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "new" => PageStatus::New,
            "processing" => PageStatus::Processing,
            "done" => PageStatus::Done,
            "failed" => PageStatus::Failed,
            "with_errors" => PageStatus::WithErrors,
            other => PageStatus::Other(other.to_string()),
        }
    }

    /// Wire name of the status, used for display.
    pub fn label(&self) -> &str {
        match self {
            PageStatus::New => "new",
            PageStatus::Processing => "processing",
            PageStatus::Done => "done",
            PageStatus::Failed => "failed",
            PageStatus::WithErrors => "with_errors",
            PageStatus::Other(value) => value,
        }
    }
}

/// Title/description block extracted by the service; `error` carries a
/// metadata-extraction failure (an empty string counts as absent).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub error: Option<String>,
}

/// One row of the page collection. Fetched fresh on every list navigation,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSummary {
    pub id: PageId,
    pub url: String,
    pub status: PageStatus,
    /// Creation timestamp as reported by the service (RFC 3339 text).
    pub created: String,
    pub meta: PageMeta,
}

/// A single archived page with its capture results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDetail {
    pub id: PageId,
    pub url: String,
    pub status: PageStatus,
    pub created: String,
    pub meta: PageMeta,
    pub results: Vec<ResultEntry>,
}

/// One capture attempt. Carries either an error or a usable files list;
/// when `error` is present and non-empty the files are not shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultEntry {
    pub format: String,
    pub error: Option<String>,
    pub files: Vec<FileRef>,
}

/// Reference to a stored capture file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRef {
    pub id: String,
    pub name: String,
    pub mimetype: String,
    pub size: u64,
}

/// Transport-reported failure for a completed fetch, carried as log text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError(pub String);

/// What the display region currently holds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) enum DisplayContent {
    #[default]
    Empty,
    List(Vec<PageSummary>),
    Detail(PageDetail),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    route: ViewState,
    content: DisplayContent,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The view the current location addresses. May disagree with the
    /// displayed content while a fetch for a newly resolved view is in
    /// flight.
    pub fn route(&self) -> &ViewState {
        &self.route
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            route: self.route.clone(),
            content: view_model::content_view(&self.content),
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is due, clearing the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_route(&mut self, route: ViewState) {
        self.route = route;
    }

    pub(crate) fn show_list(&mut self, items: Vec<PageSummary>) {
        self.content = DisplayContent::List(items);
        self.dirty = true;
    }

    pub(crate) fn show_detail(&mut self, detail: PageDetail) {
        self.content = DisplayContent::Detail(detail);
        self.dirty = true;
    }
}
