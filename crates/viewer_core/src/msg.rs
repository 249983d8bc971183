use crate::{HistoryEntry, LoadError, PageDetail, PageId, PageSummary};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Initial document load with the current location path.
    AppStarted { path: String },
    /// User activated a page row in the list view.
    PageLinkClicked { id: PageId },
    /// Back/forward restored a history slot; `None` when the slot carries
    /// no payload (the initial-load slot).
    HistoryPopped { entry: Option<HistoryEntry> },
    /// Fetch completion for the list view.
    ListLoaded {
        result: Result<Vec<PageSummary>, LoadError>,
    },
    /// Fetch completion for a detail view.
    DetailLoaded {
        result: Result<PageDetail, LoadError>,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
