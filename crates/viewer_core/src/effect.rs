use crate::{HistoryEntry, PageId};

/// Side effects requested by `update`, executed by the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Read the page collection endpoint.
    FetchList,
    /// Read the single-page endpoint for `id`.
    FetchDetail { id: PageId },
    /// Record a new session-history slot for an in-app navigation.
    PushHistory { entry: HistoryEntry, path: String },
}
