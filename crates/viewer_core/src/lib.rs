//! Viewer core: pure navigation state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    AppState, FileRef, HistoryEntry, LoadError, PageDetail, PageId, PageMeta, PageStatus,
    PageSummary, ResultEntry, ViewState,
};
pub use update::update;
pub use view_model::{
    AppViewModel, ContentView, FileLinkView, PageDetailView, PageRowView, ResultLinkView,
    ResultRowView,
};
