//! Viewer engine: archive API client and fetch execution.
mod engine;
mod fetch;
mod types;
mod wire;

pub use engine::EngineHandle;
pub use fetch::{FetchSettings, PageFetcher, ReqwestPageFetcher};
pub use types::{EngineEvent, FailureKind, FetchError};
pub use wire::{FileEntry, Page, PageMeta, PageWithResults, ResultEntry};
