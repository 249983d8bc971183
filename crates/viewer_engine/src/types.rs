use std::fmt;

use crate::wire::{Page, PageWithResults};

/// Completion event for a fetch command. Exactly one event is emitted per
/// command; there is no deduplication and no cancellation, so events for
/// superseded commands are still delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    ListFetched {
        result: Result<Vec<Page>, FetchError>,
    },
    DetailFetched {
        id: String,
        result: Result<PageWithResults, FetchError>,
    },
}

/// Failure of a single fetch attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "undecodable response body"),
        }
    }
}
