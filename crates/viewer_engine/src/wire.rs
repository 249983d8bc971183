//! Deserialization targets matching the archive service's JSON.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One page as returned by the collection endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Page {
    pub id: String,
    pub url: String,
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub formats: Vec<String>,
    pub status: String,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub error: Option<String>,
}

/// A page plus its capture results, as returned by the single-page endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageWithResults {
    pub id: String,
    pub url: String,
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub formats: Vec<String>,
    pub status: String,
    pub meta: PageMeta,
    #[serde(default)]
    pub results: Vec<ResultEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResultEntry {
    pub format: String,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub files: Vec<FileEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub mimetype: String,
    #[serde(default)]
    pub size: u64,
}
