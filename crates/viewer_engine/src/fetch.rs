use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::types::{FailureKind, FetchError};
use crate::wire::{Page, PageWithResults};

/// Transport settings for the archive API client.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub base_url: url::Url,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl FetchSettings {
    pub fn new(base_url: url::Url) -> Self {
        Self {
            base_url,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Read seam over the archive API. One attempt per call, no retries.
#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    /// Reads the page collection endpoint.
    async fn fetch_list(&self) -> Result<Vec<Page>, FetchError>;
    /// Reads the single-page endpoint for `id`.
    async fn fetch_detail(&self, id: &str) -> Result<PageWithResults, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestPageFetcher {
    settings: FetchSettings,
}

impl ReqwestPageFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    fn endpoint(&self, trailing: &[&str]) -> Result<url::Url, FetchError> {
        let mut url = self.settings.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| FetchError::new(FailureKind::InvalidUrl, "base url cannot be a base"))?
            .pop_if_empty()
            .extend(["api", "v1", "pages"])
            .extend(trailing);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: url::Url) -> Result<T, FetchError> {
        let client = self.build_client()?;
        let response = client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        serde_json::from_slice(&bytes)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))
    }
}

#[async_trait::async_trait]
impl PageFetcher for ReqwestPageFetcher {
    async fn fetch_list(&self) -> Result<Vec<Page>, FetchError> {
        let url = self.endpoint(&[])?;
        self.get_json(url).await
    }

    async fn fetch_detail(&self, id: &str) -> Result<PageWithResults, FetchError> {
        let url = self.endpoint(&[id])?;
        self.get_json(url).await
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
