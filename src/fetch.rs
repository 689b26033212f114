//! Blocking HTTP client wrapper
//!
//! One client per run, carrying the custom User-Agent on every request.
//! No retries and no timeout beyond the transport default; each request is
//! a single blocking attempt whose failure is reported by the caller.

use crate::error::{Result, TwicError};

/// HTTP client for the listing page and bundle downloads
pub struct HttpClient {
    client: reqwest::blocking::Client,
}

impl HttpClient {
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| TwicError::IoError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;
        Ok(Self { client })
    }

    /// GET the listing page body as text
    pub fn get_listing(&self, url: &str) -> Result<String> {
        let response =
            self.client
                .get(url)
                .send()
                .map_err(|e| TwicError::ListingFetchFailed {
                    url: url.to_string(),
                    reason: e.to_string(),
                })?;
        let status = response.status();
        if !status.is_success() {
            return Err(TwicError::ListingFetchFailed {
                url: url.to_string(),
                reason: format!("HTTP status {}", status),
            });
        }
        response.text().map_err(|e| TwicError::ListingFetchFailed {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }

    /// GET a bundle body as raw bytes
    pub fn get_bundle(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| TwicError::BundleFetchFailed {
                url: url.to_string(),
                reason: e.to_string(),
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(TwicError::DownloadFailed {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let bytes = response
            .bytes()
            .map_err(|e| TwicError::BundleFetchFailed {
                url: url.to_string(),
                reason: e.to_string(),
            })?;
        Ok(bytes.to_vec())
    }
}
