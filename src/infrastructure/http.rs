// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the remote fetcher port.

use crate::application::port::network::{FetchError, RemoteFetcher};
use reqwest::blocking::Client;
use reqwest::redirect::Policy;

const USER_AGENT: &str = concat!("lightgrid/", env!("CARGO_PKG_VERSION"));

/// [`RemoteFetcher`] backed by a blocking [`reqwest`] client.
#[derive(Debug)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds the fetcher with a bounded redirect policy.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] when the underlying client cannot be
    /// constructed (e.g. no TLS backend).
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .redirect(Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;
        Ok(Self { client })
    }
}

impl RemoteFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Request(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        let bytes = response
            .bytes()
            .map_err(|e| FetchError::Body(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
