//! Reqwest-backed HTTP client for the versioned Duolingo API.
//!
//! The client owns transport details only: URL joining, session credentials,
//! status mapping and JSON parsing. It issues exactly one attempt per call and
//! relies on reqwest's default timeouts.

use std::sync::Arc;

use reqwest::{Client, Url};
use serde_json::Value;
use tracing::debug;

use super::credentials::CredentialProvider;
use crate::domain::ports::SocialGraphSourceError;

/// Versioned API root used by the Duolingo web client.
pub const DEFAULT_API_BASE: &str = "https://www.duolingo.com/2017-06-30/";

/// Authenticated GET client rooted at one API base URL.
#[derive(Clone)]
pub struct DuolingoApiClient {
    client: Client,
    base: Url,
    credentials: Arc<dyn CredentialProvider>,
}

impl DuolingoApiClient {
    /// Build a client with a fresh reqwest connection pool.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        base: Url,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, base, credentials))
    }

    /// Build a client around an existing reqwest client.
    pub fn with_client(
        client: Client,
        base: Url,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Self {
        Self {
            client,
            base: directory_base(base),
            credentials,
        }
    }

    /// Base URL every endpoint is resolved against.
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// GET `endpoint` relative to the base URL and parse the body as JSON.
    ///
    /// `endpoint` must already be percent-encoded, including any field
    /// projection syntax.
    ///
    /// # Errors
    ///
    /// Returns [`SocialGraphSourceError::Transport`] when the request cannot be
    /// sent, [`SocialGraphSourceError::Status`] for any non-2xx status and
    /// [`SocialGraphSourceError::Decode`] when the body is not JSON.
    pub async fn get(&self, endpoint: &str) -> Result<Value, SocialGraphSourceError> {
        let url = self.base.join(endpoint).map_err(|error| {
            SocialGraphSourceError::transport(format!("invalid endpoint '{endpoint}': {error}"))
        })?;

        let mut request = self.client.get(url);
        if let Some(credentials) = self.credentials.credentials() {
            request = credentials.apply(request);
        }

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        debug!(%endpoint, status = status.as_u16(), "duolingo request completed");
        if !status.is_success() {
            return Err(SocialGraphSourceError::status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        serde_json::from_slice(&body).map_err(|error| {
            SocialGraphSourceError::decode(format!("invalid JSON payload: {error}"))
        })
    }
}

fn directory_base(mut base: Url) -> Url {
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}

fn map_transport_error(error: reqwest::Error) -> SocialGraphSourceError {
    SocialGraphSourceError::transport(error.to_string())
}
