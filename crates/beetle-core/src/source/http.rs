//! JSON-over-HTTP collection client.
//!
//! Each collection is published at `{base_url}/{name}` and answers a plain
//! GET with a JSON array of records.

use std::future::Future;
use std::marker::PhantomData;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use super::{FetchError, RecordSource};

/// Build the shared HTTP client with a per-request timeout.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, FetchError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| FetchError::ClientBuild {
            message: e.to_string(),
        })
}

/// Join a base URL and a collection path without doubling slashes.
pub fn collection_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// GET `url` and decode the body as JSON.
pub async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::Request {
            url: url.to_string(),
            message: e.to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.bytes().await.map_err(|e| FetchError::Request {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    debug!(
        event = "core.source.response_received",
        url = url,
        bytes = body.len()
    );

    serde_json::from_slice(&body).map_err(|e| FetchError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })
}

/// A collection of `T` records served over HTTP.
pub struct HttpSource<T> {
    client: reqwest::Client,
    url: String,
    _record: PhantomData<fn() -> T>,
}

impl<T> HttpSource<T> {
    pub fn new(client: reqwest::Client, base_url: &str, collection: &str) -> Self {
        Self {
            client,
            url: collection_url(base_url, collection),
            _record: PhantomData,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl<T> RecordSource for HttpSource<T>
where
    T: DeserializeOwned + Send,
{
    type Record = T;

    fn fetch(&self) -> impl Future<Output = Result<Vec<T>, FetchError>> + Send {
        get_json(&self.client, &self.url)
    }

    fn location(&self) -> &str {
        &self.url
    }
}
