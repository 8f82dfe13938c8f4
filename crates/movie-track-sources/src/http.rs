use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use crate::error::SourceError;

/// Shared reqwest client for both the catalog and the backend.
pub fn create_http_client() -> Client {
    Client::builder()
        .user_agent(concat!("reelog/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| Client::new())
}

#[derive(Deserialize)]
struct ErrorPayload {
    error: String,
}

/// Sends the request and rejects non-success statuses.
///
/// `endpoint` is a label for logs and errors; it never carries the API key.
pub(crate) async fn send(request: RequestBuilder, endpoint: &str) -> Result<Response, SourceError> {
    let response = request.send().await.map_err(|source| SourceError::Transport {
        endpoint: endpoint.to_string(),
        source,
    })?;

    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    match serde_json::from_str::<ErrorPayload>(&body) {
        Ok(payload) => Err(SourceError::Rejected(payload.error)),
        Err(_) => Err(SourceError::status(endpoint, status, body)),
    }
}

pub(crate) async fn read_json<T: DeserializeOwned>(response: Response, endpoint: &str) -> Result<T, SourceError> {
    let body = response.text().await.map_err(|source| SourceError::Transport {
        endpoint: endpoint.to_string(),
        source,
    })?;
    serde_json::from_str(&body).map_err(|source| SourceError::Decode {
        endpoint: endpoint.to_string(),
        source,
    })
}
