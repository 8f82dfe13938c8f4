use thiserror::Error;

/// Failure talking to the catalog API or the local backend.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The request never got a response (connection refused, DNS, timeout).
    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// The backend refused the request with an `{"error": ...}` payload
    /// (e.g. the movie is already on a list).
    #[error("{0}")]
    Rejected(String),

    #[error("Failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Catalog API key is not configured")]
    MissingApiKey,
}

impl SourceError {
    pub fn status(endpoint: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        SourceError::Status {
            endpoint: endpoint.into(),
            status,
            body: body.into(),
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            SourceError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
