use thiserror::Error;

/// Errors returned by the Places client.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Network, TLS, timeout, or non-2xx failure from the underlying HTTP client.
    ///
    /// The request URL is stripped before wrapping because it carries the API key.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The text search returned a status other than `OK` / `ZERO_RESULTS`.
    #[error("Places text search failed with status {status}")]
    SearchFailed {
        status: String,
        details: serde_json::Value,
    },

    /// A details lookup returned a status other than `OK`.
    #[error("Places details lookup for {place_id} failed with status {status}")]
    DetailsFailed { place_id: String, status: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl PlacesError {
    /// Diagnostic payload to forward to callers.
    ///
    /// For a failed search this is the provider's own response body.
    #[must_use]
    pub fn details(&self) -> serde_json::Value {
        match self {
            Self::SearchFailed { details, .. } => details.clone(),
            other => serde_json::json!({ "message": other.to_string() }),
        }
    }
}
