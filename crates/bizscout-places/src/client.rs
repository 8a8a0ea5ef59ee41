//! HTTP client for the Google Places web service.
//!
//! Wraps `reqwest` with Places-specific status handling and API key
//! management. Both endpoints answer HTTP 200 and report failure through the
//! `"status"` field of the JSON envelope; see [`PlacesClient::text_search`]
//! and [`PlacesClient::place_details`] for how each status is treated.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::PlacesError;
use crate::types::{
    DetailsResponse, PlaceCandidate, PlaceDetails, TextSearchResponse, DETAIL_FIELDS, STATUS_OK,
    STATUS_ZERO_RESULTS,
};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/";
const TEXT_SEARCH_PATH: &str = "maps/api/place/textsearch/json";
const DETAILS_PATH: &str = "maps/api/place/details/json";

/// Client for the Places text search and details endpoints.
///
/// Use [`PlacesClient::new`] for production or [`PlacesClient::with_base_url`]
/// to point at a mock server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl PlacesClient {
    /// Creates a new client pointed at the production Places API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so relative endpoint paths join under it.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| PlacesError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Runs a free-text search and returns the first page of candidates.
    ///
    /// `ZERO_RESULTS` is an empty page, not an error. Entries without a
    /// `place_id` are skipped.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::SearchFailed`] for any other status, carrying the
    ///   full response body.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the envelope is not the expected shape.
    pub async fn text_search(&self, query: &str) -> Result<Vec<PlaceCandidate>, PlacesError> {
        let url = self.build_url(TEXT_SEARCH_PATH, &[("query", query)])?;
        let body = self.request_json(&url, "textsearch").await?;

        let envelope: TextSearchResponse =
            serde_json::from_value(body.clone()).map_err(|e| PlacesError::Deserialize {
                context: format!("textsearch(query={query})"),
                source: e,
            })?;

        match envelope.status.as_str() {
            STATUS_OK => {}
            STATUS_ZERO_RESULTS => return Ok(Vec::new()),
            _ => {
                return Err(PlacesError::SearchFailed {
                    status: envelope.status,
                    details: body,
                })
            }
        }

        let candidates = envelope
            .results
            .into_iter()
            .filter_map(|v| match serde_json::from_value::<PlaceCandidate>(v) {
                Ok(candidate) => Some(candidate),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping malformed text search result");
                    None
                }
            })
            .collect();

        Ok(candidates)
    }

    /// Fetches the fixed detail field set for one place.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::DetailsFailed`] if the status is not `OK`.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the envelope is not the expected shape.
    pub async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, PlacesError> {
        let url = self.build_url(
            DETAILS_PATH,
            &[("place_id", place_id), ("fields", DETAIL_FIELDS)],
        )?;
        let body = self.request_json(&url, "details").await?;

        let envelope: DetailsResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("details(place_id={place_id})"),
                source: e,
            })?;

        if envelope.status != STATUS_OK {
            return Err(PlacesError::DetailsFailed {
                place_id: place_id.to_string(),
                status: envelope.status,
            });
        }

        Ok(envelope.result.unwrap_or_default())
    }

    /// Builds the full request URL with percent-encoded query parameters,
    /// appending the API key last.
    fn build_url(&self, path: &str, extra: &[(&str, &str)]) -> Result<Url, PlacesError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| PlacesError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the body
    /// as JSON.
    ///
    /// The URL is stripped from transport errors so the API key never ends
    /// up in logs or responses.
    async fn request_json(&self, url: &Url, op: &str) -> Result<serde_json::Value, PlacesError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let response = response
            .error_for_status()
            .map_err(reqwest::Error::without_url)?;
        let body = response.text().await.map_err(reqwest::Error::without_url)?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: op.to_string(),
            source: e,
        })
    }
}
