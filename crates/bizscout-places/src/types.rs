//! Response shapes for the Places text search and details endpoints.

use serde::Deserialize;

/// Field mask requested from the details endpoint.
pub const DETAIL_FIELDS: &str = "name,formatted_address,formatted_phone_number,website,types";

pub const STATUS_OK: &str = "OK";
pub const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

/// A raw text-search hit, before details are fetched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaceCandidate {
    pub place_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
}

/// Top-level text search envelope.
///
/// `results` stays untyped so a single malformed entry can be skipped
/// instead of failing the whole page.
#[derive(Debug, Deserialize)]
pub(crate) struct TextSearchResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DetailsResponse {
    pub status: String,
    #[serde(default)]
    pub result: Option<PlaceDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PlaceDetails {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    /// Provider place types; logged next to the requested category.
    #[serde(default)]
    pub types: Vec<String>,
}
