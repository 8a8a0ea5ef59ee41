//! Search → details → AI enrichment, one request at a time.
//!
//! The pipeline is built once from [`AppConfig`] and shared by reference.
//! Which stages run is decided by the capabilities captured at build time,
//! not by re-reading credentials per request.

use std::sync::Arc;

use bizscout_core::{AppConfig, BusinessRecord, Capabilities, SearchRequest, ValidationError};
use bizscout_enrich::{Enricher, EnrichmentSummary, GeminiClient};
use bizscout_places::{PlacesClient, PlacesError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// Bad caller input; no outbound call was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The server is missing something it needs to serve the request.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The places text search failed; the request cannot be answered.
    #[error("upstream search failed: {0}")]
    Upstream(#[from] PlacesError),
}

/// Whether the AI stage ran for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichmentStatus {
    /// No model credential: records are exactly what the places provider gave.
    Disabled,
    Completed(EnrichmentSummary),
}

impl EnrichmentStatus {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Completed(_) => "completed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub records: Vec<BusinessRecord>,
    pub enrichment: EnrichmentStatus,
}

pub struct Pipeline {
    places: Option<PlacesClient>,
    enricher: Option<Enricher>,
}

impl Pipeline {
    #[must_use]
    pub fn new(places: Option<PlacesClient>, enricher: Option<Enricher>) -> Self {
        Self { places, enricher }
    }

    /// Builds the outbound clients the configuration has credentials for.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Configuration`] if a client cannot be
    /// constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, PipelineError> {
        let places = config
            .places_api_key
            .as_deref()
            .map(|key| {
                PlacesClient::new(key, config.places_timeout_secs, &config.user_agent)
                    .map_err(|e| PipelineError::Configuration(format!("places client: {e}")))
            })
            .transpose()?;

        let enricher = config
            .gemini_api_key
            .as_deref()
            .map(|key| {
                GeminiClient::new(
                    key,
                    &config.gemini_model,
                    config.model_temperature,
                    config.model_timeout_secs,
                    &config.user_agent,
                )
                .map(|client| {
                    Enricher::new(Arc::new(client))
                        .with_website_discovery(config.website_discovery)
                })
                .map_err(|e| PipelineError::Configuration(format!("model client: {e}")))
            })
            .transpose()?;

        Ok(Self::new(places, enricher))
    }

    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            places: self.places.is_some(),
            model: self.enricher.is_some(),
        }
    }

    /// Validates raw input, then [`run`](Self::run)s it.
    ///
    /// # Errors
    ///
    /// See [`run`](Self::run); additionally [`PipelineError::Validation`]
    /// for bad input, checked before anything else.
    pub async fn search(
        &self,
        location: &str,
        category: &str,
        limit: u32,
    ) -> Result<PipelineOutput, PipelineError> {
        let request = SearchRequest::new(location, category, limit)?;
        self.run(&request).await
    }

    /// Runs one search end to end.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::Configuration`] if there is no places credential.
    /// - [`PipelineError::Upstream`] if the places text search fails.
    ///
    /// Detail lookups and AI enrichment never fail the request.
    pub async fn run(&self, request: &SearchRequest) -> Result<PipelineOutput, PipelineError> {
        let Some(places) = &self.places else {
            return Err(PipelineError::Configuration(
                "GOOGLE_MAPS_API_KEY is not configured on the server".to_string(),
            ));
        };

        let mut records = places.find_businesses(request).await?;

        let enrichment = match &self.enricher {
            Some(enricher) => {
                let summary = enricher.enrich(&mut records, request).await;
                tracing::info!(
                    records = records.len(),
                    websites = ?summary.websites,
                    socials = ?summary.socials,
                    "AI enrichment finished"
                );
                EnrichmentStatus::Completed(summary)
            }
            None => {
                tracing::info!(
                    records = records.len(),
                    "AI enrichment disabled: model credential not configured"
                );
                EnrichmentStatus::Disabled
            }
        };

        Ok(PipelineOutput {
            records,
            enrichment,
        })
    }
}
