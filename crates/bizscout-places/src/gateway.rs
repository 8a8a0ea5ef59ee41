//! Search → details fan-out producing normalized business records.

use std::collections::HashSet;

use bizscout_core::{BusinessRecord, SearchRequest};

use crate::client::PlacesClient;
use crate::error::PlacesError;
use crate::types::{PlaceCandidate, PlaceDetails};

impl PlacesClient {
    /// Finds businesses matching `request`.
    ///
    /// 1. Text search for `"<category> in <location>"` (single page).
    /// 2. Drop repeated `place_id`s, then keep at most `request.limit()`
    ///    candidates, in provider order.
    /// 3. Fetch details for each candidate, one at a time.
    ///
    /// A candidate whose details call fails for any reason is logged and
    /// dropped; the rest of the batch continues.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError`] only if the text search itself fails.
    pub async fn find_businesses(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<BusinessRecord>, PlacesError> {
        let query = request.text_query();
        let mut candidates = self.text_search(&query).await?;
        let found = candidates.len();
        let mut seen = HashSet::new();
        candidates.retain(|c| seen.insert(c.place_id.clone()));
        candidates.truncate(usize::try_from(request.limit()).unwrap_or(usize::MAX));

        tracing::info!(
            query = %query,
            found,
            unique = seen.len(),
            retained = candidates.len(),
            "places text search complete"
        );

        let mut records = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            match self.place_details(&candidate.place_id).await {
                Ok(details) => {
                    tracing::debug!(
                        place_id = %candidate.place_id,
                        category = request.category(),
                        provider_types = ?details.types,
                        "places details fetched"
                    );
                    records.push(to_record(candidate, details, request.category()));
                }
                Err(e) => {
                    tracing::warn!(
                        place_id = %candidate.place_id,
                        error = %e,
                        "places details lookup failed, skipping candidate"
                    );
                }
            }
        }

        Ok(records)
    }
}

/// Detail fields win, then the text-search candidate, then placeholders.
fn to_record(candidate: PlaceCandidate, details: PlaceDetails, category: &str) -> BusinessRecord {
    BusinessRecord::from_provider(
        candidate.place_id,
        details.name.or(candidate.name),
        category,
        details.formatted_address.or(candidate.formatted_address),
        details.formatted_phone_number,
        details.website,
    )
}
