use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Extension, Json,
};
use bizscout_core::{export, normalize_limit};
use bizscout_pipeline::PipelineOutput;
use chrono::Utc;
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{map_pipeline_error, ApiError, AppState};

/// Tells the client whether the AI stage ran, without touching the records.
pub(super) const ENRICHMENT_HEADER: &str = "x-ai-enrichment";

#[derive(Debug, Deserialize)]
pub(super) struct BusinessQuery {
    pub location: Option<String>,
    pub category: Option<String>,
    pub limit: Option<u32>,
}

async fn run_search(
    state: &AppState,
    req_id: &RequestId,
    query: Result<Query<BusinessQuery>, QueryRejection>,
) -> Result<PipelineOutput, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        ApiError::new(req_id.0.clone(), "bad_request", rejection.body_text())
    })?;

    let location = query.location.unwrap_or_default();
    let category = query.category.unwrap_or_default();
    let limit = normalize_limit(query.limit);

    tracing::info!(
        request_id = %req_id.0,
        location = %location,
        category = %category,
        limit,
        "business search requested"
    );

    state
        .pipeline
        .search(&location, &category, limit)
        .await
        .map_err(|e| map_pipeline_error(req_id.0.clone(), &e))
}

fn enrichment_header(output: &PipelineOutput) -> (header::HeaderName, HeaderValue) {
    (
        header::HeaderName::from_static(ENRICHMENT_HEADER),
        HeaderValue::from_static(output.enrichment.label()),
    )
}

pub(super) async fn list_businesses(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<BusinessQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let output = run_search(&state, &req_id, query).await?;
    let enrichment = enrichment_header(&output);

    Ok(([enrichment], Json(output.records)).into_response())
}

pub(super) async fn export_businesses(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<BusinessQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let output = run_search(&state, &req_id, query).await?;
    let enrichment = enrichment_header(&output);

    let body = export::to_csv_string(&output.records).map_err(|e| {
        tracing::error!(request_id = %req_id.0, error = %e, "CSV export failed");
        ApiError::new(req_id.0.clone(), "internal_error", "failed to build CSV export")
    })?;

    let disposition = format!(
        "attachment; filename=\"{}\"",
        export::export_filename(Utc::now().date_naive())
    );
    let disposition = HeaderValue::from_str(&disposition).map_err(|e| {
        tracing::error!(request_id = %req_id.0, error = %e, "invalid export filename header");
        ApiError::new(req_id.0.clone(), "internal_error", "failed to build CSV export")
    })?;

    Ok((
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/csv; charset=utf-8"),
            ),
            (header::CONTENT_DISPOSITION, disposition),
            enrichment,
        ],
        body,
    )
        .into_response())
}
