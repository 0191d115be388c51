//! HTTP request handlers

use super::error::ApiError;
use super::state::AppState;
use crate::search::{JobSubmitted, SearchRequest};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use serde_json::value::RawValue;

/// Public configuration handed to the dashboard
#[derive(Debug, Serialize)]
pub struct PublicConfig {
    pub supabase: SupabaseConfig,
}

#[derive(Debug, Serialize)]
pub struct SupabaseConfig {
    pub url: String,
    #[serde(rename = "anonKey")]
    pub anon_key: String,
}

/// Submit a search job upstream
pub async fn twitter_search(
    State(state): State<AppState>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<JobSubmitted>, ApiError> {
    let Json(request) = body?;
    let payload = request.into_payload()?;

    let job_uuid = state.backend.submit(&payload).await?;
    Ok(Json(JobSubmitted { job_uuid }))
}

/// Relay the upstream result for a job; the body is written back as received
pub async fn twitter_result(
    State(state): State<AppState>,
    Path(job_uuid): Path<String>,
) -> Result<Json<Box<RawValue>>, ApiError> {
    let result = state.backend.result(&job_uuid).await?;
    Ok(Json(result))
}

/// Non-secret configuration for the dashboard
pub async fn public_config(State(state): State<AppState>) -> Json<PublicConfig> {
    let public = &state.settings.public;
    Json(PublicConfig {
        supabase: SupabaseConfig {
            url: public.supabase_url.clone(),
            anon_key: public.supabase_anon_key.clone(),
        },
    })
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}
