use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use serde_json::Value;

use ut_common::api::match_response::MatchingStatsDto;
use ut_common::db::{fetch_candidates, fetch_job};
use ut_common::matching::stats::stats_for_job;

use crate::SharedState;
use crate::auth::AuthUser;
use crate::error::ApiError;

/// Dashboard summary across the full candidate pool for one job.
pub async fn job_match_stats(
    State(state): State<SharedState>,
    Path(job_id): Path<i64>,
    auth: AuthUser,
) -> Result<Json<Value>, ApiError> {
    tracing::debug!(subject = %auth.subject, job_id, "match stats requested");

    let cache_key = format!("job:{job_id}:stats");
    if let Some(hit) = state.cache.get(&cache_key) {
        return Ok(Json(hit));
    }

    let job = fetch_job(&state.pool, job_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("job {job_id} not found")))?;
    let candidates = fetch_candidates(&state.pool).await?;

    let stats = stats_for_job(&job, &candidates);
    let dto = MatchingStatsDto::from_stats(&stats, Utc::now());

    let body = serde_json::to_value(dto).map_err(|err| ApiError::Internal(err.to_string()))?;
    state.cache.insert(cache_key, body.clone());

    Ok(Json(body))
}
