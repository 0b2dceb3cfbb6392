use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::Value;

use ut_common::api::match_request::MatchQuery;
use ut_common::api::match_response::MatchEntry;
use ut_common::db::{fetch_candidate, fetch_candidates, fetch_job, fetch_jobs};
use ut_common::matching::ranker::{rank_candidates_for_job, rank_jobs_for_candidate};

use crate::SharedState;
use crate::auth::AuthUser;
use crate::error::ApiError;

/// Ranked candidates for one job. The pool is the full candidate table; all
/// scoring happens in-process after the two reads.
pub async fn candidates_for_job(
    State(state): State<SharedState>,
    Path(job_id): Path<i64>,
    Query(query): Query<MatchQuery>,
    auth: AuthUser,
) -> Result<Json<Value>, ApiError> {
    tracing::debug!(subject = %auth.subject, job_id, "candidate ranking requested");

    let cache_key = format!("job:{job_id}:candidates:{}", query.cache_fragment());
    if let Some(hit) = state.cache.get(&cache_key) {
        return Ok(Json(hit));
    }

    let job = fetch_job(&state.pool, job_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("job {job_id} not found")))?;
    let candidates = fetch_candidates(&state.pool).await?;

    let options = query.to_options();
    let entries: Vec<MatchEntry> = rank_candidates_for_job(&job, &candidates, &options)
        .iter()
        .map(|ranked| MatchEntry::from_ranked_candidate(ranked, options.include_breakdown))
        .collect();

    let body = serde_json::to_value(entries).map_err(|err| ApiError::Internal(err.to_string()))?;
    state.cache.insert(cache_key, body.clone());

    Ok(Json(body))
}

/// The symmetric endpoint: ranked jobs for one candidate.
pub async fn jobs_for_candidate(
    State(state): State<SharedState>,
    Path(candidate_id): Path<i64>,
    Query(query): Query<MatchQuery>,
    auth: AuthUser,
) -> Result<Json<Value>, ApiError> {
    tracing::debug!(subject = %auth.subject, candidate_id, "job ranking requested");

    let cache_key = format!("candidate:{candidate_id}:jobs:{}", query.cache_fragment());
    if let Some(hit) = state.cache.get(&cache_key) {
        return Ok(Json(hit));
    }

    let candidate = fetch_candidate(&state.pool, candidate_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("candidate {candidate_id} not found")))?;
    let jobs = fetch_jobs(&state.pool).await?;

    let options = query.to_options();
    let entries: Vec<MatchEntry> = rank_jobs_for_candidate(&candidate, &jobs, &options)
        .iter()
        .map(|ranked| MatchEntry::from_ranked_job(ranked, options.include_breakdown))
        .collect();

    let body = serde_json::to_value(entries).map_err(|err| ApiError::Internal(err.to_string()))?;
    state.cache.insert(cache_key, body.clone());

    Ok(Json(body))
}
