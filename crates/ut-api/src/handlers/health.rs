use std::sync::atomic::Ordering;

use axum::{Json, extract::State};
use serde_json::{Value, json};
use tokio::time::{Duration, timeout};

use crate::SharedState;
use crate::error::ApiError;

const PROBE_TIMEOUT: Duration = Duration::from_secs(1);

/// Readiness requires both matching tables, not just a live socket. A dropped
/// or renamed table fails the probe before traffic is routed here.
const PROBE_QUERY: &str = "SELECT 1 FROM candidates LIMIT 1; SELECT 1 FROM jobs LIMIT 1";

pub async fn livez() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn readyz(State(state): State<SharedState>) -> Result<Json<Value>, ApiError> {
    if !state.readiness.load(Ordering::SeqCst) {
        return Err(ApiError::ServiceUnavailable("shutting_down".into()));
    }

    probe_matching_tables(&state)
        .await
        .map_err(ApiError::ServiceUnavailable)?;

    Ok(Json(json!({
        "status": "ok",
        "database": "ok",
        "service": env!("CARGO_PKG_NAME"),
    })))
}

async fn probe_matching_tables(state: &SharedState) -> Result<(), String> {
    let client = match timeout(PROBE_TIMEOUT, state.pool.get()).await {
        Err(_) => return Err("db_pool_timeout".into()),
        Ok(Err(err)) => return Err(format!("pool checkout failed: {err}")),
        Ok(Ok(client)) => client,
    };

    match timeout(PROBE_TIMEOUT, client.simple_query(PROBE_QUERY)).await {
        Err(_) => Err("db_probe_timeout".into()),
        Ok(Err(err)) => Err(format!("table probe failed: {err}")),
        Ok(Ok(_)) => Ok(()),
    }
}
