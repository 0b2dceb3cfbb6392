use deadpool_postgres::PoolError;
use tokio_postgres::{Error as PgError, Row};
use tracing::instrument;

use crate::Candidate;
use crate::db::PgPool;

#[derive(Debug, thiserror::Error)]
pub enum CandidateFetchError {
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] PoolError),
    #[error("postgres error: {0}")]
    Postgres(#[from] PgError),
}

const CANDIDATE_COLUMNS: &str = "id, display_name, title, location, experience_level, \
     availability, annual_salary, daily_rate, skills, photo_url";

fn map_candidate(row: &Row) -> Candidate {
    Candidate {
        id: row.get("id"),
        display_name: row.get("display_name"),
        title: row.get("title"),
        location: row.get("location"),
        experience_level: row.get("experience_level"),
        availability: row.get("availability"),
        // Salary columns are signed in Postgres; negative values are bad data
        // and read as absent rather than poisoning the scorer.
        annual_salary: row
            .get::<_, Option<i32>>("annual_salary")
            .filter(|v| *v >= 0)
            .map(|v| v as u32),
        daily_rate: row
            .get::<_, Option<i32>>("daily_rate")
            .filter(|v| *v >= 0)
            .map(|v| v as u32),
        skills: row
            .get::<_, Option<Vec<String>>>("skills")
            .unwrap_or_default(),
        photo_url: row.get("photo_url"),
    }
}

/// Full candidate pool, in insertion order so ranking tie-breaks stay stable
/// across requests.
#[instrument(skip(pool))]
pub async fn fetch_candidates(pool: &PgPool) -> Result<Vec<Candidate>, CandidateFetchError> {
    let client = pool.get().await?;

    let query = format!("SELECT {CANDIDATE_COLUMNS} FROM candidates ORDER BY id");
    let rows = client.query(query.as_str(), &[]).await?;

    Ok(rows.iter().map(map_candidate).collect())
}

#[instrument(skip(pool))]
pub async fn fetch_candidate(
    pool: &PgPool,
    candidate_id: i64,
) -> Result<Option<Candidate>, CandidateFetchError> {
    let client = pool.get().await?;

    let query = format!("SELECT {CANDIDATE_COLUMNS} FROM candidates WHERE id = $1");
    let row = client.query_opt(query.as_str(), &[&candidate_id]).await?;

    Ok(row.as_ref().map(map_candidate))
}
