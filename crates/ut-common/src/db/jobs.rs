use deadpool_postgres::PoolError;
use tokio_postgres::{Error as PgError, Row};
use tracing::instrument;

use crate::Job;
use crate::db::PgPool;

#[derive(Debug, thiserror::Error)]
pub enum JobFetchError {
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] PoolError),
    #[error("postgres error: {0}")]
    Postgres(#[from] PgError),
}

const JOB_COLUMNS: &str = "id, title, company, location, seniority, availability, \
     salary_min, salary_max, salary_text, required_skills";

fn map_job(row: &Row) -> Job {
    Job {
        id: row.get("id"),
        title: row.get("title"),
        company: row.get("company"),
        location: row.get("location"),
        seniority: row.get("seniority"),
        availability: row.get("availability"),
        salary_min: row
            .get::<_, Option<i32>>("salary_min")
            .filter(|v| *v >= 0)
            .map(|v| v as u32),
        salary_max: row
            .get::<_, Option<i32>>("salary_max")
            .filter(|v| *v >= 0)
            .map(|v| v as u32),
        salary_text: row.get("salary_text"),
        required_skills: row
            .get::<_, Option<Vec<String>>>("required_skills")
            .unwrap_or_default(),
    }
}

/// Full job pool, in insertion order so ranking tie-breaks stay stable.
#[instrument(skip(pool))]
pub async fn fetch_jobs(pool: &PgPool) -> Result<Vec<Job>, JobFetchError> {
    let client = pool.get().await?;

    let query = format!("SELECT {JOB_COLUMNS} FROM jobs ORDER BY id");
    let rows = client.query(query.as_str(), &[]).await?;

    Ok(rows.iter().map(map_job).collect())
}

#[instrument(skip(pool))]
pub async fn fetch_job(pool: &PgPool, job_id: i64) -> Result<Option<Job>, JobFetchError> {
    let client = pool.get().await?;

    let query = format!("SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1");
    let row = client.query_opt(query.as_str(), &[&job_id]).await?;

    Ok(row.as_ref().map(map_job))
}
