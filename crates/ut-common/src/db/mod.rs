pub mod candidates;
pub mod jobs;
pub mod pool;

// Keep re-exports unique so downstream crates see a single symbol per helper.
pub use candidates::{CandidateFetchError, fetch_candidate, fetch_candidates};
pub use jobs::{JobFetchError, fetch_job, fetch_jobs};
pub use pool::{DbPoolError, PgPool, create_pool_from_url, create_pool_from_url_checked};
