use std::cmp::Ordering;

use super::scoring::{CompatibilityScore, score_pair};
use crate::{Candidate, Job};

/// Options for one ranking request.
#[derive(Debug, Clone)]
pub struct RankOptions {
    /// Minimum overall score a pool member needs to be kept (inclusive).
    pub min_score: f64,
    /// Maximum number of results, applied after sorting.
    pub limit: usize,
    /// Whether serialized output should carry the per-dimension breakdown.
    pub include_breakdown: bool,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            min_score: 0.3,
            limit: 3,
            include_breakdown: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RankedCandidate {
    pub candidate: Candidate,
    pub score: CompatibilityScore,
}

#[derive(Debug, Clone)]
pub struct RankedJob {
    pub job: Job,
    pub score: CompatibilityScore,
}

/// Ranked candidates for one job: score the whole pool, keep members at or
/// above the threshold, sort descending, truncate to the limit.
///
/// `Vec::sort_by` is stable, so equal scores keep their pool order.
/// Truncation happens after sorting so a low-scoring early member never
/// displaces a high-scoring later one. An empty pool yields an empty list.
pub fn rank_candidates_for_job(
    job: &Job,
    pool: &[Candidate],
    options: &RankOptions,
) -> Vec<RankedCandidate> {
    let mut ranked: Vec<_> = pool
        .iter()
        .map(|candidate| RankedCandidate {
            candidate: candidate.clone(),
            score: score_pair(candidate, job),
        })
        .filter(|entry| entry.score.overall >= options.min_score)
        .collect();

    sort_and_truncate(&mut ranked, |entry| entry.score.overall, options.limit);
    ranked
}

/// The symmetric case: ranked jobs for one candidate.
pub fn rank_jobs_for_candidate(
    candidate: &Candidate,
    pool: &[Job],
    options: &RankOptions,
) -> Vec<RankedJob> {
    let mut ranked: Vec<_> = pool
        .iter()
        .map(|job| RankedJob {
            job: job.clone(),
            score: score_pair(candidate, job),
        })
        .filter(|entry| entry.score.overall >= options.min_score)
        .collect();

    sort_and_truncate(&mut ranked, |entry| entry.score.overall, options.limit);
    ranked
}

fn sort_and_truncate<T>(entries: &mut Vec<T>, score: impl Fn(&T) -> f64, limit: usize) {
    entries.sort_by(|a, b| score(b).partial_cmp(&score(a)).unwrap_or(Ordering::Equal));
    entries.truncate(limit);
}
