use super::scoring::score_pair;
use crate::{Candidate, Job};

/// Overall score at or above which a match counts as "high quality" on
/// dashboards. Fixed policy constant, like the aggregation weights.
pub const HIGH_QUALITY_THRESHOLD: f64 = 0.8;

#[derive(Debug, Clone, PartialEq)]
pub struct MatchingStats {
    pub average_score: f64,
    pub high_quality_count: usize,
    pub high_quality_percentage: f64,
    pub total_candidates: usize,
}

impl MatchingStats {
    fn empty() -> Self {
        Self {
            average_score: 0.0,
            high_quality_count: 0,
            high_quality_percentage: 0.0,
            total_candidates: 0,
        }
    }
}

/// Summary over already-computed overall scores.
/// An empty population yields zeros, never NaN.
pub fn summarize(scores: &[f64]) -> MatchingStats {
    let total = scores.len();
    if total == 0 {
        return MatchingStats::empty();
    }

    let sum: f64 = scores.iter().sum();
    let high_quality_count = scores
        .iter()
        .filter(|score| **score >= HIGH_QUALITY_THRESHOLD)
        .count();

    MatchingStats {
        average_score: sum / total as f64,
        high_quality_count,
        high_quality_percentage: high_quality_count as f64 / total as f64 * 100.0,
        total_candidates: total,
    }
}

/// Stats across the full candidate pool for one job.
pub fn stats_for_job(job: &Job, pool: &[Candidate]) -> MatchingStats {
    let scores: Vec<f64> = pool
        .iter()
        .map(|candidate| score_pair(candidate, job).overall)
        .collect();
    summarize(&scores)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_population_yields_zeros() {
        let stats = summarize(&[]);

        assert_eq!(stats.average_score, 0.0);
        assert_eq!(stats.high_quality_count, 0);
        assert_eq!(stats.high_quality_percentage, 0.0);
        assert_eq!(stats.total_candidates, 0);
        assert!(!stats.average_score.is_nan());
    }

    #[test]
    fn counts_high_quality_matches_at_the_threshold() {
        let stats = summarize(&[0.9, 0.8, 0.79, 0.4]);

        assert_eq!(stats.total_candidates, 4);
        // 0.8 itself counts: the threshold is inclusive.
        assert_eq!(stats.high_quality_count, 2);
        assert!((stats.high_quality_percentage - 50.0).abs() < 1e-9);
        assert!((stats.average_score - 0.7225).abs() < 1e-9);
    }

    #[test]
    fn computes_stats_over_a_candidate_pool() {
        let job = Job {
            seniority: Some("Senior".into()),
            location: Some("Paris".into()),
            availability: Some("immediate".into()),
            salary_min: Some(50_000),
            salary_max: Some(65_000),
            ..Job::default()
        };
        let strong = Candidate {
            experience_level: Some("Senior".into()),
            location: Some("Paris".into()),
            availability: Some("available".into()),
            annual_salary: Some(55_000),
            ..Candidate::default()
        };
        let weak = Candidate {
            experience_level: Some("Junior".into()),
            location: Some("Berlin".into()),
            availability: Some("unavailable".into()),
            annual_salary: Some(100_000),
            ..Candidate::default()
        };

        let stats = stats_for_job(&job, &[strong, weak]);

        assert_eq!(stats.total_candidates, 2);
        assert_eq!(stats.high_quality_count, 1);
        assert!((stats.high_quality_percentage - 50.0).abs() < 1e-9);
        assert!(stats.average_score > 0.0 && stats.average_score < 1.0);
    }
}
