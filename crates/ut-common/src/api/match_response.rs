use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::matching::ranker::{RankedCandidate, RankedJob};
use crate::matching::scoring::ScoreBreakdown as CoreScoreBreakdown;
use crate::matching::stats::MatchingStats;

/// One serialized match result row. Recomputed per request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchEntry {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Overall score in [0,1].
    pub score: f64,
    /// Omitted unless the caller asked for details (payload-size control).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_breakdown: Option<ScoreBreakdownDto>,
}

impl MatchEntry {
    pub fn from_ranked_candidate(entry: &RankedCandidate, include_breakdown: bool) -> Self {
        Self {
            id: entry.candidate.id.unwrap_or_default(),
            name: entry.candidate.display_name.clone().unwrap_or_default(),
            title: entry.candidate.title.clone(),
            location: entry.candidate.location.clone(),
            score: entry.score.overall,
            score_breakdown: include_breakdown
                .then(|| ScoreBreakdownDto::from(&entry.score.breakdown)),
        }
    }

    /// Job rows reuse the same shape: name is the job title, the title slot
    /// carries the company.
    pub fn from_ranked_job(entry: &RankedJob, include_breakdown: bool) -> Self {
        Self {
            id: entry.job.id.unwrap_or_default(),
            name: entry.job.title.clone().unwrap_or_default(),
            title: entry.job.company.clone(),
            location: entry.job.location.clone(),
            score: entry.score.overall,
            score_breakdown: include_breakdown
                .then(|| ScoreBreakdownDto::from(&entry.score.breakdown)),
        }
    }
}

/// Per-dimension sub-scores, each in [0,1].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreBreakdownDto {
    pub experience: f64,
    pub location: f64,
    pub salary: f64,
    pub availability: f64,
}

impl From<&CoreScoreBreakdown> for ScoreBreakdownDto {
    fn from(value: &CoreScoreBreakdown) -> Self {
        Self {
            experience: value.experience,
            location: value.location,
            salary: value.salary,
            availability: value.availability,
        }
    }
}

/// Dashboard summary over a scored population.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingStatsDto {
    pub average_score: f64,
    pub high_quality_count: usize,
    pub high_quality_percentage: f64,
    pub total_candidates: usize,
    pub computed_at: DateTime<Utc>,
}

impl MatchingStatsDto {
    pub fn from_stats(stats: &MatchingStats, computed_at: DateTime<Utc>) -> Self {
        Self {
            average_score: stats.average_score,
            high_quality_count: stats.high_quality_count,
            high_quality_percentage: stats.high_quality_percentage,
            total_candidates: stats.total_candidates,
            computed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::scoring::CompatibilityScore;
    use crate::{Candidate, Job};

    fn ranked_candidate() -> RankedCandidate {
        RankedCandidate {
            candidate: Candidate {
                id: Some(7),
                display_name: Some("Ana Martins".into()),
                title: Some("Product Designer".into()),
                location: Some("Paris".into()),
                ..Candidate::default()
            },
            score: CompatibilityScore {
                overall: 0.86,
                breakdown: CoreScoreBreakdown {
                    experience: 1.0,
                    location: 1.0,
                    salary: 0.5,
                    availability: 1.0,
                },
            },
        }
    }

    #[test]
    fn breakdown_is_omitted_unless_requested() {
        let entry = MatchEntry::from_ranked_candidate(&ranked_candidate(), false);
        let json = serde_json::to_value(&entry).unwrap();

        assert!(json.get("scoreBreakdown").is_none());
        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "Ana Martins");
        assert_eq!(json["score"], 0.86);
    }

    #[test]
    fn breakdown_is_serialized_when_requested() {
        let entry = MatchEntry::from_ranked_candidate(&ranked_candidate(), true);
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["scoreBreakdown"]["experience"], 1.0);
        assert_eq!(json["scoreBreakdown"]["salary"], 0.5);
    }

    #[test]
    fn job_entries_put_the_company_in_the_title_slot() {
        let ranked = RankedJob {
            job: Job {
                id: Some(42),
                title: Some("Senior UX Designer".into()),
                company: Some("Meridian".into()),
                location: Some("Lyon".into()),
                ..Job::default()
            },
            score: CompatibilityScore {
                overall: 0.75,
                breakdown: CoreScoreBreakdown::default(),
            },
        };

        let entry = MatchEntry::from_ranked_job(&ranked, false);
        assert_eq!(entry.name, "Senior UX Designer");
        assert_eq!(entry.title.as_deref(), Some("Meridian"));
        assert_eq!(entry.id, 42);
    }

    #[test]
    fn stats_dto_uses_camel_case_fields() {
        let stats = MatchingStats {
            average_score: 0.6,
            high_quality_count: 2,
            high_quality_percentage: 40.0,
            total_candidates: 5,
        };
        let json = serde_json::to_value(MatchingStatsDto::from_stats(&stats, Utc::now())).unwrap();

        assert_eq!(json["averageScore"], 0.6);
        assert_eq!(json["highQualityCount"], 2);
        assert_eq!(json["highQualityPercentage"], 40.0);
        assert_eq!(json["totalCandidates"], 5);
        assert!(json.get("computedAt").is_some());
    }
}
