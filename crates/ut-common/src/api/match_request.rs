use serde::Deserialize;

use crate::matching::ranker::RankOptions;

const MAX_LIMIT: usize = 50;

/// Query parameters accepted by the match endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchQuery {
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub min_score: Option<f64>,
    #[serde(default)]
    pub include_details: bool,
}

impl MatchQuery {
    /// Clamp raw query values into ranker options.
    pub fn to_options(&self) -> RankOptions {
        let defaults = RankOptions::default();

        RankOptions {
            limit: self.limit.unwrap_or(defaults.limit).clamp(1, MAX_LIMIT),
            min_score: self.min_score.unwrap_or(defaults.min_score).clamp(0.0, 1.0),
            include_breakdown: self.include_details,
        }
    }

    /// Stable cache-key fragment for this parameter set. Built from the
    /// clamped values so equivalent requests share one cache entry.
    pub fn cache_fragment(&self) -> String {
        let options = self.to_options();
        format!(
            "limit={}:min={:.3}:details={}",
            options.limit, options.min_score, options.include_breakdown
        )
    }
}
