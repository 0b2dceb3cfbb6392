use super::normalize;
use super::weights::{DEFAULT_WEIGHTS, Weights};
use crate::{Candidate, Job};

/// Per-dimension sub-scores, each in [0,1]. A 0.0 means "total mismatch or
/// no comparable data", never an error.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub experience: f64,
    pub location: f64,
    pub salary: f64,
    pub availability: f64,
}

impl ScoreBreakdown {
    pub fn weighted_total(&self, weights: &Weights) -> f64 {
        self.experience * weights.experience
            + self.location * weights.location
            + self.salary * weights.salary
            + self.availability * weights.availability
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompatibilityScore {
    pub overall: f64,
    pub breakdown: ScoreBreakdown,
}

/// Overall compatibility for one (candidate, job) pair.
///
/// Pure function of its two inputs: no I/O, no shared state, and it cannot
/// fail for any well-typed input — missing or malformed fields degrade to the
/// fallback each dimension defines.
pub fn score_pair(candidate: &Candidate, job: &Job) -> CompatibilityScore {
    let breakdown = ScoreBreakdown {
        experience: score_experience(
            candidate.experience_level.as_deref(),
            job.seniority.as_deref(),
        ),
        location: score_location(candidate.location.as_deref(), job.location.as_deref()),
        salary: score_salary(candidate, job),
        availability: score_availability(
            candidate.availability.as_deref(),
            job.availability.as_deref(),
        ),
    };

    CompatibilityScore {
        overall: breakdown.weighted_total(&DEFAULT_WEIGHTS),
        breakdown,
    }
}

/// Linear decay over ordinal distance: exact match 1.0, one level off ~0.67,
/// three or more levels off 0.0.
pub fn score_experience(candidate_level: Option<&str>, required: Option<&str>) -> f64 {
    let Some(required_rank) = required.and_then(normalize::experience_rank) else {
        // No seniority requirement expressed by the job.
        return 1.0;
    };
    let Some(candidate_rank) = candidate_level.and_then(normalize::experience_rank) else {
        // Unknown level is neutral, not a mismatch.
        return 0.5;
    };

    let distance = (candidate_rank as i32 - required_rank as i32)
        .unsigned_abs()
        .min(3);
    1.0 - distance as f64 / 3.0
}

/// 1.0 when either side expresses no constraint or one normalized string
/// contains the other; 0.0 otherwise. Deliberately coarse — no geocoding.
pub fn score_location(candidate: Option<&str>, job: Option<&str>) -> f64 {
    let candidate = normalize::normalize_location(candidate);
    let job = normalize::normalize_location(job);

    if normalize::locations_compatible(&candidate, &job) {
        1.0
    } else {
        0.0
    }
}

/// Inside the job's range → 1.0. Outside, the score decays linearly with the
/// gap relative to the violated bound and reaches 0.0 at a 50% overshoot.
/// Missing salary data on either side is neutral 0.5.
pub fn score_salary(candidate: &Candidate, job: &Job) -> f64 {
    let (Some(expectation), Some((min, max))) = (
        normalize::candidate_annual_salary(candidate),
        normalize::job_salary_bounds(job),
    ) else {
        return 0.5;
    };

    if (min..=max).contains(&expectation) {
        return 1.0;
    }

    let (gap, bound) = if expectation > max {
        (expectation - max, max)
    } else {
        (min - expectation, min)
    };
    if bound <= 0.0 {
        return 0.0;
    }

    (1.0 - 2.0 * gap / bound).clamp(0.0, 1.0)
}

/// Equality match with one special case: an `available` candidate satisfies
/// any requirement. A job without a requirement accepts everyone; a candidate
/// with no stated availability fails a stated requirement.
pub fn score_availability(candidate: Option<&str>, required: Option<&str>) -> f64 {
    let required = normalize::normalize_availability(required);
    if required.is_empty() {
        return 1.0;
    }

    let candidate = normalize::normalize_availability(candidate);
    if candidate == normalize::AVAILABLE || candidate == required {
        1.0
    } else {
        0.0
    }
}
