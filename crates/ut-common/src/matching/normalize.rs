use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Candidate, Job};

/// Fixed multiplier used to annualize a daily rate.
pub const WORKING_DAYS_PER_YEAR: u32 = 220;

/// Canonical availability value that satisfies any job requirement.
pub const AVAILABLE: &str = "available";

static RE_AMOUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+(?:[.,]\d+)?)\s*(k)?").unwrap());

static RE_THOUSANDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d)[\s,\u{00a0}\u{202f}]+(\d{3})").unwrap());

/// Experience level → ordinal rank (Junior=1, Mid=2, Senior=3, Lead=4).
///
/// Tolerant of the variants seen in stored profiles: embedded titles
/// ("Senior Product Designer"), abbreviations ("Sr", "Jr") and synonyms.
/// Returns None for anything unrecognized; callers treat that as missing data.
pub fn experience_rank(level: &str) -> Option<u8> {
    let lowered = level.trim().to_lowercase();
    if lowered.is_empty() {
        return None;
    }

    // Check the highest rank first so "Lead Senior Designer" reads as Lead.
    if lowered.contains("lead") || lowered.contains("principal") || lowered.contains("staff") {
        return Some(4);
    }
    if lowered.contains("senior") || lowered.starts_with("sr") {
        return Some(3);
    }
    if lowered.contains("mid") || lowered.contains("intermediate") || lowered.contains("confirmed")
    {
        return Some(2);
    }
    if lowered.contains("junior") || lowered.starts_with("jr") || lowered.contains("entry") {
        return Some(1);
    }

    None
}

/// Annualized salary expectation. An explicit annual figure wins; otherwise
/// the daily rate is multiplied by [`WORKING_DAYS_PER_YEAR`].
pub fn candidate_annual_salary(candidate: &Candidate) -> Option<f64> {
    if let Some(annual) = candidate.annual_salary {
        return Some(annual as f64);
    }

    candidate
        .daily_rate
        .map(|rate| rate as f64 * WORKING_DAYS_PER_YEAR as f64)
}

/// Annual salary bounds for a job. Numeric columns win over the descriptive
/// string; a single figure becomes a ±10% tolerance band.
pub fn job_salary_bounds(job: &Job) -> Option<(f64, f64)> {
    match (job.salary_min, job.salary_max) {
        (Some(a), Some(b)) => Some((a.min(b) as f64, a.max(b) as f64)),
        (Some(single), None) | (None, Some(single)) => Some(tolerance_band(single as f64)),
        (None, None) => job.salary_text.as_deref().and_then(parse_salary_range),
    }
}

fn tolerance_band(target: f64) -> (f64, f64) {
    (target * 9.0 / 10.0, target * 11.0 / 10.0)
}

/// Extract salary bounds from free text ("45k-55k", "45 000 - 55 000 €",
/// "around 50000"). Figures under 1000 are ignored so stray numbers
/// ("3 days/week") cannot masquerade as salaries.
pub fn parse_salary_range(text: &str) -> Option<(f64, f64)> {
    // Collapse thousand separators so "45 000" reads as one number.
    let compact = RE_THOUSANDS.replace_all(text, "${1}${2}");

    let mut amounts: Vec<f64> = Vec::new();
    for caps in RE_AMOUNT.captures_iter(&compact) {
        let raw = caps[1].replace(',', ".");
        let Ok(mut value) = raw.parse::<f64>() else {
            continue;
        };
        if caps.get(2).is_some() {
            value *= 1000.0;
        }
        amounts.push(value);
    }
    amounts.retain(|value| *value >= 1000.0);

    match amounts.as_slice() {
        [] => None,
        [single] => Some(tolerance_band(*single)),
        many => {
            let lo = many.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = many.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            Some((lo, hi))
        }
    }
}

/// Lower-cased, trimmed location string. Empty means "no constraint".
pub fn normalize_location(raw: Option<&str>) -> String {
    raw.map(|s| s.trim().to_lowercase()).unwrap_or_default()
}

/// Substring containment either way, so "paris" matches "paris, france".
/// No geocoding; an empty side expresses no constraint and always matches.
pub fn locations_compatible(a: &str, b: &str) -> bool {
    a.is_empty() || b.is_empty() || a.contains(b) || b.contains(a)
}

/// Lower-cased, trimmed availability value.
pub fn normalize_availability(raw: Option<&str>) -> String {
    raw.map(|s| s.trim().to_lowercase()).unwrap_or_default()
}
