//! Compatibility scoring between profiles and the career catalog.

use std::cmp::Ordering;

use itertools::Itertools;
use serde::Serialize;
use tracing::debug;

use crate::error::{CaError, Result};
use crate::model::{Career, Catalog, MAX_LEVEL, Profile};

/// Minimum proficiency at which a required skill stops counting as a gap.
pub const SUFFICIENT_LEVEL: u8 = 4;

/// Derived, read-only result of matching one profile against one career.
/// Recomputed on every query; never stored.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub career: String,
    pub score: f64,
    pub gaps: Vec<String>,
}

/// Weighted-overlap compatibility on a 0-100 scale.
///
/// Each required skill contributes `weight * min(level, MAX_LEVEL) / MAX_LEVEL`
/// and the sum is normalized by the career's total weight, so weights are
/// relative importance within one career. Skills absent from the profile
/// contribute 0. A career with no requirements scores 0.
pub fn score(profile: &Profile, career: &Career) -> f64 {
    let total = career.total_weight();
    if total <= 0.0 {
        return 0.0;
    }
    let achieved: f64 = career
        .requirements()
        .map(|(skill, weight)| {
            let level = profile.level(skill).min(MAX_LEVEL);
            weight * f64::from(level) / f64::from(MAX_LEVEL)
        })
        .sum();
    (achieved / total * 100.0).clamp(0.0, 100.0)
}

/// Required skills where the profile sits below [`SUFFICIENT_LEVEL`],
/// ordered by descending weight, ties broken by skill name ascending.
pub fn gaps(profile: &Profile, career: &Career) -> Vec<String> {
    career
        .requirements()
        .filter(|(skill, _)| profile.level(skill) < SUFFICIENT_LEVEL)
        .sorted_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        })
        .map(|(skill, _)| skill.to_string())
        .collect()
}

/// Scores `profile` against every career in the catalog, ranked by
/// descending score with a career-name-ascending tie-break.
pub fn analyze(profile: &Profile, catalog: &Catalog) -> Vec<Recommendation> {
    let results: Vec<Recommendation> = catalog
        .careers()
        .iter()
        .map(|career| Recommendation {
            career: career.name().to_string(),
            score: score(profile, career),
            gaps: gaps(profile, career),
        })
        .sorted_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.career.cmp(&b.career))
        })
        .collect();
    debug!(profile = profile.name(), careers = results.len(), "analyzed profile");
    results
}

/// One hint per gap skill, or a single "already meets the requirements"
/// line when the gap list is empty.
pub fn improvement_hints(rec: &Recommendation) -> Vec<String> {
    if rec.gaps.is_empty() {
        return vec![format!(
            "Profile already meets the requirements for {}.",
            rec.career
        )];
    }
    rec.gaps
        .iter()
        .map(|skill| format!("Raise {skill} to at least level {SUFFICIENT_LEVEL}."))
        .collect()
}

/// The `top_n` best-matching careers for `profile`.
///
/// Policy: `top_n == 0` is a validation error; a `top_n` larger than the
/// catalog is clamped to the catalog size.
pub fn recommend(profile: &Profile, catalog: &Catalog, top_n: usize) -> Result<Vec<Recommendation>> {
    if top_n == 0 {
        return Err(CaError::validation("top_n must be at least 1"));
    }
    let mut results = analyze(profile, catalog);
    results.truncate(top_n.min(catalog.len()));
    Ok(results)
}
