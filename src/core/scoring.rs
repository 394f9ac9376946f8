use crate::models::{ScoringWeights, UserProfile};
use crate::core::distance::profile_distance;
use std::collections::BTreeSet;

/// Per-criterion points before they are summed and rounded
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub age: f64,
    pub interests: f64,
    pub distance: f64,
    pub baseline: f64,
}

impl ScoreBreakdown {
    /// Sum of all criteria, rounded to the nearest integer and clamped to 0-100
    pub fn total(&self) -> u8 {
        let sum = self.age + self.interests + self.distance + self.baseline;
        if sum.is_nan() {
            return 0;
        }
        sum.clamp(0.0, 100.0).round() as u8
    }
}

/// Calculate the compatibility score (0-100) of `candidate` as seen by `reference`
///
/// Scoring formula:
/// score = round(
///     age_fit * 30 +            # candidate age inside reference's [ageMin, ageMax]
///                               # (a missing age or bound never fits)
///     interest_overlap * 40 +   # |shared| / max(|reference interests|, 1)
///     distance_fit * 20 +       # distance <= reference's maxDistanceKm
///     10                        # baseline, always awarded
/// )
pub fn calculate_compatibility_score(
    reference: &UserProfile,
    candidate: &UserProfile,
    weights: &ScoringWeights,
) -> u8 {
    let distance_km = profile_distance(reference, candidate);
    score_breakdown(reference, candidate, distance_km, weights).total()
}

/// Score components for a candidate whose distance is already known
pub fn score_breakdown(
    reference: &UserProfile,
    candidate: &UserProfile,
    distance_km: f64,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let preferences = &reference.preferences;

    // Binary: an inverted window simply never matches
    let age = if preferences.accepts_age(candidate.age) {
        weights.age
    } else {
        0.0
    };

    let shared = reference.interests.intersection(&candidate.interests).count() as f64;
    let interests = weights.interests * shared / reference.interests.len().max(1) as f64;

    let distance = if preferences.accepts_distance(distance_km) {
        weights.distance
    } else {
        0.0
    };

    ScoreBreakdown {
        age,
        interests,
        distance,
        baseline: weights.baseline,
    }
}

/// Interest tags present in both profiles
#[inline]
pub fn common_interests(reference: &UserProfile, candidate: &UserProfile) -> BTreeSet<String> {
    reference
        .interests
        .intersection(&candidate.interests)
        .cloned()
        .collect()
}
