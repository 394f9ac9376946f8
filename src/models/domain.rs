use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use validator::Validate;

/// User profile as stored in the `users` collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserProfile {
    /// Storage-assigned identifier (`$id` on stored documents)
    #[serde(default, alias = "$id")]
    pub id: String,
    #[validate(length(min = 1))]
    pub email: String,
    #[serde(rename = "firstName", default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Absent on some stored documents; an absent age never fits a window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default)]
    pub interests: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoLocation>,
    #[serde(default)]
    pub preferences: MatchPreferences,
}

impl MatchPreferences {
    /// Whether `age` lies inside `[ageMin, ageMax]`
    pub fn accepts_age(&self, age: Option<u32>) -> bool {
        match (age, self.age_min, self.age_max) {
            (Some(age), Some(min), Some(max)) => age >= min && age <= max,
            _ => false,
        }
    }

    /// Whether `distance_km` is within `maxDistanceKm`
    pub fn accepts_distance(&self, distance_km: f64) -> bool {
        // NaN on either side compares false
        self.max_distance_km.is_some_and(|cap| distance_km <= cap)
    }
}

impl UserProfile {
    /// Latitude/longitude of the profile, `(0, 0)` when no location is stored
    pub fn coordinates(&self) -> (f64, f64) {
        self.location
            .as_ref()
            .map(|loc| (loc.latitude, loc.longitude))
            .unwrap_or((0.0, 0.0))
    }
}

/// Geographic position of a user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub city: String,
}

/// Window a user applies when looking at other profiles
///
/// Every bound is optional. A missing bound never fits, so the criterion it
/// guards scores nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchPreferences {
    #[serde(rename = "ageMin", default, skip_serializing_if = "Option::is_none")]
    pub age_min: Option<u32>,
    #[serde(rename = "ageMax", default, skip_serializing_if = "Option::is_none")]
    pub age_max: Option<u32>,
    #[serde(
        rename = "maxDistanceKm",
        alias = "maxDistance",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub max_distance_km: Option<f64>,
    /// Carried with the profile, not consulted by scoring
    #[serde(
        rename = "genderFilter",
        alias = "gender",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub gender_filter: Option<String>,
}

/// Kind of a one-directional interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    Like,
    SuperLike,
    Pass,
}

impl InteractionKind {
    /// Whether this kind expresses interest in the target
    #[inline]
    pub fn is_interest(self) -> bool {
        matches!(self, InteractionKind::Like | InteractionKind::SuperLike)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InteractionKind::Like => "like",
            InteractionKind::SuperLike => "super_like",
            InteractionKind::Pass => "pass",
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown interaction kind '{0}', expected one of: like, super_like, pass")]
pub struct ParseInteractionKindError(String);

impl FromStr for InteractionKind {
    type Err = ParseInteractionKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "like" => Ok(InteractionKind::Like),
            "super_like" | "superlike" => Ok(InteractionKind::SuperLike),
            "pass" => Ok(InteractionKind::Pass),
            other => Err(ParseInteractionKindError(other.to_string())),
        }
    }
}

/// Immutable record of one user action towards another
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionRecord {
    #[serde(rename = "actorEmail", alias = "user")]
    pub actor_email: String,
    #[serde(rename = "targetEmail", alias = "target")]
    pub target_email: String,
    #[serde(alias = "type")]
    pub kind: InteractionKind,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl InteractionRecord {
    pub fn new(actor_email: impl Into<String>, target_email: impl Into<String>, kind: InteractionKind) -> Self {
        Self {
            actor_email: actor_email.into(),
            target_email: target_email.into(),
            kind,
            created_at: Some(Utc::now()),
        }
    }
}

/// Scored candidate returned by a ranking query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub candidate: UserProfile,
    pub score: u8,
    #[serde(rename = "commonInterests")]
    pub common_interests: BTreeSet<String>,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
}

/// Whether the store answered the enumeration a result was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupStatus {
    Complete,
    StorageUnavailable,
}

impl LookupStatus {
    #[inline]
    pub fn is_complete(self) -> bool {
        self == LookupStatus::Complete
    }
}

/// Scoring weights, in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub age: f64,
    pub interests: f64,
    pub distance: f64,
    pub baseline: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            age: 30.0,
            interests: 40.0,
            distance: 20.0,
            baseline: 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_reads_stored_field_names() {
        let profile: UserProfile = serde_json::from_value(json!({
            "$id": "doc_1",
            "email": "ana@example.com",
            "firstName": "Ana",
            "age": 29,
            "interests": ["hiking", "cooking", "hiking"],
            "location": { "latitude": 48.85, "longitude": 2.35, "city": "Paris" },
            "preferences": { "ageMin": 25, "ageMax": 35, "maxDistance": 50, "gender": "any" }
        }))
        .unwrap();

        assert_eq!(profile.id, "doc_1");
        assert_eq!(profile.interests.len(), 2);
        assert_eq!(profile.age, Some(29));
        assert_eq!(profile.preferences.max_distance_km, Some(50.0));
        assert_eq!(profile.preferences.gender_filter.as_deref(), Some("any"));
        assert_eq!(profile.coordinates(), (48.85, 2.35));
    }

    #[test]
    fn test_missing_location_reads_as_origin() {
        let profile: UserProfile = serde_json::from_value(json!({
            "email": "no-loc@example.com",
            "age": 30
        }))
        .unwrap();

        assert!(profile.location.is_none());
        assert_eq!(profile.coordinates(), (0.0, 0.0));
    }

    #[test]
    fn test_ages_above_u8_range_deserialize() {
        let profile: UserProfile = serde_json::from_value(json!({
            "email": "ref@example.com",
            "age": 300,
            "preferences": { "ageMin": 18, "ageMax": 999, "maxDistanceKm": 50 }
        }))
        .unwrap();

        assert_eq!(profile.age, Some(300));
        assert_eq!(profile.preferences.age_max, Some(999));
        assert!(profile.preferences.accepts_age(profile.age));
    }

    #[test]
    fn test_missing_fields_stay_absent() {
        let profile: UserProfile = serde_json::from_value(json!({
            "email": "sparse@example.com",
            "preferences": { "ageMin": 0 }
        }))
        .unwrap();

        assert!(profile.age.is_none());
        assert!(profile.preferences.age_max.is_none());
        assert!(profile.preferences.max_distance_km.is_none());

        assert!(!profile.preferences.accepts_age(None));
        assert!(!profile.preferences.accepts_age(Some(0)));
        assert!(!profile.preferences.accepts_distance(0.0));
    }

    #[test]
    fn test_negative_age_is_rejected() {
        let parsed = serde_json::from_value::<UserProfile>(json!({
            "email": "neg@example.com",
            "age": -1
        }));

        assert!(parsed.is_err());
    }

    #[test]
    fn test_interaction_reads_legacy_field_names() {
        let record: InteractionRecord = serde_json::from_value(json!({
            "user": "a@example.com",
            "target": "b@example.com",
            "type": "super_like"
        }))
        .unwrap();

        assert_eq!(record.actor_email, "a@example.com");
        assert_eq!(record.kind, InteractionKind::SuperLike);
        assert!(record.created_at.is_none());
    }

    #[test]
    fn test_interaction_kind_parsing() {
        assert_eq!("LIKE".parse::<InteractionKind>().unwrap(), InteractionKind::Like);
        assert_eq!("super_like".parse::<InteractionKind>().unwrap(), InteractionKind::SuperLike);
        assert!("block".parse::<InteractionKind>().is_err());

        assert!(InteractionKind::Like.is_interest());
        assert!(InteractionKind::SuperLike.is_interest());
        assert!(!InteractionKind::Pass.is_interest());
    }

    #[test]
    fn test_default_weights_sum_to_hundred() {
        let w = ScoringWeights::default();
        assert_eq!(w.age + w.interests + w.distance + w.baseline, 100.0);
    }
}
