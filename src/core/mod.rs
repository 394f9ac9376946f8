// Core algorithm exports
pub mod distance;
pub mod matcher;
pub mod mutual;
pub mod scoring;

pub use distance::{haversine_distance, profile_distance};
pub use matcher::{Matcher, MatchOutcome, MIN_COMPATIBILITY_SCORE};
pub use mutual::{is_mutual_like, resolve_mutual_like, MutualLikeOutcome};
pub use scoring::{calculate_compatibility_score, common_interests, score_breakdown, ScoreBreakdown};
