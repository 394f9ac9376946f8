//! Rental Match - compatibility matching engine for the rental community app
//!
//! Scores pairs of user profiles on age window, shared interests and
//! distance, ranks the user population against a reference profile, and
//! confirms reciprocal interest from the interaction log. Storage is reached
//! only through the [`services::ProfileStore`] trait.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    calculate_compatibility_score, haversine_distance, is_mutual_like, resolve_mutual_like,
    MatchOutcome, Matcher, MutualLikeOutcome, MIN_COMPATIBILITY_SCORE,
};
pub use models::{
    InteractionKind, InteractionRecord, LookupStatus, MatchResult, ScoringWeights, UserProfile,
};
pub use services::{InMemoryStore, ProfileStore, StorageUnavailable};
