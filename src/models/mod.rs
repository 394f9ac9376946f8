// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    GeoLocation, InteractionKind, InteractionRecord, LookupStatus, MatchPreferences, MatchResult,
    ParseInteractionKindError, ScoringWeights, UserProfile,
};
pub use requests::{FindMatchesRequest, MutualLikeRequest, RecordInteractionRequest};
pub use responses::{
    ErrorResponse, FindMatchesResponse, HealthResponse, MutualLikeResponse,
    RecordInteractionResponse,
};
