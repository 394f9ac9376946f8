use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::UserProfile;

/// Request to find matches for a reference profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(nested)]
    pub user: UserProfile,
    /// Clamped to the configured maximum by the handler
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to check whether two users like each other
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MutualLikeRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_email", rename = "userEmail")]
    pub user_email: String,
    #[validate(length(min = 1))]
    #[serde(alias = "target_email", rename = "targetEmail")]
    pub target_email: String,
}

/// Request to record an interaction
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecordInteractionRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "actor_email", rename = "actorEmail")]
    pub actor_email: String,
    #[validate(length(min = 1))]
    #[serde(alias = "target_email", rename = "targetEmail")]
    pub target_email: String,
    #[serde(alias = "type")]
    pub kind: String,
}
