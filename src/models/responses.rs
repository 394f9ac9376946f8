use serde::{Deserialize, Serialize};
use crate::models::domain::MatchResult;

/// Response for find matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesResponse {
    pub matches: Vec<MatchResult>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    /// `false` when the user listing failed and `matches` is empty because of it
    #[serde(rename = "storageAvailable")]
    pub storage_available: bool,
}

/// Response for mutual like endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutualLikeResponse {
    pub mutual: bool,
    #[serde(rename = "storageAvailable")]
    pub storage_available: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Record interaction response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordInteractionResponse {
    pub success: bool,
    #[serde(rename = "interactionId")]
    pub interaction_id: String,
}
