use async_trait::async_trait;
use thiserror::Error;
use crate::models::{InteractionRecord, UserProfile};

/// The backing store could not answer an enumeration
#[derive(Debug, Clone, Error)]
#[error("storage unavailable: {reason}")]
pub struct StorageUnavailable {
    pub reason: String,
}

impl StorageUnavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Read side of the user/interaction store consumed by the matching engine
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Every stored user profile
    async fn list_all_users(&self) -> Result<Vec<UserProfile>, StorageUnavailable>;

    /// Every stored interaction record
    async fn list_all_interactions(&self) -> Result<Vec<InteractionRecord>, StorageUnavailable>;
}

/// Write side for interaction records
#[async_trait]
pub trait InteractionLog: Send + Sync {
    /// Append one immutable record, returning its storage id
    async fn append_interaction(&self, record: InteractionRecord) -> Result<String, StorageUnavailable>;
}
