use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::models::{InteractionRecord, UserProfile};
use crate::services::store::{InteractionLog, ProfileStore, StorageUnavailable};

/// In-process store, used for local runs, tests and benchmarks
///
/// An `unavailable()` store fails every call, which is how degraded
/// lookups are exercised without a backend.
#[derive(Debug)]
pub struct InMemoryStore {
    users: RwLock<Vec<UserProfile>>,
    interactions: RwLock<Vec<InteractionRecord>>,
    available: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::with_data(Vec::new(), Vec::new())
    }

    pub fn with_data(users: Vec<UserProfile>, interactions: Vec<InteractionRecord>) -> Self {
        Self {
            users: RwLock::new(users),
            interactions: RwLock::new(interactions),
            available: true,
        }
    }

    /// A store whose every call fails
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    /// Insert a profile, assigning an id when it has none
    pub async fn insert_user(&self, mut profile: UserProfile) -> Result<String, StorageUnavailable> {
        self.check_available()?;
        if profile.id.is_empty() {
            profile.id = uuid::Uuid::new_v4().to_string();
        }
        let id = profile.id.clone();
        self.users.write().await.push(profile);
        Ok(id)
    }

    fn check_available(&self) -> Result<(), StorageUnavailable> {
        if self.available {
            Ok(())
        } else {
            Err(StorageUnavailable::new("in-memory store marked unavailable"))
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileStore for InMemoryStore {
    async fn list_all_users(&self) -> Result<Vec<UserProfile>, StorageUnavailable> {
        self.check_available()?;
        Ok(self.users.read().await.clone())
    }

    async fn list_all_interactions(&self) -> Result<Vec<InteractionRecord>, StorageUnavailable> {
        self.check_available()?;
        Ok(self.interactions.read().await.clone())
    }
}

#[async_trait]
impl InteractionLog for InMemoryStore {
    async fn append_interaction(&self, record: InteractionRecord) -> Result<String, StorageUnavailable> {
        self.check_available()?;
        self.interactions.write().await.push(record);
        Ok(uuid::Uuid::new_v4().to_string())
    }
}
