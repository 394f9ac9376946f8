use async_trait::async_trait;
use crate::models::{InteractionRecord, UserProfile};
use crate::services::store::{InteractionLog, ProfileStore, StorageUnavailable};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashSet;
use std::time::Duration;
use thiserror::Error;

/// Documents fetched per listing request
const PAGE_SIZE: usize = 100;

/// Upper bound on listing requests for one collection
const MAX_PAGES: usize = 10_000;

/// Errors that can occur when interacting with Appwrite
#[derive(Debug, Error)]
pub enum AppwriteError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Unauthorized: invalid API key or token")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

impl From<AppwriteError> for StorageUnavailable {
    fn from(err: AppwriteError) -> Self {
        StorageUnavailable::new(err.to_string())
    }
}

/// Collection IDs in Appwrite
#[derive(Debug, Clone)]
pub struct AppwriteCollections {
    pub users: String,
    pub interactions: String,
}

/// Appwrite document database client
///
/// Handles all communication with the document backend:
/// - Listing every user profile
/// - Listing every interaction record
/// - Appending interaction records
pub struct AppwriteStore {
    base_url: String,
    api_key: String,
    project_id: String,
    database_id: String,
    client: Client,
    collections: AppwriteCollections,
}

impl AppwriteStore {
    /// Create a new Appwrite client
    pub fn new(
        base_url: String,
        api_key: String,
        project_id: String,
        database_id: String,
        collections: AppwriteCollections,
    ) -> Result<Self, AppwriteError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            base_url,
            api_key,
            project_id,
            database_id,
            client,
            collections,
        })
    }

    fn documents_url(&self, collection: &str) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.base_url.trim_end_matches('/'),
            self.database_id,
            collection
        )
    }

    /// Fetch every document of a collection, one page at a time
    ///
    /// Documents that do not deserialize into `T` are skipped, as are
    /// documents whose `$id` was already seen. Listing stops at the first
    /// page that brings nothing new, so a backend ignoring `offset` cannot
    /// keep the loop going.
    async fn list_documents<T>(&self, collection: &str) -> Result<Vec<T>, AppwriteError>
    where
        T: DeserializeOwned,
    {
        let url = self.documents_url(collection);
        let mut items = Vec::new();
        let mut seen_ids = HashSet::new();
        let mut offset = 0usize;

        for page in 1..=MAX_PAGES {
            let queries = [format!("limit({})", PAGE_SIZE), format!("offset({})", offset)];
            let query_string = queries
                .iter()
                .map(|q| format!("queries[]={}", urlencoding::encode(q)))
                .collect::<Vec<_>>()
                .join("&");
            let page_url = format!("{}?{}", url, query_string);

            let response = self
                .client
                .get(&page_url)
                .header("X-Appwrite-Key", &self.api_key)
                .header("X-Appwrite-Project", &self.project_id)
                .send()
                .await?;

            let status = response.status();
            if status == StatusCode::UNAUTHORIZED {
                return Err(AppwriteError::Unauthorized);
            }
            if !status.is_success() {
                return Err(AppwriteError::ApiError(format!(
                    "Failed to list {}: {}",
                    collection, status
                )));
            }

            let json: Value = response.json().await?;

            let total = json.get("total").and_then(|t| t.as_u64());

            let documents = json
                .get("documents")
                .and_then(|d| d.as_array())
                .ok_or_else(|| AppwriteError::InvalidResponse("Missing documents array".into()))?;

            let mut fresh = 0usize;
            for doc in documents {
                let id = doc.get("$id").and_then(|v| v.as_str());
                if let Some(id) = id {
                    if !seen_ids.insert(id.to_string()) {
                        continue;
                    }
                }
                fresh += 1;

                match serde_json::from_value::<T>(doc.clone()) {
                    Ok(item) => items.push(item),
                    Err(e) => {
                        tracing::warn!(
                            "Skipping malformed document {} in {}: {}",
                            id.unwrap_or("<unknown>"),
                            collection,
                            e
                        );
                    }
                }
            }

            let page_len = documents.len();
            offset += page_len;

            tracing::debug!(
                "Fetched page of {} documents from {} (offset: {}, total: {:?})",
                page_len,
                collection,
                offset,
                total
            );

            if page_len > 0 && fresh == 0 {
                tracing::warn!(
                    "Page at offset {} of {} repeated earlier documents, stopping",
                    offset - page_len,
                    collection
                );
                break;
            }

            let exhausted = total.is_some_and(|t| offset as u64 >= t);
            if page_len < PAGE_SIZE || exhausted {
                break;
            }
            if page == MAX_PAGES {
                tracing::warn!("Stopped listing {} after {} pages", collection, MAX_PAGES);
            }
        }

        Ok(items)
    }

    /// Append an interaction record, returning the document id
    pub async fn create_interaction(&self, record: &InteractionRecord) -> Result<String, AppwriteError> {
        let url = self.documents_url(&self.collections.interactions);
        let document_id = uuid::Uuid::new_v4().to_string();

        let data = serde_json::to_value(record)
            .map_err(|e| AppwriteError::InvalidResponse(format!("Failed to encode interaction: {}", e)))?;
        let payload = serde_json::json!({
            "documentId": document_id,
            "data": data,
        });

        let response = self
            .client
            .post(&url)
            .header("X-Appwrite-Key", &self.api_key)
            .header("X-Appwrite-Project", &self.project_id)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(AppwriteError::Unauthorized);
        }
        if !status.is_success() {
            return Err(AppwriteError::ApiError(format!(
                "Failed to record interaction: {}",
                status
            )));
        }

        tracing::debug!(
            "Recorded interaction: {} -> {} ({})",
            record.actor_email,
            record.target_email,
            record.kind
        );

        Ok(document_id)
    }
}

#[async_trait]
impl ProfileStore for AppwriteStore {
    async fn list_all_users(&self) -> Result<Vec<UserProfile>, StorageUnavailable> {
        Ok(self.list_documents(&self.collections.users).await?)
    }

    async fn list_all_interactions(&self) -> Result<Vec<InteractionRecord>, StorageUnavailable> {
        Ok(self.list_documents(&self.collections.interactions).await?)
    }
}

#[async_trait]
impl InteractionLog for AppwriteStore {
    async fn append_interaction(&self, record: InteractionRecord) -> Result<String, StorageUnavailable> {
        Ok(self.create_interaction(&record).await?)
    }
}
