// Service exports
pub mod appwrite;
pub mod memory;
pub mod store;

pub use appwrite::{AppwriteCollections, AppwriteError, AppwriteStore};
pub use memory::InMemoryStore;
pub use store::{InteractionLog, ProfileStore, StorageUnavailable};
