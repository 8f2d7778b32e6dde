pub mod items;
pub mod kv;

use thiserror::Error;

pub use items::{ItemRecord, ItemRepository};
pub use kv::{FileStore, KeyValueStore, MemoryStore};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored list could not be (de)serialized: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}
