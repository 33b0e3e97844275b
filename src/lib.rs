//! Sprout - Project and Folder API
//!
//! HTTP front for the idea launcher. Stores projects (an idea plus a
//! category) and folders (a nestable grouping) through a
//! [`StorageBackend`](sprout_store::StorageBackend) chosen at start-up.
//!
//! Features:
//! - In-memory backend for development, Postgres for deployment
//! - Validation of insert and patch payloads before storage
//! - JSON errors with stable codes

pub mod api;
pub mod config;
pub mod error;
pub mod state;

use std::sync::Arc;

use sprout_store::{MemoryBackend, PostgresBackend, StorageBackend, StorageResult};

pub use config::{Cli, Config, ConfigError, StorageConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

/// Open the backend described by `config`.
///
/// # Errors
/// Returns the storage error if Postgres cannot be reached or its schema
/// cannot be created.
pub async fn open_storage(config: &StorageConfig) -> StorageResult<Arc<dyn StorageBackend>> {
    match config {
        StorageConfig::Memory { id_strategy } => {
            tracing::info!(ids = %id_strategy, "using in-memory storage");
            let backend = MemoryBackend::builder()
                .with_id_strategy(*id_strategy)
                .build();
            Ok(Arc::new(backend))
        }
        StorageConfig::Postgres {
            url,
            max_connections,
        } => {
            tracing::info!(max_connections, "using postgres storage");
            let backend = PostgresBackend::connect(url, *max_connections).await?;
            Ok(Arc::new(backend))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprout_store::{IdStrategy, NewFolder};

    #[tokio::test]
    async fn test_open_memory_storage_with_uuid_ids() {
        let storage = open_storage(&StorageConfig::Memory {
            id_strategy: IdStrategy::Uuid,
        })
        .await
        .unwrap();

        assert_eq!(storage.name(), "memory");

        let folder = storage.create_folder(NewFolder::new("Work")).await.unwrap();
        assert!(uuid::Uuid::parse_str(&folder.id).is_ok());
    }
}
