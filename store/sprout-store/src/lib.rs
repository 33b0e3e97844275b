//! Sprout Store - Project and Folder Persistence
//!
//! TigerStyle: One storage contract, two backends, explicit limits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              Sprout Store                    │
//! ├─────────────────────────────────────────────┤
//! │  Entities      │ Project, Folder, payloads   │
//! │  Validation    │ Insert/patch field limits   │
//! │  Backends      │ Memory (dev) / Postgres     │
//! ├─────────────────────────────────────────────┤
//! │  Clock + Ids   │ Assigned at the boundary    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use sprout_store::{MemoryBackend, NewFolder, StorageBackend};
//!
//! # tokio_test::block_on(async {
//! let store = MemoryBackend::new();
//! let folder = store.create_folder(NewFolder::new("Work")).await.unwrap();
//! assert_eq!(folder.parent_id, None);
//! assert!(store.get_folder(&folder.id).await.unwrap().is_some());
//! # });
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod clock;
pub mod constants;
pub mod storage;

// Re-export common types
pub use clock::{Clock, SimClock, SystemClock};
pub use constants::*;
pub use storage::{
    Folder, FolderPatch, IdStrategy, MemoryBackend, MemoryBackendBuilder, NewFolder, NewProject,
    Project, RecordKind, StorageBackend, StorageError, StorageResult, ValidationError,
};

#[cfg(feature = "postgres")]
pub use storage::PostgresBackend;
