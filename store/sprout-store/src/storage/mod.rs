//! Storage - Backend Trait and Implementations
//!
//! TigerStyle: Abstract storage so callers never know the backing medium.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    StorageBackend Trait                      │
//! └─────────────────────────────────────────────────────────────┘
//!          ↑                              ↑
//!          │                              │
//! ┌────────┴────────┐           ┌────────┴────────┐
//! │  MemoryBackend  │           │ PostgresBackend │
//! │  (dev/testing)  │           │  (production)   │
//! └─────────────────┘           └─────────────────┘
//! ```
//!
//! Both backends assign `id` and `created_at` themselves. Neither validates
//! payloads; that is the caller's job (see [`entity`]).

mod backend;
pub mod entity;
mod error;
mod id;
mod memory;

#[cfg(feature = "postgres")]
mod postgres;

pub use backend::StorageBackend;
pub use entity::{Folder, FolderPatch, NewFolder, NewProject, Project, ValidationError};
pub use error::{RecordKind, StorageError, StorageResult};
pub use id::IdStrategy;
pub use memory::{MemoryBackend, MemoryBackendBuilder};

#[cfg(feature = "postgres")]
pub use postgres::PostgresBackend;
