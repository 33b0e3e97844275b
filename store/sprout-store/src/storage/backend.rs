//! StorageBackend - the persistence contract.

use async_trait::async_trait;

use super::entity::{Folder, FolderPatch, NewFolder, NewProject, Project};
use super::error::StorageResult;

/// Persistence for projects and folders.
///
/// Implementations are picked once at start-up and shared as
/// `Arc<dyn StorageBackend>`.
///
/// Contract:
/// - `get_*` return `Ok(None)` for an unknown id, never an error.
/// - `create_*` assign `id` and `created_at`; omitted references become `None`.
/// - `update_folder` merges only the fields present in the patch and fails
///   with [`StorageError::NotFound`](super::StorageError::NotFound) if the
///   folder is missing, leaving the store untouched.
/// - `delete_folder` is idempotent.
/// - No referential checks on `folder_id` / `parent_id`.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Short label for logs and health output.
    fn name(&self) -> &'static str;

    /// Get a project by id.
    async fn get_project(&self, id: &str) -> StorageResult<Option<Project>>;

    /// List every project.
    async fn get_all_projects(&self) -> StorageResult<Vec<Project>>;

    /// Insert a project and return the stored record.
    async fn create_project(&self, input: NewProject) -> StorageResult<Project>;

    /// Get a folder by id.
    async fn get_folder(&self, id: &str) -> StorageResult<Option<Folder>>;

    /// List every folder.
    async fn get_all_folders(&self) -> StorageResult<Vec<Folder>>;

    /// Insert a folder and return the stored record.
    async fn create_folder(&self, input: NewFolder) -> StorageResult<Folder>;

    /// Merge `patch` onto an existing folder.
    async fn update_folder(&self, id: &str, patch: FolderPatch) -> StorageResult<Folder>;

    /// Remove a folder. Unknown ids are a no-op.
    async fn delete_folder(&self, id: &str) -> StorageResult<()>;
}
