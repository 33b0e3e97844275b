//! MemoryBackend - Process-local Storage
//!
//! TigerStyle: Keyed maps behind one lock, deterministic ids and time.
//!
//! Records live only as long as the process. Each collection keeps its
//! insertion order so listings come back in the order records were created.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::backend::StorageBackend;
use super::entity::{Folder, FolderPatch, NewFolder, NewProject, Project};
use super::error::{RecordKind, StorageError, StorageResult};
use super::id::IdStrategy;
use crate::clock::{Clock, SystemClock};

// =============================================================================
// Table
// =============================================================================

/// One collection: rows by id plus insertion order.
#[derive(Debug)]
struct Table<T> {
    kind: RecordKind,
    rows: HashMap<String, T>,
    order: Vec<String>,
    /// Records created so far, drives sequential ids
    created_count: u64,
}

impl<T: Clone> Table<T> {
    fn new(kind: RecordKind) -> Self {
        Self {
            kind,
            rows: HashMap::new(),
            order: Vec::new(),
            created_count: 0,
        }
    }

    /// Reserve an id that is not in use.
    fn next_id(&mut self, strategy: IdStrategy) -> String {
        loop {
            self.created_count += 1;
            let id = strategy.generate(self.kind, self.created_count);
            if !self.rows.contains_key(&id) {
                return id;
            }
        }
    }

    fn get(&self, id: &str) -> Option<T> {
        self.rows.get(id).cloned()
    }

    fn all(&self) -> Vec<T> {
        self.order
            .iter()
            .filter_map(|id| self.rows.get(id))
            .cloned()
            .collect()
    }

    fn insert_new(&mut self, id: String, row: T) {
        // Precondition
        assert!(!self.rows.contains_key(&id), "id {id} already in use");

        self.order.push(id.clone());
        self.rows.insert(id, row);

        // Postcondition
        assert_eq!(self.rows.len(), self.order.len(), "order index out of sync");
    }

    fn remove(&mut self, id: &str) -> Option<T> {
        let removed = self.rows.remove(id);
        if removed.is_some() {
            self.order.retain(|existing| existing != id);
        }
        removed
    }
}

#[derive(Debug)]
struct Tables {
    projects: Table<Project>,
    folders: Table<Folder>,
    /// Latest `created_at` handed out, keeps timestamps monotonic
    last_created_at: Option<DateTime<Utc>>,
}

impl Tables {
    fn new() -> Self {
        Self {
            projects: Table::new(RecordKind::Project),
            folders: Table::new(RecordKind::Folder),
            last_created_at: None,
        }
    }

    /// Next creation timestamp, never earlier than the previous one.
    fn stamp(&mut self, clock: &dyn Clock) -> DateTime<Utc> {
        let now = clock.now();
        let stamped = match self.last_created_at {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last_created_at = Some(stamped);
        stamped
    }
}

// =============================================================================
// MemoryBackend
// =============================================================================

/// In-memory storage backend for development and tests.
///
/// Concurrent writers to the same folder race; the last write wins.
#[derive(Debug)]
pub struct MemoryBackend {
    tables: RwLock<Tables>,
    ids: IdStrategy,
    clock: Arc<dyn Clock>,
}

impl MemoryBackend {
    /// Empty store with sequential ids and wall-clock time.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for a custom id strategy or clock.
    #[must_use]
    pub fn builder() -> MemoryBackendBuilder {
        MemoryBackendBuilder::new()
    }

    /// Id strategy in use.
    #[must_use]
    pub fn id_strategy(&self) -> IdStrategy {
        self.ids
    }

    /// Number of stored projects.
    pub async fn project_count(&self) -> usize {
        self.tables.read().await.projects.rows.len()
    }

    /// Number of stored folders.
    pub async fn folder_count(&self) -> usize {
        self.tables.read().await.folders.rows.len()
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for [`MemoryBackend`].
#[derive(Debug)]
pub struct MemoryBackendBuilder {
    ids: IdStrategy,
    clock: Arc<dyn Clock>,
}

impl MemoryBackendBuilder {
    /// Create a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ids: IdStrategy::default(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Set the id strategy.
    #[must_use]
    pub fn with_id_strategy(mut self, ids: IdStrategy) -> Self {
        self.ids = ids;
        self
    }

    /// Set the clock (use `SimClock` in tests).
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Build the backend.
    #[must_use]
    pub fn build(self) -> MemoryBackend {
        MemoryBackend {
            tables: RwLock::new(Tables::new()),
            ids: self.ids,
            clock: self.clock,
        }
    }
}

impl Default for MemoryBackendBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// StorageBackend Implementation
// =============================================================================

#[async_trait]
impl StorageBackend for MemoryBackend {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn get_project(&self, id: &str) -> StorageResult<Option<Project>> {
        debug!(id, "get project");
        Ok(self.tables.read().await.projects.get(id))
    }

    async fn get_all_projects(&self) -> StorageResult<Vec<Project>> {
        Ok(self.tables.read().await.projects.all())
    }

    async fn create_project(&self, input: NewProject) -> StorageResult<Project> {
        let input = input.normalize();
        let mut tables = self.tables.write().await;

        let id = tables.projects.next_id(self.ids);
        let created_at = tables.stamp(self.clock.as_ref());
        let project = Project {
            id: id.clone(),
            description: input.description,
            category: input.category,
            folder_id: input.folder_id,
            created_at,
        };
        tables.projects.insert_new(id, project.clone());

        info!(id = %project.id, category = %project.category, "created project");
        Ok(project)
    }

    async fn get_folder(&self, id: &str) -> StorageResult<Option<Folder>> {
        debug!(id, "get folder");
        Ok(self.tables.read().await.folders.get(id))
    }

    async fn get_all_folders(&self) -> StorageResult<Vec<Folder>> {
        Ok(self.tables.read().await.folders.all())
    }

    async fn create_folder(&self, input: NewFolder) -> StorageResult<Folder> {
        let input = input.normalize();
        let mut tables = self.tables.write().await;

        let id = tables.folders.next_id(self.ids);
        let created_at = tables.stamp(self.clock.as_ref());
        let folder = Folder {
            id: id.clone(),
            name: input.name,
            parent_id: input.parent_id,
            created_at,
        };
        tables.folders.insert_new(id, folder.clone());

        info!(id = %folder.id, "created folder");
        Ok(folder)
    }

    async fn update_folder(&self, id: &str, patch: FolderPatch) -> StorageResult<Folder> {
        let patch = patch.normalize();
        let mut tables = self.tables.write().await;

        let Some(folder) = tables.folders.rows.get_mut(id) else {
            warn!(id, "update of unknown folder");
            return Err(StorageError::folder_not_found(id));
        };
        folder.apply(patch);

        // Postcondition
        assert_eq!(folder.id, id, "update must not change id");

        info!(id, "updated folder");
        Ok(folder.clone())
    }

    async fn delete_folder(&self, id: &str) -> StorageResult<()> {
        let removed = self.tables.write().await.folders.remove(id);
        if removed.is_some() {
            info!(id, "deleted folder");
        } else {
            debug!(id, "delete of unknown folder ignored");
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
