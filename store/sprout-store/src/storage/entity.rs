//! Entities - Projects, Folders and their payloads
//!
//! TigerStyle: Explicit types, validation at the edge, builder-style payloads.
//!
//! Wire names are camelCase (`folderId`, `parentId`, `createdAt`) and
//! nullable references always serialize as `null` rather than being omitted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::{FOLDER_NAME_CHARS_MAX, PROJECT_CATEGORY_CHARS_MAX};

// =============================================================================
// Records
// =============================================================================

/// A user-authored idea with a category tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier
    pub id: String,
    /// Free-text description of the idea
    pub description: String,
    /// Short tag such as `web-app`
    pub category: String,
    /// Containing folder, if any
    pub folder_id: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// A named container that nests through `parent_id`.
///
/// Nothing checks that `parent_id` points at a real folder, or that the
/// parent chain is acyclic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Parent folder, `None` at the root
    pub parent_id: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Folder {
    /// Whether this folder sits at the root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Apply a patch in place. `id` and `created_at` are never touched.
    pub fn apply(&mut self, patch: FolderPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(parent_id) = patch.parent_id {
            self.parent_id = parent_id;
        }
    }
}

// =============================================================================
// Payloads
// =============================================================================

/// Insert payload for a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    /// Free-text description
    pub description: String,
    /// Category tag
    pub category: String,
    /// Containing folder
    #[serde(default)]
    pub folder_id: Option<String>,
}

impl NewProject {
    /// Create a payload with no folder.
    pub fn new(description: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            category: category.into(),
            folder_id: None,
        }
    }

    /// Place the project in a folder.
    #[must_use]
    pub fn with_folder(mut self, folder_id: impl Into<String>) -> Self {
        self.folder_id = Some(folder_id.into());
        self
    }

    /// Treat a blank `folder_id` as no folder.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        self.folder_id = non_blank(self.folder_id);
        self
    }

    /// Check field limits.
    ///
    /// # Errors
    /// Returns the first field that fails.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("description", &self.description)?;
        require_text("category", &self.category)?;
        require_max_chars("category", &self.category, PROJECT_CATEGORY_CHARS_MAX)
    }
}

/// Insert payload for a folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFolder {
    /// Display name
    pub name: String,
    /// Parent folder
    #[serde(default)]
    pub parent_id: Option<String>,
}

impl NewFolder {
    /// Create a root-level folder payload.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent_id: None,
        }
    }

    /// Nest under another folder.
    #[must_use]
    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Treat a blank `parent_id` as root level.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        self.parent_id = non_blank(self.parent_id);
        self
    }

    /// Check field limits.
    ///
    /// # Errors
    /// Returns the first field that fails.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_folder_name(&self.name)
    }
}

/// Partial update for a folder.
///
/// `parent_id` is doubly optional: `None` leaves the parent alone,
/// `Some(None)` moves the folder to the root, `Some(Some(id))` reparents it.
/// On the wire that is "key absent", `"parentId": null` and
/// `"parentId": "<id>"` respectively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderPatch {
    /// New name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New parent
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_id: Option<Option<String>>,
}

impl FolderPatch {
    /// Rename only.
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            parent_id: None,
        }
    }

    /// Reparent only. `None` moves the folder to the root.
    pub fn reparent(parent_id: Option<String>) -> Self {
        Self {
            name: None,
            parent_id: Some(parent_id),
        }
    }

    /// Treat a blank `parent_id` as a move to the root.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        self.parent_id = self.parent_id.map(non_blank);
        self
    }

    /// Check the fields that are present.
    ///
    /// # Errors
    /// Returns the first field that fails.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.name {
            Some(name) => validate_folder_name(name),
            None => Ok(()),
        }
    }
}

/// Blank references mean "none".
fn non_blank(id: Option<String>) -> Option<String> {
    id.filter(|id| !id.trim().is_empty())
}

/// Maps a present key (even `null`) to `Some(..)`; `#[serde(default)]`
/// covers the absent case.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

// =============================================================================
// Validation
// =============================================================================

/// Payload rejected before it reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Required text was empty or whitespace.
    #[error("{field} must not be empty")]
    Empty {
        /// Wire name of the field
        field: &'static str,
    },

    /// Text exceeded its column width.
    #[error("{field} is {len} characters, max {max}")]
    TooLong {
        /// Wire name of the field
        field: &'static str,
        /// Actual length in characters
        len: usize,
        /// Allowed length
        max: usize,
    },
}

fn validate_folder_name(name: &str) -> Result<(), ValidationError> {
    require_text("name", name)?;
    require_max_chars("name", name, FOLDER_NAME_CHARS_MAX)
}

fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

fn require_max_chars(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len > max {
        return Err(ValidationError::TooLong { field, len, max });
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{CATEGORY_DATA_APP, CATEGORY_WEB_APP};
    use serde_json::json;

    #[test]
    fn test_project_serializes_camel_case_with_null_folder() {
        let project = Project {
            id: "project-1".to_string(),
            description: "todo app".to_string(),
            category: "web-app".to_string(),
            folder_id: None,
            created_at: DateTime::parse_from_rfc3339("2026-01-02T03:04:05Z")
                .unwrap()
                .with_timezone(&Utc),
        };

        let value = serde_json::to_value(&project).unwrap();

        assert_eq!(
            value,
            json!({
                "id": "project-1",
                "description": "todo app",
                "category": "web-app",
                "folderId": null,
                "createdAt": "2026-01-02T03:04:05Z",
            })
        );
    }

    #[test]
    fn test_new_project_folder_defaults_to_none() {
        let input: NewProject =
            serde_json::from_value(json!({"description": "todo app", "category": "web-app"}))
                .unwrap();
        assert_eq!(input, NewProject::new("todo app", "web-app"));
    }

    #[test]
    fn test_new_project_missing_category_is_rejected() {
        let result = serde_json::from_value::<NewProject>(json!({"description": "x"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_new_folder_accepts_explicit_null_parent() {
        let input: NewFolder =
            serde_json::from_value(json!({"name": "Work", "parentId": null})).unwrap();
        assert_eq!(input.parent_id, None);
    }

    #[test]
    fn test_patch_distinguishes_absent_and_null_parent() {
        let absent: FolderPatch = serde_json::from_value(json!({"name": "X"})).unwrap();
        assert_eq!(absent.parent_id, None);

        let cleared: FolderPatch = serde_json::from_value(json!({"parentId": null})).unwrap();
        assert_eq!(cleared.parent_id, Some(None));
        assert_eq!(cleared.name, None);

        let moved: FolderPatch = serde_json::from_value(json!({"parentId": "folder-2"})).unwrap();
        assert_eq!(moved.parent_id, Some(Some("folder-2".to_string())));
    }

    #[test]
    fn test_folder_apply_rename_keeps_other_fields() {
        let created_at = Utc::now();
        let mut folder = Folder {
            id: "folder-1".to_string(),
            name: "Work".to_string(),
            parent_id: Some("folder-0".to_string()),
            created_at,
        };

        folder.apply(FolderPatch::rename("Work2"));

        assert_eq!(folder.name, "Work2");
        assert_eq!(folder.id, "folder-1");
        assert_eq!(folder.parent_id.as_deref(), Some("folder-0"));
        assert_eq!(folder.created_at, created_at);
    }

    #[test]
    fn test_folder_apply_reparent_to_root() {
        let mut folder = Folder {
            id: "folder-1".to_string(),
            name: "Work".to_string(),
            parent_id: Some("folder-0".to_string()),
            created_at: Utc::now(),
        };

        folder.apply(FolderPatch::reparent(None));

        assert!(folder.is_root());
        assert_eq!(folder.name, "Work");
    }

    #[test]
    fn test_validate_folder_name() {
        assert!(NewFolder::new("Work").validate().is_ok());
        assert_eq!(
            NewFolder::new("   ").validate(),
            Err(ValidationError::Empty { field: "name" })
        );

        let at_limit = "é".repeat(FOLDER_NAME_CHARS_MAX);
        assert!(NewFolder::new(at_limit).validate().is_ok());

        let too_long = "x".repeat(FOLDER_NAME_CHARS_MAX + 1);
        assert_eq!(
            NewFolder::new(too_long).validate(),
            Err(ValidationError::TooLong {
                field: "name",
                len: FOLDER_NAME_CHARS_MAX + 1,
                max: FOLDER_NAME_CHARS_MAX,
            })
        );
    }

    #[test]
    fn test_validate_project() {
        assert!(NewProject::new("todo app", "web-app").validate().is_ok());
        assert_eq!(
            NewProject::new("", "web-app").validate(),
            Err(ValidationError::Empty { field: "description" })
        );

        let long_category = "c".repeat(PROJECT_CATEGORY_CHARS_MAX + 1);
        assert!(matches!(
            NewProject::new("idea", long_category).validate(),
            Err(ValidationError::TooLong { field: "category", .. })
        ));

        assert!(NewProject::new("idea", CATEGORY_WEB_APP)
            .with_folder("")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_normalize_blank_references() {
        let project = NewProject::new("idea", CATEGORY_DATA_APP)
            .with_folder("  ")
            .normalize();
        assert_eq!(project.folder_id, None);

        let kept = NewProject::new("idea", CATEGORY_DATA_APP)
            .with_folder("folder-1")
            .normalize();
        assert_eq!(kept.folder_id.as_deref(), Some("folder-1"));

        let folder = NewFolder::new("Work").with_parent("").normalize();
        assert_eq!(folder.parent_id, None);

        let patch = FolderPatch::reparent(Some(String::new())).normalize();
        assert_eq!(patch.parent_id, Some(None));

        assert_eq!(FolderPatch::rename("X").normalize().parent_id, None);
    }

    #[test]
    fn test_validate_patch_only_checks_present_fields() {
        assert!(FolderPatch::default().validate().is_ok());
        assert!(FolderPatch::reparent(None).validate().is_ok());
        assert_eq!(
            FolderPatch::rename("").validate(),
            Err(ValidationError::Empty { field: "name" })
        );
    }
}
