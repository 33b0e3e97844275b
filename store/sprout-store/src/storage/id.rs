//! Id generation.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use super::error::RecordKind;
use crate::constants::{FOLDER_ID_PREFIX, PROJECT_ID_PREFIX};

/// How the in-memory backend names new records.
///
/// Callers must only rely on uniqueness, never on the format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdStrategy {
    /// `project-1`, `project-2`, ... and `folder-1`, ...
    #[default]
    Sequential,
    /// Random UUID v4.
    Uuid,
}

impl IdStrategy {
    /// Get string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Uuid => "uuid",
        }
    }

    /// Produce an id for the `seq`-th record of `kind` (1-based).
    #[must_use]
    pub fn generate(&self, kind: RecordKind, seq: u64) -> String {
        match self {
            Self::Sequential => {
                assert!(seq > 0, "sequence numbers start at 1");
                let prefix = match kind {
                    RecordKind::Project => PROJECT_ID_PREFIX,
                    RecordKind::Folder => FOLDER_ID_PREFIX,
                };
                format!("{prefix}{seq}")
            }
            Self::Uuid => Uuid::new_v4().to_string(),
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "uuid" => Ok(Self::Uuid),
            other => Err(format!("unknown id strategy: {other}")),
        }
    }
}
