//! TigerStyle Constants
//!
//! Limits carry their unit as a suffix: `_CHARS_MAX`, `_COUNT_MAX`, `_MS_MAX`.

/// Maximum folder name length in characters (matches `VARCHAR(255)`).
pub const FOLDER_NAME_CHARS_MAX: usize = 255;

/// Maximum project category length in characters (matches `VARCHAR(50)`).
pub const PROJECT_CATEGORY_CHARS_MAX: usize = 50;

/// Prefix for sequentially generated project ids.
pub const PROJECT_ID_PREFIX: &str = "project-";

/// Prefix for sequentially generated folder ids.
pub const FOLDER_ID_PREFIX: &str = "folder-";

/// Default Postgres pool size.
pub const POSTGRES_CONNECTIONS_COUNT_DEFAULT: u32 = 10;

/// Upper bound on the Postgres pool size.
pub const POSTGRES_CONNECTIONS_COUNT_MAX: u32 = 100;

/// Largest single step a simulated clock may take (one day).
pub const SIM_CLOCK_ADVANCE_MS_MAX: i64 = 24 * 60 * 60 * 1000;

/// Category used by the launcher when the user picks none.
pub const CATEGORY_WEB_APP: &str = "web-app";

/// Data dashboard category.
pub const CATEGORY_DATA_APP: &str = "data-app";

/// 3D game category.
pub const CATEGORY_3D_GAME: &str = "3d-game";
