//! Local database and env file locations.

use std::path::PathBuf;

use super::error::PathError;
use super::platform::{data_root, ensure_dir};

/// Path to the local `SQLite` database (`<data root>/data/xbm.db`).
///
/// The `data/` subdirectory is created if it doesn't exist.
pub fn database_path() -> Result<PathBuf, PathError> {
    let data_dir = data_root()?.join("data");
    ensure_dir(&data_dir)?;
    Ok(data_dir.join("xbm.db"))
}

/// Path to the optional `.env` file in the data root.
pub fn env_file_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join(".env"))
}
