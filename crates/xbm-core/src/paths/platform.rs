//! Platform-specific data root resolution.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::PathError;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "XBM_DATA_DIR";

/// Get the root directory for application data.
///
/// Resolution order:
/// 1. `XBM_DATA_DIR` environment variable
/// 2. System data directory (e.g. `~/.local/share/xbm`)
///
/// The directory is created if missing.
pub fn data_root() -> Result<PathBuf, PathError> {
    let root = match env::var(DATA_DIR_ENV) {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => dirs::data_dir().ok_or(PathError::NoDataDir)?.join("xbm"),
    };
    ensure_dir(&root)?;
    Ok(root)
}

pub(super) fn ensure_dir(path: &Path) -> Result<(), PathError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::{ENV_LOCK, EnvVarGuard};
    use super::*;

    #[test]
    fn test_env_override_is_created() {
        let _lock = ENV_LOCK.lock().unwrap();
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("nested").join("xbm");
        let _env = EnvVarGuard::set(DATA_DIR_ENV, target.to_str().unwrap());

        let root = data_root().unwrap();
        assert_eq!(root, target);
        assert!(root.is_dir());
    }

    #[test]
    fn test_override_pointing_at_file_is_rejected() {
        let _lock = ENV_LOCK.lock().unwrap();
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("not-a-dir");
        fs::write(&file, b"x").unwrap();
        let _env = EnvVarGuard::set(DATA_DIR_ENV, file.to_str().unwrap());

        assert!(matches!(data_root(), Err(PathError::NotADirectory(_))));
    }
}
