//! Paths command handler.
//!
//! Displays resolved local paths in `key = value` format.

use anyhow::Result;

use xbm_core::{DATA_DIR_ENV, data_root, database_path, env_file_path};

pub fn execute() -> Result<()> {
    let overridden = std::env::var(DATA_DIR_ENV).is_ok_and(|v| !v.trim().is_empty());
    let source = if overridden { DATA_DIR_ENV } else { "platform default" };

    println!("data_root = {} ({source})", data_root()?.display());
    println!("database = {}", database_path()?.display());
    println!("env_file = {}", env_file_path()?.display());
    Ok(())
}
