use dirs::home_dir;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::errors::Result;

pub const HOME_ENV: &str = "EXPENSE_TRACKER_HOME";
const DEFAULT_DIR_NAME: &str = "expense-tracker";
const SETTINGS_FILE: &str = "settings.json";

/// Resolves the data directory: `$EXPENSE_TRACKER_HOME`, else `~/expense-tracker`.
pub fn base_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV).filter(|value| !value.is_empty()) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn settings_file_in(base: &Path) -> PathBuf {
    base.join(SETTINGS_FILE)
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}
