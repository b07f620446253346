use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    core::utils::{base_dir, ensure_dir, settings_file_in},
    errors::{Result, TrackerError},
    storage::json_backend::{tmp_path, write_file},
};

/// User settings kept next to the data files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub expense_file: String,
    /// The budget collection keeps its historical `config.json` name.
    pub budget_file: String,
    pub currency_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            expense_file: "expense.json".into(),
            budget_file: "config.json".into(),
            currency_symbol: "$".into(),
        }
    }
}

impl Config {
    pub fn expense_path_in(&self, base: &Path) -> PathBuf {
        base.join(&self.expense_file)
    }

    pub fn budget_path_in(&self, base: &Path) -> PathBuf {
        base.join(&self.budget_file)
    }

    /// Formats `amount` with the configured symbol and two decimals.
    pub fn money(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency_symbol, amount)
    }
}

pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        Ok(Self {
            path: settings_file_in(&base),
            base,
        })
    }

    /// Reads the settings file, falling back to defaults when it does not exist.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no settings file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data).map_err(|err| {
            TrackerError::Config(format!("{}: {}", self.path.display(), err))
        })
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::info!(path = %self.path.display(), "settings saved");
        Ok(())
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
