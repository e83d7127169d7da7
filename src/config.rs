use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SetupError};

/// User configuration, loaded from `config.yaml` in the rigup config
/// directory. Everything works without it; today it only carries package
/// name overrides.
///
/// ```yaml
/// packages:
///   node:
///     apt: nodejs-lts
///   java:
///     brew: openjdk@17
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Package name overrides, keyed by tool id then manager name.
    #[serde(default)]
    pub packages: HashMap<String, HashMap<String, String>>,
}

impl AppConfig {
    pub fn config_dir() -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| {
            SetupError::Config("Cannot determine the user config directory".to_string())
        })?;
        Ok(base.join("rigup"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.yaml"))
    }

    /// Loads the config file, falling back to defaults when it does not
    /// exist. A file that exists but does not parse is an error; silently
    /// ignoring a typoed override would be worse.
    pub fn load_or_default() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| SetupError::Config(format!("Invalid config {}: {}", path.display(), e)))
    }
}
