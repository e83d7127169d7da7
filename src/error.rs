use thiserror::Error;

use crate::catalog::Profile;
use crate::platform::{OsFamily, PackageManager};

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown profile '{name}'. Available profiles: {available}")]
    UnknownProfile { name: String, available: String },

    #[error("No supported package manager found on {os}. Looked for: {looked_for}")]
    NoPackageManager { os: OsFamily, looked_for: String },

    #[error("No {manager} package mapping for '{tool}'")]
    UnsupportedTool { tool: String, manager: PackageManager },

    #[error("VS Code CLI ('code') not found on PATH")]
    EditorNotFound,

    #[error("{count} setup step(s) failed")]
    StepsFailed { count: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl SetupError {
    /// Unknown profile, naming the valid set.
    pub fn unknown_profile(name: impl Into<String>) -> Self {
        Self::UnknownProfile {
            name: name.into(),
            available: Profile::supported_names().join(", "),
        }
    }

    /// No package manager on PATH, naming what was probed for this OS.
    pub fn no_package_manager(os: OsFamily) -> Self {
        Self::NoPackageManager {
            os,
            looked_for: os
                .manager_priority()
                .iter()
                .map(|m| m.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    pub fn unsupported_tool(tool: impl Into<String>, manager: PackageManager) -> Self {
        Self::UnsupportedTool {
            tool: tool.into(),
            manager,
        }
    }
}

pub type Result<T> = std::result::Result<T, SetupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_profile_lists_available() {
        let err = SetupError::unknown_profile("rust");
        let msg = err.to_string();
        assert!(msg.contains("'rust'"));
        assert!(msg.contains("base, python, web, java, cpp, fullstack"));
    }

    #[test]
    fn test_no_package_manager_lists_probed() {
        let err = SetupError::no_package_manager(OsFamily::Linux);
        let msg = err.to_string();
        assert!(msg.contains("linux"));
        assert!(msg.contains("apt, dnf, yum, pacman, zypper"));
    }

    #[test]
    fn test_unsupported_tool_message() {
        let err = SetupError::unsupported_tool("ghost", PackageManager::Apt);
        assert_eq!(err.to_string(), "No apt package mapping for 'ghost'");
    }
}
