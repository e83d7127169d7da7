//! Host platform detection: OS family, native package manager, editor CLI.
//!
//! Detection runs once per command and the result is passed around as an
//! immutable [`PlatformContext`]. Probing is read-only; manager availability
//! is assumed not to change mid-run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Binary name of the VS Code CLI.
pub const EDITOR_BINARY: &str = "code";

/// Operating system family the CLI is running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsFamily {
    Windows,
    MacOs,
    Linux,
}

impl OsFamily {
    /// OS family of the running process.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Linux
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::MacOs => "macos",
            Self::Linux => "linux",
        }
    }

    /// Package managers to probe on this OS, highest priority first.
    pub fn manager_priority(&self) -> &'static [PackageManager] {
        match self {
            Self::Windows => &[
                PackageManager::Winget,
                PackageManager::Choco,
                PackageManager::Scoop,
            ],
            Self::MacOs => &[PackageManager::Brew],
            Self::Linux => &[
                PackageManager::Apt,
                PackageManager::Dnf,
                PackageManager::Yum,
                PackageManager::Pacman,
                PackageManager::Zypper,
            ],
        }
    }
}

impl std::fmt::Display for OsFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Native package managers rigup knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Winget,
    Choco,
    Scoop,
    Brew,
    Apt,
    Dnf,
    Yum,
    Pacman,
    Zypper,
}

impl PackageManager {
    /// All supported managers across every OS family.
    pub fn all() -> &'static [PackageManager] {
        &[
            Self::Winget,
            Self::Choco,
            Self::Scoop,
            Self::Brew,
            Self::Apt,
            Self::Dnf,
            Self::Yum,
            Self::Pacman,
            Self::Zypper,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Winget => "winget",
            Self::Choco => "choco",
            Self::Scoop => "scoop",
            Self::Brew => "brew",
            Self::Apt => "apt",
            Self::Dnf => "dnf",
            Self::Yum => "yum",
            Self::Pacman => "pacman",
            Self::Zypper => "zypper",
        }
    }

    /// Parse a manager name (as it appears in config files). Long-form
    /// aliases are accepted for the two managers commonly spelled out.
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.to_lowercase();
        match s.as_str() {
            "chocolatey" => return Some(Self::Choco),
            "homebrew" => return Some(Self::Brew),
            _ => {}
        }
        Self::all().iter().copied().find(|m| m.as_str() == s)
    }

    /// Name of the executable probed on PATH.
    pub fn binary(&self) -> &'static str {
        self.as_str()
    }

    /// Install argv for a single package, always non-interactive so a run
    /// never blocks on a confirmation prompt.
    pub fn install_command(&self, package: &str) -> Vec<String> {
        let argv: Vec<&str> = match self {
            Self::Winget => vec![
                "winget",
                "install",
                "--id",
                package,
                "--silent",
                "--accept-source-agreements",
                "--accept-package-agreements",
            ],
            Self::Choco => vec!["choco", "install", package, "-y"],
            Self::Scoop => vec!["scoop", "install", package],
            Self::Brew => vec!["brew", "install", package],
            Self::Apt => vec!["sudo", "apt", "install", "-y", package],
            Self::Dnf => vec!["sudo", "dnf", "install", "-y", package],
            Self::Yum => vec!["sudo", "yum", "install", "-y", package],
            Self::Pacman => vec!["sudo", "pacman", "-S", "--noconfirm", package],
            Self::Zypper => vec!["sudo", "zypper", "install", "-y", package],
        };
        argv.into_iter().map(String::from).collect()
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Everything detected about the host, computed once per run.
#[derive(Debug, Clone)]
pub struct PlatformContext {
    pub os: OsFamily,
    /// First package manager found in the OS family's priority order.
    pub manager: Option<PackageManager>,
    /// Resolved path of the VS Code CLI, when present.
    pub editor: Option<PathBuf>,
}

impl PlatformContext {
    pub fn new(os: OsFamily, manager: Option<PackageManager>, editor: Option<PathBuf>) -> Self {
        Self {
            os,
            manager,
            editor,
        }
    }

    pub fn editor_available(&self) -> bool {
        self.editor.is_some()
    }
}

/// Probe the host: OS family, first package manager on PATH in priority
/// order, and the `code` CLI.
pub fn detect() -> PlatformContext {
    let os = OsFamily::current();
    let manager = os
        .manager_priority()
        .iter()
        .copied()
        .find(|m| which::which(m.binary()).is_ok());
    let editor = which::which(EDITOR_BINARY).ok();

    match manager {
        Some(m) => tracing::debug!("detected {} with package manager {}", os, m),
        None => tracing::debug!("detected {} with no supported package manager", os),
    }

    PlatformContext::new(os, manager, editor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manager_priority_windows() {
        let priority = OsFamily::Windows.manager_priority();
        assert_eq!(
            priority,
            &[
                PackageManager::Winget,
                PackageManager::Choco,
                PackageManager::Scoop
            ]
        );
    }

    #[test]
    fn test_manager_priority_macos() {
        assert_eq!(
            OsFamily::MacOs.manager_priority(),
            &[PackageManager::Brew]
        );
    }

    #[test]
    fn test_manager_priority_linux() {
        let priority = OsFamily::Linux.manager_priority();
        assert_eq!(priority.len(), 5);
        assert_eq!(priority[0], PackageManager::Apt);
        assert_eq!(priority[4], PackageManager::Zypper);
    }

    #[test]
    fn test_install_command_winget() {
        let argv = PackageManager::Winget.install_command("Kitware.CMake");
        assert_eq!(
            argv,
            vec![
                "winget",
                "install",
                "--id",
                "Kitware.CMake",
                "--silent",
                "--accept-source-agreements",
                "--accept-package-agreements"
            ]
        );
    }

    #[test]
    fn test_install_command_apt_uses_sudo_and_yes() {
        let argv = PackageManager::Apt.install_command("python3");
        assert_eq!(argv, vec!["sudo", "apt", "install", "-y", "python3"]);
    }

    #[test]
    fn test_install_command_pacman_noconfirm() {
        let argv = PackageManager::Pacman.install_command("base-devel");
        assert_eq!(argv, vec!["sudo", "pacman", "-S", "--noconfirm", "base-devel"]);
    }

    #[test]
    fn test_install_command_is_deterministic() {
        for manager in PackageManager::all() {
            assert_eq!(
                manager.install_command("pkg"),
                manager.install_command("pkg")
            );
        }
    }

    #[test]
    fn test_every_manager_command_is_non_interactive() {
        // Interactive prompts would hang a run; every manager that supports a
        // yes/non-interactive flag must carry it.
        let flags = ["-y", "--noconfirm", "--silent"];
        for manager in PackageManager::all() {
            let argv = manager.install_command("pkg");
            let exempt = matches!(manager, PackageManager::Scoop | PackageManager::Brew);
            assert!(
                exempt || argv.iter().any(|a| flags.contains(&a.as_str())),
                "{} install command is missing a non-interactive flag",
                manager
            );
        }
    }

    #[test]
    fn test_from_str_roundtrip() {
        for manager in PackageManager::all() {
            assert_eq!(PackageManager::from_str(manager.as_str()), Some(*manager));
        }
        assert_eq!(PackageManager::from_str("HOMEBREW"), Some(PackageManager::Brew));
        assert_eq!(PackageManager::from_str("emerge"), None);
    }

    #[test]
    fn test_os_family_current_is_consistent() {
        let os = OsFamily::current();
        assert!(!os.manager_priority().is_empty());
    }
}
