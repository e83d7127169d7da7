//! Static tool and profile catalog.
//!
//! Profiles map to ordered tool-id and extension-id lists; tools map to one
//! package name per manager. All of it is fixed at compile time, with one
//! escape hatch: the user config may override a package name for a specific
//! (tool, manager) pair. The [`Catalog`] is built once per command and never
//! mutated afterwards.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::error::{Result, SetupError};
use crate::platform::PackageManager;

/// A single installable developer tool.
#[derive(Debug, Clone)]
pub struct ToolSpec {
    /// Tool identifier, as used in profile lists and config overrides.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Package name per manager. A missing pair means the tool cannot be
    /// installed with that manager.
    pub packages: &'static [(PackageManager, &'static str)],
    /// Binaries worth probing on PATH after a real install. Empty when
    /// probing is not meaningful (toolchain metapackages).
    pub path_probes: &'static [&'static str],
}

/// The built-in tool table, in no particular order.
fn builtin_tools() -> Vec<ToolSpec> {
    vec![
        ToolSpec {
            id: "vscode",
            name: "Visual Studio Code",
            packages: &[
                (PackageManager::Winget, "Microsoft.VisualStudioCode"),
                (PackageManager::Choco, "vscode"),
                (PackageManager::Scoop, "vscode"),
                (PackageManager::Brew, "visual-studio-code"),
                (PackageManager::Apt, "code"),
                (PackageManager::Dnf, "code"),
                (PackageManager::Yum, "code"),
                (PackageManager::Pacman, "code"),
                (PackageManager::Zypper, "code"),
            ],
            path_probes: &["code"],
        },
        ToolSpec {
            id: "python",
            name: "Python",
            packages: &[
                (PackageManager::Winget, "Python.Python.3.12"),
                (PackageManager::Choco, "python"),
                (PackageManager::Scoop, "python"),
                (PackageManager::Brew, "python"),
                (PackageManager::Apt, "python3"),
                (PackageManager::Dnf, "python3"),
                (PackageManager::Yum, "python3"),
                (PackageManager::Pacman, "python"),
                (PackageManager::Zypper, "python3"),
            ],
            path_probes: &["python3", "python"],
        },
        ToolSpec {
            id: "node",
            name: "Node.js",
            packages: &[
                (PackageManager::Winget, "OpenJS.NodeJS.LTS"),
                (PackageManager::Choco, "nodejs-lts"),
                (PackageManager::Scoop, "nodejs-lts"),
                (PackageManager::Brew, "node"),
                (PackageManager::Apt, "nodejs"),
                (PackageManager::Dnf, "nodejs"),
                (PackageManager::Yum, "nodejs"),
                (PackageManager::Pacman, "nodejs"),
                (PackageManager::Zypper, "nodejs20"),
            ],
            path_probes: &["node"],
        },
        ToolSpec {
            id: "java",
            name: "Java (Temurin/OpenJDK 21)",
            packages: &[
                (PackageManager::Winget, "EclipseAdoptium.Temurin.21.JDK"),
                (PackageManager::Choco, "temurin21"),
                (PackageManager::Scoop, "temurin-lts-jdk"),
                (PackageManager::Brew, "openjdk@21"),
                (PackageManager::Apt, "openjdk-21-jdk"),
                (PackageManager::Dnf, "java-21-openjdk-devel"),
                (PackageManager::Yum, "java-21-openjdk-devel"),
                (PackageManager::Pacman, "jdk-openjdk"),
                (PackageManager::Zypper, "java-21-openjdk-devel"),
            ],
            path_probes: &["java"],
        },
        ToolSpec {
            id: "cpp",
            name: "C/C++ toolchain",
            packages: &[
                (PackageManager::Winget, "LLVM.LLVM"),
                (PackageManager::Choco, "llvm"),
                (PackageManager::Scoop, "llvm"),
                (PackageManager::Brew, "llvm"),
                (PackageManager::Apt, "build-essential"),
                (PackageManager::Dnf, "gcc-c++"),
                (PackageManager::Yum, "gcc-c++"),
                (PackageManager::Pacman, "base-devel"),
                (PackageManager::Zypper, "gcc-c++"),
            ],
            // Metapackage; no single binary tells the truth here.
            path_probes: &[],
        },
        ToolSpec {
            id: "cmake",
            name: "CMake",
            packages: &[
                (PackageManager::Winget, "Kitware.CMake"),
                (PackageManager::Choco, "cmake"),
                (PackageManager::Scoop, "cmake"),
                (PackageManager::Brew, "cmake"),
                (PackageManager::Apt, "cmake"),
                (PackageManager::Dnf, "cmake"),
                (PackageManager::Yum, "cmake"),
                (PackageManager::Pacman, "cmake"),
                (PackageManager::Zypper, "cmake"),
            ],
            path_probes: &["cmake"],
        },
    ]
}

/// Setup profiles a user can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    Base,
    Python,
    Web,
    Java,
    Cpp,
    Fullstack,
}

impl Profile {
    /// All profiles, in the order `rigup profiles` lists them.
    pub fn all() -> &'static [Profile] {
        &[
            Self::Base,
            Self::Python,
            Self::Web,
            Self::Java,
            Self::Cpp,
            Self::Fullstack,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Python => "python",
            Self::Web => "web",
            Self::Java => "java",
            Self::Cpp => "cpp",
            Self::Fullstack => "fullstack",
        }
    }

    /// Profile names in declared order.
    pub fn supported_names() -> Vec<String> {
        Self::all().iter().map(|p| p.as_str().to_string()).collect()
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "base" => Some(Self::Base),
            "python" => Some(Self::Python),
            "web" => Some(Self::Web),
            "java" => Some(Self::Java),
            "cpp" => Some(Self::Cpp),
            "fullstack" => Some(Self::Fullstack),
            _ => None,
        }
    }

    /// Tool ids this profile installs, in install order.
    ///
    /// `Fullstack` is not a hand-maintained list: it is the ordered,
    /// deduplicated union of every other profile, so a tool added to any
    /// profile shows up in `fullstack` automatically.
    pub fn tool_ids(&self) -> Vec<&'static str> {
        match self {
            Self::Base => vec!["vscode", "python", "node", "java", "cpp", "cmake"],
            Self::Python => vec!["vscode", "python"],
            Self::Web => vec!["vscode", "node"],
            Self::Java => vec!["vscode", "java"],
            Self::Cpp => vec!["vscode", "cpp", "cmake"],
            Self::Fullstack => union_of(
                Self::all()
                    .iter()
                    .filter(|p| **p != Self::Fullstack)
                    .map(|p| p.tool_ids()),
            ),
        }
    }

    /// VS Code extension ids for this profile, in install order.
    ///
    /// `Fullstack` is the union of every other profile plus its own docker
    /// extension, constructed the same way as the tool list.
    pub fn extension_ids(&self) -> Vec<&'static str> {
        match self {
            Self::Base => vec![
                "ms-python.python",
                "ms-python.vscode-pylance",
                "vscjava.vscode-java-pack",
                "ms-vscode.cpptools",
                "ms-vscode.cmake-tools",
                "dbaeumer.vscode-eslint",
                "esbenp.prettier-vscode",
            ],
            Self::Python => vec![
                "ms-python.python",
                "ms-python.vscode-pylance",
                "ms-toolsai.jupyter",
            ],
            Self::Web => vec!["dbaeumer.vscode-eslint", "esbenp.prettier-vscode"],
            Self::Java => vec!["vscjava.vscode-java-pack"],
            Self::Cpp => vec!["ms-vscode.cpptools", "ms-vscode.cmake-tools"],
            Self::Fullstack => {
                let mut ids = union_of(
                    Self::all()
                        .iter()
                        .filter(|p| **p != Self::Fullstack)
                        .map(|p| p.extension_ids()),
                );
                if !ids.contains(&"ms-azuretools.vscode-docker") {
                    ids.push("ms-azuretools.vscode-docker");
                }
                ids
            }
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// First-seen-order union of id lists.
fn union_of<I>(lists: I) -> Vec<&'static str>
where
    I: IntoIterator<Item = Vec<&'static str>>,
{
    let mut seen = Vec::new();
    for list in lists {
        for id in list {
            if !seen.contains(&id) {
                seen.push(id);
            }
        }
    }
    seen
}

/// Immutable tool/profile lookup, built once per command.
#[derive(Debug, Clone)]
pub struct Catalog {
    tools: Vec<ToolSpec>,
    overrides: HashMap<(String, PackageManager), String>,
}

impl Catalog {
    /// Catalog with the built-in tables and no user overrides.
    pub fn with_defaults() -> Self {
        Self {
            tools: builtin_tools(),
            overrides: HashMap::new(),
        }
    }

    /// Catalog with user package-name overrides applied on top of the
    /// built-in tables. Unknown tool or manager keys are configuration
    /// errors, caught here rather than surfacing mid-install.
    pub fn with_overrides(packages: &HashMap<String, HashMap<String, String>>) -> Result<Self> {
        let mut catalog = Self::with_defaults();
        for (tool_id, managers) in packages {
            if catalog.tool(tool_id).is_none() {
                return Err(SetupError::Config(format!(
                    "Unknown tool '{}' in packages override",
                    tool_id
                )));
            }
            for (manager_name, package) in managers {
                let manager = PackageManager::from_str(manager_name).ok_or_else(|| {
                    SetupError::Config(format!(
                        "Unknown package manager '{}' in packages override for '{}'",
                        manager_name, tool_id
                    ))
                })?;
                catalog
                    .overrides
                    .insert((tool_id.clone(), manager), package.clone());
            }
        }
        Ok(catalog)
    }

    /// Catalog with the user's config file applied.
    pub fn load() -> Result<Self> {
        let config = AppConfig::load_or_default()?;
        Self::with_overrides(&config.packages)
    }

    pub fn tool(&self, id: &str) -> Option<&ToolSpec> {
        self.tools.iter().find(|t| t.id == id)
    }

    /// Package name for a (tool, manager) pair: user override first, then
    /// the built-in table.
    pub fn package_name(&self, tool: &ToolSpec, manager: PackageManager) -> Option<&str> {
        if let Some(package) = self.overrides.get(&(tool.id.to_string(), manager)) {
            return Some(package.as_str());
        }
        tool.packages
            .iter()
            .find(|(m, _)| *m == manager)
            .map(|(_, package)| *package)
    }

    /// Resolve a profile name into its tool specs and extension ids.
    ///
    /// Fails before any side effect: an unknown name is `UnknownProfile`,
    /// and a profile referencing a tool the table does not know is a
    /// configuration error.
    pub fn resolve(&self, name: &str) -> Result<ResolvedProfile> {
        let profile =
            Profile::from_str(name).ok_or_else(|| SetupError::unknown_profile(name))?;
        let mut tools = Vec::new();
        for id in profile.tool_ids() {
            let spec = self.tool(id).ok_or_else(|| {
                SetupError::Config(format!(
                    "Profile '{}' references unknown tool '{}'",
                    profile, id
                ))
            })?;
            tools.push(spec.clone());
        }
        Ok(ResolvedProfile {
            profile,
            tools,
            extensions: profile.extension_ids(),
        })
    }
}

/// A profile resolved against the tool table.
#[derive(Debug, Clone)]
pub struct ResolvedProfile {
    pub profile: Profile,
    pub tools: Vec<ToolSpec>,
    pub extensions: Vec<&'static str>,
}

impl ResolvedProfile {
    pub fn tool_ids(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.id).collect()
    }
}
