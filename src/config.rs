use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::version::retry::RetryPolicy;

// =============================================================================
// Defaults
// =============================================================================

/// GitHub owner of the IBM build mirror
pub const DEFAULT_GITHUB_OWNER: &str = "IBM";

/// Repository publishing .NET SDK builds for s390x and ppc64le
pub const DEFAULT_GITHUB_REPO: &str = "dotnet-s390x";

pub const DEFAULT_GITHUB_BASE_URL: &str = "https://api.github.com";

/// Releases requested per page (GitHub maximum)
pub const DEFAULT_PER_PAGE: u32 = 100;

/// NuGet package whose versions define which builds are officially published
pub const DEFAULT_NUGET_PACKAGE: &str = "microsoft.netcore.app.runtime.linux-x64";

pub const DEFAULT_NUGET_BASE_URL: &str = "https://api.nuget.org";

pub const DEFAULT_INSTALL_DIR: &str = "/usr/share/dotnet";

pub const DEFAULT_PROFILE_SCRIPT: &str = "/etc/profile.d/dotnet.sh";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Installer configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct InstallerConfig {
    pub github: GitHubConfig,
    pub nuget: NuGetConfig,
    pub install: InstallPaths,
    pub retry: RetryPolicy,
}

/// Build mirror location
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GitHubConfig {
    pub owner: String,
    pub repo: String,
    pub base_url: String,
    pub per_page: u32,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            owner: DEFAULT_GITHUB_OWNER.to_string(),
            repo: DEFAULT_GITHUB_REPO.to_string(),
            base_url: DEFAULT_GITHUB_BASE_URL.to_string(),
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// NuGet registry location and the package used for cross-checking
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct NuGetConfig {
    pub package: String,
    pub base_url: String,
}

impl Default for NuGetConfig {
    fn default() -> Self {
        Self {
            package: DEFAULT_NUGET_PACKAGE.to_string(),
            base_url: DEFAULT_NUGET_BASE_URL.to_string(),
        }
    }
}

/// Filesystem locations the installer writes to
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct InstallPaths {
    pub install_dir: PathBuf,
    pub profile_script: PathBuf,
}

impl Default for InstallPaths {
    fn default() -> Self {
        Self {
            install_dir: PathBuf::from(DEFAULT_INSTALL_DIR),
            profile_script: PathBuf::from(DEFAULT_PROFILE_SCRIPT),
        }
    }
}

impl InstallerConfig {
    /// Load configuration from a JSON file, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Returns the path to the data directory for dotnet-ibm-installer.
/// Uses $XDG_DATA_HOME/dotnet-ibm-installer if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/dotnet-ibm-installer,
/// or ./dotnet-ibm-installer if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("dotnet-ibm-installer.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("dotnet-ibm-installer")
}
