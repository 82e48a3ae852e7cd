//! Traits for fetching release catalogs from remote sources

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;
use crate::version::types::{PackageVersions, RawTag};

/// Source of platform-specific builds (the IBM GitHub mirror)
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Fetches every release, following pagination until the source is exhausted
    ///
    /// # Returns
    /// * `Ok(Vec<RawTag>)` - All releases in the order the source lists them
    /// * `Err(RegistryError)` - If any page fails
    async fn fetch_all_releases(&self) -> Result<Vec<RawTag>, RegistryError>;

    /// Fetches release metadata (including assets) for one tag, or `"latest"`
    async fn fetch_release(&self, tag: &str) -> Result<RawTag, RegistryError>;
}

/// Registry publishing canonical version strings (NuGet)
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionRegistry: Send + Sync {
    /// Fetches all versions for a package from the registry
    ///
    /// # Arguments
    /// * `package_name` - The package id (e.g., "microsoft.netcore.app.runtime.linux-x64")
    async fn fetch_all_versions(
        &self,
        package_name: &str,
    ) -> Result<PackageVersions, RegistryError>;
}
