//! NuGet normalization of build-mirror versions
//!
//! NuGet publishes runtime packages with the patch component fixed to zero,
//! so a mirror tag like `v9.0.100-preview.7.25351.106` is looked up as
//! `9.0.0-preview.7.25351.106`.

use std::collections::HashSet;

use crate::version::sdk::Version;
use crate::version::types::PackageVersions;

/// Registry-comparable key for a version: patch forced to 0, prerelease identity kept
pub fn normalized_key(version: &Version) -> String {
    version.render_with_patch(0)
}

/// Set of canonical version strings published by the registry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryVersionSet {
    versions: HashSet<String>,
}

impl RegistryVersionSet {
    pub fn new<I, S>(versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            versions: versions.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact-string membership of the version's normalized key
    pub fn contains(&self, version: &Version) -> bool {
        self.versions.contains(&normalized_key(version))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.versions.contains(key)
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

impl From<PackageVersions> for RegistryVersionSet {
    fn from(package_versions: PackageVersions) -> Self {
        Self::new(package_versions.versions)
    }
}
