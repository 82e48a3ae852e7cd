//! Common types for release catalogs

use serde::Deserialize;

use crate::version::sdk::Version;

/// A downloadable file attached to a release
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Asset {
    pub name: String,
    #[serde(rename = "browser_download_url")]
    pub download_url: String,
}

/// A release entry from the build mirror, as returned by the GitHub Releases API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawTag {
    pub tag_name: String,
    #[serde(default)]
    pub assets: Vec<Asset>,
}

impl RawTag {
    /// Creates a tag without assets
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            assets: Vec::new(),
        }
    }

    /// Parsed version of the tag name, or None if the name is not a version
    pub fn version(&self) -> Option<Version> {
        Version::parse(&self.tag_name).ok()
    }
}

/// Collection of versions for a package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageVersions {
    /// List of versions, in the order the registry published them
    pub versions: Vec<String>,
}

impl PackageVersions {
    /// Creates a new PackageVersions with the given versions
    pub fn new(versions: Vec<String>) -> Self {
        Self { versions }
    }

    /// Returns true if the collection is empty
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_tag_deserializes_github_release() {
        let tag: RawTag = serde_json::from_str(
            r#"{
                "tag_name": "v9.0.100",
                "name": "9.0.100",
                "assets": [
                    {
                        "name": "dotnet-sdk-9.0.100-linux-s390x.tar.gz",
                        "browser_download_url": "https://example.com/sdk.tar.gz",
                        "size": 1024
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(tag.tag_name, "v9.0.100");
        assert_eq!(
            tag.assets,
            vec![Asset {
                name: "dotnet-sdk-9.0.100-linux-s390x.tar.gz".to_string(),
                download_url: "https://example.com/sdk.tar.gz".to_string(),
            }]
        );
    }

    #[test]
    fn raw_tag_without_assets_defaults_to_empty() {
        let tag: RawTag = serde_json::from_str(r#"{"tag_name": "v8.0.404"}"#).unwrap();

        assert!(tag.assets.is_empty());
        assert_eq!(tag.version(), Some(Version::new(8, 0, 404)));
    }

    #[test]
    fn version_is_none_for_unparseable_name() {
        assert_eq!(RawTag::new("nightly").version(), None);
    }
}
