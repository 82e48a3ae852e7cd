//! NuGet flat-container API client

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::NuGetConfig;
use crate::version::error::RegistryError;
use crate::version::registries::{check_status, http_client};
use crate::version::registry::VersionRegistry;
use crate::version::retry::{RetryPolicy, retry};
use crate::version::types::PackageVersions;

/// Response from the flat-container `index.json` endpoint
#[derive(Debug, Deserialize)]
struct FlatContainerIndex {
    versions: Vec<String>,
}

/// Registry implementation for NuGet.org
pub struct NuGetRegistry {
    client: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

impl NuGetRegistry {
    /// Creates a new NuGetRegistry with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: http_client(),
            base_url: base_url.trim_end_matches('/').to_string(),
            retry: RetryPolicy::default(),
        }
    }

    pub fn from_config(config: &NuGetConfig, retry: RetryPolicy) -> Self {
        Self::new(&config.base_url).with_retry(retry)
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

#[async_trait::async_trait]
impl VersionRegistry for NuGetRegistry {
    async fn fetch_all_versions(
        &self,
        package_name: &str,
    ) -> Result<PackageVersions, RegistryError> {
        // Flat-container ids are lowercase
        let url = format!(
            "{}/v3-flatcontainer/{}/index.json",
            self.base_url,
            package_name.to_lowercase()
        );
        debug!("Fetching NuGet versions: {}", url);

        let client = &self.client;
        let url = url.as_str();
        let index: FlatContainerIndex = retry(&self.retry, url, || async move {
            let response = check_status(client.get(url).send().await?, package_name)?;
            response.json().await.map_err(|e| {
                warn!("Failed to parse NuGet response: {}", e);
                RegistryError::InvalidResponse(e.to_string())
            })
        })
        .await?;

        debug!(
            "Found {} versions for package {}",
            index.versions.len(),
            package_name
        );

        Ok(PackageVersions::new(index.versions))
    }
}
