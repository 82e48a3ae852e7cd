//! GitHub Releases API client for the IBM build mirror

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::GitHubConfig;
use crate::version::error::RegistryError;
use crate::version::registries::{check_status, http_client};
use crate::version::registry::ReleaseSource;
use crate::version::retry::{RetryPolicy, retry};
use crate::version::types::RawTag;

/// Release source backed by the GitHub Releases API of one repository
pub struct GitHubReleases {
    client: reqwest::Client,
    base_url: String,
    owner: String,
    repo: String,
    per_page: u32,
    retry: RetryPolicy,
}

impl GitHubReleases {
    /// Creates a client for `owner/repo` against a custom base URL
    pub fn new(base_url: &str, owner: &str, repo: &str) -> Self {
        Self {
            client: http_client(),
            base_url: base_url.trim_end_matches('/').to_string(),
            owner: owner.to_string(),
            repo: repo.to_string(),
            per_page: 100,
            retry: RetryPolicy::default(),
        }
    }

    pub fn from_config(config: &GitHubConfig, retry: RetryPolicy) -> Self {
        Self::new(&config.base_url, &config.owner, &config.repo)
            .with_per_page(config.per_page)
            .with_retry(retry)
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    fn releases_url(&self) -> String {
        format!("{}/repos/{}/{}/releases", self.base_url, self.owner, self.repo)
    }

    async fn get_json<T: DeserializeOwned + Send>(&self, url: &str) -> Result<T, RegistryError> {
        let client = &self.client;
        retry(&self.retry, url, || async move {
            let response = client
                .get(url)
                .header("Accept", "application/vnd.github+json")
                .send()
                .await?;
            let response = check_status(response, url)?;

            response.json::<T>().await.map_err(|e| {
                warn!("Failed to parse GitHub response from {}: {}", url, e);
                RegistryError::InvalidResponse(e.to_string())
            })
        })
        .await
    }
}

#[async_trait::async_trait]
impl ReleaseSource for GitHubReleases {
    async fn fetch_all_releases(&self) -> Result<Vec<RawTag>, RegistryError> {
        let mut releases = Vec::new();
        let mut page = 1;

        loop {
            let url = format!(
                "{}?per_page={}&page={}",
                self.releases_url(),
                self.per_page,
                page
            );
            let page_releases: Vec<RawTag> = self.get_json(&url).await?;
            if page_releases.is_empty() {
                break;
            }

            debug!("Fetched {} releases from page {}", page_releases.len(), page);
            releases.extend(page_releases);
            page += 1;
        }

        debug!(
            "Fetched {} releases from {}/{}",
            releases.len(),
            self.owner,
            self.repo
        );
        Ok(releases)
    }

    async fn fetch_release(&self, tag: &str) -> Result<RawTag, RegistryError> {
        let url = if tag == "latest" {
            format!("{}/latest", self.releases_url())
        } else {
            format!("{}/tags/{}", self.releases_url(), tag)
        };

        self.get_json(&url).await
    }
}
