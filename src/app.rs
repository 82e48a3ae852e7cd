//! Install flow: resolve a tag, download its SDK, extract it and set up the environment

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, anyhow};
use tracing::info;

use crate::catalog::filter_and_sort;
use crate::config::InstallerConfig;
use crate::install::arch::Arch;
use crate::install::asset::select_sdk_asset;
use crate::install::download::download;
use crate::install::error::InstallError;
use crate::install::extract::extract_tarball;
use crate::install::profile::{verify_installation, write_profile_script};
use crate::install::prompt::{Selection, select_tag_interactive};
use crate::resolve::{Resolution, reconcile};
use crate::version::normalize::RegistryVersionSet;
use crate::version::registries::{GitHubReleases, NuGetRegistry, http_client};
use crate::version::registry::{ReleaseSource, VersionRegistry};
use crate::version::sdk::Version;

/// Per-invocation choices, typically from the command line
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    /// Version to install; interactive selection when absent
    pub tag: Option<String>,
    /// Wildcard filter for interactive selection
    pub filter: Option<String>,
    /// Target architecture; detected from the running binary when absent
    pub arch: Option<Arch>,
    pub skip_verify: bool,
}

/// What an install run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub tag: String,
    pub approximate: bool,
    pub asset: String,
    pub install_dir: PathBuf,
}

/// Groups the release source, the registry and the configuration used by every command
pub struct Installer {
    releases: Arc<dyn ReleaseSource>,
    registry: Arc<dyn VersionRegistry>,
    http: reqwest::Client,
    config: InstallerConfig,
}

impl Installer {
    pub fn new(
        releases: Arc<dyn ReleaseSource>,
        registry: Arc<dyn VersionRegistry>,
        config: InstallerConfig,
    ) -> Self {
        Self {
            releases,
            registry,
            http: http_client(),
            config,
        }
    }

    /// Installer talking to the GitHub mirror and NuGet named in `config`
    pub fn from_config(config: InstallerConfig) -> Self {
        let releases = GitHubReleases::from_config(&config.github, config.retry.clone());
        let registry = NuGetRegistry::from_config(&config.nuget, config.retry.clone());
        Self::new(Arc::new(releases), Arc::new(registry), config)
    }

    pub fn config(&self) -> &InstallerConfig {
        &self.config
    }

    /// Tag names matching `filter`, newest first
    pub async fn list(&self, filter: Option<&str>) -> anyhow::Result<Vec<String>> {
        let tags = self
            .releases
            .fetch_all_releases()
            .await
            .context("Failed to fetch releases from the build mirror")?;

        Ok(filter_and_sort(&tags, filter)
            .into_iter()
            .map(|tag| tag.tag_name.clone())
            .collect())
    }

    /// Mirror tag for `requested` that NuGet also publishes
    pub async fn resolve(&self, requested: &str) -> anyhow::Result<Resolution> {
        let requested_version = Version::parse(requested)?;

        println!("📡 Fetching tags from GitHub and versions from NuGet...");
        let (tags, versions) = futures::try_join!(
            self.releases.fetch_all_releases(),
            self.registry.fetch_all_versions(&self.config.nuget.package),
        )
        .context("Failed to fetch release catalogs")?;

        let registry = RegistryVersionSet::from(versions);
        info!(
            "Reconciling {} against {} mirror tags and {} NuGet versions",
            requested_version,
            tags.len(),
            registry.len()
        );

        let resolution = reconcile(&requested_version, &tags, &registry)
            .with_context(|| format!("No IBM+NuGet compatible version found for: {}", requested))?;
        if resolution.approximate {
            println!("⚠️ Using nearest IBM version: {}", resolution.tag);
        }
        println!("✅ Resolved tag: {}", resolution.tag);
        Ok(resolution)
    }

    async fn select_interactively(&self, filter: Option<String>) -> anyhow::Result<Selection> {
        println!("📡 Fetching tags from GitHub...");
        let tags = self
            .releases
            .fetch_all_releases()
            .await
            .context("Failed to fetch releases from the build mirror")?;

        let selection = tokio::task::spawn_blocking(move || {
            let stdin = std::io::stdin();
            select_tag_interactive(&tags, filter.as_deref(), stdin.lock(), std::io::stdout())
        })
        .await??;
        Ok(selection)
    }

    /// Run the full install
    pub async fn install(&self, options: &InstallOptions) -> anyhow::Result<InstallReport> {
        let arch = match options.arch {
            Some(arch) => arch,
            None => Arch::detect()?,
        };

        let (selection, approximate) = match &options.tag {
            Some(tag) => {
                let resolution = self.resolve(tag).await?;
                (Selection::Tag(resolution.tag), resolution.approximate)
            }
            None => (self.select_interactively(options.filter.clone()).await?, false),
        };

        println!("📦 Selected tag: {}", selection.as_tag());
        let release = self
            .releases
            .fetch_release(selection.as_tag())
            .await
            .with_context(|| format!("Failed to fetch release {}", selection.as_tag()))?;

        let asset = select_sdk_asset(&release.assets, arch).ok_or_else(|| {
            InstallError::NoSdkAsset {
                tag: release.tag_name.clone(),
                arch: arch.to_string(),
            }
        })?;

        let install_dir = self.config.install.install_dir.clone();
        let temp_dir = tempfile::TempDir::new().context("Failed to create temporary directory")?;
        let archive = temp_dir.path().join(&asset.name);

        println!("⬇️ Downloading {}...", asset.name);
        download(&self.http, &asset.download_url, &archive, &self.config.retry).await?;

        println!("📂 Extracting to {}...", install_dir.display());
        let extract_dir = install_dir.clone();
        tokio::task::spawn_blocking(move || extract_tarball(&archive, &extract_dir))
            .await
            .map_err(|e| anyhow!("Extraction task failed: {}", e))??;

        println!("🔧 Setting up environment...");
        write_profile_script(&self.config.install.profile_script, &install_dir)?;

        if !options.skip_verify {
            println!("🔍 Verifying installation...");
            verify_installation(&install_dir)?;
        }

        println!("✅ .NET SDK installation complete!");
        Ok(InstallReport {
            tag: release.tag_name.clone(),
            approximate,
            asset: asset.name.clone(),
            install_dir,
        })
    }
}
