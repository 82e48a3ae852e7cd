//! SDK tarball download

use std::path::Path;

use reqwest::header::CONTENT_TYPE;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::install::error::InstallError;
use crate::version::error::RegistryError;
use crate::version::registries::check_status;
use crate::version::retry::{RetryPolicy, retry};

/// Download `url` to `dest`, streaming the body to disk.
///
/// Fails with [`InstallError::HtmlDownload`] when the server answers with an
/// HTML page instead of an archive (e.g. a login or error page).
pub async fn download(
    client: &reqwest::Client,
    url: &str,
    dest: &Path,
    policy: &RetryPolicy,
) -> Result<u64, InstallError> {
    let mut response = retry(policy, url, || async move {
        check_status(client.get(url).send().await?, url)
    })
    .await?;

    let is_html = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|content_type| content_type.to_ascii_lowercase().contains("html"));
    if is_html {
        return Err(InstallError::HtmlDownload(url.to_string()));
    }

    let mut file = tokio::fs::File::create(dest).await?;
    let mut written = 0u64;
    while let Some(chunk) = response.chunk().await.map_err(RegistryError::from)? {
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    file.flush().await?;

    debug!("Wrote {} bytes from {} to {:?}", written, url, dest);
    info!("Downloaded {}", url);
    Ok(written)
}
