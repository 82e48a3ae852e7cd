//! Registry implementations for fetching release catalogs

pub mod github;
pub mod nuget;

pub use github::GitHubReleases;
pub use nuget::NuGetRegistry;

use tracing::warn;

use crate::version::error::RegistryError;

/// User agent sent with every request; the GitHub API rejects anonymous agents
pub const USER_AGENT: &str = concat!("dotnet-ibm-installer/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client shared by registry clients and downloads
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .expect("Failed to create HTTP client")
}

/// Map a non-success response to a `RegistryError`
pub(crate) fn check_status(
    response: reqwest::Response,
    target: &str,
) -> Result<reqwest::Response, RegistryError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let header = |name: &str| {
        response
            .headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(RegistryError::NotFound(target.to_string()));
    }

    // GitHub signals an exhausted quota with 403 and a zero remaining count
    let quota_exhausted = status == reqwest::StatusCode::FORBIDDEN
        && header("x-ratelimit-remaining").as_deref() == Some("0");
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS || quota_exhausted {
        return Err(RegistryError::RateLimited {
            retry_after_secs: header("retry-after").and_then(|v| v.parse().ok()),
        });
    }

    if status.is_server_error() {
        return Err(RegistryError::Server(status.as_u16()));
    }

    warn!("Registry returned status {}: {}", status, target);
    Err(RegistryError::InvalidResponse(format!(
        "Unexpected status: {}",
        status
    )))
}
