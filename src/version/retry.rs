//! Retry with exponential backoff for registry requests

use std::future::Future;
use std::time::Duration;

use serde::Deserialize;
use tokio::time::sleep;
use tracing::warn;

use crate::version::error::RegistryError;

/// Retry policy applied to network calls against the build mirror and NuGet
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct RetryPolicy {
    /// Maximum number of retries after the first attempt (0 = no retries)
    pub max_retries: u32,
    /// Delay before the first retry, doubled on each subsequent retry
    pub base_delay_ms: u64,
    /// Upper bound for any single delay
    pub max_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay_ms: 500,
            max_delay_ms: 10_000,
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Delay before retry number `attempt` (0-based) after `error`
    pub fn delay_for(&self, attempt: u32, error: &RegistryError) -> Duration {
        let delay_ms = match error {
            RegistryError::RateLimited {
                retry_after_secs: Some(secs),
            } => secs.saturating_mul(1000),
            _ => self
                .base_delay_ms
                .saturating_mul(1u64.checked_shl(attempt).unwrap_or(u64::MAX)),
        };
        Duration::from_millis(delay_ms.min(self.max_delay_ms))
    }
}

/// Run `operation` until it succeeds, fails permanently, or retries are exhausted
pub async fn retry<T, F, Fut>(
    policy: &RetryPolicy,
    label: &str,
    mut operation: F,
) -> Result<T, RegistryError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, RegistryError>>,
{
    let mut attempt = 0;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) if e.is_retryable() && attempt < policy.max_retries => {
                let delay = policy.delay_for(attempt, &e);
                warn!(
                    "{} failed ({}), retrying in {:?} ({}/{})",
                    label,
                    e,
                    delay,
                    attempt + 1,
                    policy.max_retries
                );
                sleep(delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
