//! Database readiness polling
//!
//! A bounded retry loop around a connectivity probe. The probe itself is
//! injected so the loop can be tested without a database.

use crate::env::EnvExt;
use crate::error::BootstrapError;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

/// Retry budget for the readiness poll.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn from_env() -> Self {
        Self {
            max_attempts: u32::env_parse("DB_WAIT_MAX_ATTEMPTS", 30),
            delay: Duration::from_secs(u64::env_parse("DB_WAIT_RETRY_DELAY", 2)),
        }
    }
}

/// Poll until the probe reports ready or the retry budget is exhausted.
///
/// Returns the 1-based attempt number that succeeded. Sleeps `delay`
/// between attempts but not after the final failed one.
pub async fn wait_for_database<F, Fut>(
    policy: &RetryPolicy,
    endpoint: &str,
    mut probe: F,
) -> Result<u32, BootstrapError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    for attempt in 1..=policy.max_attempts {
        if probe().await {
            info!(attempt, endpoint, "Database is ready");
            return Ok(attempt);
        }

        info!(
            attempt,
            max = policy.max_attempts,
            endpoint,
            "Database not ready yet"
        );

        if attempt < policy.max_attempts {
            sleep(policy.delay).await;
        }
    }

    Err(BootstrapError::Unreachable {
        endpoint: endpoint.to_string(),
        attempts: policy.max_attempts,
    })
}
