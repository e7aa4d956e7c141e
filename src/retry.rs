//! # Retry Module
//!
//! Caller-side retry for transient collaborator failures. The pure pipeline
//! functions are never retried; only adapter calls that report a retryable
//! error go through here, with exponential backoff and random jitter to keep
//! concurrent callers from retrying in lockstep.

use std::future::Future;
use std::time::Duration;

use log::warn;
use rand::Rng;

use crate::config::RetryConfig;
use crate::errors::ApiError;

/// Run an operation, retrying transient failures per the config
///
/// Non-retryable errors (not-found, validation, business rules) are returned
/// immediately. The delay before attempt `n` is `base_delay_ms * 2^(n-1)`
/// plus up to `max_jitter_ms` of random jitter.
pub async fn with_retry<T, F, Fut>(config: &RetryConfig, mut operation: F) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let mut attempt = 1;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_retryable() && attempt < config.max_attempts => {
                let backoff = config.base_delay_ms.saturating_mul(1 << (attempt - 1));
                let jitter = if config.max_jitter_ms > 0 {
                    rand::thread_rng().gen_range(0..=config.max_jitter_ms)
                } else {
                    0
                };
                warn!(
                    "Attempt {attempt} failed ({err}), retrying in {}ms",
                    backoff + jitter
                );
                tokio::time::sleep(Duration::from_millis(backoff + jitter)).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn fast_config() -> RetryConfig {
        RetryConfig {
            max_attempts: 3,
            base_delay_ms: 1,
            max_jitter_ms: 0,
        }
    }

    #[tokio::test]
    async fn test_success_on_first_attempt() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&calls);

        let result = with_retry(&fast_config(), move || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok::<_, ApiError>(42)
            }
        })
        .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_transient_failures_are_retried() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&calls);

        let result = with_retry(&fast_config(), move || {
            let counter = Arc::clone(&counter);
            async move {
                if counter.fetch_add(1, Ordering::SeqCst) < 2 {
                    Err(ApiError::transient("network blip"))
                } else {
                    Ok("ok")
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), "ok");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_attempts_are_bounded() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&calls);

        let result: Result<(), ApiError> = with_retry(&fast_config(), move || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(ApiError::transient("still down"))
            }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_non_retryable_errors_fail_immediately() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&calls);

        let result: Result<(), ApiError> = with_retry(&fast_config(), move || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(ApiError::not_found("no such recipe"))
            }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
