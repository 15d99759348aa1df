// crates/shared-kernel/src/infrastructure/retry.rs

use rand::Rng;
use crate::errors::{DomainError, Result};

#[derive(Debug, Clone, Copy)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub initial_backoff_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 4,
            initial_backoff_ms: 20,
        }
    }
}

/// Rejoue une unité atomique tant que le store signale un conflit optimiste
/// (Exponential Backoff + Jitter). Toute autre erreur est renvoyée telle quelle.
pub async fn with_retry<F, Fut, T>(config: RetryConfig, mut action: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T>>,
{
    for attempt in 0..=config.max_retries {
        match action().await {
            Ok(res) => return Ok(res),
            Err(e) if e.is_concurrency_conflict() && attempt < config.max_retries => {
                // 2^attempt * base
                let base_backoff = config.initial_backoff_ms * 2u64.pow(attempt);

                // Jitter entre 0 et 25% de la base pour désynchroniser les clients
                let jitter = rand::rng().random_range(0..base_backoff / 4 + 1);

                let backoff = std::time::Duration::from_millis(base_backoff + jitter);

                tracing::warn!(
                    "🔄 Concurrency conflict (attempt {}/{}), retrying in {:?}...",
                    attempt + 1,
                    config.max_retries,
                    backoff
                );

                tokio::time::sleep(backoff).await;
            }
            Err(e) if e.is_concurrency_conflict() => break,
            Err(e) => return Err(e),
        }
    }

    Err(DomainError::TooManyConflicts(
        format!("Operation failed after {} retries due to persistent conflicts", config.max_retries)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn conflict() -> DomainError {
        DomainError::ConcurrencyConflict { reason: "usernames/ann changed".into() }
    }

    #[tokio::test]
    async fn test_retries_until_success() {
        let calls = AtomicU32::new(0);
        let config = RetryConfig { max_retries: 3, initial_backoff_ms: 1 };

        let result = with_retry(config, || async {
            if calls.fetch_add(1, Ordering::SeqCst) < 2 { Err(conflict()) } else { Ok(42) }
        }).await;

        assert_eq!(result, Ok(42));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_non_conflict_errors_are_not_retried() {
        let calls = AtomicU32::new(0);

        let result: Result<()> = with_retry(RetryConfig { max_retries: 3, initial_backoff_ms: 1 }, || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(DomainError::Infrastructure("disk full".into()))
        }).await;

        assert!(matches!(result, Err(DomainError::Infrastructure(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_retries() {
        let calls = AtomicU32::new(0);

        let result: Result<()> = with_retry(RetryConfig { max_retries: 2, initial_backoff_ms: 1 }, || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(conflict())
        }).await;

        assert!(matches!(result, Err(DomainError::TooManyConflicts(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
