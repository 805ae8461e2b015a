use crate::error::PipelineError;
use std::time::Duration;
use tokio::time::sleep;

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    max_retries: u8,
    base_delay: Duration,
    max_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u8) -> Self {
        Self {
            max_retries,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(8),
        }
    }

    pub fn with_delays(max_retries: u8, base_delay: Duration, max_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
            max_delay: max_delay.max(base_delay),
        }
    }

    /// A policy that never retries
    pub fn none() -> Self {
        Self::new(0)
    }

    pub fn max_retries(&self) -> u8 {
        self.max_retries
    }

    pub fn should_retry(&self, attempt: u8, error: &PipelineError) -> bool {
        if attempt >= self.max_retries {
            return false;
        }

        error.is_retryable()
    }

    /// Exponential backoff: base * 2^attempt, capped at `max_delay`
    pub fn delay_for(&self, attempt: u8) -> Duration {
        let multiplier = 2u32.saturating_pow(attempt as u32);
        self.base_delay
            .saturating_mul(multiplier)
            .min(self.max_delay)
    }

    pub async fn wait_before_retry(&self, attempt: u8) {
        let delay = self.delay_for(attempt);

        tracing::info!(
            "Retrying in {}ms (attempt {})",
            delay.as_millis(),
            attempt + 2
        );
        sleep(delay).await;
    }
}
