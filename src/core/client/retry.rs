use std::time::Duration;

use rand::Rng;
use reqwest::{RequestBuilder, Response};

use crate::core::DcfError;

/// Specifies the backoff strategy for retrying failed requests.
#[derive(Clone, Debug)]
pub enum Backoff {
    /// Uses a fixed delay between retries.
    Fixed(Duration),
    /// Uses an exponential delay between retries.
    /// The delay is calculated as `base * (factor ^ attempt)`.
    Exponential {
        /// The initial backoff duration.
        base: Duration,
        /// The multiplicative factor for each subsequent retry.
        factor: f64,
        /// The maximum duration to wait between retries.
        max: Duration,
        /// Whether to apply random jitter (+/- 50%) to the delay.
        jitter: bool,
    },
}

impl Backoff {
    /// Delay before retry number `attempt` (0-based).
    #[must_use]
    pub fn delay(&self, attempt: u32) -> Duration {
        match self {
            Self::Fixed(d) => *d,
            Self::Exponential {
                base,
                factor,
                max,
                jitter,
            } => {
                let exp = i32::try_from(attempt).unwrap_or(i32::MAX);
                let raw = base.as_secs_f64() * factor.powi(exp);
                let capped = raw.min(max.as_secs_f64());
                let secs = if *jitter {
                    capped * jitter_factor()
                } else {
                    capped
                };
                Duration::try_from_secs_f64(secs).unwrap_or(*max)
            }
        }
    }
}

fn jitter_factor() -> f64 {
    rand::thread_rng().gen_range(0.5..1.5)
}

/// Configuration for the automatic retry mechanism.
#[derive(Clone, Debug)]
pub struct RetryConfig {
    /// Enables or disables the retry mechanism.
    pub enabled: bool,
    /// The maximum number of retries to attempt. The total number of attempts will be `max_retries + 1`.
    pub max_retries: u32,
    /// The backoff strategy to use between retries.
    pub backoff: Backoff,
    /// A list of HTTP status codes that should trigger a retry.
    pub retry_on_status: Vec<u16>,
    /// Whether to retry on request timeouts.
    pub retry_on_timeout: bool,
    /// Whether to retry on connection errors.
    pub retry_on_connect: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_retries: 4,
            backoff: Backoff::Exponential {
                base: Duration::from_millis(200),
                factor: 2.0,
                max: Duration::from_secs(3),
                jitter: true,
            },
            retry_on_status: vec![408, 429, 500, 502, 503, 504],
            retry_on_timeout: true,
            retry_on_connect: true,
        }
    }
}

impl RetryConfig {
    /// A policy that performs exactly one attempt.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    fn should_retry_error(&self, e: &reqwest::Error) -> bool {
        (self.retry_on_timeout && e.is_timeout()) || (self.retry_on_connect && e.is_connect())
    }
}

impl super::YahooClient {
    /// Send a request, retrying per `retry_override` or the client's policy.
    ///
    /// The final response is returned whatever its status; callers decide
    /// which statuses are errors.
    pub(crate) async fn send_with_retry(
        &self,
        req: RequestBuilder,
        retry_override: Option<&RetryConfig>,
    ) -> Result<Response, DcfError> {
        let cfg = retry_override.unwrap_or(&self.retry);
        let max_retries = if cfg.enabled { cfg.max_retries } else { 0 };
        let mut attempt = 0u32;

        loop {
            // Streaming bodies cannot be cloned; fall back to a single attempt.
            let Some(this_req) = req.try_clone() else {
                return Ok(req.send().await?);
            };

            match this_req.send().await {
                Ok(resp) => {
                    let status = resp.status().as_u16();
                    if attempt < max_retries && cfg.retry_on_status.contains(&status) {
                        #[cfg(feature = "tracing")]
                        tracing::warn!(status, attempt, "retryable status, backing off");
                        tokio::time::sleep(cfg.backoff.delay(attempt)).await;
                        attempt += 1;
                        continue;
                    }
                    return Ok(resp);
                }
                Err(e) => {
                    if attempt < max_retries && cfg.should_retry_error(&e) {
                        #[cfg(feature = "tracing")]
                        tracing::warn!(error = %e, attempt, "request failed, backing off");
                        tokio::time::sleep(cfg.backoff.delay(attempt)).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(DcfError::Http(e));
                }
            }
        }
    }
}
