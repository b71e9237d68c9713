//! The interpretation client's retry loop.
//!
//! Retries are sequential and blocking from the caller's perspective: one
//! attempt at a time, exponential backoff between attempts, no jitter.
//! Configuration errors are surfaced immediately; everything else is worth
//! another try up to the attempt budget.

use std::time::Duration;

use crate::backend::InterpretationBackend;
use crate::error::OracleResult;
use crate::request::InterpretationRequest;
use crate::result::DivinationResult;

/// Retry policy for oracle calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts, including the first.
    pub max_attempts: u32,
    /// Delay before the second attempt; doubles after each failure.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// The delay after the given failed attempt (1-indexed).
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.base_delay * 2u32.saturating_pow(attempt.saturating_sub(1))
    }
}

/// An interpretation client: one backend plus the retry loop around it.
pub struct Interpreter<B> {
    backend: B,
    policy: RetryPolicy,
}

impl<B: InterpretationBackend> Interpreter<B> {
    /// Wrap a backend with the default retry policy.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            policy: RetryPolicy::default(),
        }
    }

    /// Override the retry policy.
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Request an interpretation, retrying transient failures.
    ///
    /// On success the reply is conformed to the request: changing-line
    /// entries outside the requested positions are dropped, as is the
    /// relating narrative when no line changed.
    pub async fn interpret(
        &self,
        request: &InterpretationRequest,
    ) -> OracleResult<DivinationResult> {
        let mut attempt = 1;
        loop {
            match self.backend.request_interpretation(request).await {
                Ok(result) => return Ok(result.conform_to(request)),
                Err(err) if !err.is_retryable() || attempt >= self.policy.max_attempts => {
                    return Err(err);
                }
                Err(err) => {
                    let delay = self.policy.delay_after(attempt);
                    tracing::warn!(
                        attempt,
                        delay_secs = delay.as_secs_f64(),
                        error = %err,
                        "oracle call failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    use async_trait::async_trait;

    use crate::error::OracleError;
    use crate::request::{HexagramRef, ModelVariant};
    use crate::result::PrimaryNarrative;

    struct FlakyBackend {
        calls: AtomicU32,
        failures_before_success: u32,
        error: fn() -> OracleError,
    }

    impl FlakyBackend {
        fn new(failures_before_success: u32, error: fn() -> OracleError) -> Self {
            Self {
                calls: AtomicU32::new(0),
                failures_before_success,
                error,
            }
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl InterpretationBackend for FlakyBackend {
        async fn request_interpretation(
            &self,
            _request: &InterpretationRequest,
        ) -> OracleResult<DivinationResult> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures_before_success {
                Err((self.error)())
            } else {
                Ok(DivinationResult {
                    primary_hexagram: PrimaryNarrative {
                        name: "The Creative".into(),
                        judgment: "J".into(),
                        image: "I".into(),
                    },
                    changing_lines: vec![],
                    secondary_hexagram: None,
                    summary: "S".into(),
                })
            }
        }
    }

    fn request() -> InterpretationRequest {
        InterpretationRequest {
            primary: HexagramRef {
                number: 1,
                pinyin: "Qian".into(),
                name: "The Creative".into(),
            },
            secondary: None,
            changing_positions: vec![],
            question: String::new(),
            model: ModelVariant::Flash,
        }
    }

    #[test]
    fn delays_double_from_two_seconds() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_after(1), Duration::from_secs(2));
        assert_eq!(policy.delay_after(2), Duration::from_secs(4));
    }

    #[tokio::test(start_paused = true)]
    async fn succeeds_after_two_failures_in_three_attempts() {
        let interpreter = Interpreter::new(FlakyBackend::new(2, || {
            OracleError::Network("connection reset".into())
        }));

        let started = tokio::time::Instant::now();
        let result = interpreter.interpret(&request()).await.unwrap();
        assert_eq!(result.summary, "S");
        assert_eq!(interpreter.backend.calls(), 3);
        // Two backoffs: 2s then 4s.
        assert_eq!(started.elapsed(), Duration::from_secs(6));
    }

    #[tokio::test(start_paused = true)]
    async fn rate_limit_exhausts_three_attempts() {
        let interpreter = Interpreter::new(FlakyBackend::new(u32::MAX, || {
            OracleError::RateLimited("quota".into())
        }));

        let err = interpreter.interpret(&request()).await.unwrap_err();
        assert!(matches!(err, OracleError::RateLimited(_)));
        assert_eq!(interpreter.backend.calls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn configuration_error_is_not_retried() {
        let interpreter = Interpreter::new(FlakyBackend::new(u32::MAX, || {
            OracleError::Configuration("no key".into())
        }));

        let err = interpreter.interpret(&request()).await.unwrap_err();
        assert!(matches!(err, OracleError::Configuration(_)));
        assert_eq!(interpreter.backend.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_response_is_retried() {
        let interpreter =
            Interpreter::new(FlakyBackend::new(1, || OracleError::EmptyResponse));

        let result = interpreter.interpret(&request()).await;
        assert!(result.is_ok());
        assert_eq!(interpreter.backend.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn custom_policy_caps_attempts() {
        let interpreter = Interpreter::new(FlakyBackend::new(u32::MAX, || {
            OracleError::Unknown("boom".into())
        }))
        .with_policy(RetryPolicy {
            max_attempts: 1,
            base_delay: Duration::from_millis(1),
        });

        let err = interpreter.interpret(&request()).await.unwrap_err();
        assert!(matches!(err, OracleError::Unknown(_)));
        assert_eq!(interpreter.backend.calls(), 1);
    }
}
