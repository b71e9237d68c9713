//! Error taxonomy for the interpretation client.
//!
//! Transport failures, oracle-side statuses, and malformed replies are all
//! normalized into these variants before the retry loop sees them. Only
//! configuration problems bypass retrying.

use thiserror::Error;

/// Result type for oracle operations.
pub type OracleResult<T> = Result<T, OracleError>;

/// Failures from the interpretation oracle.
#[derive(Debug, Error)]
pub enum OracleError {
    /// API credentials are missing or unusable. Surfaced immediately.
    #[error("oracle is not configured: {0}")]
    Configuration(String),

    /// Rate limiting or quota exhaustion on the oracle side.
    #[error("oracle rate limit: {0}")]
    RateLimited(String),

    /// The oracle returned a syntactically empty reply.
    #[error("oracle returned an empty reply")]
    EmptyResponse,

    /// Transport-level failure reaching the oracle.
    #[error("network failure: {0}")]
    Network(String),

    /// The reply did not match the structured response schema.
    #[error("malformed oracle reply: {0}")]
    Schema(String),

    /// Any other failure.
    #[error("oracle call failed: {0}")]
    Unknown(String),
}

impl OracleError {
    /// Whether the retry loop may attempt the call again.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Self::Configuration(_))
    }

    /// The single human-readable message surfaced to the seeker.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Configuration(_) => {
                "The oracle is not configured. Set GEMINI_API_KEY and try again."
            }
            Self::RateLimited(_) => {
                "The oracle is receiving too many requests. Try again a little later."
            }
            Self::EmptyResponse => {
                "The oracle returned an empty reply. The request may have been too complex; try rephrasing your question."
            }
            Self::Network(_) => "Could not reach the oracle. Check your connection and try again.",
            Self::Schema(_) | Self::Unknown(_) => "The interpretation failed. Please try again.",
        }
    }
}
