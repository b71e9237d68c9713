//! Session phases.

use serde::{Deserialize, Serialize};

/// The phases of a divination session.
///
/// `Result` and `Error` are terminal until an explicit reset returns the
/// session to `Start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing accumulated yet.
    Start,
    /// Collecting the seeker's question.
    Asking,
    /// Casting lines, up to six.
    Casting,
    /// Waiting on the oracle; no user input accepted.
    Interpreting,
    /// Holding a completed interpretation.
    Result,
    /// Holding a failure message.
    Error,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Asking => write!(f, "asking"),
            Self::Casting => write!(f, "casting"),
            Self::Interpreting => write!(f, "interpreting"),
            Self::Result => write!(f, "result"),
            Self::Error => write!(f, "error"),
        }
    }
}
