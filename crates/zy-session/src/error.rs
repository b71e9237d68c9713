//! Error types for session orchestration.

use thiserror::Error;

use crate::state::Phase;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors from the divination session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// An operation attempted in the wrong phase.
    #[error("expected phase {expected}, currently {actual}")]
    WrongPhase {
        /// The phase the operation requires.
        expected: Phase,
        /// The phase the session is in.
        actual: Phase,
    },

    /// Interpretation requested before six lines were cast.
    #[error("the cast is not complete: {0} of 6 lines")]
    CastIncomplete(usize),

    /// The platform configuration directory could not be determined.
    #[error("could not determine the configuration directory")]
    NoConfigDir,

    /// Reading or writing the preference file failed.
    #[error("preference file error: {0}")]
    Io(#[from] std::io::Error),

    /// The preference file is not valid TOML.
    #[error("preference file is not valid TOML: {0}")]
    PrefsParse(#[from] toml::de::Error),

    /// Preferences could not be serialized.
    #[error("could not encode preferences: {0}")]
    PrefsEncode(#[from] toml::ser::Error),
}
