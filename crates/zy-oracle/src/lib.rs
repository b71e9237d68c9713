//! Gemini interpretation client for Zhouyi.
//!
//! Turns a resolved cast (primary hexagram, changing lines, relating
//! hexagram, and the seeker's question) into a request against the Gemini
//! generateContent API, enforces a structured JSON response contract, and
//! retries transient failures with exponential backoff.

pub mod backend;
pub mod error;
pub mod prompt;
pub mod request;
pub mod result;
pub mod retry;
pub mod schema;

pub use backend::{GeminiBackend, InterpretationBackend};
pub use error::{OracleError, OracleResult};
pub use request::{HexagramRef, InterpretationRequest, ModelVariant};
pub use result::{ChangingLineNarrative, DivinationResult, PrimaryNarrative, SecondaryNarrative};
pub use retry::{Interpreter, RetryPolicy};
