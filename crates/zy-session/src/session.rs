//! The divination session state machine.
//!
//! A session walks `Start -> Asking -> Casting -> Interpreting` and settles
//! in `Result` or `Error`; reset returns it to `Start`. Each reset bumps a
//! generation counter so a reply from an interpretation that was in flight
//! when the seeker reset is recognized as stale and discarded.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use zy_core::{Cast, Hexagram, Line, cast_line, changing_positions, primary_pattern, relating_pattern};
use zy_oracle::{DivinationResult, HexagramRef, InterpretationRequest, ModelVariant, OracleError};

use crate::error::{SessionError, SessionResult};
use crate::state::Phase;

/// The number of lines in a complete cast.
pub const LINES_PER_CAST: usize = 6;

/// Configuration for a divination session.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionConfig {
    /// RNG seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// The model variant used when building the interpretation request.
    pub model: ModelVariant,
}

impl SessionConfig {
    /// Set a fixed RNG seed for a reproducible cast.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the model variant.
    pub fn with_model(mut self, model: ModelVariant) -> Self {
        self.model = model;
        self
    }
}

/// A single interactive divination session.
pub struct DivinationSession {
    phase: Phase,
    question: String,
    casts: Vec<Cast>,
    outcome: Option<DivinationResult>,
    failure: Option<String>,
    generation: u64,
    model: ModelVariant,
    rng: StdRng,
}

impl DivinationSession {
    /// Create a new session in the `Start` phase.
    pub fn new(config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::rng().next_u64()),
        };
        Self {
            phase: Phase::Start,
            question: String::new(),
            casts: Vec::with_capacity(LINES_PER_CAST),
            outcome: None,
            failure: None,
            generation: 0,
            model: config.model,
            rng,
        }
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The seeker's question.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// The casts recorded so far, bottom line first.
    pub fn casts(&self) -> &[Cast] {
        &self.casts
    }

    /// The completed interpretation, if the session settled in `Result`.
    pub fn outcome(&self) -> Option<&DivinationResult> {
        self.outcome.as_ref()
    }

    /// The failure message, if the session settled in `Error`.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// The current generation; bumped on every reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Begin a session: `Start -> Asking`.
    pub fn begin(&mut self) -> SessionResult<()> {
        self.expect_phase(Phase::Start)?;
        self.phase = Phase::Asking;
        Ok(())
    }

    /// Record the question and move on to casting: `Asking -> Casting`.
    ///
    /// The question may be empty; that reads as a request for general
    /// guidance.
    pub fn confirm_question(&mut self, question: &str) -> SessionResult<()> {
        self.expect_phase(Phase::Asking)?;
        self.question = question.trim().to_string();
        self.phase = Phase::Casting;
        Ok(())
    }

    /// Cast one line.
    ///
    /// Returns the cast, or `None` when the session is not casting or six
    /// lines already exist. A rejected cast is a no-op, not an error.
    pub fn cast(&mut self) -> Option<Cast> {
        if self.phase != Phase::Casting || self.casts.len() >= LINES_PER_CAST {
            return None;
        }
        let cast = cast_line(&mut self.rng);
        self.casts.push(cast);
        Some(cast)
    }

    /// Whether six lines have been cast.
    pub fn is_cast_complete(&self) -> bool {
        self.casts.len() == LINES_PER_CAST
    }

    /// The cast lines, bottom first.
    pub fn lines(&self) -> Vec<Line> {
        self.casts.iter().map(|cast| cast.line).collect()
    }

    /// Resolve the completed cast and move to `Interpreting`.
    ///
    /// Returns the generation tag of this request together with the request
    /// itself; pass the tag back to [`finish_interpretation`] so a reply
    /// that outlived a reset can be recognized.
    ///
    /// [`finish_interpretation`]: DivinationSession::finish_interpretation
    pub fn start_interpretation(&mut self) -> SessionResult<(u64, InterpretationRequest)> {
        self.expect_phase(Phase::Casting)?;
        let lines = self.line_array()?;

        let primary = Hexagram::for_pattern(primary_pattern(&lines));
        let positions = changing_positions(&lines);
        let secondary = if positions.is_empty() {
            None
        } else {
            Some(HexagramRef::from(Hexagram::for_pattern(relating_pattern(
                &lines,
            ))))
        };

        let request = InterpretationRequest {
            primary: HexagramRef::from(primary),
            secondary,
            changing_positions: positions,
            question: self.question.clone(),
            model: self.model,
        };

        self.phase = Phase::Interpreting;
        Ok((self.generation, request))
    }

    /// Settle an interpretation reply.
    ///
    /// A reply tagged with a stale generation is discarded silently: the
    /// seeker reset the session while the request was in flight.
    pub fn finish_interpretation(
        &mut self,
        generation: u64,
        reply: Result<DivinationResult, OracleError>,
    ) {
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "discarding stale oracle reply");
            return;
        }
        match reply {
            Ok(result) => {
                self.outcome = Some(result);
                self.phase = Phase::Result;
            }
            Err(err) => {
                self.failure = Some(err.user_message().to_string());
                self.phase = Phase::Error;
            }
        }
    }

    /// Clear everything and return to `Start`.
    pub fn reset(&mut self) {
        self.question.clear();
        self.casts.clear();
        self.outcome = None;
        self.failure = None;
        self.generation += 1;
        self.phase = Phase::Start;
    }

    fn expect_phase(&self, expected: Phase) -> SessionResult<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(SessionError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn line_array(&self) -> SessionResult<[Line; 6]> {
        let lines = self.lines();
        <[Line; 6]>::try_from(lines.as_slice())
            .map_err(|_| SessionError::CastIncomplete(self.casts.len()))
    }
}
