//! The oracle's structured reply.

use serde::{Deserialize, Serialize};

use crate::request::InterpretationRequest;

/// Narrative for the primary hexagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryNarrative {
    /// The hexagram's name as the oracle renders it.
    pub name: String,
    /// The judgment: overall meaning and counsel.
    pub judgment: String,
    /// The symbolic image formed by the two trigrams.
    pub image: String,
}

/// Commentary on one changing line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangingLineNarrative {
    /// 1-indexed line position (1 = bottom).
    pub line: u8,
    /// The commentary text.
    pub text: String,
}

/// Narrative for the relating hexagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryNarrative {
    /// The relating hexagram's name.
    pub name: String,
    /// Its judgment: how the situation develops.
    pub judgment: String,
}

/// The oracle's full interpretation of a completed cast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DivinationResult {
    /// Narrative for the primary hexagram.
    pub primary_hexagram: PrimaryNarrative,
    /// One entry per changing line; empty when no line changes.
    #[serde(default)]
    pub changing_lines: Vec<ChangingLineNarrative>,
    /// Present when changing lines exist.
    #[serde(default)]
    pub secondary_hexagram: Option<SecondaryNarrative>,
    /// The closing synthesis and counsel.
    pub summary: String,
}

impl DivinationResult {
    /// Conform the reply to its request: keep changing-line entries only for
    /// requested positions, and drop the relating narrative when no line
    /// changed.
    pub fn conform_to(mut self, request: &InterpretationRequest) -> Self {
        self.changing_lines
            .retain(|entry| request.changing_positions.contains(&entry.line));
        if !request.has_changing_lines() {
            self.secondary_hexagram = None;
        }
        self
    }
}
