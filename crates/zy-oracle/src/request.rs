//! Interpretation request types.

use serde::{Deserialize, Serialize};

use zy_core::Hexagram;

/// Which Gemini model configuration to query.
///
/// Flash answers quickly; Pro takes longer and reads deeper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelVariant {
    /// The fast default model.
    #[default]
    Flash,
    /// The slower, more thorough model.
    Pro,
}

impl ModelVariant {
    /// The Gemini model identifier sent on the wire.
    pub fn model_id(self) -> &'static str {
        match self {
            Self::Flash => "gemini-2.5-flash",
            Self::Pro => "gemini-2.5-pro",
        }
    }

    /// Parse a user-supplied variant name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "flash" | "gemini-2.5-flash" => Some(Self::Flash),
            "pro" | "gemini-2.5-pro" => Some(Self::Pro),
            _ => None,
        }
    }
}

impl std::fmt::Display for ModelVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flash => write!(f, "flash"),
            Self::Pro => write!(f, "pro"),
        }
    }
}

/// Identity of a resolved hexagram as sent to the oracle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexagramRef {
    /// King Wen number (1..=64).
    pub number: u8,
    /// Transliterated Chinese name.
    pub pinyin: String,
    /// Conventional English name.
    pub name: String,
}

impl From<&Hexagram> for HexagramRef {
    fn from(hexagram: &Hexagram) -> Self {
        Self {
            number: hexagram.number,
            pinyin: hexagram.pinyin.to_string(),
            name: hexagram.name.to_string(),
        }
    }
}

/// Everything the oracle needs to interpret a completed cast.
///
/// `secondary` is present exactly when `changing_positions` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretationRequest {
    /// The primary hexagram.
    pub primary: HexagramRef,
    /// The relating hexagram, if any line is changing.
    pub secondary: Option<HexagramRef>,
    /// 1-indexed changing line positions, ascending.
    pub changing_positions: Vec<u8>,
    /// The seeker's free-text question; empty means general guidance.
    pub question: String,
    /// The model variant to query.
    pub model: ModelVariant,
}

impl InterpretationRequest {
    /// Whether this cast produced any changing lines.
    pub fn has_changing_lines(&self) -> bool {
        !self.changing_positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_ids() {
        assert_eq!(ModelVariant::Flash.model_id(), "gemini-2.5-flash");
        assert_eq!(ModelVariant::Pro.model_id(), "gemini-2.5-pro");
    }

    #[test]
    fn parse_variants() {
        assert_eq!(ModelVariant::parse("flash"), Some(ModelVariant::Flash));
        assert_eq!(ModelVariant::parse("PRO"), Some(ModelVariant::Pro));
        assert_eq!(
            ModelVariant::parse("gemini-2.5-pro"),
            Some(ModelVariant::Pro)
        );
        assert_eq!(ModelVariant::parse("turbo"), None);
    }

    #[test]
    fn default_is_flash() {
        assert_eq!(ModelVariant::default(), ModelVariant::Flash);
    }

    #[test]
    fn hexagram_ref_from_record() {
        let hexagram = Hexagram::by_number(24).unwrap();
        let reference = HexagramRef::from(hexagram);
        assert_eq!(reference.number, 24);
        assert_eq!(reference.pinyin, "Fu");
        assert_eq!(reference.name, "Return");
    }
}
