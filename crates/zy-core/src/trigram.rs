//! The eight trigrams (ba gua).
//!
//! A hexagram splits into a lower (inner) and an upper (outer) trigram.
//! Each trigram has a fixed three-line pattern, a pinyin name, a natural
//! image, and a unicode glyph.

use serde::{Deserialize, Serialize};

/// One of the eight trigrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigram {
    /// ☰ Heaven, three solid lines.
    Qian,
    /// ☱ Lake.
    Dui,
    /// ☲ Fire.
    Li,
    /// ☳ Thunder.
    Zhen,
    /// ☴ Wind.
    Xun,
    /// ☵ Water.
    Kan,
    /// ☶ Mountain.
    Gen,
    /// ☷ Earth, three broken lines.
    Kun,
}

impl Trigram {
    /// All eight trigrams.
    pub const ALL: [Self; 8] = [
        Self::Qian,
        Self::Dui,
        Self::Li,
        Self::Zhen,
        Self::Xun,
        Self::Kan,
        Self::Gen,
        Self::Kun,
    ];

    /// The pinyin name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Qian => "Qian",
            Self::Dui => "Dui",
            Self::Li => "Li",
            Self::Zhen => "Zhen",
            Self::Xun => "Xun",
            Self::Kan => "Kan",
            Self::Gen => "Gen",
            Self::Kun => "Kun",
        }
    }

    /// The natural image associated with the trigram.
    pub fn image(self) -> &'static str {
        match self {
            Self::Qian => "Heaven",
            Self::Dui => "Lake",
            Self::Li => "Fire",
            Self::Zhen => "Thunder",
            Self::Xun => "Wind",
            Self::Kan => "Water",
            Self::Gen => "Mountain",
            Self::Kun => "Earth",
        }
    }

    /// The unicode trigram glyph.
    pub fn glyph(self) -> char {
        match self {
            Self::Qian => '☰',
            Self::Dui => '☱',
            Self::Li => '☲',
            Self::Zhen => '☳',
            Self::Xun => '☴',
            Self::Kan => '☵',
            Self::Gen => '☶',
            Self::Kun => '☷',
        }
    }

    /// The three line bits, bottom to top (1 = solid).
    pub const fn bits(self) -> [u8; 3] {
        match self {
            Self::Qian => [1, 1, 1],
            Self::Dui => [1, 1, 0],
            Self::Li => [1, 0, 1],
            Self::Zhen => [1, 0, 0],
            Self::Xun => [0, 1, 1],
            Self::Kan => [0, 1, 0],
            Self::Gen => [0, 0, 1],
            Self::Kun => [0, 0, 0],
        }
    }
}

impl std::fmt::Display for Trigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.image())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_patterns_are_distinct() {
        for (i, a) in Trigram::ALL.iter().enumerate() {
            for b in &Trigram::ALL[i + 1..] {
                assert_ne!(a.bits(), b.bits(), "{a} and {b} share a pattern");
            }
        }
    }

    #[test]
    fn bits_are_binary() {
        for trigram in Trigram::ALL {
            assert!(trigram.bits().iter().all(|bit| *bit <= 1));
        }
    }

    #[test]
    fn heaven_and_earth() {
        assert_eq!(Trigram::Qian.bits(), [1, 1, 1]);
        assert_eq!(Trigram::Kun.bits(), [0, 0, 0]);
    }

    #[test]
    fn thunder_has_solid_bottom() {
        // Zhen is written bottom-to-top: solid, broken, broken.
        assert_eq!(Trigram::Zhen.bits(), [1, 0, 0]);
    }

    #[test]
    fn display() {
        assert_eq!(Trigram::Qian.to_string(), "Qian (Heaven)");
        assert_eq!(Trigram::Kan.to_string(), "Kan (Water)");
    }
}
