//! Three-coin casting.
//!
//! Each casting step throws three coins. Heads counts 3 (yang), tails
//! counts 2 (yin); the sum classifies the line. Six throws build a hexagram.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::line::{Line, LineValue};

/// One face of a thrown coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoinFace {
    /// Heads: yang, counts 3.
    Heads,
    /// Tails: yin, counts 2.
    Tails,
}

impl CoinFace {
    /// The numeric contribution of this face (2 or 3).
    pub fn numeric(self) -> u8 {
        match self {
            Self::Heads => 3,
            Self::Tails => 2,
        }
    }
}

impl std::fmt::Display for CoinFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Heads => write!(f, "heads"),
            Self::Tails => write!(f, "tails"),
        }
    }
}

/// The outcome of throwing three coins at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinToss {
    /// The three coin faces in thrown order.
    pub faces: [CoinFace; 3],
}

impl CoinToss {
    /// Sum of the three faces, always in 6..=9.
    pub fn sum(&self) -> u8 {
        self.faces.iter().map(|face| face.numeric()).sum()
    }

    /// The line value this toss produces.
    pub fn line_value(&self) -> LineValue {
        match self.sum() {
            6 => LineValue::OldYin,
            7 => LineValue::YoungYang,
            8 => LineValue::YoungYin,
            _ => LineValue::OldYang,
        }
    }
}

impl std::fmt::Display for CoinToss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .faces
            .iter()
            .map(|face| face.numeric().to_string())
            .collect();
        write!(f, "{} = {}", parts.join(" + "), self.sum())
    }
}

/// A full casting step: the coins as thrown and the line they form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cast {
    /// The three coins as thrown.
    pub toss: CoinToss,
    /// The resulting line.
    pub line: Line,
}

/// Throw three coins using the given RNG.
pub fn toss_coins(rng: &mut StdRng) -> CoinToss {
    let mut faces = [CoinFace::Tails; 3];
    for face in &mut faces {
        if rng.random_bool(0.5) {
            *face = CoinFace::Heads;
        }
    }
    CoinToss { faces }
}

/// Cast one complete line.
pub fn cast_line(rng: &mut StdRng) -> Cast {
    let toss = toss_coins(rng);
    let line = Line::new(toss.line_value());
    Cast { toss, line }
}
