//! The sixty-four hexagrams and pattern lookup.
//!
//! The canonical table is stored in King Wen order. Each record derives its
//! six-bit pattern from its two trigrams, and a compile-time index maps every
//! pattern (read as an integer 0..=63) back to its King Wen number, so lookup
//! is total over all 64 patterns.

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::trigram::Trigram;

/// Six line bits, bottom to top (1 = solid, 0 = broken).
///
/// Serializes for display purposes only; building a pattern always goes
/// through a validated constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HexagramPattern {
    bits: [u8; 6],
}

impl HexagramPattern {
    /// Build a pattern from six bits, bottom to top. Bits must be 0 or 1.
    pub fn new(bits: [u8; 6]) -> CoreResult<Self> {
        if bits.iter().all(|bit| *bit <= 1) {
            Ok(Self { bits })
        } else {
            Err(CoreError::MalformedPattern)
        }
    }

    /// Internal constructor for bits known to be binary.
    pub(crate) const fn from_bits(bits: [u8; 6]) -> Self {
        Self { bits }
    }

    /// The pattern formed by stacking an upper trigram on a lower one.
    pub const fn from_trigrams(lower: Trigram, upper: Trigram) -> Self {
        let lo = lower.bits();
        let up = upper.bits();
        Self {
            bits: [lo[0], lo[1], lo[2], up[0], up[1], up[2]],
        }
    }

    /// The bits bottom to top.
    pub fn bits(&self) -> [u8; 6] {
        self.bits
    }

    /// The bit at a 1-indexed line position (1 = bottom).
    pub fn bit(&self, position: u8) -> Option<u8> {
        if (1..=6).contains(&position) {
            Some(self.bits[usize::from(position) - 1])
        } else {
            None
        }
    }

    /// The pattern as an integer 0..=63, bottom line least significant.
    pub const fn index(&self) -> usize {
        let mut value = 0usize;
        let mut i = 0;
        while i < 6 {
            value |= (self.bits[i] as usize) << i;
            i += 1;
        }
        value
    }

    /// The lower (inner) trigram of this pattern.
    pub fn lower_trigram(&self) -> Trigram {
        trigram_for([self.bits[0], self.bits[1], self.bits[2]])
    }

    /// The upper (outer) trigram of this pattern.
    pub fn upper_trigram(&self) -> Trigram {
        trigram_for([self.bits[3], self.bits[4], self.bits[5]])
    }
}

impl std::fmt::Display for HexagramPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for bit in self.bits {
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}

impl TryFrom<&[u8]> for HexagramPattern {
    type Error = CoreError;

    fn try_from(bits: &[u8]) -> Result<Self, Self::Error> {
        let array: [u8; 6] = bits.try_into().map_err(|_| CoreError::MalformedPattern)?;
        Self::new(array)
    }
}

fn trigram_for(bits: [u8; 3]) -> Trigram {
    // Total over the 8 binary triples; trigram patterns are exhaustive.
    for trigram in Trigram::ALL {
        if trigram.bits() == bits {
            return trigram;
        }
    }
    Trigram::Kun
}

/// A canonical hexagram record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hexagram {
    /// King Wen number (1..=64).
    pub number: u8,
    /// Transliterated Chinese name.
    pub pinyin: &'static str,
    /// Conventional English name.
    pub name: &'static str,
    /// The lower (inner) trigram.
    pub lower: Trigram,
    /// The upper (outer) trigram.
    pub upper: Trigram,
}

impl Hexagram {
    /// The line pattern of this hexagram.
    pub const fn pattern(&self) -> HexagramPattern {
        HexagramPattern::from_trigrams(self.lower, self.upper)
    }

    /// The unicode hexagram glyph.
    ///
    /// The Yijing Hexagram Symbols block (U+4DC0..U+4DFF) follows King Wen
    /// order, so the glyph is derived from the number.
    pub fn glyph(&self) -> char {
        char::from_u32(0x4DC0 + u32::from(self.number) - 1).unwrap_or('?')
    }

    /// Look up the hexagram with the given line pattern.
    pub fn for_pattern(pattern: HexagramPattern) -> &'static Hexagram {
        let number = BY_PATTERN[pattern.index()];
        &HEXAGRAMS[usize::from(number) - 1]
    }

    /// Look up a hexagram by its King Wen number.
    pub fn by_number(number: u8) -> CoreResult<&'static Hexagram> {
        if (1..=64).contains(&number) {
            Ok(&HEXAGRAMS[usize::from(number) - 1])
        } else {
            Err(CoreError::UnknownHexagram(number))
        }
    }

    /// All 64 hexagrams in King Wen order.
    pub fn all() -> &'static [Hexagram; 64] {
        &HEXAGRAMS
    }
}

impl std::fmt::Display for Hexagram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}. {} ({})", self.glyph(), self.number, self.pinyin, self.name)
    }
}

const fn hx(
    number: u8,
    pinyin: &'static str,
    name: &'static str,
    lower: Trigram,
    upper: Trigram,
) -> Hexagram {
    Hexagram {
        number,
        pinyin,
        name,
        lower,
        upper,
    }
}

/// The 64 hexagrams in King Wen order.
const HEXAGRAMS: [Hexagram; 64] = [
    hx(1, "Qian", "The Creative", Trigram::Qian, Trigram::Qian),
    hx(2, "Kun", "The Receptive", Trigram::Kun, Trigram::Kun),
    hx(3, "Zhun", "Difficulty at the Beginning", Trigram::Zhen, Trigram::Kan),
    hx(4, "Meng", "Youthful Folly", Trigram::Kan, Trigram::Gen),
    hx(5, "Xu", "Waiting", Trigram::Qian, Trigram::Kan),
    hx(6, "Song", "Conflict", Trigram::Kan, Trigram::Qian),
    hx(7, "Shi", "The Army", Trigram::Kan, Trigram::Kun),
    hx(8, "Bi", "Holding Together", Trigram::Kun, Trigram::Kan),
    hx(9, "Xiao Chu", "Small Taming", Trigram::Qian, Trigram::Xun),
    hx(10, "Lu", "Treading", Trigram::Dui, Trigram::Qian),
    hx(11, "Tai", "Peace", Trigram::Qian, Trigram::Kun),
    hx(12, "Pi", "Standstill", Trigram::Kun, Trigram::Qian),
    hx(13, "Tong Ren", "Fellowship", Trigram::Li, Trigram::Qian),
    hx(14, "Da You", "Great Possession", Trigram::Qian, Trigram::Li),
    hx(15, "Qian", "Modesty", Trigram::Gen, Trigram::Kun),
    hx(16, "Yu", "Enthusiasm", Trigram::Kun, Trigram::Zhen),
    hx(17, "Sui", "Following", Trigram::Zhen, Trigram::Dui),
    hx(18, "Gu", "Work on the Decayed", Trigram::Xun, Trigram::Gen),
    hx(19, "Lin", "Approach", Trigram::Dui, Trigram::Kun),
    hx(20, "Guan", "Contemplation", Trigram::Kun, Trigram::Xun),
    hx(21, "Shi He", "Biting Through", Trigram::Zhen, Trigram::Li),
    hx(22, "Bi", "Grace", Trigram::Li, Trigram::Gen),
    hx(23, "Bo", "Splitting Apart", Trigram::Kun, Trigram::Gen),
    hx(24, "Fu", "Return", Trigram::Zhen, Trigram::Kun),
    hx(25, "Wu Wang", "Innocence", Trigram::Zhen, Trigram::Qian),
    hx(26, "Da Chu", "Great Taming", Trigram::Qian, Trigram::Gen),
    hx(27, "Yi", "Nourishment", Trigram::Zhen, Trigram::Gen),
    hx(28, "Da Guo", "Great Exceeding", Trigram::Xun, Trigram::Dui),
    hx(29, "Kan", "The Abysmal", Trigram::Kan, Trigram::Kan),
    hx(30, "Li", "The Clinging", Trigram::Li, Trigram::Li),
    hx(31, "Xian", "Influence", Trigram::Gen, Trigram::Dui),
    hx(32, "Heng", "Duration", Trigram::Xun, Trigram::Zhen),
    hx(33, "Dun", "Retreat", Trigram::Gen, Trigram::Qian),
    hx(34, "Da Zhuang", "Great Power", Trigram::Qian, Trigram::Zhen),
    hx(35, "Jin", "Progress", Trigram::Kun, Trigram::Li),
    hx(36, "Ming Yi", "Darkening of the Light", Trigram::Li, Trigram::Kun),
    hx(37, "Jia Ren", "The Family", Trigram::Li, Trigram::Xun),
    hx(38, "Kui", "Opposition", Trigram::Dui, Trigram::Li),
    hx(39, "Jian", "Obstruction", Trigram::Gen, Trigram::Kan),
    hx(40, "Xie", "Deliverance", Trigram::Kan, Trigram::Zhen),
    hx(41, "Sun", "Decrease", Trigram::Dui, Trigram::Gen),
    hx(42, "Yi", "Increase", Trigram::Zhen, Trigram::Xun),
    hx(43, "Guai", "Breakthrough", Trigram::Qian, Trigram::Dui),
    hx(44, "Gou", "Coming to Meet", Trigram::Xun, Trigram::Qian),
    hx(45, "Cui", "Gathering", Trigram::Kun, Trigram::Dui),
    hx(46, "Sheng", "Pushing Upward", Trigram::Xun, Trigram::Kun),
    hx(47, "Kun", "Oppression", Trigram::Kan, Trigram::Dui),
    hx(48, "Jing", "The Well", Trigram::Xun, Trigram::Kan),
    hx(49, "Ge", "Revolution", Trigram::Li, Trigram::Dui),
    hx(50, "Ding", "The Cauldron", Trigram::Xun, Trigram::Li),
    hx(51, "Zhen", "The Arousing", Trigram::Zhen, Trigram::Zhen),
    hx(52, "Gen", "Keeping Still", Trigram::Gen, Trigram::Gen),
    hx(53, "Jian", "Development", Trigram::Gen, Trigram::Xun),
    hx(54, "Gui Mei", "The Marrying Maiden", Trigram::Dui, Trigram::Zhen),
    hx(55, "Feng", "Abundance", Trigram::Li, Trigram::Zhen),
    hx(56, "Lu", "The Wanderer", Trigram::Gen, Trigram::Li),
    hx(57, "Xun", "The Gentle", Trigram::Xun, Trigram::Xun),
    hx(58, "Dui", "The Joyous", Trigram::Dui, Trigram::Dui),
    hx(59, "Huan", "Dispersion", Trigram::Kan, Trigram::Xun),
    hx(60, "Jie", "Limitation", Trigram::Dui, Trigram::Kan),
    hx(61, "Zhong Fu", "Inner Truth", Trigram::Dui, Trigram::Xun),
    hx(62, "Xiao Guo", "Small Exceeding", Trigram::Gen, Trigram::Zhen),
    hx(63, "Ji Ji", "After Completion", Trigram::Li, Trigram::Kan),
    hx(64, "Wei Ji", "Before Completion", Trigram::Kan, Trigram::Li),
];

/// Pattern index (0..=63) to King Wen number, built at compile time.
const BY_PATTERN: [u8; 64] = build_pattern_index();

const fn build_pattern_index() -> [u8; 64] {
    let mut table = [0u8; 64];
    let mut i = 0;
    while i < 64 {
        let hexagram = &HEXAGRAMS[i];
        table[hexagram.pattern().index()] = hexagram.number;
        i += 1;
    }
    table
}
