//! Line values and lines.
//!
//! A cast line carries one of four values from the three-coin method. Sixes
//! and nines are "old" lines at the point of transformation: they are drawn
//! with their current polarity in the primary hexagram and flip into their
//! opposite in the relating hexagram.

use serde::{Deserialize, Serialize};

/// The value of a single cast line.
///
/// Each of the three coins contributes 2 (tails, yin) or 3 (heads, yang),
/// so the sum is always in 6..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineValue {
    /// Old yin (6): a broken line changing into a solid one.
    OldYin,
    /// Young yang (7): a stable solid line.
    YoungYang,
    /// Young yin (8): a stable broken line.
    YoungYin,
    /// Old yang (9): a solid line changing into a broken one.
    OldYang,
}

impl LineValue {
    /// Classify a three-coin sum. Returns `None` outside 6..=9.
    pub fn from_sum(sum: u8) -> Option<Self> {
        match sum {
            6 => Some(Self::OldYin),
            7 => Some(Self::YoungYang),
            8 => Some(Self::YoungYin),
            9 => Some(Self::OldYang),
            _ => None,
        }
    }

    /// The numeric value (6..=9).
    pub fn numeric(self) -> u8 {
        match self {
            Self::OldYin => 6,
            Self::YoungYang => 7,
            Self::YoungYin => 8,
            Self::OldYang => 9,
        }
    }

    /// Whether the line is drawn solid (yang) in the primary hexagram.
    pub fn is_yang(self) -> bool {
        matches!(self, Self::YoungYang | Self::OldYang)
    }

    /// Whether the line is an old line about to transform.
    pub fn is_changing(self) -> bool {
        matches!(self, Self::OldYin | Self::OldYang)
    }
}

impl std::fmt::Display for LineValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OldYin => write!(f, "old yin"),
            Self::YoungYang => write!(f, "young yang"),
            Self::YoungYin => write!(f, "young yin"),
            Self::OldYang => write!(f, "old yang"),
        }
    }
}

/// A single line of a hexagram, immutable once cast.
///
/// Lines accumulate bottom-to-top: the first cast is position 1, the bottom
/// of the hexagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// The cast value of this line.
    pub value: LineValue,
}

impl Line {
    /// Create a line from a cast value.
    pub fn new(value: LineValue) -> Self {
        Self { value }
    }

    /// Whether the line is drawn solid in the primary hexagram.
    pub fn is_yang(&self) -> bool {
        self.value.is_yang()
    }

    /// Whether this is a changing line.
    pub fn is_changing(&self) -> bool {
        self.value.is_changing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_sum_classifies() {
        assert_eq!(LineValue::from_sum(6), Some(LineValue::OldYin));
        assert_eq!(LineValue::from_sum(7), Some(LineValue::YoungYang));
        assert_eq!(LineValue::from_sum(8), Some(LineValue::YoungYin));
        assert_eq!(LineValue::from_sum(9), Some(LineValue::OldYang));
    }

    #[test]
    fn from_sum_rejects_out_of_range() {
        assert_eq!(LineValue::from_sum(5), None);
        assert_eq!(LineValue::from_sum(10), None);
        assert_eq!(LineValue::from_sum(0), None);
    }

    #[test]
    fn numeric_round_trips() {
        for sum in 6..=9 {
            let value = LineValue::from_sum(sum).unwrap();
            assert_eq!(value.numeric(), sum);
        }
    }

    #[test]
    fn yang_values() {
        assert!(LineValue::YoungYang.is_yang());
        assert!(LineValue::OldYang.is_yang());
        assert!(!LineValue::YoungYin.is_yang());
        assert!(!LineValue::OldYin.is_yang());
    }

    #[test]
    fn changing_values() {
        assert!(LineValue::OldYin.is_changing());
        assert!(LineValue::OldYang.is_changing());
        assert!(!LineValue::YoungYang.is_changing());
        assert!(!LineValue::YoungYin.is_changing());
    }

    #[test]
    fn line_derives_flags_from_value() {
        let line = Line::new(LineValue::OldYang);
        assert!(line.is_yang());
        assert!(line.is_changing());

        let line = Line::new(LineValue::YoungYin);
        assert!(!line.is_yang());
        assert!(!line.is_changing());
    }

    #[test]
    fn display() {
        assert_eq!(LineValue::OldYin.to_string(), "old yin");
        assert_eq!(LineValue::OldYang.to_string(), "old yang");
    }

    #[test]
    fn round_trip_serde() {
        let line = Line::new(LineValue::OldYin);
        let json = serde_json::to_string(&line).unwrap();
        let back: Line = serde_json::from_str(&json).unwrap();
        assert_eq!(back, line);
    }
}
