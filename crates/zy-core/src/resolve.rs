//! Resolution of six cast lines into hexagram patterns.
//!
//! The primary pattern draws each line with its cast polarity. The relating
//! pattern flips the bit at every changing position (9 becomes broken,
//! 6 becomes solid) and keeps stable lines as they are. Both functions are
//! pure; the relating pattern is only meaningful when changing lines exist.

use crate::hexagram::HexagramPattern;
use crate::line::Line;

/// The primary hexagram pattern: solid exactly where the line is yang (7 or 9).
pub fn primary_pattern(lines: &[Line; 6]) -> HexagramPattern {
    let mut bits = [0u8; 6];
    for (bit, line) in bits.iter_mut().zip(lines) {
        *bit = u8::from(line.is_yang());
    }
    HexagramPattern::from_bits(bits)
}

/// The relating pattern: changing lines flip, stable lines keep their bit.
pub fn relating_pattern(lines: &[Line; 6]) -> HexagramPattern {
    let mut bits = [0u8; 6];
    for (bit, line) in bits.iter_mut().zip(lines) {
        *bit = if line.is_changing() {
            u8::from(!line.is_yang())
        } else {
            u8::from(line.is_yang())
        };
    }
    HexagramPattern::from_bits(bits)
}

/// 1-indexed positions of changing lines, ascending (position 1 = bottom).
pub fn changing_positions(lines: &[Line; 6]) -> Vec<u8> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.is_changing())
        .map(|(i, _)| i as u8 + 1)
        .collect()
}
