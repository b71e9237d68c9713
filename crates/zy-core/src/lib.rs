//! Core I Ching types for Zhouyi.
//!
//! Models the classical three-coin casting method: each throw of three coins
//! produces one line value (6, 7, 8, or 9), six lines stack bottom-to-top
//! into a hexagram pattern, and patterns resolve against the canonical
//! King Wen table of 64 hexagrams. Changing lines (6 and 9) additionally
//! produce a relating hexagram.

pub mod cast;
pub mod error;
pub mod hexagram;
pub mod line;
pub mod resolve;
pub mod trigram;

pub use cast::{Cast, CoinFace, CoinToss, cast_line, toss_coins};
pub use error::{CoreError, CoreResult};
pub use hexagram::{Hexagram, HexagramPattern};
pub use line::{Line, LineValue};
pub use resolve::{changing_positions, primary_pattern, relating_pattern};
pub use trigram::Trigram;
