//! Terminal rendering of lines, tosses, and hexagram diagrams.

use colored::Colorize;

use zy_core::{CoinToss, Hexagram, Line};

/// Render one coin toss as "3 + 2 + 3 = 8  (young yin)".
pub fn toss_line(toss: &CoinToss) -> String {
    format!("{toss}  ({})", toss.line_value())
}

/// Render a cast line as a diagram row.
///
/// Solid lines are drawn unbroken, broken lines with a gap; changing lines
/// carry the traditional marker (o for old yang, x for old yin).
pub fn diagram_row(line: &Line) -> String {
    let marker = match (line.is_yang(), line.is_changing()) {
        (true, true) => " o",
        (false, true) => " x",
        _ => "",
    };
    let bar = if line.is_yang() {
        "━━━━━━━"
    } else {
        "━━━ ━━━"
    };
    format!("{bar}{marker}")
}

/// Render the accumulated lines top line first, as a hexagram is read.
pub fn diagram(lines: &[Line]) -> String {
    let mut rows: Vec<String> = lines.iter().map(diagram_row).collect();
    rows.reverse();
    rows.join("\n")
}

/// Render a hexagram heading: glyph, number, and names.
pub fn heading(hexagram: &Hexagram) -> String {
    format!(
        "{} {}",
        hexagram.glyph(),
        format!(
            "#{} {} ({})",
            hexagram.number, hexagram.pinyin, hexagram.name
        )
        .bold()
    )
}

/// Render a hexagram's trigram composition.
pub fn trigram_summary(hexagram: &Hexagram) -> String {
    format!(
        "{} {} above, {} {} below",
        hexagram.upper.glyph(),
        hexagram.upper,
        hexagram.lower.glyph(),
        hexagram.lower
    )
}
