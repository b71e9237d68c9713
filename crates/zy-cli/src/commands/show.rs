use zy_core::{Hexagram, Line, LineValue};

use crate::render;

pub fn run(number: u8) -> Result<(), String> {
    let hexagram = Hexagram::by_number(number).map_err(|e| e.to_string())?;

    println!("{}", render::heading(hexagram));
    println!("  {}", render::trigram_summary(hexagram));
    println!();

    let lines: Vec<Line> = hexagram
        .pattern()
        .bits()
        .iter()
        .map(|bit| {
            Line::new(if *bit == 1 {
                LineValue::YoungYang
            } else {
                LineValue::YoungYin
            })
        })
        .collect();
    for row in render::diagram(&lines).lines() {
        println!("  {row}");
    }
    println!();
    println!("  Pattern: {} (bottom line first)", hexagram.pattern());

    Ok(())
}
