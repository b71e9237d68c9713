use comfy_table::{ContentArrangement, Table};

use zy_core::Hexagram;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["No.", "", "Name", "English", "Pattern", "Trigrams"]);

    for hexagram in Hexagram::all() {
        table.add_row(vec![
            hexagram.number.to_string(),
            hexagram.glyph().to_string(),
            hexagram.pinyin.to_string(),
            hexagram.name.to_string(),
            hexagram.pattern().to_string(),
            format!(
                "{} over {}",
                hexagram.upper.image(),
                hexagram.lower.image()
            ),
        ]);
    }

    println!("{table}");
    println!();
    println!("  64 hexagrams, King Wen order");

    Ok(())
}
