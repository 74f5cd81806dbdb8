//! `ideagen styles`

use anyhow::Result;
use ideagen_core::{Style, Tone};

use crate::output;

pub fn handle() -> Result<()> {
    let styles: Vec<(&str, &str)> = Style::ALL.iter().map(|s| (s.slug(), s.label())).collect();
    let mut table = output::table();
    output::table_header(&mut table, "Style", "Label");
    for (slug, label) in &styles {
        output::table_row(&mut table, slug, label);
    }
    output::table_print(&table, "styles", &styles);

    let tones: Vec<(String, &str)> = Tone::ALL
        .iter()
        .map(|t| (t.label().to_lowercase(), t.label()))
        .collect();
    let tone_items: Vec<(&str, &str)> = tones.iter().map(|(id, l)| (id.as_str(), *l)).collect();
    let mut table = output::table();
    output::table_header(&mut table, "Tone", "Label");
    for (id, label) in &tone_items {
        output::table_row(&mut table, id, label);
    }
    output::table_print(&table, "tones", &tone_items);

    output::dim("Tip: narrow topics plus a specific style produce higher-quality ideas.");
    Ok(())
}
