use crate::commands::AppContext;
use crate::output::{styled_table, Output};
use color_eyre::Result;
use comfy_table::{Attribute, Cell};
use owo_colors::OwoColorize;
use reviews_core::Catalog;
use reviews_models::GENRES;
use serde_json::json;

pub async fn run_genres(ctx: &AppContext, output: &Output) -> Result<()> {
    let present = ctx.catalog()?.genres().await?;
    let classes = Catalog::class_recommendations();

    output.data(&json!({
        "present": present,
        "standard": GENRES,
        "classRecommendations": classes,
    }));
    if !output.is_human() {
        return Ok(());
    }

    let mut table = styled_table();
    table.set_header(vec![
        Cell::new("Genre").add_attribute(Attribute::Bold),
        Cell::new("In catalog").add_attribute(Attribute::Bold),
    ]);
    for genre in GENRES {
        let mark = if present.iter().any(|g| g == genre) {
            "✓".green().to_string()
        } else {
            String::new()
        };
        table.add_row(vec![Cell::new(genre), Cell::new(mark)]);
    }
    for genre in present.iter().filter(|g| !GENRES.contains(&g.as_str())) {
        table.add_row(vec![Cell::new(genre.bright_black()), Cell::new("✓".green())]);
    }
    output.table(&table);

    let mut classes_table = styled_table();
    classes_table.set_header(vec![
        Cell::new("Class").add_attribute(Attribute::Bold),
        Cell::new("Rating range").add_attribute(Attribute::Bold),
    ]);
    for class in &classes {
        classes_table.add_row(vec![Cell::new(class.value.as_str()), Cell::new(class.range)]);
    }
    output.table(&classes_table);
    Ok(())
}
