use crate::commands::list::class_color;
use crate::commands::AppContext;
use crate::output::{styled_table, Output};
use color_eyre::Result;
use comfy_table::{Attribute, Cell};
use owo_colors::OwoColorize;
use reviews_models::ClassRecommendation;
use reviews_sources::{PosterSize, TmdbImages};
use serde_json::json;

pub async fn run_show(ctx: &AppContext, id: &str, output: &Output) -> Result<()> {
    let catalog = ctx.catalog()?;
    let record = catalog.get(id).await?;

    let images = TmdbImages::from_config(&ctx.config.tmdb);
    let poster_path = ctx.poster_map().resolve_poster_path(&record);
    let poster_url = images.poster_url(poster_path.as_deref(), PosterSize::default());

    if !output.is_human() {
        let mut value = serde_json::to_value(&record)?;
        if let Some(fields) = value.as_object_mut() {
            fields.insert("posterUrl".to_string(), json!(poster_url));
        }
        output.data(&value);
        return Ok(());
    }

    let year = record.release_year().map(|y| format!(" ({})", y)).unwrap_or_default();
    output.info(format!("\n{}{}", record.title.bright_cyan().bold(), year));

    let mut table = styled_table();
    table.set_header(vec![
        Cell::new("Field").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("ID"), Cell::new(&record.id)]);
    table.add_row(vec![Cell::new("Released"), Cell::new(&record.release_date)]);
    table.add_row(vec![Cell::new("Genres"), Cell::new(record.genres.join(", "))]);
    table.add_row(vec![Cell::new("Rating"), Cell::new(format!("{:.1} / 10", record.rating))]);
    table.add_row(vec![
        Cell::new("Class"),
        Cell::new(record.class_recommendation.as_str()).fg(class_color(&record.class_recommendation)),
    ]);
    table.add_row(vec![Cell::new("Audience"), Cell::new(&record.intended_audience)]);
    table.add_row(vec![Cell::new("Rewatchability"), Cell::new(&record.rewatchability)]);
    table.add_row(vec![Cell::new("Best character"), Cell::new(&record.best_character_winner)]);
    table.add_row(vec![Cell::new("Reviewed"), Cell::new(&record.review_date)]);
    table.add_row(vec![Cell::new("Poster"), Cell::new(&poster_url)]);
    output.table(&table);

    if !record.review.is_empty() {
        output.info(format!("\n{}", record.review));
    }
    if let Some(spoilers) = record.spoiler_review.as_deref().filter(|s| !s.is_empty()) {
        output.info(format!("\n{}", "Spoilers".red().bold()));
        output.info(spoilers);
    }
    if record.class_recommendation.is_legacy() {
        output.warn(format!(
            "'{}' is a legacy class; suggested class for this rating: {}",
            record.class_recommendation,
            ClassRecommendation::suggest_for_rating(record.rating)
        ));
    }
    Ok(())
}
