use crate::commands::{truncate, AppContext};
use crate::output::{styled_table, Output};
use color_eyre::Result;
use comfy_table::{Attribute, Cell, CellAlignment, Color};
use reviews_models::{ClassRecommendation, FilterSpec, ReviewRecord, SortKey};
use reviews_models::filter::{MAX_RATING, MIN_RATING};

pub struct ListArgs {
    pub search: Option<String>,
    pub genres: Vec<String>,
    pub classes: Vec<String>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
    pub sort: Option<String>,
}

impl ListArgs {
    fn filter(&self) -> FilterSpec {
        let mut filter = FilterSpec::new().with_rating_range(
            self.min_rating.unwrap_or(MIN_RATING),
            self.max_rating.unwrap_or(MAX_RATING),
        );
        if let Some(search) = &self.search {
            filter = filter.with_search(search.as_str());
        }
        for genre in &self.genres {
            filter = filter.with_genre(genre.as_str());
        }
        for class in &self.classes {
            filter = filter.with_class(class.as_str());
        }
        filter
    }
}

pub async fn run_list(ctx: &AppContext, args: ListArgs, output: &Output) -> Result<()> {
    let catalog = ctx.catalog()?;
    let filter = args.filter();
    let records = match args.sort.as_deref() {
        Some(token) => catalog.list_with_token(&filter, token).await?,
        None => catalog.list(&filter, None).await?,
    };

    if !output.is_human() {
        output.data(&records);
        return Ok(());
    }

    if records.is_empty() {
        output.warn("No reviews match");
        return Ok(());
    }

    output.table(&review_table(&records));
    let mut summary = format!("{} reviews", records.len());
    let active = filter.active_filter_count();
    if active > 0 {
        summary.push_str(&format!(", {} filters active", active));
    }
    match args.sort.as_deref().map(|token| (token, SortKey::from_token(token))) {
        Some((_, Some(key))) => summary.push_str(&format!(", {}", key.label())),
        Some((token, None)) => output.warn(format!("Unknown sort '{}', showing store order", token)),
        None => {}
    }
    output.info(summary);
    Ok(())
}

fn review_table(records: &[ReviewRecord]) -> comfy_table::Table {
    let mut table = styled_table();
    table.set_header(vec![
        Cell::new("ID").add_attribute(Attribute::Bold),
        Cell::new("Title").add_attribute(Attribute::Bold),
        Cell::new("Year").add_attribute(Attribute::Bold),
        Cell::new("Rating").add_attribute(Attribute::Bold),
        Cell::new("Class").add_attribute(Attribute::Bold),
        Cell::new("Genres").add_attribute(Attribute::Bold),
    ]);

    for record in records {
        let year = record
            .release_year()
            .map(|y| y.to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(&record.id),
            Cell::new(truncate(&record.title, 40)),
            Cell::new(year),
            Cell::new(format!("{:.1}", record.rating)).set_alignment(CellAlignment::Right),
            Cell::new(record.class_recommendation.as_str()).fg(class_color(&record.class_recommendation)),
            Cell::new(record.genres.join(", ")),
        ]);
    }
    table
}

pub fn class_color(class: &ClassRecommendation) -> Color {
    match class {
        ClassRecommendation::Masterclass => Color::Magenta,
        ClassRecommendation::CouncilClass => Color::Cyan,
        ClassRecommendation::Recommendable => Color::Green,
        ClassRecommendation::Rewatchable => Color::Blue,
        ClassRecommendation::Existent => Color::Yellow,
        ClassRecommendation::Meme => Color::Red,
        ClassRecommendation::Other(_) => Color::Grey,
    }
}
