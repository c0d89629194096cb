use crate::commands::{truncate, AppContext};
use crate::output::{styled_table, Output};
use color_eyre::Result;
use comfy_table::{Attribute, Cell};
use reviews_sources::{PosterSize, TmdbImages};

pub async fn run_search(ctx: &AppContext, query: &str, output: &Output) -> Result<()> {
    let client = ctx.tmdb_client()?;
    let movies = client.search_movies(query).await?;

    if !output.is_human() {
        output.data(&movies);
        return Ok(());
    }
    if movies.is_empty() {
        output.warn(format!("No movies found for '{}'", query));
        return Ok(());
    }

    let images = TmdbImages::from_config(&ctx.config.tmdb);
    let mut table = styled_table();
    table.set_header(vec![
        Cell::new("TMDB ID").add_attribute(Attribute::Bold),
        Cell::new("Title").add_attribute(Attribute::Bold),
        Cell::new("Released").add_attribute(Attribute::Bold),
        Cell::new("Poster").add_attribute(Attribute::Bold),
    ]);
    for movie in &movies {
        table.add_row(vec![
            Cell::new(movie.id),
            Cell::new(truncate(&movie.title, 40)),
            Cell::new(&movie.release_date),
            Cell::new(images.poster_url(movie.poster_path.as_deref(), PosterSize::W342)),
        ]);
    }
    output.table(&table);
    output.info("Use 'movie-reviews add --tmdb-id <ID> --poster-path <PATH>' to link a review");
    Ok(())
}
