use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::eyre;
use commands::{add, config, export, genres, import, list, search, serve, show, AppContext};
use std::path::PathBuf;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "movie-reviews")]
#[command(about = "Browse, filter, and add short-form movie reviews")]
#[command(version)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Use an empty in-memory store instead of the configured one
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    in_memory: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    #[command(long_about = "Serve the review catalog over HTTP: GET/POST /reviews, GET /reviews/{id}, GET /genres, GET /class-recommendations, GET /search/movies and GET /health.")]
    Serve {
        /// Address to bind (overrides server.host / HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides server.port / PORT)
        #[arg(long)]
        port: Option<u16>,
    },
    /// List reviews, optionally filtered and sorted
    List {
        /// Case-insensitive text matched against title, review and genres
        #[arg(short, long)]
        search: Option<String>,

        /// Only reviews with this genre (repeat for any of several)
        #[arg(long = "genre", value_name = "GENRE")]
        genres: Vec<String>,

        /// Only reviews with this class recommendation (repeatable)
        #[arg(long = "class", value_name = "CLASS")]
        classes: Vec<String>,

        #[arg(long)]
        min_rating: Option<f64>,

        #[arg(long)]
        max_rating: Option<f64>,

        /// rating-desc, rating-asc, release-desc, release-asc, review-desc, review-asc, title-asc, title-desc
        #[arg(long)]
        sort: Option<String>,
    },
    /// Show one review with its poster URL
    Show {
        id: String,
    },
    /// Add a review
    #[command(long_about = "Add a review. The id defaults to a slug of the title and release year, the review date to today, and the class to the one suggested for the rating.")]
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        rating: f64,

        #[arg(long)]
        id: Option<String>,

        /// Release date (YYYY-MM-DD)
        #[arg(long)]
        release_date: Option<String>,

        #[arg(long = "genre", value_name = "GENRE")]
        genres: Vec<String>,

        #[arg(long = "class", value_name = "CLASS")]
        class: Option<String>,

        #[arg(long)]
        audience: Option<String>,

        #[arg(long)]
        rewatchability: Option<String>,

        #[arg(long)]
        best_character: Option<String>,

        #[arg(long)]
        review: Option<String>,

        #[arg(long)]
        spoilers: Option<String>,

        /// Review date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        review_date: Option<String>,

        #[arg(long)]
        tmdb_id: Option<i64>,

        #[arg(long)]
        poster_path: Option<String>,
    },
    /// Insert every review from a JSON array file
    Import {
        file: PathBuf,
    },
    /// Write all reviews as JSON (stdout when no file is given)
    Export {
        file: Option<PathBuf>,
    },
    /// Search TMDB for a movie
    Search {
        query: String,
    },
    /// List genres and class recommendations
    Genres,
    /// Show or initialize configuration
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration (masks the API key)
    Show {
        /// Show the API key unmasked
        #[arg(long, action = ArgAction::SetTrue)]
        full: bool,
    },
    /// Write a default config.toml and create the data directories
    Init {
        /// Overwrite an existing config file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
    /// Store the TMDB API key in credentials.toml
    SetTmdbKey {
        api_key: String,
    },
    /// Remove the stored TMDB API key from credentials.toml
    ClearTmdbKey,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let ctx = AppContext::load(cli.config, cli.in_memory)?;

    logging::init_logging(cli.verbose, cli.quiet, &ctx.config.logging).map_err(|e| eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Serve { host, port } => serve::run_serve(ctx, host, port, &output).await,
        Commands::List {
            search,
            genres,
            classes,
            min_rating,
            max_rating,
            sort,
        } => {
            let args = list::ListArgs {
                search,
                genres,
                classes,
                min_rating,
                max_rating,
                sort,
            };
            list::run_list(&ctx, args, &output).await
        }
        Commands::Show { id } => show::run_show(&ctx, &id, &output).await,
        Commands::Add {
            title,
            rating,
            id,
            release_date,
            genres,
            class,
            audience,
            rewatchability,
            best_character,
            review,
            spoilers,
            review_date,
            tmdb_id,
            poster_path,
        } => {
            let args = add::AddArgs {
                id,
                title,
                rating,
                release_date,
                genres,
                class,
                audience,
                rewatchability,
                best_character,
                review,
                spoilers,
                review_date,
                tmdb_id,
                poster_path,
            };
            add::run_add(&ctx, args, &output).await
        }
        Commands::Import { file } => import::run_import(&ctx, &file, &output).await,
        Commands::Export { file } => export::run_export(&ctx, file.as_deref(), &output).await,
        Commands::Search { query } => search::run_search(&ctx, &query, &output).await,
        Commands::Genres => genres::run_genres(&ctx, &output).await,
        Commands::Config { cmd } => config::run_config(cmd, &ctx, &output).await,
    }
}
