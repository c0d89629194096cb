use crate::commands::{mask_secret, AppContext};
use crate::output::{styled_table, Output};
use crate::ConfigCommands;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{Attribute, Cell, Color, Table};
use owo_colors::OwoColorize;
use reviews_config::{Config, CredentialStore};
use serde_json::json;

pub async fn run_config(cmd: ConfigCommands, ctx: &AppContext, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show { full } => show_config(ctx, full, output),
        ConfigCommands::Init { force } => init_config(ctx, force, output),
        ConfigCommands::SetTmdbKey { api_key } => set_tmdb_key(ctx, api_key, output),
        ConfigCommands::ClearTmdbKey => clear_tmdb_key(ctx, output),
    }
}

fn show_config(ctx: &AppContext, full: bool, output: &Output) -> Result<()> {
    let config = &ctx.config;
    let api_key = config.tmdb.api_key().unwrap_or_default();
    let api_key_display = if full { api_key.to_string() } else { mask_secret(api_key) };
    let store_uri = config.store.uri.clone().unwrap_or_else(|| {
        format!("{} (default)", ctx.paths.store_dir().display())
    });

    output.data(&json!({
        "configFile": ctx.config_path.display().to_string(),
        "configFileExists": ctx.config_path.exists(),
        "inMemory": ctx.in_memory,
        "store": {
            "uri": store_uri,
            "database": config.store.database,
            "collection": config.store.collection,
        },
        "tmdb": {
            "apiKey": api_key_display,
            "baseUrl": config.tmdb.base_url,
            "imageBaseUrl": config.tmdb.image_base_url,
            "posterMap": config.tmdb.poster_map.as_ref().map(|p| p.display().to_string()),
        },
        "server": config.server,
        "logging": config.logging,
    }));
    if !output.is_human() {
        return Ok(());
    }

    output.info(format!("\n{}", "Configuration".bright_cyan().bold()));

    let mut info_table = styled_table();
    info_table.set_header(vec![
        Cell::new("Config File").add_attribute(Attribute::Bold),
        Cell::new(ctx.config_path.display().to_string()),
    ]);
    if !ctx.config_path.exists() {
        info_table.add_row(vec![
            Cell::new("Status"),
            Cell::new("not found, using defaults").fg(Color::Yellow),
        ]);
    }
    output.table(&info_table);

    let store_label = if ctx.in_memory { "memory:// (--in-memory)".to_string() } else { store_uri };
    output.table(&section(
        "Store",
        vec![
            ("URI", store_label),
            ("Database", config.store.database.clone()),
            ("Collection", config.store.collection.clone()),
        ],
    ));

    output.table(&section(
        "TMDB",
        vec![
            ("API Key", api_key_display),
            ("Base URL", config.tmdb.base_url.clone()),
            ("Image Base URL", config.tmdb.image_base_url.clone()),
            (
                "Poster Map",
                config
                    .tmdb
                    .poster_map
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "<not set>".to_string()),
            ),
        ],
    ));

    output.table(&section(
        "Server",
        vec![
            ("Listen", format!("{}:{}", config.server.host, config.server.port)),
            ("CORS Origins", config.server.cors_origins.join(", ")),
            ("Request Timeout", format!("{}s", config.server.request_timeout_secs)),
        ],
    ));

    output.table(&section(
        "Logging",
        vec![
            ("Level", config.logging.level.clone()),
            (
                "Format",
                match config.logging.json {
                    Some(true) => "json".to_string(),
                    Some(false) => "text".to_string(),
                    None => "auto".to_string(),
                },
            ),
            (
                "File",
                config
                    .logging
                    .file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "stderr".to_string()),
            ),
        ],
    ));
    Ok(())
}

fn section(title: &str, rows: Vec<(&str, String)>) -> Table {
    let mut table = styled_table();
    table.set_header(vec![Cell::new(title).fg(Color::Cyan).add_attribute(Attribute::Bold)]);
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    table
}

fn init_config(ctx: &AppContext, force: bool, output: &Output) -> Result<()> {
    if ctx.config_path.exists() && !force {
        output.warn(format!("Configuration already exists at {}", ctx.config_path.display()));
        output.info("Use --force to overwrite it with defaults.");
        return Ok(());
    }

    ctx.paths
        .ensure_directories()
        .map_err(|e| eyre!("Failed to create directories: {}", e))?;
    Config::default()
        .save_to_file(&ctx.config_path)
        .map_err(|e| eyre!("Failed to write {}: {}", ctx.config_path.display(), e))?;

    output.success(format!("Wrote default configuration to {}", ctx.config_path.display()));
    output.info(format!("Reviews will be stored under {}", ctx.paths.store_dir().display()));
    Ok(())
}

fn set_tmdb_key(ctx: &AppContext, api_key: String, output: &Output) -> Result<()> {
    let api_key = api_key.trim().to_string();
    if api_key.is_empty() {
        return Err(eyre!("API key cannot be empty"));
    }

    let mut credentials = CredentialStore::new(ctx.paths.credentials_file());
    credentials
        .load()
        .map_err(|e| eyre!("Failed to load credentials: {}", e))?;
    credentials.set_tmdb_api_key(api_key);
    credentials
        .save()
        .map_err(|e| eyre!("Failed to save credentials: {}", e))?;

    output.success(format!(
        "TMDB API key saved to {}",
        ctx.paths.credentials_file().display()
    ));
    Ok(())
}

fn clear_tmdb_key(ctx: &AppContext, output: &Output) -> Result<()> {
    let mut credentials = CredentialStore::new(ctx.paths.credentials_file());
    credentials
        .load()
        .map_err(|e| eyre!("Failed to load credentials: {}", e))?;
    let Some(removed) = credentials.clear_tmdb_api_key() else {
        output.info("No TMDB API key is stored.");
        return Ok(());
    };
    credentials
        .save()
        .map_err(|e| eyre!("Failed to save credentials: {}", e))?;

    output.success(format!(
        "TMDB API key removed from {}",
        ctx.paths.credentials_file().display()
    ));
    if ctx.config.tmdb.api_key().is_some_and(|key| key != removed.trim()) {
        output.warn("A TMDB API key is still set by config.toml or TMDB_API_KEY.");
    }
    Ok(())
}
