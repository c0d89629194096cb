use crate::commands::AppContext;
use crate::output::Output;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use reviews_server::AppState;
use tracing::info;

pub async fn run_serve(ctx: AppContext, host: Option<String>, port: Option<u16>, output: &Output) -> Result<()> {
    let mut server_config = ctx.config.server.clone();
    if let Some(host) = host {
        server_config.host = host;
    }
    if let Some(port) = port {
        server_config.port = port;
    }

    let store = ctx.open_store()?;
    let mut config = ctx.config.clone();
    config.server = server_config.clone();
    let state = AppState::from_config(&config, store);

    info!(
        operation = "serve",
        host = %server_config.host,
        port = server_config.port,
        store = state.catalog.store_name(),
        search_enabled = state.tmdb.is_some(),
        poster_map_entries = state.posters.len(),
        "Starting review server"
    );
    output.info(format!(
        "Serving reviews on http://{}:{}",
        server_config.host, server_config.port
    ));

    reviews_server::serve(state, &server_config)
        .await
        .wrap_err("Server failed")?;

    output.success("Server stopped");
    Ok(())
}
