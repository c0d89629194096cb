use anyhow::Result;
use reviews_config::LoggingConfig;
use std::io;
use std::io::IsTerminal;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::{self, time::ChronoUtc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Install the global subscriber.
///
/// Level: `--quiet` shows errors only; `-v` is debug with noisy HTTP internals
/// held at warn; `-vv` is trace. Otherwise `RUST_LOG`, then `logging.level`.
/// Format: JSON when `RUST_LOG_JSON=true`, when `logging.json` says so, or
/// when stdout is not a terminal. With `logging.file` set, output goes to a
/// daily-rotated file instead of stderr.
pub fn init_logging(verbose_level: u8, quiet: bool, settings: &LoggingConfig) -> Result<()> {
    let directive = level_directive(verbose_level, quiet, &settings.level);
    let filter = if quiet {
        EnvFilter::new(directive)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
    };

    let json = json_requested(std::env::var("RUST_LOG_JSON").ok().as_deref(), settings.json)
        .unwrap_or_else(|| !io::stdout().is_terminal());

    let (writer, ansi) = match &settings.file {
        Some(path) => (BoxMakeWriter::new(rolling_appender(path)?), false),
        None => (BoxMakeWriter::new(io::stderr), true),
    };

    let registry = Registry::default().with(filter);
    if json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(ansi)
                    .with_writer(writer),
            )
            .try_init()?;
    }

    Ok(())
}

fn level_directive(verbose_level: u8, quiet: bool, default_level: &str) -> String {
    if quiet {
        return "error".to_string();
    }
    match verbose_level {
        0 => default_level.to_string(),
        1 => "debug,hyper=warn,reqwest=info,tower_http=debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// `RUST_LOG_JSON` wins over the config file; `None` means decide from the terminal
fn json_requested(env_value: Option<&str>, configured: Option<bool>) -> Option<bool> {
    match env_value.map(str::trim) {
        Some("true") | Some("1") => Some(true),
        Some("false") | Some("0") => Some(false),
        _ => configured,
    }
}

/// `logs/movie-reviews.log` rotates into `movie-reviews.<date>` files in `logs/`
fn rolling_appender(log_path: &Path) -> Result<RollingFileAppender> {
    let log_dir = log_path
        .parent()
        .ok_or_else(|| anyhow::anyhow!("Log file path has no parent directory"))?;
    std::fs::create_dir_all(log_dir)?;

    let log_prefix = log_path
        .file_stem()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid log filename: {}", log_path.display()))?;

    Ok(RollingFileAppender::new(Rotation::DAILY, log_dir, log_prefix))
}
