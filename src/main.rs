//! Recipe finder binary entrypoint kept minimal. The menu lives in `app`.

mod args;

use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

use clap::Parser;
use recipe_finder::{app, config};

/// Log timestamp formatter: UTC `YYYY-MM-DD-T HH:MM:SS`.
struct RecipeTimer;

impl tracing_subscriber::fmt::time::FormatTime for RecipeTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Utc::now().format("%Y-%m-%d-T %H:%M:%S");
        write!(w, "{ts}")
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Install the tracing subscriber.
///
/// Inputs:
/// - `config_dir`: Directory whose `logs/` receives `recipe-finder.log`
/// - `level`: Filter used when `RUST_LOG` is unset
///
/// Details:
/// - Falls back to stderr when the log file cannot be opened.
fn init_logging(config_dir: &Path, level: &str) {
    let log_path = config::logs_dir(config_dir).join("recipe-finder.log");
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(RecipeTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: stderr logger so startup is not blocked
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(std::io::stderr)
                .with_timer(RecipeTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = args::Args::parse();
    let config_dir = config::resolve_config_dir(args.config_dir.as_deref());
    init_logging(&config_dir, &args::determine_log_level(&args));
    tracing::info!(config_dir = %config_dir.display(), "recipe-finder starting");

    let settings = config::load_settings(&config_dir);
    let Some(api_key) = config::load_api_key(&config_dir) else {
        tracing::error!("{} is not set", config::API_KEY_ENV);
        eprintln!(
            "Error: {} not found. Set it in the environment or a .env file.",
            config::API_KEY_ENV
        );
        std::process::exit(1);
    };

    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupted by user");
            println!("\n\nApplication interrupted by user. Goodbye!");
            std::process::exit(0);
        }
    });

    let color = app::color_enabled(args.no_color);
    if let Err(err) = app::run(&config_dir, &settings, api_key, color).await {
        tracing::error!(error = ?err, "application error");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
    tracing::info!("recipe-finder exited");
}
