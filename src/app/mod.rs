//! Interactive application: startup wiring and the menu shell.

/// Menu loop and the search, details, favorites and share screens.
mod shell;
/// Terminal capability probes.
mod terminal;


pub use shell::{CUISINES, MEAL_TYPES, Shell, ShellOptions, UrlOpener};
pub use terminal::{color_enabled, interactive, terminal_width};

use std::io;
use std::path::Path;

use crate::config::{ApiKey, Settings};
use crate::favorites::FavoritesStore;
use crate::sources::SpoonacularClient;
use crate::ui::Painter;
use crate::util::open_url;

/// What: Build the API client and run the menu on stdin/stdout.
///
/// Inputs:
/// - `config_dir`: Resolved configuration directory
/// - `settings`: Loaded settings
/// - `api_key`: Validated API key
/// - `color`: Style output
///
/// # Errors
/// - HTTP client construction failures.
/// - Terminal read/write failures.
#[allow(clippy::future_not_send)]
pub async fn run(
    config_dir: &Path,
    settings: &Settings,
    api_key: ApiKey,
    color: bool,
) -> io::Result<()> {
    let client = SpoonacularClient::new(settings, api_key).map_err(io::Error::other)?;
    let favorites = FavoritesStore::new(settings.favorites_path(config_dir));
    tracing::info!(favorites = %favorites.path().display(), "starting menu");
    let options = ShellOptions {
        favorites,
        cache_ttl: settings.cache_ttl(),
        cache_capacity: settings.cache_capacity,
        painter: Painter::new(color),
        width: terminal_width(),
        message_delay: settings.message_delay(),
        clear_screen: interactive(),
        opener: Box::new(open_url),
    };
    // stdout stays unlocked so the interrupt handler can still print
    Shell::new(&client, io::stdin().lock(), io::stdout(), options)
        .run()
        .await
}
