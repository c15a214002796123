use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cache::{CACHE_CAPACITY, CACHE_TTL_SECONDS};
use crate::util::config::{parse_key_value, skip_comment_or_empty};

/// Name of the settings file inside the config directory.
pub const SETTINGS_FILE: &str = "settings.conf";
/// Default favorites file name inside the config directory.
pub const FAVORITES_FILE: &str = "favorites.json";
/// Production API endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://api.spoonacular.com";

/// Skeleton written when no settings file exists yet.
pub const SETTINGS_SKELETON_CONTENT: &str = "# Recipe Finder settings\n\
#\n\
# Format: key = value\n\
# Lines starting with # are comments. Remove the # in front of a key to\n\
# override its default.\n\
#\n\
# API endpoint (the API key itself is read from SPOONACULAR_API_KEY or .env)\n\
# api_base_url = https://api.spoonacular.com\n\
#\n\
# Number of recipes requested per search\n\
# ingredient_results = 7\n\
# cuisine_results = 5\n\
#\n\
# In-memory response cache\n\
# cache_ttl_seconds = 3600\n\
# cache_capacity = 64\n\
#\n\
# HTTP request timeout\n\
# request_timeout_secs = 30\n\
#\n\
# Favorites file; relative paths are resolved against this directory\n\
# favorites_file = favorites.json\n\
#\n\
# How long status messages stay visible before the screen is redrawn\n\
# message_delay_ms = 1000\n";

/// User-tunable settings loaded from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the recipe API.
    pub api_base_url: String,
    /// Results requested by an ingredient search.
    pub ingredient_results: u32,
    /// Results requested by a cuisine search.
    pub cuisine_results: u32,
    /// Validity window of cached responses.
    pub cache_ttl_seconds: u64,
    /// Maximum number of cached responses.
    pub cache_capacity: usize,
    /// Per-request timeout.
    pub request_timeout_secs: u64,
    /// Favorites file override; relative to the config directory.
    pub favorites_file: Option<PathBuf>,
    /// Pause after transient status messages.
    pub message_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            ingredient_results: 7,
            cuisine_results: 5,
            cache_ttl_seconds: CACHE_TTL_SECONDS,
            cache_capacity: CACHE_CAPACITY,
            request_timeout_secs: 30,
            favorites_file: None,
            message_delay_ms: 1000,
        }
    }
}

impl Settings {
    /// Cache validity window as a `Duration`.
    #[must_use]
    pub const fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    /// Request timeout as a `Duration`.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Pause after status messages as a `Duration`.
    #[must_use]
    pub const fn message_delay(&self) -> Duration {
        Duration::from_millis(self.message_delay_ms)
    }

    /// What: Resolve the favorites file location.
    ///
    /// Inputs:
    /// - `config_dir`: Directory relative overrides are resolved against
    ///
    /// Output:
    /// - Absolute override as-is, relative override joined to `config_dir`, or
    ///   `config_dir/favorites.json`.
    #[must_use]
    pub fn favorites_path(&self, config_dir: &Path) -> PathBuf {
        match &self.favorites_file {
            Some(p) if p.is_absolute() => p.clone(),
            Some(p) => config_dir.join(p),
            None => config_dir.join(FAVORITES_FILE),
        }
    }
}

/// Parse a positive integer, logging values that do not fit.
fn positive<T: std::str::FromStr + PartialOrd + Default>(key: &str, val: &str) -> Option<T> {
    match val.parse::<T>() {
        Ok(v) if v > T::default() => Some(v),
        _ => {
            tracing::debug!(key, value = val, "ignoring invalid settings value");
            None
        }
    }
}

/// What: Parse settings file content on top of the defaults.
///
/// Inputs:
/// - `content`: Text of a `settings.conf` file
///
/// Output:
/// - `Settings` with every recognized, valid key applied.
///
/// Details:
/// - Unknown keys and invalid values are skipped with a debug log, so a typo
///   never prevents startup.
#[must_use]
pub fn parse_settings(content: &str) -> Settings {
    let mut out = Settings::default();
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((key, val)) = parse_key_value(line) else {
            continue;
        };
        match key.as_str() {
            "api_base_url" | "base_url" => {
                let url = val.trim_end_matches('/');
                if url.starts_with("http://") || url.starts_with("https://") {
                    out.api_base_url = url.to_string();
                } else {
                    tracing::debug!(value = %val, "ignoring api_base_url without http(s) scheme");
                }
            }
            "ingredient_results" => {
                if let Some(v) = positive::<u32>(&key, &val) {
                    out.ingredient_results = v;
                }
            }
            "cuisine_results" => {
                if let Some(v) = positive::<u32>(&key, &val) {
                    out.cuisine_results = v;
                }
            }
            "cache_ttl_seconds" | "cache_ttl" => {
                if let Some(v) = positive::<u64>(&key, &val) {
                    out.cache_ttl_seconds = v;
                }
            }
            "cache_capacity" => {
                if let Some(v) = positive::<usize>(&key, &val) {
                    out.cache_capacity = v;
                }
            }
            "request_timeout_secs" | "request_timeout" => {
                if let Some(v) = positive::<u64>(&key, &val) {
                    out.request_timeout_secs = v;
                }
            }
            "favorites_file" | "favorites_path" => {
                if !val.is_empty() {
                    out.favorites_file = Some(PathBuf::from(val));
                }
            }
            "message_delay_ms" => {
                if let Ok(v) = val.parse::<u64>() {
                    out.message_delay_ms = v;
                }
            }
            _ => tracing::debug!(key = %key, "ignoring unknown settings key"),
        }
    }
    out
}

/// What: Load `settings.conf` from `config_dir`, writing a skeleton when missing.
///
/// Inputs:
/// - `config_dir`: Resolved configuration directory
///
/// Output:
/// - Parsed settings, or defaults when the file cannot be read.
#[must_use]
pub fn load_settings(config_dir: &Path) -> Settings {
    let path = config_dir.join(SETTINGS_FILE);
    if !path.is_file() {
        match fs::write(&path, SETTINGS_SKELETON_CONTENT) {
            Ok(()) => tracing::info!(path = %path.display(), "wrote settings skeleton"),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to write settings skeleton");
            }
        }
        return Settings::default();
    }
    match fs::read_to_string(&path) {
        Ok(content) => parse_settings(&content),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read settings; using defaults");
            Settings::default()
        }
    }
}
