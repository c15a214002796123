//! Configuration: directory layout, `settings.conf`, and the API key.

mod paths;
mod settings;

pub use paths::{logs_dir, resolve_config_dir};
pub use settings::{
    DEFAULT_API_BASE_URL, FAVORITES_FILE, SETTINGS_FILE, SETTINGS_SKELETON_CONTENT, Settings,
    load_settings, parse_settings,
};

use std::fmt;
use std::path::Path;

use zeroize::Zeroizing;

/// Environment variable holding the Spoonacular API key.
pub const API_KEY_ENV: &str = "SPOONACULAR_API_KEY";

/// API key kept in a buffer that is wiped on drop.
///
/// `Debug` never prints the secret, so keys cannot leak into logs.
#[derive(Clone)]
pub struct ApiKey(Zeroizing<String>);

impl ApiKey {
    /// Wrap a key; blank input yields `None`.
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(Zeroizing::new(trimmed.to_string())))
        }
    }

    /// The key text, for building request URLs.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// What: Load `.env` files and read the API key from the environment.
///
/// Inputs:
/// - `config_dir`: Directory whose `.env` takes precedence over the working directory's
///
/// Output:
/// - `Some(ApiKey)` when `SPOONACULAR_API_KEY` is set and non-blank.
///
/// Details:
/// - Variables already present in the process environment win over `.env` entries.
#[must_use]
pub fn load_api_key(config_dir: &Path) -> Option<ApiKey> {
    let env_file = config_dir.join(".env");
    if env_file.is_file() {
        match dotenv::from_path(&env_file) {
            Ok(()) => tracing::debug!(path = %env_file.display(), "loaded .env"),
            Err(e) => tracing::warn!(path = %env_file.display(), error = %e, "failed to load .env"),
        }
    } else if let Ok(path) = dotenv::dotenv() {
        tracing::debug!(path = %path.display(), "loaded .env");
    }
    std::env::var(API_KEY_ENV).ok().as_deref().and_then(ApiKey::new)
}

#[cfg(test)]
mod tests {
    use super::ApiKey;

    #[test]
    fn blank_keys_are_rejected() {
        assert!(ApiKey::new("").is_none());
        assert!(ApiKey::new("   ").is_none());
    }

    #[test]
    fn key_is_trimmed_and_redacted_in_debug() {
        let key = ApiKey::new(" abc123 \n").expect("valid key");
        assert_eq!(key.expose(), "abc123");
        assert_eq!(format!("{key:?}"), "ApiKey(***)");
    }
}
