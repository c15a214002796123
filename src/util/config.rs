//! Configuration file parsing utilities.
//!
//! This module provides helpers for parsing `key = value` configuration files
//! with comment skipping.

/// What: Check if a line should be skipped (empty or comment).
///
/// Inputs:
/// - `line`: Line to check
///
/// Output:
/// - `true` if the line should be skipped, `false` otherwise
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
#[must_use]
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Parse a key-value pair from a line.
///
/// Inputs:
/// - `line`: Line containing key=value format
///
/// Output:
/// - `Some((key, value))` if parsing succeeds, `None` otherwise
///
/// Details:
/// - Splits on the first `=` character.
/// - Keys are lowercased with `.`, `-` and spaces folded to `_`.
/// - A ` #` sequence in the value starts an inline comment.
#[must_use]
pub fn parse_key_value(line: &str) -> Option<(String, String)> {
    let (raw_key, raw_value) = line.trim().split_once('=')?;
    let key = raw_key
        .trim()
        .to_lowercase()
        .replace(['.', '-', ' '], "_");
    if key.is_empty() {
        return None;
    }
    let value = raw_value
        .split_once(" #")
        .map_or(raw_value, |(v, _)| v)
        .trim()
        .to_string();
    Some((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_blanks_are_skipped() {
        assert!(skip_comment_or_empty("   "));
        assert!(skip_comment_or_empty("# note"));
        assert!(skip_comment_or_empty("  // note"));
        assert!(skip_comment_or_empty("; note"));
        assert!(!skip_comment_or_empty("cache_ttl_seconds = 10"));
    }

    #[test]
    fn key_values_are_normalized() {
        assert_eq!(
            parse_key_value(" Cache-TTL.Seconds = 120 # two minutes"),
            Some(("cache_ttl_seconds".to_string(), "120".to_string()))
        );
        assert_eq!(
            parse_key_value("api_base_url=https://example.com/a=b"),
            Some(("api_base_url".to_string(), "https://example.com/a=b".to_string()))
        );
        assert_eq!(parse_key_value("no equals sign"), None);
        assert_eq!(parse_key_value(" = value"), None);
    }
}
