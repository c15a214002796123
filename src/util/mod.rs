//! Small helpers for URL encoding, amount formatting, markup cleanup and
//! launching the system browser.

pub mod config;
pub mod fraction;
pub mod markup;

use std::fmt::Write;

pub use fraction::format_ingredient_amount;
pub use markup::{instruction_steps, strip_markup};

/// What: Percent-encode a string for use in URLs according to RFC 3986.
///
/// Inputs:
/// - `input`: String to encode.
///
/// Output:
/// - Returns a percent-encoded string where reserved characters are escaped.
///
/// Details:
/// - Unreserved characters (`A-Z`, `a-z`, `0-9`, `-`, `.`, `_`, `~`) are left as-is.
/// - Space is encoded as `%20` (not `+`), which `mailto:` bodies require.
/// - Operates on raw bytes; any non-ASCII bytes are hex-escaped.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char);
            }
            _ => {
                out.push('%');
                let _ = write!(out, "{b:02X}");
            }
        }
    }
    out
}

/// Extra arguments placed before the URL, per launcher.
type LauncherArgs = &'static [&'static str];

/// Pick the platform command that opens a URL in the default browser.
fn url_opener() -> Option<(&'static str, LauncherArgs)> {
    #[cfg(target_os = "windows")]
    {
        const START: LauncherArgs = &["/c", "start", ""];
        Some(("cmd", START))
    }
    #[cfg(not(target_os = "windows"))]
    {
        const NO_ARGS: LauncherArgs = &[];
        ["xdg-open", "open"]
            .into_iter()
            .find(|cmd| which::which(cmd).is_ok())
            .map(|cmd| (cmd, NO_ARGS))
    }
}

/// What: Open a URL in the default browser without blocking the menu.
///
/// Inputs:
/// - `url`: Link to open (http(s) or `mailto:`)
///
/// Output:
/// - `true` when a launcher process was spawned.
///
/// Details:
/// - Uses `xdg-open` (Linux) or `open` (macOS) when found on `PATH`, and
///   `cmd /c start` on Windows.
/// - Standard streams are detached so launcher chatter cannot garble the menu.
pub fn open_url(url: &str) -> bool {
    let Some((cmd, args)) = url_opener() else {
        tracing::warn!(url, "no browser launcher found on PATH");
        return false;
    };
    match std::process::Command::new(cmd)
        .args(args)
        .arg(url)
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .spawn()
    {
        Ok(_) => {
            tracing::info!(launcher = cmd, url, "opened share link");
            true
        }
        Err(e) => {
            tracing::warn!(launcher = cmd, url, error = %e, "failed to launch browser");
            false
        }
    }
}
