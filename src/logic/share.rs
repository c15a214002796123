use crate::state::Recipe;
use crate::util::percent_encode;

/// Where a recipe link can be shared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SharePlatform {
    /// Facebook sharer dialog.
    Facebook,
    /// Twitter/X intent.
    Twitter,
    /// WhatsApp web send.
    WhatsApp,
    /// Default mail client via `mailto:`.
    Email,
}

impl SharePlatform {
    /// Platforms in menu order.
    pub const ALL: [Self; 4] = [Self::Facebook, Self::Twitter, Self::WhatsApp, Self::Email];

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Facebook => "Share on Facebook",
            Self::Twitter => "Share on Twitter",
            Self::WhatsApp => "Share on WhatsApp",
            Self::Email => "Share via Email",
        }
    }
}

/// What: Plain-text e-mail body advertising the recipe.
///
/// Details:
/// - Uses the first cuisine tag, or "delicious" when there is none.
#[must_use]
pub fn email_body(recipe: &Recipe, source_url: &str) -> String {
    let cuisine = recipe.cuisines.first().map_or("delicious", String::as_str);
    let minutes = recipe
        .ready_in_minutes
        .map_or_else(|| "N/A".to_string(), |m| m.to_string());
    format!(
        "Check out this {cuisine} recipe for '{}'!\nIt's ready in just {minutes} minutes.\n\nGet the full recipe here: {source_url}",
        recipe.title
    )
}

/// What: Build the share link for `platform`.
///
/// Inputs:
/// - `recipe`: Recipe being shared
/// - `platform`: Target platform
///
/// Output:
/// - `Some(url)` to open in the browser; `None` when the recipe has no source URL.
///
/// Details:
/// - Every interpolated value is percent-encoded.
#[must_use]
pub fn share_url(recipe: &Recipe, platform: SharePlatform) -> Option<String> {
    let source = recipe
        .source_url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())?;
    let url = percent_encode(source);
    let title = percent_encode(&recipe.title);
    Some(match platform {
        SharePlatform::Facebook => format!("https://www.facebook.com/sharer/sharer.php?u={url}"),
        SharePlatform::Twitter => format!("https://twitter.com/intent/tweet?url={url}&text={title}"),
        SharePlatform::WhatsApp => format!("https://api.whatsapp.com/send?text={title}%20{url}"),
        SharePlatform::Email => format!(
            "mailto:?subject={title}&body={}",
            percent_encode(&email_body(recipe, source))
        ),
    })
}
