//! Turning the API's HTML snippets into plain text.

use scraper::{Html, Selector};

/// What: Drop all tags from an HTML fragment and return its text.
///
/// Inputs:
/// - `html`: Fragment such as a recipe summary with `<b>` or `<a>` tags
///
/// Output:
/// - Text content with entities decoded and line breaks preserved.
#[must_use]
pub fn strip_markup(html: &str) -> String {
    if !html.contains('<') && !html.contains('&') {
        return html.to_string();
    }
    Html::parse_fragment(html).root_element().text().collect()
}

/// What: Split recipe instructions into numbered-list steps.
///
/// Inputs:
/// - `instructions`: Raw instructions, either an `<ol><li>` list or plain text
///
/// Output:
/// - Non-empty, trimmed steps in order; empty when there are no instructions.
///
/// Details:
/// - Each `<li>` becomes one step; without list items, each non-blank line of
///   the tag-stripped text is a step.
#[must_use]
pub fn instruction_steps(instructions: Option<&str>) -> Vec<String> {
    let Some(raw) = instructions.map(str::trim).filter(|s| !s.is_empty()) else {
        return Vec::new();
    };
    if raw.contains("<li")
        && let Ok(items) = Selector::parse("li")
    {
        let doc = Html::parse_fragment(raw);
        let steps: Vec<String> = doc
            .select(&items)
            .map(|li| collapse_whitespace(&li.text().collect::<String>()))
            .filter(|s| !s.is_empty())
            .collect();
        if !steps.is_empty() {
            return steps;
        }
    }
    strip_markup(raw)
        .lines()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Collapse runs of whitespace into single spaces and trim the ends.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
