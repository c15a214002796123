//! Terminal presentation: widget rendering, recipe views and message styling.

pub mod render;
pub mod views;

use crossterm::style::{Color, Stylize, style};

/// Message colors for the menu; plain text when color is disabled.
#[derive(Clone, Copy, Debug)]
pub struct Painter {
    /// Emit ANSI styling.
    color: bool,
}

impl Painter {
    /// Painter that styles output only when `color` is true.
    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    /// Apply `fg` (and bold when asked) if color is enabled.
    fn paint(self, text: &str, fg: Color, bold: bool) -> String {
        if !self.color {
            return text.to_string();
        }
        let styled = style(text).with(fg);
        if bold {
            styled.bold().to_string()
        } else {
            styled.to_string()
        }
    }

    /// Failure or invalid-input message.
    #[must_use]
    pub fn error(self, text: &str) -> String {
        self.paint(text, Color::Red, true)
    }

    /// Confirmation message.
    #[must_use]
    pub fn success(self, text: &str) -> String {
        self.paint(text, Color::Green, true)
    }

    /// Input prompt.
    #[must_use]
    pub fn prompt(self, text: &str) -> String {
        self.paint(text, Color::Yellow, true)
    }

    /// Section heading or label.
    #[must_use]
    pub fn heading(self, text: &str) -> String {
        self.paint(text, Color::Cyan, true)
    }

    /// Low-key status line.
    #[must_use]
    pub fn note(self, text: &str) -> String {
        self.paint(text, Color::Green, false)
    }
}

#[cfg(test)]
mod tests {
    use super::Painter;

    #[test]
    fn plain_painter_leaves_text_untouched() {
        let p = Painter::new(false);
        assert_eq!(p.error("bad"), "bad");
        assert_eq!(p.prompt("> "), "> ");
    }

    #[test]
    fn color_painter_emits_ansi() {
        let p = Painter::new(true);
        let out = p.error("bad");
        assert!(out.contains("bad"));
        // crossterm honours NO_COLOR even for explicit styling
        if std::env::var_os("NO_COLOR").is_none() {
            assert!(out.starts_with('\u{1b}'));
        }
    }
}
