//! Rendering ratatui widgets to plain text lines.
//!
//! The menu prints to a scrolling terminal instead of owning the screen, so
//! widgets are drawn into an off-screen [`Buffer`] and printed row by row.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// What: Draw `widget` into a `width` x `height` buffer and return its rows.
///
/// Output:
/// - One string per row with trailing spaces removed.
#[must_use]
pub fn render_widget<W: Widget>(widget: W, width: u16, height: u16) -> Vec<String> {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    widget.render(area, &mut buf);
    buffer_lines(&buf)
}

/// What: Convert buffer rows into strings.
///
/// Details:
/// - Cells hidden behind a wide grapheme are skipped so emoji and CJK text do
///   not gain a stray space.
#[must_use]
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    let mut lines = Vec::with_capacity(usize::from(area.height));
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        let mut hidden = 0usize;
        for x in area.left()..area.right() {
            if hidden > 0 {
                hidden -= 1;
                continue;
            }
            let symbol = buf[(x, y)].symbol();
            line.push_str(symbol);
            hidden = symbol.width().saturating_sub(1);
        }
        lines.push(line.trim_end().to_string());
    }
    lines
}

/// What: Greedy word wrap measured in terminal columns.
///
/// Inputs:
/// - `text`: Text to wrap; existing line breaks are kept
/// - `width`: Maximum columns per line (at least 1)
///
/// Output:
/// - Wrapped lines; words longer than `width` are split by character.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0usize;
        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let needed = if line.is_empty() { word_width } else { word_width + 1 };
            if line_width + needed <= width {
                if !line.is_empty() {
                    line.push(' ');
                }
                line.push_str(word);
                line_width += needed;
                continue;
            }
            if !line.is_empty() {
                out.push(std::mem::take(&mut line));
                line_width = 0;
            }
            if word_width <= width {
                line.push_str(word);
                line_width = word_width;
            } else {
                for ch in word.chars() {
                    let w = ch.width().unwrap_or(0);
                    if line_width + w > width && !line.is_empty() {
                        out.push(std::mem::take(&mut line));
                        line_width = 0;
                    }
                    line.push(ch);
                    line_width += w;
                }
            }
        }
        out.push(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::{Block, Paragraph};

    #[test]
    fn bordered_paragraph_renders_as_box() {
        let lines = render_widget(
            Paragraph::new("hi").block(Block::bordered().title("T")),
            6,
            3,
        );
        assert_eq!(lines, vec!["┌T───┐", "│hi  │", "└────┘"]);
    }

    #[test]
    fn wide_glyphs_do_not_gain_spaces() {
        let lines = render_widget(Paragraph::new("✅ ok"), 6, 1);
        assert_eq!(lines, vec!["✅ ok"]);
    }

    #[test]
    fn wrap_breaks_on_words_and_splits_long_words() {
        assert_eq!(
            wrap_text("one two three", 7),
            vec!["one two".to_string(), "three".to_string()]
        );
        assert_eq!(
            wrap_text("abcdefgh", 3),
            vec!["abc".to_string(), "def".to_string(), "gh".to_string()]
        );
        assert_eq!(wrap_text("a\n\nb", 5), vec!["a", "", "b"]);
    }
}
