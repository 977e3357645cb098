//! Single-line text field for typing a voice ID.
//!
//! Cursor is tracked as a byte offset and always sits on a char boundary.
//! Rendering scrolls horizontally so the cursor stays visible in narrow
//! fields. Columns are terminal display columns, so wide glyphs count twice.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::theme;

#[derive(Debug, Default)]
pub struct VoiceIdField {
    content: String,
    cursor: usize,
}

impl VoiceIdField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.content.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.content.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.content.len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn text(&self) -> &str {
        &self.content
    }

    /// The draft with surrounding whitespace removed.
    pub fn trimmed(&self) -> &str {
        self.content.trim()
    }

    /// Whether the draft holds anything besides whitespace.
    pub fn has_value(&self) -> bool {
        !self.trimmed().is_empty()
    }

    /// Cursor position in display columns from the start.
    pub fn cursor_column(&self) -> usize {
        self.content[..self.cursor].width()
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.content[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.content[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }

    /// Text visible in a field `width` columns wide, plus the cursor
    /// column within that window.
    pub fn visible_window(&self, width: usize) -> (String, usize) {
        if width == 0 {
            return (String::new(), 0);
        }
        let col = self.cursor_column();
        let mut chars = self.content.chars();
        let mut scrolled = 0;
        // Keep one spare column for the cursor at end of text
        while col + 1 > scrolled + width {
            match chars.next() {
                Some(c) => scrolled += c.width().unwrap_or(0),
                None => break,
            }
        }
        let mut used = 0;
        let visible = chars
            .take_while(|c| {
                used += c.width().unwrap_or(0);
                used <= width
            })
            .collect();
        (visible, col.saturating_sub(scrolled))
    }

    /// Render as a bordered input box. Places the terminal cursor when
    /// `focused`.
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool, placeholder: &str) {
        let border_style = if focused {
            theme::border_focused()
        } else {
            theme::border_default()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.content.is_empty() {
            let line = Line::from(Span::styled(placeholder.to_string(), theme::dim()));
            frame.render_widget(Paragraph::new(line), inner);
            if focused {
                frame.set_cursor_position((inner.x, inner.y));
            }
            return;
        }

        let (visible, cursor_col) = self.visible_window(inner.width as usize);
        let line = Line::from(Span::styled(visible, Style::default().fg(theme::TEXT)));
        frame.render_widget(Paragraph::new(line), inner);

        if focused {
            frame.set_cursor_position((inner.x + cursor_col as u16, inner.y));
        }
    }
}
