//! Query bar widget: filter selector + keyword input above the results.
//!
//! # Editing
//!
//! - `Char(c)` inserts at the cursor.
//! - `Backspace` deletes the character before the cursor.
//! - `Nav(Left)` / `Nav(Right)` move the cursor.
//! - `Nav(Up)` / `Nav(Down)`, `[` / `]` cycle the filter field.
//! - `Enter` submits; the app shell handles that.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use mdu_core::FilterField;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

/// Width of the filter selector, borders excluded.
const SELECTOR_WIDTH: u16 = 22;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct QueryBarState {
    /// The keyword typed by the user.
    pub keyword: String,
    /// Byte offset of the cursor within `keyword`.
    pub cursor: usize,
    /// Column the keyword is matched against.
    pub filter: FilterField,
}

impl QueryBarState {
    pub fn new(filter: FilterField) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    /// Handle a key event from the app shell. Unrelated events are ignored.
    pub fn handle(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Char(c) => {
                self.keyword.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                tracing::debug!(keyword = %self.keyword, cursor = self.cursor, "query: char inserted");
            }
            AppEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = self.prev_boundary();
                    self.keyword.remove(prev);
                    self.cursor = prev;
                    tracing::debug!(keyword = %self.keyword, cursor = self.cursor, "query: backspace");
                }
            }
            AppEvent::Nav(Direction::Left) => {
                if self.cursor > 0 {
                    self.cursor = self.prev_boundary();
                }
            }
            AppEvent::Nav(Direction::Right) => {
                if self.cursor < self.keyword.len() {
                    self.cursor = self.keyword[self.cursor..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| self.cursor + i)
                        .unwrap_or(self.keyword.len());
                }
            }
            AppEvent::Nav(Direction::Down) | AppEvent::FilterNext => {
                self.filter = self.filter.next();
                tracing::debug!(filter = %self.filter, "query: filter changed");
            }
            AppEvent::Nav(Direction::Up) | AppEvent::FilterPrev => {
                self.filter = self.filter.prev();
                tracing::debug!(filter = %self.filter, "query: filter changed");
            }
            _ => {}
        }
    }

    /// Clear the keyword, keeping the selected filter.
    pub fn clear(&mut self) {
        self.keyword.clear();
        self.cursor = 0;
    }

    fn prev_boundary(&self) -> usize {
        self.keyword[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct QueryBar<'a> {
    state: &'a QueryBarState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> QueryBar<'a> {
    pub fn new(state: &'a QueryBarState, focused: bool, theme: &'a Theme) -> Self {
        Self { state, focused, theme }
    }

    /// Absolute terminal position of the text cursor within this widget's
    /// rendered area. Pass to `frame.set_cursor_position()` after rendering.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        // Border + selector + separator come before the keyword text.
        let col = self.state.keyword[..self.state.cursor].chars().count() as u16;
        let x = (area.x + 1 + SELECTOR_WIDTH + 1 + col).min(area.right().saturating_sub(2));
        (x, area.y + 1)
    }
}

impl Widget for QueryBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title("Search")
            .border_style(self.theme.border(self.focused));

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(LayoutDir::Horizontal)
            .constraints([Constraint::Length(SELECTOR_WIDTH + 1), Constraint::Fill(1)])
            .split(inner);

        // Selector:  ◂ Operating System ▸
        let selector = Line::from(vec![
            Span::styled("◂ ", Style::default().add_modifier(Modifier::DIM)),
            Span::styled(self.state.filter.label(), self.theme.label),
            Span::styled(" ▸", Style::default().add_modifier(Modifier::DIM)),
        ]);
        Paragraph::new(selector).render(chunks[0], buf);

        let keyword = if self.state.keyword.is_empty() && !self.focused {
            Line::from(Span::styled(
                "Search by Keyword",
                Style::default().add_modifier(Modifier::DIM),
            ))
        } else {
            Line::from(self.state.keyword.as_str())
        };
        Paragraph::new(keyword).render(chunks[1], buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_and_backspace_handle_multibyte() {
        let mut s = QueryBarState::default();
        for c in "Zé".chars() {
            s.handle(&AppEvent::Char(c));
        }
        assert_eq!(s.keyword, "Zé");
        assert_eq!(s.cursor, 3);
        s.handle(&AppEvent::Backspace);
        assert_eq!(s.keyword, "Z");
        assert_eq!(s.cursor, 1);
    }

    #[test]
    fn cursor_moves_and_inserts_mid_string() {
        let mut s = QueryBarState::default();
        for c in "ac".chars() {
            s.handle(&AppEvent::Char(c));
        }
        s.handle(&AppEvent::Nav(Direction::Left));
        s.handle(&AppEvent::Char('b'));
        assert_eq!(s.keyword, "abc");
        s.handle(&AppEvent::Nav(Direction::Right));
        s.handle(&AppEvent::Nav(Direction::Right));
        assert_eq!(s.cursor, 3);
    }

    #[test]
    fn filter_cycles_with_arrows_and_brackets() {
        let mut s = QueryBarState::new(FilterField::DeviceModel);
        s.handle(&AppEvent::Nav(Direction::Down));
        assert_eq!(s.filter, FilterField::Gender);
        s.handle(&AppEvent::FilterNext);
        assert_eq!(s.filter, FilterField::OperatingSystem);
        s.handle(&AppEvent::FilterPrev);
        s.handle(&AppEvent::Nav(Direction::Up));
        assert_eq!(s.filter, FilterField::DeviceModel);
    }

    #[test]
    fn clear_keeps_filter() {
        let mut s = QueryBarState::new(FilterField::Gender);
        s.handle(&AppEvent::Char('m'));
        s.clear();
        assert!(s.keyword.is_empty());
        assert_eq!(s.cursor, 0);
        assert_eq!(s.filter, FilterField::Gender);
    }
}
