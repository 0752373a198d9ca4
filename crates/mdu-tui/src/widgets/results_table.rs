//! Results table widget: the scrollable record list below the stat cards.
//!
//! # Navigation (when pane is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Move cursor up one row |
//! | `↓` / `j` | Move cursor down one row |
//! | `PageUp` / `Ctrl+u` | Scroll up one page |
//! | `PageDown` / `Ctrl+d` | Scroll down one page |
//! | `g` / `G` | Jump to first / last row |
//!
//! `offset` is the index of the first visible row and `cursor` the absolute
//! index of the highlighted one. The cursor is always kept inside the
//! visible window; moving it past an edge scrolls.

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use mdu_core::stats::format_row;
use mdu_core::Record;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::Line,
    widgets::{
        Block, Row, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Table,
        Widget,
    },
};

/// Column headers and widths, in `Field::ALL` order.
const COLUMNS: [(&str, u16); 11] = [
    ("User ID", 7),
    ("Device Model", 18),
    ("Operating System", 9),
    ("App Usage (min/day)", 10),
    ("Screen On (h/day)", 9),
    ("Battery (mAh/day)", 10),
    ("Apps", 5),
    ("Data (MB/day)", 9),
    ("Age", 4),
    ("Gender", 7),
    ("Behavior Class", 8),
];

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct ResultsTableState {
    /// Index of the first visible row.
    pub offset: usize,
    /// Absolute index of the highlighted row.
    pub cursor: usize,
    /// Cached from the last render so `handle()` can page by screenfuls.
    last_height: Cell<usize>,
}

impl Default for ResultsTableState {
    fn default() -> Self {
        Self {
            offset: 0,
            cursor: 0,
            last_height: Cell::new(20),
        }
    }
}

impl ResultsTableState {
    fn height(&self) -> usize {
        self.last_height.get().max(1)
    }

    /// Back to the top; called whenever the result set is replaced.
    pub fn reset(&mut self) {
        self.offset = 0;
        self.cursor = 0;
    }

    /// Handle a navigation event for a table of `total` rows.
    pub fn handle(&mut self, event: &AppEvent, total: usize) {
        if total == 0 {
            self.reset();
            return;
        }
        let last = total - 1;

        match event {
            AppEvent::Nav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            AppEvent::Nav(Direction::Down) => {
                self.cursor = (self.cursor + 1).min(last);
            }
            AppEvent::ScrollUp => {
                self.cursor = self.cursor.saturating_sub(self.height());
            }
            AppEvent::ScrollDown => {
                self.cursor = (self.cursor + self.height()).min(last);
            }
            AppEvent::ScrollToTop => {
                self.cursor = 0;
            }
            AppEvent::ScrollToBottom => {
                self.cursor = last;
            }
            _ => return,
        }
        self.cursor = self.cursor.min(last);
        self.follow_cursor();
        tracing::debug!(cursor = self.cursor, offset = self.offset, "table: moved");
    }

    fn follow_cursor(&mut self) {
        let height = self.height();
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + height {
            self.offset = self.cursor + 1 - height;
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct ResultsTable<'a> {
    state: &'a ResultsTableState,
    records: &'a [Record],
    focused: bool,
    theme: &'a Theme,
}

impl<'a> ResultsTable<'a> {
    pub fn new(
        state: &'a ResultsTableState,
        records: &'a [Record],
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self { state, records, focused, theme }
    }
}

impl Widget for ResultsTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title("Records")
            .border_style(self.theme.border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        // One row for the header.
        let height = (inner.height as usize).saturating_sub(1);
        self.state.last_height.set(height);

        let total = self.records.len();
        let start = self.state.offset.min(total);
        let end = (start + height).min(total);

        let rows: Vec<Row> = self.records[start..end]
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let index = start + i;
                let style = if self.focused && index == self.state.cursor {
                    self.theme.table_selected
                } else if index % 2 == 1 {
                    self.theme.table_row_alt
                } else {
                    ratatui::style::Style::default()
                };
                Row::new(format_row(record)).style(style)
            })
            .collect();

        let header = Row::new(COLUMNS.iter().map(|(title, _)| Line::from(*title)))
            .style(self.theme.table_header);
        let widths = COLUMNS.iter().map(|(_, w)| Constraint::Length(*w));

        let text_area = Rect { width: inner.width.saturating_sub(1), ..inner };
        let sb_area = Rect {
            x: inner.right().saturating_sub(1),
            width: 1,
            ..inner
        };

        Widget::render(
            Table::new(rows, widths).header(header).column_spacing(1),
            text_area,
            buf,
        );

        if total > height {
            let mut sb_state = ScrollbarState::new(total)
                .position(start)
                .viewport_content_length(height);
            StatefulWidget::render(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(None)
                    .end_symbol(None),
                sb_area,
                buf,
                &mut sb_state,
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
