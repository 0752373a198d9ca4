//! Status line and statistic cards shown above the results table.

use crate::theme::Theme;
use mdu_core::stats::{summarize, StatCard};
use mdu_core::SearchController;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction as LayoutDir, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

/// The one-line status message for the controller's current state.
pub fn status_text(controller: &SearchController) -> String {
    if controller.is_loading() {
        "Loading...".to_string()
    } else if controller.no_results() {
        "No Records To Display".to_string()
    } else {
        format!("Displaying {} Records", controller.results().len())
    }
}

pub struct StatusLine<'a> {
    controller: &'a SearchController,
    theme: &'a Theme,
}

impl<'a> StatusLine<'a> {
    pub fn new(controller: &'a SearchController, theme: &'a Theme) -> Self {
        Self { controller, theme }
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.controller.is_loading() {
            self.theme.status_loading
        } else if self.controller.no_results() {
            self.theme.status_empty
        } else {
            self.theme.status_success
        };
        let line = Line::from(Span::styled(status_text(self.controller), style));
        buf.set_line(area.x + 1, area.y, &line, area.width.saturating_sub(1));
    }
}

/// Four side-by-side statistic cards.
pub struct StatCards<'a> {
    cards: Vec<StatCard>,
    theme: &'a Theme,
}

impl<'a> StatCards<'a> {
    pub fn new(controller: &SearchController, theme: &'a Theme) -> Self {
        Self {
            cards: summarize(controller.results(), controller.no_results()),
            theme,
        }
    }
}

impl Widget for StatCards<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = Layout::default()
            .direction(LayoutDir::Horizontal)
            .constraints(vec![Constraint::Ratio(1, self.cards.len() as u32); self.cards.len()])
            .split(area);

        for (card, col) in self.cards.iter().zip(columns.iter()) {
            let block = Block::bordered()
                .title(Span::styled(card.title(), self.theme.card_title))
                .title_alignment(Alignment::Center)
                .border_style(self.theme.border_unfocused);
            let body = vec![
                Line::from(Span::styled(
                    format!("Average: {} {}", card.average, card.unit),
                    self.theme.card_value,
                )),
                Line::from(Span::styled(
                    format!("Median: {} {}", card.median, card.unit),
                    self.theme.card_value,
                )),
            ];
            Paragraph::new(body)
                .block(block)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(*col, buf);
        }
    }
}
