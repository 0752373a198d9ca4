//! Tab bar widget: the route strip at the top of the screen.

use crate::event::Route;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Tabs, Widget},
};

/// Routes in tab order.
pub const ROUTES: [Route; 2] = [Route::Home, Route::Search];

/// Renders the 1-line strip of routes at the top of the screen.
///
/// The active route is highlighted and its path shown next to it.
/// Keybinding hints (`q:quit  ?:help`) are right-aligned in the same row.
pub struct TabBar<'a> {
    active: Route,
    theme: &'a Theme,
}

impl<'a> TabBar<'a> {
    pub fn new(active: Route, theme: &'a Theme) -> Self {
        Self { active, theme }
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let labels: Vec<Line> = ROUTES
            .iter()
            .map(|route| {
                if *route == self.active {
                    Line::from(format!(" {} {} ", route.label(), route.path()))
                } else {
                    Line::from(format!(" {} ", route.label()))
                }
            })
            .collect();

        let selected = ROUTES.iter().position(|r| *r == self.active).unwrap_or(0);

        Tabs::new(labels)
            .select(selected)
            .highlight_style(self.theme.tab_active)
            .divider("")
            .render(area, buf);

        let hint = " q:quit  ?:help ";
        let hint_x = area.right().saturating_sub(hint.len() as u16);
        buf.set_string(
            hint_x,
            area.y,
            hint,
            Style::default().add_modifier(Modifier::DIM),
        );
    }
}
