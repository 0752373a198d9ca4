//! Home page: static description of the user-behaviour dataset.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph, Widget, Wrap},
};

pub const DATASET_URL: &str = "https://www.kaggle.com/datasets/valakhorasani/mobile-device-usage-and-user-behavior-dataset?resource=download";

const INTRO: &str = "This dataset provides a comprehensive analysis of mobile device usage \
patterns and user behavior classification. It contains 700 samples of user data, including \
metrics such as app usage time, screen-on time, battery drain, and data consumption. Each \
entry is categorized into one of five user behavior classes, ranging from light to extreme \
usage, allowing for insightful analysis and modeling.";

/// (column, description) pairs for the key features list.
const FEATURES: [(&str, &str); 11] = [
    ("User ID", "Unique identifier for each user."),
    ("Device Model", "Model of the user's smartphone."),
    ("Operating System", "The OS of the device (iOS or Android)."),
    ("App Usage Time", "Daily time spent on mobile applications, measured in minutes."),
    ("Screen On Time", "Average hours per day the screen is active."),
    ("Battery Drain", "Daily battery consumption in mAh."),
    ("Number of Apps Installed", "Total apps available on the device."),
    ("Data Usage", "Daily mobile data consumption in megabytes."),
    ("Age", "Age of the user."),
    ("Gender", "Gender of the user (Male or Female)."),
    (
        "User Behavior Class",
        "Classification of user behavior based on usage patterns (1 to 5).",
    ),
];

pub struct HomePage<'a> {
    theme: &'a Theme,
}

impl<'a> HomePage<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled("User Behavior Dataset", self.theme.heading)),
            Line::from(""),
            Line::from(INTRO),
            Line::from(""),
            Line::from(Span::styled("Key Features:", self.theme.heading)),
            Line::from(""),
        ];
        lines.extend(FEATURES.iter().map(|(name, desc)| {
            Line::from(vec![
                Span::raw("  • "),
                Span::styled(format!("{name}:"), self.theme.label),
                Span::raw(format!(" {desc}")),
            ])
        }));
        lines.push(Line::from(""));
        lines.push(Line::from("Sourced from this Kaggle Dataset:"));
        lines.push(Line::from(Span::styled(DATASET_URL, self.theme.link)));
        lines
    }
}

impl Widget for HomePage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title("Home")
            .border_style(self.theme.border_unfocused)
            .padding(Padding::horizontal(1));
        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
