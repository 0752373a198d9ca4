//! `:` commands accepted by the command bar.
//!
//! | Command | Action |
//! |---------|--------|
//! | `q`, `quit` | Quit the application |
//! | `help` | Toggle the help popup |
//! | `theme <name>` | Switch theme (`default`, `gruvbox`) |
//! | `home`, `search` | Switch route |
//! | `filter <name>` | Select the filter field (`model`, `gender`, `os`, `class`) |
//! | `clear` | Clear the keyword in the query bar |

use crate::{app::AppState, event::Route, theme::Theme};
use mdu_core::FilterField;

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Theme(String),
    Route(Route),
    Filter(FilterField),
    Clear,
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// An empty string returns `Err("")` as a sentinel meaning "close
    /// without acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "home" => Ok(Command::Route(Route::Home)),
            "search" => Ok(Command::Route(Route::Search)),
            "clear" => Ok(Command::Clear),
            "theme" => {
                if rest.is_empty() {
                    Err("usage: theme <default|gruvbox>".to_string())
                } else {
                    Ok(Command::Theme(rest.to_string()))
                }
            }
            "filter" => {
                if rest.is_empty() {
                    return Err("usage: filter <model|gender|os|class>".to_string());
                }
                rest.parse::<FilterField>()
                    .map(Command::Filter)
                    .map_err(|_| format!("unknown filter: {rest}"))
            }
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// Execute a parsed [`Command`] against the application state.
pub fn execute_command(s: &mut AppState, cmd: Command) {
    match cmd {
        Command::Quit => {
            s.quit = true;
        }
        Command::Help => {
            s.show_help = !s.show_help;
        }
        Command::Theme(name) => {
            s.theme = Theme::by_name(&name);
        }
        Command::Route(route) => {
            s.navigate(route);
        }
        Command::Filter(field) => {
            s.query.filter = field;
        }
        Command::Clear => {
            s.query.clear();
        }
    }
}
