//! Ratatui widgets for the mdu TUI.

pub mod command_bar;
pub mod help;
pub mod home;
pub mod query_bar;
pub mod results_table;
pub mod summary;
pub mod tab_bar;
