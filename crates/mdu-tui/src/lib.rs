//! mdu TUI: ratatui application shell around the search controller.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use mdu_core::{config::Config, SearchApi, SearchController, SessionStore};
use tokio::runtime::Handle;

/// Run the TUI until the user quits. Searches are spawned on `runtime`.
pub fn run<A>(
    config: Config,
    api: A,
    store: impl SessionStore + 'static,
    runtime: Handle,
) -> anyhow::Result<()>
where
    A: SearchApi + Send + Sync + 'static,
{
    let theme = theme::Theme::by_name(&config.ui.theme);
    let controller = SearchController::new(store);
    App::new(config, theme, api, controller, runtime).run()
}
