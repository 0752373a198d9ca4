//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic.
//!
//! Searches run on the tokio runtime behind the [`Handle`] passed to
//! [`App::new`]. Each finished request is sent back over an unbounded
//! channel and applied to the [`SearchController`] on the next loop turn;
//! submitting a new search aborts the previous task and the controller's
//! ticket check drops anything that still slips through.

use crate::{
    commands::{execute_command, Command},
    event::{self, AppEvent, Route},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        help::HelpPopup,
        home::HomePage,
        query_bar::{QueryBar, QueryBarState},
        results_table::{ResultsTable, ResultsTableState},
        summary::{StatCards, StatusLine},
        tab_bar::TabBar,
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use mdu_core::{config::Config, Record, SearchApi, SearchController, SearchError, SearchTicket};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use std::{io, sync::Arc, time::Duration};
use tokio::{
    runtime::Handle,
    sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
};

type Completion = (SearchTicket, Result<Vec<Record>, SearchError>);

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Filter selector and keyword input.
    Query,
    /// Results table.
    Records,
    /// Vim-style `:` command line is active.
    Command,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub route: Route,
    pub focus: Focus,
    /// Focus before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub query: QueryBarState,
    pub table: ResultsTableState,
    pub controller: SearchController,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    pub quit: bool,
}

impl AppState {
    pub fn new(config: Config, theme: Theme, controller: SearchController) -> Self {
        Self {
            route: Route::Home,
            focus: Focus::Records,
            prev_focus: Focus::Records,
            query: QueryBarState::new(config.ui.default_filter),
            table: ResultsTableState::default(),
            controller,
            theme,
            config,
            show_help: false,
            command_bar: CommandBarState::default(),
            quit: false,
        }
    }

    /// Switch route. Entering the search view mounts it afresh: the query bar
    /// and controller status reset, then the cached result set is restored.
    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        tracing::debug!(from = self.route.path(), to = route.path(), "navigate");
        self.route = route;
        match route {
            Route::Search => {
                self.controller.mount();
                self.query = QueryBarState::new(self.config.ui.default_filter);
                self.table.reset();
                self.focus = Focus::Query;
            }
            Route::Home => {
                self.focus = Focus::Records;
            }
        }
        self.prev_focus = self.focus;
    }

    fn is_insert_mode(&self) -> bool {
        self.focus == Focus::Command || (self.route == Route::Search && self.focus == Focus::Query)
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App<A> {
    state: AppState,
    api: Arc<A>,
    runtime: Handle,
    inflight: Option<JoinHandle<()>>,
    tx: UnboundedSender<Completion>,
    rx: UnboundedReceiver<Completion>,
}

impl<A> App<A>
where
    A: SearchApi + Send + Sync + 'static,
{
    pub fn new(
        config: Config,
        theme: Theme,
        api: A,
        controller: SearchController,
        runtime: Handle,
    ) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            state: AppState::new(config, theme, controller),
            api: Arc::new(api),
            runtime,
            inflight: None,
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        self.shutdown();
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            self.pump();

            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == crossterm::event::KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        // Use insert-mode mapping when a text widget is focused
                        let app_event = if self.state.is_insert_mode() {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                            self.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Start a search for the query bar's current filter and keyword.
    pub fn submit(&mut self) {
        let s = &mut self.state;
        let ticket = s.controller.begin_search(s.query.filter, s.query.keyword.clone());

        if let Some(previous) = self.inflight.take() {
            tracing::debug!("aborting superseded search task");
            previous.abort();
        }

        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        self.inflight = Some(self.runtime.spawn(async move {
            let outcome = api.search(ticket.filter, &ticket.query).await;
            // The receiver only goes away when the app is torn down.
            let _ = tx.send((ticket, outcome));
        }));
    }

    /// Apply every search completion that has arrived since the last call.
    pub fn pump(&mut self) {
        while let Ok((ticket, outcome)) = self.rx.try_recv() {
            self.apply(ticket, outcome);
        }
    }

    fn apply(&mut self, ticket: SearchTicket, outcome: Result<Vec<Record>, SearchError>) {
        if self.state.controller.complete(ticket, outcome) {
            self.state.table.reset();
            self.inflight = None;
        }
    }

    /// Unload the search view: abort any in-flight request and drop the
    /// cached result set.
    pub fn shutdown(&mut self) {
        if let Some(task) = self.inflight.take() {
            task.abort();
        }
        self.state.controller.clear_on_unload();
    }

    pub fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            match event {
                AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit => {
                    tracing::debug!("help popup closed");
                    s.show_help = false;
                }
                _ => {}
            }
            return;
        }

        // Command mode intercepts all events.
        if s.focus == Focus::Command {
            match event {
                AppEvent::Escape => {
                    tracing::debug!("command bar cancelled");
                    s.command_bar.clear();
                    s.focus = s.prev_focus;
                }
                AppEvent::Enter => {
                    let input = s.command_bar.input.clone();
                    match Command::parse(&input) {
                        Ok(cmd) => {
                            tracing::debug!(command = ?cmd, "executing command");
                            s.command_bar.clear();
                            s.focus = s.prev_focus;
                            execute_command(s, cmd);
                        }
                        Err(msg) if msg.is_empty() => {
                            s.command_bar.clear();
                            s.focus = s.prev_focus;
                        }
                        Err(msg) => {
                            s.command_bar.error = Some(msg);
                        }
                    }
                }
                AppEvent::Quit => {
                    s.quit = true;
                }
                other => s.command_bar.handle(&other),
            }
            return;
        }

        // Query bar owns the keyboard while focused on the search route.
        if s.route == Route::Search && s.focus == Focus::Query {
            match event {
                AppEvent::Enter => self.submit(),
                AppEvent::Escape | AppEvent::FocusNext => {
                    tracing::debug!("focus: Query -> Records");
                    s.focus = Focus::Records;
                }
                AppEvent::Quit => s.quit = true,
                AppEvent::Resize(_, _) => {}
                other => s.query.handle(&other),
            }
            return;
        }

        match event {
            AppEvent::Char('?') => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }

            AppEvent::Char(':') => {
                tracing::debug!(prev_focus = ?s.focus, "entering command mode");
                s.prev_focus = s.focus;
                s.command_bar.clear();
                s.focus = Focus::Command;
            }

            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }

            AppEvent::Route(route) => s.navigate(route),

            AppEvent::QueryFocus | AppEvent::FocusNext if s.route == Route::Search => {
                tracing::debug!("focus -> Query");
                s.focus = Focus::Query;
            }

            // Filter cycling works regardless of focus
            AppEvent::FilterNext | AppEvent::FilterPrev if s.route == Route::Search => {
                s.query.handle(&event);
            }

            AppEvent::Enter if s.route == Route::Search => self.submit(),

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other if s.route == Route::Search => {
                let total = s.controller.results().len();
                s.table.handle(&other, total);
            }

            _ => {}
        }
    }
}

#[cfg(test)]
impl<A> App<A>
where
    A: SearchApi + Send + Sync + 'static,
{
    /// Wait for the next search completion and apply it.
    async fn settle(&mut self) {
        if let Some((ticket, outcome)) = self.rx.recv().await {
            self.apply(ticket, outcome);
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

pub fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let outer = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([Constraint::Length(1), Constraint::Fill(1)])
        .split(area);

    frame.render_widget(TabBar::new(state.route, &state.theme), outer[0]);

    match state.route {
        Route::Home => frame.render_widget(HomePage::new(&state.theme), outer[1]),
        Route::Search => draw_search(frame, state, outer[1]),
    }

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect {
            y: area.bottom().saturating_sub(1),
            height: 1,
            ..area
        };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
    }
}

fn draw_search(frame: &mut Frame, state: &AppState, area: Rect) {
    // query bar | status line | stat cards | records
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Fill(1),
        ])
        .split(area);

    let query_focused = state.focus == Focus::Query;
    let query_bar = QueryBar::new(&state.query, query_focused, &state.theme);
    let cursor = query_bar.cursor_position(vert[0]);
    frame.render_widget(query_bar, vert[0]);
    frame.render_widget(StatusLine::new(&state.controller, &state.theme), vert[1]);
    frame.render_widget(StatCards::new(&state.controller, &state.theme), vert[2]);
    frame.render_widget(
        ResultsTable::new(
            &state.table,
            state.controller.results(),
            state.focus == Focus::Records,
            &state.theme,
        ),
        vert[3],
    );

    if query_focused && !state.show_help {
        frame.set_cursor_position(cursor);
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
