// Module declarations
pub mod widgets;

pub mod action;
pub mod adapters;
pub mod app;
pub mod effects;
pub mod keys;
pub mod reducer;
pub mod reducers;
pub mod renderer;
pub mod runtime;
pub mod state;

#[cfg(test)]
pub mod testing;

#[cfg(test)]
mod integration_tests;

pub use action::Action;
pub use adapters::{ListAdapter, ListRow, OptionsListAdapter, SettingsListAdapter};
pub use app::{App, Flow};
pub use effects::Effect;
pub use keys::{key_to_input, Input};
pub use reducer::reduce;
pub use renderer::render_frame;
pub use runtime::{DispatchOutcome, Runtime};
pub use state::{ListCursor, NavigationState, RenderSignal, StatusLine};

use std::io;
use std::time::Duration;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use crate::config::Config;
use crate::session::Session;
use crate::strings::StringTable;

/// Main entry point for TUI mode
pub fn run<S: Session>(config: &Config, session: S) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let runtime = Runtime::new(session)
        .with_strings(StringTable::with_overrides(config.strings.clone()));
    let mut app = App::new(runtime);

    let result = event_loop(&mut terminal, &mut app, config);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop<S: Session>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<S>,
    config: &Config,
) -> Result<(), io::Error> {
    loop {
        terminal.draw(|f| {
            let area = f.area();
            render_frame(app, area, f.buffer_mut(), &config.display);
        })?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            // Windows reports releases too
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key) == Flow::Quit {
                tracing::debug!("ACTION: Quitting application");
                return Ok(());
            }
        }
    }
}
