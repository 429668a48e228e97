// Module declarations
pub mod action;
pub mod keys;
pub mod overlay;
pub mod picker;
pub mod reducer;
pub mod state;
pub mod widgets;


pub use action::{Action, GridMove};
pub use keys::{key_to_action, DragTracker};
pub use reducer::reduce;
pub use state::AppState;

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Frame, Terminal,
};

use crate::config::Config;
use crate::records::MoodRecordStore;

/// Main entry point for TUI mode
pub fn run(config: Config, records: MoodRecordStore) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick = Duration::from_millis(config.frame_interval_ms.max(30));
    let state = AppState::new(config, records);

    let result = run_loop(&mut terminal, state, tick);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut state: AppState,
    tick: Duration,
) -> Result<()> {
    let mut drag = DragTracker::new();

    loop {
        terminal.draw(|f| draw(f, &mut state))?;

        // Wait for input up to one animation tick; either way the selected
        // player advances below, on this same context.
        let mut input: Option<Action> = None;
        if event::poll(tick)? {
            match event::read()? {
                Event::Key(key) => {
                    input = key_to_action(key, &state);
                }
                Event::Mouse(mouse) => {
                    input = drag.handle(mouse, &state);
                }
                _ => {}
            }
        }

        if let Some(action) = input {
            if matches!(action, Action::Quit) {
                tracing::debug!("quitting application");
                return Ok(());
            }
            state = reduce(state, action);
        }
        state = reduce(state, Action::Tick(Instant::now()));
    }
}

fn draw(f: &mut Frame, state: &mut AppState) {
    let chunks = Layout::vertical([Constraint::Min(8), Constraint::Length(1)]).split(f.area());
    picker::render(f, chunks[0], state);
    widgets::render_status_bar(f, chunks[1], &state.system);

    // The overlay covers the picker, sheet-style.
    if state.overlay.open {
        overlay::render(f, chunks[0], state);
    }
}
