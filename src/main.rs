//! Password-field - Terminal Password Entry
//!
//! A password control with show/hide toggle and a three-tier strength indicator.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableFocusChange, DisableMouseCapture, EnableBracketedPaste,
        EnableFocusChange, EnableMouseCapture,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

mod app;
mod control;
mod input;
mod logging;
mod ui;

use app::{App, AppConfig};

/// Poll interval while a swatch flare is running
const ANIMATION_TICK: Duration = Duration::from_millis(50);
const IDLE_TICK: Duration = Duration::from_millis(250);

fn main() -> anyhow::Result<()> {
    // Parse arguments
    let args: Vec<String> = std::env::args().collect();
    let config_path = args.get(1).map(PathBuf::from);

    let config = AppConfig::load(config_path.as_deref())?;
    if let Err(err) = logging::init(&config.log_path) {
        eprintln!("logging disabled: {}", err);
    }

    // Asset and palette checks run before the terminal is taken over
    let mut app = App::new(&config)?;
    tracing::info!("password field started");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    if let Err(ref err) = result {
        tracing::error!(error = %err, "event loop failed");
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| {
            app.render(frame);
        })?;

        let tick = if app.control.flares().is_animating() {
            ANIMATION_TICK
        } else {
            IDLE_TICK
        };
        if event::poll(tick)? {
            app.handle_event(event::read()?);
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!("password field closed");
    Ok(())
}
