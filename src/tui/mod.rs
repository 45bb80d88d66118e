//! Interactive terminal map viewer.
//!
//! Feature-gated behind `tui`. Launch with `--tui` on the CLI.

mod controls;
mod layout;
/// Viewer application state.
pub mod runtime;
pub mod style;
pub mod viewport;

use std::io;
use std::time::Duration;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;

use crate::config::ViewerConfig;
use crate::data::record::SiteRecord;
use runtime::App;

/// Input poll interval; the viewer redraws at least this often.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Launches the viewer for an annotated site collection.
///
/// Sets up the terminal (raw mode, alternate screen, mouse capture), runs
/// the event loop, and restores the terminal on exit. `initial_year` opens
/// the viewer with the year filter already applied.
pub fn run(
    config: ViewerConfig,
    sites: Vec<SiteRecord>,
    skipped_geometry: usize,
    initial_year: Option<i32>,
) {
    enable_raw_mode().unwrap_or_else(|e| {
        eprintln!("error: failed to enable raw mode: {e}");
        std::process::exit(1);
    });

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).unwrap_or_else(|e| {
        let _ = disable_raw_mode();
        eprintln!("error: failed to enter alternate screen: {e}");
        std::process::exit(1);
    });

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).unwrap_or_else(|e| {
        let _ = disable_raw_mode();
        eprintln!("error: failed to create terminal: {e}");
        std::process::exit(1);
    });

    let mut app = App::new(config, sites, skipped_geometry);
    if initial_year.is_some() {
        app.filter.threshold = initial_year;
    }
    let result = event_loop(&mut terminal, &mut app);

    // Teardown — always restore terminal state
    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    );
    let _ = terminal.show_cursor();

    if let Err(e) = result {
        eprintln!("error: TUI crashed: {e}");
        std::process::exit(1);
    }
}

/// Core event loop: draw, poll input, dispatch to the state handlers.
fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| layout::render(frame, app))?;

        if app.quit {
            return Ok(());
        }

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => controls::handle_key(app, key),
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    let areas =
                        layout::Areas::compute(Rect::new(0, 0, size.width, size.height));
                    controls::handle_mouse(app, mouse, areas.map_inner());
                }
                _ => {}
            }
        }
    }
}
