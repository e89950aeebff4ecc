//! steps - Terminal Step Indicator
//!
//! A three-step progress indicator with Previous/Next navigation and a
//! dismiss toggle. Keyboard and mouse clicks drive the widget; the view is
//! repainted whenever its state changes.

use std::io;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};

use steps::application::App;
use steps::cli::Cli;
use steps::infrastructure::init_logging;
use steps::presentation::{render_ui, InputHandler};

/// Entry point for the steps terminal application.
///
/// Parses arguments, sets up logging and the terminal, and runs the event
/// loop until the user quits. The terminal is restored before any run error
/// is reported.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let widget = cli.initial_widget();

    if cli.dump {
        let json = cli.dump_view().context("Failed to serialize view description")?;
        println!("{json}");
        return Ok(());
    }

    // Guard must live until the event loop ends so buffered lines are flushed.
    let _guard = init_logging(&cli.log_dir).context("Failed to initialize logging")?;
    tracing::info!(
        step = widget.step().get(),
        visible = widget.is_visible(),
        "starting steps"
    );

    let mouse = !cli.no_mouse;
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    if mouse {
        execute!(stdout, EnableMouseCapture).context("Failed to enable mouse capture")?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(widget);
    let res = run_app(&mut terminal, &mut app);

    let restored = restore_terminal(&mut terminal, mouse);

    match (res, restored) {
        (Ok(()), Ok(())) => Ok(()),
        (Ok(()), Err(restore_err)) => Err(restore_err).context("Failed to restore terminal"),
        (Err(err), restored) => {
            tracing::error!(error = %err, "event loop failed");
            let context = match restored {
                Ok(()) => "Terminal event loop failed".to_string(),
                Err(restore_err) => {
                    format!("Terminal event loop failed (terminal restore also failed: {restore_err})")
                }
            };
            Err(err).context(context)
        }
    }
}

/// Undoes terminal setup. Every step runs even if an earlier one fails;
/// the first error is returned.
fn restore_terminal<B: Backend + io::Write>(terminal: &mut Terminal<B>, mouse: bool) -> io::Result<()> {
    let mut results = vec![
        disable_raw_mode(),
        execute!(terminal.backend_mut(), LeaveAlternateScreen),
    ];
    if mouse {
        results.push(execute!(terminal.backend_mut(), DisableMouseCapture));
    }
    results.push(terminal.show_cursor());

    for err in results.iter().filter_map(|r| r.as_ref().err()) {
        tracing::warn!(error = %err, "terminal restore step failed");
    }
    results.into_iter().collect()
}

/// Main application event loop.
///
/// Paints only when the app reports a pending redraw or the terminal was
/// resized, then blocks on the next event.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        if app.take_redraw() {
            terminal.draw(|f| render_ui(f, app))?;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                InputHandler::handle_key_event(app, key.code, key.modifiers);
            }
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                InputHandler::handle_mouse_event(app, mouse, area);
            }
            Event::Resize(_, _) => app.needs_redraw = true,
            _ => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
