use chrono::Utc;
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use day_planner_tui::{
    app::{update, AppState},
    cli::Cli,
    event::AppEvent,
    logging,
    paths::Paths,
    view::render,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::time::{Duration, Instant};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let paths = Paths::resolve();

    if let Some(log_path) = cli.log_path(&paths) {
        logging::init(&log_path, &cli.log_level)
            .wrap_err_with(|| format!("Failed to set up logging at {}", log_path.display()))?;
    }

    let mut state = if cli.empty {
        AppState::empty()
    } else {
        AppState::new()
    };
    tracing::info!(
        day = %state.day,
        rows = state.store.row_count(),
        tick_ms = cli.tick_ms,
        "starting planner"
    );

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, &mut state, Duration::from_millis(cli.tick_ms));

    // Terminal cleanup (always execute even if event loop errored)
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "event loop failed");
    }
    result?;

    if cli.dump_on_exit {
        println!("{}", state.store.to_json()?);
    }

    tracing::info!(rows = state.store.row_count(), "planner closed");
    Ok(())
}

/// Main event loop following Elm Architecture.
/// Separated from main() for testability.
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    state: &mut AppState,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| {
            render(state, frame);
        })?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                // Windows reports both press and release
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    update(state, AppEvent::Key(key));
                }
                Event::Resize(width, height) => {
                    update(state, AppEvent::Resize { width, height });
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            update(state, AppEvent::Tick(Utc::now()));
            last_tick = Instant::now();
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
