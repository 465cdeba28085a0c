//! RevChart TUI: grouped revenue bar chart in the terminal.
//!
//! Layout:
//! - Header: title and instructions in the active language
//! - Companies: checkbox list driving the selection
//! - Chart: one bar group per selected company, one bar per year
//! - Status bar: key hints, skipped records, fetch status
//!
//! Records are fetched once on a worker thread; logs go to a file so they
//! never draw over the terminal UI.

mod app;
mod input;
mod theme;
mod ui;
mod worker;

use std::fs::{self, File};
use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use revchart_core::config::ChartConfig;

use crate::app::AppState;
use crate::worker::WorkerCommand;

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Paths
    let app_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("revchart");
    let config_path = std::env::args().nth(1).map(PathBuf::from).or_else(|| {
        dirs::config_dir()
            .map(|d| d.join("revchart").join("config.toml"))
            .filter(|p| p.exists())
    });

    init_logging(&app_dir)?;

    let config = ChartConfig::load(config_path.as_deref())
        .with_context(|| format!("loading config {config_path:?}"))?;
    info!(source = ?config.source, years = ?config.years, "starting revchart-tui");

    // Worker channels
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (resp_tx, resp_rx) = mpsc::channel();
    let worker_handle = worker::spawn_worker(cmd_rx, resp_tx).context("spawning worker")?;

    let mut app = AppState::new(
        config.session_settings(),
        config.source.clone(),
        cmd_tx.clone(),
        resp_rx,
    );

    // One-time fetch; the chart shows the loading notice until it lands.
    cmd_tx
        .send(WorkerCommand::FetchRecords {
            source: config.source.clone(),
        })
        .context("worker stopped before first fetch")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Shutdown worker
    let _ = cmd_tx.send(WorkerCommand::Shutdown);
    let _ = worker_handle.join();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("revchart-tui exited");
    result
}

/// Log to `<data dir>/revchart/revchart-tui.log`; `RUST_LOG` adjusts the filter.
fn init_logging(app_dir: &Path) -> Result<()> {
    fs::create_dir_all(app_dir).with_context(|| format!("creating {}", app_dir.display()))?;
    let log_path = app_dir.join("revchart-tui.log");
    let file = File::create(&log_path)
        .with_context(|| format!("creating log file {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Drain worker responses (non-blocking)
        while let Ok(resp) = app.worker_rx.try_recv() {
            app.handle_worker_response(resp);
        }

        // 3. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
