use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::{self, Stdout};
use std::path::Path;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

use arbor::cli::Cli;
use arbor::graph::CommitGraph;
use arbor::input::map_key_to_intent;
use arbor::repository::{GitHistory, HistorySource};
use arbor::view::{render, Theme};
use arbor::viewmodel::{Action, AppViewModel, LogViewModel};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    let history = GitHistory::discover(&cli.repo_path)?;
    let options = cli.graph_options();
    let tips = history
        .tips(options.include_all)
        .context("Could not enumerate branches")?;
    let repo_path = history.root().display().to_string();
    let head_name = history.head_label();
    info!(repo = %repo_path, tips = tips.len(), limit = options.limit, "opening history");

    // Fails here, before the terminal is taken over, when there is nothing to show
    let graph = CommitGraph::new(&history, &tips, options.limit)?;
    let mut app = AppViewModel::new(LogViewModel::new(graph), repo_path, head_name);
    let theme = Theme::default();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, &theme);

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run<S: HistorySource>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppViewModel<S>,
    theme: &Theme,
) -> Result<()> {
    let size = terminal.size()?;
    app.resize(size.height);

    loop {
        terminal.draw(|f| render(f, app, theme))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(intent) = map_key_to_intent(&key, app.is_search_mode()) {
                    if app.handle_intent(intent) == Action::Quit {
                        break;
                    }
                }
            }
            Event::Resize(_, height) => app.resize(height),
            _ => {}
        }
    }
    Ok(())
}

/// Logs go to `ARBOR_LOG_FILE` when set; the terminal belongs to the UI
fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match std::env::var_os("ARBOR_LOG_FILE") {
        Some(path) => {
            let file = File::create(&path).with_context(|| {
                format!("Could not create log file {}", Path::new(&path).display())
            })?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::sink)
                .try_init();
        }
    }
    Ok(())
}
