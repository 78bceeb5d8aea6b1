use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::ai::{Agent, RandomAgent};
use connect_four::config::{AppConfig, Interface, LogConfig};
use connect_four::console;
use connect_four::ui::App;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

/// Play Connect Four against a random-move opponent.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against the computer")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Use the line-based console prompt instead of the full-screen UI
    #[arg(long)]
    console: bool,

    /// Seed the opponent for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, source) = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if cli.console {
        config.ui.interface = Interface::Console;
    }
    if cli.seed.is_some() {
        config.ai.seed = cli.seed;
    }
    if cli.log_file.is_some() {
        config.log.file = cli.log_file;
    }

    init_logging(&config.log, config.ui.interface)?;
    source.log(&cli.config);
    tracing::info!(
        config = %cli.config.display(),
        interface = ?config.ui.interface,
        seed = ?config.ai.seed,
        "starting connect four"
    );

    let agent: Box<dyn Agent> = match config.ai.seed {
        Some(seed) => Box::new(RandomAgent::with_seed(seed)),
        None => Box::new(RandomAgent::new()),
    };

    match config.ui.interface {
        Interface::Console => run_console(agent),
        Interface::Tui => run_tui(agent).context("running terminal UI"),
    }
}

/// Route `tracing` output to the configured file. Without one, only the
/// console front end logs, to stderr; the TUI owns the terminal.
fn init_logging(log: &LogConfig, interface: Interface) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));

    match (&log.file, interface) {
        (Some(path), _) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        (None, Interface::Console) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
        (None, Interface::Tui) => {}
    }
    Ok(())
}

fn run_console(mut agent: Box<dyn Agent>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    console::play(stdin.lock(), &mut stdout, agent.as_mut()).context("console game")?;
    Ok(())
}

fn run_tui(agent: Box<dyn Agent>) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(agent);
    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
