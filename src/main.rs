// sortty: Step-by-step sorting visualizer for the terminal

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sortty::catalog::Algorithm;
use sortty::config::{self, PlaybackConfig};
use sortty::generate::{ArrayGenerator, RandomArray};
use sortty::playback::Player;
use sortty::ui::App;

/// Watch sorting algorithms run one comparison at a time
#[derive(Debug, Parser)]
#[command(name = "sortty", version, about)]
struct Cli {
    /// Algorithm to start with: bubble, merge, insertion, quick, selection or heap
    #[arg(short, long, default_value = "bubble")]
    algorithm: Algorithm,

    /// Number of bars (10..=100, in steps of 5)
    #[arg(short, long, default_value = "50", value_parser = config::parse_size)]
    size: usize,

    /// Delay between steps in milliseconds (1..=100)
    #[arg(short, long = "delay-ms", default_value = "50", value_parser = config::parse_delay)]
    delay: Duration,

    /// Seed for reproducible arrays
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// The terminal belongs to the TUI, so logs only go to a file when asked
fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = PlaybackConfig::new(cli.size, cli.delay, cli.algorithm)?;
    let mut generator: Box<dyn ArrayGenerator> = match cli.seed {
        Some(seed) => Box::new(RandomArray::seeded(seed)),
        None => Box::new(RandomArray::new()),
    };
    let player = Player::generated(config, generator.as_mut());

    info!(
        algorithm = config.algorithm.id(),
        size = config.size,
        delay_ms = config.delay.as_millis() as u64,
        seed = ?cli.seed,
        "starting sortty"
    );

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(player, generator);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    info!("exiting");
    Ok(())
}
