// hanoi-tty: Tower of Hanoi solver with move-by-move playback

use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use hanoi_tty::driver::{run_session, DriverError, SessionOptions};
use hanoi_tty::solver::constants::DEFAULT_HISTORY_LIMIT;
use hanoi_tty::ui::App;

#[derive(Parser, Debug)]
#[command(name = "hanoi-tty")]
#[command(about = "Solve the Tower of Hanoi and replay it move by move")]
struct Args {
    /// Number of disks (prompted for when omitted)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    disks: Option<i64>,

    /// Skip the per-move transcript, print only the summary
    #[arg(short, long)]
    quiet: bool,

    /// Record every move and open the playback UI after solving
    #[arg(long)]
    tui: bool,

    /// Memory budget for recorded history, in megabytes
    #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT / (1024 * 1024))]
    history_limit_mb: usize,

    /// Delay between moves during auto-play, in milliseconds
    #[arg(long, default_value = "500")]
    play_interval_ms: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout carries only the transcript
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let options = SessionOptions {
        disks: args.disks,
        quiet: args.quiet || args.tui,
        history_limit: args
            .tui
            .then(|| args.history_limit_mb.saturating_mul(1024 * 1024)),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let (mut solver, report) = match run_session(&mut input, &mut output, &options) {
        Ok(outcome) => outcome,
        Err(DriverError::InputClosed) => {
            eprintln!("\nError: input closed before a valid number of disks was entered");
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };
    info!(
        disks = report.disks,
        moves = report.moves,
        completed = report.completed,
        "Session finished"
    );

    if !args.tui {
        return Ok(());
    }

    if !report.completed {
        warn!("Entering TUI with partial history");
    }

    // Start playback from the initial state
    if let Err(e) = solver.rewind_to_start() {
        warn!("Failed to rewind to start: {}", e);
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(solver, Duration::from_millis(args.play_interval_ms));
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
