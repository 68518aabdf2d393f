//! Lineup: a drag-and-drop logic puzzle for the terminal.
//!
//! Five characters, five positions and five hints. Drag each character onto
//! the position its hint describes, then check the board.
//!
//! # Headless Mode
//!
//! Run with `--headless` for a line-oriented interface suitable for scripting:
//!
//! ```bash
//! printf 'place fox left\nboard\ncheck\n' | cargo run -p lineup -- --headless --puzzle 1
//! ```

mod app;
mod events;
mod headless;
mod ui;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use lineup_core::{OutsideDropPolicy, PuzzleNumber, SessionConfig};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::{self, stdout};
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use app::App;
use events::{handle_event, EventResult};
use ui::render::render;

/// File that receives logs while the TUI owns the terminal
const ENV_LOG_FILE: &str = "LINEUP_LOG";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    let headless_mode = args.iter().any(|a| a == "--headless");
    init_tracing(headless_mode)?;

    // Environment first, command line flags on top
    let config = match SessionConfig::from_env()
        .map_err(|e| e.to_string())
        .and_then(|config| parse_config_from_args(&args, config))
    {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Run with --help for usage.");
            std::process::exit(2);
        }
    };

    if headless_mode {
        return headless::run_headless(config).map_err(|e| e.into());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, App::new(config));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> io::Result<()> {
    loop {
        terminal.draw(|f| {
            app.viewport = f.area();
            render(f, &app);
        })?;

        if event::poll(Duration::from_millis(250))? {
            let ev = event::read()?;
            if handle_event(&mut app, ev) == EventResult::Quit {
                app.should_quit = true;
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Install the log subscriber.
///
/// Headless mode logs to stderr. The TUI only logs when `LINEUP_LOG` names a
/// file, since anything written to the terminal would corrupt the screen.
fn init_tracing(headless_mode: bool) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if headless_mode {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .compact()
            .init();
    } else if let Some(path) = std::env::var_os(ENV_LOG_FILE) {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }

    Ok(())
}

/// Apply command line flags over an environment-derived configuration.
fn parse_config_from_args(args: &[String], mut config: SessionConfig) -> Result<SessionConfig, String> {
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--puzzle" => {
                let value = flag_value(args, i, "--puzzle")?;
                let n: u8 = value
                    .parse()
                    .map_err(|_| format!("--puzzle expects a number, got '{value}'"))?;
                let number = PuzzleNumber::new(n).map_err(|e| e.to_string())?;
                config = config.with_starting_puzzle(number);
                i += 1;
            }
            "--seed" => {
                let value = flag_value(args, i, "--seed")?;
                let seed: u64 = value
                    .parse()
                    .map_err(|_| format!("--seed expects an unsigned integer, got '{value}'"))?;
                config = config.with_seed(seed);
                i += 1;
            }
            "--drop-outside" => {
                let value = flag_value(args, i, "--drop-outside")?;
                let policy: OutsideDropPolicy = value.parse().map_err(|e| format!("{e}"))?;
                config = config.with_outside_drop(policy);
                i += 1;
            }
            "--headless" => {}
            other => return Err(format!("Unknown argument '{other}'")),
        }
        i += 1;
    }

    Ok(config)
}

fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} needs a value"))
}

fn print_help() {
    println!("Lineup - a drag-and-drop logic puzzle");
    println!();
    println!("USAGE:");
    println!("  lineup [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -h, --help                 Show this help message");
    println!("  --headless                 Run in headless mode (text-only, no TUI)");
    println!("  --puzzle <1-3>             Puzzle to start on (default: 1)");
    println!("  --seed <N>                 Seed for random puzzle selection");
    println!("  --drop-outside <POLICY>    What a drop off the board does:");
    println!("                             ignore (default) or return");
    println!();
    println!("ENVIRONMENT:");
    println!("  LINEUP_PUZZLE, LINEUP_SEED, LINEUP_DROP_OUTSIDE   Same as the flags above");
    println!("  LINEUP_LOG                 Write TUI logs to this file");
    println!("  RUST_LOG                   Log filter (default: warn)");
    println!();
    println!("CONTROLS:");
    println!("  Drag characters with the mouse. c checks, r resets, n picks a");
    println!("  random puzzle, 1-3 choose a puzzle, ? shows help, q quits.");
    println!();
    println!("EXAMPLES:");
    println!("  lineup                               # Interactive TUI mode");
    println!("  lineup --puzzle 2 --drop-outside return");
    println!("  lineup --headless --seed 42          # Scriptable mode");
}
