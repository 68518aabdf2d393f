//! Headless mode for the lineup puzzle.
//!
//! A line-oriented interface for scripted play and automated testing. Game
//! commands are parsed by `lineup_core::headless`; lines starting with `#`
//! are handled here.

use std::io::{self, BufRead, Write};

use lineup_core::headless::{Command, HeadlessConfig, HeadlessGame};
use lineup_core::SessionConfig;

/// Run the puzzle in headless mode, reading commands from stdin.
pub fn run_headless(config: SessionConfig) -> io::Result<()> {
    let mut game = HeadlessGame::new(HeadlessConfig::from_session(config));
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("=== Lineup Headless Mode ===");
    println!("Puzzle {}", game.puzzle_number());
    println!("{}", game.hints_text());
    println!();
    print_help();
    println!();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error reading input: {e}");
                break;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(meta) = line.strip_prefix('#') {
            match meta.trim() {
                "quit" | "exit" => {
                    println!("Goodbye!");
                    break;
                }
                "help" => print_help(),
                "status" => match game.snapshot_json() {
                    Ok(json) => println!("[STATUS]\n{json}"),
                    Err(e) => println!("[ERROR] {e}"),
                },
                _ => println!("[ERROR] Unknown command. Type #help for help."),
            }
            stdout.flush()?;
            continue;
        }

        match game.send(line) {
            Ok(response) if response.verdict.is_some() => println!("[CHECK] {}", response.text),
            Ok(response) => println!("{}", response.text),
            Err(e) => println!("[ERROR] {e}"),
        }
        stdout.flush()?;
    }

    Ok(())
}

fn print_help() {
    println!("Commands:");
    for line in Command::HELP {
        println!("  {line}");
    }
    println!("  #status                      - Print the session as JSON");
    println!("  #help                        - Show this help");
    println!("  #quit                        - Exit");
}
