//! Headless game interface for programmatic use.
//!
//! This module drives a `PuzzleSession` through short text commands. It's
//! designed for:
//! - Scripted sessions and automated testing
//! - Coding agents playing the puzzle
//! - The `--headless` mode of the terminal front-end
//!
//! # Example
//!
//! ```
//! use lineup_core::headless::{HeadlessConfig, HeadlessGame};
//!
//! let mut game = HeadlessGame::new(HeadlessConfig::puzzle(1).unwrap());
//! game.send("place fox left").unwrap();
//! let response = game.send("check").unwrap();
//! assert_eq!(response.verdict.map(|v| v.is_solved()), Some(false));
//! ```

use crate::board::{Position, Slot};
use crate::catalog::PuzzleNumber;
use crate::drag::{DropOutcome, DropTarget, OutsideDropPolicy};
use crate::roster::CharacterId;
use crate::session::{PuzzleSession, SessionConfig, SessionError, SessionSnapshot};
use crate::validate::Verdict;
use std::fmt::Write as _;
use std::str::FromStr;
use thiserror::Error;

/// Errors from headless commands.
#[derive(Debug, Error)]
pub enum HeadlessError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    MissingArgument(&'static str),

    #[error(transparent)]
    Character(#[from] crate::roster::ParseCharacterError),

    #[error(transparent)]
    Position(#[from] crate::board::ParsePositionError),

    #[error("Invalid puzzle number: {0}")]
    InvalidNumber(String),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Configuration for a headless game.
#[derive(Debug, Clone, Default)]
pub struct HeadlessConfig {
    pub session: SessionConfig,
}

impl HeadlessConfig {
    /// Start on a specific puzzle.
    pub fn puzzle(n: u8) -> Result<Self, SessionError> {
        let number = PuzzleNumber::new(n)?;
        Ok(Self {
            session: SessionConfig::new().with_starting_puzzle(number),
        })
    }

    /// Wrap an existing session configuration.
    pub fn from_session(session: SessionConfig) -> Self {
        Self { session }
    }

    /// Seed the random puzzle picker.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.session = self.session.with_seed(seed);
        self
    }

    /// Set the outside-drop policy.
    pub fn with_outside_drop(mut self, policy: OutsideDropPolicy) -> Self {
        self.session = self.session.with_outside_drop(policy);
        self
    }
}

/// A parsed headless command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Puzzle(u8),
    Random,
    Place(CharacterId, Position),
    Drag(CharacterId),
    Drop(DropTarget),
    Check,
    Reset,
    Hints,
    Board,
}

impl Command {
    /// One-line usage summary for every command.
    pub const HELP: &'static [&'static str] = &[
        "puzzle <1-3>                 - Load a puzzle",
        "random                       - Load a random puzzle",
        "place <character> <position> - Put a character on a position",
        "drag <character>             - Pick up a character",
        "drop <position|outside>      - Drop the character being dragged",
        "check                        - Check the board",
        "reset                        - Return every character to the pool",
        "hints                        - Show the hints",
        "board                        - Show the board",
    ];
}

impl FromStr for Command {
    type Err = HeadlessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let Some(verb) = parts.first() else {
            return Err(HeadlessError::UnknownCommand(String::new()));
        };

        match verb.to_lowercase().as_str() {
            "puzzle" | "load" => {
                let raw = parts.get(1).ok_or(HeadlessError::MissingArgument("puzzle <1-3>"))?;
                let n = raw
                    .parse()
                    .map_err(|_| HeadlessError::InvalidNumber(raw.to_string()))?;
                Ok(Command::Puzzle(n))
            }
            "random" => Ok(Command::Random),
            "place" | "put" => match (parts.get(1), parts.get(2)) {
                (Some(character), Some(position)) => {
                    Ok(Command::Place(character.parse()?, position.parse()?))
                }
                _ => Err(HeadlessError::MissingArgument("place <character> <position>")),
            },
            "drag" => {
                let character = parts.get(1).ok_or(HeadlessError::MissingArgument("drag <character>"))?;
                Ok(Command::Drag(character.parse()?))
            }
            "drop" => {
                let target = parts
                    .get(1)
                    .ok_or(HeadlessError::MissingArgument("drop <position|outside>"))?;
                if target.eq_ignore_ascii_case("outside") || target.eq_ignore_ascii_case("pool") {
                    Ok(Command::Drop(DropTarget::Outside))
                } else {
                    Ok(Command::Drop(DropTarget::Position(target.parse()?)))
                }
            }
            "check" | "validate" => Ok(Command::Check),
            "reset" => Ok(Command::Reset),
            "hints" => Ok(Command::Hints),
            "board" | "status" => Ok(Command::Board),
            _ => Err(HeadlessError::UnknownCommand(s.trim().to_string())),
        }
    }
}

/// Response to one headless command.
#[derive(Debug, Clone)]
pub struct GameResponse {
    /// Human-readable description of what happened.
    pub text: String,
    /// Active puzzle after the command.
    pub puzzle: PuzzleNumber,
    /// Result of a check, if the command was `check`.
    pub verdict: Option<Verdict>,
    /// Number of characters on the board.
    pub placed: usize,
}

/// An entry in the game transcript.
#[derive(Debug, Clone)]
pub struct TranscriptEntry {
    /// Command as typed.
    pub input: String,
    /// Response text (or error message).
    pub output: String,
    /// Turn number.
    pub turn: usize,
}

/// A puzzle game that can be controlled with text commands.
pub struct HeadlessGame {
    session: PuzzleSession,
    transcript: Vec<TranscriptEntry>,
}

impl HeadlessGame {
    /// Create a new headless game.
    pub fn new(config: HeadlessConfig) -> Self {
        Self {
            session: PuzzleSession::new(config.session),
            transcript: Vec::new(),
        }
    }

    /// Parse and execute one command line.
    pub fn send(&mut self, input: &str) -> Result<GameResponse, HeadlessError> {
        let result = input.parse::<Command>().and_then(|cmd| self.execute(cmd));

        let output = match &result {
            Ok(response) => response.text.clone(),
            Err(e) => format!("error: {e}"),
        };
        self.transcript.push(TranscriptEntry {
            input: input.to_string(),
            output,
            turn: self.transcript.len() + 1,
        });

        result
    }

    /// Execute an already-parsed command.
    pub fn execute(&mut self, command: Command) -> Result<GameResponse, HeadlessError> {
        let mut verdict = None;

        let text = match command {
            Command::Puzzle(n) => {
                self.session.load_puzzle(n)?;
                format!("Puzzle {n}\n{}", self.hints_text())
            }
            Command::Random => {
                let n = self.session.load_random_puzzle();
                format!("Puzzle {n}\n{}", self.hints_text())
            }
            Command::Place(character, position) => {
                let outcome = self.session.place(character, position);
                describe_placement(character, position, outcome.changed, outcome.evicted)
            }
            Command::Drag(character) => {
                self.session.begin_drag(character);
                format!("Dragging {}", character.display_name())
            }
            Command::Drop(target) => match self.session.drop_on(target) {
                DropOutcome::NothingInFlight => "Nothing is being dragged".to_string(),
                DropOutcome::Placed(outcome) => describe_placement(
                    outcome.character,
                    outcome.position,
                    outcome.changed,
                    outcome.evicted,
                ),
                DropOutcome::Ignored(character) => {
                    format!("{} stays where it was", character.display_name())
                }
                DropOutcome::Returned(character) => {
                    format!("{} returns to the pool", character.display_name())
                }
            },
            Command::Check => {
                let v = self.session.validate();
                verdict = Some(v);
                v.message().to_string()
            }
            Command::Reset => {
                self.session.reset();
                "All characters returned to the pool".to_string()
            }
            Command::Hints => self.hints_text(),
            Command::Board => self.board_text(),
        };

        Ok(GameResponse {
            text,
            puzzle: self.session.puzzle_number(),
            verdict,
            placed: self.session.placement().placed_count(),
        })
    }

    /// Numbered list of the active puzzle's hints.
    pub fn hints_text(&self) -> String {
        let mut out = String::new();
        for (i, hint) in self.session.hints().iter().enumerate() {
            let _ = writeln!(out, "{}. {}", i + 1, hint.text);
        }
        out.trim_end().to_string()
    }

    /// One line per position, then the pool.
    pub fn board_text(&self) -> String {
        let placement = self.session.placement();
        let mut out = format!("Puzzle {}\n", self.session.puzzle_number());
        for position in Position::ALL {
            let occupant = placement
                .occupant(position)
                .map_or("-", |c| c.display_name());
            let _ = writeln!(out, "  {:<13} {}", position.title(), occupant);
        }
        let pool: Vec<_> = placement.unplaced().map(|c| c.display_name()).collect();
        let _ = write!(
            out,
            "  Pool: {}",
            if pool.is_empty() { "(empty)".to_string() } else { pool.join(", ") }
        );
        out
    }

    /// Serializable snapshot of the underlying session.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    /// Snapshot rendered as pretty JSON.
    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.snapshot())
    }

    // ========================================================================
    // Game State Queries
    // ========================================================================

    /// Number of the active puzzle.
    pub fn puzzle_number(&self) -> PuzzleNumber {
        self.session.puzzle_number()
    }

    /// Slot of one character.
    pub fn slot(&self, character: CharacterId) -> Slot {
        self.session.placement().slot(character)
    }

    /// Currently visible result message.
    pub fn message(&self) -> Option<Verdict> {
        self.session.message()
    }

    /// Get the transcript of all exchanges.
    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// Get the last response text, if any.
    pub fn last_output(&self) -> Option<&str> {
        self.transcript.last().map(|e| e.output.as_str())
    }

    /// Get the underlying session for advanced use.
    pub fn session(&self) -> &PuzzleSession {
        &self.session
    }
}

fn describe_placement(
    character: CharacterId,
    position: Position,
    changed: bool,
    evicted: Option<CharacterId>,
) -> String {
    if !changed {
        return format!("{} is already on {}", character.display_name(), position.title());
    }
    match evicted {
        Some(other) => format!(
            "{} placed on {}; {} returns to the pool",
            character.display_name(),
            position.title(),
            other.display_name()
        ),
        None => format!("{} placed on {}", character.display_name(), position.title()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("puzzle 2".parse::<Command>().unwrap(), Command::Puzzle(2));
        assert_eq!("RANDOM".parse::<Command>().unwrap(), Command::Random);
        assert_eq!(
            "place fox position-left".parse::<Command>().unwrap(),
            Command::Place(CharacterId::Fox, Position::Left)
        );
        assert_eq!(
            "drop outside".parse::<Command>().unwrap(),
            Command::Drop(DropTarget::Outside)
        );
        assert_eq!(
            "drop center".parse::<Command>().unwrap(),
            Command::Drop(DropTarget::Position(Position::Center))
        );
        assert_eq!("status".parse::<Command>().unwrap(), Command::Board);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("jump".parse::<Command>(), Err(HeadlessError::UnknownCommand(_))));
        assert!(matches!("place fox".parse::<Command>(), Err(HeadlessError::MissingArgument(_))));
        assert!(matches!("place tails left".parse::<Command>(), Err(HeadlessError::Character(_))));
        assert!(matches!("place fox up".parse::<Command>(), Err(HeadlessError::Position(_))));
        assert!(matches!("puzzle two".parse::<Command>(), Err(HeadlessError::InvalidNumber(_))));
        assert!(matches!("".parse::<Command>(), Err(HeadlessError::UnknownCommand(_))));
    }

    #[test]
    fn test_unknown_puzzle_is_session_error() {
        let mut game = HeadlessGame::new(HeadlessConfig::default());
        let err = game.send("puzzle 9").unwrap_err();
        assert!(matches!(err, HeadlessError::Session(SessionError::Catalog(_))));
        assert_eq!(game.puzzle_number(), PuzzleNumber::FIRST);
    }

    #[test]
    fn test_place_reports_eviction() {
        let mut game = HeadlessGame::new(HeadlessConfig::default());
        game.send("place cat center").unwrap();
        let response = game.send("place bat center").unwrap();

        assert!(response.text.contains("Cat returns to the pool"));
        assert_eq!(response.placed, 1);
        assert_eq!(game.slot(CharacterId::Cat), Slot::Unplaced);
    }

    #[test]
    fn test_transcript_records_errors() {
        let mut game = HeadlessGame::new(HeadlessConfig::default());
        game.send("hints").unwrap();
        let _ = game.send("fly");

        assert_eq!(game.transcript().len(), 2);
        assert_eq!(game.transcript()[1].turn, 2);
        assert!(game.last_output().unwrap().starts_with("error:"));
    }

    #[test]
    fn test_board_text_lists_pool() {
        let mut game = HeadlessGame::new(HeadlessConfig::default());
        game.send("place silver right").unwrap();
        let board = game.board_text();
        assert!(board.contains("Right         Silver Hedgehog"));
        assert!(board.contains("Pool: Bat, Fox, Cat, Blue Hedgehog"));
    }

    #[test]
    fn test_hints_text_is_numbered() {
        let game = HeadlessGame::new(HeadlessConfig::puzzle(3).unwrap());
        let hints = game.hints_text();
        assert_eq!(hints.lines().count(), 5);
        assert!(hints.starts_with("1. The Silver Hedgehog is flattered"));
    }
}
