//! Five characters, five positions, three puzzles.
//!
//! This crate provides the headless core of the lineup puzzle:
//! - The static puzzle catalog and character roster
//! - Placement state with the one-character-per-position rule
//! - The drag-and-drop gesture as an explicit state machine
//! - Validation against a puzzle's answer key
//! - A text-command interface and a test harness
//!
//! # Quick Start
//!
//! ```
//! use lineup_core::{CharacterId, Position, PuzzleSession, SessionConfig};
//!
//! let mut session = PuzzleSession::new(SessionConfig::new());
//! session.load_puzzle(1).unwrap();
//!
//! for hint in session.hints() {
//!     println!("{}", hint.text);
//! }
//!
//! session.place(CharacterId::Fox, Position::Left);
//! let verdict = session.validate();
//! println!("{}", verdict.message());
//! ```

pub mod board;
pub mod catalog;
pub mod drag;
pub mod headless;
pub mod roster;
pub mod session;
pub mod testing;
pub mod validate;

// Primary public API
pub use board::{Placement, Position, SharedPositionError, Slot};
pub use catalog::{get_puzzle, CatalogError, Hint, Puzzle, PuzzleNumber, Solution};
pub use drag::{DropOutcome, DropTarget, OutsideDropPolicy};
pub use headless::{HeadlessConfig, HeadlessError, HeadlessGame};
pub use roster::{character, characters, Character, CharacterId};
pub use session::{PuzzleSession, SessionConfig, SessionError, SessionSnapshot};
pub use testing::TestHarness;
pub use validate::{check_placement, Verdict};
