//! Testing utilities for the puzzle.
//!
//! This module provides tools for integration testing:
//! - `TestHarness` for scripted placement scenarios
//! - Assertion helpers for verifying board state

use crate::board::{Position, Slot};
use crate::catalog::PuzzleNumber;
use crate::drag::{DropOutcome, OutsideDropPolicy};
use crate::roster::CharacterId;
use crate::session::{PuzzleSession, SessionConfig};
use crate::validate::Verdict;

/// Test harness for running puzzle scenarios.
///
/// Steps take short string ids ("fox", "center-left") so scenarios read like
/// the headless protocol. Unknown ids panic, since a typo in a test should
/// fail loudly.
pub struct TestHarness {
    /// The session under test.
    pub session: PuzzleSession,
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHarness {
    /// Harness on puzzle 1 with a fixed seed.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::new().with_seed(0))
    }

    /// Harness starting on puzzle `n`.
    pub fn on_puzzle(n: u8) -> Self {
        let number = PuzzleNumber::new(n).unwrap_or_else(|e| panic!("{e}"));
        Self::with_config(SessionConfig::new().with_seed(0).with_starting_puzzle(number))
    }

    /// Harness with a custom configuration.
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            session: PuzzleSession::new(config),
        }
    }

    /// Harness whose outside drops send characters back to the pool.
    pub fn returning_outside_drops() -> Self {
        Self::with_config(
            SessionConfig::new()
                .with_seed(0)
                .with_outside_drop(OutsideDropPolicy::ReturnToPool),
        )
    }

    /// Place a character by id.
    pub fn place(&mut self, character: &str, position: &str) -> &mut Self {
        self.session.place(id(character), pos(position));
        self
    }

    /// Drag a character and drop it on a position.
    pub fn drag_to(&mut self, character: &str, position: &str) -> DropOutcome {
        self.session.begin_drag(id(character));
        self.session.drop_on(pos(position))
    }

    /// Drag a character and drop it outside every position.
    pub fn drag_outside(&mut self, character: &str) -> DropOutcome {
        self.session.begin_drag(id(character));
        self.session.drop_on(None::<Position>)
    }

    /// Place every character on its required position.
    pub fn solve(&mut self) -> &mut Self {
        let solution = self.session.puzzle().solution.clone();
        for (character, position) in solution.iter() {
            self.session.place(character, position);
        }
        self
    }

    /// Run validation.
    pub fn check(&mut self) -> Verdict {
        self.session.validate()
    }

    /// Slot of a character.
    pub fn slot(&self, character: &str) -> Slot {
        self.session.placement().slot(id(character))
    }

    /// Character on a position.
    pub fn occupant(&self, position: &str) -> Option<CharacterId> {
        self.session.placement().occupant(pos(position))
    }

    /// Assert that every character is in the pool.
    pub fn assert_all_unplaced(&self) {
        let placed: Vec<_> = self
            .session
            .placement()
            .iter()
            .filter(|(_, slot)| slot.is_placed())
            .map(|(c, _)| c)
            .collect();
        assert!(placed.is_empty(), "expected empty board, found {placed:?}");
    }

    /// Assert that no position holds more than one character.
    pub fn assert_positions_exclusive(&self) {
        for position in Position::ALL {
            let holders: Vec<_> = self
                .session
                .placement()
                .iter()
                .filter(|(_, slot)| *slot == Slot::Placed(position))
                .map(|(c, _)| c)
                .collect();
            assert!(holders.len() <= 1, "{position} is shared by {holders:?}");
        }
    }
}

fn id(character: &str) -> CharacterId {
    character.parse().unwrap_or_else(|e| panic!("{e}"))
}

fn pos(position: &str) -> Position {
    position.parse().unwrap_or_else(|e| panic!("{e}"))
}
