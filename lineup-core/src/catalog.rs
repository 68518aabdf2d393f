//! The three built-in puzzles.
//!
//! Each puzzle pairs five hints (one per character, in registry order) with a
//! solution key. Puzzles are static and never mutated.

use crate::board::Position;
use crate::roster::CharacterId;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors from catalog lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Unknown puzzle {0}: expected a number from 1 to {count}", count = PuzzleNumber::COUNT)]
    UnknownPuzzle(u8),
}

/// A validated puzzle number (1, 2 or 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PuzzleNumber(u8);

impl PuzzleNumber {
    /// Number of puzzles in the catalog.
    pub const COUNT: u8 = 3;

    pub const FIRST: PuzzleNumber = PuzzleNumber(1);

    /// Validate a raw puzzle number.
    pub fn new(n: u8) -> Result<Self, CatalogError> {
        if (1..=Self::COUNT).contains(&n) {
            Ok(Self(n))
        } else {
            Err(CatalogError::UnknownPuzzle(n))
        }
    }

    /// Draw a puzzle number uniformly at random.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self(rng.gen_range(1..=Self::COUNT))
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// Every puzzle number in order.
    pub fn all() -> impl Iterator<Item = PuzzleNumber> {
        (1..=Self::COUNT).map(PuzzleNumber)
    }
}

impl TryFrom<u8> for PuzzleNumber {
    type Error = CatalogError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<PuzzleNumber> for u8 {
    fn from(n: PuzzleNumber) -> u8 {
        n.0
    }
}

impl fmt::Display for PuzzleNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A clue about one character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hint {
    pub character: CharacterId,
    pub text: &'static str,
}

/// The answer key of a puzzle: the required position of every character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    /// Indexed by `CharacterId::index`.
    positions: [Position; 5],
}

impl Solution {
    /// Required position of a character.
    pub fn required(&self, character: CharacterId) -> Position {
        self.positions[character.index()]
    }

    /// Character that belongs on a position.
    pub fn character_at(&self, position: Position) -> Option<CharacterId> {
        CharacterId::ALL
            .into_iter()
            .find(|c| self.required(*c) == position)
    }

    /// Each character with its required position, in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (CharacterId, Position)> + '_ {
        CharacterId::ALL.into_iter().map(|c| (c, self.required(c)))
    }

    /// True when every position is used exactly once.
    ///
    /// Five characters over five positions: covering every position means no
    /// position is used twice.
    pub fn is_bijection(&self) -> bool {
        Position::ALL
            .into_iter()
            .all(|p| self.character_at(p).is_some())
    }
}

/// A complete puzzle definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Puzzle {
    pub number: PuzzleNumber,
    pub hints: [Hint; 5],
    pub solution: Solution,
}

impl Puzzle {
    /// Hint for one character.
    pub fn hint_for(&self, character: CharacterId) -> &Hint {
        &self.hints[character.index()]
    }
}

// ============================================================================
// Puzzle data
// ============================================================================

use CharacterId::{Bat, Blue, Cat, Fox, Silver};
use Position::{Center, CenterLeft, CenterRight, Left, Right};

const fn hint(character: CharacterId, text: &'static str) -> Hint {
    Hint { character, text }
}

/// Positions are listed in registry order: silver, bat, fox, cat, blue.
static PUZZLES: [Puzzle; 3] = [
    Puzzle {
        number: PuzzleNumber(1),
        hints: [
            hint(Silver, "The Silver Hedgehog is an outsider, trying to fit in."),
            hint(Bat, "The Bat is a prankster, and loves to mess with the Blue Hedgehog."),
            hint(Fox, "The Fox is Fully Left-handed, and is proud of it."),
            hint(Cat, "The Cat is a silent one, keeping her distance from everyone else."),
            hint(Blue, "The Blue Hedgehog loves being the Center of attention."),
        ],
        solution: Solution {
            positions: [Right, CenterRight, Left, CenterLeft, Center],
        },
    },
    Puzzle {
        number: PuzzleNumber(2),
        hints: [
            hint(Silver, "The Silver Hedgehog has only one friend, the Cat."),
            hint(Bat, "The Bat loves to be the Middleman in trade deals."),
            hint(Fox, "The Fox loves to hangout with the Blue Hedgehog, always sticking by his side."),
            hint(Cat, "The Cat, dispite her beauty and status, is often too Far away to be noticed."),
            hint(Blue, "The Blue Hedgehog is a carefree spirit, Left to run in the wind."),
        ],
        solution: Solution {
            positions: [CenterRight, Center, CenterLeft, Right, Left],
        },
    },
    Puzzle {
        number: PuzzleNumber(3),
        hints: [
            hint(Silver, "The Silver Hedgehog is flattered by the fox, although finding him a little strange."),
            hint(Bat, "The Bat is clear and Center-minded, but always gets distracted by beautiful and shiny things."),
            hint(Fox, "The Fox loves to learn about people he doesn't know to well, sometimes taking things a bit too Far."),
            hint(Cat, "The Cat's soul burns so brightly and beautifly, dazzling everyone who's Righteous enough to see."),
            hint(Blue, "The Blue Hedgehog has a friendly rivalry with the Cat, usually ending up in fights together."),
        ],
        solution: Solution {
            positions: [CenterLeft, Center, Left, Right, CenterRight],
        },
    },
];

/// Look up a validated puzzle.
pub fn puzzle(number: PuzzleNumber) -> &'static Puzzle {
    &PUZZLES[usize::from(number.0 - 1)]
}

/// Look up a puzzle by raw number, rejecting anything outside 1..=3.
pub fn get_puzzle(n: u8) -> Result<&'static Puzzle, CatalogError> {
    PuzzleNumber::new(n).map(puzzle)
}

/// All puzzles in number order.
pub fn puzzles() -> &'static [Puzzle] {
    &PUZZLES
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_every_solution_is_a_bijection() {
        for puzzle in puzzles() {
            assert!(puzzle.solution.is_bijection(), "puzzle {}", puzzle.number);
            for position in Position::ALL {
                assert!(puzzle.solution.character_at(position).is_some());
            }
        }
    }

    #[test]
    fn test_repeated_position_is_not_a_bijection() {
        let mut positions = puzzle(PuzzleNumber::FIRST).solution.positions;
        positions[0] = positions[1];
        let solution = Solution { positions };

        assert!(!solution.is_bijection());
        assert_eq!(solution.character_at(positions[1]), Some(Silver));
    }

    #[test]
    fn test_hints_follow_registry_order() {
        for puzzle in puzzles() {
            let order: Vec<_> = puzzle.hints.iter().map(|h| h.character).collect();
            assert_eq!(order, CharacterId::ALL.to_vec());
            assert!(puzzle.hints.iter().all(|h| !h.text.is_empty()));
        }
    }

    #[test]
    fn test_puzzle_one_key() {
        let solution = &get_puzzle(1).unwrap().solution;
        assert_eq!(solution.required(Silver), Right);
        assert_eq!(solution.required(Bat), CenterRight);
        assert_eq!(solution.required(Fox), Left);
        assert_eq!(solution.required(Cat), CenterLeft);
        assert_eq!(solution.required(Blue), Center);
    }

    #[test]
    fn test_puzzle_numbers_match_index() {
        for n in PuzzleNumber::all() {
            assert_eq!(puzzle(n).number, n);
        }
        assert_eq!(PuzzleNumber::all().count(), 3);
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(get_puzzle(0).unwrap_err(), CatalogError::UnknownPuzzle(0));
        assert_eq!(get_puzzle(4).unwrap_err(), CatalogError::UnknownPuzzle(4));
        assert!(PuzzleNumber::try_from(255).is_err());
        assert!(serde_json::from_str::<PuzzleNumber>("7").is_err());
    }

    #[test]
    fn test_random_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let n = PuzzleNumber::random(&mut rng);
            seen[usize::from(n.get() - 1)] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn test_hint_for() {
        let puzzle = get_puzzle(2).unwrap();
        assert!(puzzle.hint_for(Bat).text.contains("Middleman"));
    }
}
