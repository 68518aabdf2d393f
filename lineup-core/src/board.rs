//! Board positions and the placement state.
//!
//! `Placement` records, for each character, whether it sits in the pool or
//! on one of the five positions. No two characters ever share a position:
//! `place` evicts the previous occupant in the same call that seats the new
//! one.

use crate::roster::CharacterId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a string does not name a board position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown position: {0}")]
pub struct ParsePositionError(pub String);

/// One of the five fixed slots, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "position-left")]
    Left,
    #[serde(rename = "position-center-left")]
    CenterLeft,
    #[serde(rename = "position-center")]
    Center,
    #[serde(rename = "position-center-right")]
    CenterRight,
    #[serde(rename = "position-right")]
    Right,
}

impl Position {
    /// All positions, left to right.
    pub const ALL: [Position; 5] = [
        Position::Left,
        Position::CenterLeft,
        Position::Center,
        Position::CenterRight,
        Position::Right,
    ];

    /// The position label ("position-left", ...).
    pub fn label(&self) -> &'static str {
        match self {
            Position::Left => "position-left",
            Position::CenterLeft => "position-center-left",
            Position::Center => "position-center",
            Position::CenterRight => "position-center-right",
            Position::Right => "position-right",
        }
    }

    /// The label without the `position-` prefix.
    pub fn short_label(&self) -> &'static str {
        &self.label()["position-".len()..]
    }

    /// Human-readable name for headers.
    pub fn title(&self) -> &'static str {
        match self {
            Position::Left => "Left",
            Position::CenterLeft => "Center Left",
            Position::Center => "Center",
            Position::CenterRight => "Center Right",
            Position::Right => "Right",
        }
    }

    /// Column index, 0 for the leftmost slot.
    pub fn index(&self) -> usize {
        match self {
            Position::Left => 0,
            Position::CenterLeft => 1,
            Position::Center => 2,
            Position::CenterRight => 3,
            Position::Right => 4,
        }
    }

    /// Position at a column index, if in range.
    pub fn from_index(index: usize) -> Option<Position> {
        Position::ALL.get(index).copied()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Accepts both `position-center-left` and `center-left`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        let short = lowered.strip_prefix("position-").unwrap_or(&lowered);
        Position::ALL
            .into_iter()
            .find(|p| p.short_label() == short)
            .ok_or_else(|| ParsePositionError(s.to_string()))
    }
}

/// Where a character currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "position")]
pub enum Slot {
    /// In the pool of characters not yet on the board.
    #[default]
    Unplaced,
    Placed(Position),
}

impl Slot {
    /// The position, if placed.
    pub fn position(&self) -> Option<Position> {
        match self {
            Slot::Unplaced => None,
            Slot::Placed(p) => Some(*p),
        }
    }

    pub fn is_placed(&self) -> bool {
        matches!(self, Slot::Placed(_))
    }
}

/// Result of a successful `Placement::place` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceOutcome {
    pub character: CharacterId,
    pub position: Position,
    /// Where the character was before the move (`None` if it came from the pool).
    pub from: Option<Position>,
    /// Previous occupant sent back to the pool, if any.
    pub evicted: Option<CharacterId>,
    /// False when the character was already on this position.
    pub changed: bool,
}

/// Error returned when deserialized slots seat two characters on one position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{first} and {second} both occupy {position}")]
pub struct SharedPositionError {
    pub position: Position,
    pub first: CharacterId,
    pub second: CharacterId,
}

/// Current assignment of every character to the pool or a position.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawPlacement")]
pub struct Placement {
    slots: [Slot; 5],
}

/// Unchecked wire form of `Placement`.
#[derive(Deserialize)]
struct RawPlacement {
    slots: [Slot; 5],
}

impl TryFrom<RawPlacement> for Placement {
    type Error = SharedPositionError;

    fn try_from(raw: RawPlacement) -> Result<Self, Self::Error> {
        Placement::try_from(raw.slots)
    }
}

impl TryFrom<[Slot; 5]> for Placement {
    type Error = SharedPositionError;

    /// Build a placement from slots indexed by `CharacterId::index`,
    /// rejecting any position claimed twice.
    fn try_from(slots: [Slot; 5]) -> Result<Self, Self::Error> {
        let mut holders: [Option<CharacterId>; 5] = [None; 5];
        for (character, slot) in CharacterId::ALL.into_iter().zip(slots) {
            let Some(position) = slot.position() else {
                continue;
            };
            if let Some(first) = holders[position.index()] {
                return Err(SharedPositionError {
                    position,
                    first,
                    second: character,
                });
            }
            holders[position.index()] = Some(character);
        }
        Ok(Self { slots })
    }
}

impl Placement {
    /// A placement with every character in the pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current slot of a character.
    pub fn slot(&self, character: CharacterId) -> Slot {
        self.slots[character.index()]
    }

    /// Current position of a character, if placed.
    pub fn position_of(&self, character: CharacterId) -> Option<Position> {
        self.slot(character).position()
    }

    /// Character occupying a position, if any.
    pub fn occupant(&self, position: Position) -> Option<CharacterId> {
        CharacterId::ALL
            .into_iter()
            .find(|c| self.slot(*c) == Slot::Placed(position))
    }

    /// Seat `character` on `position`, sending any other occupant back to the pool.
    ///
    /// Placing a character on the position it already holds changes nothing.
    pub fn place(&mut self, character: CharacterId, position: Position) -> PlaceOutcome {
        let from = self.position_of(character);
        if from == Some(position) {
            return PlaceOutcome {
                character,
                position,
                from,
                evicted: None,
                changed: false,
            };
        }

        let evicted = self.occupant(position);
        if let Some(other) = evicted {
            self.slots[other.index()] = Slot::Unplaced;
        }
        self.slots[character.index()] = Slot::Placed(position);

        PlaceOutcome {
            character,
            position,
            from,
            evicted,
            changed: true,
        }
    }

    /// Return a character to the pool. Returns whether anything changed.
    pub fn unplace(&mut self, character: CharacterId) -> bool {
        let was_placed = self.slot(character).is_placed();
        self.slots[character.index()] = Slot::Unplaced;
        was_placed
    }

    /// Send every character back to the pool.
    pub fn reset(&mut self) {
        self.slots = [Slot::Unplaced; 5];
    }

    /// True when no character is on the board.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|s| !s.is_placed())
    }

    /// Number of characters on the board.
    pub fn placed_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_placed()).count()
    }

    /// Characters still in the pool, in registry order.
    pub fn unplaced(&self) -> impl Iterator<Item = CharacterId> + '_ {
        CharacterId::ALL
            .into_iter()
            .filter(|c| !self.slot(*c).is_placed())
    }

    /// Every character with its slot, in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (CharacterId, Slot)> + '_ {
        CharacterId::ALL.into_iter().map(|c| (c, self.slot(c)))
    }

    /// Occupant of each position, left to right.
    pub fn row(&self) -> [Option<CharacterId>; 5] {
        Position::ALL.map(|p| self.occupant(p))
    }
}
