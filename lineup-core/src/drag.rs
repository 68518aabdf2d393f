//! The drag-and-drop gesture.
//!
//! A drag starts on a character (in the pool or on the board), optionally
//! hovers over positions, and ends with a drop either on a position or
//! somewhere that is not a position. Only the drop mutates the placement.

use crate::board::{PlaceOutcome, Placement, Position};
use crate::roster::CharacterId;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// What happens when a character is dropped somewhere that is not a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutsideDropPolicy {
    /// Leave the character where it was.
    #[default]
    Ignore,
    /// Send the character back to the pool.
    ReturnToPool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown drop policy: {0} (expected \"ignore\" or \"return\")")]
pub struct ParseDropPolicyError(pub String);

impl FromStr for OutsideDropPolicy {
    type Err = ParseDropPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ignore" | "noop" | "no-op" => Ok(OutsideDropPolicy::Ignore),
            "return" | "return-to-pool" | "pool" => Ok(OutsideDropPolicy::ReturnToPool),
            _ => Err(ParseDropPolicyError(s.to_string())),
        }
    }
}

impl fmt::Display for OutsideDropPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutsideDropPolicy::Ignore => write!(f, "ignore"),
            OutsideDropPolicy::ReturnToPool => write!(f, "return"),
        }
    }
}

/// Where a drag ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    Position(Position),
    /// Anywhere that is not a position (the pool, the hints, off-screen).
    Outside,
}

impl From<Position> for DropTarget {
    fn from(position: Position) -> Self {
        DropTarget::Position(position)
    }
}

impl From<Option<Position>> for DropTarget {
    fn from(position: Option<Position>) -> Self {
        position.map_or(DropTarget::Outside, DropTarget::Position)
    }
}

/// Result of finishing a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Nothing was being dragged.
    NothingInFlight,
    /// The character was seated on the target position.
    Placed(PlaceOutcome),
    /// Dropped outside; the character stayed where it was.
    Ignored(CharacterId),
    /// Dropped outside; the character went back to the pool.
    Returned(CharacterId),
}

impl DropOutcome {
    /// True if the placement was modified.
    pub fn changed_placement(&self) -> bool {
        match self {
            DropOutcome::Placed(outcome) => outcome.changed,
            DropOutcome::Returned(_) => true,
            DropOutcome::NothingInFlight | DropOutcome::Ignored(_) => false,
        }
    }
}

/// In-flight gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragState {
    in_flight: Option<CharacterId>,
    hovered: Option<Position>,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start dragging a character. Its slot is untouched until the drop.
    pub fn begin(&mut self, character: CharacterId) {
        debug!(character = %character, "drag started");
        self.in_flight = Some(character);
        self.hovered = None;
    }

    /// Character being dragged, if any.
    pub fn in_flight(&self) -> Option<CharacterId> {
        self.in_flight
    }

    /// Position currently highlighted as the drop target.
    pub fn hovered(&self) -> Option<Position> {
        self.hovered
    }

    /// Update the highlighted position. Ignored while nothing is dragged.
    pub fn hover(&mut self, position: Option<Position>) {
        if self.in_flight.is_some() {
            self.hovered = position;
        }
    }

    /// Abandon the gesture without touching the placement.
    pub fn cancel(&mut self) {
        self.in_flight = None;
        self.hovered = None;
    }

    /// Finish the gesture, applying it to `placement`.
    pub fn drop_on(
        &mut self,
        target: DropTarget,
        placement: &mut Placement,
        policy: OutsideDropPolicy,
    ) -> DropOutcome {
        let Some(character) = self.in_flight.take() else {
            self.hovered = None;
            return DropOutcome::NothingInFlight;
        };
        self.hovered = None;

        let outcome = match (target, policy) {
            (DropTarget::Position(position), _) => DropOutcome::Placed(placement.place(character, position)),
            (DropTarget::Outside, OutsideDropPolicy::Ignore) => DropOutcome::Ignored(character),
            (DropTarget::Outside, OutsideDropPolicy::ReturnToPool) => {
                placement.unplace(character);
                DropOutcome::Returned(character)
            }
        };
        debug!(character = %character, ?target, ?outcome, "drop");
        outcome
    }
}
