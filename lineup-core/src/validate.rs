//! Checking a placement against a puzzle's answer key.

use crate::board::{Placement, Slot};
use crate::catalog::Solution;
use crate::roster::characters;
use serde::Serialize;
use std::fmt;

/// Outcome of a check, shown to the player until the next reset or puzzle load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Solved,
    Incorrect,
}

impl Verdict {
    pub fn is_solved(&self) -> bool {
        matches!(self, Verdict::Solved)
    }

    /// Message shown to the player.
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Solved => "Congratulations! All characters are in the correct positions!",
            Verdict::Incorrect => "Not quite right. Try again!",
        }
    }
}

impl From<bool> for Verdict {
    fn from(solved: bool) -> Self {
        if solved {
            Verdict::Solved
        } else {
            Verdict::Incorrect
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// True iff every character is placed on its required position.
///
/// All five characters are checked; one left in the pool fails the whole
/// placement. There is no partial credit.
pub fn check_placement(placement: &Placement, solution: &Solution) -> bool {
    characters()
        .iter()
        .all(|c| placement.slot(c.id) == Slot::Placed(solution.required(c.id)))
}
