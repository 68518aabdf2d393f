//! The cast of characters.
//!
//! Every puzzle uses the same five characters. The registry is static data;
//! its order (silver, bat, fox, cat, blue) is the order used for rendering
//! the pool and for iterating during validation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a string does not name a known character.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown character: {0}")]
pub struct ParseCharacterError(pub String);

/// Identity of one of the five characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterId {
    Silver,
    Bat,
    Fox,
    Cat,
    Blue,
}

impl CharacterId {
    /// All character ids in registry order.
    pub const ALL: [CharacterId; 5] = [
        CharacterId::Silver,
        CharacterId::Bat,
        CharacterId::Fox,
        CharacterId::Cat,
        CharacterId::Blue,
    ];

    /// The short id string ("silver", "bat", ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterId::Silver => "silver",
            CharacterId::Bat => "bat",
            CharacterId::Fox => "fox",
            CharacterId::Cat => "cat",
            CharacterId::Blue => "blue",
        }
    }

    /// Index into registry-ordered arrays.
    pub fn index(&self) -> usize {
        match self {
            CharacterId::Silver => 0,
            CharacterId::Bat => 1,
            CharacterId::Fox => 2,
            CharacterId::Cat => 3,
            CharacterId::Blue => 4,
        }
    }

    /// Full registry entry for this id.
    pub fn character(&self) -> &'static Character {
        &CHARACTERS[self.index()]
    }

    /// Display name, e.g. "Silver Hedgehog".
    pub fn display_name(&self) -> &'static str {
        self.character().display_name
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CharacterId {
    type Err = ParseCharacterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        CharacterId::ALL
            .into_iter()
            .find(|id| id.as_str() == lowered)
            .ok_or_else(|| ParseCharacterError(s.to_string()))
    }
}

/// A character that can be dragged onto the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Character {
    pub id: CharacterId,
    pub display_name: &'static str,
    /// Path of the portrait used by graphical front-ends.
    pub image_ref: &'static str,
}

static CHARACTERS: [Character; 5] = [
    Character {
        id: CharacterId::Silver,
        display_name: "Silver Hedgehog",
        image_ref: "images/silver-hedge-hog.webp",
    },
    Character {
        id: CharacterId::Bat,
        display_name: "Bat",
        image_ref: "images/bat.png",
    },
    Character {
        id: CharacterId::Fox,
        display_name: "Fox",
        image_ref: "images/fox.png",
    },
    Character {
        id: CharacterId::Cat,
        display_name: "Cat",
        image_ref: "images/cat.png",
    },
    Character {
        id: CharacterId::Blue,
        display_name: "Blue Hedgehog",
        image_ref: "images/blue-hedge-hog.webp",
    },
];

/// All characters in registry order.
pub fn characters() -> &'static [Character] {
    &CHARACTERS
}

/// Look up a character by id.
pub fn character(id: CharacterId) -> &'static Character {
    id.character()
}
