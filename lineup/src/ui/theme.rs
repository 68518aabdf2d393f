//! Color theme and styling for the lineup TUI

use lineup_core::{CharacterId, Verdict};
use ratatui::style::{Color, Modifier, Style};

/// Game UI color theme
#[derive(Debug, Clone)]
pub struct GameTheme {
    // Base colors
    pub foreground: Color,
    pub border: Color,
    pub border_highlight: Color,

    // Character colors
    pub silver: Color,
    pub bat: Color,
    pub fox: Color,
    pub cat: Color,
    pub blue: Color,

    // Result colors
    pub success: Color,
    pub failure: Color,

    // Text colors
    pub hint_text: Color,
    pub system_text: Color,
}

impl Default for GameTheme {
    fn default() -> Self {
        Self {
            foreground: Color::White,
            border: Color::DarkGray,
            border_highlight: Color::Cyan,

            silver: Color::Gray,
            bat: Color::Magenta,
            fox: Color::Yellow,
            cat: Color::LightMagenta,
            blue: Color::LightBlue,

            success: Color::Green,
            failure: Color::Red,

            hint_text: Color::White,
            system_text: Color::DarkGray,
        }
    }
}

impl GameTheme {
    /// Color associated with a character
    pub fn character_color(&self, character: CharacterId) -> Color {
        match character {
            CharacterId::Silver => self.silver,
            CharacterId::Bat => self.bat,
            CharacterId::Fox => self.fox,
            CharacterId::Cat => self.cat,
            CharacterId::Blue => self.blue,
        }
    }

    /// Style for a character's name on a card
    pub fn character_style(&self, character: CharacterId) -> Style {
        Style::default()
            .fg(self.character_color(character))
            .add_modifier(Modifier::BOLD)
    }

    /// Style for a character that is currently being dragged
    pub fn lifted_style(&self, character: CharacterId) -> Style {
        Style::default()
            .fg(self.character_color(character))
            .add_modifier(Modifier::DIM | Modifier::ITALIC)
    }

    /// Get style for hint text
    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.hint_text)
    }

    /// Get style for system messages
    pub fn system_style(&self) -> Style {
        Style::default()
            .fg(self.system_text)
            .add_modifier(Modifier::DIM)
    }

    /// Style for the check result banner
    pub fn verdict_style(&self, verdict: Verdict) -> Style {
        let color = if verdict.is_solved() {
            self.success
        } else {
            self.failure
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Get border style
    pub fn border_style(&self, highlighted: bool) -> Style {
        Style::default().fg(if highlighted {
            self.border_highlight
        } else {
            self.border
        })
    }

    /// Get title style
    pub fn title_style(&self, highlighted: bool) -> Style {
        let style = Style::default().fg(if highlighted {
            self.border_highlight
        } else {
            self.foreground
        });

        if highlighted {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}
