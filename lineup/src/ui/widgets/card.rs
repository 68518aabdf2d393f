//! A single slot on the board or in the pool

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use lineup_core::CharacterId;

use crate::ui::theme::GameTheme;

/// One bordered slot, optionally holding a character
pub struct CardWidget<'a> {
    title: &'a str,
    character: Option<CharacterId>,
    theme: &'a GameTheme,
    highlighted: bool,
    lifted: bool,
}

impl<'a> CardWidget<'a> {
    pub fn new(title: &'a str, character: Option<CharacterId>, theme: &'a GameTheme) -> Self {
        Self {
            title,
            character,
            theme,
            highlighted: false,
            lifted: false,
        }
    }

    /// Draw the slot as the current drop target
    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    /// Draw the character as picked up
    pub fn lifted(mut self, lifted: bool) -> Self {
        self.lifted = lifted;
        self
    }
}

impl Widget for CardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", self.title),
                self.theme.title_style(self.highlighted),
            ))
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.highlighted));

        let lines = match self.character {
            Some(character) => {
                let style = if self.lifted {
                    self.theme.lifted_style(character)
                } else {
                    self.theme.character_style(character)
                };
                vec![
                    Line::from(""),
                    Line::from(Span::styled(lineup_core::character(character).display_name, style)),
                ]
            }
            None => vec![
                Line::from(""),
                Line::from(Span::styled("·", self.theme.system_style())),
            ],
        };

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}
