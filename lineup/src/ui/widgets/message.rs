//! Check result banner

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use lineup_core::Verdict;

use crate::ui::theme::GameTheme;

/// Shows the last check result, or a dim prompt when nothing has been checked
pub struct MessageWidget<'a> {
    verdict: Option<Verdict>,
    theme: &'a GameTheme,
}

impl<'a> MessageWidget<'a> {
    pub fn new(verdict: Option<Verdict>, theme: &'a GameTheme) -> Self {
        Self { verdict, theme }
    }
}

impl Widget for MessageWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (line, border) = match self.verdict {
            Some(verdict) => (
                Line::from(Span::styled(verdict.message(), self.theme.verdict_style(verdict))),
                self.theme.verdict_style(verdict),
            ),
            None => (
                Line::from(Span::styled(
                    "Drag every character onto a position, then press c to check",
                    self.theme.system_style(),
                )),
                self.theme.border_style(false),
            ),
        };

        let block = Block::default().borders(Borders::ALL).border_style(border);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
