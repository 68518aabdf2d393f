//! Hint list widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use lineup_core::Hint;

use crate::ui::theme::GameTheme;

/// Numbered list of the active puzzle's hints
pub struct HintsWidget<'a> {
    hints: &'a [Hint],
    title: String,
    theme: &'a GameTheme,
}

impl<'a> HintsWidget<'a> {
    pub fn new(hints: &'a [Hint], theme: &'a GameTheme) -> Self {
        Self {
            hints,
            title: " Hints ".to_string(),
            theme,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

impl Widget for HintsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false));

        let lines: Vec<Line> = self
            .hints
            .iter()
            .enumerate()
            .map(|(i, hint)| {
                Line::from(vec![
                    Span::styled(
                        format!("{:>2}. ", i + 1),
                        self.theme.character_style(hint.character),
                    ),
                    Span::styled(hint.text, self.theme.hint_style()),
                ])
            })
            .collect();

        Paragraph::new(lines)
            .block(block)
            .style(Style::default())
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineup_core::get_puzzle;

    #[test]
    fn test_renders_every_hint() {
        let theme = GameTheme::default();
        let puzzle = get_puzzle(1).unwrap();
        let area = Rect::new(0, 0, 120, 8);
        let mut buf = Buffer::empty(area);

        HintsWidget::new(&puzzle.hints, &theme).render(area, &mut buf);

        let rendered: String = (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        assert!(rendered.contains("1. The Silver Hedgehog is an outsider"));
        assert!(rendered.contains("5. The Blue Hedgehog loves being the Center"));
    }
}
