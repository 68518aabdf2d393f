//! Status bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use lineup_core::{CharacterId, OutsideDropPolicy};

use crate::ui::theme::GameTheme;

/// Status bar widget showing board progress
pub struct StatusBarWidget<'a> {
    placed: usize,
    dragging: Option<CharacterId>,
    policy: OutsideDropPolicy,
    theme: &'a GameTheme,
    message: Option<&'a str>,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(placed: usize, policy: OutsideDropPolicy, theme: &'a GameTheme) -> Self {
        Self {
            placed,
            dragging: None,
            policy,
            theme,
            message: None,
        }
    }

    pub fn dragging(mut self, dragging: Option<CharacterId>) -> Self {
        self.dragging = dragging;
        self
    }

    pub fn message(mut self, message: Option<&'a str>) -> Self {
        self.message = message;
        self
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(
                format!("Placed: {}/5", self.placed),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(
                format!("Outside drop: {}", self.policy),
                self.theme.system_style(),
            ),
        ];

        if let Some(character) = self.dragging {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                format!("Dragging {}", character.display_name()),
                self.theme.character_style(character),
            ));
        }

        if let Some(msg) = self.message {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                msg,
                Style::default().add_modifier(Modifier::DIM),
            ));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

/// Hotkey bar widget
pub struct HotkeyBarWidget<'a> {
    overlay_open: bool,
    theme: &'a GameTheme,
}

impl<'a> HotkeyBarWidget<'a> {
    pub fn new(overlay_open: bool, theme: &'a GameTheme) -> Self {
        Self {
            overlay_open,
            theme,
        }
    }
}

impl Widget for HotkeyBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hotkeys = if self.overlay_open {
            vec![("Esc:close", true), ("q:close", false)]
        } else {
            vec![
                ("mouse:drag", true),
                ("c:check", true),
                ("r:reset", true),
                ("n:random", true),
                ("1-3:puzzle", true),
                ("?:help", false),
                ("q:quit", false),
            ]
        };

        let spans: Vec<Span> = hotkeys
            .iter()
            .flat_map(|(text, primary)| {
                let style = if *primary {
                    Style::default()
                } else {
                    self.theme.system_style()
                };
                vec![Span::styled(*text, style), Span::raw("  ")]
            })
            .collect();

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
