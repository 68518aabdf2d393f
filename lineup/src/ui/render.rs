//! Render orchestration for the lineup TUI

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use lineup_core::{CharacterId, Position};

use crate::app::App;
use crate::ui::layout::{centered_rect_fixed, AppLayout};
use crate::ui::widgets::{CardWidget, HintsWidget, HotkeyBarWidget, MessageWidget, StatusBarWidget};

/// Overlay types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Help,
}

/// Width and height of the card drawn under the pointer while dragging
const GHOST_SIZE: (u16, u16) = (16, 3);

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = AppLayout::calculate(area);

    render_title_bar(frame, app, layout.title_area);

    let hints = HintsWidget::new(app.session.hints(), &app.theme)
        .title(format!(" Hints - Puzzle {} ", app.session.puzzle_number()));
    frame.render_widget(hints, layout.hints_area);

    render_board(frame, app, &layout);
    render_pool(frame, app, &layout);

    frame.render_widget(
        MessageWidget::new(app.session.message(), &app.theme),
        layout.message_area,
    );

    let status = StatusBarWidget::new(
        app.session.placement().placed_count(),
        app.session.config().outside_drop,
        &app.theme,
    )
    .dragging(app.session.drag().in_flight())
    .message(app.status_message());
    frame.render_widget(status, layout.status_bar);

    frame.render_widget(
        HotkeyBarWidget::new(app.has_overlay(), &app.theme),
        layout.hotkey_bar,
    );

    render_drag_ghost(frame, app, area);

    if let Some(overlay) = app.overlay() {
        render_overlay(frame, app, overlay, area);
    }
}

/// Render the title bar
fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        " Lineup | Puzzle {} of {} ",
        app.session.puzzle_number(),
        lineup_core::PuzzleNumber::COUNT
    );

    let line = Line::from(Span::styled(
        title,
        Style::default()
            .fg(app.theme.foreground)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the five positions, left to right
fn render_board(frame: &mut Frame, app: &App, layout: &AppLayout) {
    let dragging = app.session.drag().in_flight();
    let hovered = app.session.drag().hovered();

    for (position, rect) in Position::ALL.into_iter().zip(layout.positions) {
        let occupant = app.session.placement().occupant(position);
        let card = CardWidget::new(position.title(), occupant, &app.theme)
            .highlighted(hovered == Some(position))
            .lifted(occupant.is_some() && occupant == dragging);
        frame.render_widget(card, rect);
    }
}

/// Render the pool; each character keeps a fixed column while unplaced
fn render_pool(frame: &mut Frame, app: &App, layout: &AppLayout) {
    let dragging = app.session.drag().in_flight();
    for (character, rect) in CharacterId::ALL.into_iter().zip(layout.pool_slots) {
        let waiting = !app.session.placement().slot(character).is_placed();
        let shown = waiting.then_some(character);
        let card = CardWidget::new("Pool", shown, &app.theme)
            .lifted(waiting && dragging == Some(character));
        frame.render_widget(card, rect);
    }
}

/// Draw the dragged character next to the pointer
fn render_drag_ghost(frame: &mut Frame, app: &App, area: Rect) {
    let (Some(character), Some((column, row))) = (app.session.drag().in_flight(), app.pointer)
    else {
        return;
    };

    let (width, height) = GHOST_SIZE;
    let x = column.min(area.right().saturating_sub(width));
    let y = row.min(area.bottom().saturating_sub(height));
    let ghost = Rect::new(x, y, width.min(area.width), height.min(area.height));

    frame.render_widget(Clear, ghost);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(true));
    let text = Paragraph::new(Line::from(Span::styled(
        character.display_name(),
        app.theme.character_style(character),
    )))
    .block(block);
    frame.render_widget(text, ghost);
}

/// Render overlay
fn render_overlay(frame: &mut Frame, app: &App, overlay: Overlay, area: Rect) {
    match overlay {
        Overlay::Help => render_help_overlay(frame, app, area),
    }
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect_fixed(52, 18, area);

    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(Span::styled(
            " Lineup - Help ",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Mouse:",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from("  Drag a character onto a position to place it"),
        Line::from("  A character already there goes back to the pool"),
        Line::from(""),
        Line::from(Span::styled(
            "Keys:",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from("  c / Enter   Check the board"),
        Line::from("  r           Reset the board"),
        Line::from("  n           Random puzzle"),
        Line::from("  1 2 3       Choose a puzzle"),
        Line::from("  Esc         Cancel a drag"),
        Line::from("  q           Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc or q to close",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(app.theme.border_style(true)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help, popup_area);
}
