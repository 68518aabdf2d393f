//! Event handling for the lineup TUI

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::App;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
    NeedsRedraw,
}

/// Handle a terminal event
pub fn handle_event(app: &mut App, event: Event) -> EventResult {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Resize(_, _) => EventResult::NeedsRedraw,
        _ => EventResult::Continue,
    }
}

/// Handle a mouse event
fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> EventResult {
    if app.has_overlay() {
        return EventResult::Continue;
    }

    let handled = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.press(mouse.column, mouse.row),
        MouseEventKind::Drag(MouseButton::Left) => app.drag_to(mouse.column, mouse.row),
        MouseEventKind::Up(MouseButton::Left) => app.release(mouse.column, mouse.row),
        _ => false,
    };

    if handled {
        EventResult::NeedsRedraw
    } else {
        EventResult::Continue
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    // Global shortcuts (always work)
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return EventResult::Quit;
    }

    if app.has_overlay() {
        return handle_overlay_key(app, key);
    }

    match key.code {
        KeyCode::Char('q') => EventResult::Quit,

        KeyCode::Char('?') | KeyCode::F(1) => {
            app.toggle_help();
            EventResult::NeedsRedraw
        }

        KeyCode::Char('c') | KeyCode::Enter => {
            app.check();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('r') => {
            app.reset();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('n') => {
            app.random_puzzle();
            EventResult::NeedsRedraw
        }
        KeyCode::Char(digit @ '1'..='3') => {
            app.select_puzzle(digit as u8 - b'0');
            EventResult::NeedsRedraw
        }

        KeyCode::Esc => {
            app.cancel_drag();
            EventResult::NeedsRedraw
        }

        _ => EventResult::Continue,
    }
}

/// Handle keys when an overlay is open
fn handle_overlay_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.close_overlay();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use lineup_core::{SessionConfig, Verdict};
    use ratatui::layout::Rect;

    fn app() -> App {
        let mut app = App::new(SessionConfig::new().with_seed(3));
        app.viewport = Rect::new(0, 0, 100, 40);
        app
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert_eq!(handle_event(&mut app, key(KeyCode::Char('q'))), EventResult::Quit);
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(handle_event(&mut app, ctrl_c), EventResult::Quit);
    }

    #[test]
    fn test_digit_selects_puzzle() {
        let mut app = app();
        handle_event(&mut app, key(KeyCode::Char('3')));
        assert_eq!(app.session.puzzle_number().get(), 3);
    }

    #[test]
    fn test_check_key_shows_verdict() {
        let mut app = app();
        handle_event(&mut app, key(KeyCode::Char('c')));
        assert_eq!(app.session.message(), Some(Verdict::Incorrect));
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut app = app();
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(handle_event(&mut app, release), EventResult::Continue);
        assert_eq!(app.session.message(), None);
    }

    #[test]
    fn test_overlay_swallows_keys() {
        let mut app = app();
        handle_event(&mut app, key(KeyCode::Char('?')));
        assert!(app.has_overlay());

        // 'q' closes the overlay instead of quitting
        assert_eq!(
            handle_event(&mut app, key(KeyCode::Char('q'))),
            EventResult::NeedsRedraw
        );
        assert!(!app.has_overlay());
    }

    #[test]
    fn test_release_behind_help_leaves_nothing_in_flight() {
        let mut app = app();
        let layout = app.layout();
        let pool = layout.pool_slots[2];

        handle_event(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), pool.x + 2, pool.y + 2));
        handle_event(&mut app, key(KeyCode::Char('?')));
        handle_event(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), pool.x + 2, pool.y + 2));
        handle_event(&mut app, key(KeyCode::Esc));

        assert!(!app.has_overlay());
        assert!(app.session.drag().in_flight().is_none());
    }

    #[test]
    fn test_mouse_drag_places_character() {
        let mut app = app();
        let layout = app.layout();
        let pool = layout.pool_slots[1];
        let target = layout.positions[3];
        let (tx, ty) = (target.x + 2, target.y + 2);

        handle_event(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), pool.x + 2, pool.y + 2));
        handle_event(&mut app, mouse(MouseEventKind::Drag(MouseButton::Left), tx, ty));
        let result = handle_event(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), tx, ty));

        assert_eq!(result, EventResult::NeedsRedraw);
        assert_eq!(
            app.session.placement().occupant(lineup_core::Position::CenterRight),
            Some(lineup_core::CharacterId::Bat)
        );
    }
}
