//! Main application state and logic

use lineup_core::{CharacterId, DropOutcome, PuzzleSession, SessionConfig};
use ratatui::layout::Rect;
use tracing::debug;

use crate::ui::layout::AppLayout;
use crate::ui::theme::GameTheme;
use crate::ui::Overlay;

/// Main application state
pub struct App {
    pub session: PuzzleSession,

    // UI state
    pub theme: GameTheme,
    overlay: Option<Overlay>,

    /// Last frame area, used to hit-test mouse events
    pub viewport: Rect,
    /// Pointer cell while a drag is in flight
    pub pointer: Option<(u16, u16)>,

    // Status
    status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    /// Create a new application around a fresh session
    pub fn new(config: SessionConfig) -> Self {
        Self {
            session: PuzzleSession::new(config),
            theme: GameTheme::default(),
            overlay: None,
            viewport: Rect::default(),
            pointer: None,
            status_message: Some("Drag a character onto a position. Press ? for help".to_string()),
            should_quit: false,
        }
    }

    /// Layout of the last drawn frame
    pub fn layout(&self) -> AppLayout {
        AppLayout::calculate(self.viewport)
    }

    /// Character drawn at a screen cell, on the board or in the pool
    pub fn character_at(&self, column: u16, row: u16) -> Option<CharacterId> {
        let layout = self.layout();
        let placement = self.session.placement();

        if let Some(position) = layout.position_at(column, row) {
            return placement.occupant(position);
        }

        layout
            .pool_slot_at(column, row)
            .map(|i| CharacterId::ALL[i])
            .filter(|&character| !placement.slot(character).is_placed())
    }

    // =========================================================================
    // Mouse drag
    // =========================================================================

    /// Mouse button pressed: pick up whatever character is under the pointer
    pub fn press(&mut self, column: u16, row: u16) -> bool {
        let Some(character) = self.character_at(column, row) else {
            return false;
        };

        self.session.begin_drag(character);
        self.pointer = Some((column, row));
        self.session.hover(self.layout().position_at(column, row));
        let hint = self.session.puzzle().hint_for(character);
        self.set_status(hint.text);
        true
    }

    /// Pointer moved with the button held
    pub fn drag_to(&mut self, column: u16, row: u16) -> bool {
        if self.session.drag().in_flight().is_none() {
            return false;
        }

        self.pointer = Some((column, row));
        self.session.hover(self.layout().position_at(column, row));
        true
    }

    /// Mouse button released: drop onto the position under the pointer
    pub fn release(&mut self, column: u16, row: u16) -> bool {
        if self.session.drag().in_flight().is_none() {
            return false;
        }

        let target = self.layout().position_at(column, row);
        self.pointer = None;
        let outcome = self.session.drop_on(target);
        debug!(?outcome, column, row, "mouse drop");
        self.report_drop(&outcome);
        true
    }

    /// Abandon a drag in progress
    pub fn cancel_drag(&mut self) {
        if let Some(character) = self.session.drag().in_flight() {
            self.session.cancel_drag();
            self.pointer = None;
            self.set_status(format!("{} put down", character.display_name()));
        }
    }

    fn report_drop(&mut self, outcome: &DropOutcome) {
        match outcome {
            DropOutcome::Placed(placed) => match placed.evicted {
                Some(evicted) => self.set_status(format!(
                    "{} moved to {}, {} back to the pool",
                    placed.character.display_name(),
                    placed.position.title(),
                    evicted.display_name()
                )),
                None => self.set_status(format!(
                    "{} moved to {}",
                    placed.character.display_name(),
                    placed.position.title()
                )),
            },
            DropOutcome::Returned(character) => {
                self.set_status(format!("{} back to the pool", character.display_name()))
            }
            DropOutcome::Ignored(_) | DropOutcome::NothingInFlight => self.clear_status(),
        }
    }

    // =========================================================================
    // Controls
    // =========================================================================

    /// Check the board
    pub fn check(&mut self) {
        self.session.validate();
        self.clear_status();
    }

    /// Send every character back to the pool
    pub fn reset(&mut self) {
        self.session.reset();
        self.pointer = None;
        self.set_status("Board reset");
    }

    /// Load a random puzzle
    pub fn random_puzzle(&mut self) {
        let number = self.session.load_random_puzzle();
        self.pointer = None;
        self.set_status(format!("Puzzle {number} loaded"));
    }

    /// Load a specific puzzle
    pub fn select_puzzle(&mut self, n: u8) {
        match self.session.load_puzzle(n) {
            Ok(()) => {
                self.pointer = None;
                self.set_status(format!("Puzzle {n} loaded"));
            }
            Err(e) => self.set_status(format!("Error: {e}")),
        }
    }

    /// Toggle help overlay
    /// Toggle help overlay; opening it drops any drag in progress
    pub fn toggle_help(&mut self) {
        if matches!(self.overlay, Some(Overlay::Help)) {
            self.overlay = None;
        } else {
            self.session.cancel_drag();
            self.pointer = None;
            self.overlay = Some(Overlay::Help);
        }
    }

    /// Close the current overlay
    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    /// Set status message (always overwrites)
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    // =========================================================================
    // Getters for private fields
    // =========================================================================

    /// Get the current overlay
    pub fn overlay(&self) -> Option<Overlay> {
        self.overlay
    }

    /// Get the current status message
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Check if an overlay is currently open
    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineup_core::{OutsideDropPolicy, Position, Slot, Verdict};

    fn app() -> App {
        let mut app = App::new(SessionConfig::new().with_seed(7));
        app.viewport = Rect::new(0, 0, 100, 40);
        app
    }

    fn center(rect: Rect) -> (u16, u16) {
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    fn drag(app: &mut App, from: Rect, to: Rect) {
        let (x, y) = center(from);
        assert!(app.press(x, y), "nothing to pick up at {from:?}");
        let (x, y) = center(to);
        app.drag_to(x, y);
        app.release(x, y);
    }

    #[test]
    fn test_drag_from_pool_to_position() {
        let mut app = app();
        let layout = app.layout();

        drag(&mut app, layout.pool_slots[2], layout.positions[0]);

        assert_eq!(
            app.session.placement().slot(CharacterId::Fox),
            Slot::Placed(Position::Left)
        );
        assert!(app.pointer.is_none());
        let (x, y) = center(layout.pool_slots[2]);
        assert_eq!(app.character_at(x, y), None);
    }

    #[test]
    fn test_drop_on_occupied_position_evicts() {
        let mut app = app();
        let layout = app.layout();

        drag(&mut app, layout.pool_slots[0], layout.positions[4]);
        drag(&mut app, layout.pool_slots[1], layout.positions[4]);

        let placement = app.session.placement();
        assert_eq!(placement.occupant(Position::Right), Some(CharacterId::Bat));
        assert_eq!(placement.slot(CharacterId::Silver), Slot::Unplaced);
        assert!(app.status_message().unwrap_or_default().contains("back to the pool"));
    }

    #[test]
    fn test_hover_follows_pointer() {
        let mut app = app();
        let layout = app.layout();

        let (x, y) = center(layout.pool_slots[3]);
        app.press(x, y);
        let hint = app.session.puzzle().hint_for(CharacterId::Cat).text;
        assert_eq!(app.status_message(), Some(hint));

        let (x, y) = center(layout.positions[1]);
        app.drag_to(x, y);

        assert_eq!(app.session.drag().hovered(), Some(Position::CenterLeft));
        assert_eq!(app.pointer, Some((x, y)));

        // Leaving the board clears the highlight but keeps the drag
        let (x, y) = center(layout.hints_area);
        app.drag_to(x, y);
        assert_eq!(app.session.drag().hovered(), None);
        assert_eq!(app.session.drag().in_flight(), Some(CharacterId::Cat));
    }

    #[test]
    fn test_release_outside_is_ignored_by_default() {
        let mut app = app();
        let layout = app.layout();
        drag(&mut app, layout.pool_slots[4], layout.positions[2]);

        drag(&mut app, layout.positions[2], layout.hints_area);

        assert_eq!(
            app.session.placement().slot(CharacterId::Blue),
            Slot::Placed(Position::Center)
        );
        assert!(app.session.drag().in_flight().is_none());
    }

    #[test]
    fn test_release_outside_can_return_to_pool() {
        let mut app = App::new(
            SessionConfig::new()
                .with_seed(7)
                .with_outside_drop(OutsideDropPolicy::ReturnToPool),
        );
        app.viewport = Rect::new(0, 0, 100, 40);
        let layout = app.layout();
        drag(&mut app, layout.pool_slots[4], layout.positions[2]);

        drag(&mut app, layout.positions[2], layout.message_area);

        assert_eq!(app.session.placement().slot(CharacterId::Blue), Slot::Unplaced);
    }

    #[test]
    fn test_press_on_empty_cell_does_nothing() {
        let mut app = app();
        let layout = app.layout();
        let (x, y) = center(layout.positions[0]);

        assert!(!app.press(x, y));
        assert!(!app.release(x, y));
        assert!(app.session.drag().in_flight().is_none());
    }

    #[test]
    fn test_check_and_reset() {
        let mut app = app();
        app.select_puzzle(1);
        app.check();
        assert_eq!(app.session.message(), Some(Verdict::Incorrect));

        app.reset();
        assert_eq!(app.session.message(), None);
        assert!(app.session.placement().is_empty());
    }

    #[test]
    fn test_select_unknown_puzzle_sets_error() {
        let mut app = app();
        app.select_puzzle(2);
        app.select_puzzle(9);

        assert_eq!(app.session.puzzle_number().get(), 2);
        assert!(app.status_message().unwrap_or_default().starts_with("Error"));
    }

    #[test]
    fn test_opening_help_cancels_drag() {
        let mut app = app();
        let layout = app.layout();
        let (x, y) = center(layout.pool_slots[0]);
        app.press(x, y);
        let (x, y) = center(layout.positions[0]);
        app.drag_to(x, y);

        app.toggle_help();
        assert!(app.session.drag().in_flight().is_none());
        assert!(app.session.drag().hovered().is_none());
        assert!(app.pointer.is_none());

        app.toggle_help();
        assert!(!app.release(x, y));
        assert!(app.session.placement().is_empty());
    }

    #[test]
    fn test_toggle_help() {
        let mut app = app();
        app.toggle_help();
        assert_eq!(app.overlay(), Some(Overlay::Help));
        app.toggle_help();
        assert!(!app.has_overlay());
    }
}
