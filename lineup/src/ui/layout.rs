//! Layout calculations for the lineup TUI
//!
//! Both rendering and mouse hit-testing go through `AppLayout::calculate`, so
//! a drop lands on exactly the card the player sees under the pointer.

use lineup_core::Position;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Number of columns on the board and in the pool
const COLUMNS: usize = 5;

/// Calculate the main layout areas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub title_area: Rect,
    pub hints_area: Rect,
    pub board_area: Rect,
    pub positions: [Rect; COLUMNS],
    pub pool_area: Rect,
    pub pool_slots: [Rect; COLUMNS],
    pub message_area: Rect,
    pub status_bar: Rect,
    pub hotkey_bar: Rect,
}

impl AppLayout {
    /// Calculate layout based on terminal size
    pub fn calculate(area: Rect) -> Self {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title bar
                Constraint::Min(7),    // Hints
                Constraint::Length(6), // Board
                Constraint::Length(6), // Pool
                Constraint::Length(3), // Message
                Constraint::Length(1), // Status bar
                Constraint::Length(1), // Hotkey bar
            ])
            .split(area);

        let board_area = main_chunks[2];
        let pool_area = main_chunks[3];

        Self {
            title_area: main_chunks[0],
            hints_area: main_chunks[1],
            board_area,
            positions: columns(board_area),
            pool_area,
            pool_slots: columns(pool_area),
            message_area: main_chunks[4],
            status_bar: main_chunks[5],
            hotkey_bar: main_chunks[6],
        }
    }

    /// Board position under a screen cell
    pub fn position_at(&self, column: u16, row: u16) -> Option<Position> {
        self.positions
            .iter()
            .position(|rect| contains(*rect, column, row))
            .and_then(Position::from_index)
    }

    /// Pool column under a screen cell
    pub fn pool_slot_at(&self, column: u16, row: u16) -> Option<usize> {
        self.pool_slots
            .iter()
            .position(|rect| contains(*rect, column, row))
    }
}

/// Split an area into equal columns
fn columns(area: Rect) -> [Rect; COLUMNS] {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
        .split(area);
    std::array::from_fn(|i| chunks[i])
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Calculate fixed-size centered popup
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> AppLayout {
        AppLayout::calculate(Rect::new(0, 0, 100, 40))
    }

    #[test]
    fn test_positions_are_left_to_right() {
        let layout = layout();
        for pair in layout.positions.windows(2) {
            assert!(pair[0].x < pair[1].x);
            assert_eq!(pair[0].y, pair[1].y);
        }
    }

    #[test]
    fn test_hit_testing_matches_rects() {
        let layout = layout();
        for (i, rect) in layout.positions.iter().enumerate() {
            let hit = layout.position_at(rect.x + rect.width / 2, rect.y + 1);
            assert_eq!(hit, Position::from_index(i));
        }
        for (i, rect) in layout.pool_slots.iter().enumerate() {
            assert_eq!(layout.pool_slot_at(rect.x, rect.y), Some(i));
        }
    }

    #[test]
    fn test_outside_board_misses() {
        let layout = layout();
        assert_eq!(layout.position_at(0, layout.title_area.y), None);
        assert_eq!(layout.position_at(0, layout.pool_area.y), None);
        assert_eq!(layout.pool_slot_at(0, layout.board_area.y), None);
    }

    #[test]
    fn test_centered_rect_fits() {
        let area = Rect::new(0, 0, 20, 10);
        let popup = centered_rect_fixed(50, 20, area);
        assert_eq!(popup, area);
    }
}
