//! Keyboard cursor over the board.

use crate::types::{Direction, GameAction};

/// What the game should do in response to an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputIntent {
    /// Equivalent of a tap/click on the cell at this flat index
    PointerSelect(usize),
    Restart,
}

/// Cursor position on a `rows x cols` board. Movement stops at the edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    rows: u8,
    cols: u8,
    row: u8,
    col: u8,
}

impl Cursor {
    /// Cursor starting in the middle of the board
    pub fn new(rows: u8, cols: u8) -> Self {
        Self {
            rows,
            cols,
            row: rows / 2,
            col: cols / 2,
        }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// Flat index of the cell under the cursor
    pub fn index(&self) -> usize {
        self.row as usize * self.cols as usize + self.col as usize
    }

    /// Returns false when already at the edge.
    pub fn move_by(&mut self, direction: Direction) -> bool {
        let (dr, dc) = direction.delta();
        let row = self.row as i16 + dr;
        let col = self.col as i16 + dc;
        if row < 0 || col < 0 || row >= self.rows as i16 || col >= self.cols as i16 {
            return false;
        }
        self.row = row as u8;
        self.col = col as u8;
        true
    }

    /// Apply an action; cursor moves are absorbed here.
    pub fn apply(&mut self, action: GameAction) -> Option<InputIntent> {
        match action {
            GameAction::MoveCursor(direction) => {
                self.move_by(direction);
                None
            }
            GameAction::Select => Some(InputIntent::PointerSelect(self.index())),
            GameAction::Restart => Some(InputIntent::Restart),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_starts_centered() {
        let cursor = Cursor::new(7, 7);
        assert_eq!((cursor.row(), cursor.col()), (3, 3));
        assert_eq!(cursor.index(), 24);
    }

    #[test]
    fn test_cursor_clamps_at_edges() {
        let mut cursor = Cursor::new(2, 3);
        assert!(cursor.move_by(Direction::Up));
        assert!(!cursor.move_by(Direction::Up));
        assert!(cursor.move_by(Direction::Left));
        assert!(!cursor.move_by(Direction::Left));
        assert_eq!(cursor.index(), 0);
        assert!(cursor.move_by(Direction::Down));
        assert!(!cursor.move_by(Direction::Down));
        assert_eq!(cursor.index(), 3);
    }

    #[test]
    fn test_select_becomes_pointer_event() {
        let mut cursor = Cursor::new(7, 7);
        assert_eq!(cursor.apply(GameAction::MoveCursor(Direction::Right)), None);
        assert_eq!(cursor.apply(GameAction::Select), Some(InputIntent::PointerSelect(25)));
        assert_eq!(cursor.apply(GameAction::Restart), Some(InputIntent::Restart));
    }
}
