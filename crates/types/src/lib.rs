//! Shared types module - data structures and constants used by every crate
//!
//! Everything here is plain data with no external dependencies, so the same
//! definitions can be used by the engine, the terminal front end and tests.
//!
//! # Board Layout
//!
//! The board is a `rows x cols` grid stored row-major. A cell is addressed by
//! its linear index `row * cols + col`; row 0 is the top of the board and
//! gravity pulls tiles towards the last row.
//!
//! # Pacing Constants
//!
//! Delays (milliseconds) used when a cascade is replayed for animation:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep of the interactive runner (~60 FPS) |
//! | `SWAP_CHECK_DELAY_MS` | 300 | Swap shown before it is checked for matches |
//! | `FALL_DELAY_MS` | 300 | Removed cells shown empty before tiles fall |
//! | `RECHECK_DELAY_MS` | 200 | Refilled board shown before the next scan |
//! | `WIN_DELAY_MS` | 500 | Win shown before the celebration hand-off |
//!
//! The delays never change the outcome of a move.
//!
//! # Examples
//!
//! ```
//! use sweet_match_types::{Candy, Direction, TileKind};
//!
//! let kind = TileKind::from(Candy::Cookie);
//! assert_eq!(kind.index(), 2);
//! assert_eq!(kind.letter(), 'C');
//!
//! assert_eq!(Candy::from_str("milk"), Some(Candy::Milk));
//! assert_eq!(Direction::Left.delta(), (0, -1));
//! ```

/// Default board height (rows)
pub const DEFAULT_ROWS: u8 = 7;

/// Default board width (columns)
pub const DEFAULT_COLS: u8 = 7;

/// Default score that wins the game
pub const DEFAULT_WIN_SCORE: u32 = 300;

/// Points awarded per removed tile
pub const POINTS_PER_TILE: u32 = 10;

/// Shortest run that counts as a match
pub const MIN_RUN: usize = 3;

/// Smallest usable tile set. A single kind would refill into matches forever.
pub const MIN_KINDS: usize = 2;

/// Largest tile set (one letter per kind)
pub const MAX_KINDS: usize = 26;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Delay between a swap and its match check
pub const SWAP_CHECK_DELAY_MS: u32 = 300;

/// Delay between removing matched tiles and letting the columns fall
pub const FALL_DELAY_MS: u32 = 300;

/// Delay between a refill and the next scan
pub const RECHECK_DELAY_MS: u32 = 200;

/// Delay between the win and the celebration hand-off
pub const WIN_DELAY_MS: u32 = 500;

/// A tile kind: an index into the configured tile set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileKind(pub u8);

impl TileKind {
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Display letter: kind 0 is 'A', kind 1 is 'B', ...
    pub fn letter(self) -> char {
        if self.index() < MAX_KINDS {
            (b'A' + self.0) as char
        } else {
            '?'
        }
    }

    /// Parse a display letter (case-insensitive)
    pub fn from_letter(ch: char) -> Option<Self> {
        let upper = ch.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Some(TileKind(upper as u8 - b'A'))
        } else {
            None
        }
    }
}

/// Board cell.
///
/// - `None`: empty (only transiently, while a cascade is resolving)
/// - `Some(TileKind)`: a tile
pub type Cell = Option<TileKind>;

/// The default candy tile set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Candy {
    Strawberry,
    Chocolate,
    Cookie,
    Milk,
    Cupcake,
    Lollipop,
}

impl Candy {
    pub const ALL: [Candy; 6] = [
        Candy::Strawberry,
        Candy::Chocolate,
        Candy::Cookie,
        Candy::Milk,
        Candy::Cupcake,
        Candy::Lollipop,
    ];

    /// Parse candy from its name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "strawberry" => Some(Candy::Strawberry),
            "chocolate" => Some(Candy::Chocolate),
            "cookie" => Some(Candy::Cookie),
            "milk" => Some(Candy::Milk),
            "cupcake" => Some(Candy::Cupcake),
            "lollipop" => Some(Candy::Lollipop),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Candy::Strawberry => "🍓",
            Candy::Chocolate => "🍫",
            Candy::Cookie => "🍪",
            Candy::Milk => "🥛",
            Candy::Cupcake => "🧁",
            Candy::Lollipop => "🍬",
        }
    }
}

impl From<Candy> for TileKind {
    fn from(value: Candy) -> Self {
        TileKind(value as u8)
    }
}

/// Input state of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// No tile selected
    #[default]
    Idle,
    /// One tile armed, waiting for the second
    AwaitingSelection,
    /// A cascade is in flight; input is rejected
    Resolving,
    /// Win threshold reached; input is rejected until restart
    Won,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::AwaitingSelection => "awaiting_selection",
            Phase::Resolving => "resolving",
            Phase::Won => "won",
        }
    }

    /// Whether pointer input is accepted in this phase
    pub fn accepts_input(&self) -> bool {
        matches!(self, Phase::Idle | Phase::AwaitingSelection)
    }
}

/// Why the board changed (attached to board-changed events)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeCause {
    Swap,
    SwapReverted,
    Removed,
    Refilled,
    Reset,
}

impl ChangeCause {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeCause::Swap => "swap",
            ChangeCause::SwapReverted => "swap_reverted",
            ChangeCause::Removed => "removed",
            ChangeCause::Refilled => "refilled",
            ChangeCause::Reset => "reset",
        }
    }
}

/// Cursor movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// (row delta, col delta)
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Front-end actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveCursor(Direction),
    Select,
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_letters() {
        assert_eq!(TileKind(0).letter(), 'A');
        assert_eq!(TileKind(5).letter(), 'F');
        assert_eq!(TileKind(26).letter(), '?');
        assert_eq!(TileKind::from_letter('b'), Some(TileKind(1)));
        assert_eq!(TileKind::from_letter('.'), None);
    }

    #[test]
    fn test_candy_names() {
        assert_eq!(Candy::from_str("Cupcake"), Some(Candy::Cupcake));
        assert_eq!(Candy::from_str(" milk"), None);
        assert_eq!(Candy::from_str("pretzel"), None);
        assert_eq!(TileKind::from(Candy::Lollipop), TileKind(5));
    }

    #[test]
    fn test_phase_input_gate() {
        assert!(Phase::Idle.accepts_input());
        assert!(Phase::AwaitingSelection.accepts_input());
        assert!(!Phase::Resolving.accepts_input());
        assert!(!Phase::Won.accepts_input());
    }
}
