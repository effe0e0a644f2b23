//! Pointer selection rules.
//!
//! A click either arms a tile, disarms it, swaps it with the armed tile (when
//! the two share a side) or moves the selection. [`classify_selection`] is
//! the pure decision; `GameState::select` applies it.

use crate::board::Board;
use crate::types::Phase;

/// Why a pointer event was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// A cascade is in flight
    Busy,
    /// The game is won; restart to play again
    GameOver,
    /// Index outside the board
    OutOfRange,
}

/// What a pointer event did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectOutcome {
    Selected(usize),
    Deselected(usize),
    /// A non-adjacent tile replaced the previous selection
    Reselected { from: usize, to: usize },
    /// Adjacent tiles were swapped; a cascade is now resolving
    Swapped { a: usize, b: usize },
    Ignored(IgnoreReason),
}

impl SelectOutcome {
    pub fn is_swap(&self) -> bool {
        matches!(self, SelectOutcome::Swapped { .. })
    }
}

/// Decide what a pointer event at `index` does, without mutating anything.
pub fn classify_selection(
    board: &Board,
    phase: Phase,
    selection: Option<usize>,
    index: usize,
) -> SelectOutcome {
    match phase {
        Phase::Resolving => return SelectOutcome::Ignored(IgnoreReason::Busy),
        Phase::Won => return SelectOutcome::Ignored(IgnoreReason::GameOver),
        Phase::Idle | Phase::AwaitingSelection => {}
    }
    if index >= board.len() {
        return SelectOutcome::Ignored(IgnoreReason::OutOfRange);
    }

    match selection {
        None => SelectOutcome::Selected(index),
        Some(current) if current == index => SelectOutcome::Deselected(index),
        Some(current) if board.is_adjacent(current, index) => SelectOutcome::Swapped {
            a: current,
            b: index,
        },
        Some(current) => SelectOutcome::Reselected {
            from: current,
            to: index,
        },
    }
}
