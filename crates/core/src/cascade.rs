//! Cascade resolution
//!
//! The resolution pipeline (check swap → remove → fall/refill → re-scan ...)
//! is modelled as an explicit state machine, [`Cascade`], that performs one
//! board mutation per [`Cascade::step`]. Synchronous resolution ([`settle`],
//! `GameState::resolve`) and timed playback both drive the same stepper, so
//! pacing can never change the result.
//!
//! Termination: every `Scan` either finds nothing (done) or removes at least
//! [`MIN_RUN`](crate::types::MIN_RUN) tiles. Refills are random, so a chain
//! can continue, but with two or more kinds every refill has a non-zero
//! chance of producing a stable board.

use crate::board::Board;
use crate::matching::{find_matches, MatchSet};
use crate::rng::TileSource;

/// Result of [`resolve_once`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOutcome {
    pub matched: MatchSet,
    pub removed: bool,
}

/// Scan for runs and empty every matched cell.
pub fn resolve_once(board: &mut Board) -> ResolveOutcome {
    let matched = find_matches(board);
    for index in matched.iter() {
        board.set(index, None);
    }
    ResolveOutcome {
        removed: !matched.is_empty(),
        matched,
    }
}

/// One board mutation performed by [`Cascade::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CascadeStep {
    /// The speculative swap made no match and was swapped back.
    SwapReverted { a: usize, b: usize },
    /// Matched cells were emptied.
    Removed { cells: MatchSet },
    /// Columns fell and `filled` fresh tiles were drawn.
    Refilled { filled: usize },
    /// The board is stable; the cascade is finished.
    Settled,
}

impl CascadeStep {
    /// Tiles removed by this step
    pub fn removed(&self) -> usize {
        match self {
            CascadeStep::Removed { cells } => cells.len(),
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    /// First scan after a swap; a miss reverts the swap.
    CheckSwap { a: usize, b: usize },
    Scan,
    Refill,
    Done,
}

/// Step-wise resolution of one move (or of a freshly generated board).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cascade {
    stage: Stage,
    passes: u32,
    total_removed: u32,
    reverted: bool,
}

impl Cascade {
    /// Resolve a swap of `a` and `b` that has already been applied to the board.
    pub fn after_swap(a: usize, b: usize) -> Self {
        Self::with_stage(Stage::CheckSwap { a, b })
    }

    /// Resolve whatever runs the board currently holds.
    pub fn settle() -> Self {
        Self::with_stage(Stage::Scan)
    }

    fn with_stage(stage: Stage) -> Self {
        Self {
            stage,
            passes: 0,
            total_removed: 0,
            reverted: false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.stage == Stage::Done
    }

    /// Passes that removed tiles so far
    pub fn passes(&self) -> u32 {
        self.passes
    }

    pub fn total_removed(&self) -> u32 {
        self.total_removed
    }

    /// Whether the swap this cascade started from was reverted
    pub fn reverted(&self) -> bool {
        self.reverted
    }

    /// Perform the next mutation. Once done, keeps returning `Settled`
    /// without touching the board.
    pub fn step(&mut self, board: &mut Board, kinds: u8, source: &mut impl TileSource) -> CascadeStep {
        match self.stage {
            Stage::CheckSwap { a, b } => {
                let outcome = resolve_once(board);
                if outcome.removed {
                    self.record_pass(&outcome.matched);
                    self.stage = Stage::Refill;
                    CascadeStep::Removed {
                        cells: outcome.matched,
                    }
                } else {
                    board.swap(a, b);
                    self.reverted = true;
                    self.stage = Stage::Done;
                    log::trace!("swap {}<->{} made no match, reverted", a, b);
                    CascadeStep::SwapReverted { a, b }
                }
            }
            Stage::Scan => {
                let outcome = resolve_once(board);
                if outcome.removed {
                    self.record_pass(&outcome.matched);
                    self.stage = Stage::Refill;
                    CascadeStep::Removed {
                        cells: outcome.matched,
                    }
                } else {
                    self.stage = Stage::Done;
                    CascadeStep::Settled
                }
            }
            Stage::Refill => {
                let filled = board.apply_gravity_and_refill(kinds, source);
                self.stage = Stage::Scan;
                CascadeStep::Refilled { filled }
            }
            Stage::Done => CascadeStep::Settled,
        }
    }

    fn record_pass(&mut self, matched: &MatchSet) {
        self.passes += 1;
        self.total_removed += matched.len() as u32;
        log::debug!(
            "cascade pass {}: removed {} tiles ({} total)",
            self.passes,
            matched.len(),
            self.total_removed
        );
    }
}

/// Outcome of [`settle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settled {
    pub board: Board,
    pub total_removed: u32,
    pub passes: u32,
    /// Every step taken, ending with `Settled`
    pub steps: Vec<CascadeStep>,
}

/// Resolve `board` until no run remains.
///
/// A board that is already stable comes back unchanged with zero removals.
pub fn settle(mut board: Board, kinds: u8, source: &mut impl TileSource) -> Settled {
    let mut cascade = Cascade::settle();
    let mut steps = Vec::new();
    loop {
        let step = cascade.step(&mut board, kinds, source);
        let done = step == CascadeStep::Settled;
        steps.push(step);
        if done {
            break;
        }
    }
    Settled {
        board,
        total_removed: cascade.total_removed(),
        passes: cascade.passes(),
        steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::has_match;
    use crate::rng::{ScriptedSource, SimpleRng};

    fn board(rows: &[&str]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn test_resolve_once_empties_union() {
        let mut b = board(&["ABC", "ACB", "AAA"]);
        let outcome = resolve_once(&mut b);
        assert!(outcome.removed);
        assert_eq!(outcome.matched.len(), 5);
        assert_eq!(b.to_string(), ".BC\n.CB\n...");
    }

    #[test]
    fn test_resolve_once_on_stable_board() {
        let mut b = board(&["AAB", "CDA", "ABA"]);
        let before = b.clone();
        let outcome = resolve_once(&mut b);
        assert!(!outcome.removed);
        assert!(outcome.matched.is_empty());
        assert_eq!(b, before);
    }

    #[test]
    fn test_settle_stable_board_returns_immediately() {
        let b = board(&["AAB", "CDA", "ABA"]);
        let mut src = ScriptedSource::from_letters("");
        let settled = settle(b.clone(), 6, &mut src);
        assert_eq!(settled.board, b);
        assert_eq!(settled.total_removed, 0);
        assert_eq!(settled.passes, 0);
        assert_eq!(settled.steps, vec![CascadeStep::Settled]);
        assert_eq!(src.drawn(), 0);
    }

    #[test]
    fn test_settle_catches_chain_created_by_refill() {
        // Removing the bottom row lets columns fall; the scripted refill puts
        // F F F on the top row, which must be caught by the next scan.
        let b = board(&["CDE", "DEC", "AAA", "ECB"]);
        let mut src = ScriptedSource::from_letters("FFF BAD");
        let settled = settle(b, 6, &mut src);

        assert_eq!(settled.passes, 2);
        assert_eq!(settled.total_removed, 6);
        assert_eq!(settled.board.to_string(), "BAD\nCDE\nDEC\nECB");
        assert_eq!(src.remaining(), 0);
        assert_eq!(
            settled.steps.iter().map(CascadeStep::removed).sum::<usize>(),
            6
        );
    }

    #[test]
    fn test_cascade_after_swap_reverts_without_match() {
        let mut b = board(&["AAB", "CDA", "ABA"]);
        let original = b.clone();
        b.swap(1, 4);
        assert_eq!(b.to_string(), "ADB\nCAA\nABA");

        let mut cascade = Cascade::after_swap(1, 4);
        let mut src = SimpleRng::new(3);
        let step = cascade.step(&mut b, 6, &mut src);
        assert_eq!(step, CascadeStep::SwapReverted { a: 1, b: 4 });
        assert!(cascade.is_done());
        assert!(cascade.reverted());
        assert_eq!(b, original);

        // Finished cascades are inert.
        assert_eq!(cascade.step(&mut b, 6, &mut src), CascadeStep::Settled);
        assert_eq!(b, original);
    }

    #[test]
    fn test_settle_random_boards_are_stable() {
        for seed in 1..40 {
            let mut rng = SimpleRng::new(seed);
            let b = Board::random(7, 7, 6, &mut rng);
            let settled = settle(b, 6, &mut rng);
            assert!(settled.board.is_full(), "seed {} left gaps", seed);
            assert!(!has_match(&settled.board), "seed {} left a run", seed);
        }
    }
}
