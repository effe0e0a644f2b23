use crate::core::CascadeStep;
use crate::types::{FALL_DELAY_MS, RECHECK_DELAY_MS, SWAP_CHECK_DELAY_MS, WIN_DELAY_MS};

/// Delays (milliseconds) between cascade steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Swap visible before the match check
    pub swap_check_ms: u32,
    /// Cleared cells visible before the columns fall
    pub fall_ms: u32,
    /// Refilled board visible before the next scan
    pub recheck_ms: u32,
    /// Win visible before the celebration is due
    pub win_delay_ms: u32,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            swap_check_ms: SWAP_CHECK_DELAY_MS,
            fall_ms: FALL_DELAY_MS,
            recheck_ms: RECHECK_DELAY_MS,
            win_delay_ms: WIN_DELAY_MS,
        }
    }
}

impl Pacing {
    /// No delays at all: every step runs on the next tick
    pub fn immediate() -> Self {
        Self {
            swap_check_ms: 0,
            fall_ms: 0,
            recheck_ms: 0,
            win_delay_ms: 0,
        }
    }

    /// Delay before the step that follows `step`, or None if the cascade is over.
    ///
    /// A reverted swap still owes the closing `Settled` step, which has
    /// nothing to show and runs at once.
    pub fn delay_after(&self, step: &CascadeStep) -> Option<u32> {
        match step {
            CascadeStep::Removed { .. } => Some(self.fall_ms),
            CascadeStep::Refilled { .. } => Some(self.recheck_ms),
            CascadeStep::SwapReverted { .. } => Some(0),
            CascadeStep::Settled => None,
        }
    }
}
