//! PacedGame: a `GameState` whose cascades advance on a clock.

use crate::core::{CascadeStep, GameEvent, GameSnapshot, GameState, SelectOutcome, SimpleRng, TileSource};
use crate::pacing::Pacing;

/// Wraps a game session and releases cascade steps as time passes.
///
/// Input goes through [`PacedGame::select`]; the caller advances time with
/// [`PacedGame::tick`]. While steps are pending the wrapped state is
/// `Resolving`, so further input is ignored by the core.
#[derive(Debug, Clone)]
pub struct PacedGame<S = SimpleRng> {
    state: GameState<S>,
    pacing: Pacing,
    /// Time left before the next cascade step; None when nothing is pending.
    step_timer_ms: Option<u32>,
    clock_ms: u64,
    won_at_ms: Option<u64>,
}

impl<S: TileSource> PacedGame<S> {
    pub fn new(state: GameState<S>, pacing: Pacing) -> Self {
        Self {
            state,
            pacing,
            step_timer_ms: None,
            clock_ms: 0,
            won_at_ms: None,
        }
    }

    /// Forward a pointer selection. A committed swap starts the step clock.
    pub fn select(&mut self, index: usize) -> SelectOutcome {
        let outcome = self.state.select(index);
        if outcome.is_swap() {
            self.step_timer_ms = Some(self.pacing.swap_check_ms);
        }
        outcome
    }

    /// Advance time by `elapsed_ms`, running every step whose delay has
    /// passed. Returns the number of steps run.
    pub fn tick(&mut self, elapsed_ms: u32) -> u32 {
        let tick_start = self.clock_ms;
        let mut budget = elapsed_ms;
        let mut steps = 0;

        while let Some(remaining) = self.step_timer_ms {
            if remaining > budget {
                self.step_timer_ms = Some(remaining - budget);
                break;
            }
            budget -= remaining;

            let was_won = self.state.won();
            let Some(step) = self.state.step() else {
                self.step_timer_ms = None;
                break;
            };
            steps += 1;

            if !was_won && self.state.won() {
                // Time at which this step ran, not the end of the tick.
                self.won_at_ms = Some(tick_start + (elapsed_ms - budget) as u64);
            }
            self.step_timer_ms = self.pacing.delay_after(&step);
            if step == CascadeStep::Settled {
                log::trace!("cascade settled at {}ms", tick_start + (elapsed_ms - budget) as u64);
            }
        }

        self.clock_ms = tick_start + elapsed_ms as u64;
        steps
    }

    /// Run all pending steps now, skipping the remaining delays.
    pub fn finish(&mut self) -> u32 {
        let mut steps = 0;
        while self.step_timer_ms.is_some() {
            let was_won = self.state.won();
            match self.state.step() {
                Some(step) => {
                    steps += 1;
                    if !was_won && self.state.won() {
                        self.won_at_ms = Some(self.clock_ms);
                    }
                    self.step_timer_ms = self.pacing.delay_after(&step);
                }
                None => self.step_timer_ms = None,
            }
        }
        steps
    }

    pub fn restart(&mut self) {
        self.state.restart();
        self.step_timer_ms = None;
        self.won_at_ms = None;
    }

    /// True while cascade steps are still pending
    pub fn is_animating(&self) -> bool {
        self.step_timer_ms.is_some()
    }

    /// The win delay has elapsed and the cascade is over: time to hand off
    /// to whatever follows the game.
    pub fn celebration_due(&self) -> bool {
        match self.won_at_ms {
            Some(at) => !self.is_animating() && self.clock_ms >= at + self.pacing.win_delay_ms as u64,
            None => false,
        }
    }

    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    pub fn state(&self) -> &GameState<S> {
        &self.state
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }
}
