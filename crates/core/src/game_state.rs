//! Game state module - one play session
//!
//! Ties together the board, tile source, selection, cascade and score. Input
//! arrives as pointer selections; a swap starts a [`Cascade`] that is either
//! resolved at once ([`GameState::resolve`]) or stepped by a pacing layer
//! ([`GameState::step`]). While it runs the phase is `Resolving` and all
//! pointer input is ignored.

use crate::board::Board;
use crate::cascade::{settle, Cascade, CascadeStep};
use crate::config::{ConfigError, GameConfig};
use crate::events::GameEvent;
use crate::rng::{SimpleRng, TileSource};
use crate::scoring::ScoreTracker;
use crate::selection::{classify_selection, SelectOutcome};
use crate::snapshot::{BoardSnapshot, GameSnapshot};
use crate::types::{ChangeCause, Phase};

/// Summary of one resolved move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveReport {
    /// The swap made no match and was undone
    pub reverted: bool,
    /// Resolution passes that removed tiles
    pub passes: u32,
    pub removed: u32,
    pub score_delta: u32,
    /// This move crossed the win threshold
    pub won: bool,
}

/// Complete state of a play session
#[derive(Debug, Clone)]
pub struct GameState<S = SimpleRng> {
    config: GameConfig,
    board: Board,
    source: S,
    /// Seed the session was created with (0 for injected sources).
    seed: u32,
    selection: Option<usize>,
    phase: Phase,
    cascade: Option<Cascade>,
    scores: ScoreTracker,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Swaps committed this episode (including reverted ones).
    moves: u32,
    events: Vec<GameEvent>,
}

impl GameState<SimpleRng> {
    /// Create a new game with a random board drawn from `seed`
    pub fn new(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        let mut state = Self::with_source(config, SimpleRng::new(seed))?;
        state.seed = seed;
        Ok(state)
    }
}

impl<S: TileSource> GameState<S> {
    /// Create a new game drawing every tile from `source`
    pub fn with_source(config: GameConfig, mut source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::random(config.rows, config.cols, config.tiles.kinds(), &mut source);
        Ok(Self::assemble(config, board, source))
    }

    /// Start from a given board. Gaps are refilled and runs are resolved
    /// silently (no score, no events) before play starts.
    pub fn from_board(config: GameConfig, board: Board, source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        if board.rows() != config.rows || board.cols() != config.cols {
            return Err(ConfigError::BoardMismatch {
                rows: config.rows,
                cols: config.cols,
                got_rows: board.rows(),
                got_cols: board.cols(),
            });
        }
        let kinds = config.tiles.len();
        if let Some(kind) = board.cells().iter().flatten().find(|k| k.index() >= kinds) {
            return Err(ConfigError::UnknownKind { kind: kind.0, kinds });
        }
        Ok(Self::assemble(config, board, source))
    }

    fn assemble(config: GameConfig, board: Board, source: S) -> Self {
        let scores = ScoreTracker::new(config.win_score, config.points_per_tile);
        let mut state = Self {
            config,
            board,
            source,
            seed: 0,
            selection: None,
            phase: Phase::Idle,
            cascade: None,
            scores,
            episode_id: 0,
            moves: 0,
            events: Vec::new(),
        };
        state.settle_silently();
        state
    }

    /// Resolve pre-existing runs without scoring them.
    fn settle_silently(&mut self) {
        let kinds = self.config.tiles.kinds();
        let mut board = std::mem::replace(&mut self.board, Board::empty(0, 0));
        board.apply_gravity_and_refill(kinds, &mut self.source);
        let settled = settle(board, kinds, &mut self.source);
        if settled.passes > 0 {
            log::debug!(
                "initial board settled silently: {} passes, {} tiles",
                settled.passes,
                settled.total_removed
            );
        }
        self.board = settled.board;
    }

    /// Throw the board away and start a new episode
    pub fn restart(&mut self) {
        let kinds = self.config.tiles.kinds();
        self.board = Board::random(self.config.rows, self.config.cols, kinds, &mut self.source);
        self.settle_silently();
        self.selection = None;
        self.phase = Phase::Idle;
        self.cascade = None;
        self.scores.reset();
        self.episode_id = self.episode_id.wrapping_add(1);
        self.moves = 0;
        log::info!("episode {} started", self.episode_id);
        self.push_board(ChangeCause::Reset);
    }

    /// Handle a pointer selection at `index`.
    pub fn select(&mut self, index: usize) -> SelectOutcome {
        let outcome = classify_selection(&self.board, self.phase, self.selection, index);
        match outcome {
            SelectOutcome::Selected(i) => {
                self.selection = Some(i);
                self.phase = Phase::AwaitingSelection;
                self.push_selection();
            }
            SelectOutcome::Deselected(_) => {
                self.selection = None;
                self.phase = Phase::Idle;
                self.push_selection();
            }
            SelectOutcome::Reselected { to, .. } => {
                self.selection = Some(to);
                self.push_selection();
            }
            SelectOutcome::Swapped { a, b } => {
                self.board.swap(a, b);
                self.selection = None;
                self.phase = Phase::Resolving;
                self.cascade = Some(Cascade::after_swap(a, b));
                self.moves = self.moves.wrapping_add(1);
                log::trace!("swap {}<->{} (move {})", a, b, self.moves);
                self.push_selection();
                self.push_board(ChangeCause::Swap);
            }
            SelectOutcome::Ignored(reason) => {
                log::trace!("pointer {} ignored: {:?}", index, reason);
            }
        }
        outcome
    }

    /// Advance the in-flight cascade by one mutation.
    /// Returns None when nothing is resolving.
    pub fn step(&mut self) -> Option<CascadeStep> {
        let cascade = self.cascade.as_mut()?;
        let kinds = self.config.tiles.kinds();
        let step = cascade.step(&mut self.board, kinds, &mut self.source);

        match &step {
            CascadeStep::SwapReverted { .. } => self.push_board(ChangeCause::SwapReverted),
            CascadeStep::Removed { cells } => {
                self.push_board(ChangeCause::Removed);
                let award = self.scores.award(cells.len());
                self.events.push(GameEvent::ScoreChanged {
                    score: award.score,
                    delta: award.delta,
                });
                if award.won_now {
                    log::info!("win threshold {} reached with {}", self.scores.win_score(), award.score);
                    self.events.push(GameEvent::GameWon { score: award.score });
                }
            }
            CascadeStep::Refilled { .. } => self.push_board(ChangeCause::Refilled),
            CascadeStep::Settled => {
                self.cascade = None;
                self.phase = if self.scores.won() {
                    Phase::Won
                } else {
                    Phase::Idle
                };
            }
        }

        Some(step)
    }

    /// Run the in-flight cascade to completion.
    pub fn resolve(&mut self) -> MoveReport {
        let start_score = self.scores.score();
        let was_won = self.scores.won();
        let mut report = MoveReport::default();

        while let Some(step) = self.step() {
            match step {
                CascadeStep::SwapReverted { .. } => report.reverted = true,
                CascadeStep::Removed { cells } => {
                    report.passes += 1;
                    report.removed += cells.len() as u32;
                }
                CascadeStep::Refilled { .. } => {}
                CascadeStep::Settled => break,
            }
        }

        report.score_delta = self.scores.score() - start_score;
        report.won = !was_won && self.scores.won();
        report
    }

    /// Select, and if that committed a swap, resolve it synchronously.
    pub fn select_and_resolve(&mut self, index: usize) -> (SelectOutcome, MoveReport) {
        let outcome = self.select(index);
        let report = if outcome.is_swap() {
            self.resolve()
        } else {
            MoveReport::default()
        };
        (outcome, report)
    }

    fn push_board(&mut self, cause: ChangeCause) {
        self.events.push(GameEvent::BoardChanged {
            cause,
            board: BoardSnapshot::capture(&self.board),
        });
    }

    fn push_selection(&mut self) {
        self.events.push(GameEvent::SelectionChanged {
            selection: self.selection,
        });
    }

    /// Take all queued events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while a cascade is in flight
    pub fn is_busy(&self) -> bool {
        self.phase == Phase::Resolving
    }

    pub fn score(&self) -> u32 {
        self.scores.score()
    }

    pub fn won(&self) -> bool {
        self.scores.won()
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let board = BoardSnapshot::capture(&self.board);
        GameSnapshot {
            board_hash: board.board_hash(),
            board,
            selection: self.selection,
            score: self.scores.score(),
            win_score: self.scores.win_score(),
            phase: self.phase,
            won: self.scores.won(),
            episode_id: self.episode_id,
            seed: self.seed,
            moves: self.moves,
        }
    }
}
