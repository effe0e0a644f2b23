//! Core game logic - pure, deterministic, and testable
//!
//! This crate is the match-3 grid engine. It has no dependencies on UI,
//! timing or I/O:
//!
//! - **Deterministic**: every random tile comes from an injected [`TileSource`];
//!   the same seed and the same moves always produce the same game
//! - **Synchronous**: a cascade can be resolved in one call or stepped one
//!   mutation at a time, with identical results
//! - **Headless**: state is exposed as serializable snapshots and events
//!
//! # Module Structure
//!
//! - [`board`]: the `rows x cols` tile grid, adjacency, gravity and refill
//! - [`matching`]: run detection and the deduplicated [`MatchSet`]
//! - [`cascade`]: `resolve_once`, the [`Cascade`] stepper and pure [`settle`]
//! - [`selection`]: pointer selection rules
//! - [`scoring`]: per-pass points and the one-shot win threshold
//! - [`game_state`]: a play session tying it all together
//! - [`config`]: dimensions, tile set and thresholds
//! - [`rng`]: seedable tile sources
//! - [`events`], [`snapshot`]: output for the presentation layer
//!
//! # Example
//!
//! ```
//! use sweet_match_core::{GameConfig, GameState, SelectOutcome};
//!
//! let mut game = GameState::new(GameConfig::default(), 12345).unwrap();
//!
//! // Arm a tile, then try to swap it with its right-hand neighbour.
//! assert_eq!(game.select(0), SelectOutcome::Selected(0));
//! let (outcome, report) = game.select_and_resolve(1);
//! assert_eq!(outcome, SelectOutcome::Swapped { a: 0, b: 1 });
//!
//! // Either the swap matched and scored, or it was reverted for free.
//! assert_eq!(report.score_delta, report.removed * 10);
//! assert!(!game.is_busy());
//! ```

pub mod board;
pub mod cascade;
pub mod config;
pub mod events;
pub mod game_state;
pub mod matching;
pub mod rng;
pub mod scoring;
pub mod selection;
pub mod snapshot;

pub use sweet_match_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardParseError};
pub use cascade::{resolve_once, settle, Cascade, CascadeStep, ResolveOutcome, Settled};
pub use config::{ConfigError, GameConfig, TileSet};
pub use events::GameEvent;
pub use game_state::{GameState, MoveReport};
pub use matching::{find_matches, find_runs, has_match, MatchSet, Orientation, Run};
pub use rng::{ScriptedSource, SimpleRng, TileSource};
pub use scoring::{pass_points, ScoreAward, ScoreTracker};
pub use selection::{classify_selection, IgnoreReason, SelectOutcome};
pub use snapshot::{BoardSnapshot, GameSnapshot};
