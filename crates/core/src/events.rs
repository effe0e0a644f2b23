//! Events emitted by a game session for the presentation layer.
//!
//! Events are queued by `GameState` in the order the mutations happen and
//! drained by the caller. Serialized, each event is an object tagged by
//! `type`:
//!
//! ```text
//! {"type":"board_changed","cause":"removed","board":{"rows":7,"cols":7,"cells":[...]}}
//! {"type":"score_changed","score":40,"delta":30}
//! {"type":"game_won","score":310}
//! {"type":"selection_changed","selection":12}
//! ```

use serde::Serialize;

use crate::snapshot::BoardSnapshot;
use crate::types::ChangeCause;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// The board was mutated (swap, revert, removal, refill, reset).
    BoardChanged {
        #[serde(serialize_with = "serialize_cause")]
        cause: ChangeCause,
        board: BoardSnapshot,
    },
    /// Once per resolution pass that removed tiles.
    ScoreChanged { score: u32, delta: u32 },
    /// Once per session, when the score first reaches the threshold.
    GameWon { score: u32 },
    SelectionChanged { selection: Option<usize> },
}

impl GameEvent {
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::BoardChanged { .. } => "board_changed",
            GameEvent::ScoreChanged { .. } => "score_changed",
            GameEvent::GameWon { .. } => "game_won",
            GameEvent::SelectionChanged { .. } => "selection_changed",
        }
    }
}

fn serialize_cause<S: serde::Serializer>(cause: &ChangeCause, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(cause.as_str())
}
