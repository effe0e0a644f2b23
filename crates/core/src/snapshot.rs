use serde::Serialize;

use crate::board::Board;
use crate::types::Phase;

/// Serializable copy of the board: `cells[row * cols + col]` is the kind
/// index, or `null` for an empty cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BoardSnapshot {
    pub rows: u8,
    pub cols: u8,
    pub cells: Vec<Option<u8>>,
}

impl BoardSnapshot {
    pub fn capture(board: &Board) -> Self {
        Self {
            rows: board.rows(),
            cols: board.cols(),
            cells: board.cells().iter().map(|c| c.map(|k| k.0)).collect(),
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Option<u8>> {
        if row >= self.rows as usize || col >= self.cols as usize {
            return None;
        }
        self.cells.get(row * self.cols as usize + col).copied()
    }

    /// Stable 64-bit FNV-1a hash of the cells (empty cells hash as 0xFF).
    pub fn board_hash(&self) -> u64 {
        const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
        const PRIME: u64 = 0x100000001b3;

        let mut h = OFFSET_BASIS;
        for b in [self.rows, self.cols]
            .into_iter()
            .chain(self.cells.iter().map(|c| c.unwrap_or(0xFF)))
        {
            h ^= b as u64;
            h = h.wrapping_mul(PRIME);
        }
        h
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub board: BoardSnapshot,
    pub board_hash: u64,
    pub selection: Option<usize>,
    pub score: u32,
    pub win_score: u32,
    #[serde(serialize_with = "serialize_phase")]
    pub phase: Phase,
    pub won: bool,
    pub episode_id: u32,
    pub seed: u32,
    pub moves: u32,
}

impl GameSnapshot {
    /// Whether pointer input would currently be accepted
    pub fn playable(&self) -> bool {
        self.phase.accepts_input()
    }
}

pub(crate) fn serialize_phase<S: serde::Serializer>(phase: &Phase, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(phase.as_str())
}
