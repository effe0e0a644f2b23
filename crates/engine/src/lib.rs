//! Timed cascade playback.
//!
//! The core resolves a move one mutation at a time; this crate spaces those
//! mutations out so each can be shown (swap, cleared cells, fallen tiles)
//! before the next one happens. Delays only decide *when* a step runs, never
//! *what* it does: a paced game and a game resolved synchronously from the
//! same seed end in the same state.

pub mod paced;
pub mod pacing;

pub use sweet_match_core as core;
pub use sweet_match_types as types;

pub use paced::PacedGame;
pub use pacing::Pacing;
