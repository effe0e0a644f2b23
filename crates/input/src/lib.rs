//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s and keeps a
//! board cursor, so a keyboard can stand in for a pointer: moving the cursor
//! and pressing select produces the same `PointerSelect(index)` a click would.

pub mod cursor;
pub mod map;

pub use sweet_match_types as types;

pub use cursor::{Cursor, InputIntent};
pub use map::{handle_key_event, should_quit};
