//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the board is drawn into a plain
//! framebuffer that is then diffed and flushed to the terminal. No widget
//! toolkit is involved, so layout and aspect ratio (3 columns per tile) stay
//! under direct control.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use sweet_match_core as core;
pub use sweet_match_types as types;

pub use fb::{glyph_width, Cell, CellStyle, FrameBuffer, Rgb, WIDE_TAIL};
pub use game_view::{kind_color, AnchorY, GameView, Viewport};
pub use renderer::{dirty_spans, encode_diff_into, encode_full_into, Span, TerminalRenderer};
