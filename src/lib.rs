//! Sweet Match (workspace facade crate).
//!
//! Re-exports the workspace crates as `sweet_match::{core,engine,input,term,types}`
//! and hosts the pieces the binary needs that are still worth testing:
//! the headless replay runner and the JSON-lines file logger.

pub mod logging;
pub mod replay;

pub use sweet_match_core as core;
pub use sweet_match_engine as engine;
pub use sweet_match_input as input;
pub use sweet_match_term as term;
pub use sweet_match_types as types;
