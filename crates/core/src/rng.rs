//! RNG module - seedable tile sources
//!
//! Every random tile (initial fill and refill) is drawn through the
//! [`TileSource`] trait so a game can be replayed exactly from its seed.
//!
//! - [`SimpleRng`]: LCG used for real games
//! - [`ScriptedSource`]: plays back a fixed list of kinds, for tests

use std::collections::VecDeque;

use crate::types::TileKind;

/// Source of random tile kinds.
pub trait TileSource {
    /// Draw a kind uniformly from `0..kinds`. `kinds` is never zero.
    fn next_kind(&mut self, kinds: u8) -> TileKind;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales by the high bits: the low bits of an LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state (a restarted RNG with this seed continues the stream)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl TileSource for SimpleRng {
    fn next_kind(&mut self, kinds: u8) -> TileKind {
        TileKind(self.next_range(kinds as u32) as u8)
    }
}

/// Plays back a fixed sequence of kinds, then falls back to a seeded RNG.
///
/// Scripted kinds are reduced modulo the tile-set size.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    script: VecDeque<TileKind>,
    fallback: SimpleRng,
    drawn: usize,
}

impl ScriptedSource {
    pub fn new(script: impl IntoIterator<Item = TileKind>) -> Self {
        Self::with_fallback(script, SimpleRng::default())
    }

    pub fn with_fallback(script: impl IntoIterator<Item = TileKind>, fallback: SimpleRng) -> Self {
        Self {
            script: script.into_iter().collect(),
            fallback,
            drawn: 0,
        }
    }

    /// Build a script from display letters, e.g. `"FFFBAD"`.
    /// Characters that are not letters are skipped.
    pub fn from_letters(letters: &str) -> Self {
        Self::new(letters.chars().filter_map(TileKind::from_letter))
    }

    /// Scripted kinds not yet drawn
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// Total kinds drawn (scripted and fallback)
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl TileSource for ScriptedSource {
    fn next_kind(&mut self, kinds: u8) -> TileKind {
        self.drawn += 1;
        match self.script.pop_front() {
            Some(kind) => TileKind(kind.0 % kinds),
            None => self.fallback.next_kind(kinds),
        }
    }
}
