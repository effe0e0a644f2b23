//! Scoring module - per-pass points and the one-shot win threshold
//!
//! Every resolution pass that removes tiles scores
//! `points_per_tile * removed`, including passes caused by refills later in
//! the same cascade. The win fires on the first award that brings the score
//! to or past the threshold and never again for the session.

/// Points for one resolution pass
pub fn pass_points(removed: usize, points_per_tile: u32) -> u32 {
    (removed as u32).saturating_mul(points_per_tile)
}

/// Result of [`ScoreTracker::award`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreAward {
    pub delta: u32,
    pub score: u32,
    /// True only for the award that crossed the threshold
    pub won_now: bool,
}

/// Cumulative score with win detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTracker {
    score: u32,
    win_score: u32,
    points_per_tile: u32,
    won: bool,
}

impl ScoreTracker {
    pub fn new(win_score: u32, points_per_tile: u32) -> Self {
        Self {
            score: 0,
            win_score,
            points_per_tile,
            won: false,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn win_score(&self) -> u32 {
        self.win_score
    }

    pub fn won(&self) -> bool {
        self.won
    }

    /// Add a pass that removed `removed` tiles.
    pub fn award(&mut self, removed: usize) -> ScoreAward {
        let delta = pass_points(removed, self.points_per_tile);
        self.score = self.score.saturating_add(delta);

        let won_now = !self.won && self.score >= self.win_score;
        if won_now {
            self.won = true;
        }

        ScoreAward {
            delta,
            score: self.score,
            won_now,
        }
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.won = false;
    }
}
