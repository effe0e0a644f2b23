//! Headless replay: apply a list of swaps to a seeded game and print every
//! event as one JSON line.
//!
//! ```text
//! sweet-match replay --seed 7 --swap 0:1 --swap 10:17
//! ```

use std::io::Write;

use anyhow::{anyhow, Result};

use crate::core::{GameConfig, GameState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayConfig {
    pub seed: u32,
    /// Flat index pairs, applied in order.
    pub swaps: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaySummary {
    pub events: usize,
    /// Swaps that committed (matched or reverted)
    pub applied: usize,
    pub score: u32,
    pub won: bool,
}

pub fn parse_replay_args(args: &[String]) -> Result<Option<ReplayConfig>> {
    if args.is_empty() || args[0] != "replay" {
        return Ok(None);
    }

    let mut seed: u32 = 1;
    let mut swaps = Vec::new();
    let mut i = 1usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("replay: missing value for --seed"))?;
                seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("replay: invalid --seed value: {}", v))?;
            }
            "--swap" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("replay: missing value for --swap"))?;
                swaps.push(parse_swap(v)?);
            }
            other => {
                return Err(anyhow!("replay: unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(Some(ReplayConfig { seed, swaps }))
}

fn parse_swap(value: &str) -> Result<(usize, usize)> {
    let (a, b) = value
        .split_once(':')
        .ok_or_else(|| anyhow!("replay: --swap expects A:B, got {}", value))?;
    let a = a
        .trim()
        .parse::<usize>()
        .map_err(|_| anyhow!("replay: invalid --swap index: {}", a))?;
    let b = b
        .trim()
        .parse::<usize>()
        .map_err(|_| anyhow!("replay: invalid --swap index: {}", b))?;
    Ok((a, b))
}

/// Run the replay synchronously, writing each event as a JSON line to `out`.
///
/// A pair that does not commit a swap (not adjacent, out of range, game
/// already won) is skipped and leaves no selection behind.
pub fn run_replay<W: Write>(
    config: GameConfig,
    replay: &ReplayConfig,
    out: &mut W,
) -> Result<ReplaySummary> {
    let mut game = GameState::new(config, replay.seed).map_err(|e| anyhow!("replay: {}", e))?;
    let mut summary = ReplaySummary::default();

    for &(a, b) in &replay.swaps {
        game.select(a);
        let (outcome, report) = game.select_and_resolve(b);
        if outcome.is_swap() {
            summary.applied += 1;
            log::debug!(
                "replay swap {}:{} removed {} in {} passes",
                a,
                b,
                report.removed,
                report.passes
            );
        } else {
            log::warn!("replay swap {}:{} skipped ({:?})", a, b, outcome);
            if let Some(selected) = game.selection() {
                game.select(selected);
            }
        }
        for event in game.drain_events() {
            serde_json::to_writer(&mut *out, &event)?;
            out.write_all(b"\n")?;
            summary.events += 1;
        }
    }

    out.flush()?;
    summary.score = game.score();
    summary.won = game.won();
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_replay_args_ignores_other_commands() {
        assert_eq!(parse_replay_args(&args(&[])).unwrap(), None);
        assert_eq!(parse_replay_args(&args(&["play"])).unwrap(), None);
    }

    #[test]
    fn parse_replay_args_reads_seed_and_swaps() {
        let cfg = parse_replay_args(&args(&[
            "replay", "--seed", "42", "--swap", "0:1", "--swap", "8:15",
        ]))
        .unwrap()
        .unwrap();
        assert_eq!(
            cfg,
            ReplayConfig {
                seed: 42,
                swaps: vec![(0, 1), (8, 15)],
            }
        );
    }

    #[test]
    fn parse_replay_args_uses_defaults() {
        let cfg = parse_replay_args(&args(&["replay"])).unwrap().unwrap();
        assert_eq!(cfg.seed, 1);
        assert!(cfg.swaps.is_empty());
    }

    #[test]
    fn parse_replay_args_rejects_bad_input() {
        assert!(parse_replay_args(&args(&["replay", "--seed"])).is_err());
        assert!(parse_replay_args(&args(&["replay", "--seed", "-3"])).is_err());
        assert!(parse_replay_args(&args(&["replay", "--swap", "4-5"])).is_err());
        assert!(parse_replay_args(&args(&["replay", "--swap", "a:5"])).is_err());
        assert!(parse_replay_args(&args(&["replay", "--fast"])).is_err());
    }
}
