use sweet_match::core::GameConfig;
use sweet_match::replay::{parse_replay_args, run_replay, ReplayConfig};

fn replay(seed: u32, swaps: Vec<(usize, usize)>) -> (Vec<serde_json::Value>, u32) {
    let config = ReplayConfig { seed, swaps };
    let mut out = Vec::new();
    let summary = run_replay(GameConfig::default(), &config, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), summary.events);
    (lines, summary.score)
}

#[test]
fn replay_prints_one_json_event_per_line() {
    let (lines, _) = replay(11, vec![(0, 1)]);
    assert!(!lines.is_empty());
    assert!(lines.iter().all(|v| v["type"].is_string()));
    assert_eq!(lines[0]["type"], "selection_changed");
    assert_eq!(lines[0]["selection"], 0);
    assert!(lines
        .iter()
        .any(|v| v["type"] == "board_changed" && v["cause"] == "swap"));
}

#[test]
fn replay_is_deterministic() {
    let swaps = vec![(0, 1), (8, 9), (20, 27), (33, 34)];
    assert_eq!(replay(77, swaps.clone()), replay(77, swaps));
}

#[test]
fn replay_skips_non_adjacent_pairs() {
    let (lines, score) = replay(11, vec![(0, 2)]);
    assert_eq!(score, 0);
    assert!(!lines.iter().any(|v| v["type"] == "board_changed"));
    // Select, reselect, and the clean-up deselect.
    assert_eq!(lines.last().unwrap()["selection"], serde_json::Value::Null);
}

#[test]
fn replay_args_round_into_config() {
    let args: Vec<String> = ["replay", "--seed", "11", "--swap", "0:1"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let cfg = parse_replay_args(&args).unwrap().unwrap();
    assert_eq!(cfg.seed, 11);
    assert_eq!(cfg.swaps, vec![(0, 1)]);
}
