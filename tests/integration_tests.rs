//! Integration tests for a full play session

use sweet_match::core::{
    has_match, Board, GameConfig, GameEvent, GameState, IgnoreReason, ScriptedSource,
    SelectOutcome, TileSet,
};
use sweet_match::types::{ChangeCause, Phase};

fn lettered(rows: u8, cols: u8, kinds: u8, win_score: u32) -> GameConfig {
    GameConfig {
        rows,
        cols,
        tiles: TileSet::lettered(kinds),
        win_score,
        points_per_tile: 10,
    }
}

/// Swapping 8 and 11 completes row 2; the scripted refill matches once more.
fn chain_game(win_score: u32) -> GameState<ScriptedSource> {
    let board = Board::from_rows(&["CDE", "DEC", "AAB", "ECA"]).unwrap();
    GameState::from_board(
        lettered(4, 3, 6, win_score),
        board,
        ScriptedSource::from_letters("FFFBAD"),
    )
    .unwrap()
}

fn causes(events: &[GameEvent]) -> Vec<ChangeCause> {
    events
        .iter()
        .filter_map(|e| match e {
            GameEvent::BoardChanged { cause, .. } => Some(*cause),
            _ => None,
        })
        .collect()
}

#[test]
fn test_game_lifecycle() {
    let mut game = GameState::new(GameConfig::default(), 12345).unwrap();
    assert_eq!(game.phase(), Phase::Idle);
    assert_eq!(game.score(), 0);
    assert!(game.board().is_full());
    assert!(!has_match(game.board()));
    assert!(game.events().is_empty());

    assert_eq!(game.select(10), SelectOutcome::Selected(10));
    assert_eq!(game.phase(), Phase::AwaitingSelection);
    assert_eq!(game.select(10), SelectOutcome::Deselected(10));
    assert_eq!(game.phase(), Phase::Idle);
}

#[test]
fn test_non_matching_swap_is_reverted() {
    let board = Board::from_rows(&["AAB", "CDA", "ABA"]).unwrap();
    let mut game =
        GameState::from_board(lettered(3, 3, 4, 300), board, ScriptedSource::from_letters(""))
            .unwrap();

    game.select(1);
    let (outcome, report) = game.select_and_resolve(4);
    assert_eq!(outcome, SelectOutcome::Swapped { a: 1, b: 4 });
    assert!(report.reverted);
    assert_eq!(report.score_delta, 0);

    assert_eq!(game.board().to_string(), "AAB\nCDA\nABA");
    assert_eq!(game.score(), 0);
    assert_eq!(game.phase(), Phase::Idle);
    assert_eq!(game.moves(), 1);

    let events = game.drain_events();
    assert_eq!(causes(&events), vec![ChangeCause::Swap, ChangeCause::SwapReverted]);
    assert!(!events.iter().any(|e| matches!(e, GameEvent::ScoreChanged { .. })));
}

#[test]
fn test_cascade_chain_scores_every_pass() {
    let mut game = chain_game(1000);
    game.select(8);
    let (_, report) = game.select_and_resolve(11);

    assert!(!report.reverted);
    assert_eq!(report.passes, 2);
    assert_eq!(report.removed, 6);
    assert_eq!(report.score_delta, 60);
    assert_eq!(game.board().to_string(), "BAD\nCDE\nDEC\nECB");
    assert!(!has_match(game.board()));

    let events = game.drain_events();
    assert_eq!(
        causes(&events),
        vec![
            ChangeCause::Swap,
            ChangeCause::Removed,
            ChangeCause::Refilled,
            ChangeCause::Removed,
            ChangeCause::Refilled,
        ]
    );
    let deltas: Vec<u32> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::ScoreChanged { delta, .. } => Some(*delta),
            _ => None,
        })
        .collect();
    assert_eq!(deltas, vec![30, 30]);
}

#[test]
fn test_win_fires_once_and_cascade_completes() {
    let mut game = chain_game(30);
    game.select(8);
    let (_, report) = game.select_and_resolve(11);

    assert!(report.won);
    assert_eq!(game.score(), 60);
    assert_eq!(game.phase(), Phase::Won);

    let events = game.drain_events();
    let wins: Vec<&GameEvent> = events
        .iter()
        .filter(|e| matches!(e, GameEvent::GameWon { .. }))
        .collect();
    assert_eq!(wins, vec![&GameEvent::GameWon { score: 30 }]);

    // Terminal until restart.
    assert_eq!(game.select(0), SelectOutcome::Ignored(IgnoreReason::GameOver));
}

#[test]
fn test_restart_starts_new_episode() {
    let mut game = chain_game(30);
    game.select(8);
    game.select_and_resolve(11);
    game.drain_events();

    game.restart();
    assert_eq!(game.phase(), Phase::Idle);
    assert_eq!(game.score(), 0);
    assert!(!game.won());
    assert_eq!(game.episode_id(), 1);
    assert_eq!(game.moves(), 0);
    assert!(game.board().is_full());
    assert!(!has_match(game.board()));

    let events = game.drain_events();
    assert_eq!(causes(&events), vec![ChangeCause::Reset]);
    assert!(!events.iter().any(|e| matches!(e, GameEvent::ScoreChanged { .. })));
}

#[test]
fn test_input_ignored_while_resolving() {
    let mut game = chain_game(1000);
    game.select(8);
    assert!(game.select(11).is_swap());
    assert!(game.is_busy());

    assert_eq!(game.select(0), SelectOutcome::Ignored(IgnoreReason::Busy));
    assert_eq!(game.selection(), None);

    game.resolve();
    assert!(!game.is_busy());
    assert_eq!(game.select(0), SelectOutcome::Selected(0));
}

#[test]
fn test_out_of_range_selection_is_ignored() {
    let mut game = GameState::new(GameConfig::default(), 7).unwrap();
    assert_eq!(game.select(49), SelectOutcome::Ignored(IgnoreReason::OutOfRange));
    assert_eq!(game.selection(), None);
    assert!(game.events().is_empty());
}

#[test]
fn test_board_is_stable_after_every_move() {
    for seed in 1..40u32 {
        let mut game = GameState::new(GameConfig::default(), seed).unwrap();
        assert!(!has_match(game.board()), "seed {} starts unstable", seed);

        for (a, b) in [(0, 1), (8, 15), (23, 24), (30, 37), (47, 48)] {
            game.select(a);
            game.select_and_resolve(b);
            assert!(game.board().is_full());
            assert!(!has_match(game.board()), "seed {} unstable after {}:{}", seed, a, b);
        }
    }
}

#[test]
fn test_score_equals_sum_of_deltas() {
    for seed in 1..20u32 {
        let mut game = GameState::new(GameConfig::default(), seed).unwrap();
        let mut removed = 0;
        for (a, b) in [(1, 2), (9, 16), (24, 25), (33, 40), (45, 46)] {
            game.select(a);
            let (_, report) = game.select_and_resolve(b);
            removed += report.removed;
        }

        let deltas: u32 = game
            .drain_events()
            .iter()
            .filter_map(|e| match e {
                GameEvent::ScoreChanged { delta, .. } => Some(*delta),
                _ => None,
            })
            .sum();
        assert_eq!(deltas, game.score());
        assert_eq!(game.score(), removed * 10);
    }
}

#[test]
fn test_swap_is_symmetric() {
    for seed in 1..20u32 {
        let mut forward = GameState::new(GameConfig::default(), seed).unwrap();
        let mut backward = GameState::new(GameConfig::default(), seed).unwrap();

        forward.select(17);
        forward.select_and_resolve(24);
        backward.select(24);
        backward.select_and_resolve(17);

        assert_eq!(forward.board(), backward.board());
        assert_eq!(forward.score(), backward.score());
    }
}

#[test]
fn test_from_board_rejects_mismatched_board() {
    let board = Board::from_rows(&["AB", "BA"]).unwrap();
    let result = GameState::from_board(
        lettered(3, 3, 4, 300),
        board,
        ScriptedSource::from_letters(""),
    );
    assert!(result.is_err());
}
