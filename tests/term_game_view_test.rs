use sweet_match::core::{Board, GameConfig, GameState, ScriptedSource, TileSet};
use sweet_match::term::{FrameBuffer, GameView, Viewport};

fn frame_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn won_game() -> GameState<ScriptedSource> {
    let board = Board::from_rows(&["CDE", "DEC", "AAB", "ECA"]).unwrap();
    let config = GameConfig {
        rows: 4,
        cols: 3,
        tiles: TileSet::lettered(6),
        win_score: 30,
        points_per_tile: 10,
    };
    let mut game =
        GameState::from_board(config, board, ScriptedSource::from_letters("FFFBAD")).unwrap();
    game.select(8);
    game.select_and_resolve(11);
    game
}

#[test]
fn game_view_renders_default_board_and_panel() {
    let gs = GameState::new(GameConfig::default(), 1).unwrap();
    let view = GameView::default();
    let fb = view.render(&gs.snapshot(), Some(24), Viewport::new(80, 24));
    let text = frame_text(&fb);

    assert!(text.contains('┌'));
    assert!(text.contains("SCORE"));
    assert!(text.contains("TARGET"));
    assert!(text.contains("300"));
    assert!(!text.contains("YOU WON!"));
}

#[test]
fn game_view_shows_win_overlay() {
    let gs = won_game();
    let view = GameView::default();
    let fb = view.render(&gs.snapshot(), None, Viewport::new(60, 20));
    let text = frame_text(&fb);

    assert!(text.contains("YOU WON!"));
    assert!(text.contains("60"));
}

#[test]
fn render_into_reuses_and_resizes_buffer() {
    let gs = GameState::new(GameConfig::default(), 3).unwrap();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(10, 10);
    view.render_into(&gs.snapshot(), None, Viewport::new(50, 15), &mut fb);
    assert_eq!((fb.width(), fb.height()), (50, 15));

    let again = view.render(&gs.snapshot(), None, Viewport::new(50, 15));
    assert_eq!(fb, again);
}

#[test]
fn tiny_viewport_does_not_panic() {
    let gs = GameState::new(GameConfig::default(), 3).unwrap();
    let view = GameView::default();
    for (w, h) in [(0, 0), (1, 1), (5, 3), (22, 9)] {
        let fb = view.render(&gs.snapshot(), Some(48), Viewport::new(w, h));
        assert_eq!((fb.width(), fb.height()), (w, h));
    }
}

#[test]
fn configured_tile_symbols_reach_the_screen() {
    let config = GameConfig::from_lookup(|key| {
        (key == "SWEET_MATCH_TILES").then(|| "x,y,z,w,v,u".to_string())
    })
    .unwrap();
    let view = GameView::for_tiles(&config.tiles);
    let gs = GameState::new(config, 5).unwrap();
    let fb = view.render(&gs.snapshot(), None, Viewport::new(80, 24));

    let board: String = (0..fb.height())
        .map(|y| fb.row_text(y))
        .filter_map(|row| row.split('│').nth(1).map(str::to_string))
        .collect();
    assert!(!board.is_empty());
    assert!(board.chars().all(|ch| ch == ' ' || "xyzwvu".contains(ch)));
}

#[test]
fn candy_board_fits_wider_cells() {
    let gs = GameState::new(GameConfig::default(), 2).unwrap();
    let view = GameView::for_tiles(&gs.config().tiles);
    assert_eq!(view.cell_width(), 4);

    let fb = view.render(&gs.snapshot(), Some(0), Viewport::new(80, 24));
    let text = frame_text(&fb);
    assert!(text.contains("SCORE"));
    assert!(!text.contains('\0'));
}
