//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, TileSet};
use crate::fb::{glyph_width, CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, TileKind};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const CURSOR_BG: Rgb = Rgb::new(70, 70, 95);

/// Foreground per tile kind; kinds past the end wrap around.
const PALETTE: [Rgb; 6] = [
    Rgb::new(235, 80, 100),
    Rgb::new(170, 110, 70),
    Rgb::new(230, 190, 110),
    Rgb::new(235, 235, 245),
    Rgb::new(240, 140, 210),
    Rgb::new(120, 200, 240),
];

pub fn kind_color(kind: TileKind) -> Rgb {
    PALETTE[kind.index() % PALETTE.len()]
}

/// Single printable char of a tile symbol, ignoring variation selectors.
/// Longer symbols have no glyph and are drawn by letter.
fn symbol_glyph(symbol: &str) -> Option<char> {
    let mut chars = symbol.chars().filter(|&ch| glyph_width(ch) > 0);
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

/// A lightweight terminal renderer for the match-3 board.
pub struct GameView {
    /// Board cell width in terminal columns: bracket, glyph, bracket.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
    /// Glyph per tile kind; kinds without one are drawn by letter.
    glyphs: Vec<Option<char>>,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cell_w: 3,
            cell_h: 1,
            anchor_y: AnchorY::Center,
            glyphs: Vec::new(),
        }
    }
}

impl GameView {
    /// `cell_w` is clamped to at least 3 so selection brackets fit.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(3),
            cell_h: cell_h.max(1),
            ..Self::default()
        }
    }

    /// View drawing each kind with its configured symbol.
    pub fn for_tiles(tiles: &TileSet) -> Self {
        Self::default().with_tiles(tiles)
    }

    /// Use the tile set's symbols, widening cells so the widest one fits
    /// between the selection brackets.
    pub fn with_tiles(mut self, tiles: &TileSet) -> Self {
        self.glyphs = (0..tiles.kinds())
            .map(|i| tiles.symbol(TileKind(i)).and_then(symbol_glyph))
            .collect();
        let widest = self
            .glyphs
            .iter()
            .flatten()
            .map(|&ch| glyph_width(ch))
            .max()
            .unwrap_or(1);
        self.cell_w = self.cell_w.max(widest.saturating_add(2));
        self
    }

    pub fn cell_width(&self) -> u16 {
        self.cell_w
    }

    fn glyph(&self, kind: TileKind) -> char {
        match self.glyphs.get(kind.index()).copied().flatten() {
            Some(ch) if glyph_width(ch) <= self.cell_w.saturating_sub(2) => ch,
            _ => kind.letter(),
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer. `cursor` is the keyboard cursor's
    /// flat index, if one is shown.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        cursor: Option<usize>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let rows = snap.board.rows as u16;
        let cols = snap.board.cols as u16;
        let board_px_w = cols.saturating_mul(self.cell_w);
        let board_px_h = rows.saturating_mul(self.cell_h);
        let frame_w = board_px_w.saturating_add(2);
        let frame_h = board_px_h.saturating_add(2);

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let bg = CellStyle::new(Rgb::new(80, 80, 90), BOARD_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let (inner_x, inner_y) = (start_x.saturating_add(1), start_y.saturating_add(1));
        fb.fill_rect(inner_x, inner_y, board_px_w, board_px_h, ' ', bg);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        let cursor = cursor.filter(|_| snap.playable());
        for row in 0..rows {
            for col in 0..cols {
                let index = row as usize * cols as usize + col as usize;
                let cell = snap.board.get(row as usize, col as usize).flatten();
                self.draw_tile(
                    fb,
                    start_x,
                    start_y,
                    (col, row),
                    cell.map(TileKind),
                    snap.selection == Some(index),
                    cursor == Some(index),
                );
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if snap.phase == Phase::Won {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "YOU WON!");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, cursor: Option<usize>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);
        fb.put_char(x, y, '┌', style);
        fb.put_char(right, y, '┐', style);
        fb.put_char(x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x.saturating_add(dx), y, '─', style);
            fb.put_char(x.saturating_add(dx), bottom, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y.saturating_add(dy), '│', style);
            fb.put_char(right, y.saturating_add(dy), '│', style);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        (cell_x, cell_y): (u16, u16),
        kind: Option<TileKind>,
        selected: bool,
        under_cursor: bool,
    ) {
        let bg = if under_cursor { CURSOR_BG } else { BOARD_BG };
        let px = start_x
            .saturating_add(1)
            .saturating_add(cell_x.saturating_mul(self.cell_w));
        let py = start_y
            .saturating_add(1)
            .saturating_add(cell_y.saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', CellStyle::new(bg, bg));

        let mid_y = py.saturating_add(self.cell_h / 2);
        let (ch, style) = match kind {
            Some(kind) => (self.glyph(kind), CellStyle::new(kind_color(kind), bg).bold()),
            None => ('·', CellStyle::new(Rgb::new(90, 90, 100), bg).dim()),
        };
        let pad = self.cell_w.saturating_sub(glyph_width(ch)) / 2;
        fb.put_glyph(px.saturating_add(pad), mid_y, ch, style);

        if selected {
            let style = CellStyle::new(Rgb::new(255, 255, 255), bg).bold();
            fb.put_char(px, mid_y, '[', style);
            fb.put_char(px.saturating_add(self.cell_w - 1), mid_y, ']', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 10 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "TARGET", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.win_score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.moves, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "STATE", label);
        y = y.saturating_add(1);
        let state = match snap.phase {
            Phase::Idle => "ready",
            Phase::AwaitingSelection => "swap?",
            Phase::Resolving => "busy",
            Phase::Won => "won",
        };
        fb.put_str(panel_x, y, state, value);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}
