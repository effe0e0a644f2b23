//! Framebuffer and style types for terminal rendering.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// Placeholder stored in the cell right of a double-width glyph. It is never
/// printed: the terminal advances two columns for the glyph itself.
pub const WIDE_TAIL: char = '\0';

/// Terminal columns taken by `ch`: 2 for East Asian wide characters and the
/// emoji blocks, 0 for control and joining characters, 1 otherwise.
pub fn glyph_width(ch: char) -> u16 {
    let c = ch as u32;
    match c {
        0x00..=0x1F | 0x7F..=0x9F | 0x200B..=0x200F | 0xFE00..=0xFE0F => 0,
        0x1100..=0x115F
        | 0x2E80..=0x303E
        | 0x3041..=0x33FF
        | 0x3400..=0x4DBF
        | 0x4E00..=0x9FFF
        | 0xA000..=0xA4CF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFE30..=0xFE4F
        | 0xFF00..=0xFF60
        | 0xFFE0..=0xFFE6
        | 0x1F300..=0x1F64F
        | 0x1F680..=0x1F6FF
        | 0x1F900..=0x1F9FF
        | 0x1FA70..=0x1FAFF
        | 0x20000..=0x3FFFD => 2,
        _ => 1,
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer, keeping the allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Writes outside the buffer are dropped.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
    }

    /// Decimal number without allocating.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) {
        let mut digits = [0u8; 10];
        let mut n = value;
        let mut len = 0;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        for i in 0..len {
            let ch = digits[len - 1 - i] as char;
            self.put_char(x.saturating_add(i as u16), y, ch, style);
        }
    }

    /// Put a glyph that may be double width. Returns the columns used; a wide
    /// glyph that would be cut by the right edge is not drawn.
    pub fn put_glyph(&mut self, x: u16, y: u16, ch: char, style: CellStyle) -> u16 {
        match glyph_width(ch) {
            0 => 0,
            1 => {
                self.put_char(x, y, ch, style);
                1
            }
            _ => {
                if x.saturating_add(1) >= self.width {
                    return 0;
                }
                self.put_char(x, y, ch, style);
                self.put_char(x + 1, y, WIDE_TAIL, style);
                2
            }
        }
    }

    /// Fill a rectangle, clipped to the buffer.
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        for yy in y..y_end {
            for xx in x..x_end {
                self.put_char(xx, yy, ch, style);
            }
        }
    }

    /// Row `y` as it would read on screen, styles dropped. Handy in tests.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .filter(|&ch| ch != WIDE_TAIL)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_u32_writes_digits() {
        let mut fb = FrameBuffer::new(8, 1);
        let style = CellStyle::default();
        fb.put_u32(1, 0, 0, style);
        fb.put_u32(3, 0, 305, style);
        assert_eq!(fb.row_text(0), " 0 305  ");
    }

    #[test]
    fn test_writes_outside_are_clipped() {
        let mut fb = FrameBuffer::new(3, 2);
        let style = CellStyle::default().bold();
        fb.put_str(1, 1, "WON", style);
        fb.set(9, 9, style.into_cell('x'));
        assert_eq!(fb.row_text(1), " WO");
        assert!(fb.get(1, 1).unwrap().style.bold);
        assert_eq!(fb.get(3, 1), None);

        fb.fill_rect(2, 0, u16::MAX, u16::MAX, '#', style);
        assert_eq!(fb.row_text(0), "  #");
        assert_eq!(fb.row_text(1), " W#");
    }

    #[test]
    fn test_wide_glyph_reserves_two_columns() {
        let mut fb = FrameBuffer::new(4, 1);
        let style = CellStyle::default();
        assert_eq!(fb.put_glyph(0, 0, '🍓', style), 2);
        assert_eq!(fb.get(1, 0).unwrap().ch, WIDE_TAIL);
        assert_eq!(fb.put_glyph(2, 0, 'x', style), 1);
        // Would straddle the right edge.
        assert_eq!(fb.put_glyph(3, 0, '🍫', style), 0);
        assert_eq!(fb.row_text(0), "🍓x ");
    }

    #[test]
    fn test_glyph_widths() {
        assert_eq!(glyph_width('A'), 1);
        assert_eq!(glyph_width('·'), 1);
        assert_eq!(glyph_width('🧁'), 2);
        assert_eq!(glyph_width('糖'), 2);
        assert_eq!(glyph_width('\u{FE0F}'), 0);
    }

    #[test]
    fn test_resize_keeps_dimensions_consistent() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.resize(2, 3);
        assert_eq!((fb.width(), fb.height()), (2, 3));
        assert_eq!(fb.cells().len(), 6);
    }
}
