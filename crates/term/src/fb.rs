//! Framebuffer and palette for the block grid view.
//!
//! Every screen element (grid cell, preview, flash, tray block, panel text)
//! has a named [`CellStyle`] built from the block palette here, so
//! `GameView` only decides which glyph goes where.

use crate::types::BlockColor;

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

    /// Display color of a palette entry
    pub const fn block(color: BlockColor) -> Self {
        match color {
            BlockColor::Red => Rgb::new(231, 76, 60),
            BlockColor::Teal => Rgb::new(26, 188, 156),
            BlockColor::Blue => Rgb::new(52, 152, 219),
            BlockColor::Orange => Rgb::new(243, 156, 18),
            BlockColor::Purple => Rgb::new(155, 89, 182),
        }
    }
}

/// Background inside the grid frame
pub const FIELD_BG: Rgb = Rgb::new(30, 30, 40);
/// Background everywhere else
pub const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

const TEXT: Rgb = Rgb::new(220, 220, 220);
const FRAME: Rgb = Rgb::new(200, 200, 200);
const EMPTY_DOT: Rgb = Rgb::new(90, 90, 100);
const FLASH: Rgb = Rgb::new(255, 255, 255);
const INVALID: Rgb = Rgb::new(230, 60, 60);

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

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn dim(self) -> Self {
        Self { dim: true, ..self }
    }

    /// Occupied grid cell
    pub const fn block(color: BlockColor) -> Self {
        Self::new(Rgb::block(color), FIELD_BG).bold()
    }

    /// Empty grid cell
    pub const fn empty() -> Self {
        Self::new(EMPTY_DOT, FIELD_BG).dim()
    }

    /// Empty cell on a line that was just cleared
    pub const fn flash() -> Self {
        Self::new(FLASH, FIELD_BG).bold()
    }

    /// Cursor preview; red when the block does not fit there
    pub const fn preview(color: BlockColor, valid: bool) -> Self {
        if valid {
            Self::new(Rgb::block(color), FIELD_BG)
        } else {
            Self::new(INVALID, FIELD_BG)
        }
    }

    /// Block drawn in a tray slot
    pub const fn tray(color: BlockColor) -> Self {
        Self::new(Rgb::block(color), PANEL_BG)
    }

    pub const fn frame() -> Self {
        Self::new(FRAME, PANEL_BG)
    }

    pub const fn label() -> Self {
        Self::new(TEXT, PANEL_BG).bold()
    }

    pub const fn value() -> Self {
        Self::new(FRAME, PANEL_BG)
    }

    /// GAME OVER banner
    pub const fn banner() -> Self {
        Self::new(FLASH, PANEL_BG).bold()
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(TEXT, PANEL_BG)
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub const fn new(ch: char, style: CellStyle) -> Self {
        Self { ch, style }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(' ', CellStyle::default())
    }
}

/// Styled character cells, row-major, clipped at the edges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let mut fb = Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
        };
        fb.reset(width, height);
        fb
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Take the viewport size and blank every cell. Reuses the allocation.
    pub fn reset(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells
            .resize(width as usize * height as usize, Cell::default());
    }

    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = Cell::new(ch, style);
        }
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        for (i, ch) in s.chars().enumerate() {
            self.put_char(x.saturating_add(i as u16), y, ch, style);
        }
    }

    /// Decimal number without allocating (scores, labels)
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) {
        let mut digits = [0u8; 10];
        let mut n = value;
        let mut len = 0;
        loop {
            digits[len] = (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        for (i, d) in digits[..len].iter().rev().enumerate() {
            self.put_char(x.saturating_add(i as u16), y, char::from(b'0' + d), style);
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// One row as plain text
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .map(|x| self.get(x, y).map_or(' ', |c| c.ch))
            .collect()
    }
}
