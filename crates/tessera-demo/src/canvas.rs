#![forbid(unsafe_code)]

//! Character canvas the demo screen draws into.
//!
//! Cells are stored in row-major order: `index = y * width + x`. A grapheme
//! wider than one cell occupies its head cell plus continuation cells to the
//! right, which contribute nothing when the row is turned back into text.

use std::io::{self, Write};

use tessera_layout::Rect;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Cell {
    #[default]
    Empty,
    Grapheme(String),
    Continuation,
}

/// Upper bound on the cells one canvas holds (4096 x 4096).
pub const MAX_CELLS: usize = 1 << 24;

/// A fixed-size grid of text cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    /// Create a blank canvas. Zero dimensions are allowed and draw nothing.
    ///
    /// The height is cut so the canvas never exceeds [`MAX_CELLS`]; rows past
    /// the cut are dropped like any other out-of-bounds write.
    pub fn new(width: u16, height: u16) -> Self {
        let max_rows = MAX_CELLS / usize::from(width).max(1);
        let height = u16::try_from(max_rows).map_or(height, |rows| height.min(rows));
        let size = usize::from(width) * usize::from(height);
        Self {
            width,
            height,
            cells: vec![Cell::Empty; size],
        }
    }

    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Whole canvas as a rectangle at the origin.
    #[inline]
    pub const fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(usize::from(y) * usize::from(self.width) + usize::from(x))
        } else {
            None
        }
    }

    /// Print `text` starting at `(x, y)`, never writing outside `clip` or the
    /// canvas. A grapheme that does not fit whole is dropped along with
    /// everything after it.
    ///
    /// Returns the x position after the last printed grapheme.
    pub fn print_clipped(&mut self, x: u16, y: u16, text: &str, clip: Rect) -> u16 {
        let clip = clip.intersection(&self.area());
        if !clip.contains(x, y) {
            return x;
        }

        let mut cx = x;
        for grapheme in text.graphemes(true) {
            let width = u16::try_from(grapheme.width()).unwrap_or(u16::MAX);
            if width == 0 {
                continue;
            }
            let Some(end) = cx.checked_add(width) else {
                break;
            };
            if end > clip.right() {
                break;
            }
            if let Some(idx) = self.index(cx, y) {
                self.cells[idx] = Cell::Grapheme(grapheme.to_string());
            }
            for tail in 1..width {
                if let Some(idx) = self.index(cx + tail, y) {
                    self.cells[idx] = Cell::Continuation;
                }
            }
            cx = end;
        }
        cx
    }

    /// Row `y` as text, trailing blanks trimmed.
    pub fn row_text(&self, y: u16) -> String {
        let mut line = String::new();
        for x in 0..self.width {
            match self.index(x, y).map(|idx| &self.cells[idx]) {
                Some(Cell::Grapheme(g)) => line.push_str(g),
                Some(Cell::Empty) => line.push(' '),
                Some(Cell::Continuation) | None => {}
            }
        }
        line.truncate(line.trim_end().len());
        line
    }

    /// Every row as text.
    pub fn lines(&self) -> Vec<String> {
        (0..self.height).map(|y| self.row_text(y)).collect()
    }

    /// Write the canvas line by line.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.lines() {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}
