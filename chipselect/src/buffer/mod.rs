//! Double-buffered cell grid the terminal host diffs between frames.

use crate::types::{Rgb, TextStyle};

/// One terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    /// Second column of a double-width character.
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(Rgb::new(0, 0, 0))
    }
}

impl Cell {
    /// An empty cell painted with `bg`.
    pub const fn blank(bg: Rgb) -> Self {
        Self {
            char: ' ',
            fg: Rgb::new(255, 255, 255),
            bg,
            style: TextStyle::new(),
            wide_continuation: false,
        }
    }

    pub const fn glyph(char: char, fg: Rgb, bg: Rgb, style: TextStyle) -> Self {
        Self {
            char,
            fg,
            bg,
            style,
            wide_continuation: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); usize::from(width) * usize::from(height)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Overwrite a cell. Writes outside the grid are dropped.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.get_mut(x, y) {
            *slot = cell;
        }
    }

    /// Cells of `self` that differ from `previous`, row by row.
    pub fn diff<'a>(&'a self, previous: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        let width = usize::from(self.width.max(1));
        self.cells
            .iter()
            .zip(&previous.cells)
            .enumerate()
            .filter_map(move |(i, (now, before))| {
                (now != before).then(|| ((i % width) as u16, (i / width) as u16, now))
            })
    }

    /// Reset every cell to a blank on the given background.
    pub fn clear(&mut self, bg: Rgb) {
        self.cells.fill(Cell::blank(bg));
    }

    /// The characters of row `y`, skipping wide-character continuation cells.
    pub fn line(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.wide_continuation)
            .map(|cell| cell.char)
            .collect()
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }
}
