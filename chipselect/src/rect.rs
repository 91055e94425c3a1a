use crate::types::Edges;

/// An absolute screen area in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// One past the last column.
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// One past the last row.
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// The area left after removing `edges` from each side.
    pub fn inset(self, edges: Edges) -> Self {
        let (horizontal, vertical) = edges.totals();
        Self::new(
            self.x.saturating_add(edges.left),
            self.y.saturating_add(edges.top),
            self.width.saturating_sub(horizontal),
            self.height.saturating_sub(vertical),
        )
    }

    /// The single row `offset` rows below the top, with the same columns.
    pub const fn row(self, offset: u16) -> Self {
        Self::new(self.x, self.y.saturating_add(offset), self.width, 1)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        (self.x..self.right()).contains(&x) && (self.y..self.bottom()).contains(&y)
    }

    /// Overlap of two rects; zero-sized when they are disjoint.
    pub fn intersection(&self, other: Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        Rect::new(
            x,
            y,
            self.right().min(other.right()).saturating_sub(x),
            self.bottom().min(other.bottom()).saturating_sub(y),
        )
    }
}
