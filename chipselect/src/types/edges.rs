/// Per-side spacing in cells, used for padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Edges {
    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn all(value: u16) -> Self {
        Self::new(value, value, value, value)
    }

    /// Left and right only.
    pub const fn horizontal(value: u16) -> Self {
        Self::new(0, value, 0, value)
    }

    /// Top and bottom only.
    pub const fn vertical(value: u16) -> Self {
        Self::new(value, 0, value, 0)
    }

    /// Grow every side by `amount`.
    pub const fn grow(self, amount: u16) -> Self {
        Self::new(
            self.top.saturating_add(amount),
            self.right.saturating_add(amount),
            self.bottom.saturating_add(amount),
            self.left.saturating_add(amount),
        )
    }

    /// Combined size as (left + right, top + bottom).
    pub const fn totals(&self) -> (u16, u16) {
        (
            self.left.saturating_add(self.right),
            self.top.saturating_add(self.bottom),
        )
    }
}
