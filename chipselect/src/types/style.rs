use super::{Border, Color, Edges, TextStyle};
use crate::rect::Rect;

/// A set of optional visual overrides.
///
/// Every field is optional so that styles can be layered: [`Style::merge`]
/// overlays one style on another field by field, with the overlay winning
/// wherever it sets a value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub border: Option<Border>,
    pub border_color: Option<Color>,
    pub padding: Option<Edges>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub dim: Option<bool>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = Some(true);
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = Some(true);
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = Some(true);
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = Some(true);
        self
    }

    /// Overlay `over` on top of `self`. Fields set in `over` win.
    pub fn merge(&self, over: &Style) -> Style {
        Style {
            background: over.background.clone().or_else(|| self.background.clone()),
            foreground: over.foreground.clone().or_else(|| self.foreground.clone()),
            border: over.border.or(self.border),
            border_color: over
                .border_color
                .clone()
                .or_else(|| self.border_color.clone()),
            padding: over.padding.or(self.padding),
            bold: over.bold.or(self.bold),
            italic: over.italic.or(self.italic),
            underline: over.underline.or(self.underline),
            dim: over.dim.or(self.dim),
        }
    }

    /// Merge styles in order, later entries winning.
    pub fn cascade<'a>(styles: impl IntoIterator<Item = &'a Style>) -> Style {
        styles
            .into_iter()
            .fold(Style::new(), |acc, style| acc.merge(style))
    }

    /// Resolve text attributes, inheriting anything this style leaves unset.
    pub fn text_style(&self, inherited: TextStyle) -> TextStyle {
        TextStyle {
            bold: self.bold.unwrap_or(inherited.bold),
            italic: self.italic.unwrap_or(inherited.italic),
            underline: self.underline.unwrap_or(inherited.underline),
            dim: self.dim.unwrap_or(inherited.dim),
        }
    }

    /// Rows or columns taken by border and padding, as (horizontal, vertical).
    pub fn chrome(&self) -> (u16, u16) {
        self.insets().totals()
    }

    /// The area left for content once border and padding are removed.
    pub fn content_rect(&self, rect: Rect) -> Rect {
        rect.inset(self.insets())
    }

    fn insets(&self) -> Edges {
        let border = self.border.unwrap_or_default().size();
        self.padding.unwrap_or_default().grow(border)
    }
}
