use crate::rect::Rect;
use crate::types::{Style, TextAlign};

/// What a tap on an element asks the widget to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Open or close the dropdown.
    ToggleMenu,
    /// Toggle the option at this index of the options list.
    ToggleOption(usize),
    /// Remove this value from the selection.
    ///
    /// Carries the value rather than a chip position so that a tap resolved
    /// against a tree built before the last sync cannot hit another chip.
    RemoveChip(String),
}

/// Which scrollable strip a wheel event over this element moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollArea {
    Chips,
    Options,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<Element>),
}

/// A positioned node of the rendered widget tree.
///
/// Rects are absolute screen cells. Children are drawn after (on top of)
/// their parent, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: String,
    pub rect: Rect,
    pub content: Content,
    pub style: Style,
    pub text_align: TextAlign,
    /// Clip children to this element's content rect (for drawing and hit testing).
    pub clip: bool,
    pub action: Option<Action>,
    pub scroll_area: Option<ScrollArea>,
}

impl Element {
    pub fn new(id: impl Into<String>, rect: Rect) -> Self {
        Self {
            id: id.into(),
            rect,
            content: Content::None,
            style: Style::default(),
            text_align: TextAlign::Left,
            clip: false,
            action: None,
            scroll_area: None,
        }
    }

    pub fn text(id: impl Into<String>, rect: Rect, text: impl Into<String>) -> Self {
        Self {
            content: Content::Text(text.into()),
            ..Self::new(id, rect)
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.text_align = align;
        self
    }

    pub fn clip(mut self, clip: bool) -> Self {
        self.clip = clip;
        self
    }

    pub fn action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    pub fn scroll_area(mut self, area: ScrollArea) -> Self {
        self.scroll_area = Some(area);
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }
}
