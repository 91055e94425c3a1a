use crate::element::{Action, Element, ScrollArea};
use crate::rect::Rect;

/// Find the topmost element with an action at the given coordinates.
///
/// Children are checked in reverse order (last drawn is on top) before their
/// parent, so a nested target such as a chip's removal icon shadows the input
/// area around it. Points outside a clipping ancestor never hit its children.
pub fn hit_test(root: &Element, x: u16, y: u16) -> Option<&Element> {
    hit_element(root, x, y, None, &|element| element.action.is_some())
}

/// The action a tap at the given coordinates would trigger.
pub fn hit_action(root: &Element, x: u16, y: u16) -> Option<Action> {
    hit_test(root, x, y).and_then(|element| element.action.clone())
}

/// The scrollable strip under the given coordinates.
pub fn scroll_target(root: &Element, x: u16, y: u16) -> Option<ScrollArea> {
    hit_element(root, x, y, None, &|element| element.scroll_area.is_some())
        .and_then(|element| element.scroll_area)
}

fn hit_element<'a>(
    element: &'a Element,
    x: u16,
    y: u16,
    clip: Option<Rect>,
    accept: &dyn Fn(&Element) -> bool,
) -> Option<&'a Element> {
    if let Some(clip) = clip {
        if !clip.contains(x, y) {
            return None;
        }
    }

    let child_clip = if element.clip {
        let inner = element.style.content_rect(element.rect);
        Some(clip.map_or(inner, |outer| inner.intersection(outer)))
    } else {
        clip
    };

    for child in element.child_elements().iter().rev() {
        if let Some(hit) = hit_element(child, x, y, child_clip, accept) {
            return Some(hit);
        }
    }

    if accept(element) && element.rect.contains(x, y) {
        Some(element)
    } else {
        None
    }
}
