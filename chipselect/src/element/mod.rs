mod node;

pub use node::{Action, Content, Element, ScrollArea};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    root.child_elements()
        .iter()
        .find_map(|child| find_element(child, id))
}
