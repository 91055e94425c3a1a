//! Selection sequences and the host-owned selection mirror.
//!
//! The host owns the authoritative selection. The widget only ever computes
//! a *proposed* next sequence and hands it to the host's callback; its own
//! copy changes when the host passes a new value back in through
//! [`SelectionMirror::sync`].

/// Host callback receiving the full next selection (never a diff).
pub type OnSelectionsUpdate = Box<dyn FnMut(Vec<String>)>;

/// A callback that drops every update, leaving the widget display-only.
pub fn noop_callback() -> OnSelectionsUpdate {
    Box::new(|_| {})
}

/// Remove every occurrence of `option` if present, otherwise append it once.
pub fn toggle_option(current: &[String], option: &str) -> Vec<String> {
    if current.iter().any(|value| value == option) {
        remove_option(current, option)
    } else {
        let mut next = Vec::with_capacity(current.len() + 1);
        next.extend_from_slice(current);
        next.push(option.to_string());
        next
    }
}

/// `current` without any occurrence of `option`, order of the rest kept.
pub fn remove_option(current: &[String], option: &str) -> Vec<String> {
    current
        .iter()
        .filter(|value| value.as_str() != option)
        .cloned()
        .collect()
}

/// The widget's cached copy of the host's selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionMirror {
    values: Vec<String>,
}

impl SelectionMirror {
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, option: &str) -> bool {
        self.values.iter().any(|value| value == option)
    }

    /// Replace the mirror wholesale with the host's value.
    ///
    /// Returns `false` (and leaves everything untouched) when the value is
    /// identical to what is already mirrored.
    pub fn sync(&mut self, external: &[String]) -> bool {
        if self.values == external {
            return false;
        }
        self.values = external.to_vec();
        true
    }
}
