//! Input handling for [`MultiSelect`].

use super::MultiSelect;
use crate::element::{Action, Element, ScrollArea};
use crate::event::{Event, Key, Modifiers};
use crate::hit::{hit_action, scroll_target};

impl MultiSelect {
    /// Handle one event against the tree last returned by [`MultiSelect::view`].
    ///
    /// Returns true if the event was consumed. A tap resolves to at most one
    /// action, so removing a chip never also toggles the menu.
    pub fn handle_event(&mut self, event: &Event, view: &Element) -> bool {
        match *event {
            Event::Tap { x, y } => match hit_action(view, x, y) {
                Some(action) => self.apply_action(action),
                None => false,
            },
            Event::Scroll { x, y, delta } => match scroll_target(view, x, y) {
                Some(ScrollArea::Chips) => self.scroll_chips(delta),
                Some(ScrollArea::Options) => self.scroll_options(delta),
                None => false,
            },
            Event::Key { key, modifiers } => self.handle_key(key, modifiers),
            Event::Resize { .. } => false,
        }
    }

    /// Run the behavior bound to a tapped element. Returns false if the
    /// action no longer applies, e.g. a chip already gone from the mirror.
    pub fn apply_action(&mut self, action: Action) -> bool {
        log::debug!("{} action {:?}", self.id, action);
        match action {
            Action::ToggleMenu => {
                self.toggle_menu();
                true
            }
            Action::ToggleOption(index) => match self.options.get(index).cloned() {
                Some(option) => {
                    self.cursor = Some(index);
                    self.toggle_option(&option);
                    true
                }
                None => false,
            },
            Action::RemoveChip(value) => {
                if !self.mirror.contains(&value) {
                    log::debug!("{} ignoring stale removal of '{}'", self.id, value);
                    return false;
                }
                self.remove_option(&value);
                true
            }
        }
    }

    fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> bool {
        if modifiers.ctrl || modifiers.alt {
            return false;
        }

        let expanding = self.menu.is_expanding();
        match key {
            Key::Enter | Key::Char(' ') | Key::Down if !expanding => {
                self.open_menu();
                true
            }
            Key::Escape if expanding => {
                self.close_menu();
                true
            }
            Key::Up if expanding => self.move_cursor(-1),
            Key::Down => self.move_cursor(1),
            Key::Enter | Key::Char(' ') => match self.cursor {
                Some(index) => self.apply_action(Action::ToggleOption(index)),
                None => false,
            },
            Key::Backspace => match self.mirror.values().last().cloned() {
                Some(last) => {
                    self.remove_option(&last);
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    fn move_cursor(&mut self, delta: isize) -> bool {
        let Some(last) = self.options.len().checked_sub(1) else {
            return false;
        };

        let next = match self.cursor {
            None if delta > 0 => 0,
            None => last,
            Some(current) => current.saturating_add_signed(delta).min(last),
        };
        self.cursor = Some(next);

        let rows = self.visible_option_rows().max(1);
        if next < self.list_offset {
            self.list_offset = next;
        } else if next >= self.list_offset + rows {
            self.list_offset = next + 1 - rows;
        }
        true
    }

    fn scroll_chips(&mut self, delta: i16) -> bool {
        let max = self.mirror.len().saturating_sub(1);
        let next = self.chip_offset.saturating_add_signed(delta as isize).min(max);
        let changed = next != self.chip_offset;
        self.chip_offset = next;
        changed
    }

    fn scroll_options(&mut self, delta: i16) -> bool {
        let next = self
            .list_offset
            .saturating_add_signed(delta as isize)
            .min(self.max_list_offset());
        let changed = next != self.list_offset;
        self.list_offset = next;
        changed
    }
}
