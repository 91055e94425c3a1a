//! Element tree construction for [`MultiSelect`].

use super::MultiSelect;
use crate::element::{Action, Element, ScrollArea};
use crate::rect::Rect;
use crate::text::display_width;
use crate::types::{Color, Style};

/// Glyph of the chip removal affordance.
pub const REMOVE_ICON: &str = "✕";

/// Cells a chip adds around its text: padding, space, icon, padding.
const CHIP_CHROME: u16 = 4;
const CHIP_GAP: u16 = 1;

impl MultiSelect {
    /// Lay out the widget at the top of `area`.
    ///
    /// The returned tree is what the host draws and what
    /// [`MultiSelect::handle_event`] hit-tests against.
    pub fn view(&self, area: Rect) -> Element {
        let container_style = self.container_style().clone();
        let rect = Rect::new(area.x, area.y, area.width, self.height().min(area.height));
        let content = container_style.content_rect(rect);

        let mut root = Element::new(self.id.clone(), rect).style(container_style);
        let mut y = content.y;

        if self.config.shows_label() {
            let label_rect = content.row(0);
            root = root.child(
                Element::text(format!("{}-label", self.id), label_rect, &self.config.label)
                    .style(self.styles.label.clone()),
            );
            y = y.saturating_add(1);
        }

        let input_rect = Rect::new(content.x, y, content.width, self.input_height());
        root = root.child(self.input_view(input_rect));
        y = input_rect.bottom();

        if self.menu.is_visible() {
            let rows = self.menu_rows().min(area.bottom().saturating_sub(y));
            root = root.child(self.dropdown_view(Rect::new(content.x, y, content.width, rows)));
        }

        log::trace!(
            "{} view phase={:?} rows={} chips={}",
            self.id,
            self.menu.phase(),
            self.menu_rows(),
            self.mirror.len()
        );

        root
    }

    fn input_view(&self, rect: Rect) -> Element {
        let style = &self.styles.input;
        let inner = style.content_rect(rect);
        let line = Rect::new(inner.x, inner.y, inner.width, inner.height.min(1));

        let arrow = if self.menu.is_expanding() { "▲" } else { "▼" };
        let arrow_rect = Rect::new(line.right().saturating_sub(1), line.y, line.width.min(1), line.height);
        let strip_rect = Rect::new(line.x, line.y, line.width.saturating_sub(2), line.height);

        let mut strip = Element::new(format!("{}-chips", self.id), strip_rect)
            .clip(true)
            .scroll_area(ScrollArea::Chips);

        if self.mirror.is_empty() {
            strip = strip.child(
                Element::text(
                    format!("{}-placeholder", self.id),
                    strip_rect,
                    &self.config.placeholder,
                )
                .style(self.styles.placeholder_text.clone()),
            );
        } else {
            strip = strip.children(self.chip_views(strip_rect));
        }

        Element::new(format!("{}-input", self.id), rect)
            .style(style.clone())
            .action(Action::ToggleMenu)
            .child(strip)
            .child(Element::text(format!("{}-arrow", self.id), arrow_rect, arrow))
    }

    fn chip_views(&self, strip: Rect) -> Vec<Element> {
        let icon_style = Style::new().foreground(self.config.icon_color());
        let mut chips = Vec::new();
        let mut x = strip.x;

        for (i, value) in self.mirror.values().iter().enumerate().skip(self.chip_offset) {
            if x >= strip.right() {
                break;
            }

            let text_width = u16::try_from(display_width(value)).unwrap_or(u16::MAX);
            let chip_rect = Rect::new(x, strip.y, text_width.saturating_add(CHIP_CHROME), 1);
            let text_rect = Rect::new(x.saturating_add(1), strip.y, text_width, 1);
            let icon_rect = Rect::new(text_rect.right().saturating_add(1), strip.y, 1, 1);

            chips.push(
                Element::new(format!("{}-chip-{i}", self.id), chip_rect)
                    .style(self.styles.selected_item.clone())
                    .child(
                        Element::text(format!("{}-chip-{i}-text", self.id), text_rect, value)
                            .style(self.styles.selected_item_text.clone()),
                    )
                    .child(
                        Element::text(format!("{}-chip-{i}-remove", self.id), icon_rect, REMOVE_ICON)
                            .style(icon_style.clone())
                            .action(Action::RemoveChip(value.clone())),
                    ),
            );

            x = chip_rect.right().saturating_add(CHIP_GAP);
        }

        chips
    }

    fn dropdown_view(&self, rect: Rect) -> Element {
        let style = &self.styles.dropdown;
        let inner = style.content_rect(rect);
        let highlight = Style::new().background(Color::var("highlight"));
        let marked = Style::new().foreground(Color::var("primary")).bold();

        let mut dropdown = Element::new(format!("{}-dropdown", self.id), rect)
            .style(style.clone())
            .clip(true)
            .scroll_area(ScrollArea::Options);

        let rows = self
            .options
            .iter()
            .enumerate()
            .skip(self.list_offset)
            .take(inner.height as usize);

        for (row, (index, option)) in rows.enumerate() {
            let row_rect = inner.row(row as u16);

            let item_style = if self.cursor == Some(index) {
                self.styles.dropdown_item.merge(&highlight)
            } else {
                self.styles.dropdown_item.clone()
            };
            let text_style = if self.mirror.contains(option) {
                self.styles.dropdown_text.merge(&marked)
            } else {
                self.styles.dropdown_text.clone()
            };

            let text_rect = Rect {
                y: row_rect.y,
                height: 1,
                ..item_style.content_rect(row_rect)
            };

            dropdown = dropdown.child(
                Element::new(format!("{}-option-{index}", self.id), row_rect)
                    .style(item_style)
                    .action(Action::ToggleOption(index))
                    .child(
                        Element::text(format!("{}-option-{index}-text", self.id), text_rect, option)
                            .style(text_style)
                            .text_align(self.config.text_align),
                    ),
            );
        }

        dropdown
    }
}
