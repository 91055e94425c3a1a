//! Widget configuration.

use std::time::Duration;

use crate::animation::{Easing, DEFAULT_DURATION};
use crate::types::{Border, Color, Edges, Style, TextAlign};

pub const DEFAULT_MENU_HEIGHT: f32 = 200.0;

/// Menu-height units covered by one terminal row.
pub const DEFAULT_UNITS_PER_ROW: f32 = 20.0;

pub const DEFAULT_PLACEHOLDER: &str = "Select...";

/// The ten style slots of the widget.
///
/// `Default` gives the empty set used for caller overrides; built-in looks
/// come from [`MultiSelectStyles::defaults`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiSelectStyles {
    pub expanded_container: Style,
    pub retracted_container: Style,
    pub input: Style,
    pub dropdown: Style,
    pub dropdown_item: Style,
    pub dropdown_text: Style,
    pub placeholder_text: Style,
    pub label: Style,
    pub selected_item: Style,
    pub selected_item_text: Style,
}

impl MultiSelectStyles {
    pub fn defaults() -> Self {
        Self {
            expanded_container: Style::new(),
            retracted_container: Style::new(),
            input: Style::new()
                .border(Border::Rounded)
                .border_color(Color::var("border"))
                .padding(Edges::horizontal(1)),
            dropdown: Style::new().background(Color::var("surface")),
            dropdown_item: Style::new().padding(Edges::horizontal(1)),
            dropdown_text: Style::new().foreground(Color::var("foreground")),
            placeholder_text: Style::new().foreground(Color::var("muted")).italic(),
            label: Style::new().foreground(Color::var("primary")).bold(),
            selected_item: Style::new().background(Color::var("highlight")),
            selected_item_text: Style::new().foreground(Color::var("foreground")),
        }
    }

    /// Slot-wise [`Style::merge`]; fields set in `over` win.
    pub fn merge(&self, over: &MultiSelectStyles) -> MultiSelectStyles {
        MultiSelectStyles {
            expanded_container: self.expanded_container.merge(&over.expanded_container),
            retracted_container: self.retracted_container.merge(&over.retracted_container),
            input: self.input.merge(&over.input),
            dropdown: self.dropdown.merge(&over.dropdown),
            dropdown_item: self.dropdown_item.merge(&over.dropdown_item),
            dropdown_text: self.dropdown_text.merge(&over.dropdown_text),
            placeholder_text: self.placeholder_text.merge(&over.placeholder_text),
            label: self.label.merge(&over.label),
            selected_item: self.selected_item.merge(&over.selected_item),
            selected_item_text: self.selected_item_text.merge(&over.selected_item_text),
        }
    }
}

/// Host-supplied configuration for a [`crate::MultiSelect`].
#[derive(Debug, Clone, PartialEq)]
pub struct MultiSelectConfig {
    /// Fully expanded menu height; the animation target.
    pub menu_height: f32,
    pub label: String,
    pub label_shown: bool,
    /// Alignment of dropdown row text.
    pub text_align: TextAlign,
    /// Chip removal icon color. `None` uses the theme's `danger` color.
    pub remove_icon_color: Option<Color>,
    pub placeholder: String,
    /// Caller overrides, merged over [`MultiSelectStyles::defaults`].
    pub styles: MultiSelectStyles,
    pub animation_duration: Duration,
    pub easing: Easing,
    pub units_per_row: f32,
    pub reduced_motion: bool,
}

impl Default for MultiSelectConfig {
    fn default() -> Self {
        Self {
            menu_height: DEFAULT_MENU_HEIGHT,
            label: String::new(),
            label_shown: true,
            text_align: TextAlign::Center,
            remove_icon_color: None,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            styles: MultiSelectStyles::default(),
            animation_duration: DEFAULT_DURATION,
            easing: Easing::default(),
            units_per_row: DEFAULT_UNITS_PER_ROW,
            reduced_motion: false,
        }
    }
}

impl MultiSelectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu_height(mut self, height: f32) -> Self {
        self.menu_height = height.max(0.0);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn label_shown(mut self, shown: bool) -> Self {
        self.label_shown = shown;
        self
    }

    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.text_align = align;
        self
    }

    pub fn remove_icon_color(mut self, color: Color) -> Self {
        self.remove_icon_color = Some(color);
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn styles(mut self, styles: MultiSelectStyles) -> Self {
        self.styles = styles;
        self
    }

    pub fn expanded_container_style(mut self, style: Style) -> Self {
        self.styles.expanded_container = style;
        self
    }

    pub fn retracted_container_style(mut self, style: Style) -> Self {
        self.styles.retracted_container = style;
        self
    }

    pub fn input_style(mut self, style: Style) -> Self {
        self.styles.input = style;
        self
    }

    pub fn dropdown_style(mut self, style: Style) -> Self {
        self.styles.dropdown = style;
        self
    }

    pub fn dropdown_item_style(mut self, style: Style) -> Self {
        self.styles.dropdown_item = style;
        self
    }

    pub fn dropdown_text_style(mut self, style: Style) -> Self {
        self.styles.dropdown_text = style;
        self
    }

    pub fn placeholder_text_style(mut self, style: Style) -> Self {
        self.styles.placeholder_text = style;
        self
    }

    pub fn label_style(mut self, style: Style) -> Self {
        self.styles.label = style;
        self
    }

    pub fn selected_item_style(mut self, style: Style) -> Self {
        self.styles.selected_item = style;
        self
    }

    pub fn selected_item_text_style(mut self, style: Style) -> Self {
        self.styles.selected_item_text = style;
        self
    }

    pub fn animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn units_per_row(mut self, units: f32) -> Self {
        self.units_per_row = units;
        self
    }

    pub fn reduced_motion(mut self, enabled: bool) -> Self {
        self.reduced_motion = enabled;
        self
    }

    /// The label renders only when enabled and non-empty.
    pub fn shows_label(&self) -> bool {
        self.label_shown && !self.label.is_empty()
    }

    pub fn icon_color(&self) -> Color {
        self.remove_icon_color
            .clone()
            .unwrap_or_else(|| Color::var("danger"))
    }

    /// Built-in defaults with the caller's overrides applied.
    pub fn resolved_styles(&self) -> MultiSelectStyles {
        MultiSelectStyles::defaults().merge(&self.styles)
    }
}
