//! The multi-select widget: a tappable field that expands into a list of
//! options and shows the current selection as removable chips.

mod events;
mod render;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::animation::{MenuAnimation, MenuPhase};
use crate::config::{MultiSelectConfig, MultiSelectStyles};
use crate::selection::{self, noop_callback, OnSelectionsUpdate, SelectionMirror};
use crate::types::Style;

fn next_id() -> String {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    format!("multiselect-{}", COUNTER.fetch_add(1, Ordering::Relaxed))
}

/// A controlled multi-select input.
///
/// The host owns the selection. The widget mirrors it, proposes changes via
/// the `on_selections_update` callback, and only shows a change once the host
/// passes the new value back through [`MultiSelect::set_selected_values`].
///
/// # Example
///
/// ```ignore
/// let pending = Rc::new(RefCell::new(None));
/// let sink = Rc::clone(&pending);
/// let mut select = MultiSelect::new(options, Vec::new(), move |next| {
///     *sink.borrow_mut() = Some(next);
/// });
///
/// // each frame
/// let view = select.view(area);
/// select.handle_event(&event, &view);
/// if let Some(next) = pending.borrow_mut().take() {
///     select.set_selected_values(&next);
/// }
/// ```
pub struct MultiSelect {
    id: String,
    options: Vec<String>,
    mirror: SelectionMirror,
    on_update: OnSelectionsUpdate,
    config: MultiSelectConfig,
    styles: MultiSelectStyles,
    menu: MenuAnimation,
    /// First chip shown in the chip strip.
    chip_offset: usize,
    /// First option row shown in the dropdown.
    list_offset: usize,
    /// Keyboard highlight in the dropdown.
    cursor: Option<usize>,
}

impl std::fmt::Debug for MultiSelect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiSelect")
            .field("id", &self.id)
            .field("options", &self.options)
            .field("mirror", &self.mirror)
            .field("phase", &self.menu.phase())
            .field("progress", &self.menu.progress())
            .finish_non_exhaustive()
    }
}

impl MultiSelect {
    pub fn new(
        options: Vec<String>,
        selected_values: Vec<String>,
        on_selections_update: impl FnMut(Vec<String>) + 'static,
    ) -> Self {
        Self::with_callback(options, selected_values, Box::new(on_selections_update))
    }

    /// A widget without an update callback. Taps compute updates that go
    /// nowhere, so the selection only changes when the host sets it.
    pub fn display_only(options: Vec<String>, selected_values: Vec<String>) -> Self {
        Self::with_callback(options, selected_values, noop_callback())
    }

    fn with_callback(
        options: Vec<String>,
        selected_values: Vec<String>,
        on_update: OnSelectionsUpdate,
    ) -> Self {
        let config = MultiSelectConfig::default();
        let menu = MenuAnimation::new(config.menu_height)
            .with_duration(config.animation_duration)
            .with_easing(config.easing);
        Self {
            id: next_id(),
            options,
            mirror: SelectionMirror::new(selected_values),
            on_update,
            styles: config.resolved_styles(),
            config,
            menu,
            chip_offset: 0,
            list_offset: 0,
            cursor: None,
        }
    }

    pub fn with_config(mut self, config: MultiSelectConfig) -> Self {
        self.set_config(config);
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Apply new configuration without disturbing the menu state.
    pub fn set_config(&mut self, config: MultiSelectConfig) {
        self.menu.set_duration(config.animation_duration);
        self.menu.set_easing(config.easing);
        self.menu.set_reduced_motion(config.reduced_motion);
        self.menu.set_max(config.menu_height);
        self.styles = config.resolved_styles();
        self.config = config;
        self.clamp_offsets();
    }

    /// Replace the update callback.
    pub fn set_on_selections_update(&mut self, callback: impl FnMut(Vec<String>) + 'static) {
        self.on_update = Box::new(callback);
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn config(&self) -> &MultiSelectConfig {
        &self.config
    }

    /// Built-in styles merged with the configured overrides.
    pub fn styles(&self) -> &MultiSelectStyles {
        &self.styles
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn set_options(&mut self, options: Vec<String>) {
        self.options = options;
        if self.cursor.is_some_and(|c| c >= self.options.len()) {
            self.cursor = self.options.len().checked_sub(1);
        }
        self.clamp_offsets();
    }

    /// The mirrored selection, as last supplied by the host.
    pub fn selected(&self) -> &[String] {
        self.mirror.values()
    }

    /// Sync the mirror to the host's selection. Returns true if it changed.
    ///
    /// Re-syncing an identical value is a no-op and never touches the menu.
    pub fn set_selected_values(&mut self, values: &[String]) -> bool {
        let changed = self.mirror.sync(values);
        if changed {
            log::debug!("{} mirror synced to {} values", self.id, values.len());
            self.clamp_offsets();
        }
        changed
    }

    // -------------------------------------------------------------------------
    // Selection controller
    // -------------------------------------------------------------------------

    /// Propose the mirror with `option` toggled. The mirror itself is not touched.
    pub fn toggle_option(&mut self, option: &str) {
        let next = selection::toggle_option(self.mirror.values(), option);
        log::debug!("{} toggle '{}' -> {:?}", self.id, option, next);
        (self.on_update)(next);
    }

    /// Propose the mirror without `option`. The mirror itself is not touched.
    pub fn remove_option(&mut self, option: &str) {
        let next = selection::remove_option(self.mirror.values(), option);
        log::debug!("{} remove '{}' -> {:?}", self.id, option, next);
        (self.on_update)(next);
    }

    // -------------------------------------------------------------------------
    // Visibility
    // -------------------------------------------------------------------------

    pub fn toggle_menu(&mut self) -> MenuPhase {
        let phase = self.menu.toggle();
        log::debug!("{} menu {:?}", self.id, phase);
        phase
    }

    pub fn open_menu(&mut self) {
        self.menu.open();
    }

    pub fn close_menu(&mut self) {
        self.menu.close();
    }

    pub fn phase(&self) -> MenuPhase {
        self.menu.phase()
    }

    pub fn is_menu_visible(&self) -> bool {
        self.menu.is_visible()
    }

    pub fn is_animating(&self) -> bool {
        self.menu.is_animating()
    }

    /// Current menu height in configured units.
    pub fn progress(&self) -> f32 {
        self.menu.progress()
    }

    /// Advance the menu animation. Returns true if a redraw is needed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.menu.advance(dt)
    }

    // -------------------------------------------------------------------------
    // Geometry
    // -------------------------------------------------------------------------

    /// Rows the dropdown occupies right now.
    pub fn menu_rows(&self) -> u16 {
        self.menu.rows(self.config.units_per_row)
    }

    /// Rows of the bordered input field.
    pub fn input_height(&self) -> u16 {
        1 + self.styles.input.chrome().1
    }

    /// Total rows the widget needs for its current state.
    pub fn height(&self) -> u16 {
        let container = self.container_style().chrome().1;
        let label = u16::from(self.config.shows_label());
        container + label + self.input_height() + self.menu_rows()
    }

    /// Option rows visible when the menu is fully expanded.
    pub fn visible_option_rows(&self) -> usize {
        let units = self.config.units_per_row;
        if units <= 0.0 {
            return 0;
        }
        let full = (self.config.menu_height / units).round() as usize;
        full.saturating_sub(self.styles.dropdown.chrome().1 as usize)
    }

    pub fn chip_offset(&self) -> usize {
        self.chip_offset
    }

    pub fn list_offset(&self) -> usize {
        self.list_offset
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    fn container_style(&self) -> &Style {
        if self.menu.is_visible() {
            &self.styles.expanded_container
        } else {
            &self.styles.retracted_container
        }
    }

    fn clamp_offsets(&mut self) {
        self.chip_offset = self.chip_offset.min(self.mirror.len().saturating_sub(1));
        self.list_offset = self.list_offset.min(self.max_list_offset());
    }

    fn max_list_offset(&self) -> usize {
        self.options.len().saturating_sub(self.visible_option_rows())
    }
}
