//! Dropdown height animation.
//!
//! The menu height is a tweened value advanced by the host's frame loop:
//! the host calls [`MenuAnimation::advance`] with the time since the last
//! frame for as long as [`MenuAnimation::is_animating`] is true.

use std::time::Duration;

/// Full-travel duration of an open or close transition.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(500);

/// Easing function for transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuPhase {
    /// Not rendered, height 0.
    Closed,
    /// Rendered, growing toward the configured height.
    Opening,
    /// Rendered at full height.
    Open,
    /// Still rendered, shrinking toward 0.
    Closing,
}

impl MenuPhase {
    pub fn is_visible(self) -> bool {
        !matches!(self, MenuPhase::Closed)
    }

    pub fn is_animating(self) -> bool {
        matches!(self, MenuPhase::Opening | MenuPhase::Closing)
    }
}

/// Visibility flag plus the tween driving the menu height.
#[derive(Debug, Clone)]
pub struct MenuAnimation {
    progress: f32,
    from: f32,
    target: f32,
    max: f32,
    elapsed: Duration,
    /// Length of the running segment; shorter than `duration` after a reversal.
    segment: Duration,
    duration: Duration,
    easing: Easing,
    /// Whether the current (or last) transition heads toward `max`.
    expanding: bool,
    running: bool,
    visible: bool,
    reduced_motion: bool,
}

impl MenuAnimation {
    pub fn new(max: f32) -> Self {
        Self {
            progress: 0.0,
            from: 0.0,
            target: 0.0,
            max: max.max(0.0),
            elapsed: Duration::ZERO,
            segment: Duration::ZERO,
            duration: DEFAULT_DURATION,
            easing: Easing::default(),
            expanding: false,
            running: false,
            visible: false,
            reduced_motion: false,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Takes effect from the next transition on.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// When enabled, transitions complete as soon as they start.
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
        if enabled && self.running {
            self.finish();
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_animating(&self) -> bool {
        self.running
    }

    /// True while opening or open, i.e. the next toggle closes.
    pub fn is_expanding(&self) -> bool {
        self.expanding
    }

    pub fn phase(&self) -> MenuPhase {
        match (self.visible, self.running, self.expanding) {
            (false, _, _) => MenuPhase::Closed,
            (true, true, true) => MenuPhase::Opening,
            (true, true, false) => MenuPhase::Closing,
            (true, false, true) => MenuPhase::Open,
            // A finished close always clears visibility; treat leftovers as closed.
            (true, false, false) => MenuPhase::Closed,
        }
    }

    /// Reverse the current direction, starting from the current height.
    pub fn toggle(&mut self) -> MenuPhase {
        if self.expanding {
            self.close();
        } else {
            self.open();
        }
        self.phase()
    }

    /// Mount the menu and start growing. No-op when already opening or open.
    pub fn open(&mut self) {
        if self.expanding {
            return;
        }
        self.expanding = true;
        self.visible = true;
        self.start(self.max);
    }

    /// Start shrinking. The menu stays mounted until the tween completes.
    pub fn close(&mut self) {
        if !self.expanding {
            return;
        }
        self.expanding = false;
        self.start(0.0);
    }

    /// Change the fully expanded height.
    ///
    /// While opening or open the tween is retargeted from the current height;
    /// otherwise only the next opening is affected.
    pub fn set_max(&mut self, max: f32) {
        let max = max.max(0.0);
        if max == self.max {
            return;
        }
        self.max = max;
        if self.expanding {
            self.start(max);
        }
    }

    /// Advance the tween by `dt`. Returns true if the height changed.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if !self.running {
            return false;
        }

        self.elapsed += dt;
        if self.elapsed >= self.segment {
            self.finish();
            return true;
        }

        let t = self.elapsed.as_secs_f32() / self.segment.as_secs_f32();
        self.progress = self.from + (self.target - self.from) * self.easing.apply(t);
        true
    }

    /// Current height in whole rows of `units_per_row` units.
    pub fn rows(&self, units_per_row: f32) -> u16 {
        if units_per_row <= 0.0 {
            return 0;
        }
        (self.progress / units_per_row).round().clamp(0.0, u16::MAX as f32) as u16
    }

    fn start(&mut self, target: f32) {
        self.from = self.progress;
        self.target = target;
        self.elapsed = Duration::ZERO;
        self.running = true;

        // Partial travel takes the proportional share of the full duration.
        let distance = (target - self.progress).abs();
        self.segment = if self.max > 0.0 {
            self.duration.mul_f32((distance / self.max).min(1.0))
        } else {
            Duration::ZERO
        };

        log::trace!(
            "menu transition from={} to={} over {:?}",
            self.from,
            self.target,
            self.segment
        );

        if self.reduced_motion || self.segment.is_zero() {
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.progress = self.target;
        self.elapsed = self.segment;
        self.running = false;
        if !self.expanding {
            self.visible = false;
        }
    }
}

impl Default for MenuAnimation {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MENU_HEIGHT)
    }
}
