use super::{Color, Rgb};

/// Named colors that `Color::Var` values resolve against.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub surface: Color,
    pub muted: Color,
    pub border: Color,
    pub primary: Color,
    pub highlight: Color,
    pub danger: Color,
}

impl Theme {
    pub fn new() -> Self {
        Self {
            background: Color::oklch(0.18, 0.01, 250.0),
            foreground: Color::oklch(0.95, 0.0, 0.0),
            surface: Color::oklch(0.25, 0.02, 250.0),
            muted: Color::oklch(0.6, 0.01, 250.0),
            border: Color::oklch(0.45, 0.02, 250.0),
            primary: Color::oklch(0.75, 0.12, 250.0),
            highlight: Color::oklch(0.35, 0.05, 250.0),
            danger: Color::oklch(0.65, 0.2, 25.0),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&Color> {
        match name {
            "background" => Some(&self.background),
            "foreground" => Some(&self.foreground),
            "surface" => Some(&self.surface),
            "muted" => Some(&self.muted),
            "border" => Some(&self.border),
            "primary" => Some(&self.primary),
            "highlight" => Some(&self.highlight),
            "danger" => Some(&self.danger),
            _ => None,
        }
    }

    /// Resolve any color to sRGB. Unknown names fall back to the foreground color.
    pub fn resolve(&self, color: &Color) -> Rgb {
        self.resolve_depth(color, 0)
    }

    fn resolve_depth(&self, color: &Color, depth: u8) -> Rgb {
        if let Some(rgb) = color.to_rgb() {
            return rgb;
        }
        let Color::Var(name) = color else {
            return Rgb::default();
        };
        match self.lookup(name) {
            Some(resolved) if depth < 4 => self.resolve_depth(resolved, depth + 1),
            _ => {
                log::trace!("unresolved theme color '{name}'");
                self.foreground.to_rgb().unwrap_or(Rgb::new(255, 255, 255))
            }
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}
