use thiserror::Error;

/// Errors surfaced by configuration parsing and the terminal host.
///
/// Selection and animation operations are total and never produce these.
#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid color '{0}' (expected #rgb, #rrggbb, rgb(r, g, b), oklch(l, c, h) or a theme name)")]
    InvalidColor(String),

    #[error("invalid text alignment '{0}' (expected left, center or right)")]
    InvalidTextAlign(String),
}

pub type Result<T> = std::result::Result<T, Error>;
