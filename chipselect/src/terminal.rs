//! Crossterm host: raw mode, mouse capture, event polling and diffed output.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event,
    queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::Buffer;
use crate::element::Element;
use crate::error::Result;
use crate::event::Event;
use crate::render::render_to_buffer;
use crate::text::char_width;
use crate::types::{Rgb, TextStyle, Theme};

pub struct Terminal {
    stdout: io::Stdout,
    current_buffer: Buffer,
    previous_buffer: Buffer,
}

impl Terminal {
    pub fn new() -> Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;
        stdout.flush()?;

        let (width, height) = terminal::size()?;
        log::debug!("terminal opened at {width}x{height}");

        Ok(Self {
            stdout,
            current_buffer: Buffer::new(width, height),
            previous_buffer: Buffer::new(width, height),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current_buffer.width(), self.current_buffer.height())
    }

    /// Wait for input. `None` blocks until something arrives.
    ///
    /// Pending events are drained after the first one; events the widget has
    /// no use for are dropped.
    pub fn poll(&self, timeout: Option<Duration>) -> Result<Vec<Event>> {
        let mut raw = Vec::new();

        match timeout {
            Some(dur) => {
                if event::poll(dur)? {
                    raw.push(event::read()?);
                }
            }
            None => raw.push(event::read()?),
        }

        if !raw.is_empty() {
            while event::poll(Duration::ZERO)? {
                raw.push(event::read()?);
            }
        }

        Ok(raw.iter().filter_map(Event::from_crossterm).collect())
    }

    /// Draw an element tree, writing only the cells that changed.
    pub fn draw(&mut self, root: &Element, theme: &Theme) -> Result<()> {
        let (width, height) = terminal::size()?;
        if width != self.current_buffer.width() || height != self.current_buffer.height() {
            log::debug!("terminal resized to {width}x{height}");
            self.current_buffer = Buffer::new(width, height);
            // Force a full repaint.
            self.previous_buffer = Buffer::new(width, height);
            self.previous_buffer.clear(Rgb::new(1, 1, 1));
        }

        self.current_buffer.clear(theme.resolve(&theme.background));
        render_to_buffer(root, &mut self.current_buffer, theme);

        self.flush_diff()?;
        std::mem::swap(&mut self.current_buffer, &mut self.previous_buffer);
        Ok(())
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_x = u16::MAX;
        let mut last_y = u16::MAX;
        let mut last_char_width: u16 = 1;
        let mut last_fg = None;
        let mut last_bg = None;
        let mut last_style = TextStyle::new();

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.current_buffer.diff(&self.previous_buffer) {
            if cell.wide_continuation {
                continue;
            }

            if y != last_y || x != last_x.wrapping_add(last_char_width) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if last_fg != Some(cell.fg) {
                queue!(self.stdout, SetForegroundColor(ct_color(cell.fg)))?;
                last_fg = Some(cell.fg);
            }
            if last_bg != Some(cell.bg) {
                queue!(self.stdout, SetBackgroundColor(ct_color(cell.bg)))?;
                last_bg = Some(cell.bg);
            }

            if cell.style != last_style {
                // Attribute resets clear colors too.
                queue!(self.stdout, SetAttribute(Attribute::Reset))?;
                queue!(
                    self.stdout,
                    SetForegroundColor(ct_color(cell.fg)),
                    SetBackgroundColor(ct_color(cell.bg))
                )?;
                if cell.style.bold {
                    queue!(self.stdout, SetAttribute(Attribute::Bold))?;
                }
                if cell.style.dim {
                    queue!(self.stdout, SetAttribute(Attribute::Dim))?;
                }
                if cell.style.italic {
                    queue!(self.stdout, SetAttribute(Attribute::Italic))?;
                }
                if cell.style.underline {
                    queue!(self.stdout, SetAttribute(Attribute::Underlined))?;
                }
                last_style = cell.style;
            }

            write!(self.stdout, "{}", cell.char)?;

            last_x = x;
            last_y = y;
            last_char_width = char_width(cell.char).max(1) as u16;
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

fn ct_color(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = queue!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = self.stdout.flush();
        let _ = terminal::disable_raw_mode();
        log::debug!("terminal restored");
    }
}
