/// Input events the widget understands, in screen cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Primary-button press (a tap).
    Tap { x: u16, y: u16 },
    /// Mouse wheel. Positive `delta` scrolls toward later items.
    Scroll { x: u16, y: u16, delta: i16 },
    /// Key press.
    Key { key: Key, modifiers: Modifiers },
    /// Terminal resized.
    Resize { width: u16, height: u16 },
}

/// Keys the widget reacts to. Anything else is dropped at translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Escape,
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

impl Event {
    pub fn key(key: Key) -> Self {
        Event::Key {
            key,
            modifiers: Modifiers::new(),
        }
    }

    /// Translate a crossterm event. Returns `None` for events the widget ignores
    /// (key releases, mouse moves, non-primary buttons, focus changes, paste).
    pub fn from_crossterm(event: &crossterm::event::Event) -> Option<Self> {
        use crossterm::event::{
            Event as CtEvent, KeyEventKind, MouseButton as CtButton, MouseEventKind,
        };

        match event {
            CtEvent::Key(key) if key.kind != KeyEventKind::Release => {
                let code = Key::try_from(key.code).ok()?;
                Some(Event::Key {
                    key: code,
                    modifiers: key.modifiers.into(),
                })
            }
            CtEvent::Mouse(mouse) => {
                let (x, y) = (mouse.column, mouse.row);
                match mouse.kind {
                    MouseEventKind::Down(CtButton::Left) => Some(Event::Tap { x, y }),
                    MouseEventKind::ScrollDown => Some(Event::Scroll { x, y, delta: 1 }),
                    MouseEventKind::ScrollUp => Some(Event::Scroll { x, y, delta: -1 }),
                    MouseEventKind::ScrollRight => Some(Event::Scroll { x, y, delta: 1 }),
                    MouseEventKind::ScrollLeft => Some(Event::Scroll { x, y, delta: -1 }),
                    _ => None,
                }
            }
            CtEvent::Resize(width, height) => Some(Event::Resize {
                width: *width,
                height: *height,
            }),
            _ => None,
        }
    }
}

impl TryFrom<crossterm::event::KeyCode> for Key {
    type Error = ();

    fn try_from(code: crossterm::event::KeyCode) -> Result<Self, Self::Error> {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Ok(Key::Char(c)),
            KeyCode::Enter => Ok(Key::Enter),
            KeyCode::Backspace => Ok(Key::Backspace),
            KeyCode::Esc => Ok(Key::Escape),
            KeyCode::Up => Ok(Key::Up),
            KeyCode::Down => Ok(Key::Down),
            _ => Err(()),
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}
