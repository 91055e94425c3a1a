use std::cell::RefCell;
use std::fs::File;
use std::rc::Rc;
use std::time::{Duration, Instant};

use chipselect::{
    Color, Element, Event, Key, MultiSelect, MultiSelectConfig, Rect, Style, Terminal, TextAlign,
    Theme,
};
use simplelog::{Config, LevelFilter, WriteLogger};

const FRAME: Duration = Duration::from_millis(16);

const DEFAULT_OPTIONS: &[&str] = &[
    "Apple",
    "Banana",
    "Cherry",
    "Dragonfruit",
    "Elderberry",
    "Fig",
    "Grape",
    "Honeydew",
    "Kiwi",
    "Lemon",
    "Mango",
    "Nectarine",
];

/// The authoritative selection, owned by the host rather than the widget.
struct Host {
    selection: Vec<String>,
    pending: Rc<RefCell<Option<Vec<String>>>>,
}

impl Host {
    fn new() -> Self {
        Self {
            selection: Vec::new(),
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Accept whatever the widget proposed since the last frame.
    fn apply_pending(&mut self, select: &mut MultiSelect) {
        let Some(next) = self.pending.borrow_mut().take() else {
            return;
        };
        log::info!("selection updated: {:?}", next);
        self.selection = next;
        select.set_selected_values(&self.selection);
    }

    fn status(&self) -> String {
        if self.selection.is_empty() {
            "Nothing selected".to_string()
        } else {
            format!("Selected: {}", self.selection.join(", "))
        }
    }
}

fn options_from_args() -> Vec<String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        DEFAULT_OPTIONS.iter().map(|s| s.to_string()).collect()
    } else {
        args
    }
}

fn frame(select: &MultiSelect, host: &Host, width: u16, height: u16) -> Element {
    let screen = Rect::from_size(width, height);
    let body = Rect::new(2, 1, width.saturating_sub(4), height.saturating_sub(4));
    let status_y = height.saturating_sub(2);

    Element::new("screen", screen)
        .style(Style::new().background(Color::var("background")))
        .child(
            Element::text("status", Rect::new(2, status_y, body.width, 1), host.status())
                .style(Style::new().foreground(Color::var("muted"))),
        )
        .child(
            Element::text(
                "help",
                Rect::new(2, status_y.saturating_add(1), body.width, 1),
                "click or Enter to open, Up/Down to move, Backspace to remove, q to quit",
            )
            .style(Style::new().foreground(Color::var("muted")).italic()),
        )
        .child(select.view(body))
}

fn quits(event: &Event) -> bool {
    match event {
        Event::Key {
            key: Key::Char('q'),
            modifiers,
        } => modifiers.none(),
        Event::Key {
            key: Key::Char('c'),
            modifiers,
        } => modifiers.ctrl,
        _ => false,
    }
}

fn build_select(host: &Host, options: Vec<String>) -> MultiSelect {
    let sink = Rc::clone(&host.pending);
    let config = MultiSelectConfig::new()
        .label("Fruit")
        .text_align(TextAlign::Left)
        .placeholder("Pick some fruit...");
    MultiSelect::new(options, host.selection.clone(), move |next| {
        *sink.borrow_mut() = Some(next);
    })
    .with_id("fruit")
    .with_config(config)
}

/// Terminal size after `event`.
fn resized(size: (u16, u16), event: &Event) -> (u16, u16) {
    match *event {
        Event::Resize { width, height } => (width, height),
        _ => size,
    }
}

/// Handle one event against a tree that reflects every event before it.
fn dispatch(select: &mut MultiSelect, host: &mut Host, event: &Event, size: (u16, u16)) {
    let view = frame(select, host, size.0, size.1);
    select.handle_event(event, &view);
    host.apply_pending(select);
}

fn run() -> chipselect::Result<()> {
    let theme = Theme::default();
    let mut host = Host::new();
    let mut select = build_select(&host, options_from_args());

    let mut terminal = Terminal::new()?;
    let mut size = terminal.size();
    let mut last_tick = Instant::now();

    loop {
        let view = frame(&select, &host, size.0, size.1);
        terminal.draw(&view, &theme)?;

        let animating = select.is_animating();
        let timeout = animating.then_some(FRAME);
        let events = terminal.poll(timeout)?;

        for event in &events {
            if quits(event) {
                return Ok(());
            }
            size = resized(size, event);
            dispatch(&mut select, &mut host, event, size);
        }

        // Time spent blocked while idle must not count toward a new transition.
        let now = Instant::now();
        let dt = if animating { now - last_tick } else { Duration::ZERO };
        select.tick(dt);
        last_tick = now;
    }
}

fn main() {
    let log_file = File::create("chipselect-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
    }
}
