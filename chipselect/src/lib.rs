pub mod animation;
pub mod buffer;
pub mod config;
pub mod element;
pub mod error;
pub mod event;
pub mod hit;
pub mod rect;
pub mod render;
pub mod selection;
pub mod terminal;
pub mod text;
pub mod types;
pub mod widget;

pub use animation::{Easing, MenuAnimation, MenuPhase};
pub use buffer::{Buffer, Cell};
pub use config::{MultiSelectConfig, MultiSelectStyles};
pub use element::{Action, Element, ScrollArea};
pub use error::{Error, Result};
pub use event::{Event, Key, Modifiers};
pub use hit::{hit_action, hit_test, scroll_target};
pub use rect::Rect;
pub use render::render_to_buffer;
pub use selection::SelectionMirror;
pub use terminal::Terminal;
pub use types::*;
pub use widget::MultiSelect;
