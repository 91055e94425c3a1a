use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::rect::Rect;
use crate::text::{align_offset, char_width, display_width, truncate_to_width};
use crate::types::{Border, Rgb, TextStyle, Theme};

/// Foreground and text attributes passed from parent to child.
#[derive(Debug, Clone, Copy)]
struct Inherited {
    fg: Rgb,
    text_style: TextStyle,
}

/// Draw an element tree into `buf`, resolving theme colors through `theme`.
pub fn render_to_buffer(root: &Element, buf: &mut Buffer, theme: &Theme) {
    let inherited = Inherited {
        fg: theme.resolve(&theme.foreground),
        text_style: TextStyle::new(),
    };
    let screen = Rect::from_size(buf.width(), buf.height());
    render_element(root, buf, theme, screen, inherited);
}

fn render_element(element: &Element, buf: &mut Buffer, theme: &Theme, clip: Rect, inherited: Inherited) {
    let style = &element.style;
    let visible = element.rect.intersection(clip);

    if let Some(bg) = &style.background {
        fill_rect(buf, visible, theme.resolve(bg));
    }

    let fg = style
        .foreground
        .as_ref()
        .map(|c| theme.resolve(c))
        .unwrap_or(inherited.fg);
    let text_style = style.text_style(inherited.text_style);

    if let Some(border) = style.border {
        let border_fg = style
            .border_color
            .as_ref()
            .map(|c| theme.resolve(c))
            .unwrap_or(fg);
        render_border(buf, element.rect, clip, border, border_fg);
    }

    match &element.content {
        Content::None => {}
        Content::Text(text) => {
            render_text(text, element, buf, clip, fg, text_style);
        }
        Content::Children(children) => {
            let child_clip = if element.clip {
                style.content_rect(element.rect).intersection(clip)
            } else {
                clip
            };
            let next = Inherited { fg, text_style };
            for child in children {
                render_element(child, buf, theme, child_clip, next);
            }
        }
    }
}

fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y..rect.bottom().min(buf.height()) {
        for x in rect.x..rect.right().min(buf.width()) {
            if let Some(cell) = buf.get_mut(x, y) {
                *cell = Cell::blank(bg);
            }
        }
    }
}

fn render_text(text: &str, element: &Element, buf: &mut Buffer, clip: Rect, fg: Rgb, text_style: TextStyle) {
    let inner = element.style.content_rect(element.rect);
    if inner.is_empty() {
        return;
    }

    let text = truncate_to_width(text, inner.width as usize);
    let offset = align_offset(display_width(&text), inner.width as usize, element.text_align);

    let mut x = inner.x.saturating_add(offset as u16);
    let y = inner.y;

    for ch in text.chars() {
        let width = char_width(ch) as u16;
        if width == 0 {
            continue;
        }
        if x.saturating_add(width) > inner.right() {
            break;
        }
        // A glyph is drawn whole or not at all.
        if clip.contains(x, y) && clip.contains(x + width - 1, y) {
            let bg = buf.get(x, y).map(|c| c.bg).unwrap_or_default();
            buf.set(x, y, Cell::glyph(ch, fg, bg, text_style));
            for cx in x + 1..x + width {
                if let Some(cell) = buf.get_mut(cx, y) {
                    cell.char = ' ';
                    cell.wide_continuation = true;
                }
            }
        }
        x += width;
    }
}

fn render_border(buf: &mut Buffer, rect: Rect, clip: Rect, border: Border, fg: Rgb) {
    let Some((tl, tr, bl, br, h, v)) = border.glyphs() else {
        return;
    };
    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let (left, top) = (rect.x, rect.y);
    let (right, bottom) = (rect.right() - 1, rect.bottom() - 1);

    for x in left + 1..right {
        set_char(buf, clip, x, top, h, fg);
        set_char(buf, clip, x, bottom, h, fg);
    }
    for y in top + 1..bottom {
        set_char(buf, clip, left, y, v, fg);
        set_char(buf, clip, right, y, v, fg);
    }
    for (x, y, corner) in [(left, top, tl), (right, top, tr), (left, bottom, bl), (right, bottom, br)] {
        set_char(buf, clip, x, y, corner, fg);
    }
}

fn set_char(buf: &mut Buffer, clip: Rect, x: u16, y: u16, ch: char, fg: Rgb) {
    if !clip.contains(x, y) {
        return;
    }
    if let Some(cell) = buf.get_mut(x, y) {
        cell.char = ch;
        cell.fg = fg;
        cell.wide_continuation = false;
    }
}
