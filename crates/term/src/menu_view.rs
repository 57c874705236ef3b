//! Menu-style screens: home, game selection, category selection, about.
//!
//! Pure (no I/O). The caller owns the menu contents and the cursor.

use crate::core::LanguageInfo;
use crate::fb::FrameBuffer;
use crate::layout::{begin_frame, draw_hints, wrap_text, Rect, Viewport};
use crate::theme;

/// One selectable line with an optional dimmed detail after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    pub detail: Option<String>,
}

impl MenuItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu<'a> {
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    pub items: &'a [MenuItem],
    pub cursor: usize,
    pub hints: &'a str,
}

pub struct MenuView {
    width: u16,
}

impl Default for MenuView {
    fn default() -> Self {
        Self { width: 48 }
    }
}

impl MenuView {
    pub fn render_into(&self, menu: &Menu<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        begin_frame(fb, viewport);

        let subtitle_rows = if menu.subtitle.is_some() { 2 } else { 0 };
        let h = 6 + subtitle_rows + menu.items.len() as u16;
        let frame = Rect::centered(viewport, self.width, h);
        fb.draw_box(frame.x, frame.y, frame.w, frame.h, theme::BORDER);
        let inner = frame.inner(1);

        let mut y = inner.y + 1;
        fb.put_str_centered(inner.x, y, inner.w, menu.title, theme::TITLE);
        y += 1;
        if let Some(sub) = menu.subtitle {
            y += 1;
            fb.put_str_centered(inner.x, y, inner.w, sub, theme::MUTED);
            y += 1;
        }
        y += 1;

        for (i, item) in menu.items.iter().enumerate() {
            if y >= frame.bottom().saturating_sub(1) {
                break;
            }
            let selected = i == menu.cursor;
            let style = if selected { theme::SELECTED } else { theme::TEXT };
            if selected {
                fb.fill_rect(inner.x, y, inner.w, 1, ' ', style);
                fb.put_char(inner.x, y, '>', style);
            }
            let end = fb.put_str(inner.x + 2, y, &item.label, style);
            if let Some(detail) = &item.detail {
                let detail_style = if selected { style } else { theme::MUTED };
                fb.put_str(end + 1, y, detail, detail_style);
            }
            y += 1;
        }

        draw_hints(fb, viewport, menu.hints);
    }

    pub fn render(&self, menu: &Menu<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(menu, viewport, &mut fb);
        fb
    }
}

/// The "about the language" page.
pub struct AboutView {
    width: u16,
}

impl Default for AboutView {
    fn default() -> Self {
        Self { width: 72 }
    }
}

impl AboutView {
    pub fn render_into(&self, info: &LanguageInfo, viewport: Viewport, fb: &mut FrameBuffer) {
        begin_frame(fb, viewport);

        let frame = Rect::centered(viewport, self.width, viewport.height.saturating_sub(1));
        fb.draw_box(frame.x, frame.y, frame.w, frame.h, theme::BORDER);
        let inner = frame.inner(2);
        let last_row = frame.bottom().saturating_sub(1);

        let mut y = inner.y;
        let mut line = |fb: &mut FrameBuffer, text: &str, style| {
            if y < last_row {
                fb.put_str(inner.x, y, text, style);
            }
            y = y.saturating_add(1);
        };

        line(fb, info.name, theme::TITLE);
        line(fb, &format!("Also known as {}", info.native_name), theme::MUTED);
        line(fb, info.speakers, theme::ACCENT);
        line(fb, "", theme::TEXT);

        for row in wrap_text(info.description, inner.w) {
            line(fb, &row, theme::TEXT);
        }
        line(fb, "", theme::TEXT);

        line(fb, "Regions", theme::TITLE);
        line(fb, &info.regions.join(", "), theme::TEXT);
        line(fb, "", theme::TEXT);

        line(fb, "History", theme::TITLE);
        for row in wrap_text(info.history, inner.w) {
            line(fb, &row, theme::TEXT);
        }
        line(fb, "", theme::TEXT);

        line(fb, "Did you know?", theme::TITLE);
        for fact in info.fun_facts {
            for (i, row) in wrap_text(fact, inner.w.saturating_sub(2)).iter().enumerate() {
                let bullet = if i == 0 { "* " } else { "  " };
                line(fb, &format!("{bullet}{row}"), theme::TEXT);
            }
        }

        draw_hints(fb, viewport, "Esc back   q quit");
    }
}
