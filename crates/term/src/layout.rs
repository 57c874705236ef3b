//! Viewport and small layout helpers shared by the views.

use crate::fb::{CellStyle, FrameBuffer};
use crate::theme;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A rectangle in framebuffer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    /// A `w`x`h` rect centered in the viewport, shrunk to fit.
    pub fn centered(viewport: Viewport, w: u16, h: u16) -> Self {
        let w = w.min(viewport.width);
        let h = h.min(viewport.height);
        Self {
            x: (viewport.width - w) / 2,
            y: (viewport.height - h) / 2,
            w,
            h,
        }
    }

    /// The area inside a one-cell border plus `pad` columns each side.
    pub fn inner(&self, pad: u16) -> Self {
        let dx = 1 + pad;
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(1),
            w: self.w.saturating_sub(dx * 2),
            h: self.h.saturating_sub(2),
        }
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.h)
    }
}

/// Clear the whole buffer to the background and resize it to the viewport.
pub fn begin_frame(fb: &mut FrameBuffer, viewport: Viewport) {
    fb.resize(viewport.width, viewport.height);
    fb.clear(CellStyle::default().on(theme::BG).cell(' '));
}

/// Greedy word wrap to `width` columns. Words longer than a line are split.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let mut word = word;
        while word.chars().count() > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            let split = word
                .char_indices()
                .nth(width)
                .map(|(i, _)| i)
                .unwrap_or(word.len());
            lines.push(word[..split].to_string());
            word = &word[split..];
        }
        if word.is_empty() {
            continue;
        }

        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// `[#####.....] 50%` style bar filling `w` columns.
pub fn draw_progress(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, percent: u32) {
    // "[" + bar + "]" + " 100%"
    if w < 8 {
        return;
    }
    let bar_w = w - 7;
    let filled = ((bar_w as u32) * percent.min(100) / 100) as u16;

    fb.put_char(x, y, '[', theme::BORDER);
    fb.fill_rect(x + 1, y, filled, 1, '█', theme::ACCENT);
    fb.fill_rect(x + 1 + filled, y, bar_w - filled, 1, '·', theme::MUTED);
    fb.put_char(x + 1 + bar_w, y, ']', theme::BORDER);
    let end = fb.put_u32(x + bar_w + 3, y, percent.min(100), theme::TEXT);
    fb.put_char(end, y, '%', theme::TEXT);
}

/// Key hints along the bottom row.
pub fn draw_hints(fb: &mut FrameBuffer, viewport: Viewport, hints: &str) {
    if viewport.height == 0 {
        return;
    }
    fb.put_str_centered(0, viewport.height - 1, viewport.width, hints, theme::MUTED);
}
