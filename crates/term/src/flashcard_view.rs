//! FlashcardView: maps a `FlashcardSession` into a terminal framebuffer.
//!
//! Pure (no I/O). The front of the card shows the English side, the back the
//! Oshikwanyama side plus the entry's category.

use crate::core::FlashcardSession;
use crate::fb::FrameBuffer;
use crate::layout::{begin_frame, draw_hints, draw_progress, wrap_text, Rect, Viewport};
use crate::theme;
use crate::types::{Category, SOURCE_LANGUAGE, TARGET_LANGUAGE};

const HINTS: &str = "←/→ move   Space flip   g got it   x shuffle   r restart   Esc categories";

pub struct FlashcardView {
    width: u16,
    card_h: u16,
}

impl Default for FlashcardView {
    fn default() -> Self {
        Self {
            width: 56,
            card_h: 9,
        }
    }
}

impl FlashcardView {
    pub fn render_into(&self, session: &FlashcardSession, viewport: Viewport, fb: &mut FrameBuffer) {
        begin_frame(fb, viewport);

        let area = Rect::centered(viewport, self.width, self.card_h + 6);
        let mut y = area.y;

        // Header: category, position and learned count.
        let category = session
            .category()
            .and_then(Category::from_str)
            .map(|c| c.display_name())
            .unwrap_or("All Words");
        fb.put_str(area.x, y, category, theme::TITLE);

        if session.is_empty() {
            fb.put_str_centered(area.x, y + 2, area.w, "No cards in this category", theme::MUTED);
            draw_hints(fb, viewport, "Esc categories   q quit");
            return;
        }

        let mut x = area.x + area.w.saturating_sub(24);
        x = fb.put_u32(x, y, session.position() as u32 + 1, theme::TEXT);
        x = fb.put_str(x, y, " / ", theme::TEXT);
        x = fb.put_u32(x, y, session.len() as u32, theme::TEXT);
        x = fb.put_str(x, y, "   ", theme::TEXT);
        x = fb.put_u32(x, y, session.learned_count() as u32, theme::SUCCESS);
        fb.put_str(x, y, " learned", theme::SUCCESS);
        y += 1;

        draw_progress(fb, area.x, y, area.w, session.progress_percent());
        y += 2;

        // Card.
        let card = Rect {
            x: area.x,
            y,
            w: area.w,
            h: self.card_h,
        };
        let border = if session.revealed() {
            theme::ACCENT
        } else {
            theme::BORDER
        };
        fb.draw_box(card.x, card.y, card.w, card.h, border);
        let inner = card.inner(2);

        if let Some(entry) = session.current() {
            let (language, text, text_style) = if session.revealed() {
                (TARGET_LANGUAGE, entry.target_text.as_str(), theme::ACCENT)
            } else {
                (SOURCE_LANGUAGE, entry.source_text.as_str(), theme::TEXT.bold())
            };

            fb.put_str_centered(inner.x, inner.y + 1, inner.w, &language.to_uppercase(), theme::MUTED);
            let mut ty = inner.y + 3;
            for row in wrap_text(text, inner.w).iter().take(2) {
                fb.put_str_centered(inner.x, ty, inner.w, row, text_style);
                ty += 1;
            }

            let footer_y = card.bottom().saturating_sub(2);
            if session.revealed() {
                fb.put_str_centered(inner.x, footer_y, inner.w, entry.category.display_name(), theme::MUTED);
            } else {
                fb.put_str_centered(inner.x, footer_y, inner.w, "Space to reveal", theme::MUTED);
            }
            if session.is_learned(&entry.id) {
                fb.put_str(inner.x, inner.y, "✓", theme::SUCCESS);
            }
        }
        y = card.bottom() + 1;

        // Edge indicators.
        let prev_style = if session.is_first() { theme::MUTED.dim() } else { theme::TEXT };
        let next_style = if session.is_last() { theme::MUTED.dim() } else { theme::TEXT };
        fb.put_str(area.x, y, "< prev", prev_style);
        fb.put_str(area.x + area.w.saturating_sub(6), y, "next >", next_style);

        draw_hints(fb, viewport, HINTS);
    }

    pub fn render(&self, session: &FlashcardSession, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }
}
