//! MatchView: two columns, English on the left and Oshikwanyama on the right.
//!
//! Pure (no I/O). The cursor lives in the caller; the session only knows
//! which slots are selected and solved.

use crate::core::{MatchOutcome, MatchSession, Side};
use crate::fb::{CellStyle, FrameBuffer};
use crate::layout::{begin_frame, draw_hints, draw_progress, Rect, Viewport};
use crate::theme;
use crate::types::{MATCH_POINTS, SOURCE_LANGUAGE, TARGET_LANGUAGE};

const HINTS: &str = "↑/↓ move   ←/→ column   Enter pick   r restart   Esc back";

/// Cursor position over the two columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchCursor {
    pub side: Side,
    pub slot: usize,
}

impl Default for MatchCursor {
    fn default() -> Self {
        Self {
            side: Side::Left,
            slot: 0,
        }
    }
}

pub struct MatchView {
    width: u16,
}

impl Default for MatchView {
    fn default() -> Self {
        Self { width: 64 }
    }
}

impl MatchView {
    pub fn render_into(
        &self,
        session: &MatchSession,
        cursor: MatchCursor,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        begin_frame(fb, viewport);

        let rows = session.pair_count() as u16;
        let area = Rect::centered(viewport, self.width, rows * 2 + 9);
        let mut y = area.y;

        fb.put_str(area.x, y, "Word Match", theme::TITLE);
        let mut x = area.x + area.w.saturating_sub(30);
        x = fb.put_str(x, y, "Score ", theme::MUTED);
        x = fb.put_u32(x, y, session.score(), theme::TEXT);
        x = fb.put_str(x, y, "   Streak ", theme::MUTED);
        fb.put_u32(x, y, session.streak(), theme::ACCENT);
        y += 1;

        draw_progress(fb, area.x, y, area.w, session.progress_percent());
        y += 2;

        let col_w = (area.w.saturating_sub(2)) / 2;
        let left_x = area.x;
        let right_x = area.x + col_w + 2;
        fb.put_str_centered(left_x, y, col_w, SOURCE_LANGUAGE, theme::MUTED);
        fb.put_str_centered(right_x, y, col_w, TARGET_LANGUAGE, theme::MUTED);
        y += 1;

        let left = session.left_column();
        let right = session.right_column();
        for slot in 0..left.len() {
            let row_y = y + (slot as u16) * 2;
            self.draw_item(fb, session, cursor, Side::Left, slot, left[slot], left_x, row_y, col_w);
            if let Some(text) = right.get(slot) {
                self.draw_item(fb, session, cursor, Side::Right, slot, text, right_x, row_y, col_w);
            }
        }
        y += rows * 2 + 1;

        self.draw_feedback(fb, session, area, y);
        draw_hints(fb, viewport, HINTS);
    }

    pub fn render(&self, session: &MatchSession, cursor: MatchCursor, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, cursor, viewport, &mut fb);
        fb
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_item(
        &self,
        fb: &mut FrameBuffer,
        session: &MatchSession,
        cursor: MatchCursor,
        side: Side,
        slot: usize,
        text: &str,
        x: u16,
        y: u16,
        w: u16,
    ) {
        let solved = session.is_slot_solved(side, slot);
        let selected = session.selected_slot(side) == Some(slot);
        let focused = cursor.side == side && cursor.slot == slot;

        let style: CellStyle = if solved {
            theme::SOLVED
        } else if selected {
            match (session.feedback_pending(), session.last_outcome()) {
                (true, Some(MatchOutcome::Missed)) => theme::ERROR.on(theme::CARD_BG),
                _ => theme::SELECTED,
            }
        } else {
            theme::TEXT.on(theme::CARD_BG)
        };

        fb.fill_rect(x, y, w, 1, ' ', style);
        if focused {
            fb.put_char(x, y, '>', theme::ACCENT.on(style.bg));
        }
        if solved {
            fb.put_char(x + w.saturating_sub(2), y, '✓', theme::SUCCESS.on(style.bg));
        }
        fb.put_str(x + 2, y, text, style);
    }

    fn draw_feedback(&self, fb: &mut FrameBuffer, session: &MatchSession, area: Rect, y: u16) {
        if session.is_complete() {
            let mut x = area.x;
            x = fb.put_str(x, y, "All pairs matched! Score ", theme::SUCCESS);
            x = fb.put_u32(x, y, session.score(), theme::SUCCESS);
            x = fb.put_str(x, y, "   Accuracy ", theme::TEXT);
            x = fb.put_u32(x, y, session.accuracy(), theme::TEXT);
            fb.put_str(x, y, "%", theme::TEXT);
            fb.put_str(area.x, y + 1, "Enter to play again", theme::MUTED);
            return;
        }

        if !session.feedback_pending() {
            return;
        }
        match session.last_outcome() {
            Some(MatchOutcome::Matched { pair }) => {
                let x = fb.put_str(area.x, y, "Correct! +", theme::SUCCESS);
                fb.put_u32(x, y, MATCH_POINTS * session.streak(), theme::SUCCESS);
                if let Some(pair) = session.pairs().get(pair) {
                    let mut x = fb.put_str(area.x, y + 1, &pair.source_text, theme::TEXT);
                    x = fb.put_str(x, y + 1, " = ", theme::MUTED);
                    fb.put_str(x, y + 1, &pair.target_text, theme::ACCENT);
                }
            }
            Some(MatchOutcome::Missed) => {
                fb.put_str(area.x, y, "Not a match, try again", theme::ERROR);
            }
            None => {}
        }
    }
}
