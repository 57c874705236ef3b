//! QuizView: one question, four numbered options, lives and score.
//!
//! Pure (no I/O).

use crate::core::{QuizPhase, QuizSession};
use crate::fb::FrameBuffer;
use crate::layout::{begin_frame, draw_hints, draw_progress, wrap_text, Rect, Viewport};
use crate::theme;
use crate::types::{QUIZ_POINTS, QUIZ_STARTING_LIVES};

const HINTS: &str = "↑/↓ move   1-4 or Enter answer   n next   r restart   Esc back";

pub struct QuizView {
    width: u16,
}

impl Default for QuizView {
    fn default() -> Self {
        Self { width: 60 }
    }
}

impl QuizView {
    /// `cursor` is the highlighted option index.
    pub fn render_into(&self, session: &QuizSession, cursor: usize, viewport: Viewport, fb: &mut FrameBuffer) {
        begin_frame(fb, viewport);
        let area = Rect::centered(viewport, self.width, 18);

        match session.phase() {
            QuizPhase::Playing => self.draw_question(fb, session, cursor, area),
            _ if session.is_empty() => {
                fb.put_str(area.x, area.y, "Quiz", theme::TITLE);
                fb.put_str_centered(
                    area.x,
                    area.y + 2,
                    area.w,
                    "Not enough words to build a quiz",
                    theme::MUTED,
                );
                draw_hints(fb, viewport, "Esc back   q quit");
                return;
            }
            QuizPhase::GameOver => {
                self.draw_summary(fb, session, area, "Game over", "Out of lives.".to_string())
            }
            QuizPhase::Complete => {
                let lives = session.lives();
                let line = format!(
                    "You completed the quiz with {lives} {} remaining",
                    if lives == 1 { "life" } else { "lives" }
                );
                self.draw_summary(fb, session, area, "Quiz complete!", line)
            }
        }

        draw_hints(fb, viewport, HINTS);
    }

    pub fn render(&self, session: &QuizSession, cursor: usize, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, cursor, viewport, &mut fb);
        fb
    }

    fn draw_question(&self, fb: &mut FrameBuffer, session: &QuizSession, cursor: usize, area: Rect) {
        let Some(question) = session.current() else {
            return;
        };
        let mut y = area.y;

        // Header: position, lives, score.
        let mut x = fb.put_str(area.x, y, "Question ", theme::TITLE);
        x = fb.put_u32(x, y, session.position() as u32 + 1, theme::TITLE);
        x = fb.put_str(x, y, " of ", theme::TITLE);
        fb.put_u32(x, y, session.len() as u32, theme::TITLE);

        let mut x = area.x + area.w.saturating_sub(22);
        for i in 0..QUIZ_STARTING_LIVES {
            let (ch, style) = if i < session.lives() {
                ('♥', theme::ERROR)
            } else {
                ('♡', theme::MUTED)
            };
            fb.put_char(x, y, ch, style);
            x += 2;
        }
        x = fb.put_str(x + 1, y, "Score ", theme::MUTED);
        fb.put_u32(x, y, session.score(), theme::TEXT);
        y += 1;

        draw_progress(fb, area.x, y, area.w, session.progress_percent());
        y += 2;

        // Prompt card.
        let card_h = 6;
        fb.draw_box(area.x, y, area.w, card_h, theme::BORDER);
        let label = format!("Translate to {}", question.direction.answer_language());
        fb.put_str_centered(area.x, y + 1, area.w, &label, theme::MUTED);
        for (i, row) in wrap_text(question.prompt(), area.w.saturating_sub(6)).iter().take(2).enumerate() {
            fb.put_str_centered(area.x, y + 3 + i as u16, area.w, row, theme::TEXT.bold());
        }
        y += card_h + 1;

        // Options.
        let answered = session.chosen_index();
        for (i, option) in question.options.iter().enumerate() {
            let style = match answered {
                Some(_) if i == question.correct_index => theme::SUCCESS.on(theme::CARD_BG),
                Some(chosen) if chosen == i => theme::ERROR.on(theme::CARD_BG),
                Some(_) => theme::MUTED.on(theme::CARD_BG),
                None if i == cursor => theme::SELECTED,
                None => theme::TEXT.on(theme::CARD_BG),
            };
            fb.fill_rect(area.x, y, area.w, 1, ' ', style);
            fb.put_u32(area.x + 1, y, i as u32 + 1, style);
            fb.put_str(area.x + 2, y, ".", style);
            fb.put_str(area.x + 4, y, option, style);
            y += 1;
        }
        y += 1;

        // Feedback.
        match session.was_correct() {
            Some(true) => {
                let x = fb.put_str(area.x, y, "Correct! +", theme::SUCCESS);
                fb.put_u32(x, y, QUIZ_POINTS, theme::SUCCESS);
            }
            Some(false) => {
                let x = fb.put_str(area.x, y, "The answer was ", theme::ERROR);
                fb.put_str(x, y, question.correct_option(), theme::ERROR);
            }
            None => {}
        }
        if session.answered() && !session.game_over_pending() {
            let next = if session.position() + 1 < session.len() {
                "n for the next question"
            } else {
                "n to see your result"
            };
            fb.put_str(area.x, y + 1, next, theme::MUTED);
        }
    }

    fn draw_summary(&self, fb: &mut FrameBuffer, session: &QuizSession, area: Rect, title: &str, line: String) {
        let h = 9;
        let y = area.y + area.h.saturating_sub(h) / 2;
        fb.draw_box(area.x, y, area.w, h, theme::BORDER);

        let title_style = if session.phase() == QuizPhase::GameOver {
            theme::ERROR
        } else {
            theme::SUCCESS
        };
        fb.put_str_centered(area.x, y + 1, area.w, title, title_style);
        fb.put_str_centered(area.x, y + 3, area.w, &line, theme::TEXT);

        let correct = format!("Correct {} / {}", session.score() / QUIZ_POINTS, session.len());
        fb.put_str_centered(area.x, y + 4, area.w, &correct, theme::TEXT);
        let score = format!("Score {} / {}", session.score(), session.len() as u32 * QUIZ_POINTS);
        fb.put_str_centered(area.x, y + 5, area.w, &score, theme::ACCENT);
        fb.put_str_centered(area.x, y + 7, area.w, "Enter to play again", theme::MUTED);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::VocabularyStore;
    use crate::types::{Category, Difficulty, VocabularyEntry, GAME_OVER_DELAY_MS};

    fn session() -> QuizSession {
        let mut s = QuizSession::new(5);
        s.start(&VocabularyStore::builtin(), None);
        s
    }

    #[test]
    fn question_screen_lists_options() {
        let s = session();
        let fb = QuizView::default().render(&s, 0, Viewport::new(80, 30));
        let q = s.current().unwrap();
        assert!(fb.contains_text("Question 1 of 10"));
        assert!(fb.contains_text(q.prompt()));
        for option in &q.options {
            assert!(fb.contains_text(option));
        }
        assert!(fb.contains_text("Score 0"));
    }

    #[test]
    fn wrong_answer_reveals_correct_option() {
        let mut s = session();
        let wrong = (s.current().unwrap().correct_index + 1) % 4;
        s.answer_index(wrong);
        let fb = QuizView::default().render(&s, 0, Viewport::new(80, 30));
        let expected = format!("The answer was {}", s.current().unwrap().correct_option());
        assert!(fb.contains_text(&expected));
    }

    #[test]
    fn game_over_summary() {
        let mut s = session();
        for _ in 0..3 {
            let wrong = (s.current().unwrap().correct_index + 1) % 4;
            s.answer_index(wrong);
            s.next();
        }
        s.tick(GAME_OVER_DELAY_MS);
        let fb = QuizView::default().render(&s, 0, Viewport::new(80, 30));
        assert!(fb.contains_text("Game over"));
        assert!(fb.contains_text("Correct 0 / 10"));
        assert!(fb.contains_text("Score 0 / 100"));
    }

    #[test]
    fn complete_summary_shows_lives_left() {
        let mut s = session();
        let wrong = (s.current().unwrap().correct_index + 1) % 4;
        s.answer_index(wrong);
        s.next();
        while s.phase() == QuizPhase::Playing {
            let correct = s.current().unwrap().correct_index;
            s.answer_index(correct);
            s.next();
        }
        assert_eq!(s.phase(), QuizPhase::Complete);

        let fb = QuizView::default().render(&s, 0, Viewport::new(80, 30));
        assert!(fb.contains_text("Quiz complete!"));
        assert!(fb.contains_text("with 2 lives remaining"));
        assert!(fb.contains_text("Correct 9 / 10"));
        assert!(fb.contains_text("Score 90 / 100"));
    }

    #[test]
    fn single_life_is_singular() {
        let mut s = session();
        for _ in 0..2 {
            let wrong = (s.current().unwrap().correct_index + 1) % 4;
            s.answer_index(wrong);
            s.next();
        }
        while s.phase() == QuizPhase::Playing {
            let correct = s.current().unwrap().correct_index;
            s.answer_index(correct);
            s.next();
        }
        let fb = QuizView::default().render(&s, 0, Viewport::new(80, 30));
        assert!(fb.contains_text("with 1 life remaining"));
    }

    #[test]
    fn unbuildable_quiz_shows_empty_state() {
        let entries = vec![
            VocabularyEntry::new("a", "one", "imwe", Category::Numbers, Difficulty::Easy),
            VocabularyEntry::new("b", "two", "mbali", Category::Numbers, Difficulty::Easy),
        ];
        let store = VocabularyStore::from_entries(entries).unwrap();
        let mut s = QuizSession::new(1);
        s.start(&store, None);
        assert_eq!(s.phase(), QuizPhase::Complete);

        let fb = QuizView::default().render(&s, 0, Viewport::new(80, 30));
        assert!(fb.contains_text("Not enough words"));
        assert!(!fb.contains_text("Quiz complete!"));
        assert!(!fb.contains_text("Score 0 / 0"));
    }
}
