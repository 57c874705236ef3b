//! Quiz session - ten multiple-choice questions, three lives.
//!
//! Each question shows one side of an entry and offers four answers in the
//! other language: the correct one plus three distractors drawn from the rest
//! of the table. A wrong answer costs a life; losing the last life arms a
//! short delay and then ends the game, regardless of questions left.
//!
//! Phases: `Playing` → `GameOver` | `Complete`. The two terminal phases are
//! mutually exclusive and both are left via `start()` (restart).

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::store::VocabularyStore;
use crate::timer::PendingTransition;
use crate::types::{
    Direction, VocabularyEntry, GAME_OVER_DELAY_MS, QUIZ_OPTION_COUNT, QUIZ_POINTS,
    QUIZ_QUESTION_COUNT, QUIZ_STARTING_LIVES,
};

/// One multiple-choice question.
///
/// `options` holds exactly `QUIZ_OPTION_COUNT` distinct strings and the
/// correct answer sits at `correct_index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub entry: VocabularyEntry,
    pub direction: Direction,
    pub options: [String; QUIZ_OPTION_COUNT],
    pub correct_index: usize,
}

impl Question {
    pub fn prompt(&self) -> &str {
        self.direction.prompt(&self.entry)
    }

    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Playing,
    /// Lives ran out.
    GameOver,
    /// Every question answered with at least one life left.
    Complete,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    rng: SimpleRng,
    question_count: usize,
    questions: Vec<Question>,
    position: usize,
    chosen: Option<usize>,
    score: u32,
    lives: u8,
    phase: QuizPhase,
    game_over: PendingTransition,
}

impl QuizSession {
    pub fn new(seed: u32) -> Self {
        Self::with_question_count(seed, QUIZ_QUESTION_COUNT)
    }

    pub fn with_question_count(seed: u32, question_count: usize) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            question_count,
            questions: Vec::new(),
            position: 0,
            chosen: None,
            score: 0,
            lives: QUIZ_STARTING_LIVES,
            phase: QuizPhase::Playing,
            game_over: PendingTransition::idle(),
        }
    }

    /// Generate a fresh quiz. Prompts come from `category_id` (or the whole
    /// table); distractors always come from the whole table.
    ///
    /// Entries that cannot be given three distinct distractors are skipped,
    /// so a tiny dataset yields a shorter quiz.
    pub fn start(&mut self, store: &VocabularyStore, category_id: Option<&str>) {
        let prompts = store.sample(self.question_count, category_id, &mut self.rng);

        self.questions = prompts
            .into_iter()
            .filter_map(|entry| build_question(entry, store, &mut self.rng))
            .collect();
        self.position = 0;
        self.chosen = None;
        self.score = 0;
        self.lives = QUIZ_STARTING_LIVES;
        self.game_over.cancel();

        if self.questions.is_empty() {
            tracing::warn!("vocabulary too small to build a quiz");
            self.phase = QuizPhase::Complete;
        } else {
            self.phase = QuizPhase::Playing;
        }
        tracing::debug!(questions = self.questions.len(), "quiz generated");
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.position)
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn answered(&self) -> bool {
        self.chosen.is_some()
    }

    pub fn chosen_index(&self) -> Option<usize> {
        self.chosen
    }

    pub fn chosen_answer(&self) -> Option<&str> {
        let q = self.current()?;
        self.chosen.map(|i| q.options[i].as_str())
    }

    /// `Some(true)` once the current question was answered correctly.
    pub fn was_correct(&self) -> Option<bool> {
        let q = self.current()?;
        self.chosen.map(|i| i == q.correct_index)
    }

    pub fn game_over_pending(&self) -> bool {
        self.game_over.is_pending()
    }

    /// Questions already left behind, as a percentage.
    pub fn progress_percent(&self) -> u32 {
        if self.questions.is_empty() {
            return 0;
        }
        ((self.position * 100) / self.questions.len()) as u32
    }

    /// Answer the current question with the option text `choice`.
    ///
    /// Text that is not one of the options is ignored.
    pub fn answer(&mut self, choice: &str) -> bool {
        let Some(index) = self
            .current()
            .and_then(|q| q.options.iter().position(|o| o == choice))
        else {
            return false;
        };
        self.answer_index(index)
    }

    /// Answer the current question with option `index`.
    ///
    /// Only the first answer per question counts.
    pub fn answer_index(&mut self, index: usize) -> bool {
        if self.phase != QuizPhase::Playing || self.chosen.is_some() {
            return false;
        }
        let Some(question) = self.questions.get(self.position) else {
            return false;
        };
        if index >= question.options.len() {
            return false;
        }

        let correct = index == question.correct_index;
        self.chosen = Some(index);

        if correct {
            self.score += QUIZ_POINTS;
        } else {
            self.lives = self.lives.saturating_sub(1);
            if self.lives == 0 {
                self.game_over.schedule(GAME_OVER_DELAY_MS);
            }
        }
        tracing::debug!(
            position = self.position,
            correct,
            lives = self.lives,
            score = self.score,
            "quiz answer"
        );
        true
    }

    /// Move to the next question, or finish after the last one.
    ///
    /// No-op before the current question is answered and while game over is
    /// pending.
    pub fn next(&mut self) -> bool {
        if self.phase != QuizPhase::Playing || self.chosen.is_none() || self.lives == 0 {
            return false;
        }

        if self.position + 1 < self.questions.len() {
            self.position += 1;
            self.chosen = None;
        } else {
            self.phase = QuizPhase::Complete;
            tracing::info!(score = self.score, lives = self.lives, "quiz complete");
        }
        true
    }

    /// Advance the pending game-over delay.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.game_over.advance(elapsed_ms) && self.phase == QuizPhase::Playing {
            self.phase = QuizPhase::GameOver;
            tracing::info!(score = self.score, position = self.position, "quiz game over");
            return true;
        }
        false
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new(1)
    }
}

fn build_question(
    entry: VocabularyEntry,
    store: &VocabularyStore,
    rng: &mut SimpleRng,
) -> Option<Question> {
    let direction = if rng.next_bool() {
        Direction::SourceToTarget
    } else {
        Direction::TargetToSource
    };
    let correct = direction.answer(&entry).to_string();

    let mut others: Vec<&VocabularyEntry> = store
        .all_entries()
        .iter()
        .filter(|e| e.id != entry.id)
        .collect();
    rng.shuffle(&mut others);

    let mut options: ArrayVec<String, QUIZ_OPTION_COUNT> = ArrayVec::new();
    for other in others {
        if options.len() == QUIZ_OPTION_COUNT - 1 {
            break;
        }
        let text = direction.answer(other);
        if text != correct && !options.iter().any(|o| o == text) {
            options.push(text.to_string());
        }
    }
    if options.len() < QUIZ_OPTION_COUNT - 1 {
        return None;
    }

    options.push(correct);
    rng.shuffle(&mut options);
    let correct_index = options
        .iter()
        .position(|o| o == direction.answer(&entry))?;

    Some(Question {
        entry,
        direction,
        options: options.into_inner().ok()?,
        correct_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Difficulty};
    use std::collections::HashSet;

    fn started(seed: u32) -> QuizSession {
        let mut quiz = QuizSession::new(seed);
        quiz.start(&VocabularyStore::builtin(), None);
        quiz
    }

    fn wrong_index(quiz: &QuizSession) -> usize {
        (quiz.current().unwrap().correct_index + 1) % QUIZ_OPTION_COUNT
    }

    fn answer_correct(quiz: &mut QuizSession) {
        let i = quiz.current().unwrap().correct_index;
        assert!(quiz.answer_index(i));
    }

    fn answer_wrong(quiz: &mut QuizSession) {
        let i = wrong_index(quiz);
        assert!(quiz.answer_index(i));
    }

    #[test]
    fn test_start_builds_ten_questions() {
        let quiz = started(1);
        assert_eq!(quiz.len(), 10);
        assert_eq!(quiz.phase(), QuizPhase::Playing);
        assert_eq!(quiz.lives(), 3);
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.position(), 0);
        assert!(!quiz.answered());
    }

    #[test]
    fn test_every_question_has_four_unique_options() {
        for seed in 1..30 {
            let quiz = started(seed);
            for q in quiz.questions() {
                let unique: HashSet<&str> = q.options.iter().map(|s| s.as_str()).collect();
                assert_eq!(unique.len(), QUIZ_OPTION_COUNT);
                assert_eq!(
                    q.options.iter().filter(|o| *o == q.correct_option()).count(),
                    1
                );
                assert_eq!(q.correct_option(), q.direction.answer(&q.entry));
            }
        }
    }

    #[test]
    fn test_distractors_follow_direction() {
        let store = VocabularyStore::builtin();
        let quiz = started(17);
        for q in quiz.questions() {
            for (i, option) in q.options.iter().enumerate() {
                if i == q.correct_index {
                    continue;
                }
                let owner = store
                    .all_entries()
                    .iter()
                    .find(|e| q.direction.answer(e) == option)
                    .expect("distractor must come from the table");
                assert_ne!(owner.id, q.entry.id);
            }
        }
    }

    #[test]
    fn test_both_directions_occur() {
        let quiz = started(2);
        let mut seen = HashSet::new();
        for seed in 1..10 {
            for q in started(seed).questions() {
                seen.insert(q.direction);
            }
        }
        seen.extend(quiz.questions().iter().map(|q| q.direction));
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_correct_answer_scores() {
        let mut quiz = started(3);
        answer_correct(&mut quiz);
        assert_eq!(quiz.score(), 10);
        assert_eq!(quiz.lives(), 3);
        assert_eq!(quiz.was_correct(), Some(true));
    }

    #[test]
    fn test_answer_by_text() {
        let mut quiz = started(3);
        let correct = quiz.current().unwrap().correct_option().to_string();
        assert!(!quiz.answer("definitely not an option"));
        assert!(quiz.answer(&correct));
        assert_eq!(quiz.chosen_answer(), Some(correct.as_str()));
        assert_eq!(quiz.score(), 10);
    }

    #[test]
    fn test_second_answer_ignored() {
        let mut quiz = started(4);
        answer_wrong(&mut quiz);
        let i = quiz.current().unwrap().correct_index;
        assert!(!quiz.answer_index(i));
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.lives(), 2);
    }

    #[test]
    fn test_next_requires_answer() {
        let mut quiz = started(5);
        assert!(!quiz.next());
        assert_eq!(quiz.position(), 0);
        answer_correct(&mut quiz);
        assert!(quiz.next());
        assert_eq!(quiz.position(), 1);
        assert!(!quiz.answered());
    }

    #[test]
    fn test_lives_scenario_then_game_over() {
        let mut quiz = started(6);

        answer_correct(&mut quiz);
        quiz.next();
        answer_wrong(&mut quiz);
        quiz.next();
        answer_wrong(&mut quiz);
        assert_eq!(quiz.lives(), 1);
        assert_eq!(quiz.phase(), QuizPhase::Playing);
        assert!(quiz.next());

        answer_wrong(&mut quiz);
        assert_eq!(quiz.lives(), 0);
        assert!(quiz.game_over_pending());
        // Feedback stays up for the delay; nothing advances meanwhile.
        assert_eq!(quiz.phase(), QuizPhase::Playing);
        assert!(!quiz.next());

        assert!(!quiz.tick(GAME_OVER_DELAY_MS - 16));
        assert!(quiz.tick(16));
        assert_eq!(quiz.phase(), QuizPhase::GameOver);
        assert_eq!(quiz.score(), 10);
    }

    #[test]
    fn test_lives_never_increase_or_underflow() {
        let mut quiz = started(7);
        let mut last = quiz.lives();
        for _ in 0..quiz.len() {
            if quiz.phase() != QuizPhase::Playing || quiz.lives() == 0 {
                break;
            }
            answer_wrong(&mut quiz);
            assert!(quiz.lives() <= last);
            last = quiz.lives();
            quiz.next();
        }
        quiz.tick(GAME_OVER_DELAY_MS);
        assert_eq!(quiz.lives(), 0);
        assert_eq!(quiz.phase(), QuizPhase::GameOver);
        assert!(!quiz.answer_index(0));
    }

    #[test]
    fn test_complete_after_last_question() {
        let mut quiz = started(8);
        for _ in 0..quiz.len() {
            answer_correct(&mut quiz);
            assert!(quiz.next());
        }
        assert_eq!(quiz.phase(), QuizPhase::Complete);
        assert_eq!(quiz.score(), 100);
        assert_eq!(quiz.lives(), 3);
        assert!(!quiz.next());
    }

    #[test]
    fn test_restart_cancels_pending_game_over() {
        let store = VocabularyStore::builtin();
        let mut quiz = QuizSession::new(9);
        quiz.start(&store, None);
        for _ in 0..3 {
            answer_wrong(&mut quiz);
            quiz.next();
        }
        assert!(quiz.game_over_pending());

        quiz.start(&store, None);
        assert!(!quiz.game_over_pending());
        assert!(!quiz.tick(GAME_OVER_DELAY_MS));
        assert_eq!(quiz.phase(), QuizPhase::Playing);
        assert_eq!(quiz.lives(), 3);
    }

    #[test]
    fn test_progress_percent() {
        let mut quiz = started(10);
        assert_eq!(quiz.progress_percent(), 0);
        answer_correct(&mut quiz);
        quiz.next();
        assert_eq!(quiz.progress_percent(), 10);
    }

    #[test]
    fn test_category_limits_prompts_not_distractors() {
        let mut quiz = QuizSession::new(11);
        quiz.start(&VocabularyStore::builtin(), Some("days"));
        assert_eq!(quiz.len(), 7);
        assert!(quiz
            .questions()
            .iter()
            .all(|q| q.entry.category == Category::Days));
    }

    #[test]
    fn test_tiny_store_skips_unbuildable_questions() {
        let entries = vec![
            VocabularyEntry::new("a", "one", "imwe", Category::Numbers, Difficulty::Easy),
            VocabularyEntry::new("b", "two", "mbali", Category::Numbers, Difficulty::Easy),
            VocabularyEntry::new("c", "three", "nhatu", Category::Numbers, Difficulty::Easy),
        ];
        let store = VocabularyStore::from_entries(entries).unwrap();
        let mut quiz = QuizSession::new(1);
        quiz.start(&store, None);
        assert!(quiz.is_empty());
        assert_eq!(quiz.phase(), QuizPhase::Complete);
        assert!(!quiz.answer_index(0));
    }
}
