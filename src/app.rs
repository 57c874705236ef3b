//! Screen router: owns the store and the three sessions, turns `UiAction`s
//! into session calls and picks the view for the current screen.
//!
//! Navigation:
//!
//! ```text
//! Home ─┬─ About
//!       └─ GameSelect ─┬─ CategorySelect ── Flashcards
//!                      ├─ Match
//!                      └─ Quiz
//! ```
//!
//! `Back` always goes one level up. Sessions are (re)started when their screen
//! is entered, so leaving a game discards its state.

use crate::config::AppConfig;
use crate::core::{
    language_info, DatasetError, FlashcardSession, MatchSession, QuizPhase, QuizSession, Side,
    VocabularyStore,
};
use crate::term::{
    AboutView, FlashcardView, FrameBuffer, MatchCursor, MatchView, Menu, MenuItem, MenuView,
    QuizView, Viewport,
};
use crate::types::{Category, UiAction, ALL_CATEGORIES_ID, QUIZ_OPTION_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    About,
    GameSelect,
    CategorySelect,
    Flashcards,
    Match,
    Quiz,
}

const HOME_ITEMS: [&str; 3] = ["Start learning", "About Oshikwanyama", "Quit"];
const HOME_START: usize = 0;
const HOME_ABOUT: usize = 1;
const HOME_QUIT: usize = 2;

const GAME_ITEMS: [(&str, &str); 3] = [
    ("Flashcards", "flip through cards by category"),
    ("Word Match", "pair English with Oshikwanyama"),
    ("Quiz", "ten questions, three lives"),
];
const GAME_FLASHCARDS: usize = 0;
const GAME_MATCH: usize = 1;
const GAME_QUIZ: usize = 2;

const MENU_HINTS: &str = "↑/↓ move   Enter select   Esc back   q quit";

pub struct App {
    store: VocabularyStore,
    screen: Screen,
    home_cursor: usize,
    game_cursor: usize,
    category_cursor: usize,
    flashcards: FlashcardSession,
    word_match: MatchSession,
    quiz: QuizSession,
    match_cursor: MatchCursor,
    quiz_cursor: usize,
    quit: bool,
}

impl App {
    pub fn new(store: VocabularyStore, seed: u32) -> Self {
        Self {
            store,
            screen: Screen::Home,
            home_cursor: 0,
            game_cursor: 0,
            category_cursor: 0,
            flashcards: FlashcardSession::new(seed),
            word_match: MatchSession::new(seed.wrapping_add(1)),
            quiz: QuizSession::new(seed.wrapping_add(2)),
            match_cursor: MatchCursor::default(),
            quiz_cursor: 0,
            quit: false,
        }
    }

    /// Load the configured dataset (or the builtin table) and build the app.
    pub fn from_config(config: &AppConfig) -> Result<Self, DatasetError> {
        let store = match &config.vocab_path {
            Some(path) => VocabularyStore::from_json_file(path)?,
            None => VocabularyStore::builtin(),
        };
        tracing::info!(entries = store.len(), seed = config.seed, "vocabulary ready");
        Ok(Self::new(store, config.seed))
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn store(&self) -> &VocabularyStore {
        &self.store
    }

    pub fn flashcards(&self) -> &FlashcardSession {
        &self.flashcards
    }

    pub fn word_match(&self) -> &MatchSession {
        &self.word_match
    }

    pub fn quiz(&self) -> &QuizSession {
        &self.quiz
    }

    pub fn match_cursor(&self) -> MatchCursor {
        self.match_cursor
    }

    pub fn quiz_cursor(&self) -> usize {
        self.quiz_cursor
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Category ids in the order the category menu lists them.
    pub fn category_ids() -> impl Iterator<Item = &'static str> {
        std::iter::once(ALL_CATEGORIES_ID).chain(Category::ALL.into_iter().map(|c| c.as_str()))
    }

    /// Apply one action to the current screen. Returns whether anything changed.
    pub fn handle(&mut self, action: UiAction) -> bool {
        match self.screen {
            Screen::Home => self.handle_home(action),
            Screen::About => self.handle_about(action),
            Screen::GameSelect => self.handle_game_select(action),
            Screen::CategorySelect => self.handle_category_select(action),
            Screen::Flashcards => self.handle_flashcards(action),
            Screen::Match => self.handle_match(action),
            Screen::Quiz => self.handle_quiz(action),
        }
    }

    /// Advance the pending timers of the running games.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let matched = self.word_match.tick(elapsed_ms);
        let quiz = self.quiz.tick(elapsed_ms);
        matched || quiz
    }

    pub fn render_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        match self.screen {
            Screen::Home => {
                let items: Vec<MenuItem> = HOME_ITEMS.iter().map(|&s| MenuItem::new(s)).collect();
                let menu = Menu {
                    title: "Learn Oshikwanyama",
                    subtitle: Some("Vocabulary games for Oshiwambo learners"),
                    items: &items,
                    cursor: self.home_cursor,
                    hints: MENU_HINTS,
                };
                MenuView::default().render_into(&menu, viewport, fb);
            }
            Screen::About => {
                if let Some(info) = language_info("oshikwanyama") {
                    AboutView::default().render_into(info, viewport, fb);
                }
            }
            Screen::GameSelect => {
                let items: Vec<MenuItem> = GAME_ITEMS
                    .iter()
                    .map(|&(name, detail)| MenuItem::new(name).with_detail(detail))
                    .collect();
                let menu = Menu {
                    title: "Choose a game",
                    subtitle: None,
                    items: &items,
                    cursor: self.game_cursor,
                    hints: MENU_HINTS,
                };
                MenuView::default().render_into(&menu, viewport, fb);
            }
            Screen::CategorySelect => {
                let items = self.category_items();
                let menu = Menu {
                    title: "Flashcard Learning",
                    subtitle: Some("Choose a category to start learning"),
                    items: &items,
                    cursor: self.category_cursor,
                    hints: MENU_HINTS,
                };
                MenuView::default().render_into(&menu, viewport, fb);
            }
            Screen::Flashcards => FlashcardView::default().render_into(&self.flashcards, viewport, fb),
            Screen::Match => {
                MatchView::default().render_into(&self.word_match, self.match_cursor, viewport, fb)
            }
            Screen::Quiz => QuizView::default().render_into(&self.quiz, self.quiz_cursor, viewport, fb),
        }
    }

    pub fn render(&self, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(viewport, &mut fb);
        fb
    }

    fn category_items(&self) -> Vec<MenuItem> {
        let all = MenuItem::new("All Words").with_detail(format!("{} words", self.store.len()));
        std::iter::once(all)
            .chain(self.store.categories().into_iter().map(|c| {
                MenuItem::new(c.display_name).with_detail(format!("{} words", c.count))
            }))
            .collect()
    }

    fn go(&mut self, screen: Screen) -> bool {
        tracing::debug!(from = ?self.screen, to = ?screen, "screen change");
        self.screen = screen;
        true
    }

    fn handle_home(&mut self, action: UiAction) -> bool {
        match action {
            UiAction::Up | UiAction::Down => move_cursor(&mut self.home_cursor, HOME_ITEMS.len(), action),
            UiAction::Select => match self.home_cursor {
                HOME_START => self.go(Screen::GameSelect),
                HOME_ABOUT => self.go(Screen::About),
                HOME_QUIT => {
                    self.quit = true;
                    true
                }
                _ => false,
            },
            _ => false,
        }
    }

    fn handle_about(&mut self, action: UiAction) -> bool {
        match action {
            UiAction::Back | UiAction::Select => self.go(Screen::Home),
            _ => false,
        }
    }

    fn handle_game_select(&mut self, action: UiAction) -> bool {
        match action {
            UiAction::Up | UiAction::Down => move_cursor(&mut self.game_cursor, GAME_ITEMS.len(), action),
            UiAction::Select => match self.game_cursor {
                GAME_FLASHCARDS => {
                    self.flashcards.exit();
                    self.go(Screen::CategorySelect)
                }
                GAME_MATCH => {
                    self.start_match();
                    self.go(Screen::Match)
                }
                GAME_QUIZ => {
                    self.start_quiz();
                    self.go(Screen::Quiz)
                }
                _ => false,
            },
            UiAction::Back => self.go(Screen::Home),
            _ => false,
        }
    }

    fn handle_category_select(&mut self, action: UiAction) -> bool {
        let count = Self::category_ids().count();
        match action {
            UiAction::Up | UiAction::Down => move_cursor(&mut self.category_cursor, count, action),
            UiAction::Select => {
                let Some(id) = Self::category_ids().nth(self.category_cursor) else {
                    return false;
                };
                self.flashcards.start(&self.store, id);
                self.go(Screen::Flashcards)
            }
            UiAction::Back => self.go(Screen::GameSelect),
            _ => false,
        }
    }

    fn handle_flashcards(&mut self, action: UiAction) -> bool {
        match action {
            UiAction::Left => self.flashcards.prev(),
            UiAction::Right => self.flashcards.next(),
            UiAction::Select | UiAction::Up | UiAction::Down => self.flashcards.flip(),
            UiAction::MarkLearned => self.flashcards.mark_learned(),
            UiAction::Shuffle => self.flashcards.shuffle(),
            UiAction::Restart => {
                let category = self
                    .flashcards
                    .category()
                    .unwrap_or(ALL_CATEGORIES_ID)
                    .to_string();
                self.flashcards.start(&self.store, &category);
                true
            }
            UiAction::Back => {
                self.flashcards.exit();
                self.go(Screen::CategorySelect)
            }
            _ => false,
        }
    }

    fn handle_match(&mut self, action: UiAction) -> bool {
        let rows = self.word_match.pair_count();
        match action {
            UiAction::Up | UiAction::Down => move_cursor(&mut self.match_cursor.slot, rows, action),
            UiAction::Left => set_side(&mut self.match_cursor, Side::Left),
            UiAction::Right => set_side(&mut self.match_cursor, Side::Right),
            UiAction::Select if self.word_match.is_complete() => {
                self.start_match();
                true
            }
            UiAction::Select => self
                .word_match
                .select_slot(self.match_cursor.side, self.match_cursor.slot),
            UiAction::Restart => {
                self.start_match();
                true
            }
            UiAction::Back => self.go(Screen::GameSelect),
            _ => false,
        }
    }

    fn handle_quiz(&mut self, action: UiAction) -> bool {
        let terminal = self.quiz.phase() != QuizPhase::Playing;
        match action {
            UiAction::Up | UiAction::Down => move_cursor(&mut self.quiz_cursor, QUIZ_OPTION_COUNT, action),
            UiAction::Choose(i) => self.quiz.answer_index(i as usize),
            UiAction::Select | UiAction::Restart if terminal => {
                self.start_quiz();
                true
            }
            UiAction::Select if !self.quiz.answered() => self.quiz.answer_index(self.quiz_cursor),
            UiAction::Select | UiAction::Next | UiAction::Right => {
                let moved = self.quiz.next();
                if moved {
                    self.quiz_cursor = 0;
                }
                moved
            }
            UiAction::Restart => {
                self.start_quiz();
                true
            }
            UiAction::Back => self.go(Screen::GameSelect),
            _ => false,
        }
    }

    fn start_match(&mut self) {
        self.word_match.start(&self.store, None);
        self.match_cursor = MatchCursor::default();
    }

    fn start_quiz(&mut self) {
        self.quiz.start(&self.store, None);
        self.quiz_cursor = 0;
    }
}

/// Up/Down within `[0, len)`, clamped at both ends.
fn move_cursor(cursor: &mut usize, len: usize, action: UiAction) -> bool {
    let before = *cursor;
    match action {
        UiAction::Up => *cursor = cursor.saturating_sub(1),
        UiAction::Down if *cursor + 1 < len => *cursor += 1,
        _ => {}
    }
    *cursor != before
}

fn set_side(cursor: &mut MatchCursor, side: Side) -> bool {
    let changed = cursor.side != side;
    cursor.side = side;
    changed
}
