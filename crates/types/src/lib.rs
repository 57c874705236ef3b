//! Core types module - shared data structures and constants
//!
//! This crate defines the plain data used throughout the application.
//! Everything here is inert data with no behavior beyond parsing and labels,
//! making it usable in any context (session logic, terminal views, dataset
//! loading).
//!
//! # Session Sizes
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FLASHCARD_DECK_SIZE` | 10 | Cards sampled per flashcard session |
//! | `MATCH_PAIR_COUNT` | 6 | Pairs sampled per word-match board |
//! | `QUIZ_QUESTION_COUNT` | 10 | Questions per quiz |
//! | `QUIZ_OPTION_COUNT` | 4 | Options per question (1 correct + 3 distractors) |
//! | `QUIZ_STARTING_LIVES` | 3 | Lives at the start of a quiz |
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `MATCH_FEEDBACK_MS` | 500 | How long a match/miss stays highlighted |
//! | `GAME_OVER_DELAY_MS` | 1000 | Delay between the last wrong answer and game over |
//!
//! # Examples
//!
//! ```
//! use oshi_vocab_types::{Category, Difficulty, Direction};
//!
//! let cat = Category::from_str("animals").unwrap();
//! assert_eq!(cat, Category::Animals);
//! assert_eq!(cat.display_name(), "Animals");
//!
//! assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
//!
//! assert_eq!(Direction::SourceToTarget.flip(), Direction::TargetToSource);
//! ```

use serde::{Deserialize, Serialize};

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Number of cards drawn for a flashcard session.
pub const FLASHCARD_DECK_SIZE: usize = 10;

/// Number of pairs on a word-match board.
pub const MATCH_PAIR_COUNT: usize = 6;

/// Points for a match are `MATCH_POINTS * (streak + 1)`.
pub const MATCH_POINTS: u32 = 10;

/// Feedback window after a match evaluation before selections clear.
pub const MATCH_FEEDBACK_MS: u32 = 500;

/// Number of questions in a quiz.
pub const QUIZ_QUESTION_COUNT: usize = 10;

/// Options per quiz question.
pub const QUIZ_OPTION_COUNT: usize = 4;

/// Lives at the start of a quiz.
pub const QUIZ_STARTING_LIVES: u8 = 3;

/// Points per correct quiz answer.
pub const QUIZ_POINTS: u32 = 10;

/// Delay before game over so the last answer's feedback stays visible.
pub const GAME_OVER_DELAY_MS: u32 = 1000;

/// Category id that selects the whole vocabulary.
pub const ALL_CATEGORIES_ID: &str = "all";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_tuning_defaults() {
        assert_eq!(FLASHCARD_DECK_SIZE, 10);
        assert_eq!(MATCH_PAIR_COUNT, 6);
        assert_eq!(MATCH_POINTS, 10);
        assert_eq!(MATCH_FEEDBACK_MS, 500);
        assert_eq!(QUIZ_QUESTION_COUNT, 10);
        assert_eq!(QUIZ_OPTION_COUNT, 4);
        assert_eq!(QUIZ_STARTING_LIVES, 3);
        assert_eq!(GAME_OVER_DELAY_MS, 1000);
    }

    #[test]
    fn category_ids_round_trip() {
        for cat in Category::ALL {
            assert_eq!(Category::from_str(cat.as_str()), Some(cat));
        }
        assert_eq!(Category::from_str(ALL_CATEGORIES_ID), None);
    }

    #[test]
    fn entry_deserializes_from_dataset_shape() {
        let json = r#"{"id":"a1","source":"Cow","target":"Ngobe","category":"animals","difficulty":"easy"}"#;
        let entry: VocabularyEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, "a1");
        assert_eq!(entry.source_text, "Cow");
        assert_eq!(entry.target_text, "Ngobe");
        assert_eq!(entry.category, Category::Animals);
        assert_eq!(entry.difficulty, Difficulty::Easy);
    }
}

/// How hard a word is considered to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Parse difficulty from string (case-insensitive)
    ///
    /// ```
    /// use oshi_vocab_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_str("easy"), Some(Difficulty::Easy));
    /// assert_eq!(Difficulty::from_str("Medium"), Some(Difficulty::Medium));
    /// assert_eq!(Difficulty::from_str("brutal"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// The twelve vocabulary categories
///
/// Ids are stable and used both by dataset files and by navigation
/// (`FlashcardSession::start` receives one of these ids, or `"all"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Greetings,
    Pronouns,
    Verbs,
    Numbers,
    Family,
    Body,
    Animals,
    Nature,
    Days,
    Food,
    Adverbs,
    Questions,
}

impl Category {
    /// Every category in canonical display order.
    pub const ALL: [Category; 12] = [
        Category::Greetings,
        Category::Pronouns,
        Category::Verbs,
        Category::Numbers,
        Category::Family,
        Category::Body,
        Category::Animals,
        Category::Nature,
        Category::Days,
        Category::Food,
        Category::Adverbs,
        Category::Questions,
    ];

    /// Parse a category id (case-insensitive)
    ///
    /// Returns `None` for unknown ids, including `"all"`.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "greetings" => Some(Category::Greetings),
            "pronouns" => Some(Category::Pronouns),
            "verbs" => Some(Category::Verbs),
            "numbers" => Some(Category::Numbers),
            "family" => Some(Category::Family),
            "body" => Some(Category::Body),
            "animals" => Some(Category::Animals),
            "nature" => Some(Category::Nature),
            "days" => Some(Category::Days),
            "food" => Some(Category::Food),
            "adverbs" => Some(Category::Adverbs),
            "questions" => Some(Category::Questions),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Greetings => "greetings",
            Category::Pronouns => "pronouns",
            Category::Verbs => "verbs",
            Category::Numbers => "numbers",
            Category::Family => "family",
            Category::Body => "body",
            Category::Animals => "animals",
            Category::Nature => "nature",
            Category::Days => "days",
            Category::Food => "food",
            Category::Adverbs => "adverbs",
            Category::Questions => "questions",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Greetings => "Greetings",
            Category::Pronouns => "Pronouns",
            Category::Verbs => "Verbs",
            Category::Numbers => "Numbers",
            Category::Family => "Family",
            Category::Body => "Body Parts",
            Category::Animals => "Animals",
            Category::Nature => "Nature",
            Category::Days => "Days of Week",
            Category::Food => "Food",
            Category::Adverbs => "Adverbs",
            Category::Questions => "Questions",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Greetings => "👋",
            Category::Pronouns => "👤",
            Category::Verbs => "🏃",
            Category::Numbers => "🔢",
            Category::Family => "👪",
            Category::Body => "🫀",
            Category::Animals => "🦁",
            Category::Nature => "🌍",
            Category::Days => "📅",
            Category::Food => "🍎",
            Category::Adverbs => "⏰",
            Category::Questions => "❓",
        }
    }
}

/// Which side of an entry a quiz question shows.
///
/// - **SourceToTarget**: prompt in English, answer in Oshikwanyama
/// - **TargetToSource**: prompt in Oshikwanyama, answer in English
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    SourceToTarget,
    TargetToSource,
}

impl Direction {
    pub fn flip(&self) -> Self {
        match self {
            Direction::SourceToTarget => Direction::TargetToSource,
            Direction::TargetToSource => Direction::SourceToTarget,
        }
    }

    /// Text shown as the question for `entry`.
    pub fn prompt<'a>(&self, entry: &'a VocabularyEntry) -> &'a str {
        match self {
            Direction::SourceToTarget => &entry.source_text,
            Direction::TargetToSource => &entry.target_text,
        }
    }

    /// Text expected as the answer for `entry`.
    pub fn answer<'a>(&self, entry: &'a VocabularyEntry) -> &'a str {
        match self {
            Direction::SourceToTarget => &entry.target_text,
            Direction::TargetToSource => &entry.source_text,
        }
    }

    pub fn prompt_language(&self) -> &'static str {
        match self {
            Direction::SourceToTarget => SOURCE_LANGUAGE,
            Direction::TargetToSource => TARGET_LANGUAGE,
        }
    }

    pub fn answer_language(&self) -> &'static str {
        self.flip().prompt_language()
    }
}

/// Language of `VocabularyEntry::source_text`.
pub const SOURCE_LANGUAGE: &str = "English";

/// Language of `VocabularyEntry::target_text`.
pub const TARGET_LANGUAGE: &str = "Oshikwanyama";

/// One vocabulary item
///
/// The serialized form uses the short keys `source` / `target`, matching the
/// JSON dataset format accepted by `VocabularyStore::from_json_str`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub id: String,
    #[serde(rename = "source")]
    pub source_text: String,
    #[serde(rename = "target")]
    pub target_text: String,
    pub category: Category,
    pub difficulty: Difficulty,
}

impl VocabularyEntry {
    pub fn new(
        id: impl Into<String>,
        source_text: impl Into<String>,
        target_text: impl Into<String>,
        category: Category,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id: id.into(),
            source_text: source_text.into(),
            target_text: target_text.into(),
            category,
            difficulty,
        }
    }
}

/// Derived per-category statistics for menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySummary {
    pub id: &'static str,
    pub display_name: &'static str,
    pub icon: &'static str,
    pub count: usize,
}

/// Abstract UI actions produced by the input layer
///
/// Screens interpret these; the same key means "flip" on a flashcard and
/// "select" in the word-match grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Move the cursor up a row
    Up,
    /// Move the cursor down a row
    Down,
    /// Move left (previous card / left column)
    Left,
    /// Move right (next card / right column)
    Right,
    /// Activate the item under the cursor
    Select,
    /// Mark the current flashcard as learned
    MarkLearned,
    /// Shuffle the flashcard deck
    Shuffle,
    /// Advance to the next quiz question
    Next,
    /// Pick a quiz option directly (0-based)
    Choose(u8),
    /// Start the current game again
    Restart,
    /// Leave the current screen
    Back,
}
