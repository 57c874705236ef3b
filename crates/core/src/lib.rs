//! Core vocabulary logic - pure, deterministic, and testable
//!
//! This crate holds the word table and the three practice sessions. It has
//! **no dependencies** on the terminal or on any I/O beyond reading an
//! optional JSON dataset, which makes it:
//!
//! - **Deterministic**: Same seed deals the same decks and quizzes
//! - **Testable**: Sessions take the store by reference, so tests hand in tiny datasets
//! - **Portable**: Drive it from a terminal, a test, or a bench
//!
//! # Module Structure
//!
//! - [`store`]: the read-only [`VocabularyStore`] (category filter, sampling, counts)
//! - [`dataset`]: builtin Oshikwanyama table and language information
//! - [`flashcard`]: deck browsing with flip, learned marks and shuffle
//! - [`word_match`]: pair matching with streak scoring and a feedback window
//! - [`quiz`]: multiple choice with lives and a delayed game over
//! - [`timer`]: tick-driven one-shot transitions
//! - [`rng`]: seeded LCG with Fisher-Yates shuffle
//!
//! # Example
//!
//! ```
//! use oshi_vocab_core::{QuizSession, VocabularyStore};
//!
//! let store = VocabularyStore::builtin();
//! let mut quiz = QuizSession::new(12345);
//! quiz.start(&store, None);
//!
//! let correct = quiz.current().unwrap().correct_index;
//! quiz.answer_index(correct);
//! assert_eq!(quiz.score(), 10);
//! ```
//!
//! # Timing
//!
//! Delayed transitions (match feedback 500ms, quiz game over 1000ms) never
//! use real timers. Call `tick(elapsed_ms)` on the session every frame.

pub mod dataset;
pub mod error;
pub mod flashcard;
pub mod quiz;
pub mod rng;
pub mod store;
pub mod timer;
pub mod word_match;

pub use oshi_vocab_types as types;

pub use dataset::{builtin_entries, language_info, LanguageInfo, OSHIKWANYAMA};
pub use error::DatasetError;
pub use flashcard::{FlashcardPhase, FlashcardSession};
pub use quiz::{Question, QuizPhase, QuizSession};
pub use rng::SimpleRng;
pub use store::VocabularyStore;
pub use timer::PendingTransition;
pub use word_match::{MatchOutcome, MatchPair, MatchSession, Side};
