//! Terminal rendering for the vocabulary trainer.
//!
//! Screens render into a plain framebuffer which [`TerminalRenderer`] diffs
//! against the previous frame and flushes through crossterm. No widget
//! library sits in between.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep every view pure, so screens are unit-tested without a terminal
//! - Emit only changed cells per frame

pub mod fb;
pub mod flashcard_view;
pub mod layout;
pub mod match_view;
pub mod menu_view;
pub mod quiz_view;
pub mod renderer;
pub mod theme;

pub use oshi_vocab_core as core;
pub use oshi_vocab_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use flashcard_view::FlashcardView;
pub use layout::{Rect, Viewport};
pub use match_view::{MatchCursor, MatchView};
pub use menu_view::{AboutView, Menu, MenuItem, MenuView};
pub use quiz_view::QuizView;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
