//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::UiAction`]. Screens decide
//! what an action means; this crate only knows keys.

pub mod map;

pub use oshi_vocab_types as types;

pub use map::{handle_key_event, should_quit};
