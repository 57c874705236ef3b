//! Oshikwanyama vocabulary trainer (workspace facade crate).
//!
//! The game logic, input mapping and rendering live in dedicated crates under
//! `crates/`; this package re-exports them as `oshi_vocab::{core,input,term,types}`
//! and adds the pieces the binary needs: the screen router, configuration and
//! logging setup.

pub use oshi_vocab_core as core;
pub use oshi_vocab_input as input;
pub use oshi_vocab_term as term;
pub use oshi_vocab_types as types;

pub mod app;
pub mod config;
pub mod logging;

pub use app::{App, Screen};
pub use config::AppConfig;
