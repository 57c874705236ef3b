//! Runtime configuration read from the environment.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Startup settings. Every field has a default, so a bare `oshi-vocab` run
/// needs no environment at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Seed for every session RNG (`OSHI_SEED`).
    pub seed: u32,
    /// JSON dataset to load instead of the builtin table (`OSHI_VOCAB_PATH`).
    pub vocab_path: Option<PathBuf>,
    /// Directory for the rolling log file; logging is off without it (`OSHI_LOG_DIR`).
    pub log_dir: Option<PathBuf>,
    /// `tracing` filter directive (`OSHI_LOG`).
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let seed = non_empty("OSHI_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(time_seed);

        let vocab_path = non_empty("OSHI_VOCAB_PATH").map(PathBuf::from);
        let log_dir = non_empty("OSHI_LOG_DIR").map(PathBuf::from);
        let log_filter = non_empty("OSHI_LOG").unwrap_or_else(|| "info".to_string());

        Self {
            seed,
            vocab_path,
            log_dir,
            log_filter,
        }
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
