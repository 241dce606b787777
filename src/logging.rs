#![cfg(feature = "std")]

//! Diagnostics for the game binaries. Output goes to stderr so the boards
//! printed on stdout stay readable.

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable holding the wanted level (`trace` .. `off`).
pub const LOG_ENV: &str = "SEA_BATTLE_LOG";

struct GameDiagnostics;

impl Log for GameDiagnostics {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!("{:<5} {}: {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {}
}

static DIAGNOSTICS: GameDiagnostics = GameDiagnostics;

/// Level named by `value`, or `warn` when it is missing or unreadable.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Route `log` records to stderr at the level given by [`LOG_ENV`].
/// Calling it again after a logger is installed has no effect.
pub fn init_logging() {
    let wanted = std::env::var(LOG_ENV).ok();
    let level = level_from(wanted.as_deref());
    if log::set_logger(&DIAGNOSTICS).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_defaults_to_warn() {
        assert_eq!(level_from(None), LevelFilter::Warn);
        assert_eq!(level_from(Some("chatty")), LevelFilter::Warn);
    }

    #[test]
    fn level_is_read_case_insensitively() {
        assert_eq!(level_from(Some("DEBUG")), LevelFilter::Debug);
        assert_eq!(level_from(Some(" off ")), LevelFilter::Off);
    }
}
