#![cfg(feature = "std")]

//! Stderr logging for the simulator, filtered to this crate's own records.

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable holding the log level filter.
pub const LOG_ENV: &str = "BATTLESHIP_SIM_LOG";

const CRATE_TARGET: &str = "battleship_sim";

/// Level named by a `BATTLESHIP_SIM_LOG` value, `info` when unset or unknown.
pub fn level_from_env_value(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

struct SimLogger;

impl Log for SimLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level() && metadata.target().starts_with(CRATE_TARGET)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let module = record
            .module_path()
            .and_then(|m| m.strip_prefix(CRATE_TARGET))
            .map(|m| m.trim_start_matches("::"))
            .filter(|m| !m.is_empty())
            .unwrap_or("main");
        eprintln!("{:<5} {}: {}", record.level(), module, record.args());
    }

    fn flush(&self) {}
}

static LOGGER: SimLogger = SimLogger;

/// Install the stderr logger at the level given by `BATTLESHIP_SIM_LOG` and
/// return that level. Later calls keep the first logger.
pub fn init_logging() -> LevelFilter {
    let level = level_from_env_value(std::env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
    level
}
