use chrono::Local;
use log::{LevelFilter, Metadata, Record, SetLoggerError};
use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::OnceLock;

/// Log topics accepted by `--debug-filter`.
pub const TOPICS: [&str; 5] = ["throw", "anim", "round", "match", "input"];

#[derive(Debug)]
struct JavelinLogger {
    level: LevelFilter,
    debug_filters: Option<HashSet<String>>,
}

/// Pull the number following `label` out of a message, e.g. "Round 3" -> 3.
fn number_after(message: &str, label: &str) -> Option<u32> {
    let start = message.find(label)? + label.len();
    let rest = &message[start..];
    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    rest[..end].parse().ok()
}

/// "[P1][R03] " style prefix built from whatever the message mentions.
fn context_prefix(message: &str) -> String {
    let mut context = String::new();
    if let Some(player) = number_after(message, "Player ") {
        context.push_str(&format!("[P{}]", player));
    }
    if let Some(round) = number_after(message, "Round ") {
        context.push_str(&format!("[R{:02}]", round));
    }
    if !context.is_empty() {
        context.push(' ');
    }
    context
}

impl log::Log for JavelinLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if metadata.level() > self.level {
            return false;
        }
        // Debug and trace output is limited to the selected topics
        match &self.debug_filters {
            Some(filters) if metadata.level() >= log::Level::Debug => {
                filters.contains(metadata.target())
                    || filters.iter().any(|f| metadata.target().starts_with(f.as_str()))
            }
            _ => true,
        }
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level_color = match record.level() {
            log::Level::Error => "\x1B[31m", // Red
            log::Level::Warn => "\x1B[33m",  // Yellow
            log::Level::Info => "\x1B[32m",  // Green
            log::Level::Debug => "\x1B[36m", // Cyan
            log::Level::Trace => "\x1B[35m", // Magenta
        };
        let reset = "\x1B[0m";
        let timestamp = Local::now().format("%H:%M:%S%.3f");
        let message = record.args().to_string();

        let output = format!(
            "{timestamp} {level_color}{level:5}{reset} {context}{target}: {message}",
            level = record.level(),
            context = context_prefix(&message),
            target = record.target(),
        );

        // Nowhere left to report a failed stdout write
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "{}", output);
        let _ = stdout.flush();
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

static LOGGER: OnceLock<JavelinLogger> = OnceLock::new();

/// Install the logger. `debug_filter` is a comma separated topic list.
pub fn init_logger(level: LevelFilter, debug_filter: Option<String>) -> Result<(), SetLoggerError> {
    let debug_filters = debug_filter.map(|filter_str| {
        filter_str
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<HashSet<String>>()
    });

    let logger = LOGGER.get_or_init(|| JavelinLogger {
        level,
        debug_filters,
    });
    log::set_logger(logger).map(|()| log::set_max_level(level))
}

/// Parse a `--log-level` value, falling back to info.
pub fn parse_level(name: &str) -> LevelFilter {
    match name.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

// Topic macros, filterable with --debug-filter
#[macro_export]
macro_rules! debug_throw {
    ($($arg:tt)*) => {
        log::debug!(target: "throw", $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_anim {
    ($($arg:tt)*) => {
        log::debug!(target: "anim", $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_round {
    ($($arg:tt)*) => {
        log::debug!(target: "round", $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_match {
    ($($arg:tt)*) => {
        log::debug!(target: "match", $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_input {
    ($($arg:tt)*) => {
        log::debug!(target: "input", $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    fn logger(level: LevelFilter, filter: Option<&[&str]>) -> JavelinLogger {
        JavelinLogger {
            level,
            debug_filters: filter.map(|f| f.iter().map(|s| s.to_string()).collect()),
        }
    }

    fn meta(level: log::Level, target: &str) -> Metadata<'_> {
        Metadata::builder().level(level).target(target).build()
    }

    #[test]
    fn test_context_prefix() {
        assert_eq!(context_prefix("Round 3: Player 2 recorded 70m"), "[P2][R03] ");
        assert_eq!(context_prefix("Player 1 throw started"), "[P1] ");
        assert_eq!(context_prefix("Match reset"), "");
    }

    #[test]
    fn test_level_gate() {
        let l = logger(LevelFilter::Info, None);
        assert!(l.enabled(&meta(log::Level::Warn, "match")));
        assert!(!l.enabled(&meta(log::Level::Debug, "match")));
    }

    #[test]
    fn test_topic_filter_only_limits_debug() {
        let l = logger(LevelFilter::Debug, Some(&["round", "anim"]));
        assert!(l.enabled(&meta(log::Level::Debug, "round")));
        assert!(l.enabled(&meta(log::Level::Debug, "anim")));
        assert!(!l.enabled(&meta(log::Level::Debug, "input")));
        assert!(l.enabled(&meta(log::Level::Info, "input")));
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("DEBUG"), LevelFilter::Debug);
        assert_eq!(parse_level("off"), LevelFilter::Off);
        assert_eq!(parse_level("bogus"), LevelFilter::Info);
    }
}
