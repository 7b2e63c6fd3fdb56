use chrono::Local;
use log::{LevelFilter, Metadata, Record, SetLoggerError};
use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::OnceLock;

// Custom logger structure
#[derive(Debug)]
struct DodgerLogger {
    level: LevelFilter,
    debug_filters: Option<HashSet<String>>,
}

impl DodgerLogger {
    fn new(level: LevelFilter, debug_filter: Option<String>) -> Self {
        let debug_filters = debug_filter.map(|filter_str| {
            filter_str
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect::<HashSet<String>>()
        });
        DodgerLogger {
            level,
            debug_filters,
        }
    }
}

impl log::Log for DodgerLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if metadata.level() > self.level {
            return false;
        }
        // Topic filters only narrow debug and trace output
        match &self.debug_filters {
            Some(filters)
                if metadata.level() == log::Level::Debug
                    || metadata.level() == log::Level::Trace =>
            {
                filters.contains(metadata.target())
                    || filters.iter().any(|f| metadata.target().starts_with(f))
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

        let mut output = format!(
            "{timestamp} {level_color}{level:5}{reset} {target}: {message}",
            timestamp = timestamp,
            level_color = level_color,
            level = record.level(),
            reset = reset,
            target = record.target(),
            message = record.args()
        );

        // Add module path if available and different from target
        if let Some(module_path) = record.module_path() {
            if module_path != record.target() {
                output.push_str(&format!(" [{}]", module_path));
            }
        }

        // Write errors are ignored
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "{}", output);
        let _ = stdout.flush();
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

static LOGGER: OnceLock<DodgerLogger> = OnceLock::new();

// Initialize the logger with optional debug topic filters ("controller,input,surface")
pub fn init_logger(level: LevelFilter, debug_filter: Option<String>) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| DodgerLogger::new(level, debug_filter));
    log::set_logger(logger).map(|()| log::set_max_level(level))
}

// Helper macros for specific debug topics
#[macro_export]
macro_rules! debug_controller {
    ($($arg:tt)*) => {
        log::debug!(target: "controller", "{}", format_args!($($arg)*))
    }
}

#[macro_export]
macro_rules! debug_input {
    ($($arg:tt)*) => {
        log::debug!(target: "input", "{}", format_args!($($arg)*))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log};

    fn metadata(level: Level, target: &str) -> Metadata<'_> {
        Metadata::builder().level(level).target(target).build()
    }

    #[test]
    fn test_level_gate() {
        let logger = DodgerLogger::new(LevelFilter::Info, None);
        assert!(logger.enabled(&metadata(Level::Error, "controller")));
        assert!(logger.enabled(&metadata(Level::Info, "dodger")));
        assert!(!logger.enabled(&metadata(Level::Debug, "controller")));
    }

    #[test]
    fn test_debug_topic_filter() {
        let logger = DodgerLogger::new(LevelFilter::Trace, Some("controller, surface".to_string()));
        assert!(logger.enabled(&metadata(Level::Debug, "controller")));
        assert!(logger.enabled(&metadata(Level::Trace, "surface")));
        assert!(!logger.enabled(&metadata(Level::Debug, "input")));
        // Filters never hide info and above
        assert!(logger.enabled(&metadata(Level::Info, "input")));
    }
}
