use chrono::Local;
use log::{LevelFilter, Metadata, Record, SetLoggerError};
use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::OnceLock;

// Custom logger structure
#[derive(Debug)]
struct DroneWatchLogger {
    level: LevelFilter,
    debug_filters: Option<HashSet<String>>,
}

// Implement the log::Log trait for our custom logger
impl log::Log for DroneWatchLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        // Check if the record's level is enabled
        if metadata.level() <= self.level {
            // If we have debug filters, check if the target matches any filter
            if let Some(filters) = &self.debug_filters {
                if metadata.level() == log::Level::Debug || metadata.level() == log::Level::Trace {
                    return filters.contains(metadata.target())
                        || filters.iter().any(|f| metadata.target().starts_with(f));
                }
            }
            return true;
        }
        false
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let level_color = match record.level() {
                log::Level::Error => "\x1B[31m", // Red
                log::Level::Warn => "\x1B[33m",  // Yellow
                log::Level::Info => "\x1B[32m",  // Green
                log::Level::Debug => "\x1B[36m", // Cyan
                log::Level::Trace => "\x1B[35m", // Magenta
            };

            let reset = "\x1B[0m";
            let now = Local::now();
            let timestamp = now.format("%H:%M:%S%.3f");

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

            let mut stdout = io::stdout();
            writeln!(stdout, "{}", output).expect("Failed to write to stdout");
            stdout.flush().expect("Failed to flush stdout");
        }
    }

    fn flush(&self) {
        io::stdout().flush().expect("Failed to flush stdout");
    }
}

// Use OnceLock instead of unsafe static mut
static LOGGER: OnceLock<DroneWatchLogger> = OnceLock::new();

// Initialize the logger with optional debug filters
pub fn init_logger(level: LevelFilter, debug_filter: Option<String>) -> Result<(), SetLoggerError> {
    let debug_filters = debug_filter.map(|filter_str| {
        filter_str
            .split(',')
            .map(|s| s.trim().to_string())
            .collect::<HashSet<String>>()
    });

    // Initialize the logger if it hasn't been initialized yet
    if LOGGER.get().is_none() {
        let logger = DroneWatchLogger {
            level,
            debug_filters,
        };

        LOGGER.set(logger).expect("Failed to set logger");
    }

    // Set the logger
    log::set_logger(LOGGER.get().expect("logger just initialized"))
        .map(|()| log::set_max_level(level))
}

// Helper macros for specific debug topics
#[macro_export]
macro_rules! debug_flight {
    ($($arg:tt)*) => {
        log::debug!(target: "flight", "{}", format_args!($($arg)*))
    }
}

#[macro_export]
macro_rules! debug_signal {
    ($($arg:tt)*) => {
        log::debug!(target: "signal", "{}", format_args!($($arg)*))
    }
}

#[macro_export]
macro_rules! debug_battery {
    ($($arg:tt)*) => {
        log::debug!(target: "battery", "{}", format_args!($($arg)*))
    }
}

#[macro_export]
macro_rules! debug_hud {
    ($($arg:tt)*) => {
        log::debug!(target: "hud", "{}", format_args!($($arg)*))
    }
}

#[macro_export]
macro_rules! debug_scene {
    ($($arg:tt)*) => {
        log::debug!(target: "scene", "{}", format_args!($($arg)*))
    }
}
