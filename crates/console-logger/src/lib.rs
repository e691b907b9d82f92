//! Console Logger
//!
//! `log` backend for the browser. Records go to `console.debug/info/warn/error`
//! on wasm32 and to stderr everywhere else (native tests, tooling).

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Logger that tags every line with the application name
pub struct ConsoleLogger {
    app_name: &'static str,
    level: LevelFilter,
}

impl ConsoleLogger {
    pub const fn new(app_name: &'static str, level: LevelFilter) -> Self {
        Self { app_name, level }
    }

    /// Render a record as a single console line
    pub fn format_line(&self, timestamp: &str, level: Level, target: &str, message: &str) -> String {
        format!("{} [{}] {:<5} {}: {}", timestamp, self.app_name, level, target, message)
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        let line = self.format_line(&timestamp, record.level(), record.target(), &record.args().to_string());
        write_line(record.level(), &line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    let value = line.into();
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the console logger as the global `log` backend.
///
/// Fails if another logger has already been installed.
pub fn init_logger(app_name: &'static str, level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger::new(app_name, level)))?;
    log::set_max_level(level);
    Ok(())
}
