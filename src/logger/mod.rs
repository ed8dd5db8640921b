//! Logger module
//!
//! Logging utilities for code that uses the response helpers:
//! - Failed response writes
//! - Written responses, in `common` or `json` format
//! - Error and warning logging
//! - File-based logging support
//!
//! The helpers themselves never log; callers decide what to do with a
//! returned error.

mod format;
pub mod writer;

pub use format::ResponseLogEntry;

use crate::config::LoggingConfig;
use crate::error::Error;
use hyper::StatusCode;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &LoggingConfig) -> std::io::Result<()> {
    writer::init(
        config.access_log_file.as_deref(),
        config.error_log_file.as_deref(),
    )
}

fn write_access(message: &str) {
    match writer::get() {
        Some(w) => w.write_access(message),
        None => println!("{message}"),
    }
}

fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

/// Log an error returned by one of the response helpers
pub fn log_write_error(status: StatusCode, err: &Error) {
    log_error(&write_error_message(status, err));
}

fn write_error_message(status: StatusCode, err: &Error) -> String {
    format!("Failed to write {} response: {err}", status.as_u16())
}

/// Log a written response
pub fn log_response(entry: &ResponseLogEntry, format: &str) {
    write_access(&entry.format(format));
}
