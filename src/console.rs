//! Coloured status output for interactive use
//!
//! Every status line is a bold coloured tag followed by the message, e.g.
//! `[*] resolving example.com`. Printed lines are mirrored as `debug`
//! `tracing` events, so they only reach the log stream when `RUST_LOG`
//! enables debug output and are never printed twice at the default level.

use tracing::debug;

pub const BOLD: &str = "\x1b[1m";
pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[91m";
pub const GREEN: &str = "\x1b[92m";
pub const YELLOW: &str = "\x1b[93m";
pub const BLUE: &str = "\x1b[94m";
pub const PURPLE: &str = "\x1b[95m";
pub const LIGHT_BLUE: &str = "\x1b[96m";
pub const END_COLOR: &str = "\x1b[0m";

/// Status line categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Informational message
    Info,
    /// Background task message
    Running,
    /// Successful completion message
    Success,
    /// Non-fatal error message
    Warning,
    /// Error that stops proper task completion
    Error,
}

impl Level {
    fn color(&self) -> &'static str {
        match self {
            Level::Info => LIGHT_BLUE,
            Level::Running => GREY,
            Level::Success => GREEN,
            Level::Warning => YELLOW,
            Level::Error => RED,
        }
    }

    fn tag(&self) -> &'static str {
        match self {
            Level::Info | Level::Running => "[*]",
            Level::Success => "[~]",
            Level::Warning | Level::Error => "[!]",
        }
    }
}

/// Build a status line without printing it
///
/// # Examples
/// ```
/// use osint_utils::console::{format_status, Level};
///
/// assert_eq!(
///     format_status(Level::Success, "done"),
///     "\x1b[1m\x1b[92m[~]\x1b[0m done"
/// );
/// ```
pub fn format_status(level: Level, msg: &str) -> String {
    format!("{}{}{}{} {}", BOLD, level.color(), level.tag(), END_COLOR, msg)
}

/// Print a status line to stdout and mirror it to the log
pub fn status(level: Level, msg: &str) {
    println!("{}", format_status(level, msg));
    debug!(kind = ?level, "{}", msg);
}

pub fn info(msg: &str) {
    status(Level::Info, msg);
}

pub fn running(msg: &str) {
    status(Level::Running, msg);
}

pub fn success(msg: &str) {
    status(Level::Success, msg);
}

pub fn warning(msg: &str) {
    status(Level::Warning, msg);
}

pub fn error(msg: &str) {
    status(Level::Error, msg);
}
