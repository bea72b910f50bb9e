//! ANSI color helper utilities for terminal output.

use crate::models::EventStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Status color:
/// operational → green
/// waiting → yellow
/// delay → red
/// anything else → grey
pub fn color_for_status(status: &EventStatus) -> &'static str {
    match status {
        EventStatus::Operational => GREEN,
        EventStatus::Waiting => YELLOW,
        EventStatus::Delay => RED,
        EventStatus::Unrecognized(_) => GREY,
    }
}

pub fn colorize(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}

/// Balance strings are signed ("+38.5 hours", "-2 hours").
pub fn color_for_balance(balance: &str) -> &'static str {
    match balance.trim().chars().next() {
        Some('+') => GREEN,
        Some('-') => RED,
        _ => RESET,
    }
}
