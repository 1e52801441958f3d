//! Log formatting and output with ANSI colors
//!
//! Handles:
//! - Colorized console output with fixed-width tag and level columns
//! - Plain-text mirror of every line for the log file
//! - Broken pipe handling for piped commands

use super::file::write_to_file;
use super::levels::LogLevel;
use super::tags::LogTag;
use chrono::Local;
use colored::*;
use std::io::{stdout, ErrorKind, Write};

/// Log format widths for alignment
const TAG_WIDTH: usize = 9;
const LEVEL_WIDTH: usize = 7;

/// Format and output a log message
pub fn format_and_log(tag: LogTag, level: LogLevel, message: &str) {
    let now = Local::now();
    let time = now.format("%H:%M:%S").to_string();

    let console_line = format!(
        "{} [{}] [{}] {}",
        time.dimmed(),
        format_tag(&tag),
        format_level(level),
        message
    );
    print_stdout_safe(&console_line);

    write_to_file(&plain_line(
        &now.format("%Y-%m-%d %H:%M:%S").to_string(),
        &tag,
        level,
        message,
    ));
}

/// Uncolored line written to the log file
pub fn plain_line(timestamp: &str, tag: &LogTag, level: LogLevel, message: &str) -> String {
    format!(
        "{} [{}] [{}] {}",
        timestamp,
        tag.to_plain_string(),
        level.as_str(),
        message
    )
}

/// Format a tag with appropriate color
fn format_tag(tag: &LogTag) -> ColoredString {
    let padded = format!("{:<width$}", tag.to_plain_string(), width = TAG_WIDTH);
    match tag {
        LogTag::System => padded.bright_yellow().bold(),
        LogTag::Config => padded.bright_white().bold(),
        LogTag::Fleet => padded.bright_cyan().bold(),
        LogTag::Poller => padded.bright_blue().bold(),
        LogTag::Webserver => padded.bright_magenta().bold(),
        LogTag::Http => padded.bright_black().bold(),
    }
}

fn format_level(level: LogLevel) -> ColoredString {
    let padded = format!("{:<width$}", level.as_str(), width = LEVEL_WIDTH);
    match level {
        LogLevel::Error => padded.bright_red().bold(),
        LogLevel::Warning => padded.bright_yellow().bold(),
        LogLevel::Info => padded.bright_green(),
        LogLevel::Debug => padded.bright_blue(),
        LogLevel::Verbose => padded.dimmed(),
    }
}

/// Print to stdout, ignoring broken pipes (e.g. `fleetboard | head`)
fn print_stdout_safe(line: &str) {
    let mut out = stdout().lock();
    if let Err(e) = writeln!(out, "{}", line) {
        if e.kind() != ErrorKind::BrokenPipe {
            eprintln!("Failed to write log line: {}", e);
        }
    }
}
