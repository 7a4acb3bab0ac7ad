//! Logger setup for the `tp` binary.
//!
//! Records are written as `LEVEL:[timestamp]:message`, to stderr or appended
//! to a log file. When stderr is a terminal the level is colored by severity
//! and the timestamp is green.

use std::fs::{File, OpenOptions};
use std::io::{stderr, Write};

use crossterm::tty::IsTty;
use env_logger::{Env, Target};
use log::Level;
use termpick_core::config::get_file_path;
use termpick_core::error::{Error, Result};
use termpick_core::platform::Platform;
use termpick_core::style::{Color, StyleSet};

/// Formats one log record.
#[must_use]
pub fn format_record(styles: &StyleSet, level: Level, timestamp: &str, message: &str) -> String {
    let level_color = match level {
        Level::Warn => Color::BrightYellow,
        Level::Error => Color::BrightRed,
        _ => Color::BrightCyan,
    };

    format!(
        "{}{level}:{}[{timestamp}]{}:{message}",
        styles.foreground(level_color),
        styles.foreground(Color::BrightGreen),
        styles.reset()
    )
}

/// Installs the global logger.
///
/// The default filter is `warn`, or `debug` when `verbose` is set; `RUST_LOG`
/// overrides both. With a `log_file`, records are appended to it uncolored.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init(verbose: bool, log_file: Option<&str>) -> Result<()> {
    let default_filter = if verbose { "debug" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(Env::default().default_filter_or(default_filter));

    let styles = match log_file {
        Some(log_file) => {
            builder.target(Target::Pipe(Box::new(open_log_file(log_file)?)));
            StyleSet::plain()
        }
        None if stderr().is_tty() => StyleSet::new(Platform::current()),
        None => StyleSet::plain(),
    };

    builder
        .format(move |buf, record| {
            writeln!(
                buf,
                "{}",
                format_record(
                    &styles,
                    record.level(),
                    &buf.timestamp().to_string(),
                    &record.args().to_string()
                )
            )
        })
        .init();

    Ok(())
}

/// Opens `log_file` for appending, creating it if needed. `~` is expanded.
///
/// # Errors
///
/// Returns an error if the file cannot be opened.
pub fn open_log_file(log_file: &str) -> Result<File> {
    let log_path = get_file_path(log_file);
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|e| Error::io_error("log".to_string(), log_path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_record() {
        let record = format_record(
            &StyleSet::plain(),
            Level::Info,
            "2024-01-01T00:00:00Z",
            "Selected `B`",
        );
        assert_eq!(record, "INFO:[2024-01-01T00:00:00Z]:Selected `B`");
    }

    #[test]
    fn test_colored_levels() {
        let styles = StyleSet::new(Platform::Unix);

        let warning = format_record(&styles, Level::Warn, "now", "careful");
        assert_eq!(warning, "\x1b[93mWARN:\x1b[92m[now]\x1b[0m:careful");

        let error = format_record(&styles, Level::Error, "now", "failed");
        assert!(error.starts_with("\x1b[91mERROR:"));

        let debug = format_record(&styles, Level::Debug, "now", "details");
        assert!(debug.starts_with("\x1b[96mDEBUG:"));
    }

    #[test]
    fn test_open_log_file_appends() {
        let directory = tempfile::tempdir().unwrap();
        let log_path = directory.path().join("tp.log");
        let log_path = log_path.to_str().unwrap();

        writeln!(open_log_file(log_path).unwrap(), "first").unwrap();
        writeln!(open_log_file(log_path).unwrap(), "second").unwrap();

        assert_eq!(std::fs::read_to_string(log_path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_open_log_file_in_missing_directory() {
        let result = open_log_file("/definitely/not/here/tp.log");
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
