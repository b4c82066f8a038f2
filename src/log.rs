// src/log.rs
//
// Backend for the `log` facade: every line goes to stderr and, when a log file
// could be opened, is appended there too.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use ::log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static START: OnceLock<Instant> = OnceLock::new();
static LOGGER: OnceLock<SheetLogger> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

fn format_line(elapsed_ms: u128, level: Level, msg: &str) -> String {
    format!("[{}][{level}] {msg}\n", fmt_elapsed(elapsed_ms))
}

struct SheetLogger {
    level: LevelFilter,
    file: Mutex<Option<File>>,
}

impl Log for SheetLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(start().elapsed().as_millis(), record.level(), &record.args().to_string());
        eprint!("{line}");

        if let Ok(mut guard) = self.file.lock() {
            if let Some(file) = guard.as_mut() {
                let _ = file.write_all(line.as_bytes());
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut guard) = self.file.lock() {
            if let Some(file) = guard.as_mut() {
                let _ = file.flush();
            }
        }
    }
}

fn open_append(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).ok()?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

/// Install the process-wide logger at `Info`.
/// A log file that cannot be opened is skipped; stderr output still happens.
pub fn init(log_file: Option<&Path>) -> Result<(), SetLoggerError> {
    start();
    let logger = LOGGER.get_or_init(|| SheetLogger {
        level: LevelFilter::Info,
        file: Mutex::new(log_file.and_then(open_append)),
    });
    ::log::set_logger(logger)?;
    ::log::set_max_level(logger.level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_zero_padded() {
        assert_eq!(fmt_elapsed(0), "00:00:00.000");
        assert_eq!(fmt_elapsed(3_723_045), "01:02:03.045");
    }

    #[test]
    fn line_carries_level_and_message() {
        let line = format_line(1_500, Level::Warn, "Image failed for Mew");
        assert_eq!(line, "[00:00:01.500][WARN] Image failed for Mew\n");
    }

    #[test]
    fn repeated_init_fails_with_a_reportable_error() {
        let _ = init(None);
        let err = init(None).unwrap_err();
        // the binaries hand this to color-eyre with `?`
        let report: Box<dyn std::error::Error + Send + Sync + 'static> = err.into();
        assert!(!report.to_string().is_empty());
    }
}
