use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::config::APP_DIR_NAME;

struct FileLogger {
    file: Mutex<Option<File>>,
    log_path: PathBuf,
}

impl FileLogger {
    fn new() -> Self {
        let log_path = get_log_path();
        FileLogger {
            file: Mutex::new(None),
            log_path,
        }
    }
}

/// Render one log line: `[timestamp] [LEVEL] [target] message`
fn format_line(level: Level, target: &str, message: &std::fmt::Arguments<'_>) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    format!("[{timestamp}] [{level:5}] [{target}] {message}\n")
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let log_line = format_line(record.level(), record.target(), record.args());

        if let Ok(mut guard) = self.file.lock() {
            if let Some(ref mut file) = *guard {
                let _ = file.write_all(log_line.as_bytes());
                let _ = file.flush();
            }
        }

        // Also print to stderr in dev mode
        #[cfg(debug_assertions)]
        eprint!("{}", log_line);
    }

    fn flush(&self) {
        if let Ok(mut guard) = self.file.lock() {
            if let Some(ref mut file) = *guard {
                let _ = file.flush();
            }
        }
    }
}

fn get_log_path() -> PathBuf {
    get_log_dir().join("debug.log")
}

fn get_log_dir() -> PathBuf {
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME);
    let _ = std::fs::create_dir_all(&log_dir);
    log_dir
}

static LOGGER: std::sync::OnceLock<FileLogger> = std::sync::OnceLock::new();

/// Initialize the logger. Always on in debug builds; in release only when
/// `SESSION_DECK_DEBUG_LOG` is set.
pub fn init() -> Result<(), SetLoggerError> {
    if !logging_enabled(cfg!(debug_assertions), std::env::var("SESSION_DECK_DEBUG_LOG").ok().as_deref()) {
        log::set_max_level(LevelFilter::Off);
        return Ok(());
    }

    let logger = LOGGER.get_or_init(FileLogger::new);

    // Truncate on startup
    if let Ok(mut guard) = logger.file.lock() {
        *guard = File::create(&logger.log_path).ok().and_then(|file| {
            drop(file);
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&logger.log_path)
                .ok()
        });
    }

    log::set_logger(logger)?;
    log::set_max_level(LevelFilter::Debug);

    log::info!("=== Session Deck Debug Log Started ===");
    log::info!("Log file: {:?}", logger.log_path);

    Ok(())
}

fn logging_enabled(debug_build: bool, env_value: Option<&str>) -> bool {
    if debug_build {
        return true;
    }
    env_value
        .map(|value| {
            let trimmed = value.trim();
            !trimmed.is_empty() && trimmed != "0"
        })
        .unwrap_or(false)
}
