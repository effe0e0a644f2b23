//! JSON-lines file logger behind the `log` facade.
//!
//! The terminal is owned by the renderer during play, so log records go to
//! the file named by `SWEET_MATCH_LOG_PATH`, one JSON object per line. No
//! path, no logger.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Context, Result};
use log::{LevelFilter, Log, Metadata, Record};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub path: Option<String>,
    pub level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: None,
            level: LevelFilter::Info,
        }
    }
}

impl LogConfig {
    /// - `SWEET_MATCH_LOG_PATH`: destination file (appended to)
    /// - `SWEET_MATCH_LOG`: `off`, `error`, `warn`, `info`, `debug` or `trace`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = lookup("SWEET_MATCH_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let level = match lookup("SWEET_MATCH_LOG").map(|s| s.trim().to_string()) {
            Some(s) if !s.is_empty() => s
                .parse::<LevelFilter>()
                .map_err(|_| anyhow!("invalid SWEET_MATCH_LOG level: {}", s))?,
            _ => LevelFilter::Info,
        };

        Ok(Self { path, level })
    }
}

pub struct FileLogger {
    level: LevelFilter,
    file: Mutex<File>,
}

impl FileLogger {
    pub fn open(path: &str, level: LevelFilter) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open log file {}", path))?;
        Ok(Self {
            level,
            file: Mutex::new(file),
        })
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(unix_ms(), record);
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{}", line);
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Install the file logger if a path is configured. Returns whether a
/// logger was installed.
pub fn init(config: &LogConfig) -> Result<bool> {
    let Some(path) = config.path.as_deref() else {
        return Ok(false);
    };
    let logger = FileLogger::open(path, config.level)?;
    log::set_boxed_logger(Box::new(logger)).map_err(|e| anyhow!("install logger: {}", e))?;
    log::set_max_level(config.level);
    Ok(true)
}

pub fn format_record(ts_ms: u64, record: &Record) -> String {
    serde_json::json!({
        "ts": ts_ms,
        "level": record.level().as_str(),
        "target": record.target(),
        "msg": record.args().to_string(),
    })
    .to_string()
}

fn unix_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
