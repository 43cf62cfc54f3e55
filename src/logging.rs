//! File-backed `log` sink for the terminal runner.
//!
//! Stdout belongs to the playfield, so log records go to a file instead.
//! The level comes from `--log-level`, then the `BLOCKDROP_LOG` environment
//! variable, then defaults to `warn`.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable consulted when no level is given on the command line
pub const LOG_ENV: &str = "BLOCKDROP_LOG";

/// Level used when neither the flag nor the environment names one
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Pick the log level: explicit flag first, then the environment value.
pub fn resolve_level(flag: Option<&str>, env: Option<&str>) -> Result<LevelFilter> {
    match flag.or(env).map(str::trim).filter(|s| !s.is_empty()) {
        Some(name) => {
            LevelFilter::from_str(name).map_err(|_| anyhow!("invalid log level `{name}`"))
        }
        None => Ok(DEFAULT_LEVEL),
    }
}

pub struct FileLogger {
    level: LevelFilter,
    started: Instant,
    out: Mutex<BufWriter<File>>,
}

impl FileLogger {
    /// Open (append) `path` for logging at `level`.
    pub fn open(path: &Path, level: LevelFilter) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        Ok(Self {
            level,
            started: Instant::now(),
            out: Mutex::new(BufWriter::new(file)),
        })
    }

    /// Install as the global logger.
    pub fn install(self) -> Result<()> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self)).map_err(|e| anyhow!("logger already set: {e}"))?;
        log::set_max_level(level);
        Ok(())
    }

    fn format_line(&self, record: &Record<'_>) -> String {
        format!(
            "{:>8}ms {:<5} {}: {}\n",
            self.started.elapsed().as_millis(),
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format_line(record);
        if let Ok(mut out) = self.out.lock() {
            let _ = out.write_all(line.as_bytes());
        }
    }

    fn flush(&self) {
        if let Ok(mut out) = self.out.lock() {
            let _ = out.flush();
        }
    }
}

/// Set up logging for the runner. Without a file, logging stays off.
pub fn init(path: Option<&Path>, flag: Option<&str>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let env = std::env::var(LOG_ENV).ok();
    let level = resolve_level(flag, env.as_deref())?;
    FileLogger::open(path, level)?.install()
}
