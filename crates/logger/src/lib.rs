//! Small level-gated logger used across the `unimate` workspace.
//!
//! Compile-time features decide which levels can ever be emitted:
//! - `log-info` compiles in `info!` output.
//! - `log-debug` compiles in `debug!` output, which is additionally gated by a runtime switch.
//! - `verbose` compiles in `verbose!`, an untagged stdout printer that never reaches the log file.
//! - `file-logging` allows tagged messages to be redirected into a log file.
//!
//! `error!` and `warn!` are always compiled in. Console output goes to stderr for
//! warnings and errors and to stdout otherwise.

use std::fmt::{self, Arguments};
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

#[cfg(feature = "file-logging")]
use std::{
    fs::{File, OpenOptions},
    io::Write,
    path::Path,
    sync::Mutex,
};

/// Severity of a log message. Lower values are more severe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Failures the user should see.
    Error = 1,
    /// Recoverable problems.
    Warn = 2,
    /// Progress information.
    Info = 3,
    /// Developer diagnostics.
    Debug = 4,
}

impl Level {
    /// Tag written in front of every message at this level.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Error => "[ERROR]",
            Self::Warn => "[WARN]",
            Self::Info => "[INFO]",
            Self::Debug => "[DEBUG]",
        }
    }

    const fn from_u8(raw: u8) -> Self {
        match raw {
            1 => Self::Error,
            2 => Self::Warn,
            3 => Self::Info,
            _ => Self::Debug,
        }
    }

    const fn compiled_in(self) -> bool {
        match self {
            Self::Error | Self::Warn => true,
            Self::Info => cfg!(feature = "log-info"),
            Self::Debug => cfg!(feature = "log-debug"),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        f.write_str(name)
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" | "err" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            other => Err(format!("Unknown log level: '{other}'")),
        }
    }
}

const fn initial_level() -> u8 {
    if cfg!(feature = "log-debug") {
        Level::Debug as u8
    } else if cfg!(feature = "log-info") {
        Level::Info as u8
    } else {
        Level::Warn as u8
    }
}

static CURRENT_LEVEL: AtomicU8 = AtomicU8::new(initial_level());
static DEBUG_SWITCH: AtomicBool = AtomicBool::new(true);
static VERBOSE_SWITCH: AtomicBool = AtomicBool::new(false);

#[cfg(feature = "file-logging")]
static FILE_SINK: Mutex<Option<File>> = Mutex::new(None);

/// Set the most verbose level that will be emitted.
pub fn set_level(level: Level) {
    CURRENT_LEVEL.store(level as u8, Ordering::SeqCst);
}

/// Current runtime level.
#[must_use]
pub fn level() -> Level {
    Level::from_u8(CURRENT_LEVEL.load(Ordering::SeqCst))
}

/// Parse `level` (case-insensitive) and apply it. Returns `false` and leaves the
/// level untouched when the string is not a known level.
#[must_use]
pub fn set_level_from_str(level: &str) -> bool {
    level.parse::<Level>().map(set_level).is_ok()
}

/// Allow `debug!` output (it still needs the `log-debug` feature and a debug level).
pub fn enable_debug() {
    DEBUG_SWITCH.store(true, Ordering::SeqCst);
}

/// Silence `debug!` output regardless of level.
pub fn disable_debug() {
    DEBUG_SWITCH.store(false, Ordering::SeqCst);
}

/// Whether `debug!` can currently emit.
#[must_use]
pub fn is_debug_enabled() -> bool {
    cfg!(feature = "log-debug") && DEBUG_SWITCH.load(Ordering::SeqCst)
}

/// Turn on `verbose!` output.
pub fn enable_verbose() {
    VERBOSE_SWITCH.store(true, Ordering::SeqCst);
}

/// Turn off `verbose!` output.
pub fn disable_verbose() {
    VERBOSE_SWITCH.store(false, Ordering::SeqCst);
}

/// Whether `verbose!` currently prints.
#[must_use]
pub fn is_verbose_enabled() -> bool {
    cfg!(feature = "verbose") && VERBOSE_SWITCH.load(Ordering::SeqCst)
}

/// Redirect tagged log output to `path` (appending). Returns `false` when the file
/// cannot be opened; console output is kept in that case.
#[cfg(feature = "file-logging")]
#[must_use]
pub fn init_file_logging(path: &Path) -> bool {
    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return false;
    };
    match FILE_SINK.lock() {
        Ok(mut sink) => {
            *sink = Some(file);
            true
        }
        Err(_) => false,
    }
}

/// File logging is compiled out; always returns `false`.
#[cfg(not(feature = "file-logging"))]
#[must_use]
pub fn init_file_logging(_path: &std::path::Path) -> bool {
    false
}

/// Stop writing to the log file and fall back to the console.
pub fn close_file_logging() {
    #[cfg(feature = "file-logging")]
    {
        if let Ok(mut sink) = FILE_SINK.lock() {
            *sink = None;
        }
    }
}

/// Try to write `line` to the log file. Returns `true` if the file took it.
#[cfg(feature = "file-logging")]
fn write_file_line(line: &str) -> bool {
    let Ok(mut sink) = FILE_SINK.lock() else {
        return false;
    };
    sink.as_mut().is_some_and(|file| {
        let _ = writeln!(file, "{line}");
        let _ = file.flush();
        true
    })
}

#[cfg(not(feature = "file-logging"))]
const fn write_file_line(_line: &str) -> bool {
    false
}

/// Whether a message at `level` passes the feature gates and runtime settings.
#[must_use]
pub fn enabled(level: Level) -> bool {
    if !level.compiled_in() || level > self::level() {
        return false;
    }
    level != Level::Debug || is_debug_enabled()
}

/// Dispatch target of the logging macros.
pub fn log_impl(level: Level, args: Arguments) {
    if !enabled(level) {
        return;
    }
    let line = format!("{} {args}", level.tag());
    if write_file_line(&line) {
        return;
    }
    match level {
        Level::Error | Level::Warn => eprintln!("{line}"),
        Level::Info | Level::Debug => println!("{line}"),
    }
}

/// Log an error. Always compiled in.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Error, format_args!($($arg)*)) };
}

/// Log a warning. Always compiled in.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Warn, format_args!($($arg)*)) };
}

/// Log progress information (`log-info` feature).
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Info, format_args!($($arg)*)) };
}

/// Log a diagnostic (`log-debug` feature plus the runtime debug switch).
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Debug, format_args!($($arg)*)) };
}

/// Print an untagged line to stdout when verbose output is on. Never written to the log file.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::is_verbose_enabled() {
            println!($($arg)*);
        }
    };
}
