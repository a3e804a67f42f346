use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Cached debug flag, read once from `VITAE_DEBUG`.
static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// Set once the global subscriber is installed.
static LOG_FILE: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Returns true when `VITAE_DEBUG=1` (or `true`) was set at first call.
#[inline]
pub fn is_debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| {
        std::env::var("VITAE_DEBUG")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false)
    })
}

/// Directory holding `latest.log`, under the user's home when available.
pub fn default_log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".vitae")
        .join("logs")
}

/// Default filter directive: `RUST_LOG` wins, then `VITAE_DEBUG`, then `info`.
fn env_filter() -> EnvFilter {
    let fallback = if is_debug_enabled() { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

fn open_log_file(dir: &Path) -> std::io::Result<(PathBuf, fs::File)> {
    fs::create_dir_all(dir)?;
    let path = dir.join("latest.log");
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)?;
    Ok((path, file))
}

/// Installs the global tracing subscriber: stderr always, plus `latest.log` in
/// `log_dir` when the directory can be created. Calling it twice is an error.
pub fn init_global_logger(log_dir: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    if LOG_FILE.get().is_some() {
        return Err("Logger already initialized".into());
    }

    let file = log_dir.and_then(|dir| match open_log_file(dir) {
        Ok(pair) => Some(pair),
        Err(e) => {
            eprintln!("Failed to open log file in {}: {}", dir.display(), e);
            None
        }
    });
    let path = file.as_ref().map(|(path, _)| path.clone());

    let file_layer = file.map(|(_, handle)| {
        fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .with_writer(Mutex::new(handle))
    });

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(file_layer)
        .try_init()?;

    LOG_FILE
        .set(path)
        .map_err(|_| "Logger already initialized")?;
    Ok(())
}

/// Path of the active log file, if the global logger writes one.
pub fn log_file_path() -> Option<&'static Path> {
    LOG_FILE.get().and_then(|p| p.as_deref())
}
