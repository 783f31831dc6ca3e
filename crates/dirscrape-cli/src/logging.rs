use anyhow::{Context, Result, anyhow};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Every scrape is recorded in the log file, whatever the console shows.
/// `dirscrape` is the binary's own target.
const FILE_FILTER: &str = "dirscrape=info,dirscrape_cli=info,dirscrape_core=info,dirscrape_browser=info";

/// Keeps the file writer alive; dropping it flushes pending log lines
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

/// Install the process-wide subscriber: console on stderr and, when a path is
/// given, an append-only log file.
///
/// Call once from `main` and hold the guard until exit.
pub fn init(verbose: bool, log_file: Option<&Path>) -> Result<LogGuard> {
    let console_filter = if verbose {
        EnvFilter::new("dirscrape_cli=debug,dirscrape_core=debug,dirscrape_browser=debug")
    } else {
        EnvFilter::new("dirscrape_cli=info")
    };

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(console_filter);

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(open_appender(path)?);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false)
                .with_filter(EnvFilter::new(FILE_FILTER));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    Ok(LogGuard { _file: guard })
}

/// Open the log file for appending, creating its directory if needed
fn open_appender(log_file: &Path) -> Result<RollingFileAppender> {
    let (directory, file_name) = split_log_path(log_file)?;
    std::fs::create_dir_all(&directory)
        .with_context(|| format!("Failed to create log directory {}", directory.display()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(&directory)
        .with_context(|| format!("Failed to open log file {}", log_file.display()))
}

/// Split a log path into its directory (current directory when bare) and file name
fn split_log_path(log_file: &Path) -> Result<(PathBuf, PathBuf)> {
    let file_name = log_file
        .file_name()
        .ok_or_else(|| anyhow!("Invalid log file path: {}", log_file.display()))?;

    let directory = match log_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok((directory, PathBuf::from(file_name)))
}
