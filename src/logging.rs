//! Diagnostic logging to a file. The interactive UI owns stdout, so nothing is
//! written to the terminal. `SWATCH_LOG` overrides the filter (e.g. `swatch=trace`).

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const FILTER_ENV: &str = "SWATCH_LOG";

/// Returns the default log path inside the user's data directory.
/// Falls back to `./swatch.log` when no data dir is found.
pub fn default_log_path() -> PathBuf {
    match dirs::data_local_dir() {
        Some(data_dir) => data_dir.join("swatch").join("swatch.log"),
        None => PathBuf::from("swatch.log"),
    }
}

/// Initialize the file subscriber. The returned guard must live until exit so
/// buffered records are flushed.
///
/// Returns `None` when the log file cannot be opened; the app then runs
/// without diagnostics.
pub fn init(log_path: Option<&Path>, verbose: bool) -> Option<WorkerGuard> {
    let log_path = log_path.map(Path::to_path_buf).unwrap_or_else(default_log_path);
    let log_dir = match log_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Failed to create log directory {:?}: {}", log_dir, e);
        return None;
    }
    let file_name = log_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "swatch.log".to_string());

    let appender = match RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(&log_dir)
    {
        Ok(appender) => appender,
        Err(e) => {
            eprintln!("Failed to open log file {:?}: {}", log_path, e);
            return None;
        }
    };
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    let filter = EnvFilter::try_from_env(FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(filter)
        .init();

    tracing::info!(log_file = ?log_path, verbose, "swatch logging initialized");

    Some(guard)
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "info,swatch=debug" } else { "info" }
}
