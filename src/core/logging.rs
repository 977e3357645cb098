//! File-only logging for TUI mode.
//!
//! ratatui owns the terminal while the app runs, so nothing may be written
//! to stdout. All `tracing` and `log` output goes to a daily rolling JSON
//! file under the app data directory.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Duration, Local, NaiveDate};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_FILE_PREFIX: &str = "voicepick.log";

/// Rolled log files older than this are deleted at startup.
const LOG_RETENTION_DAYS: i64 = 14;

/// Default log directory: `<data_dir>/voicepick/logs`.
pub fn log_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("voicepick").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Initialize the logging system for TUI mode.
///
/// Keep the returned guard alive for the life of the program; dropping it
/// flushes and stops the background writer.
pub fn init_tui() -> WorkerGuard {
    let log_dir = log_dir();

    if !log_dir.exists() {
        if let Err(e) = fs::create_dir_all(&log_dir) {
            eprintln!("Failed to create logs directory: {}", e);
        }
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_filter(env_filter);

    // No stdout layer while the TUI owns the terminal. `init` also installs
    // the `log` bridge.
    tracing_subscriber::registry().with(file_layer).init();

    let today = Local::now().date_naive();
    let removed = prune_old_logs(&log_dir, today, LOG_RETENTION_DAYS);
    log::info!(
        "Logging initialized. Writing to: {:?} (daily rolling, pruned {removed} old files)",
        log_dir.join(LOG_FILE_PREFIX)
    );

    guard
}

/// Delete rolled log files (`voicepick.log.YYYY-MM-DD`) older than
/// `keep_days` relative to `today`. Returns the number of files removed.
pub fn prune_old_logs(log_dir: &Path, today: NaiveDate, keep_days: i64) -> usize {
    let cutoff = today - Duration::days(keep_days);
    let Ok(entries) = fs::read_dir(log_dir) else {
        return 0;
    };

    let mut removed = 0;
    for entry in entries.flatten() {
        let path = entry.path();
        let Some(date) = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(rolled_log_date)
        else {
            continue;
        };
        if date < cutoff {
            match fs::remove_file(&path) {
                Ok(()) => removed += 1,
                Err(e) => log::warn!("Failed to remove old log {}: {e}", path.display()),
            }
        }
    }
    removed
}

fn rolled_log_date(file_name: &str) -> Option<NaiveDate> {
    let suffix = file_name.strip_prefix(LOG_FILE_PREFIX)?.strip_prefix('.')?;
    NaiveDate::parse_from_str(suffix, "%Y-%m-%d").ok()
}
