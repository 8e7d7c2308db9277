//! Log stream setup.
//!
//! Appends to the fixed log file; if that cannot be opened (first boot,
//! read-only /var, wrong permissions) logging falls back to stdout so a
//! technician watching the console still sees the run. `RUST_LOG`
//! overrides the verbosity flag.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Keeps the log file handle alive for the duration of the run and
/// syncs it on drop, so the tail of the log survives the halt that
/// usually follows.
pub struct LogGuard {
    file: Option<Arc<File>>,
}

impl Drop for LogGuard {
    fn drop(&mut self) {
        if let Some(file) = &self.file {
            let _ = file.sync_all();
        }
    }
}

fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }))
}

/// Initializes the global subscriber. `log_file` of `None` means log
/// to stdout directly (the `--stdout` flag).
pub fn init(log_file: Option<&Path>, verbose: bool) -> LogGuard {
    if let Some(path) = log_file {
        match open_log_file(path) {
            Ok(file) => {
                let file = Arc::new(file);
                tracing_subscriber::fmt()
                    .with_env_filter(filter(verbose))
                    .with_ansi(false)
                    .with_writer(file.clone())
                    .init();
                return LogGuard { file: Some(file) };
            }
            Err(e) => {
                tracing_subscriber::fmt()
                    .with_env_filter(filter(verbose))
                    .init();
                warn!("cannot open log file {}: {e}", path.display());
                warn!("falling back to stdout logging");
                return LogGuard { file: None };
            }
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .init();
    LogGuard { file: None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn opens_and_creates_log_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("updater.log");
        let file = open_log_file(&path).unwrap();
        drop(file);
        assert!(path.exists());
        // Append mode: opening again must not truncate.
        std::fs::write(&path, b"line\n").unwrap();
        let _ = open_log_file(&path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"line\n");
    }

    #[test]
    fn unopenable_path_is_an_error_not_a_panic() {
        assert!(open_log_file(Path::new("/nonexistent/dir/updater.log")).is_err());
    }
}
