//! Error taxonomy for an update run.
//!
//! Every variant is terminal: nothing here is retried or recovered.
//! Unmount failure deliberately has no variant — by the time unmount
//! runs the outcome of the run is already fixed, so it is only logged.

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Failure of one external utility invocation.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("failed to run {bin}: {source}")]
    Spawn {
        bin: String,
        #[source]
        source: io::Error,
    },
    #[error("{bin} exited with {status}{}", render_stderr(.stderr))]
    Failed {
        bin: String,
        status: ExitStatus,
        stderr: String,
    },
}

fn render_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}

/// Terminal outcome of a failed run, one variant per abort point.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("no device given (DEVNAME unset)")]
    DeviceMissing,

    #[error("mount {device}: {source}")]
    Mount {
        device: String,
        #[source]
        source: CommandError,
    },

    #[error("no patch on drive")]
    NoPatchFound,

    #[error("tar list {path}: {source}")]
    Listing {
        path: String,
        #[source]
        source: CommandError,
    },

    /// The archive replaces the installed updater but the old binary
    /// could not be unlinked. Worst case: the device ends up
    /// non-updatable.
    #[error("remove {path}: {source}")]
    SelfUpdateRemoval {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("tar extract {path}: {source}")]
    Extraction {
        path: String,
        #[source]
        source: CommandError,
    },

    #[error("halt: {source}")]
    Halt {
        #[source]
        source: CommandError,
    },
}

impl UpdateError {
    /// Process exit code, one per abort point so field logs and the
    /// udev journal can tell the failures apart.
    pub fn exit_code(&self) -> i32 {
        match self {
            UpdateError::DeviceMissing => 2,
            UpdateError::Mount { .. } => 3,
            UpdateError::NoPatchFound => 4,
            UpdateError::Listing { .. } => 5,
            UpdateError::SelfUpdateRemoval { .. } => 6,
            UpdateError::Extraction { .. } => 7,
            UpdateError::Halt { .. } => 8,
        }
    }
}
