//! Blocking external command execution.
//!
//! All of mount, tar and halt go through these two helpers. No
//! timeouts are applied anywhere: a hung utility hangs the whole run.

use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

use crate::error::CommandError;

/// Runs `bin` with `args`, inheriting stdio, and maps a non-zero exit
/// status to an error.
pub fn run<I, S>(bin: &Path, args: I) -> Result<(), CommandError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let status = Command::new(bin)
        .args(args)
        .status()
        .map_err(|source| CommandError::Spawn {
            bin: bin.display().to_string(),
            source,
        })?;
    if status.success() {
        Ok(())
    } else {
        Err(CommandError::Failed {
            bin: bin.display().to_string(),
            status,
            stderr: String::new(),
        })
    }
}

/// Runs `bin` with `args` and returns its stdout; stderr is captured
/// and carried in the error on failure.
pub fn run_captured<I, S>(bin: &Path, args: I) -> Result<String, CommandError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = Command::new(bin)
        .args(args)
        .output()
        .map_err(|source| CommandError::Spawn {
            bin: bin.display().to_string(),
            source,
        })?;
    if !output.status.success() {
        return Err(CommandError::Failed {
            bin: bin.display().to_string(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_reports_success() {
        assert!(run(Path::new("true"), std::iter::empty::<&OsStr>()).is_ok());
    }

    #[test]
    fn run_maps_nonzero_exit_to_error() {
        let err = run(Path::new("false"), std::iter::empty::<&OsStr>()).unwrap_err();
        assert!(matches!(err, CommandError::Failed { .. }));
    }

    #[test]
    fn run_reports_missing_binary_as_spawn_error() {
        let err = run(
            Path::new("/nonexistent/definitely-not-a-binary"),
            std::iter::empty::<&OsStr>(),
        )
        .unwrap_err();
        assert!(matches!(err, CommandError::Spawn { .. }));
    }

    #[test]
    fn run_captured_returns_stdout() {
        let out = run_captured(Path::new("echo"), ["hello"]).unwrap();
        assert_eq!(out.trim(), "hello");
    }
}
