//! tar-backed archive listing and extraction.
//!
//! Patch archives put all entries under one common top-level directory
//! which is stripped on both listing and extraction, so the listed
//! names match what lands on disk. Archives with entries at the root
//! or with mixed nesting are outside the convention and behave however
//! tar makes them behave.

use std::ffi::OsStr;
use std::path::Path;

use crate::config::Config;
use crate::error::CommandError;
use crate::exec;

/// Lists the archive's entry paths, one per line of tar output.
///
/// Parsed per line rather than on whitespace, so entry names containing
/// spaces survive intact. Blank lines are dropped.
pub fn list(cfg: &Config, archive: &Path) -> Result<Vec<String>, CommandError> {
    let out = exec::run_captured(
        &cfg.tar_bin,
        [
            OsStr::new("tf"),
            archive.as_os_str(),
            OsStr::new("--strip-components=1"),
        ],
    )?;
    Ok(out
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

/// Unpacks the archive over the root filesystem, stripping the first
/// path component and overwriting existing files unconditionally.
///
/// No dry-run, no verification, no atomicity: a failure mid-extraction
/// leaves the filesystem partially patched.
pub fn extract(cfg: &Config, archive: &Path) -> Result<(), CommandError> {
    exec::run(
        &cfg.tar_bin,
        [
            OsStr::new("xzf"),
            archive.as_os_str(),
            OsStr::new("-C"),
            OsStr::new("/"),
            OsStr::new("--strip-components=1"),
            OsStr::new("--overwrite"),
        ],
    )
}
