//! Power controller: the terminal step of a successful run.

use std::ffi::OsStr;

use crate::config::Config;
use crate::error::CommandError;
use crate::exec;

/// Invokes the halt utility. On success the process is living on
/// borrowed time and does not need to return.
pub fn halt(cfg: &Config) -> Result<(), CommandError> {
    exec::run(&cfg.halt_bin, std::iter::empty::<&OsStr>())
}
