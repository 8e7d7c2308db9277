//! Thin wrappers around mount(8) and umount(8).

use tracing::warn;

use crate::config::Config;
use crate::error::CommandError;
use crate::exec;

/// Attaches `device` read-only at the configured mount point.
pub fn mount(cfg: &Config, device: &str) -> Result<(), CommandError> {
    let mount_point = cfg.mount_point.display().to_string();
    exec::run(&cfg.mount_bin, ["-o", "ro", device, mount_point.as_str()])
}

/// Detaches `device`.
pub fn unmount(cfg: &Config, device: &str) -> Result<(), CommandError> {
    exec::run(&cfg.umount_bin, [device])
}

/// Unmount on an exit path. A failure here never changes the outcome
/// of the run, so it is logged and swallowed.
pub fn unmount_best_effort(cfg: &Config, device: &str) {
    if let Err(e) = unmount(cfg, device) {
        warn!("umount {device}: {e}");
    }
}
