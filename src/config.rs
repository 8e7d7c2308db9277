//! Runtime configuration for one update run.
//!
//! Defaults are the fixed production paths. Every field is plain data
//! so tests can point the external utilities at stubs and the mount
//! point at a temp directory.

use std::path::PathBuf;

/// Where the inserted drive gets attached for the duration of a run.
pub const MOUNT_POINT: &str = "/mnt";

/// Default log destination; stdout is the fallback when it cannot be
/// opened.
pub const LOG_PATH: &str = "/var/log/pi3g-usbpatcher";

/// Installed location of this program, watched for by the self-update
/// guard.
pub const UPDATER_PATH: &str = "/usr/bin/pi3g-usbpatcher";

const MOUNT_BIN: &str = "/bin/mount";
const UMOUNT_BIN: &str = "/bin/umount";
const TAR_BIN: &str = "/bin/tar";
const HALT_BIN: &str = "/sbin/halt";

#[derive(Debug, Clone)]
pub struct Config {
    /// Block device to mount, usually taken from the `DEVNAME`
    /// environment variable set by udev. `None` is a fatal startup
    /// condition.
    pub device: Option<String>,
    pub mount_point: PathBuf,
    pub updater_path: PathBuf,
    pub mount_bin: PathBuf,
    pub umount_bin: PathBuf,
    pub tar_bin: PathBuf,
    pub halt_bin: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            device: None,
            mount_point: PathBuf::from(MOUNT_POINT),
            updater_path: PathBuf::from(UPDATER_PATH),
            mount_bin: PathBuf::from(MOUNT_BIN),
            umount_bin: PathBuf::from(UMOUNT_BIN),
            tar_bin: PathBuf::from(TAR_BIN),
            halt_bin: PathBuf::from(HALT_BIN),
        }
    }
}

impl Config {
    /// Production config with the device name resolved from an explicit
    /// override or the `DEVNAME` environment variable.
    pub fn from_env(device_override: Option<String>) -> Self {
        let device = device_override
            .or_else(|| std::env::var("DEVNAME").ok())
            .filter(|d| !d.is_empty());
        Self {
            device,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_system_paths() {
        let cfg = Config::default();
        assert_eq!(cfg.mount_point, PathBuf::from("/mnt"));
        assert_eq!(cfg.updater_path, PathBuf::from("/usr/bin/pi3g-usbpatcher"));
        assert!(cfg.device.is_none());
    }

    #[test]
    fn explicit_device_wins_over_environment() {
        let cfg = Config::from_env(Some("/dev/sdb1".to_string()));
        assert_eq!(cfg.device.as_deref(), Some("/dev/sdb1"));
    }
}
