//! USB patch updater for pi3g devices.
//!
//! Started by a udev rule when a drive is plugged in. Mounts the drive
//! read-only, looks for a single `pi3g-patch-*.(tgz|tar.gz)` archive,
//! previews it, unpacks it over the root filesystem and halts the
//! device. The binary in `main.rs` is a thin CLI wrapper; everything
//! testable lives here.

pub mod archive;
pub mod config;
pub mod discovery;
pub mod error;
pub mod exec;
pub mod logging;
pub mod mount;
pub mod power;
pub mod self_update;
pub mod updater;

pub use config::Config;
pub use error::UpdateError;
pub use updater::Updater;
