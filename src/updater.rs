//! The update pipeline.
//!
//! Strictly sequential: mount, discover, preview, self-update guard,
//! extract, unmount, halt. Every failure is terminal for the run; after
//! a successful mount each abort path attempts exactly one best-effort
//! unmount before returning.

use std::path::Path;

use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::error::UpdateError;
use crate::{archive, discovery, mount, power, self_update};

pub struct Updater {
    cfg: Config,
}

impl Updater {
    pub fn new(cfg: Config) -> Self {
        Self { cfg }
    }

    /// Runs the whole pipeline once. No retries anywhere; on success
    /// the device is halting by the time this returns.
    pub fn run(&self) -> Result<(), UpdateError> {
        let device = self.cfg.device.clone().ok_or(UpdateError::DeviceMissing)?;
        info!("Device found: {device}");

        mount::mount(&self.cfg, &device).map_err(|source| UpdateError::Mount {
            device: device.clone(),
            source,
        })?;
        debug!(
            "Mounted {device} read-only at {}",
            self.cfg.mount_point.display()
        );

        // The drive is mounted from here on; both outcomes unmount
        // before anything else happens.
        let applied = self.apply();
        mount::unmount_best_effort(&self.cfg, &device);
        applied?;

        info!("Shutting down");
        power::halt(&self.cfg).map_err(|source| UpdateError::Halt { source })
    }

    /// Discovery through extraction, with the drive mounted.
    fn apply(&self) -> Result<(), UpdateError> {
        let patch_name = discovery::find_patch_file(&self.cfg.mount_point)
            .ok_or(UpdateError::NoPatchFound)?;
        let patch_path = self.cfg.mount_point.join(&patch_name);
        info!("Patch file found: {}", patch_path.display());

        let listing =
            archive::list(&self.cfg, &patch_path).map_err(|source| UpdateError::Listing {
                path: patch_path.display().to_string(),
                source,
            })?;
        info!(
            "The following files will be updated:\n{}",
            listing.join("\n")
        );

        self.handle_self_update(&listing)?;

        archive::extract(&self.cfg, &patch_path).map_err(|source| UpdateError::Extraction {
            path: patch_path.display().to_string(),
            source,
        })?;
        info!("Patch applied");
        Ok(())
    }

    /// Unlinks the installed updater binary if the archive is about to
    /// replace it, so extraction recreates the path instead of writing
    /// into the running image.
    fn handle_self_update(&self, listing: &[String]) -> Result<(), UpdateError> {
        let updater_path: &Path = &self.cfg.updater_path;
        let Some(entry) = self_update::updater_entry(listing, updater_path) else {
            return Ok(());
        };

        warn!("Archive contains an update for the updater itself: {entry}");
        if let Err(source) = self_update::remove_installed(updater_path) {
            // Failing here can leave the device non-updatable.
            error!(
                "Could not remove {} before extraction. This is really bad!",
                updater_path.display()
            );
            return Err(UpdateError::SelfUpdateRemoval {
                path: updater_path.display().to_string(),
                source,
            });
        }
        info!("Removed {} ahead of extraction", updater_path.display());
        Ok(())
    }
}
