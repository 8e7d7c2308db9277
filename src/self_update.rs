//! Self-update guard.
//!
//! If the archive carries a new copy of this program, the installed
//! binary is unlinked before extraction. The running image stays valid
//! after the unlink; tar then recreates the path instead of overwriting
//! the live inode in place.

use std::fs;
use std::io;
use std::path::Path;

/// Returns the listing entry that resolves to the installed binary, if
/// any.
///
/// An entry matches when removing at most one leading path segment
/// leaves exactly the installed binary's absolute path. Archives list
/// their common top-level directory unstripped here, hence the single
/// tolerated segment.
///
/// `updater_path` must be absolute: its leading `/` is what separates
/// the tolerated segment from the path during suffix matching. With a
/// relative target, `foopi3g-usbpatcher` would match `pi3g-usbpatcher`.
pub fn updater_entry<'a>(listing: &'a [String], updater_path: &Path) -> Option<&'a str> {
    debug_assert!(updater_path.is_absolute());
    let target = updater_path.to_str()?;
    listing
        .iter()
        .map(String::as_str)
        .find(|entry| matches_installed(entry, target))
}

fn matches_installed(entry: &str, target: &str) -> bool {
    match entry.strip_suffix(target) {
        Some(prefix) => !prefix.contains('/'),
        None => false,
    }
}

/// Unlinks the installed binary so extraction can recreate it.
pub fn remove_installed(updater_path: &Path) -> io::Result<()> {
    fs::remove_file(updater_path)
}
