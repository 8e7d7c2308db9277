//! Patch archive discovery on the mounted drive.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

/// Naming convention for patch archives. Case-sensitive, matched
/// against the file name only.
static PATCH_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^pi3g-patch-.+\.(tgz|tar\.gz)$").expect("static regex"));

/// Scans the mount point's immediate entries for a patch archive and
/// returns the first matching file name.
///
/// Non-recursive, first match wins; the order among several candidates
/// is whatever the directory iterator yields. A read failure on the
/// mount point is treated the same as an empty drive: the caller
/// reports "no patch" either way.
pub fn find_patch_file(mount_point: &Path) -> Option<String> {
    let entries = fs::read_dir(mount_point).ok()?;
    entries
        .flatten()
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .find(|name| PATCH_NAME.is_match(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) {
        File::create(dir.path().join(name)).unwrap();
    }

    #[test]
    fn finds_tgz_archive() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp, "pi3g-patch-1.0.tgz");
        assert_eq!(
            find_patch_file(tmp.path()).as_deref(),
            Some("pi3g-patch-1.0.tgz")
        );
    }

    #[test]
    fn finds_tar_gz_archive() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp, "pi3g-patch-bar.tar.gz");
        assert_eq!(
            find_patch_file(tmp.path()).as_deref(),
            Some("pi3g-patch-bar.tar.gz")
        );
    }

    #[test]
    fn empty_drive_yields_none() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(find_patch_file(tmp.path()), None);
    }

    #[test]
    fn rejects_wrong_extension_and_wrong_prefix() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp, "pi3g-patch-foo.zip");
        touch(&tmp, "notpi3g-patch-x.tgz");
        touch(&tmp, "pi3g-patch-.tgz"); // needs at least one char after the dash
        touch(&tmp, "PI3G-PATCH-1.tgz"); // case-sensitive
        assert_eq!(find_patch_file(tmp.path()), None);
    }

    #[test]
    fn ignores_non_matching_neighbours() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp, "README.txt");
        touch(&tmp, "pi3g-patch-2.1.tar.gz");
        assert_eq!(
            find_patch_file(tmp.path()).as_deref(),
            Some("pi3g-patch-2.1.tar.gz")
        );
    }

    #[test]
    fn unreadable_mount_point_is_treated_as_empty() {
        assert_eq!(find_patch_file(Path::new("/nonexistent/mnt")), None);
    }
}
