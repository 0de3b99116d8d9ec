//! Whole-archive validation.

use crate::ArchiveConfig;
use crate::DestDir;
use crate::EntryKind;
use crate::Result;
use crate::manifest;
use std::path::Path;

/// Proves that every entry of the archive lands inside `dest`.
///
/// Lists the archive once, parses each listing line in order, and applies
/// the containment check to every entry's own path and the symlink check to
/// every symlink target. Returns the first failure encountered; lines are
/// processed in listing order so error messages are deterministic. Succeeds
/// only if every single entry passes every applicable check.
///
/// Validation is a separate pass from extraction: no extraction subprocess
/// is started anywhere in here, and no byte is written to `dest`.
///
/// # Errors
///
/// - `PathTraversal` / `UnsafeSymlink` for unsafe (or unparseable) entries
/// - `CommandFailed` if the listing invocation exits non-zero
/// - `Io` if the tool cannot be spawned
pub fn validate_archive(archive: &Path, dest: &DestDir, config: &ArchiveConfig) -> Result<()> {
    let listing = manifest::list_entries(archive, config)?;
    validate_listing(&listing, dest)
}

/// Validates an already-obtained listing against `dest`.
///
/// Split out of [`validate_archive`] so the check can be exercised without a
/// subprocess; the parent applies it to the real tool output.
pub(crate) fn validate_listing(listing: &str, dest: &DestDir) -> Result<()> {
    for line in listing.lines().filter(|line| !line.trim().is_empty()) {
        let entry = manifest::parse_line(line);
        super::ensure_contained(&entry.path, dest)?;
        if let EntryKind::Symlink { target } = &entry.kind {
            super::ensure_symlink_contained(&entry.path, target, dest)?;
        }
    }
    Ok(())
}
