//! High-level public API: validate-then-extract and create.

use crate::ArchiveConfig;
use crate::DestDir;
use crate::Result;
use crate::archive;
use crate::security;
use std::path::Path;

/// Safely extracts `archive_path` into `destination`.
///
/// Runs two strict passes: first every entry of the archive listing is
/// proven to land inside `destination` (including every symlink target),
/// and only after 100% of entries pass does extraction start. There is no
/// interleaving and no early extraction of safe-looking entries; on any
/// validation failure nothing has been written.
///
/// The whole sequence is synchronous and blocking. Callers needing
/// responsiveness should run it off their primary thread; independent
/// archive operations may run concurrently, sharing no state.
///
/// # Errors
///
/// - `PathTraversal` — an entry's path is absolute, contains `..`,
///   resolves outside `destination`, or its listing line was unparseable
/// - `UnsafeSymlink` — a symlink target resolves outside `destination`
/// - `CommandFailed` — the archive tool exited non-zero
/// - `Io` — the destination is invalid or the tool could not be spawned
///
/// # Examples
///
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// decant_core::untar("bottle.tar.gz", "/Users/x/Bottles/b1")?;
/// # Ok(())
/// # }
/// ```
pub fn untar<P: AsRef<Path>, Q: AsRef<Path>>(archive_path: P, destination: Q) -> Result<()> {
    untar_with(archive_path, destination, &ArchiveConfig::default())
}

/// [`untar`] with an explicit [`ArchiveConfig`].
pub fn untar_with<P: AsRef<Path>, Q: AsRef<Path>>(
    archive_path: P,
    destination: Q,
    config: &ArchiveConfig,
) -> Result<()> {
    let archive_path = archive_path.as_ref();
    let dest = DestDir::new(destination.as_ref())?;

    security::validate_archive(archive_path, &dest, config)?;
    archive::extract(archive_path, &dest, config)
}

/// Compresses `source_dir` into a gzipped archive at `archive_path`.
///
/// # Errors
///
/// Returns `Io` if `source_dir` is not a directory and `CommandFailed` if
/// the archive tool exits non-zero.
///
/// # Examples
///
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// decant_core::tar("/Users/x/Bottles/b1", "bottle.tar.gz")?;
/// # Ok(())
/// # }
/// ```
pub fn tar<P: AsRef<Path>, Q: AsRef<Path>>(source_dir: P, archive_path: Q) -> Result<()> {
    tar_with(source_dir, archive_path, &ArchiveConfig::default())
}

/// [`tar`] with an explicit [`ArchiveConfig`].
pub fn tar_with<P: AsRef<Path>, Q: AsRef<Path>>(
    source_dir: P,
    archive_path: Q,
    config: &ArchiveConfig,
) -> Result<()> {
    archive::create(source_dir.as_ref(), archive_path.as_ref(), config)
}
