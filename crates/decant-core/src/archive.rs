//! Extraction and creation via the external archive tool.

use crate::ArchiveConfig;
use crate::ArchiveError;
use crate::DestDir;
use crate::Result;
use std::ffi::OsString;
use std::path::Path;

/// Extracts the archive into `dest`.
///
/// Must only be called after [`validate_archive`] has succeeded for the
/// same archive and destination. Extraction trusts that validation
/// completely and performs no per-file checks of its own: the validator
/// proved safety for the exact listing this invocation acts on.
///
/// [`validate_archive`]: crate::security::validate_archive
///
/// # Errors
///
/// Returns `CommandFailed` with the tool's combined output if it exits
/// non-zero, or `Io` if it cannot be spawned.
pub fn extract(archive: &Path, dest: &DestDir, config: &ArchiveConfig) -> Result<()> {
    let args: Vec<OsString> = vec![
        OsString::from("-x"),
        OsString::from("-f"),
        archive.as_os_str().to_os_string(),
        OsString::from("-C"),
        dest.as_path().as_os_str().to_os_string(),
    ];
    crate::process::run_checked(config, args)?;
    Ok(())
}

/// Compresses `source_dir` into a gzipped archive at `archive`.
///
/// Archive creation is a trusted, non-adversarial operation: the input is a
/// local directory, not attacker-controlled bytes, so no validation pass is
/// involved. Entries are recorded relative to `source_dir` so a later
/// extraction reproduces the same relative tree.
///
/// # Errors
///
/// Returns `Io` if `source_dir` does not exist or is not a directory, and
/// `CommandFailed` if the tool exits non-zero.
pub fn create(source_dir: &Path, archive: &Path, config: &ArchiveConfig) -> Result<()> {
    if !source_dir.is_dir() {
        return Err(ArchiveError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("source is not a directory: {}", source_dir.display()),
        )));
    }

    let args: Vec<OsString> = vec![
        OsString::from("-c"),
        OsString::from("-z"),
        OsString::from("-f"),
        archive.as_os_str().to_os_string(),
        OsString::from("-C"),
        source_dir.as_os_str().to_os_string(),
        OsString::from("."),
    ];
    crate::process::run_checked(config, args)?;
    Ok(())
}
