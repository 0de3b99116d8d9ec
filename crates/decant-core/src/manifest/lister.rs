//! Verbose listing of archive contents.

use crate::ArchiveConfig;
use crate::Result;
use crate::process::run_checked;
use std::ffi::OsString;
use std::path::Path;

/// Returns the raw verbose listing of the archive, one line per entry.
///
/// Invokes the archive tool in list mode (`-t -v -f`) — never in extract
/// mode — capturing both stdout and stderr.
///
/// # Errors
///
/// Returns `CommandFailed` with the tool's combined output if it exits
/// non-zero, or `Io` if it cannot be spawned. A failed listing is never
/// treated as "archive has zero entries".
pub fn list_entries(archive: &Path, config: &ArchiveConfig) -> Result<String> {
    let args: Vec<OsString> = vec![
        OsString::from("-t"),
        OsString::from("-v"),
        OsString::from("-f"),
        archive.as_os_str().to_os_string(),
    ];
    let output = run_checked(config, args)?;
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
