//! Subprocess plumbing for the external archive tool.

use crate::ArchiveConfig;
use crate::ArchiveError;
use crate::Result;
use std::ffi::OsStr;
use std::process::Command;
use std::process::Output;

/// Runs the configured archive tool with the given arguments, capturing both
/// stdout and stderr, and fails if the tool exits non-zero.
///
/// A failed invocation is surfaced as `CommandFailed` carrying the combined
/// output; it is never silently treated as an empty result.
pub(crate) fn run_checked<I, S>(config: &ArchiveConfig, args: I) -> Result<Output>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = Command::new(&config.tar_program)
        .args(args)
        .output()
        .map_err(|e| {
            ArchiveError::Io(std::io::Error::new(
                e.kind(),
                format!(
                    "failed to run {}: {e}",
                    config.tar_program.to_string_lossy()
                ),
            ))
        })?;

    if !output.status.success() {
        return Err(ArchiveError::CommandFailed {
            output: combined_output(&output),
        });
    }

    Ok(output)
}

/// Concatenates captured stdout and stderr for diagnostics.
pub(crate) fn combined_output(output: &Output) -> String {
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    text
}
