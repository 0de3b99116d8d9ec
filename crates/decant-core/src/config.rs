//! Configuration for archive tool invocation.

use std::ffi::OsStr;
use std::ffi::OsString;

/// Configuration controlling how the external archive tool is invoked.
///
/// The tool itself is an external collaborator: listing, extraction, and
/// creation are all delegated to it as blocking subprocess calls. The only
/// thing this library decides is *where* extracted bytes may land, so the
/// configuration surface is deliberately small.
///
/// # Examples
///
/// ```
/// use decant_core::ArchiveConfig;
///
/// // Use `tar` from PATH
/// let config = ArchiveConfig::default();
///
/// // Point at a specific binary (e.g. a bundled or stub tool)
/// let custom = ArchiveConfig::with_program("/usr/local/bin/gtar");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveConfig {
    /// Program invoked for listing, extraction, and creation.
    pub tar_program: OsString,
}

impl Default for ArchiveConfig {
    /// Uses `tar` resolved from `PATH`.
    fn default() -> Self {
        Self {
            tar_program: OsString::from("tar"),
        }
    }
}

impl ArchiveConfig {
    /// Creates a configuration invoking the given program instead of `tar`.
    #[must_use]
    pub fn with_program(program: impl AsRef<OsStr>) -> Self {
        Self {
            tar_program: program.as_ref().to_os_string(),
        }
    }
}
