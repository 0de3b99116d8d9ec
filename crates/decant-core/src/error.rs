//! Error types for bottle archive operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ArchiveError`.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Errors that can occur while validating or extracting a bottle archive.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Path traversal attempt detected.
    ///
    /// Raised when an entry's own path is absolute, contains `..`, resolves
    /// outside the target directory, or could not be parsed from the archive
    /// listing (unparseable lines are folded into this variant by
    /// construction, so there is no separate parse-error branch for callers
    /// to forget).
    #[error("path traversal detected: {path}")]
    PathTraversal {
        /// The archive-relative path that attempted traversal.
        path: PathBuf,
    },

    /// Symlink target resolves outside the target directory.
    #[error("unsafe symlink {path} -> {target}")]
    UnsafeSymlink {
        /// The symlink's own archive-relative path.
        path: PathBuf,
        /// The raw, unresolved target text stored in the archive.
        target: PathBuf,
    },

    /// The external archive tool exited with a non-zero status.
    #[error("archive tool failed: {output}")]
    CommandFailed {
        /// Combined stdout and stderr captured from the tool.
        output: String,
    },
}

impl ArchiveError {
    /// Returns `true` if this error represents a rejected unsafe archive.
    ///
    /// Callers use this to distinguish "unsafe archive rejected" from a
    /// tool or I/O failure when presenting the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use decant_core::ArchiveError;
    /// use std::path::PathBuf;
    ///
    /// let err = ArchiveError::PathTraversal {
    ///     path: PathBuf::from("../etc/passwd"),
    /// };
    /// assert!(err.is_security_violation());
    ///
    /// let err = ArchiveError::CommandFailed {
    ///     output: "tar: truncated input".into(),
    /// };
    /// assert!(!err.is_security_violation());
    /// ```
    #[must_use]
    pub const fn is_security_violation(&self) -> bool {
        matches!(
            self,
            Self::PathTraversal { .. } | Self::UnsafeSymlink { .. }
        )
    }
}
