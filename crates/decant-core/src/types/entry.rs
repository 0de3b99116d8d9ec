//! Archive entry model.

use std::path::Path;
use std::path::PathBuf;

/// Kind of entry described by one archive listing line.
///
/// # Examples
///
/// ```
/// use decant_core::EntryKind;
/// use std::path::PathBuf;
///
/// let file = EntryKind::File;
/// let directory = EntryKind::Directory;
/// let symlink = EntryKind::Symlink {
///     target: PathBuf::from("../target"),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Regular file entry.
    File,

    /// Directory entry.
    Directory,

    /// Symbolic link entry.
    ///
    /// The `target` field holds the raw target text from the listing. It has
    /// NOT been validated and must be checked before use.
    Symlink {
        /// The symlink target path (not yet validated).
        target: PathBuf,
    },

    /// Any other entry type (character device, fifo, socket, ...).
    Other,
}

impl EntryKind {
    /// Returns `true` if this is a regular file.
    #[must_use]
    pub const fn is_file(&self) -> bool {
        matches!(self, Self::File)
    }

    /// Returns `true` if this is a directory.
    #[must_use]
    pub const fn is_directory(&self) -> bool {
        matches!(self, Self::Directory)
    }

    /// Returns `true` if this is a symlink.
    #[must_use]
    pub const fn is_symlink(&self) -> bool {
        matches!(self, Self::Symlink { .. })
    }
}

/// One entry of an archive manifest.
///
/// Created transiently while validating a single archive and never
/// persisted. The path is always interpreted relative to the archive root,
/// never to the filesystem root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Archive-root-relative path of the entry (not yet validated).
    pub path: PathBuf,
    /// Entry kind, carrying the raw symlink target where applicable.
    pub kind: EntryKind,
}

impl ArchiveEntry {
    /// Creates an entry from a path and kind.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Returns the raw symlink target, if this entry is a symlink.
    #[must_use]
    pub fn symlink_target(&self) -> Option<&Path> {
        match &self.kind {
            EntryKind::Symlink { target } => Some(target),
            _ => None,
        }
    }
}
