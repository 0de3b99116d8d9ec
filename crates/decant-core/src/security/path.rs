//! Path containment validation.
//!
//! Resolution here is deliberately lexical: the entries being validated do
//! not exist on disk yet, so `canonicalize()` and friends are off the table.
//! `.` and `..` segments are collapsed at the string level and the result is
//! compared against the canonical target directory.

use crate::ArchiveError;
use crate::DestDir;
use crate::Result;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

/// Proves that `candidate`, an archive-relative path, lands inside `dest`.
///
/// # Validation Steps
///
/// 1. Reject outright if the path is empty, starts with a root marker, or
///    contains a literal `..` segment anywhere. This unconditional check
///    also guards against parser edge cases.
/// 2. Lexically join `dest` and the candidate, collapsing `.` segments (no
///    filesystem syscalls). `dest` is already canonical.
/// 3. Accept iff the resolved path equals `dest` or is a proper descendant.
///    Descendant comparison is whole-component, so a sibling directory that
///    merely shares `dest` as a string prefix (target `/x/bottle`, candidate
///    resolving to `/x/bottle-evil`) never passes.
///
/// # Errors
///
/// Returns `PathTraversal` carrying the original archive-relative path.
///
/// # Examples
///
/// ```no_run
/// use decant_core::DestDir;
/// use decant_core::security::ensure_contained;
/// use std::path::Path;
/// use std::path::PathBuf;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dest = DestDir::new(PathBuf::from("/tmp"))?;
///
/// ensure_contained(Path::new("drive_c/file.txt"), &dest)?;
/// assert!(ensure_contained(Path::new("../evil.txt"), &dest).is_err());
/// assert!(ensure_contained(Path::new("/etc/passwd"), &dest).is_err());
/// # Ok(())
/// # }
/// ```
pub fn ensure_contained(candidate: &Path, dest: &DestDir) -> Result<()> {
    let reject = || ArchiveError::PathTraversal {
        path: candidate.to_path_buf(),
    };

    if candidate.as_os_str().is_empty() {
        return Err(reject());
    }

    for component in candidate.components() {
        match component {
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(reject());
            }
            Component::Normal(_) | Component::CurDir => {}
        }
    }

    let resolved = normalize_lexically(&dest.as_path().join(candidate));
    if resolved.starts_with(dest.as_path()) {
        Ok(())
    } else {
        Err(reject())
    }
}

/// Collapses `.` and `..` segments without consulting the filesystem.
///
/// `..` pops the previous component unconditionally; popping past the root
/// therefore yields a relative path, which can never satisfy a containment
/// check against an absolute target. That is the fail-closed direction for
/// paths with more `..` segments than depth.
pub(crate) fn normalize_lexically(path: &Path) -> PathBuf {
    let mut components = Vec::with_capacity(path.components().count());

    for component in path.components() {
        match component {
            Component::ParentDir => {
                components.pop();
            }
            Component::CurDir => {}
            _ => components.push(component),
        }
    }

    components.iter().collect()
}
