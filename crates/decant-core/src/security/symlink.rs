//! Symlink target containment validation.
//!
//! A symlink whose target escapes the target directory is dangerous even
//! though the link file itself lands inside: a later entry in the same
//! archive, or any later write through the link, can use it as a path prefix
//! to reach outside the sandbox. The target is therefore proven contained
//! before extraction, with the same lexical machinery as entry paths.

use crate::ArchiveError;
use crate::DestDir;
use crate::Result;
use std::path::Path;

use super::path::normalize_lexically;

/// Proves that a symlink's raw target stays inside `dest`.
///
/// `link` is the symlink's own archive-relative path, already proven
/// contained; `target` is the raw, unresolved target text from the listing.
///
/// # Validation Steps
///
/// 1. Reject immediately if the raw target is absolute — such targets
///    escape by construction.
/// 2. Resolve the target lexically relative to the link's own parent
///    directory inside the target tree (not relative to `dest` itself): for
///    link `a/b/link` with target `../../etc`, resolution starts from
///    `dest/a/b/`.
/// 3. Apply the same whole-component containment rule as entry paths.
///
/// # Errors
///
/// Returns `UnsafeSymlink` carrying the link path and the raw target.
///
/// # Examples
///
/// ```no_run
/// use decant_core::DestDir;
/// use decant_core::security::ensure_symlink_contained;
/// use std::path::Path;
/// use std::path::PathBuf;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dest = DestDir::new(PathBuf::from("/tmp"))?;
///
/// // Internal relative target
/// ensure_symlink_contained(Path::new("a/b/link"), Path::new("../file.txt"), &dest)?;
///
/// // Escaping target
/// let result = ensure_symlink_contained(Path::new("link"), Path::new("../../outside"), &dest);
/// assert!(result.is_err());
/// # Ok(())
/// # }
/// ```
pub fn ensure_symlink_contained(link: &Path, target: &Path, dest: &DestDir) -> Result<()> {
    let reject = || ArchiveError::UnsafeSymlink {
        path: link.to_path_buf(),
        target: target.to_path_buf(),
    };

    if target.is_absolute() || target.has_root() {
        return Err(reject());
    }

    let link_parent = link.parent().unwrap_or_else(|| Path::new(""));
    let resolved = normalize_lexically(&dest.as_path().join(link_parent).join(target));

    if resolved.starts_with(dest.as_path()) {
        Ok(())
    } else {
        Err(reject())
    }
}
