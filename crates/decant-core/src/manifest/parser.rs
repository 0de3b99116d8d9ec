//! Parsing of verbose listing lines into [`ArchiveEntry`] values.
//!
//! One line describes one entry:
//!
//! ```text
//! <permissions> <links> <owner> <group> <size> <timestamp> <path>[ -> <target>]
//! ```
//!
//! The column layout is not fixed: owner and group names vary in width and
//! archive tools switch timestamp format based on file age. The path field is
//! therefore located by finding the first timestamp token, scanning from the
//! left; everything after it is the path.

use crate::ArchiveEntry;
use crate::EntryKind;
use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

/// Separator between a symlink's path and its raw target in the listing.
const SYMLINK_SEPARATOR: &str = " -> ";

/// Timestamp token followed by whitespace, in any of the recognized shapes:
///
/// - `Mon DD HH:MM[:SS]` — BSD short form, files younger than six months
/// - `Mon DD YYYY` — BSD long form, older files
/// - `YYYY-MM-DD HH:MM[:SS]` — GNU form
#[allow(clippy::expect_used)]
static TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        (?:
            (?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)
            \s+\d{1,2}\s+
            (?: \d{1,2}:\d{2}(?::\d{2})?   # short form: time of day
              | \d{4}                      # long form: 4-digit year
            )
          |
            \d{4}-\d{2}-\d{2}\s+\d{1,2}:\d{2}(?::\d{2})?
        )
        \s+",
    )
    .expect("timestamp pattern is valid")
});

/// Parses one verbose listing line into an [`ArchiveEntry`].
///
/// Parsing is fail-closed: a line whose timestamp/path pattern cannot be
/// located — or a symlink line with no ` -> ` separator, leaving the target
/// unknowable — is converted into a synthetic entry whose path begins with
/// `../`. Such an entry is guaranteed to be rejected by the containment
/// check, so an attacker cannot hide a malicious entry by making its line
/// unparseable. No line is ever silently dropped.
///
/// # Examples
///
/// ```
/// use decant_core::EntryKind;
/// use decant_core::manifest::parse_line;
/// use std::path::Path;
///
/// let entry = parse_line("-rw-r--r--  0 user group 1024 Jan  5 12:30 drive_c/file.txt");
/// assert_eq!(entry.path, Path::new("drive_c/file.txt"));
/// assert_eq!(entry.kind, EntryKind::File);
/// ```
#[must_use]
pub fn parse_line(line: &str) -> ArchiveEntry {
    let Some(m) = TIMESTAMP.find(line) else {
        return poisoned(line);
    };
    let field = line[m.end()..].trim();
    if field.is_empty() {
        return poisoned(line);
    }

    match kind_indicator(line) {
        'l' => {
            let Some((path, target)) = field.split_once(SYMLINK_SEPARATOR) else {
                // A symlink whose target we cannot see cannot be proven safe.
                return poisoned(line);
            };
            ArchiveEntry::new(
                path.trim(),
                EntryKind::Symlink {
                    target: PathBuf::from(target.trim()),
                },
            )
        }
        'd' => ArchiveEntry::new(field, EntryKind::Directory),
        '-' => ArchiveEntry::new(field, EntryKind::File),
        _ => ArchiveEntry::new(field, EntryKind::Other),
    }
}

/// Returns the leading type indicator character of the permission field.
fn kind_indicator(line: &str) -> char {
    line.chars().next().unwrap_or('?')
}

/// Builds a synthetic entry guaranteed to fail the containment check.
///
/// The raw line rides along in the path so the resulting `PathTraversal`
/// error shows what could not be parsed. The `../` prefix is prepended at
/// the string level so even an absolute remainder keeps a `..` segment.
fn poisoned(line: &str) -> ArchiveEntry {
    ArchiveEntry::new(
        PathBuf::from(format!("../{}", line.trim())),
        EntryKind::Other,
    )
}
