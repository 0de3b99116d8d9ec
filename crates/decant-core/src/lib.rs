//! Safe extraction of bottle archives with path-containment validation.
//!
//! `decant-core` extracts untrusted compressed archives (bottle
//! export/import bundles) to a target directory, guaranteeing that no entry
//! — regular file, directory, or symbolic link — can cause data to be
//! written outside that directory. Byte extraction is delegated to the
//! external `tar` tool; this crate's job is proving, before the extraction
//! subprocess ever starts, that every entry in the archive's verbose
//! listing resolves inside the target.
//!
//! Validation is purely lexical (`.`/`..` collapsing at the string level):
//! the entries being checked do not exist on disk yet, so filesystem-backed
//! canonicalization is not an option. Unparseable listing lines are
//! fail-closed — they reject the whole archive rather than being skipped.
//!
//! # Examples
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Export a bottle
//! decant_core::tar("/Users/x/Bottles/b1", "bottle.tar.gz")?;
//!
//! // Import it elsewhere; rejected with a typed error if any entry or
//! // symlink target would land outside the destination
//! decant_core::untar("bottle.tar.gz", "/Users/x/Bottles/b2")?;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod archive;
pub mod config;
pub mod error;
pub mod manifest;
pub mod security;
pub mod types;

mod process;

// Re-export main API types
pub use api::tar;
pub use api::tar_with;
pub use api::untar;
pub use api::untar_with;
pub use config::ArchiveConfig;
pub use error::ArchiveError;
pub use error::Result;

// Re-export types module for easier access
pub use types::ArchiveEntry;
pub use types::DestDir;
pub use types::EntryKind;
