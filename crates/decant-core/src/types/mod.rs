//! Core types for archive validation.

pub mod dest_dir;
pub mod entry;

pub use dest_dir::DestDir;
pub use entry::ArchiveEntry;
pub use entry::EntryKind;
