//! Archive manifest listing and parsing.
//!
//! The external tool only exposes a textual manifest, not structured data,
//! so the manifest is treated as an untrusted grammar. All knowledge of the
//! listing format lives behind [`parser::parse_line`] so the format
//! assumptions can be revisited without touching validation logic.

pub mod lister;
pub mod parser;

pub use lister::list_entries;
pub use parser::parse_line;
