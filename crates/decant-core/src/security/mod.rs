//! Containment validation for archive entries.

pub mod path;
pub mod symlink;
pub mod validator;

pub use path::ensure_contained;
pub use symlink::ensure_symlink_contained;
pub use validator::validate_archive;
