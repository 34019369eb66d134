//! Path utilities.
//!
//! - [`fs`]: Filesystem path normalization (`normalize_path`, `resolve_path`, `expand_path`)

pub mod fs;

pub use fs::resolve_path;
