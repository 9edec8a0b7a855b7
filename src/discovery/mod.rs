//! Filesystem discovery
//!
//! Walks a directory tree and picks out the entries that belong in the
//! file list.

pub mod filter;
pub mod walker;

pub use filter::is_listable;
pub use walker::{FileWalker, SkippedEntry, WalkOutcome};
