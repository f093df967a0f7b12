//! # Storage Layer
//!
//! The [`ContentStore`] trait abstracts "a tree of text files" so the
//! patch engine never touches the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production store over the real site tree,
//!   walking directories with `walkdir`
//! - [`memory::InMemoryStore`]: path → content map for tests; no
//!   persistence, no temp directories needed
//!
//! Every write replaces the full content of the target path: a write
//! either lands whole or fails whole, so a file is never left with a
//! partial transformation.

use crate::error::Result;
use crate::select::SelectFilter;
use std::path::{Path, PathBuf};

pub mod fs;
pub mod memory;

pub trait ContentStore {
    /// Read the full text of a file
    fn read(&self, path: &Path) -> Result<String>;

    /// Replace the full content of a file (creating it if needed)
    fn write(&mut self, path: &Path, content: &str) -> Result<()>;

    /// True if the path currently exists in the store
    fn exists(&self, path: &Path) -> bool;

    /// Enumerate candidate files under the filter's root, sorted.
    /// A non-existent root yields an empty list, not an error.
    fn select(&self, filter: &SelectFilter) -> Result<Vec<PathBuf>>;
}
