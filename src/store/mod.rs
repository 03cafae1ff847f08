//! Bookmark persistence.
//!
//! The bookmark list is an ordered sequence of absolute paths; position in the
//! sequence is the 1-based index users see and type. Every invocation reads the
//! whole list fresh, so implementations keep no state between calls.
//!
//! `BookmarkStore` is the seam command modules depend on:
//!   - `FileStore`   newline-separated plain text file (production)
//!   - `MemoryStore` in-memory vector (tests)

mod file;
#[cfg(test)]
mod memory;

pub use file::FileStore;
#[cfg(test)]
pub use memory::MemoryStore;

use serde::Serialize;

use crate::error::Result;

/// Read-all / append / rewrite access to the bookmark list.
///
/// Implementations do not deduplicate; callers check membership before `append`.
pub trait BookmarkStore {
    /// All stored paths in insertion order, trimmed, blank entries dropped.
    fn load_all(&self) -> Result<Vec<String>>;

    /// Add one path at the end of the list.
    fn append(&self, path: &str) -> Result<()>;

    /// Replace the stored list with `paths`, preserving their order.
    fn rewrite(&self, paths: &[String]) -> Result<()>;
}

/// A stored path plus its 1-based position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bookmark {
    pub index: usize,
    pub path: String,
}

impl Bookmark {
    /// Number the entries of a loaded list starting at 1.
    pub fn enumerate(paths: &[String]) -> Vec<Bookmark> {
        paths
            .iter()
            .enumerate()
            .map(|(i, p)| Bookmark {
                index: i + 1,
                path: p.clone(),
            })
            .collect()
    }
}

/// Split raw file content into bookmark entries.
pub(crate) fn parse_entries(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}
