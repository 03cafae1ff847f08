use std::cell::RefCell;

use super::BookmarkStore;
use crate::error::{JumperError, Result};

/// In-memory store for command tests. `failing()` simulates an unreadable file.
#[derive(Debug, Default)]
pub struct MemoryStore {
    paths: RefCell<Vec<String>>,
    fail: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paths(paths: &[&str]) -> Self {
        Self {
            paths: RefCell::new(paths.iter().map(|p| p.to_string()).collect()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            paths: RefCell::default(),
            fail: true,
        }
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.paths.borrow().clone()
    }

    fn check(&self) -> Result<()> {
        if self.fail {
            return Err(JumperError::io(
                "read",
                "<memory>",
                std::io::Error::other("simulated failure"),
            ));
        }
        Ok(())
    }
}

impl BookmarkStore for MemoryStore {
    fn load_all(&self) -> Result<Vec<String>> {
        self.check()?;
        Ok(self.snapshot())
    }

    fn append(&self, path: &str) -> Result<()> {
        self.check()?;
        self.paths.borrow_mut().push(path.to_string());
        Ok(())
    }

    fn rewrite(&self, paths: &[String]) -> Result<()> {
        self.check()?;
        *self.paths.borrow_mut() = paths.to_vec();
        Ok(())
    }
}
