use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{BookmarkStore, parse_entries};
use crate::error::{JumperError, Result};
use crate::log_trace;

/// Bookmark list backed by a UTF-8 text file, one path per line.
///
/// No locking: two concurrent mutations may race and the last rewrite wins.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open the store at `path`, creating the parent directory and an empty
    /// file when missing. Existing content is never truncated.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|e| JumperError::io("create directory", dir, e))?;
        }
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| JumperError::io("create", &path, e))?;
        log_trace!("store ready at {}", path.display());
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BookmarkStore for FileStore {
    fn load_all(&self) -> Result<Vec<String>> {
        let content =
            fs::read_to_string(&self.path).map_err(|e| JumperError::io("read", &self.path, e))?;
        Ok(parse_entries(&content))
    }

    fn append(&self, path: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| JumperError::io("open", &self.path, e))?;
        writeln!(file, "{path}").map_err(|e| JumperError::io("write", &self.path, e))
    }

    fn rewrite(&self, paths: &[String]) -> Result<()> {
        let mut buf = String::with_capacity(paths.iter().map(|p| p.len() + 1).sum());
        for p in paths {
            buf.push_str(p);
            buf.push('\n');
        }
        fs::write(&self.path, buf).map_err(|e| JumperError::io("write", &self.path, e))
    }
}
