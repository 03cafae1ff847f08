/*!
`add.rs`

Bookmarks the working directory. Duplicate detection is a literal string
comparison against stored entries: no trailing-slash, symlink or case
normalization. Stored entries are whitespace-trimmed on load, so the working
directory is trimmed the same way before comparing and appending.
*/

use std::io::Write;

use anyhow::{Context, Result};

use crate::cmd::format::{Role, StyleOptions, color};
use crate::log_debug;
use crate::store::BookmarkStore;

pub fn execute_add(
    store: &dyn BookmarkStore,
    cwd: &str,
    out: &mut dyn Write,
    style: &StyleOptions,
) -> Result<()> {
    let cwd = cwd.trim();
    let folders = store.load_all().context("Error reading folder list")?;

    if folders.iter().any(|f| f == cwd) {
        log_debug!("{cwd} already stored, nothing to do");
        writeln!(
            out,
            "Current folder already in the list: {}",
            color(Role::Warning, cwd, style)
        )?;
        return Ok(());
    }

    store.append(cwd).context("Error writing to config file")?;
    writeln!(
        out,
        "Added current folder to jump list: {}",
        color(Role::Success, cwd, style)
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{FileStore, MemoryStore};

    fn run(store: &MemoryStore, cwd: &str) -> String {
        let mut buf = Vec::new();
        execute_add(store, cwd, &mut buf, &StyleOptions::plain()).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn adds_new_directory() {
        let store = MemoryStore::new();
        let out = run(&store, "/home/u/proj");
        assert_eq!(out, "Added current folder to jump list: /home/u/proj\n");
        assert_eq!(store.snapshot(), vec!["/home/u/proj"]);
    }

    #[test]
    fn second_add_is_a_no_op() {
        let store = MemoryStore::new();
        run(&store, "/home/u/proj");
        let out = run(&store, "/home/u/proj");
        assert_eq!(out, "Current folder already in the list: /home/u/proj\n");
        assert_eq!(store.snapshot(), vec!["/home/u/proj"]);
    }

    #[test]
    fn trailing_slash_is_a_distinct_entry() {
        let store = MemoryStore::with_paths(&["/home/u/proj"]);
        run(&store, "/home/u/proj/");
        assert_eq!(store.snapshot(), vec!["/home/u/proj", "/home/u/proj/"]);
    }

    #[test]
    fn padded_directory_is_added_once_to_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("folders")).unwrap();
        let mut buf = Vec::new();
        for _ in 0..2 {
            execute_add(&store, "/home/u/x ", &mut buf, &StyleOptions::plain()).unwrap();
        }
        assert_eq!(store.load_all().unwrap(), vec!["/home/u/x"]);
        assert!(
            String::from_utf8(buf)
                .unwrap()
                .ends_with("Current folder already in the list: /home/u/x\n")
        );
    }

    #[test]
    fn store_failure_is_reported() {
        let store = MemoryStore::failing();
        let mut buf = Vec::new();
        let err = execute_add(&store, "/x", &mut buf, &StyleOptions::plain()).unwrap_err();
        assert!(err.to_string().contains("Error reading folder list"));
        assert!(buf.is_empty());
    }
}
