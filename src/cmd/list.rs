/*!
`list.rs`

Implements `jumper list` (alias `ls`).

Human output:
    Available folders:
    1. /home/u/proj
    2. /home/u/docs

The bash completion script strips the header and the `N. ` prefix from this
output to build its candidate list, so keep the shape stable.

JSON output shape (`--json`):
{
  "count": 2,
  "folders": [
    { "index": 1, "path": "/home/u/proj" },
    { "index": 2, "path": "/home/u/docs" }
  ]
}
*/

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::cmd::format::{Role, StyleOptions, color};
use crate::store::{Bookmark, BookmarkStore};

pub const LIST_HEADER: &str = "Available folders:";
pub const EMPTY_HINT: &str = "No folders in jump list. Use 'jumper add' to add the current folder.";

/// CLI arguments for `jumper list`
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ListReport {
    count: usize,
    folders: Vec<Bookmark>,
}

pub fn execute_list(
    args: &ListArgs,
    store: &dyn BookmarkStore,
    out: &mut dyn Write,
    style: &StyleOptions,
) -> Result<()> {
    let folders = store.load_all().context("Error reading folder list")?;
    let marks = Bookmark::enumerate(&folders);

    if args.json {
        let report = ListReport {
            count: marks.len(),
            folders: marks,
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    if marks.is_empty() {
        writeln!(out, "{EMPTY_HINT}")?;
        return Ok(());
    }

    writeln!(out, "{}", color(Role::Bold, LIST_HEADER, style))?;
    for m in &marks {
        writeln!(
            out,
            "{} {}",
            color(Role::Primary, format!("{}.", m.index), style),
            m.path
        )?;
    }
    Ok(())
}
