/*!
`remove.rs`

Implements `jumper remove <token>` (alias `rm`). The token is resolved the same
way as a jump target; on a match the entry is dropped, later entries shift up
one index, and the whole list is rewritten.
*/

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use crate::cmd::format::{Role, StyleOptions, color};
use crate::error::JumperError;
use crate::log_debug;
use crate::resolver::resolve;
use crate::store::BookmarkStore;

/// CLI arguments for `jumper remove <token>`
#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Folder number (from `jumper list`) or folder name
    #[arg(value_name = "FOLDER-NAME-OR-NUMBER")]
    pub token: String,
}

pub fn execute_remove(
    args: &RemoveArgs,
    store: &dyn BookmarkStore,
    out: &mut dyn Write,
    style: &StyleOptions,
) -> Result<()> {
    let mut folders = store.load_all().context("Error reading folder list")?;

    let Some(hit) = resolve(&args.token, &folders) else {
        return Err(JumperError::NotFound(args.token.clone()).into());
    };
    log_debug!("removing #{} {}", hit.index, hit.path);

    let removed = folders.remove(hit.index - 1);
    store
        .rewrite(&folders)
        .context("Error writing to config file")?;

    writeln!(out, "Removed folder: {}", color(Role::Success, removed, style))?;
    Ok(())
}
