/*!
`jump.rs`

Default verb: any first argument that is not a known command is a jump token.

Output contract with the `jp` shell function, which runs `target=$(jumper "$1")`
and only `cd`s when the exit status is zero:
  - success: the resolved path on stdout, no trailing newline, nothing else
  - failure: nothing on stdout, non-zero exit (decided by `main`)
*/

use std::io::Write;

use anyhow::{Context, Result};

use crate::error::JumperError;
use crate::log_debug;
use crate::resolver::resolve;
use crate::store::BookmarkStore;

pub fn execute_jump(token: &str, store: &dyn BookmarkStore, out: &mut dyn Write) -> Result<()> {
    let folders = store.load_all().context("Error reading folder list")?;

    let hit = resolve(token, &folders).ok_or_else(|| JumperError::NotFound(token.to_string()))?;
    log_debug!("'{token}' -> #{} {}", hit.index, hit.path);

    out.write_all(hit.path.as_bytes())?;
    out.flush()?;
    Ok(())
}
