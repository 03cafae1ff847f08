/*!
Command dispatcher modules.

Layout:
  src/cmd/
    mod.rs      (this file)
    add.rs      (execute_add)
    list.rs     (ListArgs   + execute_list)
    remove.rs   (RemoveArgs + execute_remove)
    jump.rs     (execute_jump, the default verb)
    setup.rs    (SetupArgs  + execute_setup)
    format.rs   (styling helpers for human output)

Conventions:
  - Each verb module exposes one public `execute_*` function returning
    `anyhow::Result`.
  - Store-backed verbs take `&dyn BookmarkStore` and write to a caller
    supplied `Write`, so tests run against `MemoryStore` and a byte buffer.
  - Every invocation loads the list fresh; mutations persist immediately.
*/

pub mod add;
pub mod format;
pub mod jump;
pub mod list;
pub mod remove;
pub mod setup;

pub use add::execute_add;
pub use jump::execute_jump;
pub use list::{ListArgs, execute_list};
pub use remove::{RemoveArgs, execute_remove};
pub use setup::{SetupArgs, execute_setup};
