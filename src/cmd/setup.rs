/*!
`setup.rs`

One-time shell wiring:
  1. (over)write `jumper.sh` into the data directory
  2. append a `source` line to the first existing shell init file
     (`.bashrc`, then `.bash_aliases`), unless it already mentions the script
  3. tell the user how to load it in the current shell

`--print` skips all of that and writes the script to stdout.
*/

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use crate::config::JumperPaths;
use crate::{log_debug, log_error};

pub const SHELL_SCRIPT: &str = r#"#!/bin/bash

# Function to jump to a folder
jp() {
    if [ -z "$1" ]; then
        jumper list
        return
    fi

    local target
    target=$(jumper "$1")
    if [ $? -eq 0 ]; then
        cd "$target"
    fi
}

# Folder base names from `jumper list`
_jp_folders() {
    jumper list | grep -v "Available folders:" | sed -n 's/^[0-9]*\. \(.*\)$/\1/p' | while IFS= read -r p; do basename -- "$p"; done
}

# Bash completion for jp / jumper
_jp_complete() {
    local cur prev
    COMPREPLY=()
    cur="${COMP_WORDS[COMP_CWORD]}"
    prev="${COMP_WORDS[COMP_CWORD-1]}"

    if [ "$prev" = "jumper" ]; then
        COMPREPLY=( $(compgen -W "add list remove setup" -- "$cur") )
    elif [ "$prev" = "remove" ] || [ "$prev" = "jp" ]; then
        COMPREPLY=( $(compgen -W "$(_jp_folders)" -- "$cur") )
    fi

    return 0
}

complete -F _jp_complete jp
complete -F _jp_complete jumper
"#;

/// CLI arguments for `jumper setup`
#[derive(Args, Debug, Default)]
pub struct SetupArgs {
    /// Print the shell script to stdout instead of installing it
    #[arg(long)]
    pub print: bool,
}

/// What happened to the shell init files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RcOutcome {
    Appended(String),
    AlreadyPresent(String),
    NoCandidate,
}

pub fn execute_setup(args: &SetupArgs, paths: &JumperPaths, out: &mut dyn Write) -> Result<RcOutcome> {
    if args.print {
        out.write_all(SHELL_SCRIPT.as_bytes())?;
        return Ok(RcOutcome::NoCandidate);
    }

    let script_path = paths.script_file();
    fs::create_dir_all(&paths.data_dir)
        .with_context(|| format!("Error creating config directory {}", paths.data_dir.display()))?;
    fs::write(&script_path, SHELL_SCRIPT).context("Error creating jumper.sh")?;
    log_debug!("wrote {}", script_path.display());

    let script = script_path.to_string_lossy();
    let outcome = wire_rc_files(&paths.rc_candidates(), &script);
    match &outcome {
        RcOutcome::Appended(rc) => writeln!(out, "Added jumper configuration to {rc}")?,
        RcOutcome::AlreadyPresent(rc) => {
            writeln!(out, "Jumper configuration already exists in {rc}")?
        }
        RcOutcome::NoCandidate => log_debug!("no shell init file updated"),
    }

    writeln!(out, "Setup complete! Please restart your shell or run:")?;
    writeln!(out, "source {}", shell_words::quote(&script))?;
    Ok(outcome)
}

/// First existing candidate wins; read or write failures move on to the next.
fn wire_rc_files(candidates: &[std::path::PathBuf], script: &str) -> RcOutcome {
    let source_line = format!(
        "\n# Jumper configuration\nsource {}\n",
        shell_words::quote(script)
    );

    for rc in candidates.iter().filter(|p| p.exists()) {
        let name = display_name(rc);
        let content = match fs::read_to_string(rc) {
            Ok(c) => c,
            Err(e) => {
                log_error!("Error reading {name}: {e}");
                continue;
            }
        };

        if content.contains(script) {
            return RcOutcome::AlreadyPresent(name);
        }

        let appended = OpenOptions::new()
            .append(true)
            .open(rc)
            .and_then(|mut f| f.write_all(source_line.as_bytes()));
        match appended {
            Ok(()) => return RcOutcome::Appended(name),
            Err(e) => log_error!("Error writing to {name}: {e}"),
        }
    }
    RcOutcome::NoCandidate
}

fn display_name(p: &Path) -> String {
    p.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| p.display().to_string())
}
