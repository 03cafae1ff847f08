use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

mod cmd;
mod config;
mod error;
mod resolver;
mod store;
mod utils;

use cmd::format::StyleOptions;
use cmd::{ListArgs, RemoveArgs, SetupArgs};
use error::JumperError;
use store::FileStore;

/// Jumper - bookmark directories and jump back to them.
///
/// Command layout:
///   jumper add              bookmark the current directory
///   jumper list [--json]    show bookmarks with their numbers
///   jumper remove <TOKEN>   drop a bookmark by number or folder name
///   jumper setup [--print]  install the `jp` shell function + completion
///   jumper <TOKEN>          print the bookmarked path (used by `jp`)
///
/// TOKEN is a 1-based number from `jumper list`, a folder base name, or a full
/// stored path. The first match in list order wins.
///
/// Global flags / env:
///   -v / -vv        Increase verbosity (diagnostics go to stderr)
///   -q / --quiet    Errors only
///   --home <DIR>    Data directory (or JUMPER_HOME env; default ~/.jumper)
#[derive(Parser, Debug)]
#[command(
    name = "jumper",
    version,
    author,
    about = "Jumper - bookmark directories and jump back to them",
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Silence all non-error diagnostics
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Data directory holding the bookmark list and shell script
    #[arg(long = "home", global = true, value_name = "DIR")]
    home: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add the current folder to the jump list
    Add,

    /// List bookmarked folders
    List(ListArgs),

    /// Remove a folder by number or name
    Remove(RemoveArgs),

    /// Install the `jp` shell function and bash completion
    Setup(SetupArgs),

    // Any other verb: print the path for a folder number or name
    #[command(external_subcommand)]
    Jump(Vec<String>),
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let level = utils::derive_level(cli.verbose, cli.quiet);
    utils::init_logging(level);

    let Some(command) = cli.command else {
        let err = JumperError::Usage("jumper <command>".into());
        eprintln!("{err}");
        std::process::exit(err.exit_code());
    };

    // A failed jump stays silent: the shell wrapper just doesn't cd.
    let silent = matches!(command, Commands::Jump(_));

    if let Err(e) = run(command, cli.home) {
        let code = report(&e, silent, &mut std::io::stderr().lock());
        std::process::exit(code);
    }
}

/// Write the failure message (unless silent) and return the exit status.
fn report(e: &anyhow::Error, silent: bool, err_out: &mut dyn Write) -> i32 {
    let typed = e.downcast_ref::<JumperError>();
    if silent {
        log_debug!("jump failed: {e:#}");
    } else if let Some(JumperError::NotFound(_) | JumperError::Usage(_)) = typed {
        let _ = writeln!(err_out, "{e}");
    } else {
        let _ = writeln!(err_out, "Error: {e:#}");
    }
    typed.map_or(1, JumperError::exit_code)
}

fn run(command: Commands, home_flag: Option<PathBuf>) -> Result<()> {
    let paths = config::JumperPaths::detect(home_flag)?;
    log_debug!("data directory: {}", paths.data_dir.display());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let style = StyleOptions::detect();

    match command {
        Commands::Setup(args) => {
            cmd::execute_setup(&args, &paths, &mut out)?;
            Ok(())
        }
        Commands::Add => {
            let store = open_store(&paths)?;
            let cwd = config::working_dir()?;
            cmd::execute_add(&store, &cwd, &mut out, &style)
        }
        Commands::List(args) => {
            let store = open_store(&paths)?;
            cmd::execute_list(&args, &store, &mut out, &style)
        }
        Commands::Remove(args) => {
            let store = open_store(&paths)?;
            cmd::execute_remove(&args, &store, &mut out, &style)
        }
        Commands::Jump(argv) => {
            let Some((token, rest)) = argv.split_first() else {
                return Err(JumperError::Usage("jumper <folder-name-or-number>".into()).into());
            };
            if !rest.is_empty() {
                log_trace!("ignoring extra arguments: {rest:?}");
            }
            let store = open_store(&paths)?;
            cmd::execute_jump(token, &store, &mut out)
        }
    }
}

fn open_store(paths: &config::JumperPaths) -> Result<FileStore> {
    let store = FileStore::open(paths.store_file()).context("Error creating config file")?;
    log_trace!("bookmark file: {}", store.path().display());
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn unknown_verb_is_a_jump_token() {
        match parse(&["jumper", "proj"]).command {
            Some(Commands::Jump(argv)) => assert_eq!(argv, vec!["proj"]),
            other => panic!("expected jump, got {other:?}"),
        }
        match parse(&["jumper", "3"]).command {
            Some(Commands::Jump(argv)) => assert_eq!(argv[0], "3"),
            other => panic!("expected jump, got {other:?}"),
        }
    }

    #[test]
    fn known_verbs() {
        assert!(matches!(parse(&["jumper", "add"]).command, Some(Commands::Add)));
        assert!(matches!(parse(&["jumper", "list"]).command, Some(Commands::List(_))));
        assert!(matches!(parse(&["jumper", "setup"]).command, Some(Commands::Setup(_))));
        match parse(&["jumper", "remove", "docs"]).command {
            Some(Commands::Remove(a)) => assert_eq!(a.token, "docs"),
            other => panic!("expected remove, got {other:?}"),
        }
    }

    #[test]
    fn ls_and_rm_are_folder_names() {
        for name in ["ls", "rm"] {
            match parse(&["jumper", name]).command {
                Some(Commands::Jump(argv)) => assert_eq!(argv, vec![name]),
                other => panic!("expected jump for {name}, got {other:?}"),
            }
        }
    }

    fn report_to_string(e: &anyhow::Error, silent: bool) -> (i32, String) {
        let mut buf = Vec::new();
        let code = report(e, silent, &mut buf);
        (code, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn failed_jump_is_silent_and_non_zero() {
        let store = store::MemoryStore::with_paths(&["/a/b"]);
        let mut stdout = Vec::new();
        let err = cmd::execute_jump("nope", &store, &mut stdout).unwrap_err();

        let (code, stderr) = report_to_string(&err, true);
        assert_ne!(code, 0);
        assert!(stdout.is_empty());
        assert!(stderr.is_empty());
    }

    #[test]
    fn not_found_outside_jump_names_token() {
        let err = anyhow::Error::from(JumperError::NotFound("docs".into()));
        assert_eq!(report_to_string(&err, false), (1, "Folder not found: docs\n".into()));
    }

    #[test]
    fn io_errors_are_prefixed_with_context() {
        let io = JumperError::io("read", "/x/folders", std::io::Error::other("boom"));
        let err = anyhow::Error::from(io).context("Error reading folder list");
        let (code, msg) = report_to_string(&err, false);
        assert_eq!(code, 1);
        assert!(msg.starts_with("Error: Error reading folder list: failed to read /x/folders"));
    }

    #[test]
    fn usage_errors_exit_two() {
        let err = anyhow::Error::from(JumperError::Usage("jumper <command>".into()));
        assert_eq!(report_to_string(&err, false), (2, "Usage: jumper <command>\n".into()));
    }

    #[test]
    fn remove_requires_token() {
        let err = Cli::try_parse_from(["jumper", "remove"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn no_arguments_parses_to_no_command() {
        assert!(parse(&["jumper"]).command.is_none());
    }

    #[test]
    fn global_flags_anywhere() {
        let cli = parse(&["jumper", "list", "--home", "/tmp/j", "-vv"]);
        assert_eq!(cli.home, Some(PathBuf::from("/tmp/j")));
        assert_eq!(cli.verbose, 2);
    }
}
