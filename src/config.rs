//! Data directory resolution.
//!
//! Precedence: `--home <DIR>` > `JUMPER_HOME` (non-blank) > `<user home>/.jumper`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub const DATA_DIR_NAME: &str = ".jumper";
pub const STORE_FILE_NAME: &str = "folders";
pub const SCRIPT_FILE_NAME: &str = "jumper.sh";
pub const HOME_ENV: &str = "JUMPER_HOME";

/// Shell init files `setup` considers, relative to the user home, in order.
pub const RC_CANDIDATES: &[&str] = &[".bashrc", ".bash_aliases"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumperPaths {
    /// User home (where shell init files live), when one can be determined.
    pub home: Option<PathBuf>,
    pub data_dir: PathBuf,
}

impl JumperPaths {
    /// Resolve from the process environment.
    pub fn detect(flag: Option<PathBuf>) -> Result<Self> {
        Self::from_parts(dirs::home_dir(), flag, std::env::var_os(HOME_ENV))
    }

    /// The user home is only required for the default data directory.
    pub fn from_parts(
        home: Option<PathBuf>,
        flag: Option<PathBuf>,
        env: Option<OsString>,
    ) -> Result<Self> {
        let explicit = flag.or_else(|| {
            env.filter(|v| !v.to_string_lossy().trim().is_empty())
                .map(PathBuf::from)
        });
        let data_dir = match explicit {
            Some(dir) => dir,
            None => home
                .as_ref()
                .map(|h| h.join(DATA_DIR_NAME))
                .context("Error getting home directory")?,
        };
        Ok(Self { home, data_dir })
    }

    pub fn store_file(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE_NAME)
    }

    pub fn script_file(&self) -> PathBuf {
        self.data_dir.join(SCRIPT_FILE_NAME)
    }

    /// Empty when the user home is unknown.
    pub fn rc_candidates(&self) -> Vec<PathBuf> {
        let Some(home) = &self.home else {
            return Vec::new();
        };
        RC_CANDIDATES.iter().map(|f| home.join(f)).collect()
    }
}

/// The directory to bookmark for `add`.
///
/// `$PWD` wins when it is absolute and refers to the same directory as the
/// process working directory, keeping symlinked spellings intact.
pub fn working_dir() -> Result<String> {
    let cwd = std::env::current_dir().context("Error getting current directory")?;
    let chosen = std::env::var_os("PWD")
        .map(PathBuf::from)
        .filter(|pwd| pwd.is_absolute() && same_file(pwd, &cwd))
        .unwrap_or(cwd);
    chosen
        .into_os_string()
        .into_string()
        .map_err(|p| anyhow::anyhow!("current directory is not valid UTF-8: {}", p.to_string_lossy()))
}

#[cfg(unix)]
fn same_file(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;
    match (std::fs::metadata(a), std::fs::metadata(b)) {
        (Ok(ma), Ok(mb)) => ma.dev() == mb.dev() && ma.ino() == mb.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn same_file(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(ca), Ok(cb)) => ca == cb,
        _ => false,
    }
}
