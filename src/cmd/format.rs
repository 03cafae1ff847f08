/*!
format.rs

Styling helpers for human-facing `jumper` output.

  - Color only when stdout is a terminal and `NO_COLOR` is unset. `list` output
    is parsed by the bash completion script, so piped output must stay plain.
  - Helpers return strings; they never print.
  - `--json` and jump output never go through here.
*/

use std::io::IsTerminal;

#[derive(Debug, Clone)]
pub struct StyleOptions {
    pub use_color: bool,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self::detect()
    }
}

impl StyleOptions {
    pub fn detect() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some();
        StyleOptions {
            use_color: !no_color && std::io::stdout().is_terminal(),
        }
    }

    #[cfg(test)]
    pub fn plain() -> Self {
        StyleOptions { use_color: false }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Role {
    Primary,
    Success,
    Warning,
    Bold,
}

pub fn color(role: Role, text: impl AsRef<str>, style: &StyleOptions) -> String {
    if !style.use_color {
        return text.as_ref().to_string();
    }
    let code = match role {
        Role::Primary => "38;5;45", // cyan-ish
        Role::Success => "38;5;82", // green
        Role::Warning => "38;5;214", // orange
        Role::Bold => "1",
    };
    format!("\x1b[{code}m{}\x1b[0m", text.as_ref())
}
