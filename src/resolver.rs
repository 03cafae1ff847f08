//! Token → bookmark resolution.
//!
//! A token is either a 1-based index into the list or a folder name. Numeric
//! tokens outside `1..=len` fall through to name matching, so a folder literally
//! named `42` stays reachable. Name matching compares the final path segment or
//! the full path, exact and case-sensitive; the first match in list order wins.

use std::path::Path;

use crate::store::Bookmark;

pub fn resolve(token: &str, list: &[String]) -> Option<Bookmark> {
    if let Ok(n) = token.parse::<usize>()
        && (1..=list.len()).contains(&n)
    {
        return Some(Bookmark {
            index: n,
            path: list[n - 1].clone(),
        });
    }

    list.iter()
        .position(|p| matches_name(p, token))
        .map(|i| Bookmark {
            index: i + 1,
            path: list[i].clone(),
        })
}

fn matches_name(path: &str, token: &str) -> bool {
    path == token || base_name(path) == Some(token)
}

/// Final path segment, trailing separators ignored. `None` for `/`.
pub fn base_name(path: &str) -> Option<&str> {
    Path::new(path).file_name().and_then(|n| n.to_str())
}
