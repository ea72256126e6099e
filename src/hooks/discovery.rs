//! Convention-based hook script discovery
//!
//! A hook without `command` or `file` is looked up as `<hook>.*` in these
//! directories under the repository root, first directory first.

use crate::error::Result;
use crate::shared::FileSearch;
use std::path::{Path, PathBuf};

/// Search directories, highest priority first
pub const DISCOVERY_DIRS: &[&str] = &[
    "scripts/hooks",
    "scripts/src/hooks",
    "packages/scripts/src/hooks",
];

/// Glob patterns (relative to the repository root) for `hook`
pub fn discovery_patterns(hook: &str) -> Vec<String> {
    let name = escape_hook_name(hook);
    DISCOVERY_DIRS
        .iter()
        .map(|dir| format!("{dir}/{name}.*"))
        .collect()
}

/// Escape `hook` so every character matches literally
///
/// `globset::escape` leaves `{`, `}` and `,` alone, which would still turn
/// `pre-{commit,push}` into an alternation.
fn escape_hook_name(hook: &str) -> String {
    let mut escaped = String::with_capacity(hook.len());
    for c in hook.chars() {
        match c {
            '?' | '*' | '[' | ']' | '{' | '}' | ',' => {
                escaped.push('[');
                escaped.push(c);
                escaped.push(']');
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

/// First script found for `hook`, trying patterns in priority order
pub fn discover_script<S: FileSearch + ?Sized>(
    search: &S,
    root: &Path,
    hook: &str,
) -> Result<Option<PathBuf>> {
    for pattern in discovery_patterns(hook) {
        if let Some(found) = search.search(root, std::slice::from_ref(&pattern))?.into_iter().next() {
            tracing::debug!("Discovered {} for hook '{}' via {}", found.display(), hook, pattern);
            return Ok(Some(found));
        }
    }
    Ok(None)
}
