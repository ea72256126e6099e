//! Glob pattern utilities
//!
//! Ordered glob expansion used by hook script discovery. Results are stable
//! across runs: patterns are evaluated in the order given and directory
//! entries are visited sorted by file name.

use crate::error::{HookError, Result};
use globset::{Glob, GlobBuilder, GlobMatcher};
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Read-only filesystem search used by hook discovery
pub trait FileSearch {
    /// Expand `patterns` (relative to `base_dir`) into matching file paths,
    /// keeping pattern order first and file name order second
    fn search(&self, base_dir: &Path, patterns: &[String]) -> Result<Vec<PathBuf>>;
}

/// [`FileSearch`] backed by `walkdir` and `globset`
#[derive(Debug, Default, Clone, Copy)]
pub struct GlobSearch;

impl FileSearch for GlobSearch {
    fn search(&self, base_dir: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
        let mut matches = Vec::new();
        for pattern in patterns {
            matches.extend(expand_glob_pattern(pattern, base_dir)?);
        }
        Ok(matches)
    }
}

/// Check if a string contains glob pattern characters
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?') || pattern.contains('[') || pattern.contains('{')
}

/// Expand a single glob pattern to matching file paths under `base_dir`
///
/// Only the directory named by the pattern's literal prefix is walked, so a
/// pattern like `scripts/hooks/pre-commit.*` never descends into unrelated
/// parts of the tree.
pub fn expand_glob_pattern<P: AsRef<Path>>(pattern: &str, base_dir: P) -> Result<Vec<PathBuf>> {
    let base_dir = base_dir.as_ref();
    let pattern = pattern.strip_prefix("./").unwrap_or(pattern);
    let (prefix, depth) = split_literal_prefix(pattern);
    let walk_root = base_dir.join(&prefix);

    if !walk_root.is_dir() {
        return Ok(Vec::new());
    }

    let matcher = compile_matcher(pattern)?;
    // A symlinked script counts as a file when its target is one
    let mut walker = WalkDir::new(&walk_root)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name();
    if let Some(depth) = depth {
        walker = walker.max_depth(depth);
    }

    let mut matching_paths = Vec::new();
    for entry in walker.into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let matches = path
            .strip_prefix(base_dir)
            .map(|rel_path| matcher.is_match(rel_path))
            .unwrap_or(false);
        if matches {
            matching_paths.push(path.to_path_buf());
        }
    }

    Ok(matching_paths)
}

/// Compile a pattern where `*` never crosses a path separator
fn compile_matcher(pattern: &str) -> Result<GlobMatcher> {
    let glob: Glob = GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|source| HookError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
    Ok(glob.compile_matcher())
}

/// Split a pattern into the literal directory it starts with and the depth
/// the glob part may reach (`None` when it contains `**`)
fn split_literal_prefix(pattern: &str) -> (PathBuf, Option<usize>) {
    let mut prefix = PathBuf::new();
    let mut components = Path::new(pattern).components().peekable();

    while let Some(component) = components.peek() {
        match component {
            Component::Normal(part) if !is_glob_pattern(&part.to_string_lossy()) => {
                prefix.push(part);
                components.next();
            }
            Component::CurDir => {
                components.next();
            }
            _ => break,
        }
    }

    let rest: Vec<_> = components.collect();
    if rest.iter().any(|c| c.as_os_str() == "**") {
        (prefix, None)
    } else if rest.is_empty() {
        // Fully literal: the last component is the file itself
        let parent = prefix.parent().map(Path::to_path_buf).unwrap_or_default();
        (parent, Some(1))
    } else {
        (prefix, Some(rest.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_is_glob_pattern() {
        assert!(is_glob_pattern("*.rs"));
        assert!(is_glob_pattern("scripts/**/*.js"));
        assert!(is_glob_pattern("test?.txt"));
        assert!(is_glob_pattern("file[123].txt"));
        assert!(!is_glob_pattern("simple.txt"));
        assert!(!is_glob_pattern("scripts/hooks/pre-commit.ts"));
    }

    #[test]
    fn test_split_literal_prefix() {
        assert_eq!(
            split_literal_prefix("scripts/hooks/pre-commit.*"),
            (PathBuf::from("scripts/hooks"), Some(1))
        );
        assert_eq!(
            split_literal_prefix("./scripts/**/*.js"),
            (PathBuf::from("scripts"), None)
        );
        assert_eq!(
            split_literal_prefix("scripts/hooks/run.sh"),
            (PathBuf::from("scripts/hooks"), Some(1))
        );
    }

    #[test]
    fn test_expand_glob_pattern_sorted() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let hooks = temp_dir.path().join("scripts/hooks");
        fs::create_dir_all(&hooks)?;
        fs::write(hooks.join("pre-commit.ts"), "")?;
        fs::write(hooks.join("pre-commit.js"), "")?;
        fs::write(hooks.join("pre-push.js"), "")?;

        let results = expand_glob_pattern("scripts/hooks/pre-commit.*", temp_dir.path())?;
        assert_eq!(
            results,
            vec![hooks.join("pre-commit.js"), hooks.join("pre-commit.ts")]
        );
        Ok(())
    }

    #[test]
    fn test_star_does_not_cross_directories() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let nested = temp_dir.path().join("scripts/hooks/nested");
        fs::create_dir_all(&nested)?;
        fs::write(nested.join("pre-commit.js"), "")?;

        let results = expand_glob_pattern("scripts/hooks/pre-commit.*", temp_dir.path())?;
        assert!(results.is_empty());
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_file_matches() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let hooks = temp_dir.path().join("scripts/hooks");
        fs::create_dir_all(&hooks)?;
        fs::write(temp_dir.path().join("scripts/check.sh"), "")?;
        std::os::unix::fs::symlink("../check.sh", hooks.join("pre-commit.sh"))?;
        std::os::unix::fs::symlink("../missing.sh", hooks.join("pre-push.sh"))?;

        let results = expand_glob_pattern("scripts/hooks/pre-*", temp_dir.path())?;
        assert_eq!(results, vec![hooks.join("pre-commit.sh")]);
        Ok(())
    }

    #[test]
    fn test_missing_directory_yields_nothing() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let results = GlobSearch.search(
            temp_dir.path(),
            &["packages/scripts/src/hooks/pre-push.*".to_string()],
        )?;
        assert!(results.is_empty());
        Ok(())
    }

    #[test]
    fn test_search_keeps_pattern_order() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let base = temp_dir.path();
        fs::create_dir_all(base.join("b"))?;
        fs::create_dir_all(base.join("a"))?;
        fs::write(base.join("b/hook.sh"), "")?;
        fs::write(base.join("a/hook.sh"), "")?;

        let results = GlobSearch.search(base, &["b/hook.*".to_string(), "a/hook.*".to_string()])?;
        assert_eq!(results, vec![base.join("b/hook.sh"), base.join("a/hook.sh")]);
        Ok(())
    }
}
