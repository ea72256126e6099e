//! Git integration layer for hookset
//!
//! Locates the repository root that hook script discovery is anchored to.

pub mod hooks;

use crate::config::ConfigLayer;
use crate::error::{HookError, Result};
use git2::Repository;
use std::path::{Path, PathBuf};

/// Locates the repository root for a (partially merged) configuration
pub trait RepoRootLocator {
    fn locate(&self, config: &ConfigLayer) -> Result<PathBuf>;
}

/// [`RepoRootLocator`] that asks git2 to discover the repository
#[derive(Debug, Default, Clone, Copy)]
pub struct GitRootResolver;

impl GitRootResolver {
    /// Resolve the repository root starting at `projectPath`, or the
    /// working directory when none is configured
    pub fn resolve(config: &ConfigLayer) -> Result<PathBuf> {
        let start = match &config.project_path {
            Some(path) => absolutize(path)?,
            None => std::env::current_dir()?,
        };
        Self::discover_from(&start)
    }

    /// Walk up from `start` until a repository is found
    pub fn discover_from(start: &Path) -> Result<PathBuf> {
        let repo = Repository::discover(start).map_err(|source| {
            HookError::RepositoryRootNotFound {
                start: start.to_path_buf(),
                source,
            }
        })?;

        // Bare repositories have no working tree; hooks live next to the objects
        let root = repo.workdir().unwrap_or_else(|| repo.path());
        let root = root.canonicalize()?;
        tracing::debug!("Repository root: {}", root.display());
        Ok(root)
    }
}

impl RepoRootLocator for GitRootResolver {
    fn locate(&self, config: &ConfigLayer) -> Result<PathBuf> {
        Self::resolve(config)
    }
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
