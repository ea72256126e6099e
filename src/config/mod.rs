//! Configuration management for hookset
//!
//! This module reads the project configuration (`hookset.toml`,
//! `.hooksetrc`, ...), layers environment and caller overrides on top,
//! resolves every declared hook to a concrete command and fills in defaults.
//!
//! ```yaml
//! noCi: true
//! hooks:
//!   pre-commit:
//!     command: cargo fmt --check
//!   pre-push:
//!     file: scripts/hooks/pre-push.ts
//!     noCi: false
//! ```

pub mod core;
mod overrides;
pub mod smart_load;
mod validate;

pub use validate::{invalid_keys, is_valid_key, validate_config, valid_git_hooks, valid_options};

use crate::error::{HookError, Result};
use crate::git::{GitRootResolver, RepoRootLocator};
use crate::hooks::HookResolver;
use crate::shared::{FileSearch, GlobSearch};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Default for the global and per-hook `noCi` flag
pub const DEFAULT_NO_CI: bool = true;
/// Default for the global and per-hook `ciOnly` flag
pub const DEFAULT_CI_ONLY: bool = false;
/// Default for `preserveUnused`
pub const DEFAULT_PRESERVE_UNUSED: bool = false;

/// A partial configuration as read from one source
///
/// The discovered file, the environment and caller overrides all share this
/// shape; see [`ConfigLayer::layered`] for how they combine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigLayer {
    /// Hook name to options; `None` values mean "declared without options"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hooks: Option<BTreeMap<String, Option<HookOptions>>>,

    #[serde(default, alias = "project_path", skip_serializing_if = "Option::is_none")]
    pub project_path: Option<PathBuf>,

    #[serde(default, alias = "preserve_unused", skip_serializing_if = "Option::is_none")]
    pub preserve_unused: Option<bool>,

    #[serde(default, alias = "no_ci", skip_serializing_if = "Option::is_none")]
    pub no_ci: Option<bool>,

    #[serde(default, alias = "ci_only", skip_serializing_if = "Option::is_none")]
    pub ci_only: Option<bool>,

    /// Command prefix used to run hook script files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runner: Option<String>,
}

/// The configuration exactly as the user wrote it
pub type RawUserConfig = ConfigLayer;

impl ConfigLayer {
    /// Options declared for `hook`, treating `null` and `{}` as undeclared
    pub fn hook_options(&self, hook: &str) -> Option<&HookOptions> {
        self.hooks
            .as_ref()?
            .get(hook)?
            .as_ref()
            .filter(|options| !options.is_empty())
    }

    /// Names of all hooks declared in this layer
    pub fn hook_names(&self) -> impl Iterator<Item = &str> {
        self.hooks.iter().flat_map(|hooks| hooks.keys().map(String::as_str))
    }
}

/// Per-hook options from the configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HookOptions {
    /// Literal shell command
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Script to run through the package runner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    #[serde(default, alias = "no_ci", skip_serializing_if = "Option::is_none")]
    pub no_ci: Option<bool>,

    #[serde(default, alias = "ci_only", skip_serializing_if = "Option::is_none")]
    pub ci_only: Option<bool>,
}

/// Where a hook's command comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookSource {
    ExplicitCommand(String),
    ScriptFile(PathBuf),
    Discover,
}

impl HookOptions {
    pub fn is_empty(&self) -> bool {
        self == &HookOptions::default()
    }

    /// Decide the command source; `command` and `file` are mutually exclusive
    pub fn source(&self, hook: &str) -> Result<HookSource> {
        match (&self.command, &self.file) {
            (Some(_), Some(_)) => Err(HookError::AmbiguousHookSource {
                hook: hook.to_string(),
            }),
            (Some(command), None) => Ok(HookSource::ExplicitCommand(command.clone())),
            (None, Some(file)) => Ok(HookSource::ScriptFile(file.clone())),
            (None, None) => Ok(HookSource::Discover),
        }
    }
}

/// A hook after resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedHookConfig {
    pub command: String,
    pub no_ci: bool,
    pub ci_only: bool,
}

impl ResolvedHookConfig {
    /// Apply defaults, then any per-hook overrides
    pub fn new(command: String, options: Option<&HookOptions>) -> Self {
        Self {
            command,
            no_ci: options.and_then(|o| o.no_ci).unwrap_or(DEFAULT_NO_CI),
            ci_only: options.and_then(|o| o.ci_only).unwrap_or(DEFAULT_CI_ONLY),
        }
    }
}

/// The fully merged configuration handed to the installer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedConfig {
    pub no_ci: bool,
    pub ci_only: bool,
    pub preserve_unused: bool,
    pub project_path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runner: Option<String>,
    pub hooks: BTreeMap<String, ResolvedHookConfig>,
}

impl NormalizedConfig {
    /// Fill unset fields of `layer` with defaults and attach resolved hooks
    fn from_layer(
        layer: ConfigLayer,
        cwd: PathBuf,
        hooks: BTreeMap<String, ResolvedHookConfig>,
    ) -> Self {
        Self {
            no_ci: layer.no_ci.unwrap_or(DEFAULT_NO_CI),
            ci_only: layer.ci_only.unwrap_or(DEFAULT_CI_ONLY),
            preserve_unused: layer.preserve_unused.unwrap_or(DEFAULT_PRESERVE_UNUSED),
            project_path: layer.project_path.unwrap_or(cwd),
            runner: layer.runner,
            hooks,
        }
    }
}

/// Builds a [`NormalizedConfig`] from the discovered file, the environment
/// and caller overrides
pub struct ConfigMerger<L = GitRootResolver, S = GlobSearch> {
    locator: L,
    search: S,
}

impl Default for ConfigMerger {
    fn default() -> Self {
        Self::new(GitRootResolver, GlobSearch)
    }
}

impl<L: RepoRootLocator, S: FileSearch> ConfigMerger<L, S> {
    pub fn new(locator: L, search: S) -> Self {
        Self { locator, search }
    }

    /// Merge all configuration sources, using the process working directory
    pub fn get_config(&self, overrides: Option<ConfigLayer>) -> Result<NormalizedConfig> {
        let cwd = std::env::current_dir()?;
        self.get_config_in(&cwd, overrides)
    }

    /// Merge all configuration sources as if running from `cwd`
    pub fn get_config_in(
        &self,
        cwd: &Path,
        overrides: Option<ConfigLayer>,
    ) -> Result<NormalizedConfig> {
        let user_config = self.user_config(cwd, overrides)?;
        let hooks = self.resolve_hooks(&user_config, cwd)?;
        Ok(NormalizedConfig::from_layer(user_config, cwd.to_path_buf(), hooks))
    }

    /// Resolve a single hook, whether or not the configuration declares it
    pub fn resolve_hook_in(
        &self,
        cwd: &Path,
        overrides: Option<ConfigLayer>,
        hook: &str,
    ) -> Result<Option<ResolvedHookConfig>> {
        let user_config = self.user_config(cwd, overrides)?;
        let resolver = self.resolver(&user_config, cwd)?;
        resolver.resolve(&user_config, hook)
    }

    /// Discovered file, then environment, then caller overrides
    fn user_config(&self, cwd: &Path, overrides: Option<ConfigLayer>) -> Result<ConfigLayer> {
        let overrides = overrides.unwrap_or_default();
        let search_root = anchored_project_path(&overrides, cwd);

        tracing::trace!("CONFIG LOAD: discovering from {}", search_root.display());
        let discovered = core::load_user_config(&search_root)?;
        let env = core::env_layer()?;
        let user_config = ConfigLayer::layered([discovered, env, overrides]);
        tracing::trace!("CONFIG LOAD: merged layers {:?}", user_config);
        Ok(user_config)
    }

    fn resolver(&self, user_config: &ConfigLayer, cwd: &Path) -> Result<HookResolver<'_, S>> {
        let locate_from = ConfigLayer {
            project_path: Some(anchored_project_path(user_config, cwd)),
            ..user_config.clone()
        };
        let root = self.locator.locate(&locate_from)?;
        Ok(HookResolver::new(root, user_config.runner.clone(), &self.search))
    }

    fn resolve_hooks(
        &self,
        user_config: &ConfigLayer,
        cwd: &Path,
    ) -> Result<BTreeMap<String, ResolvedHookConfig>> {
        let mut resolved = BTreeMap::new();
        if user_config.hook_names().next().is_none() {
            return Ok(resolved);
        }

        let resolver = self.resolver(user_config, cwd)?;
        for hook in user_config.hook_names() {
            match resolver.resolve(user_config, hook)? {
                Some(config) => {
                    resolved.insert(hook.to_string(), config);
                }
                None => tracing::debug!("Hook '{}' has nothing to run, skipping", hook),
            }
        }

        Ok(resolved)
    }
}

/// `projectPath` joined onto `cwd` (an absolute path replaces it)
fn anchored_project_path(layer: &ConfigLayer, cwd: &Path) -> PathBuf {
    match &layer.project_path {
        Some(path) => cwd.join(path),
        None => cwd.to_path_buf(),
    }
}

/// Build the normalized configuration with the default collaborators
pub fn get_config(overrides: Option<ConfigLayer>) -> Result<NormalizedConfig> {
    <ConfigMerger>::default().get_config(overrides)
}
