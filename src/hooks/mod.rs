//! Hook resolution
//!
//! Turns the options declared for a hook into the command the installed git
//! hook will run. Sources are checked in a fixed order:
//!
//! 1. `command` is used verbatim
//! 2. `file` is run through the package runner with arguments forwarded
//! 3. otherwise `<hook>.*` is looked up under `scripts/hooks`,
//!    `scripts/src/hooks` and `packages/scripts/src/hooks`
//!
//! Giving both `command` and `file` is an error. A hook that was declared
//! with options but has nothing to run is an error too, while a bare
//! declaration with nothing to run is simply skipped.

pub mod discovery;
pub mod runner;

pub use runner::{DEFAULT_RUNNER, ScriptRunner};

use crate::config::{ConfigLayer, HookSource, ResolvedHookConfig};
use crate::error::{HookError, Result};
use crate::shared::FileSearch;
use std::path::PathBuf;

/// Resolves hooks against one repository root
pub struct HookResolver<'a, S: FileSearch + ?Sized> {
    root: PathBuf,
    runner: ScriptRunner,
    search: &'a S,
}

impl<'a, S: FileSearch + ?Sized> HookResolver<'a, S> {
    pub fn new(root: PathBuf, runner: Option<String>, search: &'a S) -> Self {
        Self {
            root,
            runner: runner.map(ScriptRunner::new).unwrap_or_default(),
            search,
        }
    }

    /// Resolve `hook` as declared in `config`
    ///
    /// Returns `Ok(None)` when the hook has no options and no script can be
    /// discovered for it.
    pub fn resolve(&self, config: &ConfigLayer, hook: &str) -> Result<Option<ResolvedHookConfig>> {
        let options = config.hook_options(hook);
        let source = match options {
            Some(options) => options.source(hook)?,
            None => HookSource::Discover,
        };

        let command = match source {
            HookSource::ExplicitCommand(command) => command,
            HookSource::ScriptFile(file) => {
                if !self.root.join(&file).exists() {
                    tracing::warn!(
                        "Hook '{}' points at {} which does not exist yet",
                        hook,
                        file.display()
                    );
                }
                self.runner.command_for(&file)
            }
            HookSource::Discover => {
                match discovery::discover_script(self.search, &self.root, hook)? {
                    Some(script) => self.runner.command_for(&script),
                    None if options.is_none() => return Ok(None),
                    None => {
                        return Err(HookError::HookFileNotFound {
                            hook: hook.to_string(),
                        });
                    }
                }
            }
        };

        tracing::debug!("Resolved hook '{}' to `{}`", hook, command);
        Ok(Some(ResolvedHookConfig::new(command, options)))
    }
}
