//! Command construction for script-backed hooks

use std::path::Path;

/// Runner used when the configuration does not name one
pub const DEFAULT_RUNNER: &str = "pnpm exec node-ts --resolve-pkg-from-file";

/// Wraps a script path into a command run through the package runner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptRunner {
    prefix: String,
}

impl Default for ScriptRunner {
    fn default() -> Self {
        Self::new(DEFAULT_RUNNER)
    }
}

impl ScriptRunner {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Command running `script` with every hook argument forwarded
    pub fn command_for(&self, script: &Path) -> String {
        let script = script.to_string_lossy();
        format!("{} {} \"$@\"", self.prefix, shell_words::quote(&script))
    }
}
