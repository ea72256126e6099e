use super::NormalizedConfig;
use crate::git::hooks::GIT_HOOK_NAMES;
use lazy_static::lazy_static;
use std::collections::HashSet;

/// Non-hook keys that may appear inside the `hooks` map
///
/// Only a [`NormalizedConfig`] built in code can carry one of these. In a
/// config file every `hooks` entry must be a hook options table, so
/// `hooks: { preserveUnused: true }` fails to load with
/// [`HookError::ConfigParse`](crate::error::HookError::ConfigParse).
const HOOK_MAP_OPTIONS: &[&str] = &["preserveUnused"];

lazy_static! {
    static ref VALID_GIT_HOOKS: HashSet<&'static str> = GIT_HOOK_NAMES.iter().copied().collect();
    static ref VALID_OPTIONS: HashSet<&'static str> = HOOK_MAP_OPTIONS.iter().copied().collect();
}

/// The legal hook names
pub fn valid_git_hooks() -> &'static HashSet<&'static str> {
    &VALID_GIT_HOOKS
}

/// The legal non-hook option names
pub fn valid_options() -> &'static HashSet<&'static str> {
    &VALID_OPTIONS
}

/// Whether `key` may appear in the `hooks` map
pub fn is_valid_key(key: &str) -> bool {
    VALID_GIT_HOOKS.contains(key) || VALID_OPTIONS.contains(key)
}

/// Check that every key in `config.hooks` is a git hook or a known option
///
/// Stops at the first unknown key.
pub fn validate_config(config: &NormalizedConfig) -> bool {
    config.hooks.keys().all(|key| is_valid_key(key))
}

/// All keys of `config.hooks` that would fail [`validate_config`]
pub fn invalid_keys(config: &NormalizedConfig) -> Vec<&str> {
    config
        .hooks
        .keys()
        .map(String::as_str)
        .filter(|key| !is_valid_key(key))
        .collect()
}
