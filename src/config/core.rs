use super::{ConfigLayer, smart_load};
use crate::error::{HookError, Result};
use figment::Figment;
use figment::providers::Env;
use std::path::{Path, PathBuf};

/// Config file names, in the order they are tried inside each directory
pub const CONFIG_FILE_NAMES: &[&str] = &[
    "hookset.toml",
    "hookset.yaml",
    "hookset.yml",
    "hookset.json",
    ".hooksetrc",
    ".hooksetrc.toml",
    ".hooksetrc.yaml",
    ".hooksetrc.yml",
    ".hooksetrc.json",
];

/// Prefix for environment overrides (`HOOKSET_NO_CI=false`)
pub const ENV_PREFIX: &str = "HOOKSET_";

const ENV_KEYS: &[&str] = &["no_ci", "ci_only", "preserve_unused", "project_path", "runner"];

/// Find a configuration file in `start` or any of its parent directories
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}

/// Load the user configuration discovered from `start`
///
/// A missing file yields an empty layer. A file that exists but does not
/// parse is an error.
pub fn load_user_config(start: &Path) -> Result<ConfigLayer> {
    match find_config_file(start) {
        Some(path) => load_from_file(&path),
        None => {
            tracing::debug!("No config file found from {}", start.display());
            Ok(ConfigLayer::default())
        }
    }
}

/// Load a single configuration file, picking the format from its name
pub fn load_from_file(path: &Path) -> Result<ConfigLayer> {
    tracing::debug!("Loading config file {}", path.display());

    if !has_content(&std::fs::read_to_string(path)?) {
        tracing::debug!("Config file {} has no settings", path.display());
        return Ok(ConfigLayer::default());
    }

    Figment::from(smart_load::auto(path))
        .extract()
        .map_err(|source| HookError::ConfigParse {
            path: path.to_path_buf(),
            source: Box::new(source),
        })
}

/// Whether a config file holds anything besides blank lines and `#` comments
///
/// YAML parses such a file to a null document, which is not a map.
fn has_content(contents: &str) -> bool {
    contents.lines().map(str::trim).any(|line| !line.is_empty() && !line.starts_with('#'))
}

/// Read `HOOKSET_*` environment overrides into a layer
pub fn env_layer() -> Result<ConfigLayer> {
    Figment::from(Env::prefixed(ENV_PREFIX).only(ENV_KEYS))
        .extract()
        .map_err(|source| HookError::ConfigParse {
            path: PathBuf::from(format!("{ENV_PREFIX}*")),
            source: Box::new(source),
        })
}
