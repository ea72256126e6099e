//! Configuration command implementations
//!
//! Commands for inspecting and validating the merged configuration.

use crate::cli::{ConfigCommands, Output};
use crate::config::{ConfigLayer, NormalizedConfig, get_config, invalid_keys};
use anyhow::{Context, Result, bail};

/// Execute config commands
pub fn execute(cmd: ConfigCommands, overrides: ConfigLayer, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show { format } => show(&format, overrides, output),
        ConfigCommands::Validate => validate(overrides, output),
    }
}

fn show(format: &str, overrides: ConfigLayer, output: &Output) -> Result<()> {
    let config = get_config(Some(overrides)).context("Failed to load configuration")?;
    output.raw(&render(&config, format)?);
    Ok(())
}

/// Serialize the configuration in the requested format
pub fn render(config: &NormalizedConfig, format: &str) -> Result<String> {
    let rendered = match format.to_lowercase().as_str() {
        "json" => serde_json::to_string_pretty(config)?,
        "yaml" | "yml" => serde_yml::to_string(config)?,
        "toml" => toml::to_string_pretty(config)?,
        _ => bail!("Unsupported format: {}. Use json, yaml, or toml", format),
    };
    Ok(rendered.trim_end().to_string())
}

fn validate(overrides: ConfigLayer, output: &Output) -> Result<()> {
    output.header("Validating Configuration");

    let config = get_config(Some(overrides)).context("Failed to load configuration")?;
    let invalid = invalid_keys(&config);

    if invalid.is_empty() {
        output.success(&format!(
            "Configuration is valid ({} hook{})",
            config.hooks.len(),
            if config.hooks.len() == 1 { "" } else { "s" }
        ));
        return Ok(());
    }

    for key in &invalid {
        output.error(&format!("'{}' is not a git hook or a known option", key));
    }
    bail!("Configuration has {} invalid hook name(s)", invalid.len())
}
