//! Git hooks command implementations

use crate::cli::{HooksCommands, Output};
use crate::config::{ConfigLayer, ConfigMerger, ResolvedHookConfig, get_config, is_valid_key};
use anyhow::{Context, Result};

/// Execute hooks commands
pub fn execute(cmd: HooksCommands, overrides: ConfigLayer, output: &Output) -> Result<()> {
    match cmd {
        HooksCommands::List => list(overrides, output),
        HooksCommands::Resolve { hook } => resolve(&hook, overrides, output),
    }
}

fn list(overrides: ConfigLayer, output: &Output) -> Result<()> {
    let config = get_config(Some(overrides)).context("Failed to resolve hooks")?;

    output.header("Configured Git Hooks");
    if config.hooks.is_empty() {
        output.info("No hooks configured");
        return Ok(());
    }

    for (name, hook) in &config.hooks {
        if is_valid_key(name) {
            output.success(name);
        } else {
            output.warning(&format!("{} (unknown hook name)", name));
        }
        describe(hook, output);
    }
    output.verbose(&format!("Project path: {}", config.project_path.display()));
    Ok(())
}

fn resolve(hook: &str, overrides: ConfigLayer, output: &Output) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let resolved = <ConfigMerger>::default()
        .resolve_hook_in(&cwd, Some(overrides), hook)
        .with_context(|| format!("Failed to resolve hook '{}'", hook))?;

    match resolved {
        Some(config) => {
            output.success(hook);
            describe(&config, output);
        }
        None => output.info(&format!("Hook '{}' is not configured", hook)),
    }
    Ok(())
}

fn describe(hook: &ResolvedHookConfig, output: &Output) {
    output.table_row("command", &hook.command);
    output.table_row("noCi", &hook.no_ci.to_string());
    output.table_row("ciOnly", &hook.ci_only.to_string());
}
