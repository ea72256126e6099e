//! # hookset - declarative git hooks
//!
//! hookset lets a project say "run command X on hook Y" in a configuration
//! file instead of hand-writing scripts in `.git/hooks`. This crate is the
//! resolution engine: it merges defaults, the discovered config file, the
//! environment and caller overrides, then resolves every declared hook to
//! the exact command string the installed hook should run.
//!
//! ## Configuration
//!
//! ```yaml
//! # hookset.yaml
//! hooks:
//!   pre-commit:
//!     command: cargo fmt --check
//!   pre-push:
//!     file: scripts/verify.ts
//!     noCi: false
//!   commit-msg:        # discovered from scripts/hooks/commit-msg.*
//! ```
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use hookset::config::{get_config, validate_config};
//!
//! let config = get_config(None)?;
//! if !validate_config(&config) {
//!     eprintln!("unknown hook names in configuration");
//! }
//! for (hook, resolved) in &config.hooks {
//!     println!("{hook}: {}", resolved.command);
//! }
//! # Ok::<(), hookset::HookError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod hooks;
pub mod shared;

pub use cli::{Cli, Output};
pub use config::{NormalizedConfig, ResolvedHookConfig, get_config, validate_config};
pub use error::HookError;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
