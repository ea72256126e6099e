//! Error types for hook resolution
//!
//! Resolution errors are fatal for the whole configuration build. Validation
//! problems are reported as a boolean by [`crate::config::validate_config`]
//! and never show up here.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a normalized configuration
#[derive(Error, Debug)]
pub enum HookError {
    /// Both `command` and `file` were given for one hook
    #[error("hook '{hook}': only one of `file` or `command` can be provided")]
    AmbiguousHookSource { hook: String },

    /// Options were declared for a hook but nothing runnable was found
    #[error("hook '{hook}': no command, file, or discoverable script was found")]
    HookFileNotFound { hook: String },

    /// No git repository above the starting directory
    #[error("no git repository found from {}", start.display())]
    RepositoryRootNotFound {
        start: PathBuf,
        #[source]
        source: git2::Error,
    },

    /// A discovered configuration file could not be parsed
    #[error("failed to parse config file {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: Box<figment::Error>,
    },

    /// A discovery pattern could not be compiled
    #[error("invalid discovery pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for resolution operations
pub type Result<T> = std::result::Result<T, HookError>;
