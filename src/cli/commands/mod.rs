//! Command implementations for the hookset CLI
//!
//! Each command is organized into its own module.

pub mod config;
pub mod hooks;
