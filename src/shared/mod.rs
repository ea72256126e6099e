//! Shared utilities used across hookset modules

pub mod glob;

pub use glob::{FileSearch, GlobSearch};
