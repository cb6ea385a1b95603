//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `summary`: the root action, printing the headline values
//! - `show`: print every resolved value with its source
//! - `validate`: check a configuration file without resolving
//! - `completions`: generate shell completion scripts

pub mod completions;
pub mod show;
pub mod summary;
pub mod validate;

pub use completions::CompletionsCommand;
pub use show::{ShowCommand, ShowFormat};
pub use summary::SummaryCommand;
pub use validate::ValidateCommand;
