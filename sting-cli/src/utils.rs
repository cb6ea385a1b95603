//! Utility functions for CLI operations.
//!
//! This module collects the flags the user set explicitly and runs the
//! library resolver with them.

use crate::error::CliError;
use clap::parser::ValueSource;
use clap::ArgMatches;
use std::path::PathBuf;
use sting::{ConfigKey, ConfigResolver, PartialConfig, Resolved};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Configuration file to read, or to create with the defaults.
    pub config_path: PathBuf,

    /// Values of the flags given on the command line, and only those.
    pub flags: PartialConfig,
}

/// Build the flag layer from parsed arguments.
///
/// A flag contributes only when the user typed it. Flags left at their
/// clap default are absent from the returned layer, so they never mask
/// the file or the environment. Flags are global, so every subcommand
/// level is consulted.
pub fn explicit_flags(matches: &ArgMatches) -> PartialConfig {
    let mut layer = PartialConfig::default();
    for key in ConfigKey::ALL {
        if let Some(value) = explicit_value(matches, &key.flag_name()) {
            log::debug!("--{} given on the command line", key.flag_name());
            layer.set(key, value);
        }
    }
    layer
}

// The deepest level that saw the flag wins, so the last occurrence counts.
fn explicit_value(matches: &ArgMatches, id: &str) -> Option<String> {
    let mut found = None;
    let mut current = Some(matches);
    while let Some(level) = current {
        if level.value_source(id) == Some(ValueSource::CommandLine) {
            found = level.get_one::<String>(id).cloned();
        }
        current = level.subcommand().map(|(_, sub)| sub);
    }
    found
}

/// Resolve the effective configuration for a command.
///
/// Bootstraps the configuration file when it is missing, then layers the
/// file, `STING_*` environment variables, and explicit flags over the
/// defaults.
pub fn resolve_configuration(global: &GlobalOptions) -> Result<Resolved, CliError> {
    log::info!("Using configuration file {}", global.config_path.display());

    ConfigResolver::new(&global.config_path)
        .resolve(&global.flags)
        .map_err(CliError::from)
}
