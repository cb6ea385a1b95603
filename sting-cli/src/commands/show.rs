//! Show command implementation.
//!
//! Prints every resolved configuration value together with the layer that
//! supplied it, as a table, YAML, or JSON.

use crate::error::CliError;
use crate::utils::{resolve_configuration, GlobalOptions};
use clap::{Args, ValueEnum};
use std::io::Write;
use sting::{ConfigKey, Resolved};

/// Show every resolved value and where it came from.
#[derive(Args)]
pub struct ShowCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: ShowFormat,
}

/// Output format for the show command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ShowFormat {
    /// Tab-separated key, value, and source
    Text,
    /// The resolved configuration as a YAML document
    Yaml,
    /// Keys mapped to their value and source
    Json,
}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolved = resolve_configuration(global)?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(render(&resolved, self.format)?.as_bytes())?;

        Ok(())
    }
}

/// Render `resolved` in `format`.
pub fn render(resolved: &Resolved, format: ShowFormat) -> Result<String, CliError> {
    match format {
        ShowFormat::Text => Ok(format_as_text(resolved)),
        ShowFormat::Yaml => serde_yaml::to_string(&resolved.config)
            .map_err(|e| CliError::Output(e.to_string())),
        ShowFormat::Json => format_as_json(resolved),
    }
}

fn format_as_text(resolved: &Resolved) -> String {
    let mut out = String::from("KEY\tVALUE\tSOURCE\n");
    for key in ConfigKey::ALL {
        out.push_str(&format!(
            "{}\t{}\t{}\n",
            key,
            resolved.config.get(key),
            resolved.source(key)
        ));
    }
    out
}

fn format_as_json(resolved: &Resolved) -> Result<String, CliError> {
    let entries: serde_json::Map<String, serde_json::Value> = ConfigKey::ALL
        .into_iter()
        .map(|key| {
            (
                key.dotted().to_string(),
                serde_json::json!({
                    "value": resolved.config.get(key),
                    "source": resolved.source(key).to_string(),
                }),
            )
        })
        .collect();

    let mut out = serde_json::to_string_pretty(&serde_json::Value::Object(entries))
        .map_err(|e| CliError::Output(e.to_string()))?;
    out.push('\n');
    Ok(out)
}
