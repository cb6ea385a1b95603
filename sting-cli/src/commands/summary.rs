//! The root action: resolve and print the headline values.

use crate::error::CliError;
use crate::utils::{resolve_configuration, GlobalOptions};
use sting::Config;

/// Print the push frequency, bucket name, and SNS region.
pub struct SummaryCommand;

impl SummaryCommand {
    /// Execute the root action.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolved = resolve_configuration(global)?;
        print!("{}", render(&resolved.config));
        Ok(())
    }
}

/// Render the summary lines for `config`.
pub fn render(config: &Config) -> String {
    format!(
        "Push frequency: {}\nS3 bucket name: {}\nSNS region: {}\n",
        config.client.push_frequency, config.s3bucket.name, config.sns.region
    )
}
