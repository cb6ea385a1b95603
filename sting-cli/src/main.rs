//! Main entry point for the stingoftheviper CLI.
//!
//! Resolves one configuration from built-in defaults, a YAML file,
//! `STING_*` environment variables, and explicit flags, then:
//! - with no subcommand, prints the headline values
//! - `show`: prints every value with its source
//! - `validate`: checks a configuration file
//! - `completions`: generates shell completion scripts

use clap::{CommandFactory, FromArgMatches};
use sting_cli::cli::{self, Cli};
use sting_cli::commands::SummaryCommand;
use sting_cli::utils::{self, GlobalOptions};

fn main() {
    // Parse CLI arguments, keeping the matches to tell explicit flags from defaults
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    // Initialize logging based on verbosity
    let _level = sting::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config_path: cli.config,
        flags: utils::explicit_flags(&matches),
    };

    // Execute the command
    let result = match cli.command {
        None => SummaryCommand.execute(&global),
        Some(cli::Command::Show(cmd)) => cmd.execute(&global),
        Some(cli::Command::Validate(cmd)) => cmd.execute(&global),
        Some(cli::Command::Completions(cmd)) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
