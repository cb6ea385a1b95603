//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options, one flag per configuration key, and
//! subcommands.

use crate::commands::{CompletionsCommand, ShowCommand, ValidateCommand};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use sting::config::schema::{
    DEFAULT_CONFIG_FILENAME, DEFAULT_PUSH_FREQUENCY, DEFAULT_REGION, DEFAULT_S3BUCKET_NAME,
    DEFAULT_S3BUCKET_S3PATH, DEFAULT_SNS_TOPIC_ARN, DEFAULT_SQS_QUEUE_ARN, DEFAULT_SQS_QUEUE_URL,
};

/// Bind flags, environment variables, and a YAML file into one configuration.
#[derive(Parser)]
#[command(name = "stingoftheviper")]
#[command(
    version,
    about = "Cobra and Viper together at last",
    long_about = "Resolve configuration from built-in defaults, a YAML file, STING_* environment \
                  variables, and command-line flags, in increasing order of precedence"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Configuration file (written with defaults if missing)
    #[arg(long, value_name = "PATH", global = true, default_value = DEFAULT_CONFIG_FILENAME)]
    pub config: PathBuf,

    /// Registers the per-key flags; explicit values are read from the
    /// matches by [`crate::utils::explicit_flags`].
    #[command(flatten)]
    pub flags: ConfigFlags,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// One flag per configuration key.
///
/// Each flag's id equals its long name, which is the key's
/// [`sting::ConfigKey::flag_name`], so explicitly-set flags can be collected
/// generically from the parsed matches.
#[derive(Args, Debug, Clone)]
pub struct ConfigFlags {
    /// SNS topic ARN
    #[arg(
        long = "sns-topic-arn",
        id = "sns-topic-arn",
        value_name = "ARN",
        global = true,
        default_value = DEFAULT_SNS_TOPIC_ARN
    )]
    pub sns_topic_arn: String,

    /// SNS region
    #[arg(
        long = "sns-region",
        id = "sns-region",
        value_name = "REGION",
        global = true,
        default_value = DEFAULT_REGION
    )]
    pub sns_region: String,

    /// SQS region
    #[arg(
        long = "sqs-region",
        id = "sqs-region",
        value_name = "REGION",
        global = true,
        default_value = DEFAULT_REGION
    )]
    pub sqs_region: String,

    /// SQS queue ARN
    #[arg(
        long = "sqs-queue-arn",
        id = "sqs-queue-arn",
        value_name = "ARN",
        global = true,
        default_value = DEFAULT_SQS_QUEUE_ARN
    )]
    pub sqs_queue_arn: String,

    /// SQS queue URL
    #[arg(
        long = "sqs-queue-url",
        id = "sqs-queue-url",
        value_name = "URL",
        global = true,
        default_value = DEFAULT_SQS_QUEUE_URL
    )]
    pub sqs_queue_url: String,

    /// S3 bucket region
    #[arg(
        long = "s3bucket-region",
        id = "s3bucket-region",
        value_name = "REGION",
        global = true,
        default_value = DEFAULT_REGION
    )]
    pub s3bucket_region: String,

    /// S3 bucket name
    #[arg(
        long = "s3bucket-name",
        id = "s3bucket-name",
        value_name = "NAME",
        global = true,
        default_value = DEFAULT_S3BUCKET_NAME
    )]
    pub s3bucket_name: String,

    /// Object path inside the S3 bucket
    #[arg(
        long = "s3bucket-s3path",
        id = "s3bucket-s3path",
        value_name = "PATH",
        global = true,
        default_value = DEFAULT_S3BUCKET_S3PATH
    )]
    pub s3bucket_s3path: String,

    /// How often the client pushes (e.g. 30s, 1m, 1h30m)
    #[arg(
        long = "client-push-frequency",
        id = "client-push-frequency",
        value_name = "DURATION",
        global = true,
        default_value = DEFAULT_PUSH_FREQUENCY
    )]
    pub client_push_frequency: String,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Show every resolved value and where it came from
    Show(ShowCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
