//! Build script for sting-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Configuration flags as (long name, value name, help, default).
///
/// IMPORTANT: Keep this list synchronized with `ConfigFlags` in src/cli.rs.
const CONFIG_FLAGS: &[(&str, &str, &str, &str)] = &[
    (
        "sns-topic-arn",
        "ARN",
        "SNS topic ARN",
        "arn:aws:sns:us-west-2:123456789012:example-topic",
    ),
    ("sns-region", "REGION", "SNS region", "us-west-2"),
    ("sqs-region", "REGION", "SQS region", "us-west-2"),
    (
        "sqs-queue-arn",
        "ARN",
        "SQS queue ARN",
        "arn:aws:sqs:us-west-2:123456789012",
    ),
    (
        "sqs-queue-url",
        "URL",
        "SQS queue URL",
        "https://sqs.us-west-2.amazonaws.com/193048895737/somename",
    ),
    ("s3bucket-region", "REGION", "S3 bucket region", "us-west-2"),
    ("s3bucket-name", "NAME", "S3 bucket name", "mybucket"),
    (
        "s3bucket-s3path",
        "PATH",
        "Object path inside the S3 bucket",
        "stingoftheviper.yaml",
    ),
    (
        "client-push-frequency",
        "DURATION",
        "How often the client pushes (e.g. 30s, 1m, 1h30m)",
        "1m",
    ),
];

/// Build the CLI command structure for man page generation.
fn build_cli() -> Command {
    let config_args = CONFIG_FLAGS.iter().map(|(long, value, help, default)| {
        Arg::new(*long)
            .long(*long)
            .value_name(*value)
            .help(*help)
            .default_value(*default)
            .global(true)
    });

    Command::new("stingoftheviper")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Cobra and Viper together at last")
        .long_about(
            "Resolve configuration from built-in defaults, a YAML file, STING_* environment \
             variables, and command-line flags, in increasing order of precedence",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration file (written with defaults if missing)")
                .value_name("PATH")
                .default_value("stingoftheviper.yaml")
                .global(true),
        )
        .args(config_args)
        .subcommands(vec![
            Command::new("show")
                .about("Show every resolved value and where it came from")
                .long_about("Print each configuration key, its value, and the layer that set it"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Parse and check a configuration file without layering anything over it"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("stingoftheviper.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
