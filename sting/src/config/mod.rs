//! Configuration system for sting.
//!
//! This module resolves one [`Config`] from four precedence layers:
//! - built-in defaults
//! - a YAML configuration file (written with the defaults if missing)
//! - `STING_*` environment variables
//! - command-line flags the user set explicitly
//!
//! # Configuration Precedence
//!
//! Configuration is merged per field with the following precedence
//! (highest to lowest):
//!
//! 1. Explicit flags (passed to [`ConfigResolver::resolve`])
//! 2. Environment variables (`STING_*`)
//! 3. The configuration file (`stingoftheviper.yaml`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! Resolving with a flag override:
//!
//! ```
//! use sting::config::{ConfigKey, ConfigResolver, PartialConfig};
//!
//! let dir = tempfile::tempdir().unwrap();
//! std::fs::write(dir.path().join("stingoftheviper.yaml"), "s3bucket:\n  name: file-bucket\n")
//!     .unwrap();
//!
//! let mut flags = PartialConfig::default();
//! flags.set(ConfigKey::S3BucketName, "custom-bucket");
//!
//! let resolved = ConfigResolver::new(dir.path().join("stingoftheviper.yaml"))
//!     .skip_env()
//!     .resolve(&flags)
//!     .unwrap();
//!
//! assert_eq!(resolved.config.s3bucket.name, "custom-bucket");
//! assert_eq!(resolved.config.client.push_frequency, "1m");
//! ```
//!
//! Building the flag layer from key names:
//!
//! ```
//! use sting::config::{ConfigKey, PartialConfig};
//!
//! let mut flags = PartialConfig::default();
//! let key = ConfigKey::from_flag_name("sns-region").unwrap();
//! flags.set(key, "eu-west-1");
//! assert_eq!(flags.keys(), vec![ConfigKey::SnsRegion]);
//! ```

pub mod environment;
pub mod keys;
pub mod loader;
pub mod merger;
pub mod resolver;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at module root
pub use environment::EnvironmentConfig;
pub use keys::ConfigKey;
pub use loader::ConfigLoader;
pub use merger::ConfigMerger;
pub use resolver::{resolve, ConfigResolver, Resolved, ValueSource};
pub use schema::{
    ClientConfig, Config, PartialClientConfig, PartialConfig, PartialS3BucketConfig,
    PartialSnsConfig, PartialSqsConfig, S3BucketConfig, SnsConfig, SqsConfig,
    DEFAULT_CONFIG_FILENAME, DEFAULT_ENV_PREFIX,
};
pub use validator::ConfigValidator;
