#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # sting
//!
//! Binds command-line flags, environment variables, and a YAML configuration
//! file into a single configuration structure.
//!
//! ## Core Types
//!
//! - [`Config`]: the resolved settings, always fully populated
//! - [`ConfigResolver`]: layers defaults, file, environment, and flags
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use sting::{ConfigResolver, PartialConfig};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let resolved = ConfigResolver::new(dir.path().join("stingoftheviper.yaml"))
//!     .with_env_lookup(|_| None)
//!     .resolve(&PartialConfig::default())
//!     .unwrap();
//!
//! assert!(resolved.bootstrapped);
//! assert_eq!(resolved.config.sns.region, "us-west-2");
//! ```

pub mod config;
pub mod error;
pub mod logging;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigKey, ConfigResolver, PartialConfig, Resolved, ValueSource};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
