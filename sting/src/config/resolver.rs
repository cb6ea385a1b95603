//! The configuration precedence resolver.
//!
//! Resolution seeds a [`Config`] with defaults, bootstraps the configuration
//! file if it is missing, then applies the file, environment, and explicit
//! flag layers in that order. Each layer overrides only the keys it provides.

use crate::config::environment::EnvironmentConfig;
use crate::config::keys::ConfigKey;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::{Config, PartialConfig, DEFAULT_ENV_PREFIX};
use crate::config::validator::ConfigValidator;
use crate::error::Result;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

type EnvLookup = Box<dyn Fn(&str) -> Option<String>>;

/// Where a resolved value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSource {
    /// The built-in default.
    Default,
    /// The configuration file at this path.
    File(PathBuf),
    /// The named environment variable.
    Environment(String),
    /// An explicitly-set command-line flag.
    Flag,
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::File(path) => write!(f, "file {}", path.display()),
            Self::Environment(name) => write!(f, "env {name}"),
            Self::Flag => write!(f, "flag"),
        }
    }
}

static DEFAULT_SOURCE: ValueSource = ValueSource::Default;

/// The outcome of a resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// The resolved configuration.
    pub config: Config,
    /// The source of every key's final value.
    pub sources: BTreeMap<ConfigKey, ValueSource>,
    /// Whether this resolution wrote the default configuration file.
    pub bootstrapped: bool,
}

impl Resolved {
    /// The source of `key`'s final value.
    #[must_use]
    pub fn source(&self, key: ConfigKey) -> &ValueSource {
        self.sources.get(&key).unwrap_or(&DEFAULT_SOURCE)
    }

    /// Consume the outcome, keeping only the configuration.
    #[must_use]
    pub fn into_config(self) -> Config {
        self.config
    }
}

/// Builder-style resolver for the four precedence layers.
///
/// Precedence, highest first: explicit flags, environment variables, the
/// configuration file, built-in defaults.
///
/// # Examples
///
/// ```
/// use sting::config::{ConfigKey, ConfigResolver, PartialConfig, ValueSource};
///
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("stingoftheviper.yaml");
///
/// let resolved = ConfigResolver::new(&path)
///     .with_env_lookup(|name| {
///         (name == "STING_CLIENT_PUSH_FREQUENCY").then(|| "5m".to_string())
///     })
///     .resolve(&PartialConfig::default())
///     .unwrap();
///
/// assert!(resolved.bootstrapped);
/// assert_eq!(resolved.config.client.push_frequency, "5m");
/// assert_eq!(
///     resolved.source(ConfigKey::ClientPushFrequency),
///     &ValueSource::Environment("STING_CLIENT_PUSH_FREQUENCY".to_string())
/// );
/// ```
pub struct ConfigResolver {
    config_path: PathBuf,
    env_prefix: String,
    defaults: Config,
    env_lookup: Option<EnvLookup>,
    skip_bootstrap: bool,
    skip_env: bool,
}

impl ConfigResolver {
    /// Create a resolver reading (and bootstrapping) the file at `config_path`.
    #[must_use]
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
            defaults: Config::default(),
            env_lookup: None,
            skip_bootstrap: false,
            skip_env: false,
        }
    }

    /// Replace the built-in defaults used to seed resolution and bootstrap.
    #[must_use]
    pub fn with_defaults(mut self, defaults: Config) -> Self {
        self.defaults = defaults;
        self
    }

    /// Set the environment variable prefix (default `STING`).
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Read environment variables through `lookup` instead of the process
    /// environment.
    #[must_use]
    pub fn with_env_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + 'static,
    {
        self.env_lookup = Some(Box::new(lookup));
        self
    }

    /// Never write a default file.
    #[must_use]
    pub fn skip_bootstrap(mut self) -> Self {
        self.skip_bootstrap = true;
        self
    }

    /// Ignore environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// The configuration file path.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// The environment variable prefix.
    #[must_use]
    pub fn env_prefix(&self) -> &str {
        &self.env_prefix
    }

    /// Resolve the configuration, with `flags` holding only the flags the
    /// user set explicitly.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] or [`crate::Error::Serialize`] if
    /// bootstrapping fails, and [`crate::Error::Io`] or
    /// [`crate::Error::Parse`] if the file cannot be loaded. A missing file
    /// is not an error. Values the validator rejects are still applied and
    /// only logged as warnings.
    pub fn resolve(&self, flags: &PartialConfig) -> Result<Resolved> {
        let mut config = self.defaults.clone();
        let mut sources: BTreeMap<ConfigKey, ValueSource> = ConfigKey::ALL
            .into_iter()
            .map(|key| (key, ValueSource::Default))
            .collect();

        let bootstrapped = if self.skip_bootstrap {
            false
        } else {
            ConfigLoader::bootstrap(&self.config_path, &config)?
        };

        if let Some(file_layer) = ConfigLoader::load_optional(&self.config_path)? {
            for key in ConfigMerger::merge_into(&mut config, &file_layer) {
                sources.insert(key, ValueSource::File(self.config_path.clone()));
            }
        }

        if !self.skip_env {
            let env_layer = match &self.env_lookup {
                Some(lookup) => {
                    EnvironmentConfig::collect_with(&self.env_prefix, |name: &str| lookup(name))
                }
                None => EnvironmentConfig::collect(&self.env_prefix),
            };
            for key in ConfigMerger::merge_into(&mut config, &env_layer) {
                sources.insert(key, ValueSource::Environment(key.env_var(&self.env_prefix)));
            }
        }

        for key in ConfigMerger::merge_into(&mut config, flags) {
            log::debug!("--{} overrides {key}", key.flag_name());
            sources.insert(key, ValueSource::Flag);
        }

        for (key, problem) in ConfigValidator::problems(&config) {
            log::warn!("{problem} (from {})", sources[&key]);
        }

        Ok(Resolved {
            config,
            sources,
            bootstrapped,
        })
    }
}

/// Resolve a configuration in one call.
///
/// Equivalent to building a [`ConfigResolver`] for `config_path` with the
/// given defaults and prefix, reading the process environment.
///
/// # Errors
///
/// See [`ConfigResolver::resolve`].
pub fn resolve(
    defaults: Config,
    config_path: &Path,
    env_prefix: &str,
    flags: &PartialConfig,
) -> Result<Resolved> {
    ConfigResolver::new(config_path)
        .with_defaults(defaults)
        .with_env_prefix(env_prefix)
        .resolve(flags)
}
