//! Environment variable handling for configuration overrides.
//!
//! Every recognized key can be overridden by `{PREFIX}_{KEY}`, where the key
//! name is derived by [`ConfigKey::env_var`]. Values are taken verbatim.

use crate::config::keys::ConfigKey;
use crate::config::schema::PartialConfig;
use std::env;

/// Collects environment variable overrides into a configuration layer.
///
/// # Examples
///
/// ```
/// use sting::config::{ConfigKey, EnvironmentConfig};
///
/// let lookup = |name: &str| (name == "STING_CLIENT_PUSH_FREQUENCY").then(|| "5m".to_string());
/// let layer = EnvironmentConfig::collect_with("STING", lookup);
/// assert_eq!(layer.get(ConfigKey::ClientPushFrequency), Some("5m"));
/// assert_eq!(layer.keys().len(), 1);
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Collect overrides from the process environment.
    ///
    /// Variables that are unset, or whose value is not valid Unicode, leave
    /// their key absent from the layer.
    #[must_use]
    pub fn collect(prefix: &str) -> PartialConfig {
        Self::collect_with(prefix, |name| env::var(name).ok())
    }

    /// Collect overrides through an arbitrary lookup function.
    #[must_use]
    pub fn collect_with<F>(prefix: &str, lookup: F) -> PartialConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut layer = PartialConfig::default();

        for key in ConfigKey::ALL {
            let name = key.env_var(prefix);
            if let Some(value) = lookup(&name) {
                log::debug!("{name} overrides {key}");
                layer.set(key, value);
            }
        }

        layer
    }

    /// Names of every environment variable consulted under `prefix`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sting::config::EnvironmentConfig;
    ///
    /// let names = EnvironmentConfig::variable_names("STING");
    /// assert!(names.contains(&"STING_SNS_REGION".to_string()));
    /// ```
    #[must_use]
    pub fn variable_names(prefix: &str) -> Vec<String> {
        ConfigKey::ALL.iter().map(|key| key.env_var(prefix)).collect()
    }
}
