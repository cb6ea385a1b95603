//! Configuration validation.
//!
//! Every setting should be non-empty, and the push frequency should be a
//! duration literal. Resolution only reports violations; the `validate`
//! command treats them as failures.

use crate::config::keys::ConfigKey;
use crate::config::schema::{Config, PartialConfig};
use crate::error::{Error, Result};

/// Validates resolved configurations and individual layers.
///
/// # Examples
///
/// ```
/// use sting::config::{Config, ConfigValidator};
///
/// let mut config = Config::default();
/// assert!(ConfigValidator::problems(&config).is_empty());
///
/// config.client.push_frequency = "soon".to_string();
/// assert_eq!(ConfigValidator::problems(&config).len(), 1);
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Every rejected value of a complete configuration, in file order.
    #[must_use]
    pub fn problems(config: &Config) -> Vec<(ConfigKey, Error)> {
        ConfigKey::ALL
            .into_iter()
            .filter_map(|key| {
                Self::validate_value(key, config.get(key))
                    .err()
                    .map(|e| (key, e))
            })
            .collect()
    }

    /// Validate only the keys a layer provides.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for the first invalid key in file order.
    pub fn validate_layer(layer: &PartialConfig) -> Result<()> {
        for key in layer.keys() {
            if let Some(value) = layer.get(key) {
                Self::validate_value(key, value)?;
            }
        }
        Ok(())
    }

    /// Validate one value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the value is blank, or if `key` is
    /// the push frequency and the value is not a duration literal.
    ///
    /// # Examples
    ///
    /// ```
    /// use sting::config::{ConfigKey, ConfigValidator};
    ///
    /// assert!(ConfigValidator::validate_value(ConfigKey::ClientPushFrequency, "5m").is_ok());
    /// assert!(ConfigValidator::validate_value(ConfigKey::ClientPushFrequency, "soon").is_err());
    /// assert!(ConfigValidator::validate_value(ConfigKey::S3BucketName, "  ").is_err());
    /// ```
    pub fn validate_value(key: ConfigKey, value: &str) -> Result<()> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(Error::Validation {
                field: key.dotted().into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        if trimmed.contains('\0') {
            return Err(Error::Validation {
                field: key.dotted().into(),
                message: "Cannot contain null bytes".into(),
            });
        }

        if key == ConfigKey::ClientPushFrequency {
            humantime::parse_duration(trimmed).map_err(|e| Error::Validation {
                field: key.dotted().into(),
                message: format!("Invalid duration '{value}': {e}"),
            })?;
        }

        Ok(())
    }
}
