//! Configuration merging and precedence handling.
//!
//! Layers are applied per field: a layer overrides exactly the keys it
//! provides and leaves every other field as resolved so far.

use crate::config::keys::ConfigKey;
use crate::config::schema::{Config, PartialConfig};

/// Merges configuration layers according to precedence rules.
///
/// # Examples
///
/// ```
/// use sting::config::{Config, ConfigKey, ConfigMerger, PartialConfig};
///
/// let mut file = PartialConfig::default();
/// file.set(ConfigKey::S3BucketName, "file-bucket");
///
/// let mut flags = PartialConfig::default();
/// flags.set(ConfigKey::S3BucketName, "custom-bucket");
///
/// let config = ConfigMerger::merge(Config::default(), &[file, flags]);
/// assert_eq!(config.s3bucket.name, "custom-bucket");
/// assert_eq!(config.sns.region, "us-west-2");
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge layers onto a base configuration.
    ///
    /// Layers should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(base: Config, layers: &[PartialConfig]) -> Config {
        let mut result = base;

        for layer in layers {
            Self::merge_into(&mut result, layer);
        }

        result
    }

    /// Merge a layer into target (layer overwrites target where set).
    ///
    /// Returns the keys that the layer provided, in file order.
    pub fn merge_into(target: &mut Config, layer: &PartialConfig) -> Vec<ConfigKey> {
        let mut applied = Vec::new();

        for key in ConfigKey::ALL {
            if let Some(value) = layer.get(key) {
                target.set(key, value);
                applied.push(key);
            }
        }

        applied
    }
}
