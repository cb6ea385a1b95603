//! Configuration schema definitions.
//!
//! This module defines the resolved configuration structure, its partial
//! counterpart used for the file and flag layers, and the built-in defaults.

use crate::config::keys::ConfigKey;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;

/// Base name of the configuration file in the working directory.
pub const DEFAULT_CONFIG_FILENAME: &str = "stingoftheviper.yaml";

/// Prefix for environment variable overrides.
pub const DEFAULT_ENV_PREFIX: &str = "STING";

/// Default SNS topic ARN.
pub const DEFAULT_SNS_TOPIC_ARN: &str = "arn:aws:sns:us-west-2:123456789012:example-topic";

/// Default region for every AWS section.
pub const DEFAULT_REGION: &str = "us-west-2";

/// Default SQS queue ARN.
pub const DEFAULT_SQS_QUEUE_ARN: &str = "arn:aws:sqs:us-west-2:123456789012";

/// Default SQS queue URL.
pub const DEFAULT_SQS_QUEUE_URL: &str = "https://sqs.us-west-2.amazonaws.com/193048895737/somename";

/// Default S3 bucket name.
pub const DEFAULT_S3BUCKET_NAME: &str = "mybucket";

/// Default object path inside the bucket.
pub const DEFAULT_S3BUCKET_S3PATH: &str = "stingoftheviper.yaml";

/// Default client push frequency.
pub const DEFAULT_PUSH_FREQUENCY: &str = "1m";

/// Complete, resolved configuration.
///
/// Every field always holds a value; [`Config::default`] supplies the
/// built-in baseline that the other layers override.
///
/// # Examples
///
/// ```
/// use sting::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.client.push_frequency, "1m");
/// assert_eq!(config.s3bucket.name, "mybucket");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// SNS topic settings.
    pub sns: SnsConfig,

    /// SQS queue settings.
    pub sqs: SqsConfig,

    /// S3 bucket settings.
    pub s3bucket: S3BucketConfig,

    /// Client behaviour.
    pub client: ClientConfig,
}

/// SNS topic settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SnsConfig {
    /// Topic ARN.
    pub topic_arn: String,
    /// Topic region.
    pub region: String,
}

/// SQS queue settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SqsConfig {
    /// Queue region.
    pub region: String,
    /// Queue ARN.
    pub queue_arn: String,
    /// Queue URL.
    pub queue_url: String,
}

/// S3 bucket settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct S3BucketConfig {
    /// Bucket region.
    pub region: String,
    /// Bucket name.
    pub name: String,
    /// Object path inside the bucket.
    pub s3path: String,
}

/// Client behaviour.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ClientConfig {
    /// How often the client pushes, as a duration literal such as `1m`.
    pub push_frequency: String,
}

impl ClientConfig {
    /// Parse `push_frequency` into a [`Duration`].
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a duration literal.
    ///
    /// # Examples
    ///
    /// ```
    /// use sting::config::Config;
    /// use std::time::Duration;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.client.push_interval().unwrap(), Duration::from_secs(60));
    /// ```
    pub fn push_interval(&self) -> Result<Duration, humantime::DurationError> {
        humantime::parse_duration(self.push_frequency.trim())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sns: SnsConfig {
                topic_arn: DEFAULT_SNS_TOPIC_ARN.to_string(),
                region: DEFAULT_REGION.to_string(),
            },
            sqs: SqsConfig {
                region: DEFAULT_REGION.to_string(),
                queue_arn: DEFAULT_SQS_QUEUE_ARN.to_string(),
                queue_url: DEFAULT_SQS_QUEUE_URL.to_string(),
            },
            s3bucket: S3BucketConfig {
                region: DEFAULT_REGION.to_string(),
                name: DEFAULT_S3BUCKET_NAME.to_string(),
                s3path: DEFAULT_S3BUCKET_S3PATH.to_string(),
            },
            client: ClientConfig {
                push_frequency: DEFAULT_PUSH_FREQUENCY.to_string(),
            },
        }
    }
}

impl Config {
    /// Read the value stored for `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sting::config::{Config, ConfigKey};
    ///
    /// let config = Config::default();
    /// assert_eq!(config.get(ConfigKey::SnsRegion), "us-west-2");
    /// ```
    #[must_use]
    pub fn get(&self, key: ConfigKey) -> &str {
        match key {
            ConfigKey::SnsTopicArn => &self.sns.topic_arn,
            ConfigKey::SnsRegion => &self.sns.region,
            ConfigKey::SqsRegion => &self.sqs.region,
            ConfigKey::SqsQueueArn => &self.sqs.queue_arn,
            ConfigKey::SqsQueueUrl => &self.sqs.queue_url,
            ConfigKey::S3BucketRegion => &self.s3bucket.region,
            ConfigKey::S3BucketName => &self.s3bucket.name,
            ConfigKey::S3BucketS3Path => &self.s3bucket.s3path,
            ConfigKey::ClientPushFrequency => &self.client.push_frequency,
        }
    }

    /// Overwrite the value stored for `key`.
    pub fn set(&mut self, key: ConfigKey, value: impl Into<String>) {
        *self.slot_mut(key) = value.into();
    }

    fn slot_mut(&mut self, key: ConfigKey) -> &mut String {
        match key {
            ConfigKey::SnsTopicArn => &mut self.sns.topic_arn,
            ConfigKey::SnsRegion => &mut self.sns.region,
            ConfigKey::SqsRegion => &mut self.sqs.region,
            ConfigKey::SqsQueueArn => &mut self.sqs.queue_arn,
            ConfigKey::SqsQueueUrl => &mut self.sqs.queue_url,
            ConfigKey::S3BucketRegion => &mut self.s3bucket.region,
            ConfigKey::S3BucketName => &mut self.s3bucket.name,
            ConfigKey::S3BucketS3Path => &mut self.s3bucket.s3path,
            ConfigKey::ClientPushFrequency => &mut self.client.push_frequency,
        }
    }
}

/// A configuration layer in which any key may be absent.
///
/// The file layer deserializes into this shape, and the CLI collects its
/// explicitly-set flags into it. Absent sections and absent keys are both
/// `None`.
///
/// # Examples
///
/// ```
/// use sting::config::{ConfigKey, PartialConfig};
///
/// let layer: PartialConfig = serde_yaml::from_str("s3bucket:\n  name: file-bucket\n").unwrap();
/// assert_eq!(layer.get(ConfigKey::S3BucketName), Some("file-bucket"));
/// assert_eq!(layer.get(ConfigKey::S3BucketRegion), None);
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    /// SNS topic settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sns: Option<PartialSnsConfig>,

    /// SQS queue settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sqs: Option<PartialSqsConfig>,

    /// S3 bucket settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3bucket: Option<PartialS3BucketConfig>,

    /// Client behaviour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<PartialClientConfig>,
}

/// SNS settings with optional leaves.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PartialSnsConfig {
    /// Topic ARN.
    #[serde(
        default,
        deserialize_with = "scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub topic_arn: Option<String>,
    /// Topic region.
    #[serde(
        default,
        deserialize_with = "scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub region: Option<String>,
}

/// SQS settings with optional leaves.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PartialSqsConfig {
    /// Queue region.
    #[serde(
        default,
        deserialize_with = "scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub region: Option<String>,
    /// Queue ARN.
    #[serde(
        default,
        deserialize_with = "scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub queue_arn: Option<String>,
    /// Queue URL.
    #[serde(
        default,
        deserialize_with = "scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub queue_url: Option<String>,
}

/// S3 bucket settings with optional leaves.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PartialS3BucketConfig {
    /// Bucket region.
    #[serde(
        default,
        deserialize_with = "scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub region: Option<String>,
    /// Bucket name.
    #[serde(
        default,
        deserialize_with = "scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    /// Object path inside the bucket.
    #[serde(
        default,
        deserialize_with = "scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub s3path: Option<String>,
}

/// Client settings with optional leaves.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PartialClientConfig {
    /// Push frequency literal.
    #[serde(
        default,
        deserialize_with = "scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub push_frequency: Option<String>,
}

/// Read a leaf as text.
///
/// Numbers and booleans are accepted and keep their YAML spelling, so
/// `name: 2024` reads as `"2024"`. A null leaf provides no value.
/// Sequences, mappings, and tagged values are rejected.
fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_yaml::Value::deserialize(deserializer)? {
        serde_yaml::Value::Null => Ok(None),
        serde_yaml::Value::String(s) => Ok(Some(s)),
        serde_yaml::Value::Number(n) => Ok(Some(n.to_string())),
        serde_yaml::Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(D::Error::custom(format!(
            "expected a scalar value, found {}",
            describe(&other)
        ))),
    }
}

fn describe(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
        _ => "a scalar",
    }
}

impl PartialConfig {
    /// Read the value this layer provides for `key`, if any.
    #[must_use]
    pub fn get(&self, key: ConfigKey) -> Option<&str> {
        let value = match key {
            ConfigKey::SnsTopicArn => self.sns.as_ref()?.topic_arn.as_ref(),
            ConfigKey::SnsRegion => self.sns.as_ref()?.region.as_ref(),
            ConfigKey::SqsRegion => self.sqs.as_ref()?.region.as_ref(),
            ConfigKey::SqsQueueArn => self.sqs.as_ref()?.queue_arn.as_ref(),
            ConfigKey::SqsQueueUrl => self.sqs.as_ref()?.queue_url.as_ref(),
            ConfigKey::S3BucketRegion => self.s3bucket.as_ref()?.region.as_ref(),
            ConfigKey::S3BucketName => self.s3bucket.as_ref()?.name.as_ref(),
            ConfigKey::S3BucketS3Path => self.s3bucket.as_ref()?.s3path.as_ref(),
            ConfigKey::ClientPushFrequency => self.client.as_ref()?.push_frequency.as_ref(),
        };
        value.map(String::as_str)
    }

    /// Provide a value for `key` in this layer, creating its section as needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use sting::config::{ConfigKey, PartialConfig};
    ///
    /// let mut layer = PartialConfig::default();
    /// layer.set(ConfigKey::ClientPushFrequency, "5m");
    /// assert_eq!(layer.get(ConfigKey::ClientPushFrequency), Some("5m"));
    /// ```
    pub fn set(&mut self, key: ConfigKey, value: impl Into<String>) {
        let value = Some(value.into());
        match key {
            ConfigKey::SnsTopicArn => self.sns.get_or_insert_with(Default::default).topic_arn = value,
            ConfigKey::SnsRegion => self.sns.get_or_insert_with(Default::default).region = value,
            ConfigKey::SqsRegion => self.sqs.get_or_insert_with(Default::default).region = value,
            ConfigKey::SqsQueueArn => self.sqs.get_or_insert_with(Default::default).queue_arn = value,
            ConfigKey::SqsQueueUrl => self.sqs.get_or_insert_with(Default::default).queue_url = value,
            ConfigKey::S3BucketRegion => {
                self.s3bucket.get_or_insert_with(Default::default).region = value;
            }
            ConfigKey::S3BucketName => self.s3bucket.get_or_insert_with(Default::default).name = value,
            ConfigKey::S3BucketS3Path => {
                self.s3bucket.get_or_insert_with(Default::default).s3path = value;
            }
            ConfigKey::ClientPushFrequency => {
                self.client.get_or_insert_with(Default::default).push_frequency = value;
            }
        }
    }

    /// Keys this layer provides, in file order.
    #[must_use]
    pub fn keys(&self) -> Vec<ConfigKey> {
        ConfigKey::ALL
            .into_iter()
            .filter(|key| self.get(*key).is_some())
            .collect()
    }

    /// Whether this layer provides no value at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys().is_empty()
    }
}

impl From<&Config> for PartialConfig {
    fn from(config: &Config) -> Self {
        let mut layer = Self::default();
        for key in ConfigKey::ALL {
            layer.set(key, config.get(key));
        }
        layer
    }
}
