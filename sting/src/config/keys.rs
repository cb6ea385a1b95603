//! Configuration keys and the name transforms shared by every layer.
//!
//! Each setting has one canonical dotted key (`sns.topic-arn`), which is the
//! path used in the YAML file. Flag names and environment variable names are
//! derived from it by pure string transforms, never spelled out per field.

use std::fmt;

/// Separator between a prefix and the derived key in environment names.
const ENV_SEPARATOR: char = '_';

/// One recognized configuration setting.
///
/// Variants are ordered as they appear in the configuration file, which is
/// also the order used when reporting resolved values.
///
/// # Examples
///
/// ```
/// use sting::config::ConfigKey;
///
/// let key = ConfigKey::SnsTopicArn;
/// assert_eq!(key.dotted(), "sns.topic-arn");
/// assert_eq!(key.flag_name(), "sns-topic-arn");
/// assert_eq!(key.env_var("STING"), "STING_SNS_TOPIC_ARN");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigKey {
    /// `sns.topic-arn`
    SnsTopicArn,
    /// `sns.region`
    SnsRegion,
    /// `sqs.region`
    SqsRegion,
    /// `sqs.queue-arn`
    SqsQueueArn,
    /// `sqs.queue-url`
    SqsQueueUrl,
    /// `s3bucket.region`
    S3BucketRegion,
    /// `s3bucket.name`
    S3BucketName,
    /// `s3bucket.s3path`
    S3BucketS3Path,
    /// `client.push-frequency`
    ClientPushFrequency,
}

impl ConfigKey {
    /// Every key, in file order.
    pub const ALL: [Self; 9] = [
        Self::SnsTopicArn,
        Self::SnsRegion,
        Self::SqsRegion,
        Self::SqsQueueArn,
        Self::SqsQueueUrl,
        Self::S3BucketRegion,
        Self::S3BucketName,
        Self::S3BucketS3Path,
        Self::ClientPushFrequency,
    ];

    /// The dotted path of this key in the configuration file.
    #[must_use]
    pub const fn dotted(self) -> &'static str {
        match self {
            Self::SnsTopicArn => "sns.topic-arn",
            Self::SnsRegion => "sns.region",
            Self::SqsRegion => "sqs.region",
            Self::SqsQueueArn => "sqs.queue-arn",
            Self::SqsQueueUrl => "sqs.queue-url",
            Self::S3BucketRegion => "s3bucket.region",
            Self::S3BucketName => "s3bucket.name",
            Self::S3BucketS3Path => "s3bucket.s3path",
            Self::ClientPushFrequency => "client.push-frequency",
        }
    }

    /// The long flag name (without leading dashes) for this key.
    #[must_use]
    pub fn flag_name(self) -> String {
        flag_name(self.dotted())
    }

    /// The environment variable consulted for this key under `prefix`.
    #[must_use]
    pub fn env_var(self, prefix: &str) -> String {
        env_var_name(prefix, self.dotted())
    }

    /// Look up a key by its dotted file path.
    ///
    /// # Examples
    ///
    /// ```
    /// use sting::config::ConfigKey;
    ///
    /// assert_eq!(ConfigKey::from_dotted("s3bucket.name"), Some(ConfigKey::S3BucketName));
    /// assert_eq!(ConfigKey::from_dotted("s3bucket.size"), None);
    /// ```
    #[must_use]
    pub fn from_dotted(dotted: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.dotted() == dotted)
    }

    /// Look up a key by its long flag name.
    ///
    /// # Examples
    ///
    /// ```
    /// use sting::config::ConfigKey;
    ///
    /// assert_eq!(
    ///     ConfigKey::from_flag_name("client-push-frequency"),
    ///     Some(ConfigKey::ClientPushFrequency)
    /// );
    /// ```
    #[must_use]
    pub fn from_flag_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.flag_name() == name)
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dotted())
    }
}

/// Derive a flag name from a dotted key: `.` becomes `-`.
///
/// # Examples
///
/// ```
/// use sting::config::keys::flag_name;
///
/// assert_eq!(flag_name("sqs.queue-url"), "sqs-queue-url");
/// ```
#[must_use]
pub fn flag_name(dotted: &str) -> String {
    dotted.replace('.', "-")
}

/// Derive an environment variable name from a prefix and a dotted key.
///
/// The key has `.` and `-` replaced by `_` and is upper-cased; the prefix is
/// upper-cased and joined with `_`.
///
/// # Examples
///
/// ```
/// use sting::config::keys::env_var_name;
///
/// assert_eq!(env_var_name("STING", "client.push-frequency"), "STING_CLIENT_PUSH_FREQUENCY");
/// assert_eq!(env_var_name("sting", "sns.region"), "STING_SNS_REGION");
/// ```
#[must_use]
pub fn env_var_name(prefix: &str, dotted: &str) -> String {
    let key: String = dotted
        .chars()
        .map(|c| match c {
            '.' | '-' => ENV_SEPARATOR,
            other => other.to_ascii_uppercase(),
        })
        .collect();

    if prefix.is_empty() {
        key
    } else {
        format!("{}{ENV_SEPARATOR}{key}", prefix.to_ascii_uppercase())
    }
}
