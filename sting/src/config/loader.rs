//! Configuration file bootstrap and loading.
//!
//! This module writes the default configuration file when none exists and
//! reads an existing file into a [`PartialConfig`] layer.

use crate::config::schema::{Config, PartialConfig};
use crate::error::{Error, Result};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Reads and bootstraps configuration files.
///
/// # Examples
///
/// ```no_run
/// use sting::config::{Config, ConfigLoader};
/// use std::path::Path;
///
/// let path = Path::new("stingoftheviper.yaml");
/// ConfigLoader::bootstrap(path, &Config::default()).unwrap();
/// let layer = ConfigLoader::load_file(path).unwrap();
/// assert!(!layer.is_empty());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Write `config` to `path` unless a file already exists there.
    ///
    /// Returns `true` if a file was written. An existing file is never
    /// touched, even if it was created between the check and the write.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialize`] if the configuration cannot be encoded,
    /// or [`Error::Io`] if the file cannot be created or written.
    pub fn bootstrap(path: &Path, config: &Config) -> Result<bool> {
        if path.exists() {
            log::debug!("Configuration file {} exists; skipping bootstrap", path.display());
            return Ok(false);
        }

        let contents = serde_yaml::to_string(config).map_err(Error::Serialize)?;

        let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
            Err(source) => {
                return Err(Error::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        file.write_all(contents.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
            })?;

        log::info!("Wrote default configuration to {}", path.display());
        Ok(true)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty file (or one holding only comments) is an empty layer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if no file exists at `path`,
    /// [`Error::Io`] if it cannot be read, and [`Error::Parse`] if its
    /// content is not valid YAML for the schema.
    pub fn load_file(path: &Path) -> Result<PartialConfig> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::ConfigNotFound {
                    path: path.to_path_buf(),
                })
            }
            Err(source) => {
                return Err(Error::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        Self::parse(path, &contents)
    }

    /// Load a file layer, treating a missing file as no layer at all.
    ///
    /// # Errors
    ///
    /// Same as [`ConfigLoader::load_file`], except that a missing file is
    /// `Ok(None)`.
    pub fn load_optional(path: &Path) -> Result<Option<PartialConfig>> {
        match Self::load_file(path) {
            Ok(layer) => Ok(Some(layer)),
            Err(e) if e.is_not_found() => {
                log::debug!("{e}; continuing without a file layer");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn parse(path: &Path, contents: &str) -> Result<PartialConfig> {
        if contents.trim().is_empty() {
            return Ok(PartialConfig::default());
        }

        let parse_error = |source| Error::Parse {
            path: path.to_path_buf(),
            source,
        };

        let value: serde_yaml::Value = serde_yaml::from_str(contents).map_err(parse_error)?;
        if value.is_null() {
            return Ok(PartialConfig::default());
        }

        serde_yaml::from_value(value).map_err(parse_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigKey;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = ConfigLoader::load_file(&temp_dir.path().join("missing.yaml"));
        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_load_optional_missing_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let result = ConfigLoader::load_optional(&temp_dir.path().join("missing.yaml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.yaml");
        fs::write(&config_path, "invalid: yaml: syntax:").unwrap();

        let result = ConfigLoader::load_file(&config_path);
        assert!(result.unwrap_err().is_parse_error());
    }

    #[test]
    fn test_load_optional_propagates_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.yaml");
        fs::write(&config_path, "sns: [unterminated").unwrap();

        let result = ConfigLoader::load_optional(&config_path);
        assert!(result.unwrap_err().is_parse_error());
    }

    #[test]
    fn test_load_wrong_shape_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("list.yaml");
        fs::write(&config_path, "- sns\n- sqs\n").unwrap();

        let result = ConfigLoader::load_file(&config_path);
        assert!(result.unwrap_err().is_parse_error());
    }

    #[test]
    fn test_load_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("stingoftheviper.yaml");
        fs::write(&config_path, "s3bucket:\n  name: file-bucket\n").unwrap();

        let layer = ConfigLoader::load_file(&config_path).unwrap();
        assert_eq!(layer.get(ConfigKey::S3BucketName), Some("file-bucket"));
        assert_eq!(layer.keys().len(), 1);
    }

    #[test]
    fn test_load_numeric_and_boolean_leaves() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("stingoftheviper.yaml");
        fs::write(
            &config_path,
            "s3bucket:\n  name: 2024\nclient:\n  push-frequency: 60\nsns:\n  region: false\n",
        )
        .unwrap();

        let layer = ConfigLoader::load_file(&config_path).unwrap();
        assert_eq!(layer.get(ConfigKey::S3BucketName), Some("2024"));
        assert_eq!(layer.get(ConfigKey::ClientPushFrequency), Some("60"));
        assert_eq!(layer.get(ConfigKey::SnsRegion), Some("false"));
    }

    #[test]
    fn test_load_sequence_leaf_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("stingoftheviper.yaml");
        fs::write(&config_path, "s3bucket:\n  name: [a, b]\n").unwrap();

        let err = ConfigLoader::load_file(&config_path).unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_load_empty_file_is_empty_layer() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("empty.yaml");
        fs::write(&config_path, "\n").unwrap();

        let layer = ConfigLoader::load_file(&config_path).unwrap();
        assert!(layer.is_empty());
    }

    #[test]
    fn test_load_comment_only_file_is_empty_layer() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("comments.yaml");
        fs::write(&config_path, "# nothing configured yet\n").unwrap();

        let layer = ConfigLoader::load_file(&config_path).unwrap();
        assert!(layer.is_empty());
    }

    #[test]
    fn test_bootstrap_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("stingoftheviper.yaml");

        let written = ConfigLoader::bootstrap(&config_path, &Config::default()).unwrap();
        assert!(written);

        let contents = fs::read_to_string(&config_path).unwrap();
        let parsed: Config = serde_yaml::from_str(&contents).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_bootstrap_never_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("stingoftheviper.yaml");
        fs::write(&config_path, "sns:\n  region: eu-west-1\n").unwrap();

        let written = ConfigLoader::bootstrap(&config_path, &Config::default()).unwrap();
        assert!(!written);

        let contents = fs::read_to_string(&config_path).unwrap();
        assert_eq!(contents, "sns:\n  region: eu-west-1\n");
    }

    #[test]
    fn test_bootstrap_into_missing_directory_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("no").join("such").join("dir.yaml");

        let result = ConfigLoader::bootstrap(&config_path, &Config::default());
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
